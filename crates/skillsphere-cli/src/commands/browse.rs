use anyhow::{Result, bail};
use skillsphere_application::Directory;
use skillsphere_core::profile::Profile;
use skillsphere_core::search::ProfileFilters;

pub async fn skills(directory: &Directory) -> Result<()> {
    for skill in directory.profiles().list_skills().await? {
        println!("{:>3}  {}", skill.id, skill.name);
    }
    Ok(())
}

pub async fn profiles(directory: &Directory) -> Result<()> {
    let all = directory.profiles().get_all().await?;
    print_summaries(&all);
    Ok(())
}

pub async fn show(directory: &Directory, id: &str) -> Result<()> {
    let Some(profile) = directory.profiles().get_by_id(id).await? else {
        bail!("Profile not found: '{}'", id);
    };
    print_detail(&profile);
    Ok(())
}

pub async fn search(
    directory: &Directory,
    skill: Option<String>,
    location: Option<String>,
    query: Option<String>,
) -> Result<()> {
    let filters = ProfileFilters {
        skill,
        location,
        search: query,
    };
    let results = directory.profiles().search(&filters).await?;
    if results.is_empty() {
        println!("No profiles match.");
    } else {
        print_summaries(&results);
    }
    Ok(())
}

pub(crate) fn print_summaries(profiles: &[Profile]) {
    for profile in profiles {
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        println!(
            "{:>3}  {} - {} [{}]{}",
            profile.id,
            profile.name,
            profile.title,
            skills.join(", "),
            profile
                .location
                .as_deref()
                .map(|l| format!(" ({})", l))
                .unwrap_or_default()
        );
    }
}

pub(crate) fn print_detail(profile: &Profile) {
    println!("{} - {}", profile.name, profile.title);
    if let Some(location) = &profile.location {
        println!("Location: {}", location);
    }
    println!();
    println!("{}", profile.bio);
    println!();
    if !profile.skills.is_empty() {
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        println!("Skills:   {}", skills.join(", "));
    }
    for (label, link) in [
        ("GitHub", &profile.github),
        ("LinkedIn", &profile.linkedin),
        ("Website", &profile.website),
    ] {
        if let Some(link) = link {
            println!("{:<9} {}", format!("{}:", label), link);
        }
    }
    println!("Updated:  {}", profile.updated_at.format("%Y-%m-%d %H:%M UTC"));
}
