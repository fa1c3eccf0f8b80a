use anyhow::{Result, bail};
use clap::Args;
use skillsphere_application::Directory;
use skillsphere_core::profile::{ProfileDraft, ProfileUpdate};

use super::browse::print_detail;

/// Profile form fields. On edit, omitted fields are left unchanged and an
/// empty value clears an optional field.
#[derive(Args, Debug, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    /// Skill name from the catalog; repeat for several
    #[arg(long = "skill")]
    pub skills: Vec<String>,
}

pub async fn create(directory: &Directory, fields: ProfileFields) -> Result<()> {
    let skills = directory.profiles().resolve_skills(&fields.skills).await?;
    let draft = ProfileDraft {
        name: fields.name,
        title: fields.title,
        bio: fields.bio,
        location: fields.location,
        avatar: fields.avatar,
        skills: Some(skills),
        github: fields.github,
        linkedin: fields.linkedin,
        website: fields.website,
    };

    let profile = directory.profiles().create_for_current_user(draft).await?;
    println!("Profile {} created.", profile.id);
    println!();
    print_detail(&profile);
    Ok(())
}

pub async fn edit(directory: &Directory, fields: ProfileFields) -> Result<()> {
    let Some(current) = directory.profiles().my_profile().await? else {
        bail!("No profile yet. Create one with `skillsphere profile create`.");
    };

    let skills = if fields.skills.is_empty() {
        None
    } else {
        Some(directory.profiles().resolve_skills(&fields.skills).await?)
    };
    let update = ProfileUpdate {
        name: fields.name,
        title: fields.title,
        bio: fields.bio,
        location: fields.location,
        avatar: fields.avatar,
        skills,
        github: fields.github,
        linkedin: fields.linkedin,
        website: fields.website,
    };
    if update.is_empty() {
        bail!("Nothing to change.");
    }

    let profile = directory.profiles().update(&current.id, update).await?;
    println!("Profile {} updated.", profile.id);
    println!();
    print_detail(&profile);
    Ok(())
}
