//! Demo users and profiles.
//!
//! Loaded at startup when `storage.seed_demo_data` is set, so a fresh run has
//! something to browse and search. Every demo account uses
//! [`DEMO_PASSWORD`].

use chrono::{DateTime, Duration, Utc};
use skillsphere_core::profile::{Profile, ProfileDraft};
use skillsphere_core::skill::{Skill, default_skill_catalog};
use skillsphere_core::user::{User, UserAccount};

pub const DEMO_PASSWORD: &str = "password123";

struct DemoPerson {
    username: &'static str,
    name: &'static str,
    title: &'static str,
    bio: &'static str,
    location: Option<&'static str>,
    skills: &'static [&'static str],
    github: Option<&'static str>,
}

const PEOPLE: &[DemoPerson] = &[
    DemoPerson {
        username: "ada",
        name: "Ada Lovelace",
        title: "Systems Programmer",
        bio: "Writes the first program for every new engine she meets.",
        location: Some("London"),
        skills: &["Rust", "Python"],
        github: Some("https://github.com/ada"),
    },
    DemoPerson {
        username: "grace",
        name: "Grace Hopper",
        title: "Compiler Engineer",
        bio: "Builds compilers and hunts down bugs, literal or otherwise.",
        location: Some("New York"),
        skills: &["Java", "SQL", "PostgreSQL"],
        github: None,
    },
    DemoPerson {
        username: "alan",
        name: "Alan Turing",
        title: "Machine Learning Researcher",
        bio: "Interested in whether machines can think, and in breaking codes.",
        location: Some("Manchester"),
        skills: &["Python", "Machine Learning"],
        github: None,
    },
    DemoPerson {
        username: "margaret",
        name: "Margaret Hamilton",
        title: "Software Engineering Lead",
        bio: "Flight software, asynchronous executives and priority displays.",
        location: Some("Boston"),
        skills: &["Go", "Docker", "Kubernetes", "DevOps"],
        github: None,
    },
    DemoPerson {
        username: "tim",
        name: "Tim Berners-Lee",
        title: "Web Platform Engineer",
        bio: "Hypertext, browsers and open standards.",
        location: None,
        skills: &["JavaScript", "TypeScript", "React", "GraphQL"],
        github: None,
    },
];

/// Demo accounts, ids "1".."N".
pub fn demo_accounts() -> Vec<UserAccount> {
    PEOPLE
        .iter()
        .enumerate()
        .map(|(index, person)| UserAccount {
            user: User {
                id: (index + 1).to_string(),
                username: person.username.to_string(),
                email: format!("{}@example.com", person.username),
                token: None,
            },
            password: DEMO_PASSWORD.to_string(),
        })
        .collect()
}

/// One profile per demo account, owned by the matching user id.
pub fn demo_profiles() -> Vec<Profile> {
    demo_profiles_at(Utc::now())
}

fn demo_profiles_at(now: DateTime<Utc>) -> Vec<Profile> {
    let catalog = default_skill_catalog();
    PEOPLE
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let id = (index + 1).to_string();
            let mut draft = ProfileDraft::new(person.name, person.title, person.bio)
                .with_skills(lookup_skills(&catalog, person.skills));
            draft.location = person.location.map(str::to_string);
            draft.github = person.github.map(str::to_string);

            // Stagger creation so the records look like they arrived over time
            let created = now - Duration::days((PEOPLE.len() - index) as i64);
            draft.into_profile(id.clone(), id, created)
        })
        .collect()
}

fn lookup_skills(catalog: &[Skill], names: &[&str]) -> Vec<Skill> {
    names
        .iter()
        .filter_map(|name| catalog.iter().find(|skill| skill.name == *name).cloned())
        .collect()
}
