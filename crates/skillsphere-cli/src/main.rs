use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use skillsphere_application::Directory;
use skillsphere_infrastructure::ConfigService;

mod commands;

use commands::profile::ProfileFields;

#[derive(Parser)]
#[command(name = "skillsphere")]
#[command(about = "SkillSphere - browse and search skill-tagged profiles", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the skill catalog
    Skills,
    /// List every profile
    Profiles,
    /// Show one profile
    Show {
        /// Profile id
        id: String,
    },
    /// Search profiles by skill, location and free text
    Search {
        /// Skill name (exact, case-insensitive)
        #[arg(long)]
        skill: Option<String>,
        /// Part of the location
        #[arg(long)]
        location: Option<String>,
        /// Text found in name, title, bio or skills
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user and their profile
    Whoami,
    /// Create or edit the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create a profile (name, title and bio are required)
    Create(ProfileFields),
    /// Change fields of your profile
    Edit(ProfileFields),
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config directory")?,
    };
    let config = config_service
        .load()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    tracing::debug!(path = %config_service.path().display(), "Configuration loaded");
    let directory = Directory::with_session_file(&config).await?;

    match cli.command {
        Commands::Skills => commands::browse::skills(&directory).await?,
        Commands::Profiles => commands::browse::profiles(&directory).await?,
        Commands::Show { id } => commands::browse::show(&directory, &id).await?,
        Commands::Search {
            skill,
            location,
            query,
        } => commands::browse::search(&directory, skill, location, query).await?,
        Commands::Register {
            username,
            email,
            password,
        } => commands::account::register(&directory, &username, &email, &password).await?,
        Commands::Login { email, password } => {
            commands::account::login(&directory, &email, &password).await?
        }
        Commands::Logout => commands::account::logout(&directory)?,
        Commands::Whoami => commands::account::whoami(&directory).await?,
        Commands::Profile { action } => match action {
            ProfileAction::Create(fields) => commands::profile::create(&directory, fields).await?,
            ProfileAction::Edit(fields) => commands::profile::edit(&directory, fields).await?,
        },
    }

    Ok(())
}
