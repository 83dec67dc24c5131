mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    archetype::ArchetypeSubcommand, calendar::CalendarSubcommand, config::ConfigSubcommand,
    journey::JourneySubcommand, quiz::QuizSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "neuroflow",
    about = "Habit-formation coach — quiz, archetype, four-step journeys, and focus sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Profile directory (default: ~/.neuroflow)
    #[arg(long, global = true, env = "NEUROFLOW_HOME")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the profile directory and acknowledge first run
    Init,

    /// Take the compatibility quiz
    Quiz {
        #[command(subcommand)]
        subcommand: QuizSubcommand,
    },

    /// Inspect the classified archetype
    Archetype {
        #[command(subcommand)]
        subcommand: ArchetypeSubcommand,
    },

    /// Manage the four-step onboarding journey
    Journey {
        #[command(subcommand)]
        subcommand: JourneySubcommand,
    },

    /// Ask the habit coach for help with the current step
    Chat {
        /// Message to send
        #[arg(required = true)]
        message: Vec<String>,

        /// Latitude for nearby-place grounding (requires --lng)
        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        /// Longitude for nearby-place grounding (requires --lat)
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
    },

    /// Run the 10-minute focus session countdown
    Session,

    /// Export a scheduled micro-goal session
    Calendar {
        #[command(subcommand)]
        subcommand: CalendarSubcommand,
    },

    /// Inspect and modify collaborator settings
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Discard the archetype and journey (keeps settings)
    Reset,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = root::resolve_root(cli.root.as_deref()).and_then(|root| match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Quiz { subcommand } => cmd::quiz::run(&root, subcommand, cli.json),
        Commands::Archetype { subcommand } => cmd::archetype::run(&root, subcommand, cli.json),
        Commands::Journey { subcommand } => cmd::journey::run(&root, subcommand, cli.json),
        Commands::Chat { message, lat, lng } => {
            cmd::chat::run(&root, &message.join(" "), lat.zip(lng), cli.json)
        }
        Commands::Session => cmd::session::run(&root),
        Commands::Calendar { subcommand } => cmd::calendar::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Reset => cmd::reset::run(&root, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
