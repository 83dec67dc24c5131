use crate::output::print_json;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use neuroflow_core::calendar::SessionEvent;
use neuroflow_core::NeuroflowError;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum CalendarSubcommand {
    /// Write an ICS file scheduling the micro-goal session (09:00–09:30)
    Export {
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Output path (default: ./neuroflow-<sport>-<date>.ics)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcmd: CalendarSubcommand, json: bool) -> anyhow::Result<()> {
    let CalendarSubcommand::Export { date, output } = subcmd;

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{date}': expected YYYY-MM-DD"))?;

    let app = super::open_app(root)?;
    let journey = app.journey()?.ok_or(NeuroflowError::NoJourney)?;

    let event = SessionEvent::new(&journey.sport, date);
    let path = output.unwrap_or_else(|| PathBuf::from(event.default_filename()));
    event
        .write(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "sport": journey.sport,
            "date": date.to_string(),
            "path": path.display().to_string(),
        }));
    }
    println!("Scheduled {} for {} (09:00–09:30).", journey.sport, date);
    println!("Calendar file: {}", path.display());
    Ok(())
}
