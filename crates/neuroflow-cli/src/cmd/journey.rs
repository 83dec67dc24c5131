use crate::output::{print_json, print_table};
use clap::Subcommand;
use neuroflow_core::journey::{GeneratedStep, Journey};
use neuroflow_core::types::{StepKind, StepOutcome, StepStatus};
use neuroflow_core::NeuroflowError;
use std::path::Path;

#[derive(Subcommand)]
pub enum JourneySubcommand {
    /// Select a sport and generate its journey (reuses a persisted one)
    Start {
        #[arg(required = true)]
        sport: Vec<String>,
    },
    /// Show the journey board
    Show,
    /// Mark a step as done
    Complete { step_id: u32 },
    /// Skip a step
    Skip { step_id: u32 },
    /// Reopen a completed or skipped step
    Reopen { step_id: u32 },
}

pub fn run(root: &Path, subcmd: JourneySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        JourneySubcommand::Start { sport } => start(root, &sport.join(" "), json),
        JourneySubcommand::Show => show(root, json),
        JourneySubcommand::Complete { step_id } => {
            advance(root, step_id, StepOutcome::Completed, json)
        }
        JourneySubcommand::Skip { step_id } => advance(root, step_id, StepOutcome::Skipped, json),
        JourneySubcommand::Reopen { step_id } => reopen(root, step_id, json),
    }
}

fn start(root: &Path, sport: &str, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;

    // Switching sports discards a stale journey before anything else.
    app.select_sport(sport)?;

    // Generation is skipped entirely when a journey for this sport is
    // already persisted, so the client is only built on the slow path.
    if app.journey()?.is_none() {
        let client = super::build_client(root, &app)?;
        let rt = super::runtime()?;
        let generator = |sport: &str| -> neuroflow_core::Result<Vec<GeneratedStep>> {
            let payloads = rt
                .block_on(client.generate_journey(sport))
                .map_err(|e| NeuroflowError::GenerationFailed(e.to_string()))?;
            payloads
                .into_iter()
                .map(|p| {
                    let kind: StepKind = p.step_type.parse().map_err(|_| {
                        NeuroflowError::GenerationFailed(format!(
                            "unknown step type '{}'",
                            p.step_type
                        ))
                    })?;
                    Ok(GeneratedStep {
                        title: p.title,
                        description: p.description,
                        kind,
                    })
                })
                .collect()
        };
        app.ensure_journey(sport, &generator)?;
    }

    let journey = app.journey()?.ok_or(NeuroflowError::NoJourney)?;
    render(&journey, json)
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let app = super::open_app(root)?;
    let Some(journey) = app.journey()? else {
        println!("No active journey. Run 'neuroflow journey start <sport>'.");
        return Ok(());
    };
    render(&journey, json)
}

fn advance(root: &Path, step_id: u32, outcome: StepOutcome, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;
    let Some(journey) = app.advance_step(step_id, outcome)? else {
        println!("No active journey. Run 'neuroflow journey start <sport>'.");
        return Ok(());
    };
    render(&journey, json)
}

fn reopen(root: &Path, step_id: u32, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;
    let Some(journey) = app.reopen_step(step_id)? else {
        println!("No active journey. Run 'neuroflow journey start <sport>'.");
        return Ok(());
    };
    render(&journey, json)
}

fn render(journey: &Journey, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(journey);
    }

    println!("Journey: {}", journey.sport);
    println!();
    let rows: Vec<Vec<String>> = journey
        .steps
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.kind.label().to_string(),
                s.status.to_string(),
                s.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "KIND", "STATUS", "TITLE"], rows);

    if journey.is_complete() {
        println!();
        println!("All steps closed out — time for action: neuroflow session");
    } else if let Some(step) = journey.frontier() {
        if step.status == StepStatus::Current {
            println!();
            println!("Up next [{}]: {}", step.id, step.title);
            println!("  {}", step.description);
        }
    }
    Ok(())
}
