use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use neuroflow_core::archetype::Archetype;
use neuroflow_core::quiz::{self, QUESTIONS};
use neuroflow_core::NeuroflowError;
use std::path::Path;

#[derive(Subcommand)]
pub enum QuizSubcommand {
    /// Print the question bank
    Show,
    /// Submit answers and classify the archetype
    Submit {
        /// Answer as ID=VALUE (e.g. --answer 1=solo), repeatable
        #[arg(long = "answer", value_name = "ID=VALUE", required = true)]
        answers: Vec<String>,
    },
}

pub fn run(root: &Path, subcmd: QuizSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        QuizSubcommand::Show => show(json),
        QuizSubcommand::Submit { answers } => submit(root, &answers, json),
    }
}

fn show(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<serde_json::Value> = QUESTIONS
            .iter()
            .map(|q| {
                serde_json::json!({
                    "id": q.id,
                    "category": q.category,
                    "scenario": q.scenario,
                    "options": q.options.iter().map(|o| {
                        serde_json::json!({"value": o.value, "text": o.text})
                    }).collect::<Vec<_>>(),
                })
            })
            .collect();
        return print_json(&items);
    }

    for q in QUESTIONS {
        println!("{}. [{}] {}", q.id, q.category, q.scenario);
        for o in q.options {
            println!("     {:<18} {}", o.value, o.text);
        }
        println!();
    }
    println!("Submit with: neuroflow quiz submit --answer 1=solo --answer 2=outdoor_nature ...");
    Ok(())
}

fn submit(root: &Path, raw: &[String], json: bool) -> anyhow::Result<()> {
    let pairs = parse_pairs(raw)?;
    let answers = quiz::resolve_answers(&pairs)?;

    let mut app = super::open_app(root)?;
    let client = super::build_client(root, &app)?;
    let rt = super::runtime()?;

    // One blocking call; no automatic retry, and the stored archetype is
    // untouched until the call has fully succeeded.
    let batch: Vec<(String, String)> = answers
        .iter()
        .map(|a| (a.category.clone(), a.selected_option.clone()))
        .collect();
    let payload = rt
        .block_on(client.classify_archetype(&batch))
        .map_err(|e| NeuroflowError::ClassificationFailed(e.to_string()))?;

    let archetype = Archetype {
        name: payload.name,
        description: payload.description,
        neurochemistry: payload.neurochemistry,
        suggested_sports: payload.suggested_sports,
    };
    app.save_archetype(&archetype)?;

    if json {
        return print_json(&archetype);
    }

    println!("Archetype: {}", archetype.name);
    println!("Neurochemistry: {}", archetype.neurochemistry);
    println!();
    println!("{}", archetype.description);
    println!();
    if archetype.has_suggestions() {
        let rows: Vec<Vec<String>> = archetype
            .suggested_sports
            .iter()
            .map(|s| vec![s.clone()])
            .collect();
        print_table(&["SUGGESTED SPORTS"], rows);
        println!();
        println!("Start one with: neuroflow journey start <sport>");
    } else {
        println!("No sport suggestions this time. Retake the quiz to try again.");
    }
    Ok(())
}

fn parse_pairs(raw: &[String]) -> anyhow::Result<Vec<(u32, String)>> {
    raw.iter()
        .map(|entry| {
            let (id, value) = entry
                .split_once('=')
                .with_context(|| format!("invalid answer '{entry}': expected ID=VALUE"))?;
            let id: u32 = id
                .trim()
                .parse()
                .with_context(|| format!("invalid question id in '{entry}'"))?;
            Ok((id, value.trim().to_string()))
        })
        .collect()
}
