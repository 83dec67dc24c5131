use crate::output::{print_json, print_table};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ArchetypeSubcommand {
    /// Show the classified archetype
    Show,
}

pub fn run(root: &Path, subcmd: ArchetypeSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ArchetypeSubcommand::Show => show(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let app = super::open_app(root)?;
    let Some(archetype) = app.archetype()? else {
        println!("No archetype yet. Run 'neuroflow quiz submit' first.");
        return Ok(());
    };

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
    } else {
        println!("No sport suggestions on record.");
    }
    Ok(())
}
