use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;
    app.reset()?;
    if json {
        print_json(&serde_json::json!({ "reset": true }))?;
    } else {
        println!("Archetype and journey discarded. Settings kept.");
        println!("Start over with: neuroflow quiz show");
    }
    Ok(())
}
