use crate::output::{print_assistant, print_json};
use neuroflow_ai::{ChatRequest, LatLng};
use std::path::Path;

pub fn run(
    root: &Path,
    message: &str,
    location: Option<(f64, f64)>,
    json: bool,
) -> anyhow::Result<()> {
    let app = super::open_app(root)?;

    // Coach context: the step the user is currently stuck on, when a
    // journey exists. Chat still works without one.
    let (sport, step_context) = match app.journey()? {
        Some(journey) => {
            let context = journey
                .frontier()
                .map(|s| s.description.clone())
                .unwrap_or_else(|| "General context".to_string());
            (journey.sport, context)
        }
        None => ("a new sport".to_string(), "General context".to_string()),
    };

    let client = super::build_client(root, &app)?;
    let rt = super::runtime()?;

    let request = ChatRequest {
        message: message.to_string(),
        sport,
        step_context,
        // Absent when the user did not (or could not) share a location;
        // the request degrades, it does not fail.
        location: location.map(|(latitude, longitude)| LatLng {
            latitude,
            longitude,
        }),
    };

    let reply = rt
        .block_on(client.chat_assistance(&request))
        .map_err(|e| anyhow::anyhow!("assistance failed: {e}"))?;

    if json {
        return print_json(&serde_json::json!({
            "reply": neuroflow_core::markup::render_plain(&reply),
        }));
    }
    print_assistant(&reply);
    Ok(())
}
