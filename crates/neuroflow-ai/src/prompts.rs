//! Prompt and response-schema builders for the three collaborator calls.

use crate::types::ChatRequest;

/// Classification prompt from the ordered `(category, chosen option)` pairs.
pub fn classification(answers: &[(String, String)]) -> String {
    let lines = answers
        .iter()
        .map(|(category, option)| format!("- Context: {category}, Choice: {option}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the following detailed answers from a user's exercise \
         compatibility assessment. The data covers social battery, preferred \
         environment, focus style, aggression-release needs, structure \
         preference, motivation source, pain tolerance, and gear habits.\n\
         \n\
         Based on this profile:\n\
         1. Assign a creative, punchy archetype name (e.g. The Zen Strategist, \
         The Social Gladiator, The Nature Soloist).\n\
         2. Explain the neuroscience/psychology behind it: why does this person \
         drop out of ordinary gyms, and which neurochemicals (dopamine, \
         serotonin, endorphin) are they chasing given these answers?\n\
         3. Suggest 3 specific sports/activities that are a perfect match. \
         Avoid generic suggestions; be specific (e.g. instead of \"running\", \
         suggest \"Trail Running\" or \"Sprints\" based on the answers).\n\
         \n\
         User answers:\n{lines}"
    )
}

/// Response schema for classification: the four required archetype fields.
pub fn classification_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "neurochemistry": { "type": "STRING" },
            "suggestedSports": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["name", "description", "neurochemistry", "suggestedSports"]
    })
}

/// Journey-generation prompt: four logistical steps, training itself last.
pub fn journey(sport: &str) -> String {
    format!(
        "Create a reverse-engineered habit-formation plan for a beginner who \
         wants to start: {sport}.\n\
         Break it into exactly 4 logistical steps, deferring the actual \
         training until the very end.\n\
         \n\
         The steps must be exactly these types, in this order:\n\
         1. equipment (gear needed)\n\
         2. location (where to do it)\n\
         3. trigger (the preparatory action, e.g. laying out the clothes)\n\
         4. micro-goal (a tiny, non-intimidating first goal, e.g. \"just put \
         the shoes on\")\n\
         \n\
         Return a JSON array of steps with a title and description each."
    )
}

/// Response schema for generation: an array of typed steps. The service is
/// asked for ids too, but they are ignored on receipt.
pub fn journey_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "type": {
                    "type": "STRING",
                    "enum": ["equipment", "location", "trigger", "micro-goal"]
                }
            },
            "required": ["id", "title", "description", "type"]
        }
    })
}

/// System instruction framing the habit-coach persona for chat assistance.
pub fn chat_system_instruction(request: &ChatRequest) -> String {
    format!(
        "You are a supportive, neuroscience-aware habit coach called \
         \"NeuroFlow Bot\".\n\
         The user is trying to start the habit of {sport}.\n\
         They are currently stuck on the step: \"{step}\".\n\
         Keep answers short, encouraging, and practical.\n\
         If asked about places, use the maps tool to find real nearby spots.\n\
         If asked about gear, offer both budget and pro options.",
        sport = request.sport,
        step = request.step_context,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_lists_every_answer() {
        let answers = vec![
            ("social".to_string(), "solo".to_string()),
            ("gear".to_string(), "minimalist".to_string()),
        ];
        let prompt = classification(&answers);
        assert!(prompt.contains("- Context: social, Choice: solo"));
        assert!(prompt.contains("- Context: gear, Choice: minimalist"));
    }

    #[test]
    fn journey_prompt_names_sport_and_order() {
        let prompt = journey("Trail Running");
        assert!(prompt.contains("Trail Running"));
        assert!(prompt.contains("exactly 4"));
        assert!(prompt.contains("micro-goal"));
    }

    #[test]
    fn journey_schema_constrains_type_enum() {
        let schema = journey_schema();
        let allowed = schema["items"]["properties"]["type"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(allowed.len(), 4);
        assert_eq!(allowed[0], "equipment");
        assert_eq!(allowed[3], "micro-goal");
    }

    #[test]
    fn chat_instruction_carries_context() {
        let request = ChatRequest {
            message: "where can I swim?".into(),
            sport: "Swimming".into(),
            step_context: "Find a pool with early hours".into(),
            location: None,
        };
        let instruction = chat_system_instruction(&request);
        assert!(instruction.contains("Swimming"));
        assert!(instruction.contains("Find a pool with early hours"));
    }
}
