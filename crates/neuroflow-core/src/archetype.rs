use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// The classification result describing the user's preferred activity
/// profile. Immutable once created; a quiz retake replaces it wholesale.
///
/// `suggested_sports` may legitimately be empty: a degenerate but valid
/// classification the rest of the app tolerates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub description: String,
    pub neurochemistry: String,
    #[serde(rename = "suggestedSports")]
    pub suggested_sports: Vec<String>,
}

impl Archetype {
    pub fn has_suggestions(&self) -> bool {
        !self.suggested_sports.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_match_persisted_shape() {
        let archetype = Archetype {
            name: "Zen Strategist".into(),
            description: "Thrives on calm, deliberate movement.".into(),
            neurochemistry: "Serotonin boost".into(),
            suggested_sports: vec!["Trail Running".into()],
        };
        let json = serde_json::to_value(&archetype).unwrap();
        assert_eq!(json["suggestedSports"][0], "Trail Running");
        assert!(json.get("suggested_sports").is_none());
    }

    #[test]
    fn empty_suggestions_are_valid() {
        let json = r#"{"name":"n","description":"d","neurochemistry":"x","suggestedSports":[]}"#;
        let archetype: Archetype = serde_json::from_str(json).unwrap();
        assert!(!archetype.has_suggestions());
    }

    #[test]
    fn missing_required_field_fails_closed() {
        let json = r#"{"name":"n","description":"d","suggestedSports":[]}"#;
        assert!(serde_json::from_str::<Archetype>(json).is_err());
    }
}
