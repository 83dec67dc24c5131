use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Locked,
    Current,
    Completed,
    Skipped,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Locked => "locked",
            StepStatus::Current => "current",
            StepStatus::Completed => "completed",
            StepStatus::Skipped => "skipped",
        }
    }

    /// A step that no longer blocks the frontier.
    pub fn is_done(self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Skipped)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StepKind
// ---------------------------------------------------------------------------

/// The four logistical step categories, in generation order.
///
/// Declaration order is load-bearing: a generated journey must contain
/// exactly one step of each kind, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Equipment,
    Location,
    Trigger,
    MicroGoal,
}

impl StepKind {
    pub fn all() -> &'static [StepKind] {
        &[
            StepKind::Equipment,
            StepKind::Location,
            StepKind::Trigger,
            StepKind::MicroGoal,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Equipment => "equipment",
            StepKind::Location => "location",
            StepKind::Trigger => "trigger",
            StepKind::MicroGoal => "micro-goal",
        }
    }

    /// Human-facing label for board output.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Equipment => "Equipment",
            StepKind::Location => "Location",
            StepKind::Trigger => "Trigger",
            StepKind::MicroGoal => "Micro-goal",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepKind {
    type Err = crate::error::NeuroflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equipment" => Ok(StepKind::Equipment),
            "location" => Ok(StepKind::Location),
            "trigger" => Ok(StepKind::Trigger),
            "micro-goal" | "micro_goal" => Ok(StepKind::MicroGoal),
            _ => Err(crate::error::NeuroflowError::InvalidStepKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// StepOutcome
// ---------------------------------------------------------------------------

/// The two ways a frontier step can be closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    Completed,
    Skipped,
}

impl From<StepOutcome> for StepStatus {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Completed => StepStatus::Completed,
            StepOutcome::Skipped => StepStatus::Skipped,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepOutcome::Completed => "completed",
            StepOutcome::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// QuizAnswer
// ---------------------------------------------------------------------------

/// One answered question. Ephemeral: collected during quiz traversal and
/// consumed by a single classification call, never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub scenario: String,
    #[serde(rename = "selectedOption")]
    pub selected_option: String,
    pub category: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn step_kind_order_is_fixed() {
        assert_eq!(
            StepKind::all(),
            &[
                StepKind::Equipment,
                StepKind::Location,
                StepKind::Trigger,
                StepKind::MicroGoal,
            ]
        );
    }

    #[test]
    fn step_kind_roundtrip() {
        for kind in StepKind::all() {
            let parsed = StepKind::from_str(kind.as_str()).unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn step_kind_rejects_unknown() {
        assert!(StepKind::from_str("warmup").is_err());
        assert!(StepKind::from_str("").is_err());
    }

    #[test]
    fn step_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&StepKind::MicroGoal).unwrap();
        assert_eq!(json, "\"micro-goal\"");
    }

    #[test]
    fn outcome_maps_to_status() {
        assert_eq!(
            StepStatus::from(StepOutcome::Completed),
            StepStatus::Completed
        );
        assert_eq!(StepStatus::from(StepOutcome::Skipped), StepStatus::Skipped);
    }

    #[test]
    fn done_statuses() {
        assert!(StepStatus::Completed.is_done());
        assert!(StepStatus::Skipped.is_done());
        assert!(!StepStatus::Current.is_done());
        assert!(!StepStatus::Locked.is_done());
    }
}
