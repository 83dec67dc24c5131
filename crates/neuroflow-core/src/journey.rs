use crate::error::{NeuroflowError, Result};
use crate::types::{StepKind, StepOutcome, StepStatus};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub status: StepStatus,
}

/// A step as produced by the generation collaborator, before hydration.
/// Deliberately carries no id or status: the collaborator's output is not
/// trusted for id or ordering integrity.
#[derive(Debug, Clone)]
pub struct GeneratedStep {
    pub title: String,
    pub description: String,
    pub kind: StepKind,
}

// ---------------------------------------------------------------------------
// Journey
// ---------------------------------------------------------------------------

/// The ordered four-step onboarding checklist for one chosen sport.
///
/// Invariant: ids are the contiguous sequence 1..=4 in the fixed kind order
/// equipment, location, trigger, micro-goal. The lowest-id step that is not
/// completed/skipped is the frontier and carries status `current`; every
/// step above the frontier is `locked`. Holds after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    pub sport: String,
    pub steps: Vec<Step>,
}

pub const STEP_COUNT: usize = 4;

impl Journey {
    /// Hydrate a journey from collaborator output.
    ///
    /// Requires exactly [`STEP_COUNT`] steps whose kinds appear in the
    /// fixed order; anything else fails closed with no partial journey.
    /// Ids are assigned 1..=4 from position, step 1 becomes `current`,
    /// the rest `locked`.
    pub fn from_generated(sport: impl Into<String>, generated: Vec<GeneratedStep>) -> Result<Self> {
        if generated.len() != STEP_COUNT {
            return Err(NeuroflowError::WrongStepCount {
                expected: STEP_COUNT,
                got: generated.len(),
            });
        }
        for (i, (step, expected)) in generated.iter().zip(StepKind::all()).enumerate() {
            if step.kind != *expected {
                return Err(NeuroflowError::StepOrderMismatch {
                    position: i + 1,
                    expected: expected.to_string(),
                    got: step.kind.to_string(),
                });
            }
        }

        let steps = generated
            .into_iter()
            .enumerate()
            .map(|(i, s)| Step {
                id: i as u32 + 1,
                title: s.title,
                description: s.description,
                kind: s.kind,
                status: if i == 0 {
                    StepStatus::Current
                } else {
                    StepStatus::Locked
                },
            })
            .collect();

        Ok(Self {
            sport: sport.into(),
            steps,
        })
    }

    // ---------------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------------

    /// Close out a step and unlock its successor.
    ///
    /// Sets the target step's status to `outcome`; if the step with
    /// `id + 1` exists and is `locked`, promotes it to `current`. No other
    /// step changes. An unknown `step_id` is a no-op (logged, never
    /// surfaced). Returns whether anything changed.
    pub fn advance(&mut self, step_id: u32, outcome: StepOutcome) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == step_id) else {
            tracing::warn!(step_id, "advance ignored: no such step");
            return false;
        };
        step.status = outcome.into();

        if let Some(next) = self.steps.iter_mut().find(|s| s.id == step_id + 1) {
            if next.status == StepStatus::Locked {
                next.status = StepStatus::Current;
            }
        }
        true
    }

    /// Set a completed/skipped step back to `current` so it can be redone.
    ///
    /// Deliberately does not re-lock any later step: reopening an earlier
    /// step while a later one is also open is an allowed correction flow.
    pub fn reopen(&mut self, step_id: u32) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == step_id) else {
            tracing::warn!(step_id, "reopen ignored: no such step");
            return false;
        };
        if !step.status.is_done() {
            tracing::warn!(step_id, status = %step.status, "reopen ignored: step not done");
            return false;
        }
        step.status = StepStatus::Current;
        true
    }

    // ---------------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------------

    pub fn step(&self, step_id: u32) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// The lowest-id step not yet completed/skipped.
    pub fn frontier(&self) -> Option<&Step> {
        self.steps.iter().find(|s| !s.status.is_done())
    }

    /// True iff every step is completed or skipped.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_done())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
