use crate::archetype::Archetype;
use crate::error::{NeuroflowError, Result};
use crate::journey::{GeneratedStep, Journey};
use crate::paths::keys;
use crate::store::Store;
use crate::types::StepOutcome;

// ---------------------------------------------------------------------------
// JourneyGenerator
// ---------------------------------------------------------------------------

/// The journey-generation collaborator boundary. Implementations fetch the
/// four raw steps for a sport; validation and hydration stay on this side.
pub trait JourneyGenerator {
    fn generate(&self, sport: &str) -> Result<Vec<GeneratedStep>>;
}

impl<F> JourneyGenerator for F
where
    F: Fn(&str) -> Result<Vec<GeneratedStep>>,
{
    fn generate(&self, sport: &str) -> Result<Vec<GeneratedStep>> {
        self(sport)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Application root: owns the injected store capability and exposes typed
/// load/save operations for every persisted blob. All journey mutations go
/// through here, and each mutation persists before returning, so in-process
/// state and storage never diverge.
pub struct App<S: Store> {
    store: S,
}

impl<S: Store> App<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ---------------------------------------------------------------------------
    // Welcome flag
    // ---------------------------------------------------------------------------

    pub fn welcome_seen(&self) -> Result<bool> {
        Ok(self.store.get(keys::WELCOME_SEEN)?.as_deref() == Some("true"))
    }

    pub fn mark_welcome_seen(&mut self) -> Result<()> {
        self.store.set(keys::WELCOME_SEEN, "true")
    }

    // ---------------------------------------------------------------------------
    // Archetype
    // ---------------------------------------------------------------------------

    pub fn archetype(&self) -> Result<Option<Archetype>> {
        match self.store.get(keys::ARCHETYPE)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    /// Replace any previous archetype wholesale.
    pub fn save_archetype(&mut self, archetype: &Archetype) -> Result<()> {
        let blob = serde_json::to_string(archetype)?;
        self.store.set(keys::ARCHETYPE, &blob)
    }

    // ---------------------------------------------------------------------------
    // Journey
    // ---------------------------------------------------------------------------

    pub fn journey(&self) -> Result<Option<Journey>> {
        match self.store.get(keys::JOURNEY)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    pub fn save_journey(&mut self, journey: &Journey) -> Result<()> {
        let blob = serde_json::to_string(journey)?;
        self.store.set(keys::JOURNEY, &blob)
    }

    /// Switch the selected sport. A persisted journey for a different sport
    /// is discarded entirely; no stale steps survive under the new sport.
    pub fn select_sport(&mut self, sport: &str) -> Result<()> {
        if let Some(journey) = self.journey()? {
            if journey.sport != sport {
                self.store.remove(keys::JOURNEY)?;
            }
        }
        Ok(())
    }

    /// Return the journey for `sport`, generating one only when no persisted
    /// journey matches that sport.
    ///
    /// On generator failure nothing is persisted and any prior journey is
    /// untouched; the failure surfaces as a single generation-failed
    /// condition, malformed output included.
    pub fn ensure_journey<G: JourneyGenerator>(
        &mut self,
        sport: &str,
        generator: &G,
    ) -> Result<Journey> {
        if let Some(existing) = self.journey()? {
            if existing.sport == sport {
                return Ok(existing);
            }
        }

        let steps = generator.generate(sport)?;
        let journey = Journey::from_generated(sport, steps)
            .map_err(|e| NeuroflowError::GenerationFailed(e.to_string()))?;
        self.save_journey(&journey)?;
        Ok(journey)
    }

    /// Close out a step and persist the result. Returns the updated journey,
    /// or `None` when there is no active journey (a logged no-op).
    pub fn advance_step(&mut self, step_id: u32, outcome: StepOutcome) -> Result<Option<Journey>> {
        let Some(mut journey) = self.journey()? else {
            tracing::warn!(step_id, "advance ignored: no active journey");
            return Ok(None);
        };
        if journey.advance(step_id, outcome) {
            self.save_journey(&journey)?;
        }
        Ok(Some(journey))
    }

    /// Reopen a completed/skipped step and persist the result.
    pub fn reopen_step(&mut self, step_id: u32) -> Result<Option<Journey>> {
        let Some(mut journey) = self.journey()? else {
            tracing::warn!(step_id, "reopen ignored: no active journey");
            return Ok(None);
        };
        if journey.reopen(step_id) {
            self.save_journey(&journey)?;
        }
        Ok(Some(journey))
    }

    // ---------------------------------------------------------------------------
    // API credential override
    // ---------------------------------------------------------------------------

    pub fn api_key_override(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(keys::API_KEY)?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    pub fn set_api_key_override(&mut self, key: &str) -> Result<()> {
        self.store.set(keys::API_KEY, key)
    }

    pub fn clear_api_key_override(&mut self) -> Result<()> {
        self.store.remove(keys::API_KEY)
    }

    // ---------------------------------------------------------------------------
    // Reset
    // ---------------------------------------------------------------------------

    /// Discard archetype and journey. The welcome flag is kept so the
    /// first-run splash does not loop; the credential override is a
    /// settings concern and also survives.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(keys::ARCHETYPE)?;
        self.store.remove(keys::JOURNEY)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{StepKind, StepStatus};
    use std::cell::Cell;

    type GenResult = crate::error::Result<Vec<GeneratedStep>>;

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new())
    }

    fn generated() -> Vec<GeneratedStep> {
        StepKind::all()
            .iter()
            .map(|&kind| GeneratedStep {
                title: format!("{} step", kind.label()),
                description: String::new(),
                kind,
            })
            .collect()
    }

    fn archetype() -> Archetype {
        Archetype {
            name: "Zen Strategist".into(),
            description: "Calm and deliberate.".into(),
            neurochemistry: "Serotonin boost".into(),
            suggested_sports: vec!["Trail Running".into()],
        }
    }

    #[test]
    fn welcome_flag_roundtrip() {
        let mut app = app();
        assert!(!app.welcome_seen().unwrap());
        app.mark_welcome_seen().unwrap();
        assert!(app.welcome_seen().unwrap());
    }

    #[test]
    fn archetype_replaced_wholesale() {
        let mut app = app();
        app.save_archetype(&archetype()).unwrap();

        let mut second = archetype();
        second.name = "Social Gladiator".into();
        second.suggested_sports = vec!["Boxing".into(), "Futsal".into()];
        app.save_archetype(&second).unwrap();

        let loaded = app.archetype().unwrap().unwrap();
        assert_eq!(loaded.name, "Social Gladiator");
        assert_eq!(loaded.suggested_sports.len(), 2);
    }

    #[test]
    fn ensure_journey_generates_once_and_persists() {
        let mut app = app();
        let calls = Cell::new(0u32);
        let generator = |_: &str| -> GenResult {
            calls.set(calls.get() + 1);
            Ok(generated())
        };

        let journey = app.ensure_journey("Trail Running", &generator).unwrap();
        assert_eq!(journey.steps[0].status, StepStatus::Current);
        assert_eq!(calls.get(), 1);

        // Same sport: the persisted journey is reused, generator untouched.
        let again = app.ensure_journey("Trail Running", &generator).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(again.sport, "Trail Running");
    }

    #[test]
    fn ensure_journey_failure_persists_nothing() {
        let mut app = app();
        let generator =
            |_: &str| -> GenResult { Err(NeuroflowError::GenerationFailed("quota exhausted".into())) };

        let err = app.ensure_journey("Climbing", &generator).unwrap_err();
        assert!(matches!(err, NeuroflowError::GenerationFailed(_)));
        assert!(app.journey().unwrap().is_none());
    }

    #[test]
    fn ensure_journey_failure_leaves_prior_journey_untouched() {
        let mut app = app();
        let good = |_: &str| -> GenResult { Ok(generated()) };
        app.ensure_journey("Trail Running", &good).unwrap();

        let bad = |_: &str| -> GenResult { Err(NeuroflowError::GenerationFailed("boom".into())) };
        // The old journey is only discarded via select_sport; a direct
        // failed regeneration must not clobber it.
        assert!(app.ensure_journey("Trail Running", &bad).is_ok());
        let kept = app.journey().unwrap().unwrap();
        assert_eq!(kept.sport, "Trail Running");
    }

    #[test]
    fn malformed_generation_is_a_generation_failure() {
        let mut app = app();
        let generator = |_: &str| -> GenResult {
            let mut steps = generated();
            steps.truncate(2);
            Ok(steps)
        };
        let err = app.ensure_journey("Climbing", &generator).unwrap_err();
        assert!(matches!(err, NeuroflowError::GenerationFailed(_)));
        assert!(app.journey().unwrap().is_none());
    }

    #[test]
    fn select_sport_discards_mismatched_journey() {
        let mut app = app();
        app.ensure_journey("Trail Running", &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();

        app.select_sport("Boxing").unwrap();
        assert!(app.journey().unwrap().is_none());
    }

    #[test]
    fn select_sport_keeps_matching_journey() {
        let mut app = app();
        app.ensure_journey("Trail Running", &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();

        app.select_sport("Trail Running").unwrap();
        assert!(app.journey().unwrap().is_some());
    }

    #[test]
    fn advance_persists_each_mutation() {
        let mut app = app();
        app.ensure_journey("Trail Running", &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();

        let journey = app
            .advance_step(1, StepOutcome::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(journey.step(2).unwrap().status, StepStatus::Current);

        // The persisted blob reflects the mutation, not a stale copy.
        let reloaded = app.journey().unwrap().unwrap();
        assert_eq!(reloaded.step(1).unwrap().status, StepStatus::Completed);
        assert_eq!(reloaded.step(2).unwrap().status, StepStatus::Current);
    }

    #[test]
    fn advance_without_journey_is_noop() {
        let mut app = app();
        assert!(app
            .advance_step(1, StepOutcome::Completed)
            .unwrap()
            .is_none());
    }

    #[test]
    fn reopen_persists() {
        let mut app = app();
        app.ensure_journey("Trail Running", &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();
        app.advance_step(1, StepOutcome::Skipped).unwrap();

        app.reopen_step(1).unwrap().unwrap();
        let reloaded = app.journey().unwrap().unwrap();
        assert_eq!(reloaded.step(1).unwrap().status, StepStatus::Current);
    }

    #[test]
    fn api_key_override_trims_and_ignores_blank() {
        let mut app = app();
        assert_eq!(app.api_key_override().unwrap(), None);
        app.set_api_key_override("  secret-key \n").unwrap();
        assert_eq!(app.api_key_override().unwrap(), Some("secret-key".into()));
        app.set_api_key_override("   ").unwrap();
        assert_eq!(app.api_key_override().unwrap(), None);
        app.clear_api_key_override().unwrap();
        assert_eq!(app.api_key_override().unwrap(), None);
    }

    #[test]
    fn reset_clears_data_but_keeps_welcome() {
        let mut app = app();
        app.mark_welcome_seen().unwrap();
        app.save_archetype(&archetype()).unwrap();
        app.ensure_journey("Trail Running", &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();

        app.reset().unwrap();
        assert!(app.archetype().unwrap().is_none());
        assert!(app.journey().unwrap().is_none());
        assert!(app.welcome_seen().unwrap());
    }

    #[test]
    fn quiz_to_journey_scenario() {
        // Quiz → classification → sport selection → generation.
        let mut app = app();
        app.save_archetype(&archetype()).unwrap();
        let persona = app.archetype().unwrap().unwrap();
        assert_eq!(persona.name, "Zen Strategist");

        let sport = persona.suggested_sports[0].clone();
        app.select_sport(&sport).unwrap();
        let journey = app
            .ensure_journey(&sport, &(|_: &str| -> GenResult { Ok(generated()) }))
            .unwrap();

        assert_eq!(journey.sport, "Trail Running");
        assert_eq!(journey.step(1).unwrap().status, StepStatus::Current);
        for id in 2..=4 {
            assert_eq!(journey.step(id).unwrap().status, StepStatus::Locked);
        }
    }
}
