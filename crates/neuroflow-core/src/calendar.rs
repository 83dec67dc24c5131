use crate::error::Result;
use crate::io;
use chrono::{NaiveDate, Utc};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// SessionEvent
// ---------------------------------------------------------------------------

/// A single scheduled micro-goal session, exported as an ICS artifact.
/// Fixed 09:00–09:30 local window; never persisted in the store.
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub sport: String,
    pub date: NaiveDate,
}

impl SessionEvent {
    pub fn new(sport: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            sport: sport.into(),
            date,
        }
    }

    /// Render the single-event VCALENDAR payload.
    pub fn to_ics(&self) -> String {
        let date = self.date.format("%Y%m%d");
        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
        let uid = Uuid::new_v4();
        [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//NeuroFlow//Habit App//EN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{uid}@neuroflow.app"),
            format!("DTSTAMP:{stamp}"),
            format!("DTSTART:{date}T090000"),
            format!("DTEND:{date}T093000"),
            format!("SUMMARY:NeuroFlow: {} micro-goal", self.sport),
            format!(
                "DESCRIPTION:Time to run your {} step. Remember: focus on the trigger and the micro-goal!",
                self.sport
            ),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ]
        .join("\r\n")
    }

    /// Default download name, e.g. `neuroflow-trail-running-2026-08-10.ics`.
    pub fn default_filename(&self) -> String {
        let sport: String = self
            .sport
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        format!("neuroflow-{}-{}.ics", sport.trim_matches('-'), self.date)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        io::atomic_write(path, self.to_ics().as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
