use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TimerState / TimerEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// One-shot completion signal, emitted exactly once per expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

// ---------------------------------------------------------------------------
// SessionTimer
// ---------------------------------------------------------------------------

/// Fixed session length in seconds.
pub const SESSION_SECS: u32 = 600;

/// Countdown state machine driven by an external 1 Hz tick source.
///
/// The timer itself never schedules anything: the owner feeds it `tick()`
/// and is responsible for cancelling its tick source when done, so a
/// callback can never outlive the state it mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    state: TimerState,
    remaining: u32,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            remaining: SESSION_SECS,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Begin (or resume) the countdown. Idempotent while running. Starting
    /// from `expired` re-arms the full session; starting from a paused
    /// `idle` keeps the remaining value (pause semantics).
    pub fn start(&mut self) {
        match self.state {
            TimerState::Running => {}
            TimerState::Expired => {
                self.remaining = SESSION_SECS;
                self.state = TimerState::Running;
            }
            TimerState::Idle => {
                if self.remaining == 0 {
                    self.remaining = SESSION_SECS;
                }
                self.state = TimerState::Running;
            }
        }
    }

    /// Pause: remaining value is retained, not reset.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Idle;
        }
    }

    /// Return to `idle` with a full session from any state.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining = SESSION_SECS;
    }

    /// Advance the countdown by one second. Only meaningful while running;
    /// in any other state this is a no-op. The expiry event fires exactly
    /// once, on the transition to zero.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            return Some(TimerEvent::Expired);
        }
        None
    }
}

/// `m:ss` countdown rendering.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
