//! `neuroflow-ai`: typed Rust client for the hosted generative-AI
//! completion service the app treats as an external collaborator.
//!
//! # Architecture
//!
//! ```text
//! prompts       ← prompt text + JSON response schemas per call
//!     │
//!     ▼
//! GenAiClient   ← POSTs models/{model}:generateContent (reqwest, rustls)
//!     │            fails closed: non-2xx, empty, or schema-mismatched
//!     ▼            responses never become domain data
//! typed payloads (ArchetypePayload, StepPayload, chat text)
//! ```
//!
//! The three calls mirror the application boundaries: archetype
//! classification (quiz answers in, persona out), journey generation
//! (sport in, exactly four typed steps out, re-validated by the caller),
//! and chat assistance (free text plus optional coordinate in, markup-lite
//! text with grounded place references out).
//!
//! No call retries automatically: the service is costed and rate-limited
//! externally, so retries are an explicit user action.

pub mod client;
pub mod error;
pub mod prompts;
pub mod types;


pub use client::{ClientConfig, GenAiClient};
pub use error::AiError;
pub use types::{ArchetypePayload, ChatRequest, LatLng, StepPayload};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, AiError>;
