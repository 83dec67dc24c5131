use crate::error::{NeuroflowError, Result};
use crate::types::QuizAnswer;

// ---------------------------------------------------------------------------
// Question bank
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub text: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u32,
    pub category: &'static str,
    pub scenario: &'static str,
    pub options: &'static [QuizOption],
}

/// The built-in compatibility assessment: one question per profile axis
/// (social battery, environment, focus style, aggression release, structure,
/// motivation, pain tolerance, gear ritual).
pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        category: "social",
        scenario: "After a stressful week, your social battery is...",
        options: &[
            QuizOption {
                text: "Empty. I need total isolation to recharge.",
                value: "solo",
            },
            QuizOption {
                text: "Low, but I'd see one close, trusted friend.",
                value: "duo",
            },
            QuizOption {
                text: "Full! I want people, laughter, group energy.",
                value: "group",
            },
        ],
    },
    Question {
        id: 2,
        category: "environment",
        scenario: "Where do you feel most alive?",
        options: &[
            QuizOption {
                text: "A controlled space, climate, no surprises (gym/studio).",
                value: "indoor_controlled",
            },
            QuizOption {
                text: "Open air, sun, wind, contact with nature.",
                value: "outdoor_nature",
            },
            QuizOption {
                text: "An urban setting, concrete, courts and tracks.",
                value: "outdoor_urban",
            },
        ],
    },
    Question {
        id: 3,
        category: "focus",
        scenario: "How do you prefer to use your brain during effort?",
        options: &[
            QuizOption {
                text: "Switch everything off. I want a repetitive trance.",
                value: "flow_repetitive",
            },
            QuizOption {
                text: "Solve problems. I want strategy and mental chess.",
                value: "strategy_game",
            },
            QuizOption {
                text: "Inner connection. I want to feel every muscle and breath.",
                value: "mind_body",
            },
        ],
    },
    Question {
        id: 4,
        category: "aggression",
        scenario: "Your accumulated frustration needs...",
        options: &[
            QuizOption {
                text: "Impact. I want to hit, kick, or use brute force.",
                value: "high_impact",
            },
            QuizOption {
                text: "Explosion. I want to sprint fast or jump high.",
                value: "explosive",
            },
            QuizOption {
                text: "Harmony. I want to dissolve tension through fluidity.",
                value: "fluidity",
            },
        ],
    },
    Question {
        id: 5,
        category: "structure",
        scenario: "How do you handle complex rules?",
        options: &[
            QuizOption {
                text: "Hate them. Just tell me where to run or what to lift.",
                value: "simple_rules",
            },
            QuizOption {
                text: "Love them. Learning technique and rules is the fun part.",
                value: "technical",
            },
            QuizOption {
                text: "Indifferent, as long as I break a sweat.",
                value: "moderate_rules",
            },
        ],
    },
    Question {
        id: 6,
        category: "motivation",
        scenario: "What would bring you back the next day?",
        options: &[
            QuizOption {
                text: "Seeing my numbers/times improve (mastery).",
                value: "metrics",
            },
            QuizOption {
                text: "Beating someone or climbing a ranking (competition).",
                value: "competition",
            },
            QuizOption {
                text: "The raw endorphin rush and sense of duty done (sensation).",
                value: "biochemical",
            },
        ],
    },
    Question {
        id: 7,
        category: "pain_tolerance",
        scenario: "On physical discomfort (burning lungs, aching muscles):",
        options: &[
            QuizOption {
                text: "Love it. No pain, no gain. Makes me feel alive.",
                value: "high_pain",
            },
            QuizOption {
                text: "I tolerate it if the game is fun enough to distract me.",
                value: "distraction",
            },
            QuizOption {
                text: "I avoid it. Give me something gentle and steady.",
                value: "low_pain",
            },
        ],
    },
    Question {
        id: 8,
        category: "gear",
        scenario: "On preparing equipment (bags, accessories, rackets):",
        options: &[
            QuizOption {
                text: "I love the ritual. Having the right gear motivates me.",
                value: "gear_head",
            },
            QuizOption {
                text: "Don't care either way; I'll bring what's needed.",
                value: "neutral",
            },
            QuizOption {
                text: "Deadly lazy. I want to leave home with just the clothes on my back.",
                value: "minimalist",
            },
        ],
    },
];

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

// ---------------------------------------------------------------------------
// QuizSession
// ---------------------------------------------------------------------------

/// Accumulates answers across quiz traversal. Supports stepping back to
/// correct an earlier answer before submission.
#[derive(Debug, Default)]
pub struct QuizSession {
    answers: Vec<QuizAnswer>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next unanswered question, or `None` when the quiz is complete.
    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTIONS.len()
    }

    /// Record the chosen option value for the current question.
    pub fn answer(&mut self, value: &str) -> Result<()> {
        let question = self.current().ok_or(NeuroflowError::EmptyAnswers)?;
        let option = question
            .options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| NeuroflowError::UnknownOption {
                question: question.id,
                value: value.to_string(),
            })?;
        self.answers.push(QuizAnswer {
            question_id: question.id,
            scenario: question.scenario.to_string(),
            selected_option: option.value.to_string(),
            category: question.category.to_string(),
        });
        Ok(())
    }

    /// Discard the most recent answer so it can be re-taken.
    pub fn back(&mut self) -> bool {
        self.answers.pop().is_some()
    }

    /// Consume the session into the ordered answer batch.
    pub fn into_answers(self) -> Result<Vec<QuizAnswer>> {
        if self.answers.is_empty() {
            return Err(NeuroflowError::EmptyAnswers);
        }
        Ok(self.answers)
    }
}

/// Resolve `(question id, option value)` pairs against the bank, preserving
/// bank order. Used by the non-interactive submission path.
pub fn resolve_answers(pairs: &[(u32, String)]) -> Result<Vec<QuizAnswer>> {
    if pairs.is_empty() {
        return Err(NeuroflowError::EmptyAnswers);
    }
    let mut answers = Vec::with_capacity(pairs.len());
    for q in QUESTIONS {
        let Some((_, value)) = pairs.iter().find(|(id, _)| *id == q.id) else {
            continue;
        };
        let option = q
            .options
            .iter()
            .find(|o| o.value == value.as_str())
            .ok_or_else(|| NeuroflowError::UnknownOption {
                question: q.id,
                value: value.clone(),
            })?;
        answers.push(QuizAnswer {
            question_id: q.id,
            scenario: q.scenario.to_string(),
            selected_option: option.value.to_string(),
            category: q.category.to_string(),
        });
    }
    if let Some((id, _)) = pairs
        .iter()
        .find(|(id, _)| !QUESTIONS.iter().any(|q| q.id == *id))
    {
        return Err(NeuroflowError::UnknownQuestion(*id));
    }
    Ok(answers)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
