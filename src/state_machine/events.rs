use serde::{Deserialize, Serialize};

/// Events that move the wizard between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WizardEvent {
    /// Advance one step
    Next,
    /// Go back one step
    Back,
    /// Jump directly to a 1-based step index
    GoTo(i32),
    /// A submission succeeded
    Submitted,
    /// Start over from the first step
    Reset,
}

impl WizardEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Back => "back",
            Self::GoTo(_) => "go_to",
            Self::Submitted => "submitted",
            Self::Reset => "reset",
        }
    }
}
