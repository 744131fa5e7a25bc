use super::errors::{StateMachineError, StateMachineResult};
use super::events::WizardEvent;
use crate::constants::{StepConfig, REGISTRATION_STEPS, TOTAL_STEPS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the registration wizard
///
/// The three content steps are numbered 1..=3; `Complete` (4) is the terminal
/// state reached after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Account credentials
    Account = 1,
    /// Company profile
    Company = 2,
    /// Read-only summary before submitting
    Review = 3,
    /// Registration submitted
    Complete = 4,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [Self::Account, Self::Company, Self::Review, Self::Complete];

    /// Step for a 1-based index, if the index is in `[1, TOTAL_STEPS + 1]`
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            1 => Some(Self::Account),
            2 => Some(Self::Company),
            3 => Some(Self::Review),
            4 => Some(Self::Complete),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::Account)
    }

    /// Check if this is the last content step
    pub fn is_last_content_step(&self) -> bool {
        self.index() == TOTAL_STEPS
    }

    /// Presentation metadata; `None` for the terminal state
    pub fn config(&self) -> Option<&'static StepConfig> {
        REGISTRATION_STEPS
            .iter()
            .find(|config| config.step == self.index())
    }

    /// Resolve the target of `event` from this step
    pub fn apply(self, event: &WizardEvent) -> StateMachineResult<WizardStep> {
        let target = match (self, event) {
            (Self::Complete, WizardEvent::Next) => None,
            (from, WizardEvent::Next) => Self::from_index(i32::from(from.index()) + 1),

            (Self::Account, WizardEvent::Back) => None,
            (from, WizardEvent::Back) => Self::from_index(i32::from(from.index()) - 1),

            (_, WizardEvent::GoTo(target)) => {
                return Self::from_index(*target)
                    .ok_or(StateMachineError::StepOutOfRange { target: *target });
            }

            (_, WizardEvent::Submitted) => Some(Self::Complete),
            (_, WizardEvent::Reset) => Some(Self::Account),
        };

        target.ok_or_else(|| StateMachineError::InvalidTransition {
            from: self.to_string(),
            event: event.event_type().to_string(),
        })
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Company => write!(f, "company"),
            Self::Review => write!(f, "review"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

impl std::str::FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(Self::Account),
            "company" => Ok(Self::Company),
            "review" => Ok(Self::Review),
            "complete" => Ok(Self::Complete),
            _ => Err(format!("Invalid wizard step: {s}")),
        }
    }
}

/// Default step for a fresh wizard
impl Default for WizardStep {
    fn default() -> Self {
        Self::Account
    }
}
