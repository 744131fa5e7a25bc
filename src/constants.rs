//! # Registration Constants
//!
//! Step table, participation choices and the default limits that bound the
//! field validation rules. Runtime overrides for the limits live in
//! [`crate::config`]; the values here are the defaults those overrides start from.

/// Presentation metadata for one content step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepConfig {
    pub step: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

pub const REGISTRATION_STEPS: [StepConfig; 3] = [
    StepConfig {
        step: 1,
        title: "Account Information",
        subtitle: "Create your account credentials",
        icon: "mdi-account",
    },
    StepConfig {
        step: 2,
        title: "Company Information",
        subtitle: "Tell us about your company",
        icon: "mdi-domain",
    },
    StepConfig {
        step: 3,
        title: "Review & Submit",
        subtitle: "Verify your information",
        icon: "mdi-check-circle",
    },
];

/// Number of content steps; `TOTAL_STEPS + 1` is the completed state
pub const TOTAL_STEPS: u8 = REGISTRATION_STEPS.len() as u8;

/// Default limits for account and company fields
pub mod validation {
    pub const PASSWORD_MIN_LENGTH: usize = 8;
    pub const PASSWORD_MAX_LENGTH: usize = 128;
    pub const USERNAME_MIN_LENGTH: usize = 3;
    pub const USERNAME_MAX_LENGTH: usize = 50;
    pub const YEAR_ESTABLISHED_MIN: i32 = 1800;
}

/// Default brochure upload limits
pub mod brochure {
    pub const MAX_SIZE_MB: u64 = 2;
    pub const MAX_SIZE_BYTES: u64 = MAX_SIZE_MB * 1024 * 1024;
    pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];
    pub const ALLOWED_MIME_TYPES: [&str; 3] = [
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ];
}

/// Messages surfaced when a failure carries no usable text of its own
pub mod messages {
    pub const UNEXPECTED_SUBMIT_ERROR: &str = "An unexpected error occurred. Please try again.";
}

/// Operation names used by the structured logging macros
pub mod events {
    pub const WIZARD_STEP_CHANGED: &str = "wizard.step_changed";
    pub const WIZARD_TRANSITION_IGNORED: &str = "wizard.transition_ignored";
    pub const WIZARD_STEP_REJECTED: &str = "wizard.step_rejected";
    pub const WIZARD_RESET: &str = "wizard.reset";
    pub const SUBMISSION_STARTED: &str = "submission.started";
    pub const SUBMISSION_SUCCEEDED: &str = "submission.succeeded";
    pub const SUBMISSION_REJECTED: &str = "submission.rejected";
    pub const SUBMISSION_FAILED: &str = "submission.failed";
    pub const SUBMISSION_PANICKED: &str = "submission.panicked";
}
