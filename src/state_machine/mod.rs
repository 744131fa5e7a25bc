//! # Wizard State Machine
//!
//! Step sequencing for the registration wizard. [`WizardStep::apply`] is the
//! pure transition table; [`RegistrationStore`] owns the mutable state, runs
//! the [`StateAction`] chain after each transition and drives submission.

pub mod actions;
pub mod context;
pub mod errors;
pub mod events;
pub mod guards;
pub mod states;
pub mod store;

pub use actions::{default_actions, ClearErrorsAction, LogTransitionAction, StateAction};
pub use context::WizardState;
pub use errors::{GuardError, GuardResult, StateMachineError, StateMachineResult};
pub use events::WizardEvent;
pub use guards::{StateGuard, StepCompleteGuard};
pub use states::WizardStep;
pub use store::RegistrationStore;
