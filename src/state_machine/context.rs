use super::states::WizardStep;
use crate::models::{AccountInfo, CompanyInfo};
use crate::validation::FieldErrors;
use serde::Serialize;

/// Everything the wizard knows at one point in time
///
/// Field data survives navigation; only `errors` and `submit_error` are
/// cleared by transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: WizardStep,
    pub account_info: AccountInfo,
    pub company_info: CompanyInfo,
    /// Field-attributed messages from local validation or a rejected submission
    pub errors: FieldErrors,
    /// Transport or server failure text, empty when there is none
    pub submit_error: String,
    pub is_submitted: bool,
    pub submission_result: Option<serde_json::Value>,
    /// Number of submissions awaiting their collaborator
    #[serde(skip)]
    pub(crate) in_flight: usize,
}

impl WizardState {
    /// True exactly while at least one submission is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
