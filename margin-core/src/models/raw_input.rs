use serde::{Deserialize, Serialize};

/// Sample revenue shown when the form is first opened or reset.
pub const DEFAULT_REVENUE_TEXT: &str = "100000";

/// Sample cost of goods sold shown when the form is first opened or reset.
pub const DEFAULT_COST_TEXT: &str = "60000";

/// The two form fields exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub revenue_text: String,
    pub cost_text: String,
}

impl RawInput {
    pub fn new(
        revenue_text: impl Into<String>,
        cost_text: impl Into<String>,
    ) -> Self {
        Self {
            revenue_text: revenue_text.into(),
            cost_text: cost_text.into(),
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        Self::new(DEFAULT_REVENUE_TEXT, DEFAULT_COST_TEXT)
    }
}
