mod calculation_result;
mod margin_tier;
mod raw_input;
mod validated_input;

pub use calculation_result::CalculationResult;
pub use margin_tier::MarginTier;
pub use raw_input::{DEFAULT_COST_TEXT, DEFAULT_REVENUE_TEXT, RawInput};
pub use validated_input::ValidatedInput;
