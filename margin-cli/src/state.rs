//! Session state for the calculator shell.
//!
//! Holds the form fields and the last successful result between commands.
//! All arithmetic is delegated to `margin_core`; this type only decides when
//! to run it and which notices to send.

use std::sync::Arc;

use margin_core::{
    CalculationResult, Notice, Notifier, RawInput, ValidationError, compute, validate,
};
use tracing::{debug, info};

/// The form fields plus the result of the last successful calculation.
///
/// Editing a field does not touch the held result; only `calculate` and
/// `reset` replace it.
pub struct CalculatorSession {
    raw: RawInput,
    result: Option<CalculationResult>,
    notifier: Arc<dyn Notifier>,
}

impl CalculatorSession {
    /// Create a session with the default sample values and no result.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            raw: RawInput::default(),
            result: None,
            notifier,
        }
    }

    pub fn raw_input(&self) -> &RawInput {
        &self.raw
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Check if a calculation has been completed since the last reset.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn set_revenue_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.raw.revenue_text = text.into();
    }

    pub fn set_cost_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.raw.cost_text = text.into();
    }

    /// Validate the current fields and, if they pass, replace the held result.
    ///
    /// On failure the error notice is sent and the previous result is kept.
    pub fn calculate(&mut self) -> Result<&CalculationResult, ValidationError> {
        let validated = match validate(&self.raw) {
            Ok(validated) => validated,
            Err(error) => {
                debug!(?error, raw = ?self.raw, "calculation rejected");
                self.notifier.notify(&Notice::from(error));
                return Err(error);
            }
        };

        if let Some(warning) = validated.warning {
            self.notifier.notify(&Notice::from(warning));
        }

        let result = compute(&validated.input);
        info!(
            margin = %result.gross_profit_margin(),
            tier = result.tier().as_str(),
            "calculation complete"
        );
        self.notifier.notify(&Notice::CALCULATED);

        Ok(&*self.result.insert(result))
    }

    /// Restore the default sample values and drop any result.
    pub fn reset(&mut self) {
        self.raw = RawInput::default();
        self.result = None;
        info!("calculator reset");
        self.notifier.notify(&Notice::RESET);
    }
}
