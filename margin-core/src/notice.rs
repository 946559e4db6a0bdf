//! Short title and description pairs for the notification collaborator.

use serde::Serialize;

use crate::{ValidationError, ValidationWarning};

/// A notification to show the user. Presentation is up to the [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Receives notices from the calculator.
pub trait Notifier: Send + Sync {
    fn notify(
        &self,
        notice: &Notice,
    );
}

impl Notice {
    pub const CALCULATED: Notice = Notice {
        title: "Calculation complete",
        description: "Your gross profit margin has been calculated successfully.",
    };

    pub const RESET: Notice = Notice {
        title: "Calculator reset",
        description: "All values have been reset to default.",
    };
}

impl From<ValidationError> for Notice {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingField => Notice {
                title: "Please enter both revenue and cost of goods sold",
                description: "All fields are required for calculation.",
            },
            ValidationError::NotANumber => Notice {
                title: "Please enter valid numbers",
                description: "Revenue and cost must be numeric values.",
            },
            ValidationError::RevenueNotPositive => Notice {
                title: "Revenue must be greater than zero",
                description: "Please enter a positive value for revenue.",
            },
            ValidationError::CostNegative => Notice {
                title: "Cost cannot be negative",
                description: "Please enter a non-negative value for cost.",
            },
        }
    }
}

impl From<ValidationWarning> for Notice {
    fn from(warning: ValidationWarning) -> Self {
        match warning {
            ValidationWarning::CostExceedsRevenue => Notice {
                title: "Warning: Cost exceeds revenue",
                description: "This will result in a negative profit margin.",
            },
        }
    }
}
