pub mod calculations;
pub mod format;
pub mod guide;
pub mod models;
pub mod notice;
pub mod presentation;
pub mod report;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use calculations::compute;
pub use models::*;
pub use notice::{Notice, Notifier};
pub use validation::{InputField, Validated, ValidationError, ValidationWarning, validate};
