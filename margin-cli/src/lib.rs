pub mod app;
pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
pub mod notifier;
pub mod state;
pub mod views;

pub use notifier::ConsoleNotifier;
pub use state::CalculatorSession;
