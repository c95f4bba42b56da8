//! AI Car Analyzer client library
//!
//! Core pipeline shared by the CLI:
//! - selection: file intake validation (type/size/count rules)
//! - api: analysis service client (single vs batch dispatch)
//! - session: Idle → Submitting → Results state machine
//! - report: paginated PDF report generation

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod preview;
pub mod report;
pub mod scanner;
pub mod selection;
pub mod session;

pub use api::{AnalysisClient, AnalysisOutcome};
pub use error::{CarAiError, Result};
pub use selection::{SelectedFile, SelectionSet};
pub use session::Session;
