pub mod diagnostics;
pub mod domain;
pub mod errors;
pub mod index;
pub mod services;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use errors::DocumentError;
pub use services::{ApplyOptions, ApplyReport, ChangesetService};
