pub mod additions;
pub mod allocator;
pub mod changeset_service;
pub mod creations;
pub mod removals;

pub use changeset_service::{ApplyOptions, ApplyReport, ChangesetService};
