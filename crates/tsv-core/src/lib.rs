//! # tsv-core
//!
//! Core types shared across the TypeSpec validator crates:
//! - Entity structs for discovered files, projects, pairings, and reports
//! - Severity and check-id enums
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use entities::{
    DiscoveryStats, Pairing, PullRequestModel, ReviewModel, SwaggerFile, TypeSpecProject,
    ValidationReport, Violation,
};
pub use enums::{CheckId, Severity};
pub use errors::CoreError;
