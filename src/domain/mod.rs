//! Core domain types for pr-publish
//!
//! Small, dependency-free value types shared by the validators and the
//! orchestration layer.

pub mod metadata;
pub mod version;

pub use metadata::{LibraryMetadata, REQUIRED_FIELDS};
pub use version::BumpKind;
