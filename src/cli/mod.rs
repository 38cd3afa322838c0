//! CLI-facing workflow entry points

pub mod orchestration;

pub use orchestration::{run_publish_workflow, WorkflowOptions, WorkflowResult};
