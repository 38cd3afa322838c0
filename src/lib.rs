pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod lint;
pub mod ui;
pub mod validate;

pub use error::{PrPublishError, Result};
