pub mod config;
pub mod error;
pub mod extract;
pub mod jira;
pub mod plantuml;
pub mod prompts;
pub mod types;

pub use error::{ForgeError, Result};
