//! pdfsort - sorts PDFs into folders by keywords on their first page
//!
//! Candidates are read from `<base_folder>/Unprocessed/`. Each rule moves the
//! files whose first-page text contains its keyword into
//! `<base_folder>/<folder>/`.

pub mod config;
pub mod error;
pub mod pdf;
pub mod rules;

pub use config::Config;
pub use error::{ClassifyError, ConfigError, LocateError};
pub use pdf::{LopdfSource, TextSource, locate};
pub use rules::{Rule, RuleEngine, RunOptions, RunReport};

/// Current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
