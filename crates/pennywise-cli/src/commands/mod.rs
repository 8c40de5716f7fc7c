//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `common` - Shared utilities (config loading, record loading, --as-of)
//! - `insights` - Smart insights command
//! - `forecast` - Spending forecast command
//! - `reports` - Category comparison and monthly summary commands
//! - `config` - Configuration display command

pub mod common;
pub mod config;
pub mod forecast;
pub mod insights;
pub mod reports;

// Re-export command functions for main.rs
pub use common::*;
pub use config::*;
pub use forecast::*;
pub use insights::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
