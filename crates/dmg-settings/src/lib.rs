//! Disk-image layout settings for the TypeWhisper installer.
//!
//! Resolves externally supplied `defines` into the full layout
//! descriptor the disk-image builder consumes: window geometry, icon
//! placement, background image, symlink targets, and image format.
//! Every attribute has a default, so an empty set of defines still
//! produces a complete descriptor.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dmg_settings::{resolve_settings, settings_to_json, Defines};
//!
//! let mut defines = Defines::new();
//! defines.insert("app_path", "/build/TypeWhisper.app");
//! let settings = resolve_settings(&defines).expect("failed to resolve settings");
//! println!("{}", settings_to_json(&settings).unwrap());
//! ```

pub mod defines;
pub mod errors;
pub mod resolver;
pub mod schema;
pub mod validation;
pub mod writer;

// Re-export core types for convenience
pub use defines::Defines;
pub use errors::SettingsError;
pub use schema::{ImageFormat, LayoutSettings};
pub use writer::{save_settings_to_path, settings_to_json};

/// Resolve defines against the process working directory, logging any
/// advisory findings.
///
/// Absent inputs default silently; the only failure is an unreadable
/// working directory.
pub fn resolve_settings(defines: &Defines) -> Result<LayoutSettings, SettingsError> {
    let settings = resolver::resolve(defines)?;
    for warning in validation::check(&settings) {
        tracing::warn!("{warning}");
    }
    Ok(settings)
}
