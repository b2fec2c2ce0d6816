//! Turns raw `defines` into a fully resolved [`LayoutSettings`].
//!
//! Every attribute resolves to a concrete value here; the builder never
//! sees an unresolved or partial descriptor.

use crate::defines::Defines;
use crate::errors::SettingsError;
use crate::schema::{
    ImageFormat, LayoutSettings, APPLICATIONS_ICON_LOCATION, APP_ICON_LOCATION, DEFAULT_APP,
    DEFAULT_BACKGROUND, ICON_SIZE, TEXT_SIZE, WINDOW_RECT,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve layout settings against the process working directory.
///
/// The working directory is only consulted to build the default
/// background path when no `background` define is supplied.
pub fn resolve(defines: &Defines) -> Result<LayoutSettings, SettingsError> {
    let cwd = std::env::current_dir().map_err(|e| SettingsError::WorkingDir(e.to_string()))?;
    Ok(resolve_with_cwd(defines, &cwd))
}

/// Resolve layout settings with an explicit working directory.
///
/// Pure: absent or empty defines trigger defaulting, never errors.
pub fn resolve_with_cwd(defines: &Defines, cwd: &Path) -> LayoutSettings {
    let app = defines.get("app").unwrap_or(DEFAULT_APP).to_string();

    let files: Vec<PathBuf> = defines
        .get("app_path")
        .map(|p| vec![PathBuf::from(p)])
        .unwrap_or_default();

    let mut symlinks = BTreeMap::new();
    symlinks.insert("Applications".to_string(), PathBuf::from("/Applications"));

    let background = defines
        .get("background")
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.join(DEFAULT_BACKGROUND));

    let mut icon_locations = BTreeMap::new();
    icon_locations.insert(format!("{app}.app"), APP_ICON_LOCATION);
    icon_locations.insert("Applications".to_string(), APPLICATIONS_ICON_LOCATION);

    debug!(app = %app, files = files.len(), "resolved layout settings");

    LayoutSettings {
        app,
        files,
        symlinks,
        background,
        icon_locations,
        window_rect: WINDOW_RECT,
        icon_size: ICON_SIZE,
        text_size: TEXT_SIZE,
        format: ImageFormat::default(),
    }
}

// =============================================================================
// Tests
// =============================================================================
