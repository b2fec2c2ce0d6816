//! Advisory checks on resolved settings.
//!
//! Missing files surface as failures in the external builder, not here,
//! so everything in this module is a warning. Callers log the findings
//! and proceed.

use crate::schema::LayoutSettings;

/// Check a resolved descriptor, collecting human-readable warnings.
pub fn check(settings: &LayoutSettings) -> Vec<String> {
    let mut warnings: Vec<String> = Vec::new();

    if !settings.background.exists() {
        warnings.push(format!(
            "background image {} does not exist; the builder will fail without it",
            settings.background.display()
        ));
    }

    for file in &settings.files {
        if !file.exists() {
            warnings.push(format!("bundled file {} does not exist", file.display()));
        }
        if file.extension().map(|e| e != "app").unwrap_or(true) {
            warnings.push(format!(
                "bundled file {} is not an .app bundle",
                file.display()
            ));
        }
    }

    let app_bundle = format!("{}.app", settings.app);
    for label in settings.icon_locations.keys() {
        if *label != app_bundle && !settings.symlinks.contains_key(label) {
            warnings.push(format!(
                "icon location '{label}' matches no bundled file or symlink"
            ));
        }
    }

    warnings
}

// =============================================================================
// Tests
// =============================================================================
