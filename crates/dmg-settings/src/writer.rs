//! Write resolved settings to JSON on disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use crate::errors::SettingsError;
use crate::schema::LayoutSettings;

/// Serialize resolved settings to pretty-printed JSON.
pub fn settings_to_json(settings: &LayoutSettings) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(settings)
        .map_err(|e| SettingsError::WriteError(format!("failed to serialize settings: {e}")))
}

/// Write resolved settings to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_settings_to_path(
    settings: &LayoutSettings,
    path: &Path,
) -> Result<(), SettingsError> {
    let json = settings_to_json(settings)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SettingsError::WriteError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    // Atomic write: write to .tmp, then rename
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| {
        SettingsError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed — try direct write as fallback
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &json).map_err(|e2| {
            SettingsError::WriteError(format!("failed to write {}: {e2}", path.display()))
        })?;
    }

    tracing::debug!(path = %path.display(), "settings written to disk");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::Defines;
    use crate::resolver::resolve_with_cwd;
    use std::path::{Path, PathBuf};

    #[test]
    fn json_uses_builder_attribute_names() {
        let settings = resolve_with_cwd(&Defines::new(), Path::new("/work"));
        let json = settings_to_json(&settings).unwrap();
        for key in [
            "\"app\"",
            "\"files\"",
            "\"symlinks\"",
            "\"background\"",
            "\"icon_locations\"",
            "\"window_rect\"",
            "\"icon_size\"",
            "\"text_size\"",
            "\"format\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        assert!(json.contains("\"UDZO\""));
    }

    #[test]
    fn save_writes_parseable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("dmg-settings.json");

        let mut defines = Defines::new();
        defines.insert("app_path", "/build/TypeWhisper.app");
        let settings = resolve_with_cwd(&defines, Path::new("/work"));

        save_settings_to_path(&settings, &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let parsed: LayoutSettings = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(parsed.files, vec![PathBuf::from("/build/TypeWhisper.app")]);
    }

    #[test]
    fn save_leaves_no_tmp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dmg-settings.json");
        let settings = resolve_with_cwd(&Defines::new(), Path::new("/work"));

        save_settings_to_path(&settings, &out).unwrap();

        assert!(out.exists());
        assert!(!dir.path().join("dmg-settings.json.tmp").exists());
    }
}
