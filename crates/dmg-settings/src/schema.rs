//! Resolved disk-image layout settings.
//!
//! `LayoutSettings` is the exact set of attributes the external disk-image
//! builder reads: attribute names and the tuple-as-array wire shapes must
//! match what the builder expects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A 2D coordinate pair, serialized as a two-element array.
pub type Point = (i32, i32);

/// Default application display name.
pub const DEFAULT_APP: &str = "TypeWhisper";

/// Background image path relative to the working directory, used when no
/// `background` define is supplied.
pub const DEFAULT_BACKGROUND: &str = ".github/dmg-background.png";

/// Icon position of the application bundle inside the installer window.
pub const APP_ICON_LOCATION: Point = (140, 156);

/// Icon position of the Applications symlink.
pub const APPLICATIONS_ICON_LOCATION: Point = (336, 156);

/// Installer window placement: origin and size.
pub const WINDOW_RECT: (Point, Point) = ((100, 100), (580, 442));

pub const ICON_SIZE: u32 = 80;
pub const TEXT_SIZE: u32 = 12;

/// Disk image format code, as accepted by the builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum ImageFormat {
    /// zlib-compressed (the shipping default).
    #[default]
    Udzo,
    /// bzip2-compressed.
    Udbz,
    /// lzfse-compressed.
    Ulfo,
    /// Read-only, uncompressed.
    Udro,
    /// Read-write, uncompressed.
    Udrw,
}

/// Fully resolved layout descriptor handed to the disk-image builder.
///
/// Constructed once per packaging invocation by [`crate::resolver`];
/// every attribute is concrete — nothing is left for the builder to
/// default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSettings {
    pub app: String,
    pub files: Vec<PathBuf>,
    pub symlinks: BTreeMap<String, PathBuf>,
    pub background: PathBuf,
    pub icon_locations: BTreeMap<String, Point>,
    pub window_rect: (Point, Point),
    pub icon_size: u32,
    pub text_size: u32,
    pub format: ImageFormat,
}

// =============================================================================
// Tests
// =============================================================================
