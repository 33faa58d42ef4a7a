//! Base option record and its process-wide default.

use super::PackageTarget;
use crate::error::{OptionsError, Result};
use std::sync::LazyLock;

/// Initial window width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;

/// Initial window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 780;

/// User-Agent sent by the embedded browser unless the caller overrides it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Serialized names of every field of [`PakeCliOptions`], in declaration order.
pub const FIELD_NAMES: [&str; 16] = [
    "icon",
    "height",
    "width",
    "fullscreen",
    "resizable",
    "transparent",
    "userAgent",
    "showMenu",
    "showSystemTray",
    "multiArch",
    "targets",
    "iterCopyFile",
    "systemTrayIcon",
    "debug",
    "inject",
    "safeDomain",
];

/// Options accepted by the packaging CLI.
///
/// Every field is required when deserializing: a partial record is rejected
/// rather than silently filled in. Use [`default_options`] for the fallback
/// values and [`with_overrides`](super::with_overrides) to customize a copy.
///
/// # Examples
///
/// ```
/// use pake_cli_options::{default_options, PackageTarget};
///
/// let options = default_options();
/// assert_eq!((options.width, options.height), (1200, 780));
/// assert_eq!(options.targets, PackageTarget::Deb);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PakeCliOptions {
    /// Application icon source (path or URI). Empty means the packager's own icon.
    pub icon: String,

    /// Initial window height in pixels.
    pub height: u32,

    /// Initial window width in pixels.
    pub width: u32,

    /// Start in fullscreen.
    pub fullscreen: bool,

    /// Allow window resize.
    pub resizable: bool,

    /// Enable window transparency.
    pub transparent: bool,

    /// User-Agent override for the embedded browser.
    pub user_agent: String,

    /// Show the native menu bar.
    pub show_menu: bool,

    /// Show the OS tray icon.
    pub show_system_tray: bool,

    /// Build for multiple CPU architectures.
    pub multi_arch: bool,

    /// Output package format.
    pub targets: PackageTarget,

    /// Copy resource files one by one instead of in bulk.
    pub iter_copy_file: bool,

    /// Tray icon path. Empty means reuse the application icon.
    pub system_tray_icon: String,

    /// Debug build and logging.
    pub debug: bool,

    /// Scripts and styles injected into the page, in order.
    pub inject: Vec<String>,

    /// Hostnames trusted without navigation warnings.
    pub safe_domain: Vec<String>,
}

impl PakeCliOptions {
    /// Returns the serialized value of a single field, looked up by its
    /// camelCase name.
    pub fn field(&self, name: &str) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        value
            .get_mut(name)
            .map(serde_json::Value::take)
            .ok_or_else(|| OptionsError::UnknownField {
                name: name.to_string(),
            })
    }
}

impl Default for PakeCliOptions {
    fn default() -> Self {
        Self {
            icon: String::new(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            fullscreen: false,
            resizable: true,
            transparent: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            show_menu: false,
            show_system_tray: false,
            multi_arch: false,
            targets: PackageTarget::Deb,
            iter_copy_file: false,
            system_tray_icon: String::new(),
            debug: false,
            inject: Vec::new(),
            safe_domain: Vec::new(),
        }
    }
}

static DEFAULT_PAKE_OPTIONS: LazyLock<PakeCliOptions> = LazyLock::new(|| {
    log::debug!("building default option table");
    PakeCliOptions::default()
});

/// Returns an owned copy of the default option record.
///
/// Callers are free to mutate the copy; the shared table is never touched.
pub fn default_options() -> PakeCliOptions {
    DEFAULT_PAKE_OPTIONS.clone()
}

/// Returns a read-only reference to the process-wide default record.
pub fn default_options_ref() -> &'static PakeCliOptions {
    &DEFAULT_PAKE_OPTIONS
}
