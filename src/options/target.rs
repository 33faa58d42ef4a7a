//! Packaging target formats.

use crate::error::{OptionsError, Result};
use std::fmt;
use std::str::FromStr;

/// Output package format produced by the packaging pipeline.
///
/// Serialized as its lowercase name, so the default record carries
/// `"targets": "deb"`.
///
/// # Examples
///
/// ```
/// use pake_cli_options::PackageTarget;
///
/// let target: PackageTarget = "AppImage".parse().unwrap();
/// assert_eq!(target.as_str(), "appimage");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTarget {
    /// Debian package (.deb)
    #[default]
    Deb,
    /// RPM package (.rpm)
    Rpm,
    /// AppImage bundle
    AppImage,
    /// macOS disk image (.dmg)
    Dmg,
    /// Windows installer (.msi)
    Msi,
}

impl PackageTarget {
    /// All known targets in declaration order.
    pub const ALL: [PackageTarget; 5] = [
        PackageTarget::Deb,
        PackageTarget::Rpm,
        PackageTarget::AppImage,
        PackageTarget::Dmg,
        PackageTarget::Msi,
    ];

    /// Returns the serialized name of the target.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTarget::Deb => "deb",
            PackageTarget::Rpm => "rpm",
            PackageTarget::AppImage => "appimage",
            PackageTarget::Dmg => "dmg",
            PackageTarget::Msi => "msi",
        }
    }
}

impl fmt::Display for PackageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTarget {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        PackageTarget::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| OptionsError::UnknownTarget {
                name: s.to_string(),
                valid: PackageTarget::ALL
                    .iter()
                    .map(PackageTarget::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
