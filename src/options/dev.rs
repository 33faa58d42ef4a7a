//! Maintainer-only preset pointing at a fixed test website.
//!
//! Compiled only with the `dev` feature, so release builds of the CLI have
//! no path to it.

use super::{OptionOverrides, PakeCliOptions, default_options_ref, with_overrides};
use crate::error::{OptionsError, Result};
use std::ops::Deref;
use std::sync::LazyLock;

/// Website the dev preset packages.
pub const DEV_URL: &str = "https://weread.qq.com";

/// App display name of the dev preset.
pub const DEV_NAME: &str = "WeRead";

/// Only domain trusted by the dev preset.
pub const DEV_SAFE_DOMAIN: &str = "weread.qq.com";

/// Base options plus the identity of the app being packaged.
///
/// Derefs to [`PakeCliOptions`]; serializes as one flat record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DevPakeCliOptions {
    /// Base option record.
    #[serde(flatten)]
    pub options: PakeCliOptions,

    /// Target website.
    pub url: String,

    /// App display name.
    pub name: String,
}

impl DevPakeCliOptions {
    /// Host component of [`url`](Self::url).
    pub fn host(&self) -> Result<String> {
        let parsed = url::Url::parse(&self.url)?;
        parsed
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| OptionsError::MissingHost {
                url: self.url.clone(),
            })
    }

    /// Returns the serialized value of a single field, including `url` and `name`.
    pub fn field(&self, name: &str) -> Result<serde_json::Value> {
        match name {
            "url" => Ok(serde_json::Value::String(self.url.clone())),
            "name" => Ok(serde_json::Value::String(self.name.clone())),
            _ => self.options.field(name),
        }
    }
}

impl Deref for DevPakeCliOptions {
    type Target = PakeCliOptions;

    fn deref(&self) -> &Self::Target {
        &self.options
    }
}

/// Fields the dev preset changes relative to the base record.
pub fn dev_overrides() -> OptionOverrides {
    OptionOverrides::new()
        .safe_domain(vec![DEV_SAFE_DOMAIN.to_string()])
        .transparent(true)
}

static DEFAULT_DEV_PAKE_OPTIONS: LazyLock<DevPakeCliOptions> = LazyLock::new(|| {
    log::debug!("building dev option table for {}", DEV_URL);
    DevPakeCliOptions {
        options: with_overrides(default_options_ref(), &dev_overrides()),
        url: DEV_URL.to_string(),
        name: DEV_NAME.to_string(),
    }
});

/// Returns an owned copy of the dev preset.
pub fn dev_default_options() -> DevPakeCliOptions {
    DEFAULT_DEV_PAKE_OPTIONS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::default_options;

    #[test]
    fn differs_from_base_only_in_documented_fields() {
        let dev = dev_default_options();
        let base = default_options();

        assert!(dev.transparent);
        assert_eq!(dev.safe_domain, [DEV_SAFE_DOMAIN]);
        assert_eq!(dev.url, "https://weread.qq.com");
        assert_eq!(dev.name, "WeRead");
        assert_eq!(dev_overrides().overridden_fields(), ["transparent", "safeDomain"]);

        let reverted = PakeCliOptions {
            transparent: base.transparent,
            safe_domain: base.safe_domain.clone(),
            ..dev.options.clone()
        };
        assert_eq!(reverted, base);
    }

    #[test]
    fn safe_domain_is_the_dev_host() {
        let dev = dev_default_options();
        assert_eq!(dev.host().unwrap(), dev.safe_domain[0]);
    }

    #[test]
    fn host_requires_a_host() {
        let mut dev = dev_default_options();
        dev.url = "data:text/plain,hello".to_string();
        assert!(matches!(dev.host(), Err(OptionsError::MissingHost { .. })));

        dev.url = "not a url".to_string();
        assert!(matches!(dev.host(), Err(OptionsError::InvalidUrl(_))));
    }

    #[test]
    fn does_not_alias_base_sequences() {
        let mut dev = dev_default_options();
        dev.options.safe_domain.push("example.com".to_string());
        dev.options.inject.push("extra.js".to_string());

        assert!(default_options_ref().safe_domain.is_empty());
        assert!(default_options_ref().inject.is_empty());
        assert_eq!(dev_default_options().safe_domain, [DEV_SAFE_DOMAIN]);
    }

    #[test]
    fn serializes_flat() {
        let value = serde_json::to_value(dev_default_options()).unwrap();
        assert_eq!(value["url"], "https://weread.qq.com");
        assert_eq!(value["name"], "WeRead");
        assert_eq!(value["transparent"], true);
        assert_eq!(value["width"], 1200);
        assert_eq!(dev_default_options().field("name").unwrap(), "WeRead");
    }
}
