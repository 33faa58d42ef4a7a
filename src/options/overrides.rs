//! Explicit per-field overrides applied on top of a base record.

use super::{PackageTarget, PakeCliOptions};

/// A set of field overrides for [`PakeCliOptions`].
///
/// Each field left as `None` keeps the base value. Constructed with the
/// fluent setters, mirroring the way bundle settings are built.
///
/// # Examples
///
/// ```
/// use pake_cli_options::{default_options, with_overrides, OptionOverrides};
///
/// let overrides = OptionOverrides::new().width(800).show_menu(true);
/// let options = with_overrides(&default_options(), &overrides);
///
/// assert_eq!(options.width, 800);
/// assert!(options.show_menu);
/// assert_eq!(overrides.overridden_fields(), ["width", "showMenu"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionOverrides {
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    fullscreen: Option<bool>,
    #[serde(default)]
    resizable: Option<bool>,
    #[serde(default)]
    transparent: Option<bool>,
    #[serde(default)]
    user_agent: Option<String>,
    #[serde(default)]
    show_menu: Option<bool>,
    #[serde(default)]
    show_system_tray: Option<bool>,
    #[serde(default)]
    multi_arch: Option<bool>,
    #[serde(default)]
    targets: Option<PackageTarget>,
    #[serde(default)]
    iter_copy_file: Option<bool>,
    #[serde(default)]
    system_tray_icon: Option<String>,
    #[serde(default)]
    debug: Option<bool>,
    #[serde(default)]
    inject: Option<Vec<String>>,
    #[serde(default)]
    safe_domain: Option<Vec<String>>,
}

macro_rules! setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Overrides `", stringify!($field), "`.")]
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

macro_rules! into_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Overrides `", stringify!($field), "`.")]
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl OptionOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Default::default()
    }

    into_setters! {
        icon: String,
        user_agent: String,
        system_tray_icon: String,
        inject: Vec<String>,
        safe_domain: Vec<String>,
    }

    setters! {
        height: u32,
        width: u32,
        fullscreen: bool,
        resizable: bool,
        transparent: bool,
        show_menu: bool,
        show_system_tray: bool,
        multi_arch: bool,
        targets: PackageTarget,
        iter_copy_file: bool,
        debug: bool,
    }

    /// Returns true when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.overridden_fields().is_empty()
    }

    /// Serialized names of the overridden fields, in declaration order.
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        let set = [
            ("icon", self.icon.is_some()),
            ("height", self.height.is_some()),
            ("width", self.width.is_some()),
            ("fullscreen", self.fullscreen.is_some()),
            ("resizable", self.resizable.is_some()),
            ("transparent", self.transparent.is_some()),
            ("userAgent", self.user_agent.is_some()),
            ("showMenu", self.show_menu.is_some()),
            ("showSystemTray", self.show_system_tray.is_some()),
            ("multiArch", self.multi_arch.is_some()),
            ("targets", self.targets.is_some()),
            ("iterCopyFile", self.iter_copy_file.is_some()),
            ("systemTrayIcon", self.system_tray_icon.is_some()),
            ("debug", self.debug.is_some()),
            ("inject", self.inject.is_some()),
            ("safeDomain", self.safe_domain.is_some()),
        ];
        set.into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}

/// Copies `base` and applies the set fields of `overrides`.
///
/// The result owns all of its data; sequences are cloned, never shared
/// with `base`.
pub fn with_overrides(base: &PakeCliOptions, overrides: &OptionOverrides) -> PakeCliOptions {
    let mut options = base.clone();
    let fields = overrides.overridden_fields();
    if fields.is_empty() {
        return options;
    }
    log::debug!("applying {} option override(s)", fields.len());
    for field in &fields {
        log::trace!("override: {}", field);
    }

    // Exhaustive so a new field cannot be silently ignored.
    let OptionOverrides {
        icon,
        height,
        width,
        fullscreen,
        resizable,
        transparent,
        user_agent,
        show_menu,
        show_system_tray,
        multi_arch,
        targets,
        iter_copy_file,
        system_tray_icon,
        debug,
        inject,
        safe_domain,
    } = overrides.clone();
    if let Some(v) = icon {
        options.icon = v;
    }
    if let Some(v) = height {
        options.height = v;
    }
    if let Some(v) = width {
        options.width = v;
    }
    if let Some(v) = fullscreen {
        options.fullscreen = v;
    }
    if let Some(v) = resizable {
        options.resizable = v;
    }
    if let Some(v) = transparent {
        options.transparent = v;
    }
    if let Some(v) = user_agent {
        options.user_agent = v;
    }
    if let Some(v) = show_menu {
        options.show_menu = v;
    }
    if let Some(v) = show_system_tray {
        options.show_system_tray = v;
    }
    if let Some(v) = multi_arch {
        options.multi_arch = v;
    }
    if let Some(v) = targets {
        options.targets = v;
    }
    if let Some(v) = iter_copy_file {
        options.iter_copy_file = v;
    }
    if let Some(v) = system_tray_icon {
        options.system_tray_icon = v;
    }
    if let Some(v) = debug {
        options.debug = v;
    }
    if let Some(v) = inject {
        options.inject = v;
    }
    if let Some(v) = safe_domain {
        options.safe_domain = v;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::default_options;

    #[test]
    fn empty_overrides_yield_base() {
        let overrides = OptionOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(with_overrides(&default_options(), &overrides), default_options());
    }

    #[test]
    fn applies_only_set_fields() {
        let base = default_options();
        let overrides = OptionOverrides::new()
            .targets(PackageTarget::AppImage)
            .inject(vec!["style.css".to_string()]);
        let options = with_overrides(&base, &overrides);

        assert_eq!(options.targets, PackageTarget::AppImage);
        assert_eq!(options.inject, ["style.css"]);
        assert_eq!(
            PakeCliOptions {
                targets: base.targets,
                inject: base.inject.clone(),
                ..options
            },
            base
        );
    }

    #[test]
    fn deserializes_partial_override_set() {
        let overrides: OptionOverrides =
            serde_json::from_str(r#"{"fullscreen": true, "userAgent": "test-agent"}"#).unwrap();
        assert_eq!(overrides.overridden_fields(), ["fullscreen", "userAgent"]);

        let options = with_overrides(&default_options(), &overrides);
        assert!(options.fullscreen);
        assert_eq!(options.user_agent, "test-agent");
    }

    #[test]
    fn rejects_unknown_override_field() {
        let result = serde_json::from_str::<OptionOverrides>(r#"{"colour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn every_field_maps_to_its_own_slot() {
        let overrides = OptionOverrides::new()
            .icon("icon.png")
            .height(11)
            .width(22)
            .fullscreen(true)
            .resizable(false)
            .transparent(true)
            .user_agent("agent")
            .show_menu(true)
            .show_system_tray(true)
            .multi_arch(true)
            .targets(PackageTarget::Dmg)
            .iter_copy_file(true)
            .system_tray_icon("tray.png")
            .debug(true)
            .inject(vec!["a.js".to_string()])
            .safe_domain(vec!["example.com".to_string()]);
        assert_eq!(overrides.overridden_fields(), crate::options::FIELD_NAMES);

        let expected = PakeCliOptions {
            icon: "icon.png".to_string(),
            height: 11,
            width: 22,
            fullscreen: true,
            resizable: false,
            transparent: true,
            user_agent: "agent".to_string(),
            show_menu: true,
            show_system_tray: true,
            multi_arch: true,
            targets: PackageTarget::Dmg,
            iter_copy_file: true,
            system_tray_icon: "tray.png".to_string(),
            debug: true,
            inject: vec!["a.js".to_string()],
            safe_domain: vec!["example.com".to_string()],
        };
        assert_eq!(with_overrides(&default_options(), &overrides), expected);
    }
}
