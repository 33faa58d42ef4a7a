//! Default option tables for the packaging CLI.
//!
//! Provides the base record used whenever a user leaves an option unset,
//! the override mechanism for deriving customized copies, and (behind the
//! `dev` feature) the maintainer preset.

mod base;
#[cfg(any(test, feature = "dev"))]
mod dev;
mod overrides;
mod target;

pub use base::{
    DEFAULT_HEIGHT, DEFAULT_USER_AGENT, DEFAULT_WIDTH, FIELD_NAMES, PakeCliOptions,
    default_options, default_options_ref,
};
#[cfg(any(test, feature = "dev"))]
pub use dev::{
    DEV_NAME, DEV_SAFE_DOMAIN, DEV_URL, DevPakeCliOptions, dev_default_options, dev_overrides,
};
pub use overrides::{OptionOverrides, with_overrides};
pub use target::PackageTarget;
