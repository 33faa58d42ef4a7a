//! Default option tables for the Pake desktop packaging CLI.
//!
//! This library provides the fallback values used when a user packages a
//! website without passing any flags:
//! - the base option record ([`default_options`])
//! - explicit per-field overrides ([`with_overrides`])
//! - a maintainer-only preset behind the `dev` feature
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod options;

// Re-export commonly used types
pub use error::{OptionsError, Result};
pub use options::{
    OptionOverrides, PackageTarget, PakeCliOptions, default_options, default_options_ref,
    with_overrides,
};
#[cfg(feature = "dev")]
pub use options::{DevPakeCliOptions, dev_default_options};
