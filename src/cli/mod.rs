//! Command line interface for the defaults inspection tool.

mod args;

pub use args::{Args, OutputFormat};

use crate::error::Result;
use crate::options;
use std::io::Write;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args, &mut std::io::stdout().lock())
}

/// Runs the tool against already-parsed arguments, writing to `out`.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<i32> {
    let format = args.validate()?;

    #[cfg(feature = "dev")]
    if args.dev {
        log::debug!("printing dev preset as {:?}", format);
        let options = options::dev_default_options();
        let rendered = match &args.field {
            Some(name) => format.render_value(&options.field(name)?)?,
            None => format.render(&options)?,
        };
        writeln!(out, "{}", rendered.trim_end())?;
        return Ok(0);
    }

    log::debug!("printing defaults as {:?}", format);
    let options = options::default_options_ref();
    let rendered = match &args.field {
        Some(name) => format.render_value(&options.field(name)?)?,
        None => format.render(options)?,
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_with(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        execute(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_json_by_default() {
        let out = run_with(&["pake-defaults"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["width"], 1200);
        assert_eq!(value["targets"], "deb");
    }

    #[test]
    fn prints_toml() {
        let out = run_with(&["pake-defaults", "--format", "toml"]).unwrap();
        assert!(out.contains("height = 780"));
        assert!(out.contains("targets = \"deb\""));
        assert!(out.contains("inject = []"));
    }

    #[test]
    fn prints_single_field() {
        let out = run_with(&["pake-defaults", "--field", "resizable"]).unwrap();
        assert_eq!(out, "true\n");
    }

    #[test]
    fn rejects_unknown_format() {
        let err = run_with(&["pake-defaults", "--format", "yaml"]).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
