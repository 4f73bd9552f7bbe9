//! Parse command implementation

use gloam_core::{CapabilitySet, GloamError, ParseOptions, Result};
use gloam_gl::EXTENSIONS;
use serde::Serialize;

use crate::cli::ParseArgs;
use crate::commands::print_json;

#[derive(Debug, Serialize)]
struct Overflow {
    offset: usize,
    len: usize,
    limit: usize,
}

#[derive(Debug, Serialize)]
struct ParseReport {
    token_limit: usize,
    policy: &'static str,
    extensions: Vec<(&'static str, bool)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overflow: Option<Overflow>,
}

pub fn run(args: &ParseArgs) -> Result<()> {
    let options = options(args)?;
    let set = EXTENSIONS.parse_with(&args.extensions, &options);
    let report = report(&set, &options);

    if args.json {
        return print_json(&report);
    }

    for (label, enabled) in &report.extensions {
        println!("{label:<32} {}", if *enabled { "yes" } else { "no" });
    }
    if let Some(overflow) = &report.overflow {
        println!();
        println!(
            "Stopped at byte {}: token of {} bytes exceeds the {}-byte limit",
            overflow.offset, overflow.len, overflow.limit
        );
    }
    Ok(())
}

/// Process-wide options with the command-line overrides applied
fn options(args: &ParseArgs) -> Result<ParseOptions> {
    let mut options = ParseOptions::from_config();
    if let Some(limit) = args.limit {
        if limit == 0 {
            return Err(GloamError::ConfigError("--limit must be at least 1".into()));
        }
        options.token_limit = limit;
    }
    if let Some(overflow) = args.overflow {
        options.overflow = overflow.into();
    }
    Ok(options)
}

fn report(set: &CapabilitySet, options: &ParseOptions) -> ParseReport {
    ParseReport {
        token_limit: options.token_limit,
        policy: options.overflow.as_str(),
        extensions: set.iter().collect(),
        overflow: set.overflow().map(|o| Overflow {
            offset: o.offset,
            len: o.len,
            limit: o.limit,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OverflowArg;
    use gloam_core::OverflowPolicy;

    fn args(extensions: &str) -> ParseArgs {
        ParseArgs {
            extensions: extensions.to_string(),
            overflow: Some(OverflowArg::Halt),
            limit: Some(255),
            json: false,
        }
    }

    #[test]
    fn test_overrides_apply() {
        let mut a = args("");
        a.overflow = Some(OverflowArg::Skip);
        a.limit = Some(8);
        let options = options(&a).unwrap();
        assert_eq!(options.token_limit, 8);
        assert_eq!(options.overflow, OverflowPolicy::Skip);
    }

    #[test]
    fn test_zero_limit_is_a_config_error() {
        let mut a = args("");
        a.limit = Some(0);
        assert!(matches!(options(&a), Err(GloamError::ConfigError(_))));
    }

    #[test]
    fn test_report_lists_every_tracked_extension() {
        let a = args("GL_ARB_imaging GL_EXT_foo");
        let options = options(&a).unwrap();
        let set = EXTENSIONS.parse_with(&a.extensions, &options);
        let report = report(&set, &options);

        assert_eq!(
            report.extensions,
            [("GL_ARB_imaging", true), ("GL_ARB_framebuffer_object", false)]
        );
        assert!(report.overflow.is_none());
    }

    #[test]
    fn test_report_carries_the_overflow() {
        let mut a = args("GL_ARB_imaging GL_VERY_LONG_NAME GL_ARB_framebuffer_object");
        a.limit = Some(16);
        let options = options(&a).unwrap();
        let set = EXTENSIONS.parse_with(&a.extensions, &options);
        let report = report(&set, &options);

        let overflow = report.overflow.unwrap();
        assert_eq!((overflow.offset, overflow.len, overflow.limit), (15, 17, 16));
        assert_eq!(
            report.extensions,
            [("GL_ARB_imaging", true), ("GL_ARB_framebuffer_object", false)]
        );
    }
}
