//! List command implementation

use gloam_core::Result;
use gloam_gl::Gl;
use gloam_source::NativeSource;

use crate::cli::ListArgs;

pub fn run(args: &ListArgs) -> Result<()> {
    for name in matching(args.filter.as_deref()) {
        println!("{name}");
    }
    Ok(())
}

/// Entry point names in table order, optionally filtered
fn matching(filter: Option<&str>) -> Vec<&'static str> {
    let needle = filter.map(str::to_ascii_lowercase);
    Gl::<NativeSource>::ENTRY_POINTS
        .iter()
        .filter_map(|name| name.to_str().ok())
        .filter(|name| {
            needle
                .as_deref()
                .map_or(true, |needle| name.to_ascii_lowercase().contains(needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_lists_everything() {
        assert_eq!(matching(None).len(), Gl::<NativeSource>::ENTRY_POINTS.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let names = matching(Some("FRAMEBUFFERS"));
        assert_eq!(
            names,
            ["glCheckFramebufferStatus", "glDeleteFramebuffers", "glGenFramebuffers"]
        );
    }

    #[test]
    fn test_filter_matches_anywhere_in_the_name() {
        assert_eq!(matching(Some("shadersource")), ["glGetShaderSource", "glShaderSource"]);
        assert_eq!(matching(Some("glShaderSource")), ["glShaderSource"]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        assert!(matching(Some("vulkan")).is_empty());
    }
}
