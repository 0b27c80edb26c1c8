use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static SPEC_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9_]+$").expect("spec name regex"));

/// Normalizes storage specification names before registration.
///
/// The loader runs every `type`/`api_type` value of an enabled entry
/// through this hook so a concrete bundle can validate or rewrite the
/// backend name its controllers will look up.
pub trait SpecNameSanitizer {
    fn sanitize(&self, spec_name: &str) -> String;
}

/// Passes specification names through untouched. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySanitizer;

impl SpecNameSanitizer for IdentitySanitizer {
    fn sanitize(&self, spec_name: &str) -> String {
        spec_name.to_string()
    }
}

/// Rewrites specification names to a lowercase `[a-z0-9_]` slug.
///
/// Names that already match are returned as-is; anything else is lowered,
/// non-alphanumeric runs become underscores and the rewrite is logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugSanitizer;

impl SpecNameSanitizer for SlugSanitizer {
    fn sanitize(&self, spec_name: &str) -> String {
        if SPEC_NAME_RE.is_match(spec_name) {
            return spec_name.to_string();
        }
        let slug = spec_name
            .to_lowercase()
            .replace(|c: char| !c.is_ascii_alphanumeric(), "_")
            .trim_matches('_')
            .to_string();
        warn!(original = %spec_name, slug = %slug, "specification name rewritten");
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_untouched() {
        assert_eq!(IdentitySanitizer.sanitize("Local FS"), "Local FS");
    }

    #[test]
    fn test_slug_rewrites_invalid_names() {
        assert_eq!(SlugSanitizer.sanitize("s3"), "s3");
        assert_eq!(SlugSanitizer.sanitize("Local FS"), "local_fs");
        assert_eq!(SlugSanitizer.sanitize("--gaufrette--"), "gaufrette");
    }
}
