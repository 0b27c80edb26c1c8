//! Route naming strategies.
//!
//! The resolver never invents names itself; it asks a [`RouteNaming`]
//! strategy for the default route name and path of a resource key whenever
//! the configuration file omits them. Concrete resource bundles can supply
//! their own convention by implementing the trait.

/// Computes default route names and paths from a resource key.
///
/// Each method must be a pure function of the key: the resolver calls it
/// exactly once per missing field per entry and expects the same answer for
/// the same key every time.
pub trait RouteNaming {
    /// Default name for the standard route of `key`.
    fn default_route_name(&self, key: &str) -> String;

    /// Default path for the standard route of `key`.
    fn default_route_path(&self, key: &str) -> String;

    /// Default name for the API route of `key`.
    fn default_api_route_name(&self, key: &str) -> String;

    /// Default path for the API route of `key`.
    fn default_api_route_path(&self, key: &str) -> String;
}

/// The crate's built-in convention.
///
/// | field      | value              |
/// |------------|--------------------|
/// | `name`     | `{key}_file`       |
/// | `path`     | `/files/{key}`     |
/// | `api_name` | `api_{key}_file`   |
/// | `api_path` | `/api/files/{key}` |
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionNaming;

impl RouteNaming for ConventionNaming {
    fn default_route_name(&self, key: &str) -> String {
        format!("{key}_file")
    }

    fn default_route_path(&self, key: &str) -> String {
        format!("/files/{key}")
    }

    fn default_api_route_name(&self, key: &str) -> String {
        format!("api_{key}_file")
    }

    fn default_api_route_path(&self, key: &str) -> String {
        format!("/api/files/{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_naming() {
        let naming = ConventionNaming;
        assert_eq!(naming.default_route_name("avatar"), "avatar_file");
        assert_eq!(naming.default_route_path("avatar"), "/files/avatar");
        assert_eq!(naming.default_api_route_name("avatar"), "api_avatar_file");
        assert_eq!(naming.default_api_route_path("avatar"), "/api/files/avatar");
    }
}
