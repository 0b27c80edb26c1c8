use super::types::ConfigTable;
use crate::naming::RouteNaming;
use tracing::debug;

/// Which consumers the resolved configuration should be projected for.
///
/// Mirrors the two service targets of the host framework: the standard route
/// loader and the API route loader. Either, both or neither may exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildTargets {
    pub standard: bool,
    pub api: bool,
}

/// Projections produced by [`ConfigResolver::build`].
///
/// A projection is present only when the matching target was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    /// Deduplicated copy of the resolved table for the standard loader.
    pub standard: Option<ConfigTable>,
    /// Copy for the API loader with `enabled`/`type` rewritten from their
    /// `api_*` counterparts, then deduplicated.
    pub api: Option<ConfigTable>,
}

/// Resolves a raw configuration table into a fully defaulted one and
/// projects it for the standard and API loaders.
///
/// Defaulting never fails: every missing naming field is computed from the
/// resource key by the injected [`RouteNaming`] strategy, and all other
/// fields pass through untouched.
pub struct ConfigResolver<N: RouteNaming> {
    naming: N,
}

impl<N: RouteNaming> ConfigResolver<N> {
    pub fn new(naming: N) -> Self {
        Self { naming }
    }

    /// Fills the four naming fields of every entry that omits them.
    ///
    /// Each default is computed independently, so a partially specified
    /// entry keeps what it declared. Applying `sanitize` to an already
    /// resolved table is a no-op.
    #[must_use]
    pub fn sanitize(&self, table: ConfigTable) -> ConfigTable {
        let resolved: ConfigTable = table
            .into_iter()
            .map(|(key, mut entry)| {
                if entry.name.is_none() {
                    entry.name = Some(self.naming.default_route_name(&key));
                }
                if entry.path.is_none() {
                    entry.path = Some(self.naming.default_route_path(&key));
                }
                if entry.api_name.is_none() {
                    entry.api_name = Some(self.naming.default_api_route_name(&key));
                }
                if entry.api_path.is_none() {
                    entry.api_path = Some(self.naming.default_api_route_path(&key));
                }
                (key, entry)
            })
            .collect();

        debug!(entries = resolved.len(), "route configuration resolved");
        resolved
    }

    /// Projects the resolved table for the requested targets.
    ///
    /// The standard projection is a deduplicated copy of the table. The API
    /// projection overwrites each entry's `enabled` with `api_enabled` and,
    /// when a specification name is set, replaces it with the API one; it is
    /// then deduplicated the same way. Both projections are independent
    /// copies and the input table is never mutated. With no targets the call
    /// is a no-op.
    #[must_use]
    pub fn build(&self, table: &ConfigTable, targets: BuildTargets) -> BuildOutput {
        let mut output = BuildOutput::default();

        if targets.standard {
            output.standard = Some(table.dedup());
        }

        if targets.api {
            let api: ConfigTable = table
                .clone()
                .into_iter()
                .map(|(key, mut entry)| {
                    entry.enabled = entry.api_enabled;
                    if entry.spec_name.is_some() {
                        entry.spec_name = entry.api_spec_name.clone();
                    }
                    (key, entry)
                })
                .collect();
            output.api = Some(api.dedup());
        }

        debug!(
            standard = targets.standard,
            api = targets.api,
            "route configuration projected"
        );
        output
    }
}
