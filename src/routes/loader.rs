use super::collection::RouteCollection;
use super::registrar::RouteRegistrar;
use super::sanitize::{IdentitySanitizer, SpecNameSanitizer};
use crate::config::ConfigTable;
use std::fmt;
use tracing::{debug, info};

/// Whether the loader has produced its route collection yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Unloaded,
    Loaded,
}

/// Errors raised by [`RoutesLoader::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// `load` was already called on this instance. The host router wires
    /// each loader in exactly once; a second call means it was added twice.
    AlreadyLoaded,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::AlreadyLoaded => write!(f, "Do not add this loader twice"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Converts a resolved configuration table into a route collection.
///
/// Single-shot: one loader instance produces one collection. Per entry, the
/// `enabled` gate decides registration — an absent gate means always-on, an
/// explicit `false` skips the entry — and specification names of gated-on
/// entries pass through the [`SpecNameSanitizer`] before the
/// [`RouteRegistrar`] sees them.
///
/// Not designed for concurrent use; the load-once guard is a logical
/// invariant, not a synchronization primitive.
pub struct RoutesLoader<R: RouteRegistrar, S: SpecNameSanitizer = IdentitySanitizer> {
    registrar: R,
    sanitizer: S,
    state: LoadState,
}

impl<R: RouteRegistrar> RoutesLoader<R> {
    /// Loader with the identity sanitizer.
    pub fn new(registrar: R) -> Self {
        Self::with_sanitizer(registrar, IdentitySanitizer)
    }
}

impl<R: RouteRegistrar, S: SpecNameSanitizer> RoutesLoader<R, S> {
    pub fn with_sanitizer(registrar: R, sanitizer: S) -> Self {
        Self {
            registrar,
            sanitizer,
            state: LoadState::Unloaded,
        }
    }

    /// Registers every gated-on entry of `table`, in table order.
    ///
    /// # Errors
    ///
    /// [`LoadError::AlreadyLoaded`] on any call after the first. The first
    /// call's collection is not affected.
    pub fn load(&mut self, table: &ConfigTable) -> Result<RouteCollection, LoadError> {
        if self.state == LoadState::Loaded {
            return Err(LoadError::AlreadyLoaded);
        }

        let mut routes = RouteCollection::new();
        if table.is_empty() {
            self.state = LoadState::Loaded;
            info!(route_count = 0, "route collection loaded from empty configuration");
            return Ok(routes);
        }

        for (key, entry) in table.iter() {
            let enabled = match entry.enabled {
                // no gate at all: register as-is, specification names untouched
                None => {
                    self.registrar.register(key, entry, &mut routes);
                    continue;
                }
                Some(enabled) => enabled,
            };
            if !enabled {
                debug!(resource = %key, "route disabled, skipping");
                continue;
            }

            let mut entry = entry.clone();
            if let Some(spec_name) = entry.spec_name.take() {
                entry.spec_name = Some(self.sanitizer.sanitize(&spec_name));
            }
            if let Some(api_spec_name) = entry.api_spec_name.take() {
                entry.api_spec_name = Some(self.sanitizer.sanitize(&api_spec_name));
            }
            self.registrar.register(key, &entry, &mut routes);
        }

        self.state = LoadState::Loaded;
        info!(route_count = routes.len(), "route collection loaded");
        Ok(routes)
    }
}
