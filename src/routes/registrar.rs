use super::collection::{Route, RouteCollection};
use crate::config::RouteEntryConfig;
use http::Method;
use tracing::warn;

/// Hook that turns one configuration entry into concrete routes.
///
/// The loader invokes `register` exactly once per non-skipped entry, in
/// table order, with the entry's specification names already sanitized.
/// An implementation may add one route, several or none; validating that
/// the entry carries everything it needs is its own business.
pub trait RouteRegistrar {
    fn register(&mut self, key: &str, entry: &RouteEntryConfig, routes: &mut RouteCollection);
}

impl<F> RouteRegistrar for F
where
    F: FnMut(&str, &RouteEntryConfig, &mut RouteCollection),
{
    fn register(&mut self, key: &str, entry: &RouteEntryConfig, routes: &mut RouteCollection) {
        self(key, entry, routes)
    }
}

/// Registers the standard upload route of a resource.
///
/// Emits one `POST` route from `name`/`path`. Entries that still lack a
/// name or path (a raw table that skipped resolution) are logged and
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadRegistrar;

impl RouteRegistrar for UploadRegistrar {
    fn register(&mut self, key: &str, entry: &RouteEntryConfig, routes: &mut RouteCollection) {
        let (name, path) = match (entry.name.as_ref(), entry.path.as_ref()) {
            (Some(name), Some(path)) => (name, path),
            _ => {
                warn!(resource = %key, "entry has no route name or path, skipping");
                return;
            }
        };
        routes.add(Route {
            name: name.clone(),
            path: path.clone(),
            methods: vec![Method::POST],
            spec_name: entry.spec_name.clone(),
        });
    }
}

/// Registers the API variant route of a resource.
///
/// Same as [`UploadRegistrar`] but reads `api_name`/`api_path`. Meant to be
/// fed the API projection of the resolved table, where `type` already holds
/// the API specification name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiUploadRegistrar;

impl RouteRegistrar for ApiUploadRegistrar {
    fn register(&mut self, key: &str, entry: &RouteEntryConfig, routes: &mut RouteCollection) {
        let (name, path) = match (entry.api_name.as_ref(), entry.api_path.as_ref()) {
            (Some(name), Some(path)) => (name, path),
            _ => {
                warn!(resource = %key, "entry has no API route name or path, skipping");
                return;
            }
        };
        routes.add(Route {
            name: name.clone(),
            path: path.clone(),
            methods: vec![Method::POST],
            spec_name: entry.spec_name.clone(),
        });
    }
}
