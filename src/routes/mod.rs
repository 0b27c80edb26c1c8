//! Route collection loading: gating, sanitization and registration hooks.

mod collection;
mod loader;
mod registrar;
mod sanitize;

pub use collection::{Route, RouteCollection};
pub use loader::{LoadError, RoutesLoader};
pub use registrar::{ApiUploadRegistrar, RouteRegistrar, UploadRegistrar};
pub use sanitize::{IdentitySanitizer, SlugSanitizer, SpecNameSanitizer};
