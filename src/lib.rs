//! # fileroute
//!
//! **fileroute** is a configuration-driven route registration layer for
//! named file resources. A declarative configuration file maps resource
//! keys (`avatar`, `document`, ...) to partial route entries; the crate
//! fills in the omitted names and paths from a naming convention, projects
//! the table for standard and API consumers and turns it into a route
//! collection the host router can mount.
//!
//! ## Architecture
//!
//! - **[`config`]** - the entry record and order-preserving table, file
//!   loading (YAML/JSON/TOML) and the [`ConfigResolver`] that defaults and
//!   projects it
//! - **[`naming`]** - the [`RouteNaming`] strategy that computes default
//!   route names and paths from a resource key
//! - **[`routes`]** - the [`RoutesLoader`] that gates entries on their
//!   `enabled` flags, runs specification names through a
//!   [`SpecNameSanitizer`] and hands each surviving entry to a
//!   [`RouteRegistrar`]
//! - **[`cli`]** - the `fileroute` binary: `dump` and `check` a
//!   configuration file
//!
//! Resolution happens once at build time, loading once at wiring time; a
//! loader instance refuses a second `load`.
//!
//! ## Example
//!
//! ```rust
//! use fileroute::config::{ConfigResolver, ConfigTable, RouteEntryConfig};
//! use fileroute::naming::ConventionNaming;
//! use fileroute::routes::{RoutesLoader, UploadRegistrar};
//!
//! let mut table = ConfigTable::new();
//! table.insert("avatar".to_string(), RouteEntryConfig::default());
//!
//! let resolver = ConfigResolver::new(ConventionNaming);
//! let resolved = resolver.sanitize(table);
//!
//! let mut loader = RoutesLoader::new(UploadRegistrar);
//! let routes = loader.load(&resolved)?;
//! assert_eq!(routes.len(), 1);
//! assert_eq!(
//!     routes.get("avatar_file").map(|r| r.path.as_str()),
//!     Some("/files/avatar"),
//! );
//! # Ok::<(), fileroute::routes::LoadError>(())
//! ```

pub mod cli;
pub mod config;
pub mod naming;
pub mod routes;

pub use config::{
    load_config, BuildOutput, BuildTargets, ConfigResolver, ConfigTable, ResourceKey,
    RouteEntryConfig,
};
pub use naming::{ConventionNaming, RouteNaming};
pub use routes::{
    ApiUploadRegistrar, IdentitySanitizer, LoadError, Route, RouteCollection, RouteRegistrar,
    RoutesLoader, SlugSanitizer, SpecNameSanitizer, UploadRegistrar,
};
