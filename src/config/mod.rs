//! Route configuration model, file loading and resolution.

mod load;
mod resolver;
mod types;

pub use load::load_config;
pub use resolver::{BuildOutput, BuildTargets, ConfigResolver};
pub use types::{ConfigTable, ResourceKey, RouteEntryConfig};
