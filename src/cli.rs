use crate::config::{load_config, BuildTargets, ConfigResolver, ConfigTable};
use crate::naming::ConventionNaming;
use crate::routes::{ApiUploadRegistrar, RoutesLoader, UploadRegistrar};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fileroute")]
#[command(about = "fileroute CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a route configuration file and print the route table
    Dump {
        #[arg(short, long)]
        config: PathBuf,

        /// Print the API projection instead of the standard one
        #[arg(long, default_value_t = false)]
        api: bool,
    },
    /// Resolve a route configuration file and report what would be registered
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Dump { config, api } => dump(config, *api),
        Commands::Check { config } => check(config),
    }
}

fn resolve(path: &Path) -> anyhow::Result<ConfigTable> {
    let raw = load_config(path)?;
    let resolver = ConfigResolver::new(ConventionNaming);
    Ok(resolver.sanitize(raw))
}

fn dump(path: &Path, api: bool) -> anyhow::Result<()> {
    let resolved = resolve(path)?;
    let resolver = ConfigResolver::new(ConventionNaming);
    let output = resolver.build(
        &resolved,
        BuildTargets {
            standard: !api,
            api,
        },
    );

    let collection = if api {
        let table = output.api.unwrap_or_default();
        RoutesLoader::new(ApiUploadRegistrar).load(&table)?
    } else {
        let table = output.standard.unwrap_or_default();
        RoutesLoader::new(UploadRegistrar).load(&table)?
    };

    collection.dump();
    Ok(())
}

fn check(path: &Path) -> anyhow::Result<()> {
    let resolved = resolve(path)?;

    let mut always_on = 0usize;
    let mut enabled = 0usize;
    let mut disabled = 0usize;
    for (_, entry) in resolved.iter() {
        match entry.enabled {
            None => always_on += 1,
            Some(true) => enabled += 1,
            Some(false) => disabled += 1,
        }
    }

    println!("{}", serde_yaml::to_string(&resolved)?);
    println!(
        "[check] entries={} always_on={always_on} enabled={enabled} disabled={disabled}",
        resolved.len()
    );
    Ok(())
}
