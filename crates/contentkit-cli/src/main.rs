//! Registry inspector entry point.

use clap::{Parser, Subcommand};

use contentkit::ActionKind;
use contentkit_cli::config::resolve_manifest_path;
use contentkit_cli::{load_registry, report};

#[derive(Parser)]
#[command(
    name = "ckit",
    about = "Inspector for contentkit resource type manifests",
    version
)]
struct Cli {
    /// Path to a registry manifest (TOML).
    #[arg(short, long)]
    manifest: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a manifest parses and builds a registry (default).
    Validate {
        /// Path to a registry manifest (TOML).
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Print the whole registry as JSON.
    Info {
        /// Path to a registry manifest (TOML).
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Print one resource type as JSON.
    Show {
        /// Resource type id.
        type_id: String,

        /// Path to a registry manifest (TOML).
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// List a type's actions grouped by kind.
    Actions {
        /// Resource type id.
        type_id: String,

        /// Kind names to include (repeatable); all kinds when omitted.
        #[arg(short, long)]
        kind: Vec<String>,

        /// Path to a registry manifest (TOML).
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Validate { manifest: None }) {
        Commands::Validate { manifest } => {
            let effective = manifest.or(cli.manifest);
            let path = resolve_manifest_path(effective.as_deref());
            match load_registry(&path) {
                Ok(registry) => {
                    let action_total: usize =
                        registry.iter().map(|t| t.action_count()).sum();
                    println!("Valid manifest: {}", path.display());
                    println!("  Types: {}", registry.len());
                    println!("  Actions: {action_total}");
                }
                Err(e) => {
                    eprintln!("Invalid manifest: {e:#}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Info { manifest } => {
            let effective = manifest.or(cli.manifest);
            let path = resolve_manifest_path(effective.as_deref());
            let registry = load_registry(&path)?;
            let info = report::registry_report(&registry);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Show { type_id, manifest } => {
            let effective = manifest.or(cli.manifest);
            let path = resolve_manifest_path(effective.as_deref());
            let registry = load_registry(&path)?;
            let resource_type = registry.require(&type_id)?;
            let shown = report::type_report(resource_type);
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }

        Commands::Actions {
            type_id,
            kind,
            manifest,
        } => {
            let effective = manifest.or(cli.manifest);
            let path = resolve_manifest_path(effective.as_deref());
            let registry = load_registry(&path)?;
            let resource_type = registry.require(&type_id)?;

            let kinds = kind
                .iter()
                .map(|name| {
                    ActionKind::from_name(name)
                        .ok_or_else(|| anyhow::anyhow!("unknown action kind '{name}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let listed = report::actions_report(resource_type, &kinds);
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
    }

    Ok(())
}
