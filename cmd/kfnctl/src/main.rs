use clap::{Parser, Subcommand};
use pkg_constants::paths::DEFAULT_FUNCTION_CONFIG;
use pkg_types::config::load_config_file;
use pkg_types::function::FunctionConfigFile;
use pkg_validation::{Kind, ValidationError, validate};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kfnctl", about = "Check function identifiers before deploying")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single identifier
    Check {
        /// Identifier kind (see `kfnctl kinds`)
        kind: Kind,
        /// Value to validate, checked exactly as given
        value: String,
    },
    /// Validate every identifier in a function config file
    Lint {
        /// Path to the function config file
        #[arg(long, short, default_value = DEFAULT_FUNCTION_CONFIG)]
        config: PathBuf,

        /// Function name, overrides the config file
        #[arg(long)]
        name: Option<String>,

        /// Namespace, overrides the config file
        #[arg(long, short, env = "FUNC_NAMESPACE")]
        namespace: Option<String>,
    },
    /// List the identifier kinds accepted by `check`
    Kinds,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let rejections = run(cli.command)?;
    if !rejections.is_empty() {
        for err in &rejections {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Executes a command, returning the identifiers it rejected.
fn run(command: Commands) -> anyhow::Result<Vec<ValidationError>> {
    match command {
        Commands::Check { kind, value } => match validate(kind, &value) {
            Ok(()) => {
                println!("ok");
                Ok(Vec::new())
            }
            Err(err) => Ok(vec![err]),
        },
        Commands::Lint {
            config,
            name,
            namespace,
        } => {
            let file_cfg: FunctionConfigFile = load_config_file(&config)?;
            info!("Config file: {}", config.display());

            // Merge: CLI args > config file
            let function = FunctionConfigFile {
                name: name.or(file_cfg.name),
                namespace: namespace.or(file_cfg.namespace),
                ..file_cfg
            };

            let errors = function.validate();
            info!(
                "Checked {} identifiers, {} rejected",
                function.identifiers().len(),
                errors.len()
            );
            if errors.is_empty() {
                println!("ok");
            }
            Ok(errors)
        }
        Commands::Kinds => {
            for kind in Kind::ALL {
                println!("{:<16} {}", kind, kind.label());
            }
            Ok(Vec::new())
        }
    }
}
