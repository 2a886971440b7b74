use clap::{Parser, Subcommand};
use drawkit::cli::{self, AlignArgs};
use drawkit::init_logging;

#[derive(Parser)]
#[command(name = "drawkit")]
#[command(about = "Align shapes in DrawKit drawings", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long = "log-json", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align shapes of a drawing file
    #[command(alias = "a")]
    Align(AlignArgs),

    /// List the alignment actions with their labels and shortcuts
    Actions {
        /// Configuration file (.toml or .json)
        #[arg(long, value_name = "PATH")]
        config: Option<std::path::PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_json)?;

    match args.command {
        Commands::Align(align_args) => cli::execute_align(align_args),
        Commands::Actions { config } => {
            let config = cli::load_config(config.as_deref())?;
            print!("{}", cli::describe_actions(&config));
            Ok(())
        }
    }
}
