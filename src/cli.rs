//! Command implementations for the `drawkit` binary.

use anyhow::{bail, Context};
use clap::Args;
use drawkit_core::FigureId;
use drawkit_designer::{AlignReport, AlignStrategy, DesignerState, Drawing};
use drawkit_settings::Config;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Drawing file (JSON)
    pub drawing: PathBuf,

    /// Alignment: north, south, east, west, horizontal or vertical
    pub strategy: AlignStrategy,

    /// Shape ids to align (comma separated); all shapes when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<FigureId>,

    /// Configuration file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the aligned drawing here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Loads `path`, or the default config file when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(default) => Ok(Config::load_or_default(&default)?),
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Ok(Config::default())
            }
        },
    }
}

/// Aligns the shapes of a JSON drawing and returns the updated JSON.
pub fn align_json(
    json: &str,
    strategy: AlignStrategy,
    selection: &[FigureId],
    config: &Config,
) -> anyhow::Result<(String, AlignReport)> {
    let drawing = Drawing::from_json(json).context("Invalid drawing JSON")?;
    let mut state = DesignerState::with_drawing(drawing, config);

    if selection.is_empty() {
        state.select_all();
    } else {
        state.select_only(selection)?;
    }

    let Some(report) = state.align(strategy) else {
        bail!(
            "'{}' is unavailable: select at least two shapes of an enabled drawing",
            state.actions().get(strategy).name()
        );
    };

    let output = state.drawing().to_json_pretty()?;
    Ok((output, report))
}

pub fn execute_align(args: AlignArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let json = std::fs::read_to_string(&args.drawing)
        .with_context(|| format!("Failed to read {}", args.drawing.display()))?;

    let (output, report) = align_json(&json, args.strategy, &args.select, &config)?;
    tracing::info!(
        "Aligned {} shapes ({} moved, {} skipped)",
        report.aligned,
        report.moved,
        report.skipped
    );

    match &args.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", output),
    }
    Ok(())
}

/// One line per action: key, display name, accelerator.
pub fn describe_actions(config: &Config) -> String {
    let state = DesignerState::from_config(config);
    state
        .actions()
        .iter()
        .map(|action| {
            format!(
                "{:<22} {:<26} {}\n",
                action.action_key(),
                action.name(),
                action.accelerator()
            )
        })
        .collect()
}
