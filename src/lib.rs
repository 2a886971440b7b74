//! # DrawKit
//!
//! Alignment tools for a vector drawing editor: line up the selected shapes
//! on a shared edge or centerline as a single undoable edit.
//!
//! ## Architecture
//!
//! DrawKit is organized as a workspace with multiple crates:
//!
//! 1. **drawkit-core** - Geometry, figure/view traits, errors
//! 2. **drawkit-settings** - Configuration files and the label bundle
//! 3. **drawkit-designer** - Drawing, selection, alignment actions, undo/redo
//! 4. **drawkit** - Command-line binary that integrates all crates

pub mod cli;

pub use drawkit_core::{DrawingView, Error, Figure, FigureId, Rect, Result, Translation};
pub use drawkit_designer::{
    AlignAction, AlignActions, AlignReport, AlignStrategy, DesignerState, Drawing, DrawingObject,
    KeyStroke, ShortcutMap, UndoRedoManager,
};
pub use drawkit_settings::{Config, Labels, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for command results
/// - RUST_LOG environment variable support
/// - JSON lines instead of human-readable output when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
