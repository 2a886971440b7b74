//! # DrawKit Core
//!
//! Core types and traits for DrawKit.
//! Provides the geometry primitives, the figure and drawing-view collaborator
//! interfaces the editing commands are written against, and the shared error
//! type.

pub mod error;
pub mod figure;
pub mod geometry;

pub use error::{Error, Result};
pub use figure::{transform_figure, DrawingView, Figure, FigureId};
pub use geometry::{Rect, Translation, RELATIVE_TOLERANCE};
