#![deny(unsafe_code)]
//! Core types for backdrop, a pair of decorative page-background generators.
//!
//! Provides the blob generator ([`render_blob`]), the grid-pattern generator
//! ([`GridPatternRenderer`]), the immutable lookup tables behind them
//! ([`BlobShape`], [`ColorVariant`], [`Position`]), class merging, pattern id
//! sources, and HTML/SVG serialization via the [`Decoration`] trait.

pub mod blob;
pub mod classes;
pub mod error;
pub mod grid;
pub mod ids;
pub mod markup;
pub mod params;
pub mod position;
pub mod shape;
pub mod variant;

pub use blob::{render_blob, BlobConfig, BlobLayers};
pub use classes::merge_classes;
pub use error::BackdropError;
pub use grid::{GridPattern, GridPatternConfig, GridPatternRenderer};
pub use ids::{IdSource, KeyedIds, SequentialIds};
pub use markup::{Decoration, Element};
pub use position::{Position, PositionRule};
pub use shape::{BlobShape, ShapeDefinition};
pub use variant::{ColorPair, ColorVariant};
