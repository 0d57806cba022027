//! Grid-pattern rectangle: a colored box filled with a tiled SVG line pattern.
//!
//! Each tile holds one right-angle path, `M0 {h}V.5H{w}`: up the left edge,
//! then across the top half a unit in. Tiled, the L shapes read as grid lines.
//! The `<pattern>` id comes from an [`IdSource`] so that several rectangles
//! on one page never share a definition.

use crate::classes::merge_classes;
use crate::error::BackdropError;
use crate::ids::{process_ids, IdSource};
use crate::markup::{Decoration, Element};
use crate::params::{param_length, param_string};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const DEFAULT_BACKGROUND: &str = "bg-blue-600";
const DEFAULT_GRID_COLOR: &str = "text-white/10";
const DEFAULT_ROUNDING: &str = "rounded-br-6xl";
const DEFAULT_TILE: &str = "128";
const DEFAULT_ANCHOR: &str = "100%";
const DEFAULT_TRANSFORM: &str = "translate(112 64)";
const SVG_CLASS: &str = "absolute inset-0 h-full w-full";

/// Settings for one grid rectangle.
///
/// Lengths are kept as strings and copied into the SVG verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPatternConfig {
    /// Background class, e.g. `bg-indigo-600`.
    pub background: String,
    /// Text-color class; the pattern strokes with `currentColor`.
    pub grid_color: String,
    pub rounding: String,
    pub class_name: String,
    pub tile_width: String,
    pub tile_height: String,
    pub x: String,
    pub y: String,
    pub pattern_transform: String,
}

impl Default for GridPatternConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_owned(),
            grid_color: DEFAULT_GRID_COLOR.to_owned(),
            rounding: DEFAULT_ROUNDING.to_owned(),
            class_name: String::new(),
            tile_width: DEFAULT_TILE.to_owned(),
            tile_height: DEFAULT_TILE.to_owned(),
            x: DEFAULT_ANCHOR.to_owned(),
            y: DEFAULT_ANCHOR.to_owned(),
            pattern_transform: DEFAULT_TRANSFORM.to_owned(),
        }
    }
}

impl GridPatternConfig {
    /// Default config with the given tile size.
    pub fn with_tile(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            tile_width: width.into(),
            tile_height: height.into(),
            ..Self::default()
        }
    }

    /// Builds a config from a JSON object, falling back to defaults for
    /// missing or mistyped fields.
    ///
    /// Also accepts the original component prop names (`colorFondo`,
    /// `colorCuadricula`, `radioRedondeado`, `anchoCuadricula`,
    /// `altoCuadricula`, `patternTransform`, `className`). Tile sizes may be
    /// JSON strings or numbers.
    pub fn from_json(params: &Value) -> Result<Self, BackdropError> {
        if !params.is_object() {
            return Err(BackdropError::InvalidConfig(
                "grid config must be a JSON object".to_string(),
            ));
        }
        Ok(Self {
            background: param_string(params, &["background", "colorFondo"], DEFAULT_BACKGROUND),
            grid_color: param_string(
                params,
                &["grid_color", "colorCuadricula"],
                DEFAULT_GRID_COLOR,
            ),
            rounding: param_string(params, &["rounding", "radioRedondeado"], DEFAULT_ROUNDING),
            class_name: param_string(params, &["class_name", "className"], ""),
            tile_width: param_length(params, &["tile_width", "anchoCuadricula"], DEFAULT_TILE),
            tile_height: param_length(params, &["tile_height", "altoCuadricula"], DEFAULT_TILE),
            x: param_length(params, &["x"], DEFAULT_ANCHOR),
            y: param_length(params, &["y"], DEFAULT_ANCHOR),
            pattern_transform: param_string(
                params,
                &["pattern_transform", "patternTransform"],
                DEFAULT_TRANSFORM,
            ),
        })
    }

    /// Checks that both tile sizes are positive finite numbers, written
    /// without surrounding whitespace since they are copied verbatim.
    pub fn validate(&self) -> Result<(), BackdropError> {
        check_tile("tile_width", &self.tile_width)?;
        check_tile("tile_height", &self.tile_height)
    }
}

fn check_tile(name: &'static str, value: &str) -> Result<(), BackdropError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(()),
        _ => Err(BackdropError::InvalidDimension {
            name,
            value: value.to_string(),
        }),
    }
}

/// The single path drawn in each tile.
pub fn pattern_path(width: &str, height: &str) -> String {
    format!("M0 {height}V.5H{width}")
}

/// `<pattern>` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternDef {
    pub id: String,
    pub width: String,
    pub height: String,
    pub units: &'static str,
    pub x: String,
    pub y: String,
    pub transform: String,
    pub path: String,
}

/// Resolved grid rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPattern {
    pub container_class: String,
    pub svg_class: &'static str,
    pub pattern: PatternDef,
    /// Paint reference for the full-bounds rect, `url(#{id})`.
    pub fill: String,
}

/// Renders grid rectangles, drawing one pattern id per call.
#[derive(Clone, Copy)]
pub struct GridPatternRenderer<'a> {
    ids: &'a dyn IdSource,
}

impl<'a> GridPatternRenderer<'a> {
    pub fn new(ids: &'a dyn IdSource) -> Self {
        Self { ids }
    }

    /// Resolves a config into a pattern description with a fresh id.
    ///
    /// Returns `BackdropError::InvalidDimension` if a tile size is not a
    /// positive number.
    pub fn render(&self, config: &GridPatternConfig) -> Result<GridPattern, BackdropError> {
        config.validate()?;
        let id = self.ids.fresh_id();
        debug!(
            id = %id,
            tile_width = %config.tile_width,
            tile_height = %config.tile_height,
            "rendering grid pattern"
        );

        Ok(GridPattern {
            container_class: merge_classes([
                &config.background,
                &config.grid_color,
                &config.rounding,
                &config.class_name,
            ]),
            svg_class: SVG_CLASS,
            fill: format!("url(#{id})"),
            pattern: PatternDef {
                id,
                width: config.tile_width.clone(),
                height: config.tile_height.clone(),
                units: "userSpaceOnUse",
                x: config.x.clone(),
                y: config.y.clone(),
                transform: config.pattern_transform.clone(),
                path: pattern_path(&config.tile_width, &config.tile_height),
            },
        })
    }
}

impl Default for GridPatternRenderer<'static> {
    /// Renderer backed by the process-wide id counter.
    fn default() -> Self {
        Self::new(process_ids())
    }
}

impl Decoration for GridPattern {
    fn kind(&self) -> &'static str {
        "grid"
    }

    fn to_element(&self) -> Element {
        let p = &self.pattern;
        let pattern = Element::new("pattern")
            .attr("id", p.id.as_str())
            .attr("width", p.width.as_str())
            .attr("height", p.height.as_str())
            .attr("patternUnits", p.units)
            .attr("x", p.x.as_str())
            .attr("y", p.y.as_str())
            .attr("patternTransform", p.transform.as_str())
            .child(
                Element::new("path")
                    .attr("d", p.path.as_str())
                    .attr("fill", "none")
                    .attr("stroke", "currentColor"),
            );
        let svg = Element::new("svg")
            .attr("aria-hidden", "true")
            .attr("class", self.svg_class)
            .child(Element::new("defs").child(pattern))
            .child(
                Element::new("rect")
                    .attr("width", "100%")
                    .attr("height", "100%")
                    .attr("fill", self.fill.as_str()),
            );
        Element::new("div")
            .attr("class", self.container_class.as_str())
            .child(svg)
    }
}
