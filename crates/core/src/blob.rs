//! Gradient blob: a blurred, polygon-clipped gradient used as a background accent.
//!
//! [`render_blob`] resolves a [`BlobConfig`] against the shape, variant and
//! position tables and returns two nested layers: an absolutely positioned,
//! blurred container and the clipped gradient shape inside it. Rendering is
//! referentially transparent.

use crate::classes::merge_classes;
use crate::error::BackdropError;
use crate::markup::{Decoration, Element};
use crate::params::{param_f64, param_opt_string, param_string};
use crate::position::Position;
use crate::shape::BlobShape;
use crate::variant::{ColorPair, ColorVariant};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// Default opacity, in percent.
const DEFAULT_OPACITY: f64 = 30.0;
const DEFAULT_BLUR: &str = "blur-3xl";
const DEFAULT_SIZE: &str = "w-[50.0625rem]";
const DEFAULT_ASPECT_RATIO: &str = "aspect-[801/1036]";
const DEFAULT_Z_INDEX: &str = "-z-10";
/// Gradient runs from the bottom-left corner to the top-right one.
const GRADIENT_DIRECTION: &str = "to top right";

/// Everything needed to render one blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlobConfig {
    pub variant: ColorVariant,
    pub shape: BlobShape,
    pub position: Position,
    /// Explicit start color. Only used when `to_color` is also set.
    pub from_color: Option<String>,
    /// Explicit end color. Only used when `from_color` is also set.
    pub to_color: Option<String>,
    /// Percent, 0 to 100 inclusive.
    pub opacity: f64,
    pub blur: String,
    pub size: String,
    pub aspect_ratio: String,
    /// Extra classes appended to the container.
    pub class_name: String,
    /// Stack-order class for the container.
    pub z_index: String,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            variant: ColorVariant::default(),
            shape: BlobShape::default(),
            position: Position::default(),
            from_color: None,
            to_color: None,
            opacity: DEFAULT_OPACITY,
            blur: DEFAULT_BLUR.to_owned(),
            size: DEFAULT_SIZE.to_owned(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_owned(),
            class_name: String::new(),
            z_index: DEFAULT_Z_INDEX.to_owned(),
        }
    }
}

impl BlobConfig {
    /// Default config with the given variant.
    pub fn with_variant(variant: ColorVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn aurora() -> Self {
        Self::with_variant(ColorVariant::Aurora)
    }

    pub fn sunset() -> Self {
        Self::with_variant(ColorVariant::Sunset)
    }

    pub fn ocean() -> Self {
        Self::with_variant(ColorVariant::Ocean)
    }

    pub fn forest() -> Self {
        Self::with_variant(ColorVariant::Forest)
    }

    /// Builds a config from a JSON object, falling back to defaults for
    /// missing or mistyped fields.
    ///
    /// Accepts snake_case names and the camelCase names used by the
    /// component props (`fromColor`, `aspectRatio`, ...). Table keys are
    /// strict: an unknown `variant`, `shape` or `position` is an error.
    pub fn from_json(params: &Value) -> Result<Self, BackdropError> {
        if !params.is_object() {
            return Err(BackdropError::InvalidConfig(
                "blob config must be a JSON object".to_string(),
            ));
        }
        Ok(Self {
            variant: param_key(params, "variant")?.unwrap_or_default(),
            shape: param_key(params, "shape")?.unwrap_or_default(),
            position: param_key(params, "position")?.unwrap_or_default(),
            from_color: param_opt_string(params, &["from_color", "fromColor", "from"]),
            to_color: param_opt_string(params, &["to_color", "toColor", "to"]),
            opacity: param_f64(params, &["opacity"], DEFAULT_OPACITY),
            blur: param_string(params, &["blur"], DEFAULT_BLUR),
            size: param_string(params, &["size"], DEFAULT_SIZE),
            aspect_ratio: param_string(
                params,
                &["aspect_ratio", "aspectRatio"],
                DEFAULT_ASPECT_RATIO,
            ),
            class_name: param_string(params, &["class_name", "className"], ""),
            z_index: param_string(params, &["z_index", "zIndex"], DEFAULT_Z_INDEX),
        })
    }

    /// Picks the gradient stops: both explicit colors when both are given,
    /// otherwise the variant's pair.
    pub fn resolve_colors(&self) -> ColorPair {
        match (non_empty(&self.from_color), non_empty(&self.to_color)) {
            (Some(from), Some(to)) => ColorPair::new(from, to),
            _ => self.variant.colors(),
        }
    }
}

fn non_empty(color: &Option<String>) -> Option<&str> {
    color.as_deref().filter(|c| !c.is_empty())
}

/// Reads a table key. Missing is `None`; present but unknown or non-string is an error.
fn param_key<T>(params: &Value, name: &'static str) -> Result<Option<T>, BackdropError>
where
    T: FromStr<Err = BackdropError>,
{
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s.parse().map(Some),
        Some(other) => Err(BackdropError::InvalidConfig(format!(
            "'{name}' must be a string, got {other}"
        ))),
    }
}

/// Rejects colors that would end the gradient value and start new
/// declarations inside the inline style.
fn check_color(color: &str) -> Result<(), BackdropError> {
    if color.contains([';', '{', '}']) {
        return Err(BackdropError::InvalidColor(color.to_string()));
    }
    Ok(())
}

/// CSS `linear-gradient` between two stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearGradient {
    pub direction: &'static str,
    pub from: String,
    pub to: String,
}

impl LinearGradient {
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}, {}, {})",
            self.direction, self.from, self.to
        )
    }
}

/// Outer, absolutely positioned layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobContainer {
    pub class: String,
}

/// Inner clipped gradient layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLayer {
    pub class: String,
    pub clip_path: String,
    pub gradient: LinearGradient,
    /// `configured / 100`, in [0, 1].
    pub opacity: f64,
}

impl ShapeLayer {
    /// Inline style declarations.
    pub fn style(&self) -> String {
        format!(
            "clip-path: {}; background: {}; opacity: {}",
            self.clip_path,
            self.gradient.css(),
            self.opacity
        )
    }
}

/// Resolved blob, ready for a host to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlobLayers {
    pub container: BlobContainer,
    pub shape: ShapeLayer,
}

/// Resolves a blob config into its two layers.
///
/// Returns `BackdropError::InvalidRange` if opacity is outside [0, 100], or
/// `BackdropError::InvalidColor` if an explicit color holds `;`, `{` or `}`.
pub fn render_blob(config: &BlobConfig) -> Result<BlobLayers, BackdropError> {
    if !(0.0..=100.0).contains(&config.opacity) {
        return Err(BackdropError::InvalidRange {
            name: "opacity",
            value: config.opacity,
            min: 0.0,
            max: 100.0,
        });
    }
    debug!(
        shape = %config.shape,
        variant = %config.variant,
        position = %config.position,
        opacity = config.opacity,
        "rendering blob"
    );

    let ColorPair { from, to } = config.resolve_colors();
    check_color(&from)?;
    check_color(&to)?;
    let container = BlobContainer {
        class: merge_classes([
            "absolute",
            config.position.rule().classes().as_str(),
            config.z_index.as_str(),
            "transform-gpu overflow-hidden",
            config.blur.as_str(),
            config.class_name.as_str(),
        ]),
    };
    let shape = ShapeLayer {
        class: merge_classes([&config.aspect_ratio, &config.size]),
        clip_path: config.shape.definition().clip_path(),
        gradient: LinearGradient {
            direction: GRADIENT_DIRECTION,
            from,
            to,
        },
        opacity: config.opacity / 100.0,
    };
    Ok(BlobLayers { container, shape })
}

impl Decoration for BlobLayers {
    fn kind(&self) -> &'static str {
        "blob"
    }

    fn to_element(&self) -> Element {
        Element::new("div")
            .attr("aria-hidden", "true")
            .attr("class", self.container.class.as_str())
            .child(
                Element::new("div")
                    .attr("class", self.shape.class.as_str())
                    .attr("style", self.shape.style()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(config: &BlobConfig) -> BlobLayers {
        render_blob(config).unwrap()
    }

    #[test]
    fn defaults_match_component_props() {
        let c = BlobConfig::default();
        assert_eq!(c.variant, ColorVariant::Aurora);
        assert_eq!(c.shape, BlobShape::Organic);
        assert_eq!(c.position, Position::TopRight);
        assert_eq!(c.opacity, 30.0);
        assert_eq!(c.blur, "blur-3xl");
        assert_eq!(c.size, "w-[50.0625rem]");
        assert_eq!(c.aspect_ratio, "aspect-[801/1036]");
        assert_eq!(c.z_index, "-z-10");
        assert!(c.class_name.is_empty());
    }

    #[test]
    fn ocean_cloud_bottom_left_half_opacity() {
        let config = BlobConfig {
            variant: ColorVariant::Ocean,
            shape: BlobShape::Cloud,
            position: Position::BottomLeft,
            opacity: 50.0,
            ..BlobConfig::default()
        };
        let layers = render(&config);
        assert_eq!(layers.shape.gradient.from, "#0ea5e9");
        assert_eq!(layers.shape.gradient.to, "#06b6d4");
        assert_eq!(
            layers.shape.clip_path,
            BlobShape::Cloud.definition().clip_path()
        );
        assert_eq!(layers.shape.opacity, 0.5);
        assert!(layers
            .container
            .class
            .contains("bottom-0 left-0 right-1/2 -mr-24 lg:mr-24 xl:mr-48"));
    }

    #[test]
    fn container_carries_layout_tokens_in_order() {
        let layers = render(&BlobConfig {
            class_name: "pointer-events-none".into(),
            ..BlobConfig::default()
        });
        assert_eq!(
            layers.container.class,
            "absolute top-0 right-0 left-1/2 -ml-24 lg:ml-24 xl:ml-48 -z-10 \
             transform-gpu overflow-hidden blur-3xl pointer-events-none"
        );
    }

    #[test]
    fn shape_class_is_aspect_then_size() {
        let layers = render(&BlobConfig::default());
        assert_eq!(layers.shape.class, "aspect-[801/1036] w-[50.0625rem]");
    }

    #[test]
    fn explicit_pair_overrides_variant() {
        let layers = render(&BlobConfig {
            variant: ColorVariant::Golden,
            from_color: Some("rgb(1 2 3)".into()),
            to_color: Some("hsl(0 0% 50%)".into()),
            ..BlobConfig::default()
        });
        assert_eq!(layers.shape.gradient.from, "rgb(1 2 3)");
        assert_eq!(layers.shape.gradient.to, "hsl(0 0% 50%)");
    }

    #[test]
    fn override_cannot_inject_declarations() {
        let result = render_blob(&BlobConfig {
            from_color: Some("red; position:fixed".into()),
            to_color: Some("#ffffff".into()),
            ..BlobConfig::default()
        });
        assert!(
            matches!(result, Err(BackdropError::InvalidColor(ref c)) if c.contains("position:fixed")),
            "got {result:?}"
        );
        let result = render_blob(&BlobConfig {
            from_color: Some("#000000".into()),
            to_color: Some("blue}body{display:none".into()),
            ..BlobConfig::default()
        });
        assert!(matches!(result, Err(BackdropError::InvalidColor(_))));
    }

    #[test]
    fn functional_color_notation_is_accepted() {
        let layers = render(&BlobConfig {
            from_color: Some("oklch(70% 0.1 200 / 0.5)".into()),
            to_color: Some("color-mix(in srgb, red 40%, blue)".into()),
            ..BlobConfig::default()
        });
        assert_eq!(layers.shape.gradient.from, "oklch(70% 0.1 200 / 0.5)");
    }

    #[test]
    fn single_override_falls_back_to_variant() {
        let layers = render(&BlobConfig {
            variant: ColorVariant::Sunset,
            from_color: Some("#000000".into()),
            ..BlobConfig::default()
        });
        assert_eq!(layers.shape.gradient.from, "#f97316");
        assert_eq!(layers.shape.gradient.to, "#ec4899");
    }

    #[test]
    fn empty_override_counts_as_missing() {
        let layers = render(&BlobConfig {
            variant: ColorVariant::Forest,
            from_color: Some(String::new()),
            to_color: Some("#ffffff".into()),
            ..BlobConfig::default()
        });
        assert_eq!(layers.shape.gradient.from, "#22c55e");
    }

    #[test]
    fn opacity_bounds_pass_through_unclamped() {
        assert_eq!(
            render(&BlobConfig {
                opacity: 0.0,
                ..BlobConfig::default()
            })
            .shape
            .opacity,
            0.0
        );
        assert_eq!(
            render(&BlobConfig {
                opacity: 100.0,
                ..BlobConfig::default()
            })
            .shape
            .opacity,
            1.0
        );
    }

    #[test]
    fn opacity_out_of_range_is_rejected() {
        for bad in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let result = render_blob(&BlobConfig {
                opacity: bad,
                ..BlobConfig::default()
            });
            assert!(
                matches!(result, Err(BackdropError::InvalidRange { name: "opacity", .. })),
                "opacity {bad} should fail"
            );
        }
    }

    #[test]
    fn presets_select_their_variant() {
        assert_eq!(BlobConfig::aurora().variant, ColorVariant::Aurora);
        assert_eq!(BlobConfig::sunset().variant, ColorVariant::Sunset);
        assert_eq!(BlobConfig::ocean().variant, ColorVariant::Ocean);
        assert_eq!(BlobConfig::forest().variant, ColorVariant::Forest);
        assert_eq!(BlobConfig::ocean().shape, BlobShape::Organic);
    }

    #[test]
    fn gradient_css_runs_bottom_left_to_top_right() {
        let layers = render(&BlobConfig::default());
        assert_eq!(
            layers.shape.gradient.css(),
            "linear-gradient(to top right, #ff80b5, #9089fc)"
        );
    }

    #[test]
    fn html_nests_shape_inside_hidden_container() {
        let html = render(&BlobConfig::default()).to_html();
        assert!(html.starts_with(r#"<div aria-hidden="true" class="absolute "#));
        assert!(html.contains(r#"style="clip-path: polygon(63.1% 29.5%"#));
        assert!(html.contains("opacity: 0.3\""));
        assert!(html.ends_with("></div></div>"));
    }

    // -- from_json --

    #[test]
    fn from_json_empty_object_is_default() {
        assert_eq!(
            BlobConfig::from_json(&json!({})).unwrap(),
            BlobConfig::default()
        );
    }

    #[test]
    fn from_json_reads_keys_and_camel_case_props() {
        let config = BlobConfig::from_json(&json!({
            "variant": "lavender",
            "shape": "splash",
            "position": "center",
            "fromColor": "#111111",
            "toColor": "#222222",
            "opacity": 75,
            "aspectRatio": "aspect-square",
            "className": "hidden lg:block",
            "zIndex": "-z-20",
        }))
        .unwrap();
        assert_eq!(config.variant, ColorVariant::Lavender);
        assert_eq!(config.shape, BlobShape::Splash);
        assert_eq!(config.position, Position::Center);
        assert_eq!(config.from_color.as_deref(), Some("#111111"));
        assert_eq!(config.to_color.as_deref(), Some("#222222"));
        assert_eq!(config.opacity, 75.0);
        assert_eq!(config.aspect_ratio, "aspect-square");
        assert_eq!(config.class_name, "hidden lg:block");
        assert_eq!(config.z_index, "-z-20");
    }

    #[test]
    fn from_json_unknown_shape_is_an_error_not_organic() {
        let err = BlobConfig::from_json(&json!({"shape": "hexagon"})).unwrap_err();
        assert!(matches!(
            err,
            BackdropError::UnknownKey { table: "shape", ref key, .. } if key == "hexagon"
        ));
    }

    #[test]
    fn from_json_unknown_variant_and_position_fail() {
        assert!(matches!(
            BlobConfig::from_json(&json!({"variant": "neon"})),
            Err(BackdropError::UnknownKey { table: "variant", .. })
        ));
        assert!(matches!(
            BlobConfig::from_json(&json!({"position": "middle"})),
            Err(BackdropError::UnknownKey { table: "position", .. })
        ));
    }

    #[test]
    fn from_json_non_string_key_is_invalid_config() {
        assert!(matches!(
            BlobConfig::from_json(&json!({"shape": 3})),
            Err(BackdropError::InvalidConfig(_))
        ));
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(matches!(
            BlobConfig::from_json(&json!([1, 2])),
            Err(BackdropError::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_serializes_table_keys() {
        let v = serde_json::to_value(BlobConfig::ocean()).unwrap();
        assert_eq!(v["variant"], "ocean");
        assert_eq!(v["shape"], "organic");
        assert_eq!(v["position"], "top-right");
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn config() -> impl Strategy<Value = BlobConfig> {
            (
                0..ColorVariant::ALL.len(),
                0..BlobShape::ALL.len(),
                0..Position::ALL.len(),
                0.0_f64..=100.0,
                proptest::option::of("#[0-9a-f]{6}"),
                proptest::option::of("#[0-9a-f]{6}"),
            )
                .prop_map(|(v, s, p, opacity, from_color, to_color)| BlobConfig {
                    variant: ColorVariant::ALL[v],
                    shape: BlobShape::ALL[s],
                    position: Position::ALL[p],
                    opacity,
                    from_color,
                    to_color,
                    ..BlobConfig::default()
                })
        }

        proptest! {
            #[test]
            fn override_precedence(c in config()) {
                let g = render_blob(&c).unwrap().shape.gradient;
                match (&c.from_color, &c.to_color) {
                    (Some(from), Some(to)) => {
                        prop_assert_eq!(&g.from, from);
                        prop_assert_eq!(&g.to, to);
                    }
                    _ => {
                        let (from, to) = c.variant.stops();
                        prop_assert_eq!(g.from.as_str(), from);
                        prop_assert_eq!(g.to.as_str(), to);
                    }
                }
            }

            #[test]
            fn opacity_is_exactly_scaled(c in config()) {
                let layers = render_blob(&c).unwrap();
                prop_assert_eq!(layers.shape.opacity.to_bits(), (c.opacity / 100.0).to_bits());
            }

            #[test]
            fn rendering_is_pure(c in config()) {
                let a = render_blob(&c).unwrap();
                let b = render_blob(&c).unwrap();
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.to_html(), b.to_html());
            }

            #[test]
            fn container_always_has_position_classes(c in config()) {
                let layers = render_blob(&c).unwrap();
                for token in c.position.rule().anchors {
                    prop_assert!(layers.container.class.split(' ').any(|t| t == *token));
                }
            }
        }
    }
}
