//! Declarative scene descriptions
//!
//! A [`SceneSpec`] is a serde-friendly list of actions that builds into a
//! [`Chain`]. Each action is tagged by `kind`:
//!
//! ```toml
//! [[actions]]
//! kind = "inset"
//! all = 10
//!
//! [[actions]]
//! kind = "shape"
//! shape = { type = "rounded_rect", radius = 8 }
//!
//! [[actions]]
//! kind = "fill"
//! color = "#3366ff"
//! ```
//!
//! Divide and split nest further action lists under `slice` and `first`.

use daub_paint::{
    AttributedText, BlendMode, Color, ContentMode, Dash, EdgeInsets, Gradient, ImageRef,
    LineCap, Path, RectEdge, Shadow, Size, TextSpan, TextStyle, UnitPoint,
};
use serde::{Deserialize, Serialize};

use crate::actions::{
    Alpha, Blend, Border, BorderGradient, ClearPath, Clip, ClipSource, Divide, DropShadow, Fill,
    Forward, Image, Inset, Line, LinearGradient, Offset, RadialGradient, SetPath, Shape,
    ShapeGenerator, Split, Text, TransparencyLayer,
};
use crate::chain::{Action, Chain};
use crate::error::{ChainError, SceneError};

/// A whole scene: the actions of one chain, in order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub actions: Vec<ActionSpec>,
}

impl SceneSpec {
    pub fn build(&self) -> Result<Chain, SceneError> {
        build_chain(&self.actions)
    }
}

/// One action in a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSpec {
    Forward,
    Fill {
        color: Color,
        #[serde(default)]
        blend: Option<BlendMode>,
    },
    Border {
        color: Color,
        #[serde(default = "one")]
        width: f32,
        #[serde(default)]
        dash: Option<Dash>,
    },
    Line {
        color: Color,
        #[serde(default = "one")]
        width: f32,
        #[serde(default)]
        cap: LineCap,
        points: Vec<UnitPoint>,
    },
    LinearGradient {
        gradient: GradientSpec,
        #[serde(default = "top")]
        start: UnitPoint,
        #[serde(default = "bottom")]
        end: UnitPoint,
    },
    RadialGradient {
        gradient: GradientSpec,
        #[serde(default = "center")]
        center: UnitPoint,
        #[serde(default)]
        start_radius: f32,
        #[serde(default = "one")]
        end_radius: f32,
    },
    BorderGradient {
        width: f32,
        gradient: GradientSpec,
        /// Linear top to bottom when omitted
        #[serde(default)]
        geometry: GradientGeometry,
    },
    Shadow {
        #[serde(default)]
        offset_x: f32,
        #[serde(default)]
        offset_y: f32,
        #[serde(default)]
        blur_radius: f32,
        color: Color,
    },
    Clip {
        source: ClipSpec,
    },
    Alpha {
        alpha: f32,
    },
    TransparencyLayer,
    Blend {
        mode: BlendMode,
    },
    /// `all` applies to every edge, on top of any per-edge value
    Inset {
        #[serde(default)]
        all: f32,
        #[serde(default)]
        top: f32,
        #[serde(default)]
        left: f32,
        #[serde(default)]
        bottom: f32,
        #[serde(default)]
        right: f32,
    },
    Offset {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    Divide {
        amount: f32,
        #[serde(default)]
        padding: f32,
        edge: RectEdge,
        #[serde(default)]
        slice: Vec<ActionSpec>,
    },
    Split {
        first: Vec<ActionSpec>,
    },
    Shape {
        shape: ShapeSpec,
    },
    Path {
        path: Path,
        #[serde(default)]
        relative: bool,
    },
    ClearPath,
    Image {
        id: u64,
        width: f32,
        height: f32,
        #[serde(default)]
        mode: ContentMode,
        #[serde(default)]
        blend: BlendMode,
        #[serde(default = "one")]
        alpha: f32,
    },
    /// Plain `text` in `style`, followed by any extra `spans`
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        style: TextStyle,
        #[serde(default)]
        spans: Vec<TextSpan>,
    },
}

/// Gradient colors and stops
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub colors: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f32>>,
    #[serde(default = "yes")]
    pub extend: bool,
}

impl GradientSpec {
    pub fn build(&self) -> Result<Gradient, ChainError> {
        let gradient = Gradient::new(self.colors.iter().copied())?.with_extend(self.extend);
        match &self.locations {
            Some(locations) => Ok(gradient.with_locations(locations.iter().copied())?),
            None => Ok(gradient),
        }
    }
}

/// How a border gradient's colors are laid out across the rect
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GradientGeometry {
    Linear {
        #[serde(default = "top")]
        start: UnitPoint,
        #[serde(default = "bottom")]
        end: UnitPoint,
    },
    Radial {
        #[serde(default = "center")]
        center: UnitPoint,
        #[serde(default)]
        start_radius: f32,
        #[serde(default = "one")]
        end_radius: f32,
    },
}

impl Default for GradientGeometry {
    fn default() -> Self {
        GradientGeometry::Linear {
            start: UnitPoint::TOP,
            end: UnitPoint::BOTTOM,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClipSpec {
    CurrentRect,
    CurrentPath,
    StrokedPath { width: f32 },
    Path { path: Path },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rect,
    RoundedRect { radius: f32 },
    Ellipse,
    Capsule,
}

fn one() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

fn top() -> UnitPoint {
    UnitPoint::TOP
}

fn bottom() -> UnitPoint {
    UnitPoint::BOTTOM
}

fn center() -> UnitPoint {
    UnitPoint::CENTER
}

fn build_chain(specs: &[ActionSpec]) -> Result<Chain, SceneError> {
    let actions = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            spec.build().map_err(|source| SceneError::Action {
                index,
                kind: spec.kind(),
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Chain::from_actions(actions)?)
}

impl ActionSpec {
    /// The `kind` tag, matching the built action's [`Action::name`]
    pub fn kind(&self) -> &'static str {
        match self {
            ActionSpec::Forward => "forward",
            ActionSpec::Fill { .. } => "fill",
            ActionSpec::Border { .. } => "border",
            ActionSpec::Line { .. } => "line",
            ActionSpec::LinearGradient { .. } => "linear_gradient",
            ActionSpec::RadialGradient { .. } => "radial_gradient",
            ActionSpec::BorderGradient { .. } => "border_gradient",
            ActionSpec::Shadow { .. } => "shadow",
            ActionSpec::Clip { .. } => "clip",
            ActionSpec::Alpha { .. } => "alpha",
            ActionSpec::TransparencyLayer => "transparency_layer",
            ActionSpec::Blend { .. } => "blend",
            ActionSpec::Inset { .. } => "inset",
            ActionSpec::Offset { .. } => "offset",
            ActionSpec::Divide { .. } => "divide",
            ActionSpec::Split { .. } => "split",
            ActionSpec::Shape { .. } => "shape",
            ActionSpec::Path { .. } => "path",
            ActionSpec::ClearPath => "clear_path",
            ActionSpec::Image { .. } => "image",
            ActionSpec::Text { .. } => "text",
        }
    }

    pub fn build(&self) -> Result<Box<dyn Action>, SceneError> {
        let action: Box<dyn Action> = match self {
            ActionSpec::Forward => Box::new(Forward),
            ActionSpec::Fill { color, blend } => {
                let fill = Fill::new(*color);
                Box::new(match blend {
                    Some(mode) => fill.with_blend(*mode),
                    None => fill,
                })
            }
            ActionSpec::Border { color, width, dash } => {
                let border = Border::new(*color, *width);
                Box::new(match dash {
                    Some(dash) => border.with_dash(dash.clone()),
                    None => border,
                })
            }
            ActionSpec::Line {
                color,
                width,
                cap,
                points,
            } => Box::new(Line::new(*color, *width, points.iter().copied())?.with_cap(*cap)),
            ActionSpec::LinearGradient {
                gradient,
                start,
                end,
            } => Box::new(LinearGradient::between(gradient.build()?, *start, *end)),
            ActionSpec::RadialGradient {
                gradient,
                center,
                start_radius,
                end_radius,
            } => Box::new(
                RadialGradient::new(gradient.build()?)
                    .with_center(*center)
                    .with_radii(*start_radius, *end_radius),
            ),
            ActionSpec::BorderGradient {
                width,
                gradient,
                geometry,
            } => {
                let gradient = gradient.build()?;
                Box::new(match *geometry {
                    GradientGeometry::Linear { start, end } => BorderGradient::new(
                        *width,
                        LinearGradient::between(gradient, start, end),
                    ),
                    GradientGeometry::Radial {
                        center,
                        start_radius,
                        end_radius,
                    } => BorderGradient::radial(
                        *width,
                        RadialGradient::new(gradient)
                            .with_center(center)
                            .with_radii(start_radius, end_radius),
                    ),
                })
            }
            ActionSpec::Shadow {
                offset_x,
                offset_y,
                blur_radius,
                color,
            } => Box::new(DropShadow::new(Shadow::new(
                *offset_x,
                *offset_y,
                *blur_radius,
                *color,
            ))),
            ActionSpec::Clip { source } => Box::new(Clip::new(match source {
                ClipSpec::CurrentRect => ClipSource::CurrentRect,
                ClipSpec::CurrentPath => ClipSource::CurrentPath,
                ClipSpec::StrokedPath { width } => ClipSource::StrokedPath { width: *width },
                ClipSpec::Path { path } => ClipSource::Path(path.clone()),
            })),
            ActionSpec::Alpha { alpha } => Box::new(Alpha::new(*alpha)),
            ActionSpec::TransparencyLayer => Box::new(TransparencyLayer),
            ActionSpec::Blend { mode } => Box::new(Blend::new(*mode)),
            ActionSpec::Inset {
                all,
                top,
                left,
                bottom,
                right,
            } => Box::new(Inset::new(EdgeInsets::new(
                all + top,
                all + left,
                all + bottom,
                all + right,
            ))),
            ActionSpec::Offset { dx, dy } => Box::new(Offset::new(*dx, *dy)),
            ActionSpec::Divide {
                amount,
                padding,
                edge,
                slice,
            } => {
                let divide = Divide::new(*amount, *edge).with_padding(*padding);
                Box::new(if slice.is_empty() {
                    divide
                } else {
                    divide.with_slice(build_chain(slice)?)
                })
            }
            ActionSpec::Split { first } => Box::new(Split::new(build_chain(first)?)),
            ActionSpec::Shape { shape } => Box::new(Shape::new(match *shape {
                ShapeSpec::Rect => ShapeGenerator::Rect,
                ShapeSpec::RoundedRect { radius } => ShapeGenerator::RoundedRect { radius },
                ShapeSpec::Ellipse => ShapeGenerator::Ellipse,
                ShapeSpec::Capsule => ShapeGenerator::Capsule,
            })),
            ActionSpec::Path { path, relative } => Box::new(if *relative {
                SetPath::relative(path.clone())
            } else {
                SetPath::absolute(path.clone())
            }),
            ActionSpec::ClearPath => Box::new(ClearPath),
            ActionSpec::Image {
                id,
                width,
                height,
                mode,
                blend,
                alpha,
            } => Box::new(
                Image::new(ImageRef::new(*id, Size::new(*width, *height)))
                    .with_mode(*mode)
                    .with_blend(*blend)
                    .with_alpha(*alpha),
            ),
            ActionSpec::Text { text, style, spans } => {
                let mut attributed = AttributedText::new();
                if !text.is_empty() {
                    attributed = attributed.span(text.clone(), style.clone());
                }
                for span in spans {
                    attributed = attributed.span(span.text.clone(), span.style.clone());
                }
                Box::new(Text::new(attributed))
            }
        };
        Ok(action)
    }
}
