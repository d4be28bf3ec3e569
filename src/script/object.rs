use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::error::{VizError, VizResult};
use crate::script::tex::validate_tex;

/// Default TeX font size, matching the host's default.
pub const DEFAULT_FONT_SIZE: f64 = 48.0;

/// Side of an anchor object used by [`Placement::NextTo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    /// Above the anchor.
    Above,
    /// Below the anchor.
    Below,
    /// To the left of the anchor.
    LeftOf,
    /// To the right of the anchor.
    RightOf,
}

/// Horizontal alignment for edge placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AlignX {
    /// Left frame edge.
    Left,
    /// Horizontally centered.
    #[default]
    Center,
    /// Right frame edge.
    Right,
}

/// Vertical alignment for edge placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AlignY {
    /// Top frame edge.
    Top,
    /// Vertically centered.
    #[default]
    Center,
    /// Bottom frame edge.
    Bottom,
}

/// Frame anchor combining both axes, for [`Placement::ToEdge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Horizontal component.
    pub x: AlignX,
    /// Vertical component.
    pub y: AlignY,
}

impl Anchor {
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self {
        x: AlignX::Center,
        y: AlignY::Top,
    };
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self {
        x: AlignX::Center,
        y: AlignY::Bottom,
    };
    /// Right edge, vertically centered.
    pub const RIGHT: Self = Self {
        x: AlignX::Right,
        y: AlignY::Center,
    };
    /// Top-left frame corner.
    pub const TOP_LEFT: Self = Self {
        x: AlignX::Left,
        y: AlignY::Top,
    };
    /// Bottom-left frame corner.
    pub const BOTTOM_LEFT: Self = Self {
        x: AlignX::Left,
        y: AlignY::Bottom,
    };
}

/// Where the host should put an object.
///
/// Numeric placement carries computed stage coordinates; the relative
/// variants stay declarative because typeset extents are only known to the
/// host (layout is delegated, not reimplemented here).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Placement {
    /// Centered at a stage point.
    At(Point),
    /// Next to a previously registered object.
    NextTo {
        /// Key of the anchor object.
        anchor: String,
        /// Which side of the anchor.
        side: Side,
        /// Gap between the two, in stage units.
        buff: f64,
    },
    /// Flush against a frame edge or corner.
    ToEdge {
        /// Edge/corner anchor.
        anchor: Anchor,
        /// Margin from the frame border, in stage units.
        margin: f64,
    },
}

impl Default for Placement {
    fn default() -> Self {
        Self::At(Point::ZERO)
    }
}

/// TeX content of a text object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextSpec {
    /// TeX source, typeset by the host with the scene template.
    pub tex: String,
    /// Font size in TeX points.
    pub font_size: f64,
}

/// Shape or text payload of a [`Visual`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum VisualKind {
    /// Background coordinate grid.
    NumberPlane,
    /// Text-mode TeX.
    Text(TextSpec),
    /// Math-mode TeX.
    MathText(TextSpec),
    /// Itemized list of text-mode TeX entries.
    BulletList {
        /// One TeX source per bullet.
        items: Vec<String>,
        /// Font size in TeX points.
        font_size: f64,
    },
    /// Arrow with a tip at `end`.
    Arrow {
        /// Tail point.
        start: Point,
        /// Tip point.
        end: Point,
    },
    /// Plain line segment.
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
    },
    /// Square-corner mark between two arm directions.
    RightAngle {
        /// Corner the mark sits at.
        corner: Point,
        /// First arm direction.
        arm_a: Vec2,
        /// Second arm direction.
        arm_b: Vec2,
        /// Arm length in stage units.
        size: f64,
    },
    /// Closed polygon through the given vertices.
    Polygon {
        /// Vertices in drawing order.
        vertices: Vec<Point>,
    },
    /// Axis-aligned square.
    Square {
        /// Side length.
        side: f64,
    },
    /// Axis-aligned rectangle.
    Rectangle {
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
    },
    /// Axis-aligned rectangle with a dashed outline.
    DashedRectangle {
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
        /// Dash count along the perimeter.
        num_dashes: u32,
    },
    /// Circle around its placement point.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// Filled point marker.
    Dot {
        /// Marker position.
        at: Point,
    },
    /// Curly brace spanning two points.
    Brace {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },
}

/// One immutable drawable object.
///
/// Constructed with the kind-specific helpers and refined through chaining
/// methods that return a transformed copy, mirroring the fluent style scenes
/// are written in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Visual {
    /// Shape or text payload.
    pub kind: VisualKind,
    /// Stroke/text color.
    pub color: Color,
    /// Fill opacity in `[0, 1]`; zero leaves only the stroke.
    pub fill_opacity: f64,
    /// Painter's-order index; larger draws on top.
    pub z_index: i32,
    /// Uniform scale applied by the host.
    pub scale: f64,
    /// Placement resolved by the host.
    pub placement: Placement,
    /// Extra offset applied after placement, for hand-tuned nudges.
    pub offset: Vec2,
    /// Whether the host draws an opaque backdrop behind the object.
    pub backdrop: bool,
}

impl Visual {
    fn from_kind(kind: VisualKind) -> Self {
        Self {
            kind,
            color: Color::WHITE,
            fill_opacity: 0.0,
            z_index: 0,
            scale: 1.0,
            placement: Placement::default(),
            offset: Vec2::ZERO,
            backdrop: false,
        }
    }

    /// Background coordinate grid.
    pub fn number_plane() -> Self {
        Self::from_kind(VisualKind::NumberPlane)
    }

    /// Text-mode TeX at the default font size.
    pub fn tex(tex: impl Into<String>) -> Self {
        Self::from_kind(VisualKind::Text(TextSpec {
            tex: tex.into(),
            font_size: DEFAULT_FONT_SIZE,
        }))
    }

    /// Math-mode TeX at the default font size.
    pub fn math_tex(tex: impl Into<String>) -> Self {
        Self::from_kind(VisualKind::MathText(TextSpec {
            tex: tex.into(),
            font_size: DEFAULT_FONT_SIZE,
        }))
    }

    /// Itemized list of text-mode TeX entries.
    pub fn bullet_list(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::from_kind(VisualKind::BulletList {
            items: items.into_iter().map(Into::into).collect(),
            font_size: DEFAULT_FONT_SIZE,
        })
    }

    /// Arrow from `start` to `end`.
    pub fn arrow(start: Point, end: Point) -> Self {
        Self::from_kind(VisualKind::Arrow { start, end })
    }

    /// Line segment from `start` to `end`.
    pub fn line(start: Point, end: Point) -> Self {
        Self::from_kind(VisualKind::Line { start, end })
    }

    /// Right-angle mark at `corner` between two arm directions.
    pub fn right_angle(corner: Point, arm_a: Vec2, arm_b: Vec2, size: f64) -> Self {
        Self::from_kind(VisualKind::RightAngle {
            corner,
            arm_a,
            arm_b,
            size,
        })
    }

    /// Closed polygon through `vertices`.
    pub fn polygon(vertices: impl IntoIterator<Item = Point>) -> Self {
        Self::from_kind(VisualKind::Polygon {
            vertices: vertices.into_iter().collect(),
        })
    }

    /// Axis-aligned square of the given side.
    pub fn square(side: f64) -> Self {
        Self::from_kind(VisualKind::Square { side })
    }

    /// Axis-aligned rectangle.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::from_kind(VisualKind::Rectangle { width, height })
    }

    /// Dashed-outline rectangle.
    pub fn dashed_rectangle(width: f64, height: f64, num_dashes: u32) -> Self {
        Self::from_kind(VisualKind::DashedRectangle {
            width,
            height,
            num_dashes,
        })
    }

    /// Circle of the given radius.
    pub fn circle(radius: f64) -> Self {
        Self::from_kind(VisualKind::Circle { radius })
    }

    /// Point marker at `at`.
    pub fn dot(at: Point) -> Self {
        Self::from_kind(VisualKind::Dot { at })
    }

    /// Curly brace spanning two points.
    pub fn brace(from: Point, to: Point) -> Self {
        Self::from_kind(VisualKind::Brace { from, to })
    }

    /// Set the stroke/text color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the fill opacity.
    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// Set the painter's-order index.
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Multiply the object's scale.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale *= factor;
        self
    }

    /// Set the font size; no effect on non-text kinds.
    pub fn font_size(mut self, size: f64) -> Self {
        match &mut self.kind {
            VisualKind::Text(spec) | VisualKind::MathText(spec) => spec.font_size = size,
            VisualKind::BulletList { font_size, .. } => *font_size = size,
            _ => {}
        }
        self
    }

    /// Center the object at a stage point.
    pub fn at(mut self, point: Point) -> Self {
        self.placement = Placement::At(point);
        self
    }

    /// Place the object beside another registered object.
    pub fn next_to(mut self, anchor: impl Into<String>, side: Side, buff: f64) -> Self {
        self.placement = Placement::NextTo {
            anchor: anchor.into(),
            side,
            buff,
        };
        self
    }

    /// Place the object against a frame edge or corner.
    pub fn to_edge(mut self, anchor: Anchor, margin: f64) -> Self {
        self.placement = Placement::ToEdge { anchor, margin };
        self
    }

    /// Nudge the object after placement.
    pub fn shift(mut self, offset: Vec2) -> Self {
        self.offset += offset;
        self
    }

    /// Draw an opaque backdrop behind the object.
    pub fn with_backdrop(mut self) -> Self {
        self.backdrop = true;
        self
    }

    /// Validate the object's own payload.
    pub fn validate(&self) -> VizResult<()> {
        if !(self.fill_opacity.is_finite() && (0.0..=1.0).contains(&self.fill_opacity)) {
            return Err(VizError::validation("fill_opacity must lie in [0, 1]"));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(VizError::validation("scale must be finite and > 0"));
        }
        if let Placement::NextTo { buff, .. } = self.placement
            && !(buff.is_finite() && buff >= 0.0)
        {
            return Err(VizError::validation(
                "placement buff must be finite and >= 0",
            ));
        }
        if let Placement::ToEdge { margin, .. } = self.placement
            && !(margin.is_finite() && margin >= 0.0)
        {
            return Err(VizError::validation(
                "placement margin must be finite and >= 0",
            ));
        }

        match &self.kind {
            VisualKind::NumberPlane | VisualKind::Dot { .. } | VisualKind::Brace { .. } => Ok(()),
            VisualKind::Text(spec) | VisualKind::MathText(spec) => {
                validate_tex(&spec.tex, "text tex")?;
                validate_font_size(spec.font_size)
            }
            VisualKind::BulletList { items, font_size } => {
                if items.is_empty() {
                    return Err(VizError::validation("bullet list must be non-empty"));
                }
                for item in items {
                    validate_tex(item, "bullet item tex")?;
                }
                validate_font_size(*font_size)
            }
            VisualKind::Arrow { start, end } | VisualKind::Line { start, end } => {
                if (*end - *start).hypot2() < f64::EPSILON {
                    return Err(VizError::validation(
                        "arrow/line endpoints must be distinct",
                    ));
                }
                Ok(())
            }
            VisualKind::RightAngle {
                arm_a, arm_b, size, ..
            } => {
                if !(size.is_finite() && *size > 0.0) {
                    return Err(VizError::validation(
                        "right-angle size must be finite and > 0",
                    ));
                }
                if arm_a.hypot2() < f64::EPSILON || arm_b.hypot2() < f64::EPSILON {
                    return Err(VizError::validation(
                        "right-angle arms must be non-zero vectors",
                    ));
                }
                Ok(())
            }
            VisualKind::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(VizError::validation(
                        "polygon needs at least three vertices",
                    ));
                }
                Ok(())
            }
            VisualKind::Square { side } => validate_extent(*side, "square side"),
            VisualKind::Rectangle { width, height } => {
                validate_extent(*width, "rectangle width")?;
                validate_extent(*height, "rectangle height")
            }
            VisualKind::DashedRectangle {
                width,
                height,
                num_dashes,
            } => {
                validate_extent(*width, "rectangle width")?;
                validate_extent(*height, "rectangle height")?;
                if *num_dashes == 0 {
                    return Err(VizError::validation("num_dashes must be > 0"));
                }
                Ok(())
            }
            VisualKind::Circle { radius } => validate_extent(*radius, "circle radius"),
        }
    }
}

fn validate_extent(value: f64, field: &str) -> VizResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(VizError::validation(format!(
            "{field} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_font_size(size: f64) -> VizResult<()> {
    if !(size.is_finite() && size > 0.0) {
        return Err(VizError::validation("font size must be finite and > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/script/object.rs"]
mod tests;
