pub use kurbo::{Point, Rect, Vec2};

/// Stage origin, the center of the host's coordinate plane.
pub const ORIGIN: Point = Point::new(0.0, 0.0);

/// Unit vector pointing up in stage coordinates (y grows upward).
pub const UP: Vec2 = Vec2::new(0.0, 1.0);

/// Unit vector pointing down in stage coordinates.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);

/// Unit vector pointing left in stage coordinates.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);

/// Unit vector pointing right in stage coordinates.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

/// Straight-alpha RGBA8 color attached to visual objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Straight alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Default stroke color.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Vector `u` in the projection scenes.
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    /// Vector `v` in the projection scenes; also the title accent.
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    /// Projection arrow.
    pub const PINK: Self = Self::rgb(0xD1, 0x47, 0xBD);
    /// Construction lines and right-angle markers.
    pub const GREY: Self = Self::rgb(0x88, 0x88, 0x88);
    /// Vector `x` in the parallelogram scenes.
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);
    /// Vector `y` in the parallelogram scenes.
    pub const GREEN: Self = Self::rgb(0x83, 0xC1, 0x67);
    /// Diagonal `x + y`.
    pub const PURPLE: Self = Self::rgb(0x9A, 0x72, 0xAC);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
