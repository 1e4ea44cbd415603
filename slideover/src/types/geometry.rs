/// A top-left offset for an overlay's bounding box.
///
/// Signed because off-screen placements sit at negative coordinates for the
/// top and left edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `to`, rounding to the nearest unit.
    pub fn lerp(self, to: Point, t: f32) -> Self {
        Self {
            x: lerp_i32(self.x, to.x, t),
            y: lerp_i32(self.y, to.y, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i32
}
