use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Axis-aligned bounding box in ltrb pixel coordinates.
///
/// `x1 <= x2` and `y1 <= y2` are assumed, not validated; a malformed box
/// yields a degenerate but defined result through the clamped intersection.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BBox {
    #[inline]
    pub fn ltrb(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    #[inline(always)]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Pixel midpoint, truncated to whole coordinates.
    #[inline]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new(
            ((self.x1 + self.x2) / 2.0).trunc(),
            ((self.y1 + self.y2) / 2.0).trunc(),
        )
    }

    /// Intersection over union, in [0, 1]. Returns 0 when the boxes do not
    /// overlap or the union area is zero.
    pub fn iou(&self, other: &BBox) -> f32 {
        let i_x1 = self.x1.max(other.x1);
        let i_y1 = self.y1.max(other.y1);
        let i_x2 = self.x2.min(other.x2);
        let i_y2 = self.y2.min(other.y2);

        let i_area = (i_x2 - i_x1).max(0.0) * (i_y2 - i_y1).max(0.0);
        let union = self.area() + other.area() - i_area;

        if union > 0.0 {
            i_area / union
        } else {
            0.0
        }
    }
}
