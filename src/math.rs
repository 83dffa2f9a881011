use nalgebra as na;

/// Euclidean distance between two pixel points.
///
/// Kept alongside IoU for distance-based matching strategies; the default
/// associator matches on IoU only.
#[inline]
pub fn distance(a: &na::Point2<f32>, b: &na::Point2<f32>) -> f32 {
    na::distance(a, b)
}
