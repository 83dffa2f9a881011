use nalgebra as na;

use crate::bbox::BBox;
use crate::counts::GateEvent;

/// Read-only view of a live track, handed to overlay/rendering collaborators.
#[derive(Debug, Clone)]
pub struct Track {
    pub track_id: u32,
    pub category: String,
    pub confidence: f32,
    pub bbox: BBox,
    pub counted: bool,
    pub direction: Option<GateEvent>,

    /// Recorded center points, oldest first.
    pub trail: Vec<na::Point2<f32>>,
}
