use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;

/// One detector output for a single frame: a bounding box, a display-level
/// vehicle category and the detector's confidence.
///
/// The category is opaque to the engine except that `"Car"` feeds the derived
/// parking-availability signal.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Detection {
    pub bbox: BBox,
    pub category: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(bbox: BBox, category: impl Into<String>, confidence: f32) -> Self {
        Self {
            bbox,
            category: category.into(),
            confidence,
        }
    }
}
