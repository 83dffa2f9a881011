use crate::detection::Detection;

/// One frame's worth of detector output.
///
/// `timestamp` is in seconds and caller-supplied; track staleness is measured
/// against it, not against the wall clock.
pub struct Frame {
    /// (width, height) in pixels.
    pub dims: (u32, u32),
    pub detections: Vec<Detection>,
    pub timestamp: f32,
}

impl Frame {
    pub fn new(dims: (u32, u32), detections: Vec<Detection>, timestamp: f32) -> Self {
        Self {
            dims,
            detections,
            timestamp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }
}
