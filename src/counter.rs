use nalgebra as na;
use tracing::{debug, info};

use crate::bbox::BBox;
use crate::circular_queue::CircularQueue;
use crate::config::CounterConfig;
use crate::counts::{CountBoard, CountSnapshot, GateEvent, ParkingAvailability};
use crate::crossing::{self, TravelDirection};
use crate::detection::Detection;
use crate::error::Error;
use crate::frame::Frame;
use crate::matching;
use crate::track::Track;

/// Internal per-vehicle state, owned exclusively by the counter.
#[derive(Debug, Clone)]
struct TrackedVehicle {
    id: u32,
    category: String,
    confidence: f32,
    bbox: BBox,
    positions: CircularQueue<na::Point2<f32>>,
    counted: bool,
    direction: Option<GateEvent>,
    last_seen: f32,
}

impl TrackedVehicle {
    fn new(id: u32, ts_sec: f32, det: &Detection, history_len: usize) -> Self {
        let mut positions = CircularQueue::with_capacity(history_len);
        positions.push(det.bbox.center());

        Self {
            id,
            category: det.category.clone(),
            confidence: det.confidence,
            bbox: det.bbox,
            positions,
            counted: false,
            direction: None,
            last_seen: ts_sec,
        }
    }

    /// Applies a matched detection. The category stays fixed at creation even
    /// if the detector reports a different class later on.
    fn apply(&mut self, ts_sec: f32, det: &Detection) {
        self.bbox = det.bbox;
        self.confidence = det.confidence;
        self.positions.push(det.bbox.center());
        self.last_seen = ts_sec;
    }

    #[inline]
    fn is_stale(&self, now_sec: f32, max_age_sec: f32) -> bool {
        now_sec - self.last_seen > max_age_sec
    }
}

impl From<&TrackedVehicle> for Track {
    fn from(t: &TrackedVehicle) -> Track {
        Track {
            track_id: t.id,
            category: t.category.clone(),
            confidence: t.confidence,
            bbox: t.bbox,
            counted: t.counted,
            direction: t.direction,
            trail: t.positions.asc_iter().copied().collect(),
        }
    }
}

/// The tracking-and-counting engine for one camera / one counting line.
///
/// Owns the live track set and the aggregate counters. Single-threaded by
/// design: callers embedding it in a threaded capture pipeline must
/// serialize access externally.
pub struct VehicleCounter {
    config: CounterConfig,
    tracks: Vec<TrackedVehicle>,
    next_track_id: u32,
    board: CountBoard,
}

impl VehicleCounter {
    pub fn new(config: CounterConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            tracks: Vec::with_capacity(64),
            next_track_id: 1,
            board: CountBoard::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Single per-frame entry point. Fixed order: associate, apply updates
    /// and create tracks, evaluate crossings in track-id order, aggregate
    /// counts, evict stale tracks. Crossing evaluation runs before eviction
    /// so a vehicle that stops appearing right after crossing is still
    /// counted. Never fails; a degenerate frame is a defined no-op.
    pub fn update(&mut self, frame: &Frame) {
        let (width, _) = frame.dims;
        let line_x = width as f32 * self.config.line_position;

        let track_boxes: Vec<BBox> = self.tracks.iter().map(|t| t.bbox).collect();
        let assignment =
            matching::match_detections(&frame.detections, &track_boxes, self.config.min_match_iou);

        for (d, t, _) in assignment.matched {
            self.tracks[t].apply(frame.timestamp, &frame.detections[d]);
        }

        for d in assignment.unmatched {
            let det = &frame.detections[d];
            let id = self.next_track_id;
            self.next_track_id += 1;

            debug!(track_id = id, category = %det.category, "track created");
            self.tracks.push(TrackedVehicle::new(
                id,
                frame.timestamp,
                det,
                self.config.position_history_len,
            ));
        }

        // Vec order is creation order, so this walks tracks in id order.
        let mapping = self.config.direction_mapping;
        for track in &mut self.tracks {
            if track.counted || !crossing::line_crossed(&track.positions, line_x) {
                continue;
            }

            // An undetermined direction here is not retried for this
            // crossing: once the track moves on, the straddle condition no
            // longer holds and the opportunity is lost.
            let direction = match crossing::travel_direction(
                &track.positions,
                self.config.direction_displacement_threshold,
            ) {
                Some(direction) => direction,
                None => continue,
            };

            let event = match direction {
                TravelDirection::Left => mapping.left,
                TravelDirection::Right => mapping.right,
            };

            track.counted = true;
            track.direction = Some(event);
            self.board.record(event, &track.category);

            info!(
                track_id = track.id,
                category = %track.category,
                %direction,
                %event,
                "vehicle crossed the counting line"
            );
        }

        let now = frame.timestamp;
        let max_age = self.config.max_track_age;
        self.tracks.retain(|t| {
            let stale = t.is_stale(now, max_age);
            if stale {
                debug!(track_id = t.id, counted = t.counted, "stale track evicted");
            }
            !stale
        });
    }

    /// Read-only snapshots of all live tracks, in id order.
    pub fn tracks(&self) -> Vec<Track> {
        self.tracks.iter().map(Into::into).collect()
    }

    pub fn counts(&self) -> CountSnapshot {
        self.board.snapshot()
    }

    pub fn parking_availability(&self, total_capacity: u64) -> ParkingAvailability {
        self.board.parking_availability(total_capacity)
    }

    /// Zeroes the aggregate counters. Live tracks and their `counted` flags
    /// are untouched, so an already-counted vehicle is not recounted.
    pub fn reset_counts(&mut self) {
        self.board.reset();
    }
}
