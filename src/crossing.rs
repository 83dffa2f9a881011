use std::fmt;

use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::circular_queue::CircularQueue;

/// How many of the earliest/latest positions are averaged when inferring the
/// travel direction, and the minimum history length required to infer one.
const DIRECTION_WINDOW: usize = 5;

/// Horizontal movement direction inferred from a track's trajectory.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TravelDirection {
    Left,
    Right,
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelDirection::Left => write!(f, "LEFT"),
            TravelDirection::Right => write!(f, "RIGHT"),
        }
    }
}

/// Whether the counting line was crossed between the last two recorded
/// positions. Inclusive on the new side, so a center landing exactly on the
/// line counts as having crossed it.
///
/// With fewer than two positions there is no segment to test and the answer
/// is pending (`false`).
pub(crate) fn line_crossed(positions: &CircularQueue<na::Point2<f32>>, line_x: f32) -> bool {
    let mut iter = positions.iter();

    let (curr, prev) = match (iter.next(), iter.next()) {
        (Some(curr), Some(prev)) => (curr, prev),
        _ => return false,
    };

    (prev.x < line_x && line_x <= curr.x) || (prev.x > line_x && line_x >= curr.x)
}

/// Direction from sustained trajectory, not from the single crossing step:
/// the mean x of the earliest five positions is compared against the mean x
/// of the latest five. A net displacement below `min_displacement` (or a
/// history shorter than five samples) leaves the direction undetermined.
pub(crate) fn travel_direction(
    positions: &CircularQueue<na::Point2<f32>>,
    min_displacement: f32,
) -> Option<TravelDirection> {
    if positions.len() < DIRECTION_WINDOW {
        return None;
    }

    let start_x = positions
        .asc_iter()
        .take(DIRECTION_WINDOW)
        .map(|p| p.x)
        .sum::<f32>()
        / DIRECTION_WINDOW as f32;

    let end_x = positions
        .iter()
        .take(DIRECTION_WINDOW)
        .map(|p| p.x)
        .sum::<f32>()
        / DIRECTION_WINDOW as f32;

    let displacement = end_x - start_x;

    if displacement.abs() > min_displacement {
        Some(if displacement > 0.0 {
            TravelDirection::Right
        } else {
            TravelDirection::Left
        })
    } else {
        None
    }
}
