use serde_derive::{Deserialize, Serialize};

use crate::counts::GateEvent;
use crate::error::Error;

/// Maps a trajectory direction to the semantic counting event.
///
/// The default treats rightward travel as entering and leftward travel as
/// exiting; cameras mounted the other way around swap the two.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct DirectionMapping {
    pub left: GateEvent,
    pub right: GateEvent,
}

impl Default for DirectionMapping {
    fn default() -> Self {
        Self {
            left: GateEvent::Out,
            right: GateEvent::In,
        }
    }
}

/// Engine configuration. All knobs have defaults matching the reference
/// deployment; only `line_position` is validated at construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CounterConfig {
    /// Counting line position as a fraction of frame width, in (0, 1).
    #[serde(default = "default_line_position")]
    pub line_position: f32,

    #[serde(default)]
    pub direction_mapping: DirectionMapping,

    /// Minimum IoU for a detection to claim an existing track.
    #[serde(default = "default_min_match_iou")]
    pub min_match_iou: f32,

    /// Seconds without a match before a track is evicted.
    #[serde(default = "default_max_track_age")]
    pub max_track_age: f32,

    /// Bounded per-track position history length.
    #[serde(default = "default_position_history_len")]
    pub position_history_len: usize,

    /// Minimum net x displacement (px) for a trajectory direction to resolve.
    #[serde(default = "default_direction_displacement_threshold")]
    pub direction_displacement_threshold: f32,
}

fn default_line_position() -> f32 {
    0.5
}

fn default_min_match_iou() -> f32 {
    0.3
}

fn default_max_track_age() -> f32 {
    2.0
}

fn default_position_history_len() -> usize {
    30
}

fn default_direction_displacement_threshold() -> f32 {
    30.0
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            line_position: default_line_position(),
            direction_mapping: DirectionMapping::default(),
            min_match_iou: default_min_match_iou(),
            max_track_age: default_max_track_age(),
            position_history_len: default_position_history_len(),
            direction_displacement_threshold: default_direction_displacement_threshold(),
        }
    }
}

impl CounterConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.line_position > 0.0 && self.line_position < 1.0) {
            return Err(Error::InvalidLinePosition(self.line_position));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CounterConfig::default().validate().is_ok());
    }

    #[test]
    fn line_position_outside_unit_interval_is_rejected() {
        for bad in [0.0, 1.0, -0.25, 1.5, f32::NAN] {
            let config = CounterConfig {
                line_position: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn default_mapping_counts_rightward_travel_as_in() {
        let mapping = DirectionMapping::default();
        assert_eq!(mapping.right, GateEvent::In);
        assert_eq!(mapping.left, GateEvent::Out);
    }
}
