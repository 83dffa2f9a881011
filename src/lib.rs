//! Tracking-and-counting engine for vehicles crossing a virtual line.
//!
//! Per frame, unassociated detections are greedily matched to live tracks by
//! IoU; tracks keep a bounded history of center points; a line-straddle test
//! plus trajectory-direction inference turns crossings into one-shot IN/OUT
//! counts. One [`VehicleCounter`] instance per monitored line/camera.
//!
//! The engine does no I/O and no detection itself; it consumes the output of
//! an external object detector and hands read-only track snapshots to
//! whatever renders or persists them.

pub mod bbox;
pub mod config;
pub mod counter;
pub mod counts;
pub mod crossing;
pub mod detection;
pub mod error;
pub mod frame;
pub mod matching;
pub mod math;
pub mod track;

mod circular_queue;

pub use bbox::BBox;
pub use config::{CounterConfig, DirectionMapping};
pub use counter::VehicleCounter;
pub use counts::{CountSnapshot, GateEvent, ParkingAvailability};
pub use crossing::TravelDirection;
pub use detection::Detection;
pub use error::Error;
pub use frame::Frame;
pub use track::Track;
