use std::collections::HashMap;
use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Category label whose net crossings drive the parking-availability signal.
pub const CAR_CATEGORY: &str = "Car";

/// Semantic counting event a crossing resolves to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GateEvent {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl fmt::Display for GateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateEvent::In => write!(f, "IN"),
            GateEvent::Out => write!(f, "OUT"),
        }
    }
}

/// Snapshot of the aggregate counters at one point in time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CountSnapshot {
    pub in_counts: HashMap<String, u64>,
    pub out_counts: HashMap<String, u64>,
    pub total_in: u64,
    pub total_out: u64,
    pub net_count: i64,
}

/// Parking occupancy derived purely from counted car crossings.
///
/// This is a best-effort signal that can drift from any authoritative
/// allocation ledger kept by collaborator storage; it is deliberately not
/// one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParkingAvailability {
    pub total_capacity: u64,
    pub cars_in: u64,
    pub cars_out: u64,
    pub currently_parked: i64,
    pub available: u64,
    pub occupancy_percent: f32,
}

/// Process-lifetime IN/OUT counters, per category and in total.
///
/// Owns only the counters; track objects stay with the registry, which
/// notifies the board one-way on each resolved crossing.
#[derive(Debug, Default)]
pub struct CountBoard {
    in_counts: HashMap<String, u64>,
    out_counts: HashMap<String, u64>,
    total_in: u64,
    total_out: u64,
}

impl CountBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: GateEvent, category: &str) {
        let (counts, total) = match event {
            GateEvent::In => (&mut self.in_counts, &mut self.total_in),
            GateEvent::Out => (&mut self.out_counts, &mut self.total_out),
        };

        *counts.entry(category.to_string()).or_insert(0) += 1;
        *total += 1;
    }

    pub fn snapshot(&self) -> CountSnapshot {
        CountSnapshot {
            in_counts: self.in_counts.clone(),
            out_counts: self.out_counts.clone(),
            total_in: self.total_in,
            total_out: self.total_out,
            net_count: self.total_in as i64 - self.total_out as i64,
        }
    }

    pub fn parking_availability(&self, total_capacity: u64) -> ParkingAvailability {
        let cars_in = self.in_counts.get(CAR_CATEGORY).copied().unwrap_or(0);
        let cars_out = self.out_counts.get(CAR_CATEGORY).copied().unwrap_or(0);
        let currently_parked = cars_in as i64 - cars_out as i64;

        let available = (total_capacity as i64 - currently_parked).max(0) as u64;
        let occupancy_percent = if total_capacity > 0 {
            currently_parked as f32 / total_capacity as f32 * 100.0
        } else {
            0.0
        };

        ParkingAvailability {
            total_capacity,
            cars_in,
            cars_out,
            currently_parked,
            available,
            occupancy_percent,
        }
    }

    pub fn reset(&mut self) {
        self.in_counts.clear();
        self.out_counts.clear();
        self.total_in = 0;
        self.total_out = 0;
    }
}
