//! # Strength Calculations
//!
//! This module contains the per-sheet calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Results are built fresh per call and owned by the caller; the engine
//! keeps no "current calculation" between calls.
//!
//! ## Available Calculations
//!
//! - [`frame`] - Frame member pipeline (reactions → diagram → stress → safety)
//! - [`ladder`] - Six-point ladder-frame hand rule
//! - [`axle`] - Round axle shaft bending
//! - [`hitch`] - Hitch member under combined vertical/horizontal load
//! - [`brake_drum`] - Drum as a Lamé thick cylinder

pub mod axle;
pub mod brake_drum;
pub mod frame;
pub mod hitch;
pub mod ladder;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use axle::{AxleInput, AxleResult};
pub use brake_drum::{BrakeDrumInput, BrakeDrumResult};
pub use frame::{FrameInput, FrameResult};
pub use hitch::{HitchInput, HitchProfile, HitchResult};
pub use ladder::{LadderInput, LadderResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Frame member strength
    Frame(FrameInput),
    /// Six-point ladder-frame sheet
    Ladder(LadderInput),
    /// Axle shaft strength
    Axle(AxleInput),
    /// Hitch member strength
    Hitch(HitchInput),
    /// Brake-drum pressure-vessel strength
    BrakeDrum(BrakeDrumInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Frame(f) => &f.label,
            CalculationItem::Ladder(l) => &l.label,
            CalculationItem::Axle(a) => &a.label,
            CalculationItem::Hitch(h) => &h.label,
            CalculationItem::BrakeDrum(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Frame(_) => "Frame",
            CalculationItem::Ladder(_) => "Ladder",
            CalculationItem::Axle(_) => "Axle",
            CalculationItem::Hitch(_) => "Hitch",
            CalculationItem::BrakeDrum(_) => "BrakeDrum",
        }
    }
}
