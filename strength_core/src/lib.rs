//! # strength_core - Trailer/Chassis Strength Calculation Engine
//!
//! `strength_core` is the computational heart of TrailCalc, running the
//! hand-calculations behind Japanese vehicle-inspection paperwork for
//! trailers and container chassis: frame members modeled as statically
//! determinate beams, axle and hitch members, and the brake drum as a
//! thick-walled pressure vessel.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Units at the boundary**: Callers supply consistent units (mm, kg,
//!   kg/cm²; N/mm² on the drum sheet); the engine never guesses
//!
//! Every call is re-entrant and side-effect free, so concurrent callers
//! (e.g. several UI panels) are safe by construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use strength_core::calculations::frame::{calculate, FrameInput};
//! use strength_core::composite::SectionLayout;
//! use strength_core::loads::{BeamLoad, PointLoad};
//! use strength_core::materials::SteelGrade;
//! use strength_core::section::CrossSection;
//! use strength_core::statics::{BeamSpan, SupportPair};
//!
//! let input = FrameInput::new(
//!     "Main rail",
//!     BeamSpan {
//!         length_mm: 1000.0,
//!         loads: vec![BeamLoad::Point(PointLoad::new("W", 100.0, 500.0))],
//!         supports: SupportPair::Ends,
//!         layout: SectionLayout::uniform(CrossSection::SolidRect {
//!             width_mm: 50.0,
//!             height_mm: 100.0,
//!         }),
//!     },
//!     SteelGrade::SS400.properties(),
//! );
//!
//! let result = calculate(&input).unwrap();
//! println!("Mmax: {:.1} kg·cm", result.m_max_kg_cm);
//! println!("sf_break: {:.2}", result.safety.sf_break);
//!
//! // Serialize the result for the report layer
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Per-sheet calculations (frame, ladder, axle, hitch, drum)
//! - [`section`] - Cross-section property library
//! - [`loads`] - Point and patch loads
//! - [`statics`] - Support pairs and the reaction solve
//! - [`diagram`] - Shear/moment integrator
//! - [`composite`] - Zoned section layouts for composite rails
//! - [`strength`] - Safety-factor evaluation
//! - [`materials`] - Material strengths and JIS grade presets
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod composite;
pub mod diagram;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;
pub mod statics;
pub mod strength;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, SteelGrade};
pub use section::CrossSection;
