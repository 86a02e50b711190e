//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used on Japanese inspection
//! paperwork. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The paperwork uses a small, fixed set of gravimetric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units (metric/gravimetric, matching the forms)
//!
//! - Length: millimeters (mm), centimeters (cm)
//! - Force/weight: kilograms-force (kg)
//! - Moment: kilogram-centimeters (kg·cm)
//! - Stress: kilograms per square centimeter (kg/cm²); the brake-drum sheet
//!   uses newtons per square millimeter (N/mm², = MPa)
//! - Section modulus: cubic millimeters (mm³), cubic centimeters (cm³)
//!
//! Calculation inputs take suffixed raw `f64` fields (`span_mm`,
//! `tensile_kg_cm2`, ...); these wrappers are for callers that want the
//! conversions checked.
//!
//! ## Example
//!
//! ```rust
//! use strength_core::units::{Millimeters, Centimeters};
//!
//! let span = Millimeters(1200.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 120.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilograms-force (the forms record weights directly)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilogram-centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCm(pub f64);

/// Moment in kilogram-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgMm(pub f64);

impl From<KgMm> for KgCm {
    fn from(kgmm: KgMm) -> Self {
        KgCm(kgmm.0 / 10.0)
    }
}

impl From<KgCm> for KgMm {
    fn from(kgcm: KgCm) -> Self {
        KgMm(kgcm.0 * 10.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilograms per square centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm2(pub f64);

/// Stress in newtons per square millimeter (MPa), used on the brake sheet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NPerMm2(pub f64);

/// kgf per newton (1/9.80665), used when the paperwork crosses unit systems
pub const KGF_PER_NEWTON: f64 = 0.101972;

impl From<NPerMm2> for KgPerCm2 {
    fn from(n: NPerMm2) -> Self {
        // 1 N/mm² = 100 N/cm² = 100/9.80665 kgf/cm²
        KgPerCm2(n.0 * 100.0 * KGF_PER_NEWTON)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Section modulus in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Section modulus in cubic centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Second moment of area in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl From<Mm3> for Cm3 {
    fn from(mm3: Mm3) -> Self {
        Cm3(mm3.0 / 1000.0)
    }
}

impl From<Cm3> for Mm3 {
    fn from(cm3: Cm3) -> Self {
        Mm3(cm3.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(KgCm);
impl_arithmetic!(KgMm);
impl_arithmetic!(KgPerCm2);
impl_arithmetic!(NPerMm2);
impl_arithmetic!(Mm3);
impl_arithmetic!(Cm3);
impl_arithmetic!(Mm4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_cm() {
        let mm = Millimeters(1250.0);
        let cm: Centimeters = mm.into();
        assert_eq!(cm.0, 125.0);
    }

    #[test]
    fn test_moment_conversion() {
        let m: KgCm = KgMm(25_000.0).into();
        assert_eq!(m.0, 2500.0);
    }

    #[test]
    fn test_modulus_conversion() {
        let z: Cm3 = Mm3(83_333.33).into();
        assert!((z.0 - 83.33333).abs() < 1e-4);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(100.0);
        let b = Millimeters(40.0);
        assert_eq!((a + b).0, 140.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
