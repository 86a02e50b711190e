//! # Strength/Safety Evaluator
//!
//! Reduces a peak bending stress to pass/fail safety factors the way the
//! inspection sheets do: amplify the stress by the load factor (2.5× by
//! default), divide the material strengths by it, and compare against the
//! sheet thresholds — strictly greater than 1.6 against tensile strength
//! and 1.3 against yield.
//!
//! Zero stress degrades to `+∞` safety factors (always passing); a zero
//! section modulus never reaches this module — it is rejected upstream as
//! an unusable member.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Load amplification applied before comparing against strengths
pub const DEFAULT_LOAD_AMPLIFICATION: f64 = 2.5;

/// Safety factor against tensile strength must exceed this (strict)
pub const BREAK_SF_THRESHOLD: f64 = 1.6;

/// Safety factor against yield must exceed this (strict)
pub const YIELD_SF_THRESHOLD: f64 = 1.3;

/// Safety factors for one evaluated stress state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyCheck {
    /// The evaluated peak stress (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// Load amplification used
    pub amplification: f64,

    /// tensile / (amplification · σ)
    pub sf_break: f64,

    /// yield / (amplification · σ)
    pub sf_yield: f64,

    /// shear / (amplification · τ) with τ = σ/2, when a shear strength is given
    pub sf_shear: Option<f64>,

    /// sf_break > 1.6
    pub ok_break: bool,

    /// sf_yield > 1.3
    pub ok_yield: bool,

    /// sf_shear > 1.6, when evaluated
    pub ok_shear: Option<bool>,
}

impl SafetyCheck {
    /// All evaluated checks pass
    pub fn passes(&self) -> bool {
        self.ok_break && self.ok_yield && self.ok_shear.unwrap_or(true)
    }

    /// The check that governs (smallest margin over its threshold)
    pub fn governing_condition(&self) -> &'static str {
        let break_margin = self.sf_break / BREAK_SF_THRESHOLD;
        let yield_margin = self.sf_yield / YIELD_SF_THRESHOLD;
        let shear_margin = self
            .sf_shear
            .map(|sf| sf / BREAK_SF_THRESHOLD)
            .unwrap_or(f64::INFINITY);
        if break_margin <= yield_margin && break_margin <= shear_margin {
            "Break"
        } else if yield_margin <= shear_margin {
            "Yield"
        } else {
            "Shear"
        }
    }
}

/// Evaluate bending safety factors for a peak stress.
///
/// `sigma_kg_cm2` is the governing bending stress; zero yields infinite
/// factors rather than an error.
pub fn evaluate_bending(
    sigma_kg_cm2: f64,
    material: &Material,
    amplification: f64,
) -> CalcResult<SafetyCheck> {
    material.validate()?;
    if amplification <= 0.0 {
        return Err(CalcError::invalid_load(
            "amplification",
            amplification.to_string(),
            "Load amplification must be positive",
        ));
    }
    if sigma_kg_cm2 < 0.0 {
        return Err(CalcError::invalid_geometry(
            "sigma_kg_cm2",
            sigma_kg_cm2.to_string(),
            "Peak stress must be non-negative",
        ));
    }

    let amplified = amplification * sigma_kg_cm2;
    let sf_break = safety_factor(material.tensile_kg_cm2, amplified);
    let sf_yield = safety_factor(material.yield_kg_cm2, amplified);
    let sf_shear = material
        .shear_kg_cm2
        .map(|shear| safety_factor(shear, amplified / 2.0));

    Ok(SafetyCheck {
        sigma_kg_cm2,
        amplification,
        sf_break,
        sf_yield,
        sf_shear,
        ok_break: sf_break > BREAK_SF_THRESHOLD,
        ok_yield: sf_yield > YIELD_SF_THRESHOLD,
        ok_shear: sf_shear.map(|sf| sf > BREAK_SF_THRESHOLD),
    })
}

/// strength / demand, with zero demand degrading to +∞ (never NaN)
pub fn safety_factor(strength: f64, demand: f64) -> f64 {
    if demand > 0.0 {
        strength / demand
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ss400() -> Material {
        Material::new(4100.0, 2400.0)
    }

    #[test]
    fn test_safety_factors() {
        // sigma = 500: sf_break = 4100/(2.5*500) = 3.28, sf_yield = 1.92
        let check = evaluate_bending(500.0, &ss400(), DEFAULT_LOAD_AMPLIFICATION).unwrap();
        assert!((check.sf_break - 3.28).abs() < 1e-9);
        assert!((check.sf_yield - 1.92).abs() < 1e-9);
        assert!(check.ok_break);
        assert!(check.ok_yield);
        assert!(check.passes());
        assert_eq!(check.sf_shear, None);
    }

    #[test]
    fn test_factors_decrease_with_stress() {
        let low = evaluate_bending(300.0, &ss400(), 2.5).unwrap();
        let high = evaluate_bending(900.0, &ss400(), 2.5).unwrap();
        assert!(high.sf_break < low.sf_break);
        assert!(high.sf_yield < low.sf_yield);
    }

    #[test]
    fn test_boundary_is_strict() {
        // Construct sigma so that sf_break == 1.6 exactly:
        // sigma = tensile / (2.5 * 1.6) = 4100 / 4 = 1025
        let check = evaluate_bending(1025.0, &ss400(), 2.5).unwrap();
        assert!((check.sf_break - 1.6).abs() < 1e-12);
        assert!(!check.ok_break);

        // And sf_yield == 1.3 exactly: sigma = 2400 / (2.5 * 1.3)
        let sigma = 2400.0 / (2.5 * 1.3);
        let check = evaluate_bending(sigma, &ss400(), 2.5).unwrap();
        assert!(!check.ok_yield);
    }

    #[test]
    fn test_zero_stress_gives_infinite_factors() {
        let check = evaluate_bending(0.0, &ss400(), 2.5).unwrap();
        assert!(check.sf_break.is_infinite());
        assert!(check.sf_yield.is_infinite());
        assert!(check.passes());
    }

    #[test]
    fn test_shear_factor_when_strength_given() {
        let material = Material::new(4100.0, 2400.0).with_shear(2000.0);
        // tau = 2.5*400/2 = 500 -> sf_shear = 4.0
        let check = evaluate_bending(400.0, &material, 2.5).unwrap();
        assert!((check.sf_shear.unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(check.ok_shear, Some(true));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(evaluate_bending(-1.0, &ss400(), 2.5).is_err());
        assert!(evaluate_bending(100.0, &ss400(), 0.0).is_err());
        assert!(evaluate_bending(100.0, &Material::new(0.0, 2400.0), 2.5).is_err());
    }

    #[test]
    fn test_governing_condition() {
        // Yield governs for ordinary mild steel ratios
        let check = evaluate_bending(500.0, &ss400(), 2.5).unwrap();
        assert_eq!(check.governing_condition(), "Yield");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let check = evaluate_bending(500.0, &ss400(), 2.5).unwrap();
        let json = serde_json::to_string(&check).unwrap();
        let roundtrip: SafetyCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(check, roundtrip);
    }
}
