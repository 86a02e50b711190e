//! # Brake-Drum Strength Calculation
//!
//! The drum is checked as a thick-walled cylinder under internal pressure
//! using the classical Lamé formulas. With k = r_outer/r_inner:
//!
//! - inner-surface hoop stress  σθ_i = P·(k² + 1)/(k² − 1)
//! - outer-surface hoop stress  σθ_o = P·2k²/(k² − 1)
//! - radial stress at the bore  σr_i = −P
//!
//! The inner hoop stress dominates, so the equivalent (von Mises) stress is
//! taken as the tangential term alone, times an optional safety margin.
//! Maximum shear is σ_eq/2.
//!
//! This sheet works in N/mm² (= MPa) and passes at safety factors **≥ 1.5**
//! for tensile, yield, and shear alike — a different bar from the beam
//! sheets' strict >1.6/>1.3, by regulation rather than by accident.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::strength::safety_factor;

/// Minimum required safety factor on the drum sheet (inclusive)
pub const MIN_SAFETY: f64 = 1.5;

fn default_safety_margin() -> f64 {
    1.0
}

/// Input parameters for a brake-drum strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrakeDrumInput {
    /// User label (e.g. "Rear drum")
    pub label: String,

    /// Bore radius r_i (mm)
    pub inner_radius_mm: f64,

    /// Outer radius r_o (mm), must exceed the bore
    pub outer_radius_mm: f64,

    /// Internal (actuation) pressure (N/mm² = MPa)
    pub pressure_n_mm2: f64,

    /// Drum width (mm); recorded on the sheet, not part of the Lamé field
    pub width_mm: f64,

    /// Material tensile strength (N/mm²)
    pub tensile_n_mm2: f64,

    /// Material yield point (N/mm²)
    pub yield_n_mm2: f64,

    /// Material shear strength (N/mm²)
    pub shear_n_mm2: f64,

    /// Stress-increase margin (1.0–1.2 typical)
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
}

impl BrakeDrumInput {
    /// Validate radii, pressure, and strengths.
    pub fn validate(&self) -> CalcResult<()> {
        if self.inner_radius_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "inner_radius_mm",
                self.inner_radius_mm.to_string(),
                "Bore radius must be positive",
            ));
        }
        if self.outer_radius_mm <= self.inner_radius_mm {
            return Err(CalcError::invalid_geometry(
                "outer_radius_mm",
                self.outer_radius_mm.to_string(),
                "Outer radius must exceed the bore (wall thickness must be positive)",
            ));
        }
        if self.pressure_n_mm2 < 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.pressure_n_mm2.to_string(),
                "Pressure must be non-negative",
            ));
        }
        if self.width_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "width_mm",
                self.width_mm.to_string(),
                "Drum width must be positive",
            ));
        }
        for (field, value) in [
            ("tensile_n_mm2", self.tensile_n_mm2),
            ("yield_n_mm2", self.yield_n_mm2),
            ("shear_n_mm2", self.shear_n_mm2),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    field,
                    value.to_string(),
                    "Material strength must be positive",
                ));
            }
        }
        if self.safety_margin <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "safety_margin",
                self.safety_margin.to_string(),
                "Safety margin must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a brake-drum strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrakeDrumResult {
    /// Radius ratio k = r_outer / r_inner
    pub k_ratio: f64,

    /// Inner-surface hoop stress (N/mm²)
    pub hoop_inner_n_mm2: f64,

    /// Outer-surface hoop stress (N/mm²)
    pub hoop_outer_n_mm2: f64,

    /// Equivalent stress after the margin (N/mm²)
    pub equivalent_n_mm2: f64,

    /// Maximum shear stress τ = σ_eq/2 (N/mm²)
    pub max_shear_n_mm2: f64,

    /// Safety factors against tensile, yield, and shear strengths
    pub sf_tensile: f64,
    pub sf_yield: f64,
    pub sf_shear: f64,

    /// Pass flags, each `sf ≥ 1.5`
    pub ok_tensile: bool,
    pub ok_yield: bool,
    pub ok_shear: bool,

    /// All three checks pass
    pub ok_overall: bool,

    /// The threshold the flags were judged against
    pub min_safety_required: f64,
}

/// Run the brake-drum sheet.
///
/// Zero pressure degrades to `+∞` safety factors (always passing), never an
/// error or NaN.
pub fn calculate(input: &BrakeDrumInput) -> CalcResult<BrakeDrumResult> {
    input.validate()?;

    let k = input.outer_radius_mm / input.inner_radius_mm;
    let k2 = k * k;
    let p = input.pressure_n_mm2;

    let hoop_inner = p * (k2 + 1.0) / (k2 - 1.0);
    let hoop_outer = p * 2.0 * k2 / (k2 - 1.0);

    // Inner hoop dominates; von Mises collapses to the tangential term
    let equivalent = hoop_inner * input.safety_margin;
    let max_shear = equivalent / 2.0;

    let sf_tensile = safety_factor(input.tensile_n_mm2, equivalent);
    let sf_yield = safety_factor(input.yield_n_mm2, equivalent);
    let sf_shear = safety_factor(input.shear_n_mm2, max_shear);

    let ok_tensile = sf_tensile >= MIN_SAFETY;
    let ok_yield = sf_yield >= MIN_SAFETY;
    let ok_shear = sf_shear >= MIN_SAFETY;

    Ok(BrakeDrumResult {
        k_ratio: k,
        hoop_inner_n_mm2: hoop_inner,
        hoop_outer_n_mm2: hoop_outer,
        equivalent_n_mm2: equivalent,
        max_shear_n_mm2: max_shear,
        sf_tensile,
        sf_yield,
        sf_shear,
        ok_tensile,
        ok_yield,
        ok_shear,
        ok_overall: ok_tensile && ok_yield && ok_shear,
        min_safety_required: MIN_SAFETY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> BrakeDrumInput {
        BrakeDrumInput {
            label: "Rear drum".to_string(),
            inner_radius_mm: 105.0,
            outer_radius_mm: 115.0,
            pressure_n_mm2: 2.5,
            width_mm: 45.0,
            tensile_n_mm2: 250.0,
            yield_n_mm2: 165.0,
            shear_n_mm2: 200.0,
            safety_margin: 1.0,
        }
    }

    #[test]
    fn test_lame_inner_hoop() {
        // k = 115/105: sigma_i = 2.5*(k^2+1)/(k^2-1)
        //            = 2.5 * 24_250/2_200 = 27.557 N/mm^2
        let result = calculate(&test_input()).unwrap();
        let expected = 2.5 * (13_225.0 + 11_025.0) / (13_225.0 - 11_025.0);
        assert!(((result.hoop_inner_n_mm2 - expected) / expected).abs() < 0.001);
        assert!((result.hoop_inner_n_mm2 - 27.557).abs() < 0.001);
        assert!((result.k_ratio - 115.0 / 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_hoop_below_inner() {
        let result = calculate(&test_input()).unwrap();
        assert!(result.hoop_outer_n_mm2 < result.hoop_inner_n_mm2);
        // sigma_o = 2k^2/(k^2+1) * sigma_i
        let k2 = (115.0f64 / 105.0).powi(2);
        let expected = result.hoop_inner_n_mm2 * 2.0 * k2 / (k2 + 1.0);
        assert!((result.hoop_outer_n_mm2 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_safety_factors_and_flags() {
        let result = calculate(&test_input()).unwrap();

        // sf_tensile = 250/27.557 = 9.07, sf_yield = 5.99
        assert!((result.sf_tensile - 250.0 / result.equivalent_n_mm2).abs() < 1e-9);
        assert!((result.sf_shear - 200.0 / result.max_shear_n_mm2).abs() < 1e-9);
        assert!(result.ok_tensile && result.ok_yield && result.ok_shear);
        assert!(result.ok_overall);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Tune tensile strength so sf_tensile == 1.5 exactly: still passing
        let mut input = test_input();
        let equivalent = calculate(&input).unwrap().equivalent_n_mm2;
        input.tensile_n_mm2 = 1.5 * equivalent;
        let result = calculate(&input).unwrap();
        assert!((result.sf_tensile - 1.5).abs() < 1e-9);
        assert!(result.ok_tensile);
    }

    #[test]
    fn test_zero_pressure_gives_infinite_factors() {
        let mut input = test_input();
        input.pressure_n_mm2 = 0.0;
        let result = calculate(&input).unwrap();
        assert!(result.sf_tensile.is_infinite());
        assert!(result.sf_shear.is_infinite());
        assert!(result.ok_overall);
    }

    #[test]
    fn test_safety_margin_scales_stress() {
        let plain = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.safety_margin = 1.2;
        let margined = calculate(&input).unwrap();
        assert!((margined.equivalent_n_mm2 - plain.equivalent_n_mm2 * 1.2).abs() < 1e-9);
        assert!(margined.sf_tensile < plain.sf_tensile);
    }

    #[test]
    fn test_zero_wall_rejected() {
        let mut input = test_input();
        input.outer_radius_mm = 105.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_thinner_wall_higher_stress() {
        let thick = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.outer_radius_mm = 110.0;
        let thin = calculate(&input).unwrap();
        assert!(thin.hoop_inner_n_mm2 > thick.hoop_inner_n_mm2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BrakeDrumResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.ok_overall, roundtrip.ok_overall);
        assert!((result.hoop_inner_n_mm2 - roundtrip.hoop_inner_n_mm2).abs() < 1e-12);
    }
}
