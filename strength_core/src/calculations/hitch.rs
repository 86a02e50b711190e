//! # Hitch-Member Strength Calculation
//!
//! The hitch member carries the coupler's vertical load and the horizontal
//! tow/braking force at the end of its effective length. Both produce
//! bending moments about perpendicular axes; the sheet combines them as
//! `M = √(M_v² + M_h²)` and checks the combined bending stress.
//!
//! Two member profiles appear on the forms: a round bar (Z = π·d³/32) and a
//! square tube (hollow square, Z = (a⁴ − b⁴)/(6a)). Unlike the frame rail's
//! by-thickness section, a square tube whose wall consumes the cavity is an
//! input error here, not a solid fallback — the sheet expects a real tube.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::strength::{evaluate_bending, SafetyCheck, DEFAULT_LOAD_AMPLIFICATION};

fn default_amplification() -> f64 {
    DEFAULT_LOAD_AMPLIFICATION
}

/// Hitch-member profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HitchProfile {
    /// Round bar of the given diameter
    Round { diameter_mm: f64 },

    /// Square tube: outer side length and wall thickness
    SquareTube { side_mm: f64, wall_mm: f64 },
}

impl HitchProfile {
    /// Get display name for UI and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            HitchProfile::Round { .. } => "Round",
            HitchProfile::SquareTube { .. } => "Square tube",
        }
    }

    /// Section modulus (cm³).
    pub fn section_modulus_cm3(&self) -> CalcResult<f64> {
        match *self {
            HitchProfile::Round { diameter_mm } => {
                if diameter_mm <= 0.0 {
                    return Err(CalcError::invalid_geometry(
                        "diameter_mm",
                        diameter_mm.to_string(),
                        "Diameter must be positive",
                    ));
                }
                let d_cm = diameter_mm / 10.0;
                Ok(PI * d_cm.powi(3) / 32.0)
            }
            HitchProfile::SquareTube { side_mm, wall_mm } => {
                if side_mm <= 0.0 || wall_mm <= 0.0 {
                    return Err(CalcError::invalid_geometry(
                        "side_mm",
                        format!("side={side_mm}, wall={wall_mm}"),
                        "Side length and wall thickness must be positive",
                    ));
                }
                let a_cm = side_mm / 10.0;
                let b_cm = a_cm - 2.0 * wall_mm / 10.0;
                if b_cm <= 0.0 {
                    return Err(CalcError::invalid_geometry(
                        "wall_mm",
                        wall_mm.to_string(),
                        "Wall thickness consumes the tube cavity",
                    ));
                }
                Ok((a_cm.powi(4) - b_cm.powi(4)) / (6.0 * a_cm))
            }
        }
    }
}

/// Input parameters for a hitch-member strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitchInput {
    /// User label (e.g. "Hitch member")
    pub label: String,

    /// Vertical load P at the coupler (kg)
    pub vertical_load_kg: f64,

    /// Horizontal tow/braking force H (kg); may be zero
    pub horizontal_force_kg: f64,

    /// Effective length from the coupling ball to the mounting face (mm)
    pub effective_length_mm: f64,

    /// Member profile (round bar or square tube)
    pub profile: HitchProfile,

    /// Material strengths (kg/cm²)
    pub material: Material,

    /// Load amplification for the safety factors
    #[serde(default = "default_amplification")]
    pub amplification: f64,
}

impl HitchInput {
    /// Validate loads, geometry, and material.
    pub fn validate(&self) -> CalcResult<()> {
        if self.vertical_load_kg <= 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.vertical_load_kg.to_string(),
                "Vertical load must be positive",
            ));
        }
        if self.horizontal_force_kg < 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.horizontal_force_kg.to_string(),
                "Horizontal force must be non-negative",
            ));
        }
        if self.effective_length_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "effective_length_mm",
                self.effective_length_mm.to_string(),
                "Effective length must be positive",
            ));
        }
        self.profile.section_modulus_cm3()?;
        self.material.validate()
    }
}

/// Results from a hitch-member strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitchResult {
    /// Vertical bending moment M_v = P·L (kg·cm)
    pub m_vertical_kg_cm: f64,

    /// Horizontal bending moment M_h = H·L (kg·cm)
    pub m_horizontal_kg_cm: f64,

    /// Combined moment √(M_v² + M_h²) (kg·cm)
    pub m_combined_kg_cm: f64,

    /// Section modulus (cm³)
    pub z_cm3: f64,

    /// Combined bending stress (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// Safety factors and pass/fail flags
    pub safety: SafetyCheck,
}

impl HitchResult {
    /// All safety checks pass
    pub fn passes(&self) -> bool {
        self.safety.passes()
    }
}

/// Run the hitch-member sheet.
pub fn calculate(input: &HitchInput) -> CalcResult<HitchResult> {
    input.validate()?;

    let l_cm = input.effective_length_mm / 10.0;
    let m_vertical = input.vertical_load_kg * l_cm;
    let m_horizontal = input.horizontal_force_kg * l_cm;
    let m_combined = (m_vertical.powi(2) + m_horizontal.powi(2)).sqrt();

    let z_cm3 = input.profile.section_modulus_cm3()?;
    let sigma_kg_cm2 = m_combined / z_cm3;
    let safety = evaluate_bending(sigma_kg_cm2, &input.material, input.amplification)?;

    Ok(HitchResult {
        m_vertical_kg_cm: m_vertical,
        m_horizontal_kg_cm: m_horizontal,
        m_combined_kg_cm: m_combined,
        z_cm3,
        sigma_kg_cm2,
        safety,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SteelGrade;

    fn round_input() -> HitchInput {
        HitchInput {
            label: "Hitch member".to_string(),
            vertical_load_kg: 1500.0,
            horizontal_force_kg: 300.0,
            effective_length_mm: 200.0,
            profile: HitchProfile::Round { diameter_mm: 60.0 },
            material: SteelGrade::STKM13A.properties(),
            amplification: DEFAULT_LOAD_AMPLIFICATION,
        }
    }

    #[test]
    fn test_combined_moment() {
        let result = calculate(&round_input()).unwrap();

        // L = 20 cm: M_v = 30_000, M_h = 6_000 kg*cm
        assert!((result.m_vertical_kg_cm - 30_000.0).abs() < 1e-9);
        assert!((result.m_horizontal_kg_cm - 6_000.0).abs() < 1e-9);

        let expected = (30_000.0f64.powi(2) + 6_000.0f64.powi(2)).sqrt();
        assert!((result.m_combined_kg_cm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_round_modulus() {
        // Z = pi * 6^3 / 32 = 21.206 cm^3
        let z = HitchProfile::Round { diameter_mm: 60.0 }
            .section_modulus_cm3()
            .unwrap();
        assert!((z - PI * 6.0f64.powi(3) / 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_tube_modulus() {
        // a = 6 cm, t = 0.5 cm, b = 5 cm: Z = (6^4 - 5^4)/(6*6) = 18.64 cm^3
        let z = HitchProfile::SquareTube {
            side_mm: 60.0,
            wall_mm: 5.0,
        }
        .section_modulus_cm3()
        .unwrap();
        assert!((z - (1296.0 - 625.0) / 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_consuming_tube_rejected() {
        let err = HitchProfile::SquareTube {
            side_mm: 60.0,
            wall_mm: 30.0,
        }
        .section_modulus_cm3()
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_zero_horizontal_force_allowed() {
        let mut input = round_input();
        input.horizontal_force_kg = 0.0;
        let result = calculate(&input).unwrap();
        assert!((result.m_combined_kg_cm - result.m_vertical_kg_cm).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_vertical_load_rejected() {
        let mut input = round_input();
        input.vertical_load_kg = 0.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_LOAD"
        );
    }

    #[test]
    fn test_safety_evaluation() {
        let result = calculate(&round_input()).unwrap();
        let expected_sigma = result.m_combined_kg_cm / result.z_cm3;
        assert!((result.sigma_kg_cm2 - expected_sigma).abs() < 1e-9);
        assert!(
            (result.safety.sf_yield - 2400.0 / (2.5 * expected_sigma)).abs() < 1e-9
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = HitchInput {
            profile: HitchProfile::SquareTube {
                side_mm: 60.0,
                wall_mm: 5.0,
            },
            ..round_input()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"type\":\"SquareTube\""));
        let roundtrip: HitchInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.profile, roundtrip.profile);
    }
}
