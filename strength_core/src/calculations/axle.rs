//! # Axle Strength Calculation
//!
//! Bending check of a round axle shaft. The vehicle's total weight splits
//! evenly over the wheels on the axle; each wheel load acts at the bearing
//! offset ΔS from the axle center, bending the shaft as a short cantilever.
//!
//! Round-shaft section modulus Z = π·d³/32 with d in cm, M = P·ΔS in kg·cm,
//! σ = M/Z — the same figures the axle sheet tabulates.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::strength::{evaluate_bending, SafetyCheck, DEFAULT_LOAD_AMPLIFICATION};

fn default_wheel_count() -> u32 {
    2
}

fn default_amplification() -> f64 {
    DEFAULT_LOAD_AMPLIFICATION
}

/// Input parameters for an axle strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxleInput {
    /// User label (e.g. "Rear axle")
    pub label: String,

    /// Total weight carried by the axle (kg)
    pub total_weight_kg: f64,

    /// Wheels sharing the load on this axle
    #[serde(default = "default_wheel_count")]
    pub wheel_count: u32,

    /// Shaft diameter (mm)
    pub diameter_mm: f64,

    /// Axle center to bearing center distance ΔS (mm)
    pub bearing_offset_mm: f64,

    /// Material strengths (kg/cm²)
    pub material: Material,

    /// Load amplification for the safety factors
    #[serde(default = "default_amplification")]
    pub amplification: f64,
}

impl AxleInput {
    /// Validate weights, geometry, and material.
    pub fn validate(&self) -> CalcResult<()> {
        if self.total_weight_kg <= 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.total_weight_kg.to_string(),
                "Axle weight must be positive",
            ));
        }
        if self.wheel_count == 0 {
            return Err(CalcError::invalid_load(
                &self.label,
                "0",
                "At least one wheel must carry the axle",
            ));
        }
        if self.diameter_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Shaft diameter must be positive",
            ));
        }
        if self.bearing_offset_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "bearing_offset_mm",
                self.bearing_offset_mm.to_string(),
                "Bearing offset must be positive",
            ));
        }
        self.material.validate()
    }
}

/// Results from an axle strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxleResult {
    /// Load per wheel P = W / wheel_count (kg)
    pub wheel_load_kg: f64,

    /// Round-shaft section modulus Z = π·d³/32 (cm³)
    pub z_cm3: f64,

    /// Bending moment M = P·ΔS (kg·cm)
    pub moment_kg_cm: f64,

    /// Bending stress σ = M/Z (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// Safety factors and pass/fail flags
    pub safety: SafetyCheck,
}

impl AxleResult {
    /// All safety checks pass
    pub fn passes(&self) -> bool {
        self.safety.passes()
    }
}

/// Run the axle sheet.
pub fn calculate(input: &AxleInput) -> CalcResult<AxleResult> {
    input.validate()?;

    let wheel_load_kg = input.total_weight_kg / input.wheel_count as f64;
    let d_cm = input.diameter_mm / 10.0;
    let z_cm3 = PI * d_cm.powi(3) / 32.0;
    let moment_kg_cm = wheel_load_kg * input.bearing_offset_mm / 10.0;
    let sigma_kg_cm2 = moment_kg_cm / z_cm3;
    let safety = evaluate_bending(sigma_kg_cm2, &input.material, input.amplification)?;

    Ok(AxleResult {
        wheel_load_kg,
        z_cm3,
        moment_kg_cm,
        sigma_kg_cm2,
        safety,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SteelGrade;

    fn test_input() -> AxleInput {
        AxleInput {
            label: "Rear axle".to_string(),
            total_weight_kg: 1500.0,
            wheel_count: 2,
            diameter_mm: 45.0,
            bearing_offset_mm: 500.0,
            material: SteelGrade::S45C.properties(),
            amplification: DEFAULT_LOAD_AMPLIFICATION,
        }
    }

    #[test]
    fn test_axle_figures() {
        let result = calculate(&test_input()).unwrap();

        // P = 1500/2 = 750 kg
        assert!((result.wheel_load_kg - 750.0).abs() < 1e-12);

        // Z = pi * 4.5^3 / 32 = 8.946 cm^3
        assert!((result.z_cm3 - PI * 4.5f64.powi(3) / 32.0).abs() < 1e-12);

        // M = 750 * 50 = 37_500 kg*cm
        assert!((result.moment_kg_cm - 37_500.0).abs() < 1e-9);

        assert!((result.sigma_kg_cm2 - 37_500.0 / result.z_cm3).abs() < 1e-9);
    }

    #[test]
    fn test_more_wheels_lower_stress() {
        let two = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.wheel_count = 4;
        let four = calculate(&input).unwrap();
        assert!((four.sigma_kg_cm2 - two.sigma_kg_cm2 / 2.0).abs() < 1e-9);
        assert!(four.safety.sf_break > two.safety.sf_break);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_input();
        input.wheel_count = 0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.diameter_mm = -45.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_GEOMETRY"
        );
    }

    #[test]
    fn test_wheel_count_default_on_deserialize() {
        let json = r#"{
            "label": "Axle",
            "total_weight_kg": 1500.0,
            "diameter_mm": 45.0,
            "bearing_offset_mm": 500.0,
            "material": { "tensile_kg_cm2": 5800.0, "yield_kg_cm2": 3500.0, "shear_kg_cm2": null }
        }"#;
        let input: AxleInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.wheel_count, 2);
        assert_eq!(input.amplification, DEFAULT_LOAD_AMPLIFICATION);
    }
}
