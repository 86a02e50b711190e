//! # Materials
//!
//! Material strengths for the safety evaluation. The engine never infers
//! material data — every calculation takes explicit scalar strengths in the
//! stress unit of its sheet (kg/cm² for the beam sheets, N/mm² for the
//! brake drum). A small catalog of common JIS structural grades is provided
//! for convenience so callers do not have to retype handbook values.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Scalar material strengths in kg/cm² (consistent with the bending
/// formulas). Shear strength is optional; when absent the shear safety
/// factor is simply not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Tensile (ultimate) strength θb (kg/cm²)
    pub tensile_kg_cm2: f64,

    /// Yield point θy (kg/cm²)
    pub yield_kg_cm2: f64,

    /// Shear strength (kg/cm²), if the sheet records one
    #[serde(default)]
    pub shear_kg_cm2: Option<f64>,
}

impl Material {
    /// Material from tensile and yield strengths
    pub fn new(tensile_kg_cm2: f64, yield_kg_cm2: f64) -> Self {
        Material {
            tensile_kg_cm2,
            yield_kg_cm2,
            shear_kg_cm2: None,
        }
    }

    /// Add a shear strength (builder pattern)
    pub fn with_shear(mut self, shear_kg_cm2: f64) -> Self {
        self.shear_kg_cm2 = Some(shear_kg_cm2);
        self
    }

    /// All provided strengths must be positive
    pub fn validate(&self) -> CalcResult<()> {
        if self.tensile_kg_cm2 <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "tensile_kg_cm2",
                self.tensile_kg_cm2.to_string(),
                "Tensile strength must be positive",
            ));
        }
        if self.yield_kg_cm2 <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "yield_kg_cm2",
                self.yield_kg_cm2.to_string(),
                "Yield strength must be positive",
            ));
        }
        if let Some(shear) = self.shear_kg_cm2 {
            if shear <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    "shear_kg_cm2",
                    shear.to_string(),
                    "Shear strength must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Common JIS structural steel grades seen on trailer paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// General structural rolled steel (JIS G3101)
    SS400,
    /// Carbon steel tube for machine structures (JIS G3445)
    STKM13A,
    /// Hot-rolled steel for automobile structures (JIS G3113)
    SAPH440,
    /// Medium-carbon machine steel (JIS G4051), axle stock
    S45C,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::SS400,
        SteelGrade::STKM13A,
        SteelGrade::SAPH440,
        SteelGrade::S45C,
    ];

    /// Get display name for UI and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::SS400 => "SS400",
            SteelGrade::STKM13A => "STKM13A",
            SteelGrade::SAPH440 => "SAPH440",
            SteelGrade::S45C => "S45C",
        }
    }

    /// Handbook strengths (kg/cm²). Minimum specified values, rounded the
    /// way the paperwork rounds them.
    pub fn properties(&self) -> Material {
        match self {
            SteelGrade::SS400 => Material::new(4100.0, 2400.0),
            SteelGrade::STKM13A => Material::new(3800.0, 2400.0),
            SteelGrade::SAPH440 => Material::new(4500.0, 3050.0),
            SteelGrade::S45C => Material::new(5800.0, 3500.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_strengths() {
        assert!(Material::new(4100.0, 2400.0).validate().is_ok());
        assert!(Material::new(0.0, 2400.0).validate().is_err());
        assert!(Material::new(4100.0, -1.0).validate().is_err());
        assert!(Material::new(4100.0, 2400.0)
            .with_shear(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_grade_properties() {
        for grade in SteelGrade::ALL {
            let m = grade.properties();
            assert!(m.validate().is_ok());
            // Yield is below tensile for every catalogued grade
            assert!(m.yield_kg_cm2 < m.tensile_kg_cm2);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = SteelGrade::SS400.properties().with_shear(2000.0);
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
