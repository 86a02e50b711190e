//! # Section-Property Library
//!
//! Cross-section variants used by the frame members on the inspection forms,
//! with their second moment of area and section modulus.
//!
//! All dimensions are millimeters; moduli come back in mm³ (with a cm³
//! convenience, since the stress formulas on the forms work in kg·cm and
//! kg/cm²).
//!
//! ## Supported Sections
//! - Solid rectangle (pressed channel approximated as solid)
//! - Hollow rectangle, given either inner dimensions or wall thickness
//! - H-beam (I-beam) with web and flange thickness
//!
//! ## Example
//! ```rust
//! use strength_core::section::CrossSection;
//!
//! let section = CrossSection::SolidRect { width_mm: 50.0, height_mm: 100.0 };
//! let z = section.section_modulus_mm3().unwrap();
//! assert!((z - 83_333.33).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A beam cross-section. Immutable once constructed; all derived
/// properties are pure functions of the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSection {
    /// Solid rectangle, outer width B and height H
    SolidRect { width_mm: f64, height_mm: f64 },

    /// Hollow rectangle: outer B,H minus inner cavity b,h
    HollowRect {
        width_mm: f64,
        height_mm: f64,
        inner_width_mm: f64,
        inner_height_mm: f64,
    },

    /// Hollow rectangle given a uniform wall thickness.
    /// A wall thick enough to consume the cavity degrades to the solid case.
    HollowRectByThickness {
        width_mm: f64,
        height_mm: f64,
        wall_mm: f64,
    },

    /// H-beam: flange width B, total height H, web thickness tw, flange
    /// thickness tf
    IBeam {
        width_mm: f64,
        height_mm: f64,
        web_mm: f64,
        flange_mm: f64,
    },
}

impl CrossSection {
    /// Get display name for UI and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CrossSection::SolidRect { .. } => "Solid Rectangle",
            CrossSection::HollowRect { .. } => "Hollow Rectangle",
            CrossSection::HollowRectByThickness { .. } => "Hollow Rectangle (by wall)",
            CrossSection::IBeam { .. } => "H-Beam",
        }
    }

    /// Outer height H, the bending depth used for Z = I/(H/2)
    pub fn height_mm(&self) -> f64 {
        match self {
            CrossSection::SolidRect { height_mm, .. }
            | CrossSection::HollowRect { height_mm, .. }
            | CrossSection::HollowRectByThickness { height_mm, .. }
            | CrossSection::IBeam { height_mm, .. } => *height_mm,
        }
    }

    /// Validate dimensional invariants.
    ///
    /// Every dimension must be positive and every inner dimension strictly
    /// smaller than its outer counterpart. The by-thickness variant accepts
    /// a wall that consumes the cavity (it is treated as solid).
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            CrossSection::SolidRect {
                width_mm,
                height_mm,
            } => {
                require_positive("width_mm", width_mm)?;
                require_positive("height_mm", height_mm)?;
            }
            CrossSection::HollowRect {
                width_mm,
                height_mm,
                inner_width_mm,
                inner_height_mm,
            } => {
                require_positive("width_mm", width_mm)?;
                require_positive("height_mm", height_mm)?;
                require_positive("inner_width_mm", inner_width_mm)?;
                require_positive("inner_height_mm", inner_height_mm)?;
                if inner_width_mm >= width_mm {
                    return Err(CalcError::invalid_geometry(
                        "inner_width_mm",
                        inner_width_mm.to_string(),
                        "Inner width must be smaller than outer width",
                    ));
                }
                if inner_height_mm >= height_mm {
                    return Err(CalcError::invalid_geometry(
                        "inner_height_mm",
                        inner_height_mm.to_string(),
                        "Inner height must be smaller than outer height",
                    ));
                }
            }
            CrossSection::HollowRectByThickness {
                width_mm,
                height_mm,
                wall_mm,
            } => {
                require_positive("width_mm", width_mm)?;
                require_positive("height_mm", height_mm)?;
                require_positive("wall_mm", wall_mm)?;
            }
            CrossSection::IBeam {
                width_mm,
                height_mm,
                web_mm,
                flange_mm,
            } => {
                require_positive("width_mm", width_mm)?;
                require_positive("height_mm", height_mm)?;
                require_positive("web_mm", web_mm)?;
                require_positive("flange_mm", flange_mm)?;
                if 2.0 * flange_mm >= height_mm {
                    return Err(CalcError::invalid_geometry(
                        "flange_mm",
                        flange_mm.to_string(),
                        "Flange thickness too large for total height (2*tf < H required)",
                    ));
                }
                if web_mm >= width_mm {
                    return Err(CalcError::invalid_geometry(
                        "web_mm",
                        web_mm.to_string(),
                        "Web thickness must be smaller than flange width",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Second moment of area I (mm⁴).
    pub fn second_moment_mm4(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(match *self {
            CrossSection::SolidRect {
                width_mm: b,
                height_mm: h,
            } => b * h.powi(3) / 12.0,
            CrossSection::HollowRect {
                width_mm: bo,
                height_mm: ho,
                inner_width_mm: bi,
                inner_height_mm: hi,
            } => (bo * ho.powi(3) - bi * hi.powi(3)) / 12.0,
            CrossSection::HollowRectByThickness { .. } => {
                return self.resolve_thickness().second_moment_mm4()
            }
            CrossSection::IBeam {
                width_mm: b,
                height_mm: h,
                web_mm: tw,
                flange_mm: tf,
            } => (b * h.powi(3) - (b - tw) * (h - 2.0 * tf).powi(3)) / 12.0,
        })
    }

    /// Section modulus Z (mm³), Z = I / (H/2).
    ///
    /// - Solid rectangle: Z = B·H²/6
    /// - Hollow rectangle: Z = (B·H³ − b·h³)/(6·H)
    /// - H-beam: Z = 2I/H with I = (B·H³ − (B−tw)·(H−2tf)³)/12
    pub fn section_modulus_mm3(&self) -> CalcResult<f64> {
        let i = self.second_moment_mm4()?;
        Ok(2.0 * i / self.height_mm())
    }

    /// Section modulus in cm³ (1 cm³ = 1000 mm³), as the stress formulas use
    pub fn section_modulus_cm3(&self) -> CalcResult<f64> {
        Ok(self.section_modulus_mm3()? / 1000.0)
    }

    /// Reduce a by-thickness section to hollow (or solid when the wall
    /// consumes the cavity). Identity for the other variants.
    fn resolve_thickness(&self) -> CrossSection {
        match *self {
            CrossSection::HollowRectByThickness {
                width_mm,
                height_mm,
                wall_mm,
            } => {
                let inner_w = width_mm - 2.0 * wall_mm;
                let inner_h = height_mm - 2.0 * wall_mm;
                if inner_w <= 0.0 || inner_h <= 0.0 {
                    CrossSection::SolidRect {
                        width_mm,
                        height_mm,
                    }
                } else {
                    CrossSection::HollowRect {
                        width_mm,
                        height_mm,
                        inner_width_mm: inner_w,
                        inner_height_mm: inner_h,
                    }
                }
            }
            other => other,
        }
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value <= 0.0 {
        return Err(CalcError::invalid_geometry(
            field,
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    Ok(())
}
