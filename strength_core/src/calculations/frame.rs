//! # Frame Strength Calculation
//!
//! The main pipeline for a load-bearing frame member: loads and supports go
//! through the reaction solve, the shear/moment integration, the section
//! layout (uniform or zoned), and finally the safety evaluation. This is
//! the calculation behind the frame pages of the certification paperwork.
//!
//! Container chassis layouts get convenience constructors: a container
//! sits on four corner seats, two per longitudinal rail, so one rail
//! carries half the container weight split into two equal point loads at
//! the front/rear seat offsets. The rail is supported either at its ends
//! or at the suspension-hanger centers.
//!
//! ## Example
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
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::composite::{governing_stress, SectionLayout};
use crate::diagram::{integrate, IntegratorOptions};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{BeamLoad, PointLoad};
use crate::materials::Material;
use crate::section::CrossSection;
use crate::statics::{solve_reactions, BeamSpan, SupportPair};
use crate::strength::{evaluate_bending, SafetyCheck, DEFAULT_LOAD_AMPLIFICATION};

fn default_amplification() -> f64 {
    DEFAULT_LOAD_AMPLIFICATION
}

/// Input parameters for a frame strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInput {
    /// User label for this member (e.g. "Main rail", "Subframe")
    pub label: String,

    /// The member as a 1-D span: length, loads, supports, section layout
    pub span: BeamSpan,

    /// Material strengths (kg/cm²)
    pub material: Material,

    /// Load amplification for the safety factors
    #[serde(default = "default_amplification")]
    pub amplification: f64,

    /// Integrator tuning (support-area correction coefficient)
    #[serde(default)]
    pub integrator: IntegratorOptions,
}

impl FrameInput {
    /// Frame input with the default amplification and integrator settings
    pub fn new(label: impl Into<String>, span: BeamSpan, material: Material) -> Self {
        FrameInput {
            label: label.into(),
            span,
            material,
            amplification: DEFAULT_LOAD_AMPLIFICATION,
            integrator: IntegratorOptions::default(),
        }
    }

    /// Container chassis rail supported at both ends.
    ///
    /// One rail carries half the container weight as two equal point loads
    /// at `front_offset_mm` and `span_mm − rear_offset_mm`.
    pub fn container_end_supported(
        label: impl Into<String>,
        container_weight_kg: f64,
        span_mm: f64,
        front_offset_mm: f64,
        rear_offset_mm: f64,
        section: CrossSection,
        material: Material,
    ) -> CalcResult<Self> {
        let loads = container_seat_loads(
            container_weight_kg,
            span_mm,
            front_offset_mm,
            rear_offset_mm,
        )?;
        Ok(FrameInput::new(
            label,
            BeamSpan {
                length_mm: span_mm,
                loads,
                supports: SupportPair::Ends,
                layout: SectionLayout::uniform(section),
            },
            material,
        ))
    }

    /// Container chassis rail supported at the suspension-hanger centers.
    ///
    /// Same seating as [`FrameInput::container_end_supported`], but the
    /// reactions act at `hanger1_mm`/`hanger2_mm`. The solve rejects seats
    /// outside the hanger span.
    #[allow(clippy::too_many_arguments)]
    pub fn container_on_hangers(
        label: impl Into<String>,
        container_weight_kg: f64,
        span_mm: f64,
        front_offset_mm: f64,
        rear_offset_mm: f64,
        hanger1_mm: f64,
        hanger2_mm: f64,
        section: CrossSection,
        material: Material,
    ) -> CalcResult<Self> {
        let loads = container_seat_loads(
            container_weight_kg,
            span_mm,
            front_offset_mm,
            rear_offset_mm,
        )?;
        Ok(FrameInput::new(
            label,
            BeamSpan {
                length_mm: span_mm,
                loads,
                supports: SupportPair::Interior {
                    x1_mm: hanger1_mm,
                    x2_mm: hanger2_mm,
                },
                layout: SectionLayout::uniform(section),
            },
            material,
        ))
    }
}

/// Two equal seat loads per rail: container weight halved per rail, halved
/// again per seat.
fn container_seat_loads(
    container_weight_kg: f64,
    span_mm: f64,
    front_offset_mm: f64,
    rear_offset_mm: f64,
) -> CalcResult<Vec<BeamLoad>> {
    if container_weight_kg <= 0.0 {
        return Err(CalcError::invalid_load(
            "container",
            container_weight_kg.to_string(),
            "Container weight must be positive",
        ));
    }
    if front_offset_mm <= 0.0 || rear_offset_mm <= 0.0 {
        return Err(CalcError::geometry_violation(
            "Seat offsets must be positive",
        ));
    }
    if front_offset_mm + rear_offset_mm >= span_mm {
        return Err(CalcError::geometry_violation(format!(
            "Seat offsets {front_offset_mm} + {rear_offset_mm} mm consume the whole \
             {span_mm} mm span"
        )));
    }
    let per_seat = container_weight_kg / 2.0 / 2.0;
    Ok(vec![
        BeamLoad::Point(PointLoad::new("Front seat", per_seat, front_offset_mm)),
        BeamLoad::Point(PointLoad::new(
            "Rear seat",
            per_seat,
            span_mm - rear_offset_mm,
        )),
    ])
}

/// Results from a frame strength calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResult {
    /// Reaction at support A (kg), positive upward
    pub reaction_a_kg: f64,
    /// Reaction at support B (kg)
    pub reaction_b_kg: f64,

    /// Shear samples (x mm, V kg) for plotting/tabulation
    pub shear_kg: Vec<(f64, f64)>,
    /// Moment samples (x mm, M kg·mm)
    pub moment_kg_mm: Vec<(f64, f64)>,

    /// Governing bending moment (kg·cm)
    pub m_max_kg_cm: f64,
    /// Where the governing moment occurs (mm)
    pub m_max_position_mm: f64,

    /// Effective section modulus where the stress governs (mm³ / cm³)
    pub z_eff_mm3: f64,
    pub z_eff_cm3: f64,

    /// Governing zone index for zoned layouts
    pub governing_zone: Option<usize>,

    /// Governing bending stress (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// Safety factors and pass/fail flags
    pub safety: SafetyCheck,
}

impl FrameResult {
    /// All safety checks pass
    pub fn passes(&self) -> bool {
        self.safety.passes()
    }
}

/// Run the full frame pipeline: reactions → diagram → governing stress →
/// safety factors.
///
/// Pure function; the caller owns the result.
pub fn calculate(input: &FrameInput) -> CalcResult<FrameResult> {
    let reactions = solve_reactions(&input.span)?;
    let diagram = integrate(&input.span, &reactions, &input.integrator)?;
    let governing = governing_stress(&input.span.layout, &diagram.moment_kg_mm)?;
    let safety = evaluate_bending(governing.sigma_kg_cm2, &input.material, input.amplification)?;

    let m_max_kg_cm = diagram.m_max_kg_cm();
    Ok(FrameResult {
        reaction_a_kg: reactions.r_a_kg,
        reaction_b_kg: reactions.r_b_kg,
        shear_kg: diagram.shear_kg,
        moment_kg_mm: diagram.moment_kg_mm,
        m_max_kg_cm,
        m_max_position_mm: diagram.m_max_position_mm,
        z_eff_mm3: governing.z_eff_mm3,
        z_eff_cm3: governing.z_eff_mm3 / 1000.0,
        governing_zone: governing.zone_index,
        sigma_kg_cm2: governing.sigma_kg_cm2,
        safety,
    })
}
