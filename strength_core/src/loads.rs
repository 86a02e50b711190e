//! # Load Model
//!
//! Point and patch loads along a 1-D beam axis.
//!
//! ## Sign Convention
//! - Downward forces are positive magnitudes (the beam deflects down)
//! - A downward load feeds the shear walk as a negative increment
//! - Point loads may carry a negative magnitude for upward forces (e.g. a
//!   coupler reaction); patch loads are stored positive and take their
//!   direction from [`PatchKind`]
//!
//! A patch load models a finite contact length such as a spring-hanger seat
//! or a container corner casting, rather than an idealized point. `Pressing`
//! patches push the member down; `Supporting` patches act as distributed
//! upward reactions and may carry a contact area that feeds the
//! support-stiffening correction in the integrator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};

/// Direction/role of a patch load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatchKind {
    /// Acts like a downward load spread over the contact length
    Pressing,
    /// Acts as an upward distributed reaction over the contact length
    Supporting,
}

impl PatchKind {
    /// Get display name for UI and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            PatchKind::Pressing => "Pressing",
            PatchKind::Supporting => "Supporting",
        }
    }
}

/// A concentrated load at a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoad {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// User label (e.g. "W1", "Container seat front")
    pub label: String,

    /// Signed magnitude (kg), downward positive
    pub magnitude_kg: f64,

    /// Distance from the beam origin (mm)
    pub position_mm: f64,
}

impl PointLoad {
    /// Create a point load with a fresh id
    pub fn new(label: impl Into<String>, magnitude_kg: f64, position_mm: f64) -> Self {
        PointLoad {
            id: Uuid::new_v4(),
            label: label.into(),
            magnitude_kg,
            position_mm,
        }
    }

    /// Check the position lies on the span [0, L]
    pub fn validate(&self, span_mm: f64) -> CalcResult<()> {
        if !(0.0..=span_mm).contains(&self.position_mm) {
            return Err(CalcError::invalid_load(
                &self.label,
                self.position_mm.to_string(),
                format!("Position must lie within [0, {span_mm}] mm"),
            ));
        }
        Ok(())
    }
}

/// A uniformly distributed load over a finite contact length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchLoad {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// User label (e.g. "Front hanger")
    pub label: String,

    /// Magnitude (kg), stored positive; direction comes from `kind`
    pub magnitude_kg: f64,

    /// Center of the contact length (mm from beam origin)
    pub center_mm: f64,

    /// Contact length along the beam axis (mm), must be positive
    pub width_mm: f64,

    /// Contact area (mm²) for the support-stiffening correction.
    /// Zero means no correction.
    pub contact_area_mm2: f64,

    /// Pressing (downward) or Supporting (upward reaction)
    pub kind: PatchKind,
}

impl PatchLoad {
    /// Create a pressing (downward) patch load with a fresh id
    pub fn pressing(
        label: impl Into<String>,
        magnitude_kg: f64,
        center_mm: f64,
        width_mm: f64,
    ) -> Self {
        PatchLoad {
            id: Uuid::new_v4(),
            label: label.into(),
            magnitude_kg,
            center_mm,
            width_mm,
            contact_area_mm2: 0.0,
            kind: PatchKind::Pressing,
        }
    }

    /// Create a supporting (upward) patch load with a fresh id
    pub fn supporting(
        label: impl Into<String>,
        magnitude_kg: f64,
        center_mm: f64,
        width_mm: f64,
    ) -> Self {
        PatchLoad {
            id: Uuid::new_v4(),
            label: label.into(),
            magnitude_kg,
            center_mm,
            width_mm,
            contact_area_mm2: 0.0,
            kind: PatchKind::Supporting,
        }
    }

    /// Set the contact area (builder pattern)
    pub fn with_contact_area(mut self, area_mm2: f64) -> Self {
        self.contact_area_mm2 = area_mm2;
        self
    }

    /// Patch boundaries (x1, x2) = center ∓ width/2
    pub fn span(&self) -> (f64, f64) {
        (
            self.center_mm - self.width_mm / 2.0,
            self.center_mm + self.width_mm / 2.0,
        )
    }

    /// Check width and boundaries: width > 0 and 0 ≤ x1 < x2 ≤ L
    pub fn validate(&self, span_mm: f64) -> CalcResult<()> {
        if self.width_mm <= 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.width_mm.to_string(),
                "Contact width must be positive",
            ));
        }
        if self.magnitude_kg < 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.magnitude_kg.to_string(),
                "Patch magnitude must be non-negative; direction comes from kind",
            ));
        }
        if self.contact_area_mm2 < 0.0 {
            return Err(CalcError::invalid_load(
                &self.label,
                self.contact_area_mm2.to_string(),
                "Contact area must be non-negative",
            ));
        }
        let (x1, x2) = self.span();
        if x1 < 0.0 || x2 > span_mm {
            return Err(CalcError::invalid_load(
                &self.label,
                format!("[{x1}, {x2}]"),
                format!("Contact span must lie within [0, {span_mm}] mm"),
            ));
        }
        Ok(())
    }

    /// Equivalent point load (magnitude, centroid position) for solvers that
    /// ignore the contact length
    pub fn as_point_equivalent(&self) -> (f64, f64) {
        (self.signed_magnitude_kg(), self.center_mm)
    }

    /// Segment view for the integrator: (x1, x2, intensity kg/mm).
    /// Intensity carries the sign of the patch direction.
    pub fn to_segments(&self) -> (f64, f64, f64) {
        let (x1, x2) = self.span();
        (x1, x2, self.signed_magnitude_kg() / self.width_mm)
    }

    /// Magnitude with the direction applied: Pressing down (+), Supporting up (−)
    pub fn signed_magnitude_kg(&self) -> f64 {
        match self.kind {
            PatchKind::Pressing => self.magnitude_kg,
            PatchKind::Supporting => -self.magnitude_kg,
        }
    }
}

/// A load applied to the beam, point or patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamLoad {
    Point(PointLoad),
    Patch(PatchLoad),
}

impl BeamLoad {
    /// User label of the underlying load
    pub fn label(&self) -> &str {
        match self {
            BeamLoad::Point(p) => &p.label,
            BeamLoad::Patch(p) => &p.label,
        }
    }

    /// Signed magnitude (kg), downward positive
    pub fn signed_magnitude_kg(&self) -> f64 {
        match self {
            BeamLoad::Point(p) => p.magnitude_kg,
            BeamLoad::Patch(p) => p.signed_magnitude_kg(),
        }
    }

    /// Position of the load resultant (patch centroid for patches)
    pub fn resultant_position_mm(&self) -> f64 {
        match self {
            BeamLoad::Point(p) => p.position_mm,
            BeamLoad::Patch(p) => p.center_mm,
        }
    }

    /// Stations this load contributes to the integrator's walk
    pub fn stations(&self) -> Vec<f64> {
        match self {
            BeamLoad::Point(p) => vec![p.position_mm],
            BeamLoad::Patch(p) => {
                let (x1, x2) = p.span();
                vec![x1, x2]
            }
        }
    }

    /// Validate against the owning span length
    pub fn validate(&self, span_mm: f64) -> CalcResult<()> {
        match self {
            BeamLoad::Point(p) => p.validate(span_mm),
            BeamLoad::Patch(p) => p.validate(span_mm),
        }
    }
}

/// Algebraic (sign-aware) sum of all loads in kg, downward positive
pub fn total_load(loads: &[BeamLoad]) -> f64 {
    loads.iter().map(BeamLoad::signed_magnitude_kg).sum()
}
