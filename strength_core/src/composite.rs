//! # Composite Section Layout
//!
//! A frame rail rarely carries one cross-section end to end: reinforced
//! zones near the hangers, a lighter profile at the overhangs, doubled
//! rails under the container seats. This module partitions the span into
//! longitudinal zones, each with its own cross-section, count of parallel
//! longitudinal members, and count of cross-members, and evaluates bending
//! stress zone by zone against the moment diagram.
//!
//! Zones are validated individually (start < end, at least one longitudinal
//! member) but the list is deliberately NOT required to tile the span:
//! gaps contribute no samples and overlaps evaluate in every zone that
//! covers them, matching the permissive behavior of the paperwork this
//! engine reproduces.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::section::CrossSection;

/// Effective-stiffness multiplier for cross-members tying parallel rails
/// together. Each cross-member beyond the first adds 15%.
///
/// Empirical fit with no cited derivation; preserved verbatim for
/// behavioral compatibility with the original paperwork.
pub fn cross_member_factor(cross_member_count: u32) -> f64 {
    1.0 + 0.15 * cross_member_count.saturating_sub(1) as f64
}

/// One longitudinal zone of a composite beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionZone {
    /// Zone start (mm from beam origin)
    pub start_mm: f64,

    /// Zone end (mm), must exceed start
    pub end_mm: f64,

    /// Cross-section of one longitudinal member in this zone
    pub section: CrossSection,

    /// Parallel longitudinal members sharing the load (≥ 1)
    pub longitudinal_count: u32,

    /// Cross-members tying the longitudinal members together
    pub cross_member_count: u32,
}

impl SectionZone {
    pub fn validate(&self) -> CalcResult<()> {
        if self.start_mm >= self.end_mm {
            return Err(CalcError::invalid_geometry(
                "start_mm",
                format!("[{}, {}]", self.start_mm, self.end_mm),
                "Zone start must be before zone end",
            ));
        }
        if self.longitudinal_count == 0 {
            return Err(CalcError::invalid_geometry(
                "longitudinal_count",
                "0",
                "A zone needs at least one longitudinal member",
            ));
        }
        self.section.validate()
    }

    /// Effective section modulus of the whole zone (mm³):
    /// `Z_eff = Z_one · n_longitudinal · cross_member_factor`
    pub fn effective_modulus_mm3(&self) -> CalcResult<f64> {
        self.validate()?;
        let z_one = self.section.section_modulus_mm3()?;
        Ok(z_one * self.longitudinal_count as f64 * cross_member_factor(self.cross_member_count))
    }

    fn contains(&self, x_mm: f64) -> bool {
        (self.start_mm..=self.end_mm).contains(&x_mm)
    }
}

/// Cross-section layout of a span: one section throughout, or zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionLayout {
    /// Single cross-section over the full length
    Uniform { section: CrossSection },

    /// Longitudinal zones, each with its own section and member counts
    Zoned { zones: Vec<SectionZone> },
}

impl SectionLayout {
    /// Single-section layout
    pub fn uniform(section: CrossSection) -> Self {
        SectionLayout::Uniform { section }
    }

    /// Zoned layout
    pub fn zoned(zones: Vec<SectionZone>) -> Self {
        SectionLayout::Zoned { zones }
    }

    pub fn validate(&self) -> CalcResult<()> {
        match self {
            SectionLayout::Uniform { section } => section.validate(),
            SectionLayout::Zoned { zones } => {
                if zones.is_empty() {
                    return Err(CalcError::invalid_geometry(
                        "zones",
                        "[]",
                        "A zoned layout needs at least one zone",
                    ));
                }
                for zone in zones {
                    zone.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// The governing bending stress over a span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoverningStress {
    /// Peak bending stress (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// |M| at the governing sample (kg·cm)
    pub moment_kg_cm: f64,

    /// Effective section modulus where the stress governs (mm³)
    pub z_eff_mm3: f64,

    /// Index of the governing zone; `None` for a uniform layout
    pub zone_index: Option<usize>,
}

/// Evaluate `σ = |M(x)| / Z_eff` over the moment samples and report the
/// governing (maximum) stress.
///
/// `moment_samples` are `(x mm, M kg·mm)` pairs from the integrator. For a
/// zoned layout each sample is checked against every zone that covers its
/// position; the beam's governing stress is the maximum over all zones.
pub fn governing_stress(
    layout: &SectionLayout,
    moment_samples: &[(f64, f64)],
) -> CalcResult<GoverningStress> {
    layout.validate()?;

    match layout {
        SectionLayout::Uniform { section } => {
            let z_mm3 = section.section_modulus_mm3()?;
            let m_peak_kg_mm = moment_samples
                .iter()
                .map(|(_, m)| m.abs())
                .fold(0.0, f64::max);
            Ok(GoverningStress {
                sigma_kg_cm2: stress_kg_cm2(m_peak_kg_mm, z_mm3)?,
                moment_kg_cm: m_peak_kg_mm / 10.0,
                z_eff_mm3: z_mm3,
                zone_index: None,
            })
        }
        SectionLayout::Zoned { zones } => {
            let mut governing: Option<GoverningStress> = None;
            for (index, zone) in zones.iter().enumerate() {
                let z_eff = zone.effective_modulus_mm3()?;
                let m_peak_kg_mm = moment_samples
                    .iter()
                    .filter(|(x, _)| zone.contains(*x))
                    .map(|(_, m)| m.abs())
                    .fold(0.0, f64::max);
                let candidate = GoverningStress {
                    sigma_kg_cm2: stress_kg_cm2(m_peak_kg_mm, z_eff)?,
                    moment_kg_cm: m_peak_kg_mm / 10.0,
                    z_eff_mm3: z_eff,
                    zone_index: Some(index),
                };
                let beats = governing
                    .map(|g| candidate.sigma_kg_cm2 > g.sigma_kg_cm2)
                    .unwrap_or(true);
                if beats {
                    governing = Some(candidate);
                }
            }
            governing.ok_or_else(|| {
                CalcError::invalid_geometry("zones", "[]", "A zoned layout needs at least one zone")
            })
        }
    }
}

/// σ = M / Z with the mm→cm conversions applied:
/// M [kg·mm] / 10 = kg·cm, Z [mm³] / 1000 = cm³
fn stress_kg_cm2(moment_kg_mm: f64, z_mm3: f64) -> CalcResult<f64> {
    if z_mm3 <= 0.0 {
        return Err(CalcError::geometry_violation(
            "Section modulus is zero; the member cannot carry bending",
        ));
    }
    Ok((moment_kg_mm / 10.0) / (z_mm3 / 1000.0))
}
