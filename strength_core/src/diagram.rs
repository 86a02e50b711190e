//! # Shear/Moment Integrator
//!
//! Walks the span left to right through the sorted set of stations (beam
//! ends, point-load positions, patch boundaries, support positions),
//! maintaining a running shear value and integrating it into the bending
//! moment segment by segment.
//!
//! ## Sign Convention
//! - Reactions jump the shear up, downward loads jump it down
//! - Patches ramp the shear linearly over their contact length
//! - Moment is the running integral of shear; within a segment under
//!   uniform patch intensity q the closed form is
//!   `ΔM = V_start·Δx − q·Δx²/2`
//!
//! For an end-supported beam the moment must close to zero at x = L; the
//! walk verifies this on the unreduced integral as a debug assertion.
//!
//! ## Support-stiffening correction
//!
//! A `Supporting` patch with a recorded contact area spreads its reaction
//! through a finite seat (e.g. a leaf-spring hanger), which relieves the
//! local bending somewhat. Moment increments inside such a patch are scaled
//! by `max(0.1, 1 − α·(area/500))`. This is an empirical approximation
//! carried over from the paperwork, not a structural theorem; α is
//! configurable and the area term keeps its 10 mm² granularity.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::loads::{BeamLoad, PatchKind};
use crate::statics::{BeamSpan, Reactions};

/// Default α for the support-area moment reduction
pub const DEFAULT_SUPPORT_AREA_ALPHA: f64 = 0.05;

/// Tuning knobs for the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegratorOptions {
    /// Coefficient α in the supporting-patch moment reduction
    /// `max(0.1, 1 − α·(area_mm²/500))`
    pub support_area_alpha: f64,
}

impl Default for IntegratorOptions {
    fn default() -> Self {
        IntegratorOptions {
            support_area_alpha: DEFAULT_SUPPORT_AREA_ALPHA,
        }
    }
}

/// Moment-reduction factor for a supporting patch of the given contact area.
/// Floored at 0.1 so a huge seat never erases the moment entirely.
pub fn patch_moment_factor(contact_area_mm2: f64, alpha: f64) -> f64 {
    (1.0 - alpha * (contact_area_mm2 / 500.0)).max(0.1)
}

/// Piecewise shear and moment fields over a span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearMomentDiagram {
    /// (x mm, V kg) at each station, V taken just right of the station
    pub shear_kg: Vec<(f64, f64)>,

    /// (x mm, M kg·mm) at each station; M is continuous
    pub moment_kg_mm: Vec<(f64, f64)>,

    /// max |M| over all samples (kg·mm)
    pub m_max_kg_mm: f64,

    /// Position of the governing moment (mm)
    pub m_max_position_mm: f64,
}

impl ShearMomentDiagram {
    /// Governing moment in the kg·cm the stress formulas use
    pub fn m_max_kg_cm(&self) -> f64 {
        self.m_max_kg_mm / 10.0
    }
}

/// Integrate the shear and moment fields for a solved span.
///
/// `reactions` must come from [`crate::statics::solve_reactions`] on the
/// same span; the walk treats the supports as upward jumps at their
/// positions and every load per its sign convention.
pub fn integrate(
    span: &BeamSpan,
    reactions: &Reactions,
    options: &IntegratorOptions,
) -> CalcResult<ShearMomentDiagram> {
    span.validate()?;

    let eps = span.length_mm * 1e-9;

    // Stations: ends, supports, point positions, patch boundaries
    let mut stations: Vec<f64> = vec![0.0, span.length_mm];
    stations.push(reactions.x_a_mm);
    stations.push(reactions.x_b_mm);
    for load in &span.loads {
        stations.extend(load.stations());
    }
    stations.sort_by(|a, b| a.partial_cmp(b).unwrap());
    stations.dedup_by(|a, b| (*a - *b).abs() < eps);

    let mut shear = Vec::with_capacity(stations.len());
    let mut moment = Vec::with_capacity(stations.len());

    let mut v = 0.0;
    let mut m: f64 = 0.0;
    // Unreduced integral, used only for the equilibrium closure check
    let mut m_raw = 0.0;
    let mut m_max = 0.0f64;
    let mut m_max_pos = 0.0;

    for (i, &x) in stations.iter().enumerate() {
        // Jumps at this station: reactions up, point loads down
        if (x - reactions.x_a_mm).abs() < eps {
            v += reactions.r_a_kg;
        }
        if (x - reactions.x_b_mm).abs() < eps {
            v += reactions.r_b_kg;
        }
        for load in &span.loads {
            if let BeamLoad::Point(p) = load {
                if (p.position_mm - x).abs() < eps {
                    v -= p.magnitude_kg;
                }
            }
        }

        shear.push((x, v));
        moment.push((x, m));
        if m.abs() > m_max {
            m_max = m.abs();
            m_max_pos = x;
        }

        // Integrate across the segment to the next station
        if let Some(&x_next) = stations.get(i + 1) {
            let dx = x_next - x;
            let mid = (x + x_next) / 2.0;

            // Net patch intensity over this segment (constant: every patch
            // boundary is a station), plus the reduction factor of any
            // supporting seat covering it
            let mut q_net = 0.0;
            let mut factor = 1.0;
            for load in &span.loads {
                if let BeamLoad::Patch(p) = load {
                    let (x1, x2, q) = p.to_segments();
                    if x1 <= mid && mid <= x2 {
                        q_net += q;
                        if p.kind == PatchKind::Supporting && p.contact_area_mm2 > 0.0 {
                            factor *= patch_moment_factor(
                                p.contact_area_mm2,
                                options.support_area_alpha,
                            );
                        }
                    }
                }
            }

            let dm = v * dx - q_net * dx * dx / 2.0;
            m += dm * factor;
            m_raw += dm;
            v -= q_net * dx;
        }
    }

    // Equilibrium closure: the unreduced moment integral returns to zero at
    // the far end, and no shear survives past the last reaction.
    debug_assert!(
        m_raw.abs() <= 1e-6 * m_max.max(1.0),
        "moment failed to close at x=L: {m_raw}"
    );
    debug_assert!(
        v.abs() <= 1e-6 * total_abs_shear(&shear).max(1.0),
        "shear failed to close at x=L: {v}"
    );

    Ok(ShearMomentDiagram {
        shear_kg: shear,
        moment_kg_mm: moment,
        m_max_kg_mm: m_max,
        m_max_position_mm: m_max_pos,
    })
}

fn total_abs_shear(shear: &[(f64, f64)]) -> f64 {
    shear.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max)
}
