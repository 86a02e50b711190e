//! # Statics Solver
//!
//! Reaction solve for a beam on two supports. Two configurations exist,
//! mirroring the chassis layouts on the forms:
//!
//! - **Ends**: supports at x=0 and x=L (classic simply-supported beam,
//!   e.g. a full-length frame rail)
//! - **Interior**: supports at suspension-hanger centers strictly inside
//!   the span, with every load between them
//!
//! Reactions come from a moment balance about the left support; they are
//! outputs of the solve, never inputs. Each call is a pure function of the
//! span — no state survives between calls.

use serde::{Deserialize, Serialize};

use crate::composite::SectionLayout;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{total_load, BeamLoad};

/// Where the two supports sit on the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SupportPair {
    /// Supports at both beam ends (x = 0 and x = L)
    Ends,

    /// Supports strictly inside the span, position A before position B.
    /// Every load must lie within [x1, x2]; anything hanging outside the
    /// supports is rejected rather than solved as a cantilever.
    Interior { x1_mm: f64, x2_mm: f64 },
}

impl SupportPair {
    /// Support positions (A, B) on a span of the given length
    pub fn positions(&self, span_mm: f64) -> (f64, f64) {
        match *self {
            SupportPair::Ends => (0.0, span_mm),
            SupportPair::Interior { x1_mm, x2_mm } => (x1_mm, x2_mm),
        }
    }

    /// Check support ordering against the span
    pub fn validate(&self, span_mm: f64) -> CalcResult<()> {
        if let SupportPair::Interior { x1_mm, x2_mm } = *self {
            if x1_mm >= x2_mm {
                return Err(CalcError::geometry_violation(format!(
                    "Support order requires X1 < X2 (got X1={x1_mm} mm, X2={x2_mm} mm)"
                )));
            }
            if x1_mm < 0.0 || x2_mm > span_mm {
                return Err(CalcError::geometry_violation(format!(
                    "Supports must lie on the span [0, {span_mm}] mm"
                )));
            }
        }
        Ok(())
    }
}

/// A load-bearing member reduced to a 1-D span: total length, the loads on
/// it, the support pair, and the cross-section layout (uniform or zoned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamSpan {
    /// Total member length L (mm)
    pub length_mm: f64,

    /// Point and patch loads, in caller order
    pub loads: Vec<BeamLoad>,

    /// The two reaction points
    pub supports: SupportPair,

    /// One cross-section for the whole span, or longitudinal zones
    pub layout: SectionLayout,
}

impl BeamSpan {
    /// Validate span length, supports, loads, and section layout.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_mm <= 0.0 {
            return Err(CalcError::geometry_violation(format!(
                "Span length must be positive (got {} mm)",
                self.length_mm
            )));
        }
        self.supports.validate(self.length_mm)?;
        for load in &self.loads {
            load.validate(self.length_mm)?;
        }
        self.layout.validate()?;

        // Interior supports reject loads hanging outside the reaction points
        if let SupportPair::Interior { x1_mm, x2_mm } = self.supports {
            for load in &self.loads {
                for x in load.stations() {
                    if x < x1_mm || x > x2_mm {
                        return Err(CalcError::geometry_violation(format!(
                            "Load '{}' at {x} mm lies outside the interior supports \
                             [{x1_mm}, {x2_mm}] mm",
                            load.label()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Support reactions, positive upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at support A (kg)
    pub r_a_kg: f64,
    /// Reaction at support B (kg)
    pub r_b_kg: f64,
    /// Position of support A (mm)
    pub x_a_mm: f64,
    /// Position of support B (mm)
    pub x_b_mm: f64,
}

/// Solve the two-equation equilibrium system for the support reactions.
///
/// Moment balance about support A: `R_B·(x_B−x_A) = Σ wᵢ·(xᵢ−x_A)`, with
/// patches taken at their centroid, then `R_A = ΣW − R_B`.
///
/// All-zero loads short-circuit to zero reactions; a zero span or broken
/// support/load ordering fails with `GeometryViolation` before any
/// arithmetic.
pub fn solve_reactions(span: &BeamSpan) -> CalcResult<Reactions> {
    span.validate()?;

    let (x_a, x_b) = span.supports.positions(span.length_mm);
    let total = total_load(&span.loads);

    if span.loads.iter().all(|l| l.signed_magnitude_kg() == 0.0) {
        return Ok(Reactions {
            r_a_kg: 0.0,
            r_b_kg: 0.0,
            x_a_mm: x_a,
            x_b_mm: x_b,
        });
    }

    let moment_about_a: f64 = span
        .loads
        .iter()
        .map(|l| l.signed_magnitude_kg() * (l.resultant_position_mm() - x_a))
        .sum();

    let r_b = moment_about_a / (x_b - x_a);
    let r_a = total - r_b;

    Ok(Reactions {
        r_a_kg: r_a,
        r_b_kg: r_b,
        x_a_mm: x_a,
        x_b_mm: x_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{PatchLoad, PointLoad};
    use crate::section::CrossSection;

    fn test_section() -> CrossSection {
        CrossSection::SolidRect {
            width_mm: 50.0,
            height_mm: 100.0,
        }
    }

    fn end_supported(length_mm: f64, loads: Vec<BeamLoad>) -> BeamSpan {
        BeamSpan {
            length_mm,
            loads,
            supports: SupportPair::Ends,
            layout: SectionLayout::uniform(test_section()),
        }
    }

    #[test]
    fn test_symmetric_point_load() {
        // 100 kg at midspan of 1000 mm: R_A = R_B = 50 kg
        let span = end_supported(
            1000.0,
            vec![BeamLoad::Point(PointLoad::new("W", 100.0, 500.0))],
        );
        let r = solve_reactions(&span).unwrap();
        assert!((r.r_a_kg - 50.0).abs() < 1e-9);
        assert!((r.r_b_kg - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetric_point_load() {
        // 1000 kg at 300 mm on 1000 mm: R_B = 300, R_A = 700
        let span = end_supported(
            1000.0,
            vec![BeamLoad::Point(PointLoad::new("W", 1000.0, 300.0))],
        );
        let r = solve_reactions(&span).unwrap();
        assert!((r.r_a_kg - 700.0).abs() < 1e-9);
        assert!((r.r_b_kg - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_reactions_balance_total_load() {
        let span = end_supported(
            2000.0,
            vec![
                BeamLoad::Point(PointLoad::new("W1", 120.0, 250.0)),
                BeamLoad::Point(PointLoad::new("W2", 480.0, 900.0)),
                BeamLoad::Patch(PatchLoad::pressing("seat", 330.0, 1500.0, 200.0)),
            ],
        );
        let r = solve_reactions(&span).unwrap();
        assert!((r.r_a_kg + r.r_b_kg - 930.0).abs() < 1e-9);
    }

    #[test]
    fn test_patch_treated_at_centroid() {
        // A patch and its point equivalent give identical reactions
        let patch_span = end_supported(
            1000.0,
            vec![BeamLoad::Patch(PatchLoad::pressing("seat", 200.0, 400.0, 100.0))],
        );
        let point_span = end_supported(
            1000.0,
            vec![BeamLoad::Point(PointLoad::new("seat", 200.0, 400.0))],
        );
        let rp = solve_reactions(&patch_span).unwrap();
        let rq = solve_reactions(&point_span).unwrap();
        assert!((rp.r_a_kg - rq.r_a_kg).abs() < 1e-9);
        assert!((rp.r_b_kg - rq.r_b_kg).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_loads_short_circuit() {
        let span = end_supported(
            1000.0,
            vec![BeamLoad::Point(PointLoad::new("W", 0.0, 500.0))],
        );
        let r = solve_reactions(&span).unwrap();
        assert_eq!(r.r_a_kg, 0.0);
        assert_eq!(r.r_b_kg, 0.0);
    }

    #[test]
    fn test_zero_span_rejected() {
        let span = end_supported(0.0, vec![]);
        let err = solve_reactions(&span).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_VIOLATION");
    }

    #[test]
    fn test_interior_supports_solve() {
        // Loads at 200 and 800, hangers at 100 and 900 on a 1000 mm rail.
        // Moment about X1: R2*800 = 400*100 + 400*700 -> R2 = 400, R1 = 400
        let span = BeamSpan {
            length_mm: 1000.0,
            loads: vec![
                BeamLoad::Point(PointLoad::new("P1", 400.0, 200.0)),
                BeamLoad::Point(PointLoad::new("P2", 400.0, 800.0)),
            ],
            supports: SupportPair::Interior {
                x1_mm: 100.0,
                x2_mm: 900.0,
            },
            layout: SectionLayout::uniform(test_section()),
        };
        let r = solve_reactions(&span).unwrap();
        assert!((r.r_a_kg - 400.0).abs() < 1e-9);
        assert!((r.r_b_kg - 400.0).abs() < 1e-9);
        assert_eq!((r.x_a_mm, r.x_b_mm), (100.0, 900.0));
    }

    #[test]
    fn test_interior_asymmetric() {
        // R2*(X2-X1) = sum w*(x-X1): R2*600 = 500*(450-150) -> R2 = 250
        let span = BeamSpan {
            length_mm: 1000.0,
            loads: vec![BeamLoad::Point(PointLoad::new("P", 500.0, 450.0))],
            supports: SupportPair::Interior {
                x1_mm: 150.0,
                x2_mm: 750.0,
            },
            layout: SectionLayout::uniform(test_section()),
        };
        let r = solve_reactions(&span).unwrap();
        assert!((r.r_b_kg - 250.0).abs() < 1e-9);
        assert!((r.r_a_kg - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_outside_interior_supports_rejected() {
        let span = BeamSpan {
            length_mm: 1000.0,
            loads: vec![BeamLoad::Point(PointLoad::new("P", 400.0, 50.0))],
            supports: SupportPair::Interior {
                x1_mm: 100.0,
                x2_mm: 900.0,
            },
            layout: SectionLayout::uniform(test_section()),
        };
        let err = solve_reactions(&span).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_VIOLATION");
    }

    #[test]
    fn test_overlapping_supports_rejected() {
        let span = BeamSpan {
            length_mm: 1000.0,
            loads: vec![BeamLoad::Point(PointLoad::new("P", 400.0, 500.0))],
            supports: SupportPair::Interior {
                x1_mm: 600.0,
                x2_mm: 600.0,
            },
            layout: SectionLayout::uniform(test_section()),
        };
        assert!(solve_reactions(&span).is_err());
    }
}
