//! # Ladder-Frame Hand Rule
//!
//! The six-point tabular calculation printed on the older frame sheets:
//! six signed loads along the rail, five adjacent spacings. Shear at each
//! load point is the running sum of the loads; the moment entry for each
//! interval is the interval's starting shear times its length in cm — the
//! entries are per-interval figures, not a running integral, exactly as the
//! sheet tabulates them. For the continuous model use
//! [`crate::calculations::frame`] instead.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::section::CrossSection;
use crate::strength::{evaluate_bending, SafetyCheck, DEFAULT_LOAD_AMPLIFICATION};

/// Load points on the ladder sheet
pub const LOAD_POINTS: usize = 6;

/// Intervals between adjacent load points
pub const INTERVALS: usize = LOAD_POINTS - 1;

fn default_amplification() -> f64 {
    DEFAULT_LOAD_AMPLIFICATION
}

/// Input parameters for the six-point ladder-frame calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderInput {
    /// User label for this member
    pub label: String,

    /// Six signed loads (kg), left to right, downward positive.
    /// Signs are allowed, zero entries are not.
    pub weights_kg: [f64; LOAD_POINTS],

    /// Five spacings between adjacent load points (mm), all positive
    pub spacings_mm: [f64; INTERVALS],

    /// Rail cross-section
    pub section: CrossSection,

    /// Material strengths (kg/cm²)
    pub material: Material,

    /// Load amplification for the safety factors
    #[serde(default = "default_amplification")]
    pub amplification: f64,
}

impl LadderInput {
    /// Validate loads, spacings, section, and material.
    pub fn validate(&self) -> CalcResult<()> {
        for (i, w) in self.weights_kg.iter().enumerate() {
            if *w == 0.0 {
                return Err(CalcError::invalid_load(
                    format!("W{}", i + 1),
                    "0",
                    "Ladder loads are signed but must be nonzero",
                ));
            }
        }
        for (i, d) in self.spacings_mm.iter().enumerate() {
            if *d <= 0.0 {
                return Err(CalcError::invalid_load(
                    format!("spacing{}", i + 1),
                    d.to_string(),
                    "Spacings must be positive",
                ));
            }
        }
        self.section.validate()?;
        self.material.validate()
    }
}

/// Results from the ladder-frame calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderResult {
    /// Running shear at each load point (kg), six entries
    pub shear_kg: Vec<f64>,

    /// Per-interval moment entries (kg·cm), five entries:
    /// interval start shear × interval length
    pub moment_kg_cm: Vec<f64>,

    /// Governing moment max |M| (kg·cm)
    pub m_max_kg_cm: f64,

    /// Section modulus (mm³ / cm³)
    pub z_mm3: f64,
    pub z_cm3: f64,

    /// Bending stress σ = Mmax / Z (kg/cm²)
    pub sigma_kg_cm2: f64,

    /// Safety factors and pass/fail flags
    pub safety: SafetyCheck,
}

impl LadderResult {
    /// All safety checks pass
    pub fn passes(&self) -> bool {
        self.safety.passes()
    }
}

/// Run the six-point ladder sheet.
pub fn calculate(input: &LadderInput) -> CalcResult<LadderResult> {
    input.validate()?;

    let mut shear_kg = Vec::with_capacity(LOAD_POINTS);
    let mut running = 0.0;
    for w in input.weights_kg {
        running += w;
        shear_kg.push(running);
    }

    let moment_kg_cm: Vec<f64> = input
        .spacings_mm
        .iter()
        .enumerate()
        .map(|(i, dist_mm)| shear_kg[i] * dist_mm / 10.0)
        .collect();

    let m_max_kg_cm = moment_kg_cm.iter().map(|m| m.abs()).fold(0.0, f64::max);

    let z_mm3 = input.section.section_modulus_mm3()?;
    let z_cm3 = z_mm3 / 1000.0;
    let sigma_kg_cm2 = m_max_kg_cm / z_cm3;
    let safety = evaluate_bending(sigma_kg_cm2, &input.material, input.amplification)?;

    Ok(LadderResult {
        shear_kg,
        moment_kg_cm,
        m_max_kg_cm,
        z_mm3,
        z_cm3,
        sigma_kg_cm2,
        safety,
    })
}
