//! The five pipeline stages as pure functions over a [`ConstantSet`].
//!
//! Stages never log and never touch the clock; the orchestrator in
//! [`crate::Engine`] emits diagnostics around each call. Data flows strictly
//! forward: vectorization, dual filtering, geometric correction, fixed-point
//! collapse, verdict classification.

use axiom_types::VerdictRecord;

use crate::constants::ConstantSet;

/// Stage 2 output: the two parallel scalar paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPaths {
    pub symmetric: f64,
    pub asymmetric: f64,
}

/// Stage 3 trigonometric readings, each in `[-1, 1]` for finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryReading {
    pub triangle: f64,
    pub circle: f64,
}

/// Stage 4 record: the fixed-point value, the literal attenuation chain,
/// and the resulting nucleus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapseTrace {
    /// Fixed-point conversion of the aligned value.
    pub fixed: i64,
    /// The four attenuation step values, in order.
    pub steps: [f64; 4],
    /// Truncation of the final step.
    pub nucleus: i64,
}

/// Stage 4 result. A non-finite input is an explicit anomaly, not an
/// exception: it deterministically yields a zero nucleus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollapseOutcome {
    Settled(CollapseTrace),
    Anomaly { value: f64 },
}

impl CollapseOutcome {
    #[must_use]
    pub const fn nucleus(&self) -> i64 {
        match self {
            CollapseOutcome::Settled(trace) => trace.nucleus,
            CollapseOutcome::Anomaly { .. } => 0,
        }
    }
}

/// Stage 3 output with its intermediates, so the orchestrator can report
/// the correction force and pre-alignment value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// `persistence_coefficient · (triangle + circle) + delta_zero`.
    pub force: f64,
    /// The vector after subtracting the scaled correction force.
    pub corrected: f64,
    /// The corrected value reduced against the straight-line target.
    pub aligned: f64,
}

/// Stage 1: scale the raw flux by the delta-zero stabilizer.
///
/// Finite input gives finite output; NaN and infinities propagate under
/// IEEE-754 rules.
#[must_use]
pub fn stabilize(constants: &ConstantSet, flux: f64) -> f64 {
    flux * constants.delta_zero()
}

/// Stage 2: produce the symmetric and asymmetric paths from one vectorized
/// value. Both roots are taken of magnitudes, so both paths are non-negative
/// for every finite input, zero and negatives included.
#[must_use]
pub fn filter_dual(constants: &ConstantSet, vector: f64) -> DualPaths {
    DualPaths {
        symmetric: (vector * constants.phi()).abs().sqrt() * constants.symmetry_norm(),
        asymmetric: vector.abs().cbrt() * constants.asymmetry_norm(),
    }
}

/// Stage 3a: read the decision (triangle) and loop (circle) errors.
#[must_use]
pub fn detect_geometry(constants: &ConstantSet, vector: f64) -> GeometryReading {
    GeometryReading {
        triangle: (vector / constants.decision_error()).sin(),
        circle: (vector / constants.loop_error()).cos(),
    }
}

/// Stage 3b: apply the persistence correction, then reduce against the
/// straight-line target.
///
/// The reduction uses `rem_euclid` so the remainder follows the (positive)
/// divisor's sign, which keeps `aligned - delta_zero` in `[corrected - 7,
/// corrected]` regardless of the corrected value's sign.
#[must_use]
pub fn correct(constants: &ConstantSet, vector: f64, reading: GeometryReading) -> Correction {
    let force = constants.persistence_coefficient() * (reading.triangle + reading.circle)
        + constants.delta_zero();
    let corrected = vector - force / constants.precision_multiplier();
    let aligned =
        corrected - corrected.rem_euclid(constants.target_straight()) + constants.delta_zero();
    Correction {
        force,
        corrected,
        aligned,
    }
}

/// One attenuation step: division by positive infinity, zero short-circuited.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Attenuation {
    Damped(f64),
    NonFinite,
}

fn attenuate(value: f64) -> Attenuation {
    if !value.is_finite() {
        return Attenuation::NonFinite;
    }
    if value == 0.0 {
        Attenuation::Damped(0.0)
    } else {
        Attenuation::Damped(value / f64::INFINITY)
    }
}

/// Stage 4: fixed-point conversion followed by the four-step attenuation
/// chain.
///
/// Invariant: every finite input collapses to a zero nucleus, because the
/// first division by infinity already lands on `0.0` and the remaining
/// steps short-circuit. The four steps are performed (and recorded)
/// literally all the same, so the intermediate values stay observable.
/// Non-finite values, at entry or mid-chain, fail closed to zero via
/// [`CollapseOutcome::Anomaly`].
#[must_use]
pub fn collapse(constants: &ConstantSet, value: f64) -> CollapseOutcome {
    if !value.is_finite() {
        return CollapseOutcome::Anomaly { value };
    }

    // Truncation toward zero; saturates at the i64 range ends.
    let fixed = (value * constants.precision_multiplier()).trunc() as i64;

    let mut steps = [0.0; 4];
    let mut current = fixed as f64;
    for slot in &mut steps {
        match attenuate(current) {
            Attenuation::Damped(next) => {
                *slot = next;
                current = next;
            }
            Attenuation::NonFinite => {
                return CollapseOutcome::Anomaly { value: current };
            }
        }
    }

    CollapseOutcome::Settled(CollapseTrace {
        fixed,
        steps,
        nucleus: steps[3].trunc() as i64,
    })
}

/// Stage 5: classify the collapsed nucleus.
///
/// The coherent integrity hash is a function of constants only, so it is the
/// same 12-decimal string for every successful run.
#[must_use]
pub fn classify(constants: &ConstantSet, nucleus: i64) -> VerdictRecord {
    if nucleus == 0 {
        let v1 = (constants.target_straight() * 3.0).rem_euclid(constants.verdict_modulus());
        let v2 = (constants.target_straight() / 3.0).rem_euclid(constants.verdict_modulus());
        let verdict = (v1 + v2) / 2.0;
        VerdictRecord::coherent(format!("{verdict:.12}"))
    } else {
        VerdictRecord::decoherent()
    }
}
