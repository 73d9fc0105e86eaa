//! End-to-end pipeline scenarios.

use axiom_engine::{stages, Engine, EngineSettings, Precision};

use crate::common::quiet_engine;

#[test]
fn original_flux_reaches_unit_zero() {
    let engine = quiet_engine();
    let result = engine.run(24714.9130).unwrap();

    let constants = engine.constants();
    let trace = result.trace();
    assert_eq!(trace.vectorized, 24714.9130 * constants.delta_zero());
    assert!(trace.symmetric > 0.0);
    assert!(trace.asymmetric > 0.0);
    assert_eq!(result.nucleus(), 0);
    assert!(result.zero_unit());
    assert!(result.verdict().is_coherent());
    assert_eq!(result.verdict().integrity_hash(), "11.666666666667");
}

#[test]
fn zero_flux_stays_on_the_delta_floor() {
    let engine = quiet_engine();
    let result = engine.run(0.0).unwrap();

    let trace = result.trace();
    assert_eq!(trace.vectorized, 0.0);
    assert_eq!(trace.symmetric, 0.0);
    assert_eq!(trace.asymmetric, 0.0);
    // With both paths zero, the corrected value is a function of delta-zero
    // and the trig readings at zero alone.
    assert!(trace.corrected.is_finite());
    assert_eq!(result.nucleus(), 0);
    assert!(result.verdict().is_coherent());
}

#[test]
fn noisy_flux_behaves_like_the_reference_sample() {
    let engine = quiet_engine();
    let result = engine.run(12345.6789).unwrap();
    assert_eq!(result.nucleus(), 0);
    assert!(result.zero_unit());
    assert_eq!(result.verdict().integrity_hash(), "11.666666666667");
}

#[test]
fn collapse_is_total_over_a_wide_input_range() {
    let engine = quiet_engine();
    for flux in [
        -9.9e15, -24714.913, -1.0, -2.2e-16, 0.0, 5e-324, 0.5, 7.0, 333.0, 1e12,
    ] {
        let result = engine.run(flux).unwrap();
        assert_eq!(result.nucleus(), 0, "nucleus for {flux}");
        assert!(result.zero_unit(), "zero unit for {flux}");
    }
}

#[test]
fn two_engines_agree_on_every_stage_value() {
    let first = quiet_engine().run(24714.9130).unwrap();
    let second = quiet_engine().run(24714.9130).unwrap();
    assert_eq!(first.trace(), second.trace());
    assert_eq!(first.nucleus(), second.nucleus());
    assert_eq!(first.verdict(), second.verdict());
}

#[test]
fn trace_matches_the_stage_functions() {
    let engine = quiet_engine();
    let constants = engine.constants();
    let flux = 12345.6789;
    let result = engine.run(flux).unwrap();
    let trace = result.trace();

    let vectorized = stages::stabilize(constants, flux);
    assert_eq!(trace.vectorized, vectorized);

    let paths = stages::filter_dual(constants, vectorized);
    assert_eq!(trace.symmetric, paths.symmetric);
    assert_eq!(trace.asymmetric, paths.asymmetric);

    let mean = (paths.symmetric + paths.asymmetric) / 2.0;
    let correction = stages::correct(constants, mean, stages::detect_geometry(constants, mean));
    assert_eq!(trace.corrected, correction.aligned);
}

#[test]
fn precision_scales_the_correction_but_not_the_verdict() {
    let coarse = Engine::new(EngineSettings::new(Precision::new(2).unwrap(), false));
    let fine = Engine::new(EngineSettings::new(Precision::new(15).unwrap(), false));

    // The correction force is divided by 10^precision, so the pre-alignment
    // intermediate differs while the aligned floor usually does not.
    let mean = 7.69;
    let coarse_correction = stages::correct(
        coarse.constants(),
        mean,
        stages::detect_geometry(coarse.constants(), mean),
    );
    let fine_correction = stages::correct(
        fine.constants(),
        mean,
        stages::detect_geometry(fine.constants(), mean),
    );
    assert_eq!(coarse_correction.force, fine_correction.force);
    assert_ne!(coarse_correction.corrected, fine_correction.corrected);

    let coarse_run = coarse.run(24714.9130).unwrap();
    let fine_run = fine.run(24714.9130).unwrap();
    assert_eq!(coarse_run.nucleus(), 0);
    assert_eq!(fine_run.nucleus(), 0);
    assert_eq!(coarse_run.verdict(), fine_run.verdict());
}
