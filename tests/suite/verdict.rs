//! Verdict seal properties: the coherent hash is a constant of the system,
//! never a function of the input.

use axiom_types::VerdictRecord;

use crate::common::quiet_engine;

/// The 12-decimal rendering of `((7·3 mod 333) + (7/3 mod 333)) / 2`.
const COHERENT_HASH: &str = "11.666666666667";

#[test]
fn integrity_hash_is_input_independent() {
    let engine = quiet_engine();
    for flux in [-1e6, -0.25, 0.0, 1.0, 24714.913, 12345.6789, 8.8e11] {
        let result = engine.run(flux).unwrap();
        assert_eq!(
            result.verdict().integrity_hash(),
            COHERENT_HASH,
            "hash for {flux}"
        );
    }
}

#[test]
fn pinned_hash_matches_the_formula() {
    let engine = quiet_engine();
    let constants = engine.constants();
    let v1 = (constants.target_straight() * 3.0).rem_euclid(constants.verdict_modulus());
    let v2 = (constants.target_straight() / 3.0).rem_euclid(constants.verdict_modulus());
    assert_eq!(format!("{:.12}", (v1 + v2) / 2.0), COHERENT_HASH);
}

#[test]
fn verdict_carries_the_fixed_code_and_messages() {
    let engine = quiet_engine();
    let verdict = engine.run(24714.913).unwrap().verdict().clone();
    assert_eq!(VerdictRecord::VERDICT_CODE, "O333");
    assert_eq!(verdict.status(), "ABSOLUTE NATURALNESS");
    assert_eq!(
        verdict.message(),
        "Unit Zero confirmed. System in Absolute Coherence."
    );
}

#[test]
fn run_result_serializes_the_cli_contract() {
    let engine = quiet_engine();
    let result = engine.run(24714.913).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["nucleus"], 0);
    assert_eq!(json["zero_unit"], true);
    assert_eq!(json["input"], 24714.913);
    assert_eq!(json["verdict"]["verdict_code"], "O333");
    assert_eq!(json["verdict"]["integrity_hash"], COHERENT_HASH);
    assert_eq!(json["verdict"]["zero_point"], true);
    assert!(json["stages"]["vectorized"].is_number());
    assert!(json["session_id"].is_string());
}
