// tests/suite_tests.rs
use pkcheck_harness::{
    load_suite, parse_suite, render_summary, CheckError, Harness, HarnessConfig, Runner, TamperOffset,
};
use pkcheck_tests::fixtures::{self, RSA_VECTORS};
use pkcheck_tests::{init_tracing, REGISTRY};
use serde_json::Value;

fn edited_suite(edit: impl FnOnce(&mut Value)) -> String {
    let mut json: Value = serde_json::from_str(RSA_VECTORS).expect("rsa.json is valid JSON");
    edit(&mut json);
    json.to_string()
}

#[test]
fn test_rsa_suite_from_file() {
    init_tracing();
    let suite = load_suite(fixtures::vectors_dir().join("rsa.json")).expect("Failed to load rsa.json");
    let resolved = suite.resolve(&REGISTRY).expect("Failed to resolve rsa.json");
    assert_eq!(resolved.encryption.len(), 2);
    assert_eq!(resolved.signature.len(), 3);

    let harness = Harness::default();
    let summary = Runner::new(&harness).run_suite(&resolved);

    println!("{}", render_summary(&summary));
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.passed(), 5);
    summary.into_result().expect("RSA suite failed");
}

#[test]
fn test_suite_collects_failures_and_errors() {
    init_tracing();
    let json = edited_suite(|suite| {
        // Wrong plaintext for the 2048-bit encryption vector
        suite["encryption"][1]["plaintext"] = Value::from("00");
        // Unloadable public key for the first signature vector
        suite["signature"][0]["publicKey"] = Value::from("0001");
    });
    let suite = parse_suite(&json).unwrap();
    let resolved = suite.resolve(&REGISTRY).unwrap();

    let harness = Harness::default();
    let summary = Runner::new(&harness).run_suite(&resolved);

    assert_eq!(summary.total(), 5);
    assert_eq!(summary.passed(), 3);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].vector, "rsa1024-sha256");

    let text = render_summary(&summary);
    assert!(text.contains("rsa2048-message (RSA)"));
    assert!(text.contains("suite_tests.rs"));
    assert!(text.contains("rsa1024-sha256: public context initialization failed"));

    let err = summary.into_result().unwrap_err();
    assert_eq!(err.to_string(), "suite failed: 1 vector(s) failed, 1 could not run");
}

#[test]
fn test_unknown_algorithm_is_rejected_at_resolve() {
    let json = edited_suite(|suite| {
        suite["signature"][2]["algorithm"] = Value::from("DSA");
    });
    let err = parse_suite(&json).unwrap().resolve(&REGISTRY).unwrap_err();
    assert!(matches!(err, CheckError::UnknownAlgorithm { kind: "public-key", ref name } if name == "DSA"));
}

#[test]
fn test_algorithm_names_are_case_insensitive() {
    let json = edited_suite(|suite| {
        suite["algorithm"] = Value::from("rsa");
        suite["signature"][0]["digest"] = Value::from("sha-256");
    });
    let resolved = parse_suite(&json).unwrap().resolve(&REGISTRY).unwrap();
    assert_eq!(resolved.signature[0].digest.name(), "SHA-256");
}

#[test]
fn test_config_from_toml_drives_the_run() {
    init_tracing();
    let config = HarnessConfig::from_toml_str(
        r#"
        fail_fast = true
        tamper_mask = 0x01
        tamper_offset = { index = 0 }
        "#,
    )
    .expect("valid config");
    assert!(config.fail_fast);
    assert_eq!(config.tamper_mask, 0x01);
    assert_eq!(config.tamper_offset, TamperOffset::Index(0));

    let resolved = fixtures::RSA_SUITE.resolve(&REGISTRY).unwrap();
    let harness = Harness::new(config).unwrap();
    let summary = Runner::new(&harness).run_suite(&resolved);
    assert!(summary.is_success(), "{}", render_summary(&summary));
}

#[test]
fn test_bad_config_is_rejected() {
    assert!(matches!(
        HarnessConfig::from_toml_str("tamper_mask = 0"),
        Err(CheckError::Config(_))
    ));
    assert!(matches!(
        HarnessConfig::from_toml_str("fail_fast = \"yes\""),
        Err(CheckError::Toml(_))
    ));
}
