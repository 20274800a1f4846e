use std::process::Command;

fn sample_asset() -> String {
    format!("{}/../../data/rede_dh_data.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_json_mode_writes_only_json_to_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_painel"))
        .args(["--json", "--source", &sample_asset()])
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run painel");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    assert_eq!(value["summary"]["total_institutions"], 6);
    assert_eq!(value["summary"]["total_capacity"], 2410);
    assert_eq!(value["rows"].as_array().map(|rows| rows.len()), Some(6));
}

#[test]
fn test_json_mode_applies_filters() {
    let output = Command::new(env!("CARGO_BIN_EXE_painel"))
        .args([
            "--json",
            "--source",
            &sample_asset(),
            "--protection",
            "especial",
            "--district",
            "ALL",
        ])
        .output()
        .expect("failed to run painel");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows
        .iter()
        .all(|row| row["record"]["nivelProtecao"] == "Proteção Social Especial"));
}
