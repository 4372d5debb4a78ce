//! End-to-end tests for the `luas` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn luas() -> Command {
    let mut cmd = Command::cargo_bin("luas").unwrap();
    cmd.env_remove("LUAS_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn calc_rectangle_with_comma_decimal() {
    luas()
        .args(["calc", "rectangle", "4", "2,5", "--unit", "m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 10 m²"))
        .stdout(predicate::str::contains("Keliling: 13 m"));
}

#[test]
fn calc_accepts_indonesian_name() {
    luas()
        .args(["calc", "jajar-genjang", "6", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 24 cm²"));
}

#[test]
fn calc_copy_prints_clipboard_text() {
    luas()
        .args(["calc", "circle", "2", "--copy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== HASIL PERHITUNGAN LINGKARAN ==="))
        .stdout(predicate::str::contains("Perhitungan: Luas = 3.14 × 2²"));
}

#[test]
fn calc_unit_switch() {
    luas()
        .args(["calc", "square", "1", "--unit", "m", "--to", "cm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sisi: 100 cm"))
        .stdout(predicate::str::contains("Luas: 10,000 cm²"));
}

#[test]
fn calc_precision_flag() {
    luas()
        .args(["calc", "circle", "1", "--precision", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 3.14 cm²"));
}

#[test]
fn calc_json_output() {
    let output = luas()
        .args(["--format", "json", "calc", "square", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["shape"], "square");
    assert_eq!(value["area"], 25.0);
    assert_eq!(value["area_text"], "25 cm²");
}

#[test]
fn calc_rejects_non_positive_value() {
    luas()
        .args(["calc", "square", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Sisi harus lebih besar dari 0"));
}

#[test]
fn calc_accepts_flags_around_values() {
    luas()
        .args(["calc", "rectangle", "--unit", "m", "4", "2,5", "--precision", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 10 m²"))
        .stdout(predicate::str::contains("Keliling: 13 m"));
}

#[test]
fn calc_negative_value_is_a_validation_error() {
    luas()
        .args(["calc", "square", "-5", "--unit", "cm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Sisi harus lebih besar dari 0"));
}

#[test]
fn calc_reports_first_missing_field() {
    luas()
        .args(["calc", "trapezoid", "3", "", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Alas bawah tidak boleh kosong"));
}

#[test]
fn calc_rejects_too_large_value() {
    luas()
        .args(["calc", "kite", "1000001", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nilai terlalu besar (maksimal 1,000,000)"));
}

#[test]
fn calc_wrong_number_of_values() {
    luas()
        .args(["calc", "triangle", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SEGITIGA membutuhkan 2 nilai"));
}

#[test]
fn calc_unknown_shape() {
    luas()
        .args(["calc", "hexagon", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown shape: hexagon"));
}

#[test]
fn calc_error_as_json() {
    let output = luas()
        .args(["--format", "json", "calc", "square", "abc"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["code"], "INVALID_FORMAT");
    assert_eq!(report["message"], "Masukkan angka yang valid");
}

#[test]
fn convert_between_units() {
    luas()
        .args(["convert", "2.5", "m", "cm"])
        .assert()
        .success()
        .stdout("2.5 m = 250 cm\n");
}

#[test]
fn convert_unknown_unit() {
    luas()
        .args(["convert", "1", "m", "yd"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown unit: yd"));
}

#[test]
fn format_number_with_and_without_grouping() {
    luas()
        .args(["format", "1234567.891"])
        .assert()
        .success()
        .stdout("1,234,567.891\n");

    luas()
        .args(["format", "1234567.891", "--no-grouping", "--precision", "1"])
        .assert()
        .success()
        .stdout("1234567.9\n");
}

#[test]
fn shapes_and_units_listings() {
    luas()
        .arg("shapes")
        .assert()
        .success()
        .stdout(predicate::str::contains("belah-ketupat").not())
        .stdout(predicate::str::contains("BELAH KETUPAT"));

    let output = luas().args(["units", "--format", "json"]).output().unwrap();
    let units: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(units.as_array().map(Vec::len), Some(6));
}

#[test]
fn session_calculates_and_switches_units() {
    luas()
        .args(["session", "persegi"])
        .write_stdin("set 1 5\ncalc\nunit mm\ncopy\nquit\nset 1 9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 25 cm²"))
        .stdout(predicate::str::contains("Luas: 2,500 mm²"))
        .stdout(predicate::str::contains("=== HASIL PERHITUNGAN PERSEGI ==="))
        .stdout(predicate::str::contains("Sisi: 9").not());
}

#[test]
fn session_reports_validation_errors() {
    luas()
        .args(["session", "circle"])
        .write_stdin("calc\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Jari-jari tidak boleh kosong"));
}

#[test]
fn map_session_markers_and_location() {
    luas()
        .arg("map")
        .write_stdin(
            "add -7.2930192 112.8079525\nadd 91 0\nlocate -7.25 112.75\nlist\nnearest 1\nclear\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Marker #1 ditambahkan"))
        .stderr(predicate::str::contains("Latitude harus antara -90 dan 90"))
        .stdout(predicate::str::contains("Lokasi: -7.2500, 112.7500"))
        .stdout(predicate::str::contains("[0] My Location"))
        .stdout(predicate::str::contains("1. Marker #1: "))
        .stdout(predicate::str::contains("Semua marker dihapus"));
}

#[test]
fn map_location_denied_exits_with_location_error() {
    luas()
        .arg("map")
        .write_stdin("permission deny\nlocate -7.25 112.75\nquit\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("[E6001] Permission lokasi diperlukan untuk fitur ini"));
}

#[test]
fn map_location_error_cleared_by_later_fix() {
    luas()
        .arg("map")
        .write_stdin("permission deny\nlocate 1 1\npermission grant\nlocate 1 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lokasi: 1.0000, 1.0000"));
}

#[test]
fn map_location_error_as_json() {
    luas()
        .args(["--format", "json", "map"])
        .write_stdin("permission deny\nlocate 1 1\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("LOCATION_PERMISSION_DENIED"));
}

#[test]
fn config_location_timeout_is_applied_to_map() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".luas.toml"),
        "[map]\nlocation_timeout_secs = 5\n",
    )
    .unwrap();

    luas()
        .current_dir(dir.path())
        .arg("map")
        .write_stdin("locate -7.25 112.75\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lokasi: -7.2500, 112.7500"))
        .stdout(predicate::str::contains("[0] My Location"));
}

#[test]
fn config_rejects_zero_location_timeout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".luas.toml"),
        "[map]\nlocation_timeout_secs = 0\n",
    )
    .unwrap();

    luas().current_dir(dir.path()).arg("map").write_stdin("quit\n").assert().code(3);
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".luas.toml"),
        "[display]\nprecision = 2\ndefault_unit = \"m\"\n",
    )
    .unwrap();

    luas()
        .current_dir(dir.path())
        .args(["calc", "circle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luas: 3.14 m²"));
}

#[test]
fn invalid_config_exits_with_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[display]\nprecision = 99\n").unwrap();

    luas()
        .args(["--config", path.to_str().unwrap(), "shapes"])
        .assert()
        .code(3);
}

#[test]
fn missing_config_exits_with_config_error() {
    luas()
        .args(["--config", "/nonexistent/luas.toml", "units"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}
