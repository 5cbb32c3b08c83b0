//! CLI tests for `rural-delivery`.
//!
//! Spawns the binary and verifies stdout payloads and exit codes.

use std::io::Write;
use std::process::{Command, Stdio};

use rural_delivery::core::presets::Preset;
use rural_delivery::exit_codes;
use rural_delivery::test_support::{Workdir, cart, group, metafield_input, option};
use serde_json::{Value, json};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rural-delivery"))
}

#[test]
fn run_prints_function_result_for_input_file() {
    let workdir = Workdir::new().expect("workdir");
    let input = metafield_input(
        json!({ "enabled": true, "postcodes": ["9010"], "ruralMethodsToKeep": ["rural-courier"] }),
        cart(vec![group(
            "NZ",
            "9010",
            vec![
                option("rural-courier", "Rural Courier"),
                option("standard", "Standard"),
            ],
        )]),
    );
    let path = workdir.write_input("input.json", &input).expect("write input");

    let output = binary()
        .arg("run")
        .arg("--input")
        .arg(&path)
        .output()
        .expect("rural-delivery run");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let result: Value = serde_json::from_slice(&output.stdout).expect("result json");
    assert_eq!(
        result,
        json!({ "operations": [
            { "deliveryOptionHide": { "deliveryOptionHandle": "standard" } }
        ] })
    );
}

#[test]
fn run_reads_stdin_and_tolerates_garbage() {
    let mut child = binary()
        .arg("run")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn rural-delivery run");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"{ not json")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let result: Value = serde_json::from_slice(&output.stdout).expect("result json");
    assert_eq!(result, json!({ "operations": [] }));
}

#[test]
fn run_missing_input_file_exits_invalid() {
    let workdir = Workdir::new().expect("workdir");
    let status = binary()
        .arg("run")
        .arg("--input")
        .arg(workdir.path().join("absent.json"))
        .stderr(Stdio::null())
        .status()
        .expect("rural-delivery run");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn init_settings_then_metafield_prints_disabled_config() {
    let workdir = Workdir::new().expect("workdir");
    let status = binary()
        .current_dir(workdir.path())
        .arg("init-settings")
        .status()
        .expect("rural-delivery init-settings");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(workdir.path().join("rural-delivery.toml").exists());

    let output = binary()
        .current_dir(workdir.path())
        .arg("metafield")
        .output()
        .expect("rural-delivery metafield");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("metafield json");
    assert_eq!(
        value,
        json!({ "enabled": false, "postcodes": [], "ruralMethodsToKeep": [] })
    );
}

#[test]
fn metafield_splits_and_lowercases_settings_text() {
    let workdir = Workdir::new().expect("workdir");
    let settings = workdir
        .write(
            "settings.toml",
            "enabled = true\npostcodes = \"9010, 9020\"\nrural_methods_to_keep = \"Rural Courier\"\n",
        )
        .expect("write settings");

    let output = binary()
        .arg("metafield")
        .arg("--settings")
        .arg(&settings)
        .output()
        .expect("rural-delivery metafield");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("metafield json");
    assert_eq!(
        value,
        json!({
            "enabled": true,
            "postcodes": ["9010", "9020"],
            "ruralMethodsToKeep": ["rural courier"]
        })
    );
}

#[test]
fn init_settings_keeps_existing_file_without_force() {
    let workdir = Workdir::new().expect("workdir");
    let settings = workdir
        .write("settings.toml", "enabled = true\n")
        .expect("write settings");

    let status = binary()
        .arg("init-settings")
        .arg("--settings")
        .arg(&settings)
        .status()
        .expect("rural-delivery init-settings");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(
        std::fs::read_to_string(&settings).expect("read settings"),
        "enabled = true\n"
    );
}

#[test]
fn tokens_prints_sorted_normalized_postcodes() {
    let output = binary()
        .arg("tokens")
        .arg("9013. 9012")
        .arg("SW1A-1AA")
        .output()
        .expect("rural-delivery tokens");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "1aa\n9012\n9013\nsw1a\n"
    );
}

#[test]
fn metafield_rejects_enabled_settings_without_keep_methods() {
    let workdir = Workdir::new().expect("workdir");
    let settings = workdir
        .write("settings.toml", "enabled = true\npostcodes = \"9013\"\n")
        .expect("write settings");

    let output = binary()
        .arg("metafield")
        .arg("--settings")
        .arg(&settings)
        .output()
        .expect("rural-delivery metafield");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ruralMethodsToKeep"));
}

#[test]
fn init_settings_preset_flows_into_metafield() {
    let workdir = Workdir::new().expect("workdir");
    let status = binary()
        .current_dir(workdir.path())
        .arg("init-settings")
        .arg("--preset")
        .arg("south")
        .status()
        .expect("rural-delivery init-settings");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let output = binary()
        .current_dir(workdir.path())
        .arg("metafield")
        .output()
        .expect("rural-delivery metafield");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("metafield json");
    assert_eq!(value["enabled"], json!(false));
    assert_eq!(value["postcodes"], json!(Preset::South.postcodes()));
}

#[test]
fn presets_prints_one_postcode_per_line() {
    let output = binary()
        .arg("presets")
        .arg("north")
        .output()
        .expect("rural-delivery presets");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.lines().collect::<Vec<_>>(), Preset::North.postcodes());
}

#[test]
fn import_rebuilds_settings_from_legacy_metafield_value() {
    let workdir = Workdir::new().expect("workdir");
    let stored = workdir
        .write(
            "metafield.json",
            r#"{"enabled":true,"countryCodes":["9013","9012"],"ruralMethodsToKeep":["rural courier"]}"#,
        )
        .expect("write metafield");
    let settings = workdir.path().join("settings.toml");

    let status = binary()
        .arg("import")
        .arg("--input")
        .arg(&stored)
        .arg("--settings")
        .arg(&settings)
        .status()
        .expect("rural-delivery import");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let output = binary()
        .arg("metafield")
        .arg("--settings")
        .arg(&settings)
        .output()
        .expect("rural-delivery metafield");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("metafield json");
    assert_eq!(
        value,
        json!({
            "enabled": true,
            "postcodes": ["9013", "9012"],
            "ruralMethodsToKeep": ["rural courier"]
        })
    );
}

#[test]
fn import_refuses_to_overwrite_without_force() {
    let workdir = Workdir::new().expect("workdir");
    let settings = workdir
        .write("settings.toml", "enabled = false\n")
        .expect("write settings");
    let stored = workdir
        .write("metafield.json", r#"{"enabled":false}"#)
        .expect("write metafield");

    let status = binary()
        .arg("import")
        .arg("--input")
        .arg(&stored)
        .arg("--settings")
        .arg(&settings)
        .stderr(Stdio::null())
        .status()
        .expect("rural-delivery import");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
    assert_eq!(
        std::fs::read_to_string(&settings).expect("read settings"),
        "enabled = false\n"
    );
}
