use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const INSTANT: &str = "Llama 3.1 8B Instant 128k";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("llmcalc-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Run the binary with HOME pointed at `home` so no user config leaks in
fn run_llmcalc(args: &[&str], home: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_llmcalc").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("llmcalc.exe");
        } else {
            path.push("llmcalc");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run llmcalc");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn models_json_lists_catalog_in_order() {
    let home = unique_temp_dir("models");
    let (ok, stdout, stderr) = run_llmcalc(&["models", "-j"], &home);
    assert!(ok, "stderr: {stderr}");

    let names: Vec<String> = serde_json::from_str(&stdout).expect("json");
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "Llama 3.2 1B (Preview) 8k");
    assert_eq!(names[11], "Llama Guard 3 8B 8k");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn cost_default_usage_text() {
    let home = unique_temp_dir("cost-text");
    let (ok, stdout, stderr) = run_llmcalc(&["cost", INSTANT, "--no-color"], &home);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Estimated LLM Cost: $0.0580"), "{stdout}");
    assert!(stdout.contains("Input tokens per $1: 20,000,000.00"), "{stdout}");
    assert!(!stdout.contains("Monthly"), "{stdout}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn cost_daily_projection_json() {
    let home = unique_temp_dir("cost-daily");
    let (ok, stdout, stderr) = run_llmcalc(
        &["cost", INSTANT, "-f", "daily", "-r", "10", "-m", "30", "-j"],
        &home,
    );
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert!((json["cost"].as_f64().unwrap() - 0.058).abs() < 1e-9);
    let analysis = &json["analysis"];
    assert_eq!(analysis["frequency"].as_str(), Some("daily"));
    assert!((analysis["period_cost"].as_f64().unwrap() - 0.58).abs() < 1e-9);
    assert!((analysis["monthly_cost"].as_f64().unwrap() - 17.40).abs() < 1e-9);
    assert!((analysis["suggested_price"].as_f64().unwrap() - 22.62).abs() < 1e-9);

    let _ = fs::remove_dir_all(home);
}

#[test]
fn cost_daily_projection_text() {
    let home = unique_temp_dir("cost-daily-text");
    let (ok, stdout, stderr) = run_llmcalc(
        &["cost", INSTANT, "--frequency", "daily", "--requests", "10", "--no-color"],
        &home,
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Total Daily Cost: $0.58"), "{stdout}");
    assert!(stdout.contains("Estimated Monthly Cost: $17.40"), "{stdout}");
    assert!(
        stdout.contains("Suggested Monthly Price (with 30% markup): $22.62"),
        "{stdout}"
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn negative_tokens_are_rejected() {
    let home = unique_temp_dir("negative");
    let (ok, stdout, stderr) = run_llmcalc(&["cost", INSTANT, "-i", "-1"], &home);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid input_tokens"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn markup_out_of_range_is_rejected() {
    let home = unique_temp_dir("markup");
    let (ok, _, stderr) = run_llmcalc(&["cost", INSTANT, "-f", "weekly", "-m", "250"], &home);
    assert!(!ok);
    assert!(stderr.contains("Invalid markup_percent"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn unknown_model_is_rejected() {
    let home = unique_temp_dir("unknown");
    let (ok, _, stderr) = run_llmcalc(&["info", "nonexistent-model"], &home);
    assert!(!ok);
    assert!(stderr.contains(r#"Unknown model "nonexistent-model""#), "stderr: {stderr}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn compare_is_default_command() {
    let home = unique_temp_dir("compare");
    let (ok, stdout, stderr) = run_llmcalc(&["-j"], &home);
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    let rows = json.as_array().expect("array output");
    assert_eq!(rows.len(), 12);
    let guard = &rows[11];
    assert_eq!(guard["model"].as_str(), Some("Llama Guard 3 8B 8k"));
    assert_eq!(guard["input_price"].as_str(), Some("$0.20"));
    assert!((guard["output_tokens_per_dollar"].as_f64().unwrap() - 5_000_000.0).abs() < 1e-6);

    let _ = fs::remove_dir_all(home);
}

#[test]
fn config_file_supplies_defaults() {
    let home = unique_temp_dir("config");
    write_file(
        &home.join(".config").join("llmcalc").join("config.toml"),
        "frequency = \"hourly\"\nrequests = 2\nmarkup = 100\njson = true\n",
    );

    let (ok, stdout, stderr) = run_llmcalc(&["cost", INSTANT], &home);
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    let analysis = &json["analysis"];
    assert_eq!(analysis["frequency"].as_str(), Some("hourly"));
    let monthly = analysis["monthly_cost"].as_f64().unwrap();
    assert!((monthly - 0.058 * 2.0 * 24.0 * 30.0).abs() < 1e-9);
    assert!((analysis["suggested_price"].as_f64().unwrap() - 2.0 * monthly).abs() < 1e-9);

    // CLI flag beats config, and --no-config ignores the file entirely
    let (ok, stdout, stderr) = run_llmcalc(&["cost", INSTANT, "-r", "1", "-f", "monthly"], &home);
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["analysis"]["num_requests"].as_i64(), Some(1));

    let (ok, stdout, stderr) = run_llmcalc(&["cost", INSTANT, "--no-config", "--no-color"], &home);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Estimated LLM Cost: $0.0580"), "{stdout}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn german_locale_formats_numbers() {
    let home = unique_temp_dir("locale");
    let (ok, stdout, stderr) =
        run_llmcalc(&["info", INSTANT, "--locale", "de", "--no-color"], &home);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Input tokens per $1: 20.000.000,00"), "{stdout}");

    let (ok, _, stderr) = run_llmcalc(&["info", INSTANT, "--locale", "xx"], &home);
    assert!(!ok);
    assert!(stderr.contains("Unsupported locale: xx"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(home);
}
