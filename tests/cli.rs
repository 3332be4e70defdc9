//! Tests for the command-line renderer.
//!
//! Each run points `--config` at an empty temp dir so a user config on the
//! test machine cannot leak in.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn browse(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_catalog-browser"))
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .args(args)
        .env_remove("CATALOG_BROWSER_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_help_lists_filter_flags() {
    let output = browse(&["--help"]);
    let text = stdout(&output);
    assert!(text.contains("--search"));
    assert!(text.contains("--brand"));
    assert!(text.contains("--min-price"));
    assert!(text.contains("--sort"));
}

#[test]
fn test_default_run_shows_sample_catalog() {
    let output = browse(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("12 products found"));
}

#[test]
fn test_search_in_list_view() {
    let output = browse(&["--search", "pro", "--view", "list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "2 products found");
    assert!(lines[2].contains("AirPods Pro"));
    assert!(lines[3].contains("MacBook Pro 16"));
}

#[test]
fn test_unparsable_price_is_ignored() {
    let output = browse(&["--min-price", "cheap", "--max-price", "100"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("1 products found"));
}

#[test]
fn test_empty_result_message() {
    let output = browse(&["--search", "zzzz"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("No products found"));
    assert!(text.contains("Try adjusting your filters or search terms"));
}

#[test]
fn test_json_output_is_sorted_by_price() {
    let output = browse(&["--brand", "Apple", "--sort", "price-high", "--json"]);
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["MacBook Pro 16", "iPad Air", "AirPods Pro"]);
}

#[test]
fn test_facets_flag() {
    let output = browse(&["--facets"]);
    let text = stdout(&output);
    assert!(text.starts_with("Categories: Electronics, Fashion, Home\n"));
    assert!(text.contains("Brands: Apple, Samsung, Nike"));
}

#[test]
fn test_catalog_file_and_config_view_mode() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("items.json");
    fs::write(
        &catalog,
        r#"[{"id": 1, "name": "Kettle", "category": "Home", "brand": "Bodum", "price": 49, "rating": 4}]"#,
    )
    .unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[catalog]\npath = {:?}\n\n[defaults]\nview_mode = \"list\"\n",
            catalog.display().to_string()
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_catalog-browser"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("1 products found"));
    assert!(text.lines().nth(2).unwrap().contains("Kettle [Home] [Bodum]"));
}

#[test]
fn test_relative_catalog_path_resolves_next_to_config() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(
        data_dir.join("items.json"),
        r#"[{"id": 7, "name": "Teapot", "category": "Home", "brand": "Hario", "price": 30, "rating": 5}]"#,
    )
    .unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[catalog]\npath = \"data/items.json\"\n").unwrap();

    let elsewhere = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_catalog-browser"))
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(&config)
        .args(["--view", "list"])
        .env_remove("CATALOG_BROWSER_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("1 products found"));
    assert!(text.contains("Teapot [Home] [Hario]"));
}

#[test]
fn test_missing_catalog_exits_with_error() {
    let output = browse(&["--catalog", "/nonexistent/items.json"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: cannot open catalog /nonexistent/items.json"));
}

#[test]
fn test_invalid_sort_is_usage_error() {
    let output = browse(&["--sort", "popularity"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("popularity"));
}
