/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - bundled catalog, default build
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("pc-builder").arg("-q").assert().code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pc-builder").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pc-builder").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pc-builder")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("pc-builder")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - unknown graphics card
    #[test]
    fn test_exit_code_unknown_gpu() {
        cargo_bin_cmd!("pc-builder")
            .args(["-g", "NVIDIA GeForce RTX 9999"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - non-existent catalog path
    #[test]
    fn test_exit_code_missing_catalog() {
        cargo_bin_cmd!("pc-builder")
            .args(["-c", "/nonexistent/path/catalog.json"])
            .assert()
            .code(3);
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_default_markdown_report() {
        cargo_bin_cmd!("pc-builder")
            .arg("-q")
            .assert()
            .success()
            .stdout(predicate::str::contains("# 🖥️ PC Build Report"))
            .stdout(predicate::str::contains(
                "**Graphics card:** NVIDIA GeForce RTX 4060",
            ))
            .stdout(predicate::str::contains("**Catalog:** bundled catalog"))
            .stdout(predicate::str::contains("## Price Analysis"))
            .stdout(predicate::str::contains("- **Total new price:** 11 148 kr"))
            .stdout(predicate::str::contains("- **Total used price:** 8 048 kr"))
            .stdout(predicate::str::contains("- **Potential savings:** 3 100 kr"))
            .stdout(predicate::str::contains("## Marketplace Suggestions"))
            .stdout(predicate::str::contains("*Generated by pc-builder"));
    }

    #[test]
    fn test_default_build_skips_ddr4_suggestions() {
        cargo_bin_cmd!("pc-builder")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "### Memory: Corsair Vengeance LPX 16GB DDR4-3200\n\n*No marketplace listings found",
            ))
            .stderr(predicate::str::contains("component type not recognized"));
    }

    #[test]
    fn test_csv_report() {
        let output = cargo_bin_cmd!("pc-builder")
            .args(["-q", "-f", "csv", "-c"])
            .arg(fixture("catalog.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Component,Name,New Price,Used Price,Rating");
        assert_eq!(
            lines[1],
            "Graphics Card,Test GPU 300W,8 000 kr,5 000 kr,Good price"
        );
        assert_eq!(lines[5], "Power Supply,PSU 500W,900 kr,500 kr,Great price");
    }

    #[test]
    fn test_json_report() {
        let output = cargo_bin_cmd!("pc-builder")
            .args(["-q", "--format", "json", "-c"])
            .arg(fixture("catalog.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["gpu"], "Test GPU 300W");
        assert_eq!(json["metadata"]["tool_name"], "pc-builder");
        assert_eq!(json["price_rows"].as_array().unwrap().len(), 7);
        assert_eq!(json["summary"]["total_new"], 15500.0);
        assert_eq!(json["summary"]["savings_display"], "5 650 kr");
        assert!(json.get("compatible_options").is_none());
    }

    #[test]
    fn test_list_gpus() {
        cargo_bin_cmd!("pc-builder")
            .arg("--list-gpus")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("NVIDIA GeForce RTX 4060\n"))
            .stdout(predicate::str::contains("AMD Radeon RX 6600\n"));
    }

    #[test]
    fn test_list_gpus_from_fixture() {
        cargo_bin_cmd!("pc-builder")
            .arg("--list-gpus")
            .arg("-c")
            .arg(fixture("catalog.json"))
            .assert()
            .success()
            .stdout("Test GPU 300W\nSmall GPU\n");
    }

    #[test]
    fn test_show_compatible_for_high_power_gpu() {
        cargo_bin_cmd!("pc-builder")
            .args(["-q", "--show-compatible", "-g", "NVIDIA GeForce RTX 4090"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## Compatible Components"))
            .stdout(predicate::str::contains("| Corsair RM850x |"))
            .stdout(predicate::str::contains("| be quiet! Dark Power 13 1000W |"))
            .stdout(predicate::str::contains("Corsair CV450").not())
            .stdout(predicate::str::contains("| NZXT H510 |"))
            .stdout(predicate::str::contains("Cooler Master MasterBox NR200").not())
            .stdout(predicate::str::contains("## Marketplace Suggestions").not());
    }

    #[test]
    fn test_show_compatible_csv_lists_every_option() {
        let output = cargo_bin_cmd!("pc-builder")
            .args(["-q", "--show-compatible", "-f", "csv", "-c"])
            .arg(fixture("catalog.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        // 2 boards, 3 CPUs, 2 RAM kits, 1 PSU, 1 case, 2 coolers
        assert_eq!(stdout.lines().count(), 1 + 11);
        assert!(stdout.contains("Power Supply,PSU 500W,"));
        assert!(!stdout.contains("PSU 400W"));
        assert!(!stdout.contains("Board Orphan"));
    }

    #[test]
    fn test_no_listings() {
        cargo_bin_cmd!("pc-builder")
            .args(["-q", "--no-listings"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## Price Analysis"))
            .stdout(predicate::str::contains("## Marketplace Suggestions").not());
    }

    #[test]
    fn test_component_pick() {
        cargo_bin_cmd!("pc-builder")
            .args([
                "-q",
                "-g",
                "NVIDIA GeForce RTX 4090",
                "--psu",
                "be quiet! Dark Power 13 1000W",
                "--case",
                "Lian Li O11 Dynamic EVO",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "| Power Supply | be quiet! Dark Power 13 1000W |",
            ))
            .stdout(predicate::str::contains("| Case | Lian Li O11 Dynamic EVO |"));
    }
}

mod progress_tests {
    use super::*;

    #[test]
    fn test_socket_mismatch_warning_on_stderr() {
        cargo_bin_cmd!("pc-builder")
            .arg("-c")
            .arg(fixture("catalog.json"))
            .args(["--motherboard", "Board AM5", "--cpu", "CPU LGA1700"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Processor \"CPU LGA1700\" (socket LGA1700) does not fit motherboard",
            ));
    }

    #[test]
    fn test_progress_on_stderr() {
        cargo_bin_cmd!("pc-builder")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "📖 Loading component catalog from: bundled catalog",
            ))
            .stderr(predicate::str::contains("🎮 Graphics card: NVIDIA GeForce RTX 4060"))
            .stderr(predicate::str::contains("📝 Generating Markdown build report..."))
            .stdout(predicate::str::contains("📖").not());
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        cargo_bin_cmd!("pc-builder")
            .args(["-q", "--no-listings"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Loading component catalog").not())
            .stderr(predicate::str::contains("Generating").not());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_failure_banner() {
        cargo_bin_cmd!("pc-builder")
            .args(["-g", "NVIDIA GeForce RTX 9999"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("❌ An error occurred:"))
            .stderr(predicate::str::contains(
                "No graphics card named \"NVIDIA GeForce RTX 9999\"",
            ))
            .stderr(predicate::str::contains("NVIDIA GeForce RTX 4070"))
            .stderr(predicate::str::contains(
                "Please try again later or contact support if the problem persists.",
            ));
    }

    #[test]
    fn test_invalid_selection() {
        cargo_bin_cmd!("pc-builder")
            .args(["-g", "NVIDIA GeForce RTX 4090", "--psu", "Corsair CV450"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Invalid selection: power supply \"Corsair CV450\"",
            ))
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_unknown_component_name() {
        cargo_bin_cmd!("pc-builder")
            .args(["--cooler", "Noctua NH-U12S"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No CPU cooler named \"Noctua NH-U12S\""));
    }

    #[test]
    fn test_missing_catalog() {
        cargo_bin_cmd!("pc-builder")
            .args(["-c", "/nonexistent/path/catalog.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Component catalog not found"));
    }

    #[test]
    fn test_malformed_catalog() {
        cargo_bin_cmd!("pc-builder")
            .arg("-c")
            .arg(fixture("malformed_catalog.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to load component catalog"))
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_blank_gpu_name() {
        cargo_bin_cmd!("pc-builder")
            .args(["-g", "   "])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("cannot be empty"));
    }
}

mod output_file_tests {
    use super::*;

    #[test]
    fn test_output_to_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("build.md");

        cargo_bin_cmd!("pc-builder")
            .arg("-o")
            .arg(&output_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("✅ Output complete:"));

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("# 🖥️ PC Build Report"));
    }

    #[test]
    fn test_output_without_extension_gets_format_extension() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("pc-builder")
            .args(["-q", "-f", "csv", "-o"])
            .arg(dir.path().join("build"))
            .assert()
            .success()
            .stderr(predicate::str::contains("build.csv"));

        assert!(!dir.path().join("build").exists());
        let content = fs::read_to_string(dir.path().join("build.csv")).unwrap();
        assert!(content.starts_with("Component,Name,New Price,Used Price,Rating\n"));
    }

    #[test]
    fn test_list_gpus_output_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("gpus");

        cargo_bin_cmd!("pc-builder")
            .args(["-q", "--list-gpus", "-o"])
            .arg(&output_path)
            .assert()
            .success();

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("NVIDIA GeForce RTX 4090\n"));
    }

    #[test]
    fn test_output_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("missing").join("build.csv");

        cargo_bin_cmd!("pc-builder")
            .args(["-f", "csv", "-o"])
            .arg(&output_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}
