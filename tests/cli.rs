//! End-to-end tests driving the `folio` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn folio(source: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--source")
        .arg(source)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run folio")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "folio failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

const SCENARIO_CATALOG: &str = r#"
[[items]]
url = "a.jpg"
category = "x"
title = "A"

[[items]]
url = "b.mp4"
category = "y"
title = "B"

[[items]]
url = "c.png"
category = "x"
title = "C"
"#;

fn scenario_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("gallery.toml"), SCENARIO_CATALOG).unwrap();
    tmp
}

// ---------------------------------------------------------------------------
// Sample catalog (no gallery.toml)
// ---------------------------------------------------------------------------

#[test]
fn categories_from_sample_catalog() {
    let tmp = TempDir::new().unwrap();
    let lines = stdout_lines(&folio(tmp.path(), &["categories"]));
    assert_eq!(lines[0], "Categories");
    assert_eq!(lines[1], "* All Work (16) [all]");
    assert!(lines.contains(&"  Antelope Canyon (4) [antelope-canyon]".to_string()));
}

#[test]
fn list_json_for_filtered_sample() {
    let tmp = TempDir::new().unwrap();
    let out = folio(tmp.path(), &["list", "--category", "switzerland", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["url"], "/images/photography/11.jpeg");
    assert_eq!(entries[4]["index"], 4);
}

#[test]
fn gen_catalog_output_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = folio(tmp.path(), &["gen-catalog"]);
    std::fs::write(tmp.path().join("gallery.toml"), &out.stdout).unwrap();
    let lines = stdout_lines(&folio(tmp.path(), &["check"]));
    assert!(lines.contains(&"==> 3 categories, 16 items (16 images, 0 videos)".to_string()));
    assert_eq!(lines.last().unwrap(), "==> Catalog is valid");
}

// ---------------------------------------------------------------------------
// Lightbox
// ---------------------------------------------------------------------------

#[test]
fn show_opens_filtered_item() {
    let tmp = scenario_dir();
    let lines = stdout_lines(&folio(tmp.path(), &["show", "--category", "x", "1"]));
    assert_eq!(lines, ["Lightbox 2 / 2: C [image]", "    Source: c.png"]);
}

#[test]
fn show_out_of_range_fails() {
    let tmp = scenario_dir();
    let out = folio(tmp.path(), &["show", "--category", "x", "2"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Index 2 is out of range for 2 items"), "{stderr}");
}

#[test]
fn browse_wraps_and_ignores_failed_steps() {
    let tmp = scenario_dir();
    let lines = stdout_lines(&folio(
        tmp.path(),
        &["browse", "-c", "x", "next", "open:1", "next", "category:y", "close"],
    ));
    assert_eq!(
        lines,
        [
            "> next (ignored: Lightbox is not open)",
            "Lightbox closed",
            "> open:1",
            "Lightbox 2 / 2: C [image]",
            "    Source: c.png",
            "> next",
            "Lightbox 1 / 2: A [image]",
            "    Source: a.jpg",
            "> category:y",
            "Lightbox closed",
            "> close",
            "Lightbox closed",
        ]
    );
}

#[test]
fn unknown_category_is_an_error() {
    let tmp = scenario_dir();
    let out = folio(tmp.path(), &["list", "--category", "z"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Unknown category: z"), "{stderr}");
}

// ---------------------------------------------------------------------------
// Scan / check
// ---------------------------------------------------------------------------

#[test]
fn scan_write_then_list() {
    let media = TempDir::new().unwrap();
    for rel in [
        "010-Misc/001-Cinque-Terre.jpeg",
        "020-Antelope-Canyon/001.mp4",
    ] {
        let path = media.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }
    let site = TempDir::new().unwrap();

    let out = folio(
        site.path(),
        &["scan", media.path().to_str().unwrap(), "--url-prefix", "/m", "--write"],
    );
    stdout_lines(&out);
    assert!(site.path().join("gallery.toml").exists());

    let lines = stdout_lines(&folio(site.path(), &["list", "-c", "antelope-canyon"]));
    assert_eq!(
        lines,
        [
            "Antelope Canyon (1 item)",
            "001 Antelope Canyon [video]",
            "    Source: /m/020-Antelope-Canyon/001.mp4",
        ]
    );
}

#[test]
fn check_rejects_invalid_catalog() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gallery.toml"),
        "[[items]]\nurl = \"a.jpg\"\ncategory = \"all\"\ntitle = \"A\"\n",
    )
    .unwrap();
    let out = folio(tmp.path(), &["check"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Catalog validation error:"), "{stderr}");
    assert!(stderr.contains("reserved 'all' category"), "{stderr}");
}
