use std::path::PathBuf;
use std::process::Command;

use chromaword::color::Color;
use chromaword::fonts::{select_pair, FONT_PAIRS};
use chromaword::pipeline::contrast::{MIN_ACCENT_CONTRAST, MIN_TEXT_CONTRAST};
use chromaword::theme::Theme;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn snapshot_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// Validate the structural correctness of a `:root` CSS export.
fn validate_css_structure(css: &str) {
    let lines: Vec<&str> = css.lines().collect();
    assert_eq!(
        lines.len(),
        8,
        "theme should have exactly 8 lines, got {}",
        lines.len()
    );

    assert_eq!(lines[0], ":root {");
    assert_eq!(lines[7], "}");

    let properties = [
        "--background",
        "--text",
        "--accent",
        "--accent-text",
        "--heading-font",
        "--body-font",
    ];
    for (line, property) in lines[1..7].iter().zip(properties) {
        let prefix = format!("  {property}: ");
        assert!(
            line.starts_with(&prefix),
            "expected '{prefix}...', got '{line}'"
        );
        assert!(line.ends_with(';'), "missing semicolon: '{line}'");
    }

    // The four color lines carry valid lowercase hex.
    let hex_re = regex::Regex::new(r"^  --[a-z-]+: #[0-9a-f]{6};$").unwrap();
    for line in &lines[1..5] {
        assert!(hex_re.is_match(line), "invalid color line: '{line}'");
    }

    // Font values are quoted and carry their generic fallbacks.
    assert!(lines[5].ends_with("', serif;"), "heading: '{}'", lines[5]);
    assert!(
        lines[6].ends_with("', sans-serif;"),
        "body: '{}'",
        lines[6]
    );
    assert!(lines[4].contains("#ffffff"), "accent-text must be white");
}

// ---------------------------------------------------------------------------
// Snapshot tests
// ---------------------------------------------------------------------------

/// Generate or verify a snapshot for a word/offset pair.
fn snapshot_test(word: &str, offset: u32) {
    let css = Theme::generate(word, offset).unwrap().to_css();
    validate_css_structure(&css);

    let snap_dir = snapshot_dir();
    std::fs::create_dir_all(&snap_dir).unwrap();
    let snap_path = snap_dir.join(format!("{word}_{offset}.snap"));

    if std::env::var("UPDATE_SNAPSHOTS").is_ok() || !snap_path.exists() {
        std::fs::write(&snap_path, &css).unwrap();
        return;
    }

    let expected = std::fs::read_to_string(&snap_path).unwrap();
    assert_eq!(
        css, expected,
        "snapshot mismatch for '{word}' @ {offset}. Run with UPDATE_SNAPSHOTS=1 to update."
    );
}

#[test]
fn snapshot_chromaword() {
    snapshot_test("chromaword", 0);
}

#[test]
fn snapshot_ocean() {
    snapshot_test("ocean", 0);
}

#[test]
fn snapshot_ocean_refreshed() {
    snapshot_test("ocean", 1);
}

#[test]
fn snapshot_serenity() {
    snapshot_test("serenity", 0);
}

// ---------------------------------------------------------------------------
// Pipeline validation tests
// ---------------------------------------------------------------------------

#[test]
fn default_word_produces_pinned_palette() {
    let theme = Theme::generate("chromaword", 0).unwrap();
    assert_eq!(theme.palette.background.to_hex(), "#1a2019");
    assert_eq!(theme.palette.text.to_hex(), "#e7f2eb");
    assert_eq!(theme.palette.accent.to_hex(), "#6acbf8");
    assert_eq!(theme.fonts.heading, "Lora");
    assert_eq!(theme.fonts.body, "Open Sans");
}

#[test]
fn refresh_changes_the_theme() {
    let base = Theme::generate("ocean", 0).unwrap();
    let refreshed = Theme::generate("ocean", 1).unwrap();
    assert_ne!(base.palette, refreshed.palette);
}

#[test]
fn contrast_invariants_hold_for_a_word_list() {
    let words = [
        "chromaword",
        "ocean",
        "rust",
        "happy",
        "serenity",
        "firework",
        "corporate",
        "a",
        "antidisestablishmentarianism",
    ];
    for word in words {
        for offset in 0..5 {
            let theme = Theme::generate(word, offset).unwrap();
            let bg = theme.palette.background;

            let text_ratio = Color::contrast_ratio(bg, theme.palette.text);
            let text_clamped = theme.palette.text == Color::new(0, 0, 0)
                || theme.palette.text == Color::new(255, 255, 255);
            assert!(
                text_ratio >= MIN_TEXT_CONTRAST || text_clamped,
                "{word}@{offset}: text contrast {text_ratio:.2}"
            );

            let accent_ratio = Color::contrast_ratio(bg, theme.palette.accent);
            let accent_clamped = theme.palette.accent == Color::new(0, 0, 0)
                || theme.palette.accent == Color::new(255, 255, 255);
            assert!(
                accent_ratio >= MIN_ACCENT_CONTRAST || accent_clamped,
                "{word}@{offset}: accent contrast {accent_ratio:.2}"
            );
        }
    }
}

#[test]
fn hex_round_trips_through_parsing() {
    let theme = Theme::generate("ocean", 0).unwrap();
    for color in [
        theme.palette.background,
        theme.palette.text,
        theme.palette.accent,
        theme.palette.accent_text,
    ] {
        assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
    }
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn generation_is_deterministic(word in "[a-zA-Z]{1,12}", offset in any::<u32>()) {
            let a = Theme::generate(&word, offset).unwrap();
            let b = Theme::generate(&word, offset).unwrap();
            prop_assert_eq!(a.to_css(), b.to_css());
        }

        #[test]
        fn css_is_always_well_formed(word in "[a-zA-Z]{1,12}", offset in 0u32..100) {
            let css = Theme::generate(&word, offset).unwrap().to_css();
            let lines = css.lines().count();
            prop_assert_eq!(lines, 8, "expected 8 lines, got {}", lines);

            let hex_re = regex::Regex::new(r"#[0-9a-f]{6}").unwrap();
            for line in css.lines().take(5).skip(1) {
                prop_assert!(hex_re.is_match(line), "invalid hex in '{}'", line);
            }
        }

        #[test]
        fn contrast_minimums_or_clamped_extreme(word in "[a-z]{1,12}", offset in 0u32..50) {
            let theme = Theme::generate(&word, offset).unwrap();
            let bg = theme.palette.background;

            for (fg, min) in [
                (theme.palette.text, MIN_TEXT_CONTRAST),
                (theme.palette.accent, MIN_ACCENT_CONTRAST),
            ] {
                let ratio = Color::contrast_ratio(bg, fg);
                let clamped =
                    fg == Color::new(0, 0, 0) || fg == Color::new(255, 255, 255);
                prop_assert!(
                    ratio >= min || clamped,
                    "'{}' @ {}: contrast {:.2} < {}",
                    word,
                    offset,
                    ratio,
                    min
                );
            }
        }

        #[test]
        fn font_pair_comes_from_the_table(word in "\\PC{1,12}", offset in 0u32..1000) {
            let pair = select_pair(&word, offset);
            prop_assert!(FONT_PAIRS.contains(&pair));
        }

        #[test]
        fn case_only_affects_fonts(word in "[a-z]{1,12}") {
            let lower = Theme::generate(&word, 0).unwrap();
            let upper = Theme::generate(&word.to_uppercase(), 0).unwrap();
            prop_assert_eq!(lower.palette, upper.palette);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

fn cargo_bin() -> PathBuf {
    // Build the binary in test mode and return its path
    let output = Command::new("cargo")
        .args(["build", "--quiet"])
        .output()
        .expect("failed to build binary");
    assert!(output.status.success(), "cargo build failed");

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("debug")
        .join("chromaword")
}

#[test]
fn cli_stdout_produces_valid_css() {
    let bin = cargo_bin();
    let output = Command::new(&bin)
        .arg("ocean")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "binary exited with error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    validate_css_structure(&stdout);
}

#[test]
fn cli_refresh_flag_changes_output() {
    let bin = cargo_bin();
    let base = Command::new(&bin).arg("ocean").output().unwrap();
    let refreshed = Command::new(&bin)
        .args(["ocean", "--refresh", "1"])
        .output()
        .unwrap();
    assert_ne!(base.stdout, refreshed.stdout);
}

#[test]
fn cli_snippet_flag_emits_the_header() {
    let bin = cargo_bin();
    let output = Command::new(&bin)
        .args(["ocean", "--snippet"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("/* OCEAN COLOR PALETTE */"));
}

#[test]
fn cli_rejects_blank_word() {
    let bin = cargo_bin();
    let output = Command::new(&bin).arg("   ").output().unwrap();
    assert!(!output.status.success(), "blank word should be rejected");
}

#[test]
fn cli_output_flag_writes_a_file() {
    let bin = cargo_bin();
    let dir = std::env::temp_dir().join("chromaword-test-cli");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ocean.css");

    let output = Command::new(&bin)
        .args(["ocean", "-o", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    validate_css_structure(&content);

    std::fs::remove_dir_all(&dir).unwrap();
}
