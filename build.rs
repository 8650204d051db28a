//! Build script to embed the default character roster
//!
//! Reads the roster CSV and generates Rust source exposing it as a const string.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_roster(
        "data/characters.csv",
        &Path::new(&out_dir).join("characters.rs"),
        "CHARACTERS_CSV",
        "Default character roster (CSV with header row)",
    );

    // Rebuild if the roster changes
    println!("cargo:rerun-if-changed=data/characters.csv");
}

fn generate_roster(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Header row is not a character
    let rows = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1);

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let absolute = Path::new(&manifest_dir).join(input_path);

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated roster").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &str = include_str!({:?});",
        absolute.display().to_string()
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of character rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_ROWS: usize = {rows};").unwrap();
}
