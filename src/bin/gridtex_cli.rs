//! CLI tool for gridtex - synthesizes tables from a metadata JSON file
//!
//! Usage:
//!   gridtex_cli <metadata.json>              # Write outputs to the current directory
//!   gridtex_cli <metadata.json> -o outdir    # Write outputs to a directory

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::path::Path;

use gridtex::export::{csv, latex, summary};
use gridtex::TestMetadata;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridtex_cli <metadata.json> [-o outdir]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let out_dir = if args.len() > 3 && args[2] == "-o" {
        args[3].clone()
    } else {
        ".".to_string()
    };

    // Read and parse the metadata record
    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };
    let meta: TestMetadata = match serde_json::from_str(&text) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error parsing {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Synthesize every grid
    let set = match gridtex::synthesize(&meta) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error synthesizing tables: {}", e);
            std::process::exit(1);
        }
    };
    for failure in &set.failures {
        eprintln!(
            "Warning: grid at {:?} failed: {}",
            failure.coordinate, failure.error
        );
    }

    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("Error creating {}: {}", out_dir, e);
        std::process::exit(1);
    }
    let out_dir = Path::new(&out_dir);

    // Per-grid CSV and LaTeX fragments
    for (idx, grid) in set.grids.iter().enumerate() {
        let n = idx + 1;
        let csv_path = out_dir.join(format!("table{}.csv", n));
        if let Err(e) = fs::write(&csv_path, csv::write_delimited(grid, csv::Delimiter::Comma)) {
            eprintln!("Error writing {}: {}", csv_path.display(), e);
            std::process::exit(1);
        }

        let tex = match latex::render_table(grid) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error rendering table{}: {}", n, e);
                std::process::exit(1);
            }
        };
        let tex_path = out_dir.join(format!("table{}.tex", n));
        if let Err(e) = fs::write(&tex_path, tex) {
            eprintln!("Error writing {}: {}", tex_path.display(), e);
            std::process::exit(1);
        }
    }

    // Summary index
    let rows = summary::summary_rows(&set);
    let summary_path = out_dir.join("tables.csv");
    if let Err(e) = fs::write(&summary_path, summary::write_summary(&rows)) {
        eprintln!("Error writing {}: {}", summary_path.display(), e);
        std::process::exit(1);
    }

    // Full report fragment
    let section = match latex::render_section(&set) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error rendering report section: {}", e);
            std::process::exit(1);
        }
    };
    let stem = meta
        .basic_info
        .test_name
        .to_lowercase()
        .replace([' ', '-'], "_");
    let stem = if stem.is_empty() { "report".to_string() } else { stem };
    let section_path = out_dir.join(format!("{}_section.tex", stem));
    if let Err(e) = fs::write(&section_path, section) {
        eprintln!("Error writing {}: {}", section_path.display(), e);
        std::process::exit(1);
    }

    eprintln!(
        "Wrote {} table(s) and {} to {}",
        set.grids.len(),
        section_path.display(),
        out_dir.display()
    );
}
