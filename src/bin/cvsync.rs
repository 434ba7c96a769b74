//! cvsync CLI - sync LaTeX resume sections into a Jekyll markdown page

use clap::Parser;
use std::path::PathBuf;

use cvsync::{section_markers_present, sync_section, SyncSummary, SECTIONS, TARGET_FILE};

#[derive(Parser)]
#[command(name = "cvsync")]
#[command(version)]
#[command(about = "Sync LaTeX resume sections into a Jekyll markdown page", long_about = None)]
struct Cli {
    /// Sections to sync (default: all configured sections)
    sections: Vec<String>,

    /// Repository root containing the resume sources and target page
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Target markdown file, relative to the root
    #[arg(long, default_value = TARGET_FILE)]
    target: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Unknown names are dropped; an empty selection means everything
    let sections: Vec<&str> = if cli.sections.is_empty() {
        SECTIONS.keys().copied().collect()
    } else {
        cli.sections
            .iter()
            .map(String::as_str)
            .filter(|name| SECTIONS.contains_key(name))
            .collect()
    };

    println!("Syncing sections: {}", sections.join(", "));

    let mut summary = SyncSummary {
        total: sections.len(),
        ..Default::default()
    };

    for name in &sections {
        println!("\n--- Syncing {} ---", name);

        match section_markers_present(&cli.root, name, &cli.target) {
            Ok(presence) if presence.both() => {}
            Ok(presence) => {
                let config = &SECTIONS[name];
                println!("Warning: Comment blocks for {} not found in {}", name, cli.target.display());
                if !presence.start {
                    println!("  Missing: {}", config.comment_start);
                }
                if !presence.end {
                    println!("  Missing: {}", config.comment_end);
                }
                println!("Skipped {} - comment blocks not found", name);
                summary.skipped += 1;
                continue;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                println!("Skipped {} - target not readable", name);
                summary.skipped += 1;
                continue;
            }
        }

        match sync_section(&cli.root, name, &cli.target) {
            Ok(count) => {
                println!("Found {} {} entries", count, name);
                println!("Successfully updated {} in {}", name, cli.target.display());
                summary.succeeded += 1;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                println!("Failed to sync {}", name);
            }
        }
    }

    println!("\n=== Summary ===");
    println!("Total sections: {}", summary.total);
    println!("Skipped sections: {}", summary.skipped);
    println!(
        "Successfully synced: {}/{}",
        summary.succeeded,
        summary.attempted()
    );

    if summary.attempted() == 0 {
        println!("No sections were processed (all skipped)");
    } else if summary.all_succeeded() {
        println!("All attempted sections synced successfully!");
    } else {
        println!("Some sections failed to sync");
    }

    std::process::exit(summary.exit_code());
}
