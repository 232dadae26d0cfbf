use std::path::Path;

use crate::{
    core::{
        DeckError,
        ResetSummary,
    },
    persistence,
};

// The tools live next to the release checkout, so everything hangs off the
// same relative base.
const RELEASE_BASE: &str = "srs-quiz-release/srs-quiz";

/// Restores every deck and public JSON file under `root` from its `_default`
/// counterpart. A file without a counterpart is left alone and counted as a
/// warning; a file that fails to parse or write is counted as an error. Either
/// way the run continues with the remaining files. Only a missing folder is
/// fatal, and that is checked before anything is touched.
pub fn reset_from_defaults(root: &Path) -> Result<ResetSummary, DeckError> {
    let base = root.join(RELEASE_BASE);
    let decks_folder = base.join("decks");
    let public_folder = base.join("public");
    let defaults_folder = base.join("defaults");

    for folder in [&decks_folder, &public_folder, &defaults_folder] {
        if !folder.exists() {
            return Err(DeckError::MissingFolder(folder.clone()));
        }
    }

    let mut summary = ResetSummary::default();

    for (folder, name) in [(&decks_folder, "decks"), (&public_folder, "public")] {
        println!("\nProcessing {} folder:", name);
        println!("{}", "-".repeat(50));

        for file in persistence::list_json_files(folder)? {
            summary.processed += 1;

            let default_file = persistence::default_counterpart(&file);
            let default_path = defaults_folder.join(&default_file);

            if !default_path.exists() {
                println!(
                    "[WARNING] Default file {} not found in {}",
                    default_file,
                    defaults_folder.display()
                );
                summary.errors += 1;
                continue;
            }

            match substitute(&default_path, &folder.join(&file)) {
                Ok(()) => {
                    println!("[OK] Successfully substituted {} with {}", file, default_file);
                    summary.substituted += 1;
                }
                Err(e) => {
                    println!("[ERROR] Processing {}: {}", file, e);
                    summary.errors += 1;
                }
            }
        }
    }

    println!("\nFinal Summary:");
    println!("{}", "=".repeat(50));
    println!("Total files processed: {}", summary.processed);
    println!("Successfully substituted: {}", summary.substituted);
    println!("Errors/Warnings: {}", summary.errors);

    Ok(summary)
}

// Parse-then-reserialize rather than a byte copy, so a broken default file is
// caught here instead of ending up live.
fn substitute(default_path: &Path, live_path: &Path) -> Result<(), DeckError> {
    let data = persistence::load_value(default_path)?;
    persistence::save_value(live_path, &data)
}
