use std::path::Path;

use deck_edit::deck::reset::reset_from_defaults;

fn main() {
    // Run from the tools checkout sitting next to srs-quiz-release.
    let root = Path::new("..");
    if let Err(e) = reset_from_defaults(root) {
        eprintln!("[ERROR] Script error: {}", e);
    }
}
