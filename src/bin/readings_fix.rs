use std::path::Path;

use deck_edit::deck::reading::fix_readings;

fn main() {
    let path = Path::new("defaults").join("deck_default.json");
    match fix_readings(&path) {
        Ok(outcome) => {
            println!(
                "[OK] Cleaned {} readings, saved to {}",
                outcome.cleaned,
                outcome.output_path.display()
            );
        }
        Err(e) => eprintln!("[ERROR] Processing {}: {}", path.display(), e),
    }
}
