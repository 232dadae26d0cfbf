use std::path::Path;

use deck_edit::deck::coerce::coerce_scalars;

fn main() {
    let path = Path::new("deck_default.json");
    match coerce_scalars(path) {
        Ok(changed) => println!("[OK] Coerced {} fields in {}", changed, path.display()),
        Err(e) => eprintln!("[ERROR] Processing {}: {}", path.display(), e),
    }
}
