use std::{
    io::{
        self,
        Write,
    },
    path::Path,
};

use deck_edit::{
    deck::swap::swap_question,
    persistence,
};

fn main() {
    let cwd = Path::new(".");

    let json_files = match persistence::list_json_files(cwd) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return;
        }
    };

    if json_files.is_empty() {
        println!("No JSON files found in current directory");
        return;
    }

    println!("Available JSON files:");
    for (i, file) in json_files.iter().enumerate() {
        println!("{}. {}", i + 1, file);
    }

    print!("\nEnter the number of the file you want to modify: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        println!("Please enter a valid number");
        return;
    }
    let selection: usize = match input.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Please enter a valid number");
            return;
        }
    };
    if selection == 0 || selection > json_files.len() {
        println!("Invalid selection");
        return;
    }

    let path = cwd.join(&json_files[selection - 1]);
    match swap_question(&path) {
        Ok(outcome) => {
            println!("Created backup at: {}", outcome.backup_path.display());
            println!("Successfully modified {} items", outcome.records);
            println!("Modified file saved as: {}", outcome.output_path.display());
        }
        Err(e) => eprintln!("[ERROR] Processing {}: {}", path.display(), e),
    }
}
