//! Produce an `ADMIN_PASSWORD_HASH` value.
//!
//! Reads the password from the first argument, or from the first line of
//! stdin when no argument is given, and prints the Argon2id PHC string.

use std::io::BufRead;
use std::process::ExitCode;

use folio_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};

fn main() -> ExitCode {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read password from stdin: {e}");
                return ExitCode::FAILURE;
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            ExitCode::FAILURE
        }
    }
}
