use log::debug;
use std::io::{self, BufRead, Write};

pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Blocking stdin confirmation. Only "y"/"yes" (any case) confirms; an empty
/// line or anything else declines.
pub fn ask_user(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    debug!("User response: {:?}", response.trim());

    Ok(is_affirmative(&response))
}
