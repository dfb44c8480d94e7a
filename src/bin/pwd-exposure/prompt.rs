//! Terminal input.

use anyhow::{bail, Result};
use secrecy::SecretString;
use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one line from stdin, without its terminator.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("standard input closed");
    }
    Ok(strip_terminator(&line).to_string())
}

/// Asks a yes/no question; anything but `y` is a no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(is_yes(&read_line(prompt)?))
}

/// Reads a non-empty password, hidden from the terminal if the user asks for it.
pub fn read_password() -> Result<SecretString> {
    let hidden = confirm("Would you like to hide your password input? (y/n): ")?;
    loop {
        let password = if hidden {
            rpassword::prompt_password("Enter your potential password: ")?
        } else {
            read_line("Enter your potential password: ")?
        };

        if password.is_empty() {
            println!("Password cannot be empty. Please enter a password");
            continue;
        }
        return Ok(SecretString::new(password.into()));
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
