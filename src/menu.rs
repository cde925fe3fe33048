use colored::Colorize;
use std::io::{self, Write};

use crate::config::ApiCredentials;
use crate::investigate;
use crate::report_log::ReportLog;

/// interactive menu, loops until exit is chosen (or stdin closes)
pub async fn run(creds: &ApiCredentials, log: &ReportLog) -> rusqlite::Result<()> {
    loop {
        println!();
        println!("1. Investigate an email address");
        println!("2. Investigate a username");
        println!("3. Domain lookup");
        println!("4. Phone number lookup");
        println!("5. Exit");

        let choice = match prompt("> ") {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                if let Some(email) = prompt("Email: ").filter(|e| !e.is_empty()) {
                    investigate::investigate_email(&email, creds, log).await?;
                }
            }
            "2" => {
                if let Some(username) = prompt("Username: ").filter(|u| !u.is_empty()) {
                    investigate::investigate_username(&username, log).await?;
                }
            }
            "3" | "4" => {
                warn!("not yet implemented".to_string());
            }
            "5" => break,
            _ => {
                warn!("invalid choice".to_string());
            }
        }
    }
    Ok(())
}

/// blocking console prompt, trimmed; None once stdin is closed
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
