use crate::config::ApiCredentials;
use crate::report_log::ReportLog;
use crate::{hibp, hunter, socials};

/// heuristic username guess: everything before the first '@'
pub fn derive_username(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}

/// full email investigation: breaches, verifier, then a presence probe
/// on the derived username; a failed lookup never blocks the next one,
/// only persistence errors bubble up
pub async fn investigate_email(
    email: &str,
    creds: &ApiCredentials,
    log: &ReportLog,
) -> rusqlite::Result<()> {
    hibp::check_haveibeenpwned(email, creds, log).await?;
    hunter::check_hunterio(email, creds, log).await?;
    socials::check_username(derive_username(email), log).await?;
    Ok(())
}

pub async fn investigate_username(username: &str, log: &ReportLog) -> rusqlite::Result<()> {
    socials::check_username(username, log).await?;
    Ok(())
}
