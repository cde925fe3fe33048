use colored::Colorize;
use std::time::Duration;

use crate::report_log::ReportLog;
use crate::request::{self, Outcome};

const SITE_TIMEOUT: Duration = Duration::from_secs(10);

/// the probe set, in the order the sites are checked
pub fn site_urls(username: &str) -> Vec<(&'static str, String)> {
    vec![
        ("GitHub", format!("https://github.com/{}", username)),
        ("Twitter", format!("https://twitter.com/{}", username)),
        ("Instagram", format!("https://instagram.com/{}", username)),
        ("Reddit", format!("https://reddit.com/user/{}", username)),
        ("VK", format!("https://vk.com/{}", username)),
    ]
}

/// probe each site for the username, strictly one at a time [completed]
/// one record is written for the username after every site has answered
pub async fn check_username(username: &str, log: &ReportLog) -> rusqlite::Result<Vec<String>> {
    info!(format!("Checking username {} on social media:", username));

    let mut probes = Vec::new();
    for (site, url) in site_urls(username) {
        let outcome = match request::fetch(&url, None, Some(SITE_TIMEOUT)).await {
            Ok(resp) => match resp.status().as_u16() {
                200 => Outcome::Success(()),
                404 => Outcome::NotFound,
                code => Outcome::UpstreamError(code),
            },
            Err(msg) => Outcome::TransportFailure(msg),
        };
        probes.push((site, url, outcome));
    }

    record_site_outcomes(username, probes, log)
}

/// aggregate the per-site outcomes into one blob
/// non-200/404 statuses are console-only and never reach the log
pub fn record_site_outcomes(
    username: &str,
    probes: Vec<(&'static str, String, Outcome<()>)>,
    log: &ReportLog,
) -> rusqlite::Result<Vec<String>> {
    let mut lines = Vec::new();
    for (site, url, outcome) in &probes {
        match outcome {
            Outcome::Success(()) => {
                let line = format!("[+] Found on {}: {}", site, url);
                good!(format!("Found on {}: {}", site, url));
                lines.push(line);
            }
            Outcome::NotFound => {}
            Outcome::UpstreamError(code) => {
                warn!(format!("{} returned {}", site, code));
            }
            Outcome::TransportFailure(_) => {
                let line = format!("Error checking {}", site);
                warn!(line.clone());
                lines.push(line);
            }
        }
    }

    log.append(username, &lines.join("\n"))?;
    Ok(lines)
}
