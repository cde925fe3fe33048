use colored::Colorize;
use serde::Deserialize;

use crate::config::ApiCredentials;
use crate::report_log::ReportLog;
use crate::request::{self, Outcome};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Breach {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "BreachDate")]
    pub breach_date: String,
    #[serde(rename = "DataClasses")]
    pub data_classes: Vec<String>,
}

/// check an email against the haveibeenpwned breach database [completed]
/// every branch ends in exactly one report record for the email
pub async fn check_haveibeenpwned(
    email: &str,
    creds: &ApiCredentials,
    log: &ReportLog,
) -> rusqlite::Result<Vec<String>> {
    let url = format!("https://haveibeenpwned.com/api/v3/breachedaccount/{}", email);
    let header = creds.hibp_key.as_deref().map(|key| ("hibp-api-key", key));

    let outcome = match request::fetch(&url, header, None).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.text().await {
                Ok(body) => breach_outcome(status, &body),
                Err(err) => Outcome::TransportFailure(err.to_string()),
            }
        }
        Err(msg) => Outcome::TransportFailure(msg),
    };

    record_breach_outcome(email, outcome, log)
}

/// classify one hibp response by status code and body
/// a 200 whose body does not parse is a transport failure, not a hit
pub fn breach_outcome(status: u16, body: &str) -> Outcome<Vec<Breach>> {
    match status {
        200 => match serde_json::from_str::<Vec<Breach>>(body) {
            Ok(breaches) => Outcome::Success(breaches),
            Err(err) => Outcome::TransportFailure(err.to_string()),
        },
        404 => Outcome::NotFound,
        code => Outcome::UpstreamError(code),
    }
}

/// the single formatting step: print the outcome and persist the blob
pub fn record_breach_outcome(
    email: &str,
    outcome: Outcome<Vec<Breach>>,
    log: &ReportLog,
) -> rusqlite::Result<Vec<String>> {
    let lines = match &outcome {
        Outcome::Success(breaches) => {
            bad!(format!("Found in {} breaches:", breaches.len()));
            let mut lines = vec![format!("Found in {} breaches", breaches.len())];
            for breach in breaches {
                let line = format!(
                    "{} ({}) | Data: {}",
                    breach.name,
                    breach.breach_date,
                    breach.data_classes.join(", ")
                );
                println!("- {}", line);
                lines.push(line);
            }
            lines
        }
        Outcome::NotFound => {
            good!("No breaches found".to_string());
            vec!["No breaches found".to_string()]
        }
        Outcome::UpstreamError(code) => {
            // the status code is console-only, the log gets the bare message
            warn!(format!("HIBP API error: {}", code));
            vec!["HIBP API error".to_string()]
        }
        Outcome::TransportFailure(msg) => {
            warn!(format!("HIBP error: {}", msg));
            vec![msg.clone()]
        }
    };

    log.append(email, &lines.join("\n"))?;
    Ok(lines)
}
