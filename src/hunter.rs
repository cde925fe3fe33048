use colored::Colorize;
use serde::Deserialize;

use crate::config::ApiCredentials;
use crate::report_log::ReportLog;
use crate::request::{self, Outcome};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VerifierResponse {
    pub data: Option<VerifierData>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VerifierData {
    pub status: String,
    pub disposable: bool,
    pub webmail: bool,
    #[serde(default)]
    pub sources: Vec<VerifierSource>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VerifierSource {
    pub domain: String,
    pub uri: String,
}

/// verify an email through hunter.io [completed]
/// without an api key this is a no-op: no request goes out, nothing is logged
pub async fn check_hunterio(
    email: &str,
    creds: &ApiCredentials,
    log: &ReportLog,
) -> rusqlite::Result<Vec<String>> {
    let key = match creds.hunter_key.as_deref() {
        Some(key) => key,
        None => {
            warn!("Hunter.io API key not configured".to_string());
            return Ok(Vec::new());
        }
    };

    let url = format!(
        "https://api.hunter.io/v2/email-verifier?email={}&api_key={}",
        email, key
    );

    let outcome = match request::fetch(&url, None, None).await {
        Ok(resp) => match resp.text().await {
            Ok(body) => verifier_outcome(&body),
            Err(err) => Outcome::TransportFailure(err.to_string()),
        },
        Err(msg) => Outcome::TransportFailure(msg),
    };

    record_verifier_outcome(email, outcome, log)
}

/// hunter answers errors in-band, so there is no status branch here:
/// either the body carries the envelope or the call failed
pub fn verifier_outcome(body: &str) -> Outcome<VerifierResponse> {
    match serde_json::from_str::<VerifierResponse>(body) {
        Ok(resp) => Outcome::Success(resp),
        Err(err) => Outcome::TransportFailure(err.to_string()),
    }
}

/// an envelope without a data object produces no lines and no record
pub fn record_verifier_outcome(
    email: &str,
    outcome: Outcome<VerifierResponse>,
    log: &ReportLog,
) -> rusqlite::Result<Vec<String>> {
    let lines = match &outcome {
        Outcome::Success(resp) => match &resp.data {
            Some(data) => {
                info!(format!("Hunter.io results for {}:", email));
                let mut lines = vec![
                    format!("Status: {}", data.status),
                    format!("Disposable: {}", yes_no(data.disposable)),
                    format!("Webmail: {}", yes_no(data.webmail)),
                ];
                if !data.sources.is_empty() {
                    lines.push("Sources:".to_string());
                    for source in &data.sources {
                        lines.push(format!("- {} ({})", source.domain, source.uri));
                    }
                }
                for line in &lines {
                    println!("{}", line);
                }
                lines
            }
            None => return Ok(Vec::new()),
        },
        Outcome::TransportFailure(msg) => {
            warn!(format!("Hunter.io error: {}", msg));
            vec![msg.clone()]
        }
        // the verifier never yields these, fetch errors are already in-band
        Outcome::NotFound | Outcome::UpstreamError(_) => return Ok(Vec::new()),
    };

    log.append(email, &lines.join("\n"))?;
    Ok(lines)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
