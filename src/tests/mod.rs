/*
 * Everything network-facing is exercised through the outcome seam,
 * so no test here needs a live connection.
 */
#[cfg(test)]
mod tests {
    use crate::config::ApiCredentials;
    use crate::hibp::{breach_outcome, record_breach_outcome};
    use crate::hunter::{check_hunterio, record_verifier_outcome, verifier_outcome};
    use crate::investigate::derive_username;
    use crate::report_log::ReportLog;
    use crate::request::Outcome;
    use crate::socials::{record_site_outcomes, site_urls};

    // a fresh throwaway log for each test
    macro_rules! memlog {
        () => {
            ReportLog::open(":memory:").unwrap()
        };
    }

    #[test]
    fn breach_404_is_a_clean_negative() {
        let log = memlog!();
        let outcome = breach_outcome(404, "");
        assert_eq!(outcome, Outcome::NotFound);

        let lines = record_breach_outcome("alice@example.com", outcome, &log).unwrap();
        assert_eq!(lines, vec!["No breaches found".to_string()]);
        assert_eq!(log.count().unwrap(), 1);

        let (target, result) = log.last().unwrap();
        assert_eq!(target, "alice@example.com");
        assert_eq!(result, "No breaches found");
    }

    #[test]
    fn breach_hit_formats_count_plus_one_line_per_breach() {
        let log = memlog!();
        let body = r#"[
            {"Name":"Adobe","BreachDate":"2013-10-04","DataClasses":["Email addresses","Passwords"]},
            {"Name":"LinkedIn","BreachDate":"2012-05-05","DataClasses":["Email addresses"]}
        ]"#;

        let outcome = breach_outcome(200, body);
        match &outcome {
            Outcome::Success(breaches) => assert_eq!(breaches.len(), 2),
            other => panic!("expected success, got {:?}", other),
        }

        let lines = record_breach_outcome("bob@example.com", outcome, &log).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Found in 2 breaches");
        assert_eq!(lines[1], "Adobe (2013-10-04) | Data: Email addresses, Passwords");
        assert_eq!(lines[2], "LinkedIn (2012-05-05) | Data: Email addresses");

        let (_, result) = log.last().unwrap();
        assert_eq!(result, lines.join("\n"));
    }

    #[test]
    fn breach_upstream_error_persists_bare_message() {
        let log = memlog!();
        let outcome = breach_outcome(503, "");
        assert_eq!(outcome, Outcome::UpstreamError(503));

        let lines = record_breach_outcome("carol@example.com", outcome, &log).unwrap();
        // the status code stays on the console, not in the log
        assert_eq!(lines, vec!["HIBP API error".to_string()]);
        assert_eq!(log.count().unwrap(), 1);
    }

    #[test]
    fn breach_garbage_body_is_a_transport_failure() {
        let log = memlog!();
        let outcome = breach_outcome(200, "<html>not json</html>");
        let msg = match &outcome {
            Outcome::TransportFailure(msg) => msg.clone(),
            other => panic!("expected transport failure, got {:?}", other),
        };

        let lines = record_breach_outcome("dave@example.com", outcome, &log).unwrap();
        assert_eq!(lines, vec![msg.clone()]);

        let (_, result) = log.last().unwrap();
        assert_eq!(result, msg);
    }

    #[tokio::test]
    async fn hunter_without_key_is_a_silent_no_op() {
        let log = memlog!();
        let creds = ApiCredentials::none();

        let lines = check_hunterio("eve@example.com", &creds, &log).await.unwrap();
        assert!(lines.is_empty());
        assert_eq!(log.count().unwrap(), 0);
    }

    #[test]
    fn hunter_data_object_produces_status_and_sources() {
        let log = memlog!();
        let body = r#"{"data":{
            "status":"valid","disposable":false,"webmail":true,
            "sources":[{"domain":"example.org","uri":"https://example.org/team"}]
        }}"#;

        let lines =
            record_verifier_outcome("frank@example.com", verifier_outcome(body), &log).unwrap();
        assert_eq!(
            lines,
            vec![
                "Status: valid".to_string(),
                "Disposable: No".to_string(),
                "Webmail: Yes".to_string(),
                "Sources:".to_string(),
                "- example.org (https://example.org/team)".to_string(),
            ]
        );
        assert_eq!(log.count().unwrap(), 1);
    }

    #[test]
    fn hunter_missing_data_object_writes_nothing() {
        let log = memlog!();
        let lines =
            record_verifier_outcome("grace@example.com", verifier_outcome(r#"{"errors":[]}"#), &log)
                .unwrap();
        assert!(lines.is_empty());
        assert_eq!(log.count().unwrap(), 0);
    }

    #[test]
    fn hunter_unparsable_body_persists_the_message() {
        let log = memlog!();
        let outcome = verifier_outcome("oops");
        let lines = record_verifier_outcome("heidi@example.com", outcome, &log).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(log.count().unwrap(), 1);
    }

    #[test]
    fn site_list_is_fixed_and_ordered() {
        let sites = site_urls("alice");
        let names: Vec<&str> = sites.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["GitHub", "Twitter", "Instagram", "Reddit", "VK"]);
        assert_eq!(sites[0].1, "https://github.com/alice");
        assert_eq!(sites[3].1, "https://reddit.com/user/alice");
    }

    #[test]
    fn probe_persists_hits_and_transport_errors_only() {
        let log = memlog!();
        let probes = vec![
            ("GitHub", "https://github.com/alice".to_string(), Outcome::Success(())),
            ("Twitter", "https://twitter.com/alice".to_string(), Outcome::NotFound),
            ("Instagram", "https://instagram.com/alice".to_string(), Outcome::UpstreamError(429)),
            ("Reddit", "https://reddit.com/user/alice".to_string(), Outcome::Success(())),
            (
                "VK",
                "https://vk.com/alice".to_string(),
                Outcome::TransportFailure("timed out".to_string()),
            ),
        ];

        let lines = record_site_outcomes("alice", probes, &log).unwrap();
        assert_eq!(
            lines,
            vec![
                "[+] Found on GitHub: https://github.com/alice".to_string(),
                "[+] Found on Reddit: https://reddit.com/user/alice".to_string(),
                "Error checking VK".to_string(),
            ]
        );

        let (target, result) = log.last().unwrap();
        assert_eq!(target, "alice");
        assert_eq!(result, lines.join("\n"));
    }

    #[test]
    fn probe_with_no_hits_still_writes_one_record() {
        let log = memlog!();
        let probes = site_urls("nobody")
            .into_iter()
            .map(|(site, url)| (site, url, Outcome::NotFound))
            .collect();

        let lines = record_site_outcomes("nobody", probes, &log).unwrap();
        assert!(lines.is_empty());
        assert_eq!(log.count().unwrap(), 1);

        let (target, result) = log.last().unwrap();
        assert_eq!(target, "nobody");
        assert_eq!(result, "");
    }

    #[test]
    fn username_derivation_takes_the_local_part() {
        assert_eq!(derive_username("alice@example.com"), "alice");
        assert_eq!(derive_username("a@b@c"), "a");
        assert_eq!(derive_username("plainuser"), "plainuser");
    }

    #[test]
    fn log_initialize_is_idempotent_and_append_counts_up() {
        let log = memlog!();
        log.initialize().unwrap();
        log.initialize().unwrap();
        assert_eq!(log.count().unwrap(), 0);

        let first = log.append("t1", "r1").unwrap();
        assert_eq!(log.count().unwrap(), 1);
        let second = log.append("t2", "r2").unwrap();
        assert_eq!(log.count().unwrap(), 2);
        assert!(second > first);
    }
}
