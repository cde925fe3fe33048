use clap::Parser;
use std::error::Error;

#[macro_use]
mod logging;

mod banner;
mod config;
mod hibp;
mod hunter;
mod investigate;
mod menu;
mod report_log;
mod request;
mod socials;
mod tests;

use config::ApiCredentials;
use report_log::ReportLog;

#[derive(Parser, Debug)]
#[command(name = "osintrs", about = "OSINT information gathering tool")]
struct Cli {
    /// Email address to investigate
    #[arg(long, conflicts_with = "username")]
    email: Option<String>,

    /// Username to investigate
    #[arg(long)]
    username: Option<String>,

    /// Where to keep the report log
    #[arg(long, default_value = "reports.db")]
    database: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    banner::print_simple_banner();

    let creds = ApiCredentials::from_env();
    let log = ReportLog::open(&cli.database)?;

    match (cli.email.as_deref(), cli.username.as_deref()) {
        (Some(email), _) => investigate::investigate_email(email, &creds, &log).await?,
        (None, Some(username)) => investigate::investigate_username(username, &log).await?,
        // no flags: drop into the interactive menu
        (None, None) => menu::run(&creds, &log).await?,
    }

    Ok(())
}
