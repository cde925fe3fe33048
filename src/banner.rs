use chrono::Local;
use colored::Colorize;

const BANNER: &str = r#"
               _         __
   ____  _____(_)___  __/ /___________
  / __ \/ ___/ / __ \/_  __/ ___/ ___/
 / /_/ (__  ) / / / / / / / /  (__  )
 \____/____/_/_/ /_/ /_/ /_/  /____/
"#;

pub fn print_simple_banner() {
    println!("{}", BANNER.purple().bold());
    println!("{}", "OSINT Tool - Starting investigation".purple());
    println!(
        "{}",
        format!(
            "Report generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .underline()
    );
}
