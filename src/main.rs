use std::path::PathBuf;
use std::process;

use anyhow::Result;
use log::{error, info};
use structopt::StructOpt;

use logaudit::app::{self, OutputPaths};

#[derive(StructOpt)]
#[structopt(
    name = "logaudit",
    about = "Analyzes a web-server access log: top hosts, heaviest resources, busiest hours and blocked login activity."
)]
struct Cli {
    /// Path to the input access log
    #[structopt(parse(from_os_str))]
    log: PathBuf,

    /// Output file for the top hosts report
    #[structopt(parse(from_os_str))]
    hosts: PathBuf,

    /// Output file for the top resources report
    #[structopt(parse(from_os_str))]
    resources: PathBuf,

    /// Output file for the busiest hours report
    #[structopt(parse(from_os_str))]
    hours: PathBuf,

    /// Output file for the blocked requests report
    #[structopt(parse(from_os_str))]
    blocked: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::from_args();
    let outputs = OutputPaths {
        hosts: args.hosts,
        resources: args.resources,
        hours: args.hours,
        blocked: args.blocked,
    };

    match app::run(&args.log, &outputs) {
        Ok(summary) => {
            info!(
                "Processed {} records, blocked {}",
                summary.records, summary.blocked
            );
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
