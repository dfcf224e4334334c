mod commands;

use anyhow::Context;
use colored::*;
use tracing::warn;

use commands::CommandLine;
use nparse_common::{config::Config, nprint, success};
use nparse_common::terminal::{colors, logging, print};
use nparse_cli::terminal::banner;
use nparse_core::report::{self, Destination, ReportJob, ReportSummary};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    print::banner("nparser", banner::NPARSER, &cfg);

    let filter = commands.filter();
    if commands.has_conflicting_filters() {
        if let Some(winner) = filter {
            warn!("Several state filters given, keeping only {winner} ports");
        }
    }

    print::header("parsing report", &cfg);

    let job = ReportJob {
        input: commands.input,
        filter,
        destination: Destination::from(commands.output),
    };

    let summary = report::run(&job)
        .with_context(|| format!("could not convert {}", job.input.display()))?;

    report_ends(&summary, &job, &cfg);
    Ok(())
}

fn report_ends(summary: &ReportSummary, job: &ReportJob, cfg: &Config) {
    if let Destination::File(path) = &job.destination {
        success!("Results saved to {}", path.display());
    }

    if summary.hosts_rendered == 0 {
        warn!("No host has matching ports");
    }

    let hosts: ColoredString = format!("{} hosts", summary.hosts_rendered).bold().green();
    let ports: ColoredString = format!("{} ports", summary.ports_rendered).bold().yellow();
    let output: String = format!(
        "{hosts} with {ports} out of {} hosts in the report",
        summary.hosts_seen
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    if cfg.quiet == 0 {
        nprint!();
    }
    print::summary(&output, cfg);
}
