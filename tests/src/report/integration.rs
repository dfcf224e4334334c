use std::fs;

use nparse_common::report::StateFilter;
use nparse_core::error::ReportError;
use nparse_core::report::{self, Destination, ReportJob, ReportSummary};
use nparse_integration_tests::{SCAN_REPORT, Workspace};

fn convert(ws: &Workspace, filter: Option<StateFilter>) -> anyhow::Result<(String, ReportSummary)> {
    let input = ws.write("scan.txt", SCAN_REPORT)?;
    let output = ws.path("converted.txt");

    let job = ReportJob {
        input,
        filter,
        destination: Destination::File(output.clone()),
    };
    let summary = report::run(&job)?;

    Ok((fs::read_to_string(output)?, summary))
}

#[test]
fn converts_full_report() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let (rendered, summary) = convert(&ws, None)?;

    assert_eq!(rendered, "10.0.0.1 -p 22,80,111,443,53\n10.0.0.5 -p 3306,161\n");
    assert_eq!(
        summary,
        ReportSummary {
            hosts_seen: 3,
            hosts_rendered: 2,
            ports_rendered: 7,
        }
    );
    Ok(())
}

#[test]
fn converts_with_each_filter() -> anyhow::Result<()> {
    let ws = Workspace::new()?;

    let (open, _) = convert(&ws, Some(StateFilter::Open))?;
    assert_eq!(open, "10.0.0.1 -p 22,80,53\n");

    let (closed, _) = convert(&ws, Some(StateFilter::Closed))?;
    assert_eq!(closed, "10.0.0.1 -p 443\n10.0.0.5 -p 3306\n");

    let (filtered, summary) = convert(&ws, Some(StateFilter::Filtered))?;
    assert_eq!(filtered, "10.0.0.1 -p 111\n");
    assert_eq!(summary.hosts_rendered, 1);
    Ok(())
}

#[test]
fn output_file_is_truncated() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let stale = "stale line that is longer than anything rendered here\n".repeat(10);
    ws.write("converted.txt", &stale)?;

    let (rendered, _) = convert(&ws, Some(StateFilter::Filtered))?;
    assert_eq!(rendered, "10.0.0.1 -p 111\n");
    Ok(())
}

#[test]
fn converting_own_output_is_empty() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let (rendered, _) = convert(&ws, None)?;

    let input = ws.write("again.txt", &rendered)?;
    let output = ws.path("again-converted.txt");
    let job = ReportJob {
        input,
        filter: None,
        destination: Destination::File(output.clone()),
    };
    let summary = report::run(&job)?;

    assert_eq!(summary, ReportSummary::default());
    assert_eq!(fs::read_to_string(output)?, "");
    Ok(())
}

#[test]
fn missing_input_is_reported() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let job = ReportJob {
        input: ws.path("nope.txt"),
        filter: None,
        destination: Destination::Stdout,
    };

    let err = report::run(&job).unwrap_err();
    assert!(matches!(err, ReportError::InputNotFound { .. }));
    assert!(err.to_string().contains("nope.txt"));
    Ok(())
}

#[test]
fn unwritable_output_is_reported() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let input = ws.write("scan.txt", SCAN_REPORT)?;
    let job = ReportJob {
        input,
        filter: None,
        destination: Destination::File(ws.path("missing-dir").join("out.txt")),
    };

    let err = report::run(&job).unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));
    Ok(())
}
