use std::num::NonZeroUsize;
use std::time::Duration;

use nparse_core::batch::{self, BatchGate, BatchOptions, BatchOutcome, Proceed, UrlOpener};
use nparse_core::error::BatchError;
use nparse_integration_tests::Workspace;

#[derive(Default)]
struct Collect(Vec<String>);

impl UrlOpener for Collect {
    fn open(&mut self, url: &str) -> Result<(), BatchError> {
        self.0.push(url.to_string());
        Ok(())
    }
}

struct StopAt(usize);

impl BatchGate for StopAt {
    fn wait_for_next(&mut self, next: usize, _total: usize) -> Result<Proceed, BatchError> {
        Ok(if next >= self.0 { Proceed::Stop } else { Proceed::Next })
    }
}

fn options(size: usize) -> BatchOptions {
    BatchOptions {
        delay: Duration::ZERO,
        ..BatchOptions::new(NonZeroUsize::new(size).unwrap())
    }
}

#[test]
fn loads_urls_skipping_blank_lines() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let path = ws.write(
        "urls.txt",
        "https://a.example\n\n   \n  https://b.example  \r\nhttps://c.example",
    )?;

    let urls = batch::load_urls(&path)?;
    assert_eq!(urls, vec!["https://a.example", "https://b.example", "https://c.example"]);
    Ok(())
}

#[test]
fn opens_file_in_batches_until_stopped() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let content: String = (1..=7).map(|i| format!("https://host{i}.example\n")).collect();
    let urls = batch::load_urls(&ws.write("urls.txt", &content)?)?;

    let mut opener = Collect::default();
    let outcome = batch::open_in_batches(&urls, &options(3), &mut opener, &mut StopAt(3))?;

    // Batches 1 and 2 open, the gate refuses batch 3
    assert_eq!(outcome, BatchOutcome::Interrupted { opened: 6 });
    assert_eq!(opener.0, urls[..6]);
    Ok(())
}

#[test]
fn missing_url_file_is_reported() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let err = batch::load_urls(&ws.path("urls.txt")).unwrap_err();
    assert!(matches!(err, BatchError::InputNotFound { .. }));
    Ok(())
}
