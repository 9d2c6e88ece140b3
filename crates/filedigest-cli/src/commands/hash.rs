//! Hash command: hash a list of references and print the results

use anyhow::{bail, Result};
use filedigest_core::{compute_batch, BatchSummary, FilePlatform, HashOptions, HashResult};
use serde::Serialize;
use tracing::info;

use super::collect::collect_references;

/// Arguments for the hash command
#[derive(Debug, Clone)]
pub struct HashArgs {
    pub references: Vec<String>,
    pub recursive: bool,
    pub json: bool,
    pub chunk_size: usize,
    pub emit_logs: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [HashResult],
    summary: &'a BatchSummary,
}

/// Run the hash command
///
/// # Errors
/// Returns an error if references cannot be collected or any item failed.
pub async fn run<P>(args: &HashArgs, platform: &P) -> Result<()>
where
    P: FilePlatform + ?Sized,
{
    let results = execute(args, platform).await?;
    let summary = BatchSummary::from_results(&results);

    if args.json {
        println!("{}", render_json(&results, &summary)?);
    } else {
        print!("{}", render_text(&results));
        for result in results.iter().filter(|r| !r.is_success()) {
            if let Some(err) = &result.error {
                eprintln!("FAILED  {}: {}", result.metadata.name, err);
            }
        }
    }

    log_summary(&summary);

    if !summary.all_succeeded() {
        bail!("{} of {} file(s) failed", summary.failed, summary.total);
    }
    Ok(())
}

/// Collect references and hash them in order
///
/// # Errors
/// Returns an error if the reference list cannot be built.
pub async fn execute<P>(args: &HashArgs, platform: &P) -> Result<Vec<HashResult>>
where
    P: FilePlatform + ?Sized,
{
    let references = collect_references(&args.references, args.recursive)?;
    info!("Found {} file(s) to hash", references.len());

    let options = HashOptions::default()
        .with_logs(args.emit_logs)
        .with_chunk_size(args.chunk_size);

    Ok(compute_batch(platform, &references, &options).await)
}

/// Render successful results as `sha256sum`-style lines
#[must_use]
pub fn render_text(results: &[HashResult]) -> String {
    results
        .iter()
        .filter(|r| r.is_success())
        .map(|r| format!("{}  {}\n", r.hash, r.metadata.reference))
        .collect()
}

/// Render all results and the summary as pretty JSON
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(results: &[HashResult], summary: &BatchSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport { results, summary })?)
}

fn log_summary(summary: &BatchSummary) {
    info!(
        "✓ Hashed {} of {} file(s) ({} native, {} fallback) in {:?}",
        summary.succeeded,
        summary.total,
        summary.native,
        summary.fallback,
        summary.total_duration
    );
}
