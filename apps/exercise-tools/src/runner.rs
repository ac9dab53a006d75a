//! Job execution
//!
//! A batch runs the page jobs first and the manifest last, stopping at the
//! first error.

use crate::config::{Config, ManifestConfig, RemovePagesConfig};
use crate::error::ToolError;
use manifest_core::ManifestReport;
use pagefilter_core::{remove_pages_with, FilterReport};

/// Everything a batch produced
#[derive(Debug, Default)]
pub struct RunSummary {
    pub filtered: Vec<FilterReport>,
    pub manifest: Option<ManifestReport>,
}

/// Produce every output listed for the job's input document
pub fn run_remove_pages(job: &RemovePagesConfig) -> Result<Vec<FilterReport>, ToolError> {
    let mut reports = Vec::with_capacity(job.outputs.len());
    for spec in &job.outputs {
        tracing::debug!(
            "Removing pages {} from {} into {}",
            spec.range,
            job.input.display(),
            spec.path.display()
        );
        let report = remove_pages_with(&job.input, &spec.path, spec.range, job.policy)?;
        println!("{}", describe_filter(&report));
        reports.push(report);
    }
    Ok(reports)
}

pub fn run_manifest(job: &ManifestConfig) -> Result<ManifestReport, ToolError> {
    let report = manifest_core::generate_manifest(&job.directory, &job.output)?;
    println!("{}", describe_manifest(&report));
    Ok(report)
}

pub fn run_config(config: &Config) -> Result<RunSummary, ToolError> {
    let mut summary = RunSummary::default();

    if config.remove_pages.is_none() && config.manifest.is_none() {
        tracing::warn!("Job file contains no jobs");
    }

    if let Some(job) = &config.remove_pages {
        summary.filtered = run_remove_pages(job)?;
    }
    if let Some(job) = &config.manifest {
        summary.manifest = Some(run_manifest(job)?);
    }

    Ok(summary)
}

/// User-facing line for a finished page removal
pub fn describe_filter(report: &FilterReport) -> String {
    format!(
        "Wrote {} ({} of {} pages kept).",
        report.output.display(),
        report.output_pages,
        report.input_pages
    )
}

/// User-facing line for a finished manifest
pub fn describe_manifest(report: &ManifestReport) -> String {
    format!(
        "Manifest generated with {} files at '{}'.",
        report.count,
        report.output.display()
    )
}
