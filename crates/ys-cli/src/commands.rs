use anyhow::Context;
use colored::Colorize;
use tracing::{info, warn};
use ys_diff::{compare_files, CompareOptions};
use ys_merge::merge_files;

use crate::cli::*;
use crate::config::ReportConfig;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ReportConfig::from_env(cli.width, cli.no_color);
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format, &config),
        Command::Merge(args) => cmd_merge(args, &cli.format, &config),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat, config: &ReportConfig) -> anyhow::Result<()> {
    let report = compare_report(&args, format, config)?;
    if !report.is_empty() {
        println!("{}", report.trim_end());
    }
    Ok(())
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat, config: &ReportConfig) -> anyhow::Result<()> {
    let output = merge_report(&args, format, config)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output.document)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote merged document");
            eprintln!(
                "{} Wrote {}",
                render::paint("✓", config.color, |s| s.green().bold()),
                path.display()
            );
        }
        None => print!("{}", output.document),
    }
    if let Some(report) = output.duplications {
        print!("{report}");
    }
    Ok(())
}

pub fn compare_report(args: &CompareArgs, format: &OutputFormat, config: &ReportConfig) -> anyhow::Result<String> {
    let options = CompareOptions {
        show_differences: args.differences,
        show_additional: args.additional,
        treat_empty_as_absent: !args.keep_empty,
    };
    let result = compare_files(&args.a, &args.b, &options)
        .with_context(|| format!("cannot compare {} and {}", args.a.display(), args.b.display()))?;

    match format {
        OutputFormat::Text => Ok(render::render_comparison(&result, config)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
    }
}

/// Merged document text plus the optional duplication report.
#[derive(Debug)]
pub struct MergeOutput {
    pub document: String,
    pub duplications: Option<String>,
}

pub fn merge_report(args: &MergeArgs, format: &OutputFormat, config: &ReportConfig) -> anyhow::Result<MergeOutput> {
    let state = merge_files(&args.files).context("merge failed")?;
    if state.is_empty() {
        warn!(first = %args.files[0].display(), "first document has no keys; merged document is empty");
    }
    match format {
        OutputFormat::Text => Ok(MergeOutput {
            document: state.as_text(!args.no_annotate)?,
            duplications: render::render_duplications(&state, config),
        }),
        OutputFormat::Json => Ok(MergeOutput {
            document: serde_json::to_string_pretty(&state)? + "\n",
            duplications: None,
        }),
    }
}
