//! Analyze command: readability metrics for files or stdin.

use std::fmt;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use clarity_meter_core::{AnalysisReport, Assessment, Metric, analyze_report};

use super::{read_input_file, read_input_stream};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Files to analyze. Reads stdin when omitted or given as `-`.
    pub files: Vec<Utf8PathBuf>,

    /// Metric to foreground (defaults to the configured metric).
    #[arg(short, long, value_enum)]
    pub metric: Option<Metric>,

    /// Strip markdown syntax before analysis (implied for `.md` files).
    #[arg(long)]
    pub markdown: bool,
}

/// Where a text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    File(Utf8PathBuf),
}

impl Source {
    fn from_arg(path: Utf8PathBuf) -> Self {
        if path.as_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    fn is_markdown(&self) -> bool {
        matches!(self, Self::File(path) if matches!(path.extension(), Some("md" | "markdown")))
    }

    fn read(&self, max_input_bytes: Option<usize>) -> anyhow::Result<String> {
        match self {
            Self::Stdin => read_input_stream(std::io::stdin().lock(), max_input_bytes),
            Self::File(path) => read_input_file(path, max_input_bytes),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// One analyzed input, as emitted for multi-file JSON output.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: AnalysisReport,
}

/// Analyze each input and print its report.
///
/// Stops at the first input that fails to read or analyze.
#[instrument(name = "cmd_analyze", skip_all, fields(inputs = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config_metric: Metric,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let metric = args.metric.unwrap_or(config_metric);
    let sources: Vec<Source> = if args.files.is_empty() {
        vec![Source::Stdin]
    } else {
        args.files.into_iter().map(Source::from_arg).collect()
    };
    if sources.iter().filter(|s| **s == Source::Stdin).count() > 1 {
        anyhow::bail!("stdin (`-`) can only be given once");
    }
    debug!(metric = %metric, inputs = sources.len(), markdown = args.markdown, "executing analyze command");

    let progress = progress_bar(sources.len(), quiet);
    let mut results = Vec::with_capacity(sources.len());
    for source in &sources {
        progress.set_message(source.to_string());

        let content = source.read(max_input_bytes)?;
        let strip_md = args.markdown || source.is_markdown();
        let report = analyze_report(&content, metric, strip_md)
            .with_context(|| format!("failed to analyze {source}"))?;
        results.push(FileReport {
            file: source.to_string(),
            report,
        });

        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        let json = match results.as_slice() {
            [single] => serde_json::to_string_pretty(&single.report)?,
            _ => serde_json::to_string_pretty(&results)?,
        };
        println!("{json}");
        return Ok(());
    }

    let show_names = results.len() > 1 || sources.iter().any(|s| matches!(s, Source::File(_)));
    for (idx, result) in results.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        if show_names {
            println!(
                "{}",
                result.file.if_supports_color(Stream::Stdout, |t| t.bold())
            );
        }
        print_report(&result.report);
    }

    Ok(())
}

/// Progress bar for several inputs; hidden for single inputs or with `-q`.
fn progress_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet || total < 2 {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}

fn print_report(report: &AnalysisReport) {
    let metric = report.selected_metric;
    let label = format!("{}:", metric.label());
    let target = format!("(target: {})", report.target);
    println!(
        "  {} {:.1}  {}  {}",
        label.if_supports_color(Stream::Stdout, |t| t.cyan()),
        report.score,
        target.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        colored_assessment(report.assessment),
    );

    let scores = &report.metrics.scores;
    println!(
        "\n  {}",
        "Scores".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for m in Metric::ALL {
        let marker = if m == metric { "*" } else { " " };
        println!("  {marker} {:<22} {:>7.1}", m.label(), scores.get(m));
    }
    println!("    {:<22} {:>7.1}", "Avg sentence length", scores.asl);
    println!("    {:<22} {:>7.1}", "Complex words %", scores.pcw);
    println!("    {:<22} {:>7.1}", "Sentences / paragraph", scores.aspp);

    let c = &report.metrics.counts;
    println!(
        "\n  {}",
        "Counts".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    println!(
        "    {} words, {} sentences, {} paragraphs",
        c.words, c.sentences, c.paragraphs
    );
    println!(
        "    {} syllables, {} complex words, {} long words",
        c.syllables, c.complex_words, c.long_words
    );
}

fn colored_assessment(assessment: Assessment) -> String {
    let label = assessment.as_str().replace('_', " ");
    let styled = label.if_supports_color(Stream::Stdout, |text| match assessment {
        Assessment::WithinTarget => text.green().to_string(),
        Assessment::AboveTarget => text.red().to_string(),
        Assessment::BelowTarget => text.yellow().to_string(),
        Assessment::Unbanded => text.dimmed().to_string(),
    });
    styled.to_string()
}
