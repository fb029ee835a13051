//! Metrics command: list the selectable metrics.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use clarity_meter_core::Metric;

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug, Default)]
pub struct MetricsArgs {}

/// Print every metric with its formula and target band.
#[instrument(name = "cmd_metrics", skip_all)]
pub fn cmd_metrics(_args: MetricsArgs, global_json: bool, default_metric: Metric) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing metrics command");

    let catalog = Metric::catalog();
    if global_json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for info in &catalog {
        let default = if info.key == default_metric {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{} {}",
            info.key.as_str().if_supports_color(Stream::Stdout, |t| t.bold()),
            default.if_supports_color(Stream::Stdout, |t| t.green()),
            info.name.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        );
        println!("    {}", info.formula);
        println!("    target: {}", info.target);
    }

    Ok(())
}
