//! Developer tasks for clarity-meter.
//!
//! ```text
//! cargo xtask completions [--out-dir DIR]
//! cargo xtask man [--out-dir DIR]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for clarity-meter")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (default: all)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Completions { out_dir, shell } => completions(&out_dir, &shell),
        Task::Man { out_dir } => man(&out_dir),
    }
}

fn completions(out_dir: &Path, shells: &[Shell]) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let shells = if shells.is_empty() {
        Shell::value_variants().to_vec()
    } else {
        shells.to_vec()
    };

    let mut cmd = clarity_meter::command();
    let bin = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin, out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = clarity_meter::command();
    clap_mangen::generate_to(cmd, out_dir)
        .with_context(|| format!("failed to write man pages to {}", out_dir.display()))?;
    println!("wrote man pages to {}", out_dir.display());
    Ok(())
}
