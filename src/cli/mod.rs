// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case.
// All pipeline logic lives in Layer 2 and below.
//
// Two commands are supported:
//   1. `extract` — unpack data_chunks_<N>.zip (also the default)
//   2. `load`    — load chunk files into a dataset and batch it
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, LoadArgs};

use crate::application::extract_use_case::ExtractConfig;

#[derive(Parser, Debug)]
#[command(
    name = "circuit-data-prep",
    version,
    about = "Extract circuit dataset shards and load them into a batched dataset."
)]
pub struct Cli {
    /// Hide progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// The stage to run; extraction when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let show_progress = !self.no_progress;

        match self.command {
            None => run_extract(ExtractConfig { show_progress, ..ExtractConfig::default() }),
            Some(Commands::Extract(args)) => run_extract(args.into_config(show_progress)),
            Some(Commands::Load(args))    => run_load(args, show_progress),
        }
    }
}

/// Handles `extract` and the bare invocation.
fn run_extract(config: ExtractConfig) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let summary = ExtractUseCase::new(config).execute()?;

    // The tally itself is logged by the extractor; list what needs a re-download
    for failed in summary.failures() {
        if let Err(reason) = &failed.result {
            println!("Failed: {} ({})", failed.archive, reason);
        }
    }
    Ok(())
}

/// Handles `load`.
fn run_load(args: LoadArgs, show_progress: bool) -> Result<()> {
    use crate::application::load_use_case::LoadUseCase;

    tracing::info!("Loading chunk files from: {}", args.data_dir.display());

    let report = LoadUseCase::new(args.into_config(show_progress)).execute()?;

    println!("Samples: {}", report.samples);
    println!("Batches: {}", report.batches);
    if let Some([x, e, y, mask]) = report.first_batch_dims {
        println!("First batch: X {x:?}, E {e:?}, Y {y:?}, node_mask {mask:?}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bare_invocation_means_extract() {
        let cli = Cli::try_parse_from(["circuit-data-prep"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_progress);
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["circuit-data-prep", "extract"]).unwrap();
        match cli.command {
            Some(Commands::Extract(ExtractArgs { source_dir, target_dir })) => {
                assert_eq!(source_dir, PathBuf::from("."));
                assert_eq!(target_dir, PathBuf::from("unzipped_data"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_load_flags() {
        let cli = Cli::try_parse_from([
            "circuit-data-prep", "load", "--data-dir", "out", "--batch-size", "8",
            "--shuffle", "42", "--no-progress",
        ])
        .unwrap();
        assert!(cli.no_progress);

        let Some(Commands::Load(args)) = cli.command else {
            panic!("expected load");
        };
        let cfg = args.into_config(false);
        assert_eq!(cfg.data_dir, PathBuf::from("out"));
        assert_eq!(cfg.batch_size, 8);
        assert_eq!(cfg.shuffle_seed, Some(42));
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let res = Cli::try_parse_from(["circuit-data-prep", "load", "--batch-size", "0"]);
        assert!(res.is_err());

        let res = Cli::try_parse_from(["circuit-data-prep", "load", "--batch-size", "many"]);
        assert!(res.is_err());
    }
}
