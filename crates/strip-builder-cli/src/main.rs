use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use strip_builder_core::prelude::*;
use tracing::{error, info};

/// Exit status when the input root does not exist.
const EXIT_MISSING_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "strip-builder",
    about = "Combine folders of numbered frame PNGs into horizontal sprite strips",
    version,
    author
)]
struct Cli {
    // Input/Output
    /// Directory containing one subdirectory per animation (e.g. Animations/player)
    #[arg(help_heading = "Input/Output")]
    input_dir: PathBuf,
    /// Directory to write strip PNGs to (e.g. Content/)
    #[arg(help_heading = "Input/Output")]
    output_dir: PathBuf,
    /// Content.mgcb to append entries for new strips to
    #[arg(long, visible_alias = "manifest", help_heading = "Input/Output")]
    mgcb: Option<PathBuf>,
    /// Prefix for output file names (e.g. 'player_' -> player_idle.png)
    #[arg(long, default_value = "", help_heading = "Input/Output")]
    prefix: String,
    /// Comma-separated animation names to process (default: all)
    #[arg(long, help_heading = "Input/Output")]
    only: Option<String>,
    /// Exclude animations whose name matches a glob (repeatable)
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,
    /// YAML config file path (fields override the matching options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Export
    /// Write a JSON report of produced strips (frame sizes, counts) to this file
    #[arg(long, help_heading = "Export")]
    export_report: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Dry run: composite and report but write neither strips nor the manifest (--export-report is still written)
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,

    // Logging/UX
    /// Show a progress spinner (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(StripError::MissingInputDir(p)) = e.downcast_ref::<StripError>() {
                eprintln!("ERROR: Input directory not found: {}", p.display());
                return ExitCode::from(EXIT_MISSING_INPUT);
            }
            error!(error = %e, "strip build failed");
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = load_config(cli)?;

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    if !cli.input_dir.is_dir() {
        return Err(StripError::MissingInputDir(cli.input_dir.clone()).into());
    }
    cfg.validate()?;
    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("create output_dir {}", cli.output_dir.display()))?;

    let bar = if cli.progress && !cli.quiet {
        let b = ProgressBar::new_spinner();
        b.set_style(
            ProgressStyle::with_template("{spinner:.green} {pos} animations [{elapsed_precise}] {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Some(b)
    } else {
        None
    };
    let emit = |line: String| match &bar {
        Some(b) => b.println(line),
        None => println!("{}", line),
    };

    let report = run_batch(&cli.input_dir, &cli.output_dir, &cfg, |ev| {
        match ev {
            BatchEvent::Skipped(name) => {
                emit(format!("  SKIP {:<30}  (no PNG frames found)", name));
            }
            BatchEvent::Built(s) => emit(format!(
                "  OK   {:<30}  {:>3} frames  ({}x{})  -> {}",
                s.name, s.frame_count, s.width, s.height, s.file_name
            )),
        }
        if let Some(b) = &bar {
            b.set_message(match ev {
                BatchEvent::Skipped(name) => name.clone(),
                BatchEvent::Built(s) => s.name.clone(),
            });
            b.inc(1);
        }
    })?;
    if let Some(b) = &bar {
        b.finish_and_clear();
    }

    println!(
        "\nGenerated {} strips ({} total frames) in {}",
        report.strips.len(),
        report.total_frames,
        cli.output_dir.display()
    );
    let stats = report.stats();
    info!(
        strips = stats.num_strips,
        skipped = stats.num_skipped,
        frames = stats.total_frames,
        total_area = stats.total_area,
        dry_run = cfg.dry_run,
        "stats"
    );

    if let (Some(mgcb), Some(added)) = (&cfg.manifest, &report.manifest_added) {
        print_manifest_result(mgcb, added);
    }

    if let Some(report_path) = &cli.export_report {
        // written in dry runs too; only strips and the manifest are suppressed
        strip_builder_core::write_json_report(report_path, &report)
            .with_context(|| format!("write {}", report_path.display()))?;
        info!(?report_path, "report exported");
    }
    Ok(())
}

fn print_manifest_result(mgcb: &Path, added: &[String]) {
    if added.is_empty() {
        let name = mgcb
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| mgcb.display().to_string());
        println!("{} already up to date.", name);
        return;
    }
    println!("Added {} new entries to {}:", added.len(), mgcb.display());
    for f in added {
        println!("  + {}", f);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BatchConfig> {
    let mut builder = BatchConfig::builder()
        .prefix(cli.prefix.clone())
        .manifest(cli.mgcb.clone())
        .dry_run(cli.dry_run);
    if let Some(only) = &cli.only {
        builder = builder.only(parse_only_list(only));
    }
    for pat in &cli.exclude {
        builder = builder.exclude(pat.clone());
    }
    let cfg = builder.build();

    // Config file sets batch options en bloc
    let Some(path) = &cli.config else {
        return Ok(cfg);
    };
    let file = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let y: YamlConfig =
        serde_yaml::from_str(&file).with_context(|| format!("parse {}", path.display()))?;
    Ok(y.into_batch_config(cfg))
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    prefix: Option<String>,
    only: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    extension: Option<String>,
    mgcb: Option<PathBuf>,
    dry_run: Option<bool>,
}

impl YamlConfig {
    fn into_batch_config(self, mut cfg: BatchConfig) -> BatchConfig {
        if let Some(v) = self.prefix {
            cfg.prefix = v;
        }
        if let Some(v) = self.only {
            cfg.only = if v.is_empty() {
                None
            } else {
                Some(v.into_iter().collect())
            };
        }
        if let Some(v) = self.exclude {
            cfg.exclude = v;
        }
        if let Some(v) = self.extension {
            cfg.extension = v;
        }
        if let Some(v) = self.mgcb {
            cfg.manifest = Some(v);
        }
        if let Some(v) = self.dry_run {
            cfg.dry_run = v;
        }
        cfg
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "warn".into(),
            1 => "info".into(),
            2 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
