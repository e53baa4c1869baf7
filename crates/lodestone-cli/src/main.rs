use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lodestone_adapt::{adapt_types, merge_and_adapt};
use lodestone_config::{init_tracing, load_for_dir, LodestoneConfig};
use lodestone_metadata::{MetadataStats, SourceMetadata};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "lodestone",
    version,
    about = "Merge class metadata documents and resolve obfuscated names"
)]
struct Cli {
    /// Config file (defaults to `LODESTONE_CONFIG`, then `lodestone.toml` in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge an official-rich and a structure-rich document, then resolve every name
    Merge(MergeArgs),
    /// Resolve names in an already merged document
    Adapt(AdaptArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Where to write the resolved document
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Write the document without indentation
    #[arg(long)]
    compact: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MergeArgs {
    /// Document carrying the official names
    #[arg(long)]
    left: Option<PathBuf>,
    /// Document carrying the structure read from the compiled artifact
    #[arg(long)]
    right: Option<PathBuf>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct AdaptArgs {
    /// Merged document to resolve; output defaults to `<input>.adapted.json`
    input: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Serialize)]
struct Summary {
    output: PathBuf,
    minecraft_version: String,
    #[serde(flatten)]
    stats: MetadataStats,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Merge(args) => {
            let left_path = args.left.unwrap_or_else(|| config.merge.left.clone());
            let right_path = args.right.unwrap_or_else(|| config.merge.right.clone());
            let left = read_document(&left_path)?;
            let right = read_document(&right_path)?;

            let merged = merge_and_adapt(&left, &right).with_context(|| {
                format!(
                    "failed to merge {} with {}",
                    left_path.display(),
                    right_path.display()
                )
            })?;
            let output = args
                .output
                .output
                .clone()
                .unwrap_or_else(|| config.merge.output.clone());
            write_and_report(&merged, &output, &args.output, &config)?;
            Ok(0)
        }
        Command::Adapt(args) => {
            let input = read_document(&args.input)?;
            let adapted = adapt_types(&input)
                .with_context(|| format!("failed to adapt {}", args.input.display()))?;
            let output = match &args.output.output {
                Some(output) => output.clone(),
                None => adapted_path(&args.input),
            };
            write_and_report(&adapted, &output, &args.output, &config)?;
            Ok(0)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<LodestoneConfig> {
    if let Some(path) = explicit {
        return LodestoneConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let (config, _) = load_for_dir(&cwd)?;
    Ok(config)
}

fn read_document(path: &Path) -> Result<SourceMetadata> {
    SourceMetadata::read_from_path(path)
        .with_context(|| format!("failed to load metadata document {}", path.display()))
}

/// `merged.json` becomes `merged.adapted.json`, next to the input.
fn adapted_path(input: &Path) -> PathBuf {
    input.with_extension("adapted.json")
}

fn write_and_report(
    metadata: &SourceMetadata,
    output: &Path,
    args: &OutputArgs,
    config: &LodestoneConfig,
) -> Result<()> {
    let pretty = config.merge.pretty && !args.compact;
    metadata
        .write_to_path(output, pretty)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let summary = Summary {
        output: output.to_path_buf(),
        minecraft_version: metadata.minecraft_version.clone(),
        stats: metadata.stats(),
    };
    print_summary(&summary, args.json)
}

fn print_summary(summary: &Summary, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary)?;
        println!("{out}");
        return Ok(());
    }

    let version = if summary.minecraft_version.is_empty() {
        "unknown version"
    } else {
        summary.minecraft_version.as_str()
    };
    println!("wrote: {} ({version})", summary.output.display());
    println!("  classes: {}", summary.stats.classes);
    println!("  methods: {}", summary.stats.methods);
    println!("  fields: {}", summary.stats.fields);
    println!("  bouncers: {}", summary.stats.bouncers);
    println!("  unresolved: {}", summary.stats.unresolved);
    Ok(())
}
