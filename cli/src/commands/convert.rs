use crate::commands::validators;
use bru_lib::core::logger::Logger;
use bru_lib::{to_json, BruConverter, BruError, ConvertConfig};
use chrono::{DateTime, Local};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const FULL_COLLECTION_PREFIX: &str = "FullCollection";

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(
        short = 'i',
        long = "input",
        default_value = ".",
        help = "Root directory of the Bruno collection",
        value_parser = validators::validate_path_exists
    )]
    pub input: String,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output file (default: <FullCollection|folders>-<timestamp>.json)"
    )]
    pub output: Option<String>,

    #[arg(
        short = 'f',
        long = "folders",
        value_delimiter = ',',
        help = "Comma-separated top-level folders to include (e.g. Core,Users)",
        value_parser = validators::validate_entry_name
    )]
    pub folders: Vec<String>,

    #[arg(
        short = 'r',
        long = "replace",
        value_name = "KEY=VALUE",
        help = "Collection variable to set (can be repeated)",
        value_parser = validators::validate_replacement
    )]
    pub replace: Vec<String>,

    #[arg(
        long = "remove",
        value_name = "NAME",
        help = "Drop requests using {{NAME}} in URL, body or auth (can be repeated)",
        value_parser = validators::validate_variable_name
    )]
    pub remove: Vec<String>,

    #[arg(
        long = "ignore",
        value_name = "PATTERN",
        help = "Skip requests whose name contains PATTERN (can be repeated)"
    )]
    pub ignore: Vec<String>,

    #[arg(
        short = 'e',
        long = "env",
        value_name = "NAME",
        help = "Load variables from environments/<NAME>.bru",
        value_parser = validators::validate_entry_name
    )]
    pub env: Option<String>,

    #[arg(short = 'k', long = "keep-folders", help = "Keep the folder structure")]
    pub keep_folders: bool,

    #[arg(short = 'v', long = "verbose", help = "Report scanned folders and skipped requests")]
    pub verbose: bool,
}

pub fn execute_convert(args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    Logger::debug(&format!("Starting conversion with config: {config:?}"));

    let collection = BruConverter::new(config).run()?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_name(&args.folders, &Local::now()));
    let rendered = to_json(&collection)?;
    fs::write(&output, rendered).map_err(|source| BruError::FileWrite {
        path: output.clone(),
        source,
    })?;

    println!(
        "Exported {} request(s) to {output}",
        collection.request_count()
    );
    println!("Conversion completed successfully!");
    Ok(())
}

fn build_config(args: &ConvertArgs) -> Result<ConvertConfig, Box<dyn std::error::Error>> {
    let replace = args
        .replace
        .iter()
        .map(|raw| parse_replacement(raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ConvertConfig {
        input: PathBuf::from(&args.input),
        folders: args.folders.clone(),
        keep_folders: args.keep_folders,
        ignore: args.ignore.clone(),
        remove: args.remove.clone(),
        replace,
        environment: args.env.clone(),
        verbose: args.verbose,
    })
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("Invalid replacement '{raw}': expected KEY=VALUE"))
}

/// `<prefix>-<YYYY-MM-DD-HHMMSS>.json`, prefixed by the selected folder names
/// joined together, or `FullCollection` when converting everything.
pub fn default_output_name(folders: &[String], now: &DateTime<Local>) -> String {
    let prefix = if folders.is_empty() {
        FULL_COLLECTION_PREFIX.to_string()
    } else {
        folders.concat()
    };
    format!("{prefix}-{}.json", now.format("%Y-%m-%d-%H%M%S"))
}
