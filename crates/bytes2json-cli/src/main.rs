use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bytes2json_core::catalog::{self, CATALOG, CATALOG_VERSION, CatalogEntry};
use bytes2json_core::{DecodeError, DecodeOptions, Record, TracingObserver, decode_root_with};
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BYTES2JSON_BUILD_COMMIT"),
    " ",
    env!("BYTES2JSON_BUILD_DATE"),
    ")"
);

const MANIFEST_FILE: &str = "manifest.json";
const ITEM_TABLE_PREFIX: &str = "itemsOptimizeCatItems";
const MERGED_ITEMS_FILE: &str = "clothItems.json";

#[derive(Parser, Debug)]
#[command(name = "bytes2json")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode exported positional config tables (*.bytes) into JSON.",
    long_about = None,
    after_help = "Examples:\n  bytes2json decode buff.bytes -o buff.json\n  bytes2json decode table.bin --schema petBook --stdout --pretty\n  bytes2json batch ./bytes -o ./json\n  bytes2json merge-items ./json\n  bytes2json schemas"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one table into a JSON document.
    #[command(
        after_help = "Examples:\n  bytes2json decode buff.bytes -o buff.json\n  bytes2json decode table.bin --schema petBook --stdout"
    )]
    Decode {
        /// Path to a .bytes file
        input: PathBuf,

        /// Schema name; defaults to the input file stem
        #[arg(long)]
        schema: Option<String>,

        /// Output JSON path
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Fail if bytes remain after the root record
        #[arg(long)]
        strict: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Decode every known table in a directory.
    #[command(after_help = "Examples:\n  bytes2json batch ./bytes -o ./json --pretty")]
    Batch {
        /// Directory containing <name>.bytes files
        input_dir: PathBuf,

        /// Directory receiving <name>.json files and the batch manifest
        #[arg(short = 'o', long = "output")]
        out_dir: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Fail a table if bytes remain after its root record
        #[arg(long)]
        strict: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Merge the decoded item tables into one list sorted by ID.
    #[command(after_help = "Examples:\n  bytes2json merge-items ./json\n  bytes2json merge-items ./json -o items.json")]
    MergeItems {
        /// Directory containing itemsOptimizeCatItems*.json files
        json_dir: PathBuf,

        /// Output JSON path (defaults to <JSON_DIR>/clothItems.json)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// List the known table schemas.
    Schemas {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            input,
            schema,
            output,
            stdout,
            pretty,
            compact,
            strict,
            quiet,
        } => cmd_decode(DecodeArgs {
            input,
            schema,
            output,
            stdout,
            pretty,
            compact,
            strict,
            quiet,
        }),
        Commands::Batch {
            input_dir,
            out_dir,
            pretty,
            strict,
            quiet,
        } => cmd_batch(&input_dir, &out_dir, pretty, strict, quiet),
        Commands::MergeItems {
            json_dir,
            output,
            quiet,
        } => cmd_merge_items(&json_dir, output, quiet),
        Commands::Schemas { json } => cmd_schemas(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Debug)]
struct DecodeArgs {
    input: PathBuf,
    schema: Option<String>,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    strict: bool,
    quiet: bool,
}

fn cmd_decode(args: DecodeArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input)?;
    let entry = resolve_schema(args.schema.as_deref(), &resolved_input)?;

    let output = if args.stdout {
        None
    } else {
        Some(args.output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?)
    };
    if let Some(output_path) = output.as_ref() {
        ensure_distinct_paths(&resolved_input, output_path)?;
    }

    let record = decode_file(&resolved_input, entry, decode_options(args.strict))?;
    let json = serialize_json(&record, args.pretty, args.compact)?;

    let Some(output) = output else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    if !args.quiet {
        eprintln!("OK: {} written -> {}", entry.name, output.display());
    }
    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    out_dir: &Path,
    pretty: bool,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if !input_dir.is_dir() {
        return Err(CliError::new(
            format!("input directory not found: {}", input_dir.display()),
            Some("pass a directory containing <name>.bytes files".to_string()),
        ));
    }
    let inputs = collect_batch_inputs(input_dir)?;
    if inputs.is_empty() {
        return Err(CliError::new(
            format!("no .bytes files in {}", input_dir.display()),
            Some("files must be named after a schema, e.g. buff.bytes".to_string()),
        ));
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let options = decode_options(strict);
    let mut results = Vec::new();
    for input in inputs {
        let Some(entry) = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(catalog::lookup)
        else {
            warn!(input = %input.display(), "no schema for file, skipping");
            if !quiet {
                eprintln!(
                    "warning: skipping {}: no schema matches its name",
                    input.display()
                );
            }
            continue;
        };

        let output = out_dir.join(format!("{}.json", entry.name));
        let outcome = decode_file(&input, entry, options)
            .and_then(|record| serialize_json(&record, pretty, false))
            .and_then(|json| {
                fs::write(&output, json)
                    .with_context(|| format!("Failed to write output: {}", output.display()))
                    .map_err(CliError::from)
            });

        match outcome {
            Ok(()) => {
                if !quiet {
                    eprintln!("OK: {} written -> {}", entry.name, output.display());
                }
                results.push(BatchResult::ok(entry, &input, &output));
            }
            Err(err) => {
                eprintln!("error: {}: {}", entry.name, err.message);
                results.push(BatchResult::failed(entry, &input, err.message));
            }
        }
    }

    let failed = results.iter().filter(|result| result.error.is_some()).count();
    let manifest = BatchManifest::new(results);
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let manifest_json = serialize_json(&manifest, true, false)?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    let total = manifest.results.len();
    info!(total, failed, "batch finished");
    if failed > 0 {
        return Err(CliError::new(
            format!("{} of {} tables failed to decode", failed, total),
            Some(format!("see {} for details", manifest_path.display())),
        ));
    }
    if !quiet {
        eprintln!("OK: {} tables decoded -> {}", total, out_dir.display());
    }
    Ok(())
}

fn cmd_merge_items(json_dir: &Path, output: Option<PathBuf>, quiet: bool) -> Result<(), CliError> {
    if !json_dir.is_dir() {
        return Err(CliError::new(
            format!("JSON directory not found: {}", json_dir.display()),
            Some("pass the output directory of `bytes2json batch`".to_string()),
        ));
    }
    let tables = collect_item_tables(json_dir)?;
    if tables.is_empty() {
        return Err(CliError::new(
            format!("no {}*.json files in {}", ITEM_TABLE_PREFIX, json_dir.display()),
            Some("run `bytes2json batch` on the item tables first".to_string()),
        ));
    }

    let mut items = Vec::new();
    for table in &tables {
        let text = fs::read_to_string(table)
            .with_context(|| format!("Failed to read {}", table.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON: {}", table.display()))?;
        match value {
            serde_json::Value::Object(mut object) => match object.remove("items") {
                Some(serde_json::Value::Array(table_items)) => {
                    debug!(table = %table.display(), items = table_items.len(), "merging");
                    items.extend(table_items);
                }
                _ => warn_no_items(table, quiet),
            },
            _ => warn_no_items(table, quiet),
        }
    }
    items.sort_by_key(|item| item.get("ID").and_then(serde_json::Value::as_i64));

    let output = output.unwrap_or_else(|| json_dir.join(MERGED_ITEMS_FILE));
    let count = items.len();
    let json = serialize_json(&MergedItems { items }, true, false)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    if !quiet {
        eprintln!(
            "OK: merged {} items from {} tables -> {}",
            count,
            tables.len(),
            output.display()
        );
    }
    Ok(())
}

fn warn_no_items(table: &Path, quiet: bool) {
    warn!(table = %table.display(), "no items array, skipping");
    if !quiet {
        eprintln!("warning: skipping {}: no items array", table.display());
    }
}

fn cmd_schemas(json: bool) -> Result<(), CliError> {
    let listing = SchemaListing::new();
    if json {
        println!("{}", serialize_json(&listing, true, false)?);
        return Ok(());
    }

    let width = CATALOG
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    println!("catalog version {}", listing.catalog_version);
    for schema in &listing.schemas {
        println!(
            "  {:<width$}  {}",
            schema.name,
            schema.description,
            width = width
        );
    }
    Ok(())
}

fn decode_options(strict: bool) -> DecodeOptions {
    if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    }
}

fn decode_file(
    input: &Path,
    entry: &CatalogEntry,
    options: DecodeOptions,
) -> Result<Record, CliError> {
    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    info!(schema = entry.name, bytes = bytes.len(), "decoding");

    let mut observer = TracingObserver::new();
    let record = decode_root_with(&bytes, entry.root, options, &mut observer)
        .map_err(|err| decode_failure(input, entry, &err))?;
    debug!(
        schema = entry.name,
        records = observer.records(),
        sequences = observer.sequences(),
        depth = record.depth(),
        "decoded"
    );
    Ok(record)
}

fn decode_failure(input: &Path, entry: &CatalogEntry, err: &DecodeError) -> CliError {
    let hint = match err {
        DecodeError::TrailingBytes { .. } => "drop --strict to tolerate trailing bytes".to_string(),
        DecodeError::Wire { .. } => format!(
            "check that {} is a '{}' table (see `bytes2json schemas`)",
            input.display(),
            entry.name
        ),
    };
    CliError::new(
        format!(
            "failed to decode {} ({}): {}",
            input.display(),
            err.kind_name(),
            err
        ),
        Some(hint),
    )
}

fn serialize_json<T: Serialize>(value: &T, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn resolve_schema(name: Option<&str>, input: &Path) -> Result<&'static CatalogEntry, CliError> {
    let name = match name {
        Some(name) => name.to_string(),
        None => input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                CliError::new(
                    format!("cannot infer a schema from {}", input.display()),
                    Some("pass --schema NAME".to_string()),
                )
            })?,
    };
    catalog::lookup(&name).ok_or_else(|| {
        CliError::new(
            format!("unknown schema '{}'", name),
            Some("run `bytes2json schemas` to list known schemas, then pass --schema".to_string()),
        )
    })
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = output
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose();
    // A missing output directory is created later, so it cannot hold the input.
    let Ok(Some(output_dir)) = output_dir else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path"))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass an exported .bytes file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use `bytes2json batch` for directories".to_string()),
        ));
    }
    Ok(())
}

fn collect_batch_inputs(input_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    list_files(input_dir, "*.bytes")
}

fn collect_item_tables(json_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    list_files(json_dir, &format!("{}*.json", ITEM_TABLE_PREFIX))
}

/// Files in `dir` matching `file_pattern`, sorted by path.
fn list_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, CliError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/{}", escaped, file_pattern);
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid directory '{}'", dir.display()),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut inputs = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("failed to list {}", dir.display()),
                Some(err.to_string()),
            )
        })?;
        if path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("use `bytes2json batch` to decode several tables".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

#[derive(Debug, Serialize)]
struct BatchManifest {
    tool: &'static str,
    version: &'static str,
    build_commit: &'static str,
    catalog_version: u32,
    generated_at: String,
    results: Vec<BatchResult>,
}

impl BatchManifest {
    fn new(results: Vec<BatchResult>) -> Self {
        Self {
            tool: "bytes2json",
            version: env!("CARGO_PKG_VERSION"),
            build_commit: env!("BYTES2JSON_BUILD_COMMIT_FULL"),
            catalog_version: CATALOG_VERSION,
            generated_at: now_rfc3339(),
            results,
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchResult {
    schema: &'static str,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchResult {
    fn ok(entry: &CatalogEntry, input: &Path, output: &Path) -> Self {
        Self {
            schema: entry.name,
            input: input.display().to_string(),
            output: Some(output.display().to_string()),
            error: None,
        }
    }

    fn failed(entry: &CatalogEntry, input: &Path, error: String) -> Self {
        Self {
            schema: entry.name,
            input: input.display().to_string(),
            output: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct MergedItems {
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct SchemaListing {
    catalog_version: u32,
    schemas: Vec<SchemaSummary>,
}

#[derive(Debug, Serialize)]
struct SchemaSummary {
    name: &'static str,
    description: &'static str,
    root: &'static str,
    fields: Vec<&'static str>,
    min_wire_size: usize,
}

impl SchemaListing {
    fn new() -> Self {
        let schemas = CATALOG
            .iter()
            .map(|entry| SchemaSummary {
                name: entry.name,
                description: entry.description,
                root: entry.root.name,
                fields: entry.root.fields.iter().map(|field| field.name).collect(),
                min_wire_size: entry.root.min_wire_size(),
            })
            .collect();
        Self {
            catalog_version: CATALOG_VERSION,
            schemas,
        }
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
