mod error_formatter;
mod formatter;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser, Subcommand};
use dryvac::serializers::{write_alexa, write_dialogflow};
use dryvac::{Engine, Expander, ExpansionOptions, Slot, Template, VariableTable};
use formatter::Formatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "dryvac")]
#[command(about = "Don't repeat yourself when writing voice assistant utterances.")]
#[command(
    long_about = "dryvac expands compact utterance templates into every concrete sample sentence.\nThe CLI compiles .dry files into Alexa and Dialogflow models, expands single templates, or lists what a project contains."
)]
#[command(version)]
struct Cli {
    /// Log expansion steps (sets the default filter to dryvac=debug; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile .dry sources into platform models
    ///
    /// Loads every source, expands all intents and entities, reports
    /// diagnostics, and writes the requested exports. Output folders must
    /// already exist.
    #[command(group(
        ArgGroup::new("output")
            .required(true)
            .multiple(true)
            .args(["alexa", "dialogflow"])
    ))]
    Build {
        /// Source files, or directories searched for .dry files
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        /// Write an Alexa interaction model into this folder
        #[arg(short = 'a', long, value_name = "DIR")]
        alexa: Option<PathBuf>,
        /// Write a Dialogflow agent's intents/ and entities/ into this folder
        #[arg(short = 'd', long, value_name = "DIR")]
        dialogflow: Option<PathBuf>,
        /// Keep sentences in expansion order instead of sorting them
        #[arg(long)]
        no_order: bool,
    },
    /// Expand a single template and print one sentence per line
    ///
    /// Examples:
    ///   dryvac expand "[please] (start|stop) the $thing" --var thing="music|radio"
    ///   dryvac expand "play <song>" --slot song
    Expand {
        /// Template text
        template: String,
        /// Variable definitions (format: name=definition)
        #[arg(long = "var", value_name = "NAME=DEFINITION")]
        vars: Vec<String>,
        /// Declared slots; when given, placeholders are checked against them
        #[arg(long = "slot", value_name = "NAME")]
        slots: Vec<String>,
        /// Keep sentences in expansion order instead of sorting them
        #[arg(long)]
        no_order: bool,
    },
    /// List intents and entities with their template, slot and sentence counts
    List {
        /// Source files, or directories searched for .dry files
        #[arg(default_value = ".")]
        sources: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Build {
            sources,
            alexa,
            dialogflow,
            no_order,
        } => build_command(sources, alexa.as_deref(), dialogflow.as_deref(), *no_order),
        Commands::Expand {
            template,
            vars,
            slots,
            no_order,
        } => expand_command(template, vars, slots, *no_order),
        Commands::List { sources } => list_command(sources),
    };

    if let Err(e) = result {
        if let Some(dry_err) = e.downcast_ref::<dryvac::DryError>() {
            eprintln!("{}", error_formatter::format_error(dry_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "dryvac=debug" } else { "dryvac=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn build_command(
    sources: &[PathBuf],
    alexa: Option<&Path>,
    dialogflow: Option<&Path>,
    no_order: bool,
) -> Result<()> {
    let mut engine = Engine::new();
    let file_count = load_sources(&mut engine, sources)?;

    let compiled = engine.compile(&ExpansionOptions { sort: !no_order });

    let mut written = Vec::new();
    if let Some(dir) = alexa {
        written.push(write_alexa(&compiled, dir)?);
    }
    if let Some(dir) = dialogflow {
        written.extend(write_dialogflow(&compiled, dir)?);
    }
    info!("Wrote {} output files", written.len());

    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_build_summary(file_count, &compiled, &written)
    );

    Ok(())
}

fn expand_command(template: &str, vars: &[String], slots: &[String], no_order: bool) -> Result<()> {
    let variables = parse_vars(vars)?;
    let slots: Vec<Slot> = slots.iter().map(Slot::new).collect();
    let slot_table = if slots.is_empty() {
        None
    } else {
        Some(slots.as_slice())
    };

    let mut expansion =
        Expander::new().expand_template(&Template::new(template), &variables, slot_table);
    if !no_order {
        dryvac::sort_sentences(&mut expansion.sentences);
    }

    let formatter = Formatter::default();
    print!("{}", formatter.format_sentences(&expansion.sentences));

    Ok(())
}

fn list_command(sources: &[PathBuf]) -> Result<()> {
    let mut engine = Engine::new();
    let file_count = load_sources(&mut engine, sources)?;

    let compiled = engine.compile(&ExpansionOptions::default());
    info!("Listing {} collections", engine.list_collections().len());
    let rows: Vec<_> = compiled
        .intents
        .iter()
        .chain(compiled.entities.iter())
        .filter_map(|expanded| {
            engine
                .get_collection(expanded.kind, &expanded.name)
                .map(|collection| (collection, expanded))
        })
        .collect();

    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_workspace_summary(file_count, engine.list_sources(), &rows)
    );

    Ok(())
}

/// Load explicit files as given, and every `.dry` file below directories
fn load_sources(engine: &mut Engine, sources: &[PathBuf]) -> Result<usize> {
    let mut file_count = 0;
    for source in sources {
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            let explicit = entry.depth() == 0;
            let is_dry = path.extension().and_then(|s| s.to_str()) == Some("dry");
            if entry.file_type().is_file() && (explicit || is_dry) {
                let source_id = path.to_string_lossy().to_string();
                info!("Reading {}", source_id);
                engine.add_dry_code(&fs::read_to_string(path)?, &source_id)?;
                file_count += 1;
            }
        }
    }

    Ok(file_count)
}

/// Parse "name=definition" pairs into a variable table
fn parse_vars(vars: &[String]) -> Result<VariableTable> {
    let mut variables = VariableTable::new();
    for var in vars {
        let Some((name, definition)) = var.split_once('=') else {
            bail!("Invalid variable '{}': expected name=definition", var);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid variable '{}': name is empty", var);
        }
        variables.define(name, definition.trim());
    }
    Ok(variables)
}
