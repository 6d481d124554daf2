//! `bomref` - convert Book of Mormon references between RLDS and LDS numbering.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bomref::config::Config;
use bomref::{BookCatalog, Converter, Denomination, Style};

#[derive(Parser)]
#[command(name = "bomref", version, about = "Convert Book of Mormon references between RLDS and LDS numbering")]
struct Cli {
    /// Verse alignment file (overrides BOMREF_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Denomination for references without a tag
    #[arg(long, global = true, value_parser = parse_denomination)]
    denomination: Option<Denomination>,

    /// Book name style for RLDS output
    #[arg(long, global = true, value_parser = parse_style)]
    rlds_style: Option<Style>,

    /// Book name style for LDS output
    #[arg(long, global = true, value_parser = parse_style)]
    lds_style: Option<Style>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert each reference, carrying the active denomination forward
    Convert {
        /// References such as "(RLDS) 1 N 3:4-6" or "Alma 32:21"
        #[arg(required = true)]
        references: Vec<String>,

        /// Print one JSON record per reference
        #[arg(long)]
        json: bool,
    },

    /// Read references from standard input until a blank line
    Repl,

    /// Rewrite the book names in TEXT into another style
    Restyle {
        /// Text containing book names
        text: String,

        /// Target style, e.g. "LDS 1982"
        #[arg(long, value_parser = parse_style)]
        style: Style,
    },

    /// List every style with its book spellings
    Styles,
}

/// One converted reference, as printed by `convert --json`.
#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    denomination: Denomination,
    output: Option<String>,
    error: Option<String>,
}

fn parse_style(text: &str) -> Result<Style, String> {
    Style::from_name(text).ok_or_else(|| {
        let names: Vec<&str> = Style::all().iter().map(|s| s.name()).collect();
        format!("unknown style {text:?}; expected one of: {}", names.join(", "))
    })
}

fn parse_denomination(text: &str) -> Result<Denomination, String> {
    Denomination::from_text(text).ok_or_else(|| format!("unknown denomination {text:?}; expected RLDS or LDS"))
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bomref=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(path) = cli.data {
        config.data_path = Some(path);
    }
    if let Some(den) = cli.denomination {
        config.denomination = den;
    }
    if let Some(style) = cli.rlds_style {
        config.rlds_style = style;
    }
    if let Some(style) = cli.lds_style {
        config.lds_style = style;
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Convert { references, json } => convert(&config, &references, json),
        Commands::Repl => repl(&config),
        Commands::Restyle { text, style } => {
            println!("{}", BookCatalog::new().rewrite(&text, style));
            Ok(())
        }
        Commands::Styles => {
            list_styles(&config);
            Ok(())
        }
    }
}

fn open(config: &Config) -> anyhow::Result<Converter> {
    Converter::from_config(config).context("Failed to load the verse alignment table")
}

fn convert(config: &Config, references: &[String], json: bool) -> anyhow::Result<()> {
    let mut converter = open(config)?;
    let mut failed = 0usize;

    for input in references {
        let result = converter.submit(input);
        if json {
            let record = Record {
                input,
                denomination: converter.denomination(),
                output: result.as_ref().ok().cloned(),
                error: result.as_ref().err().map(ToString::to_string),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            match &result {
                Ok(output) => println!("{input} => {output}"),
                Err(e) => eprintln!("{input}: {e}"),
            }
        }
        if result.is_err() {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} references could not be converted", references.len());
    }
    Ok(())
}

fn repl(config: &Config) -> anyhow::Result<()> {
    let mut converter = open(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "Reference {}", converter.prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        match converter.submit(&line) {
            Ok(output) => writeln!(stdout, "=> {output}")?,
            Err(e) if e.is_invalid_reference() => {
                writeln!(stdout, "One or more references is invalid. No translation was made.")?;
                writeln!(stdout, "  {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn list_styles(config: &Config) {
    println!("{} {} book name styles", config.app_name(), config.app_version());
    let catalog = BookCatalog::new();
    for &style in Style::all() {
        let names: Vec<&str> = (1..=bomref::constants::books::BOOK_COUNT)
            .filter_map(|book| catalog.spell(book, style))
            .collect();
        println!("{:<11} {}", style.name(), names.join(", "));
    }
}
