use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outline_blocks_config::Config;
use outline_blocks_engine::{OutlineOptions, Serializer, io, normalize_with};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Write, stdin, stdout},
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(
    name = "outline-blocks",
    version,
    about = "Convert outline text to block JSON and back"
)]
struct Cli {
    /// Config file (defaults to ~/.config/outline-blocks/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse outline lines into a JSON block forest
    Parse {
        /// Outline file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Strip indentation and bullet markers from block content
        #[arg(long)]
        normalize: bool,
    },

    /// Render a JSON block forest back to outline text
    Render {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;
    log::debug!("using {config:?}");
    let options = outline_options(&config);

    let output = match cli.command {
        Command::Parse { file, normalize } => {
            parse_command(open_lines(file.as_deref())?, options, normalize)?
        }
        Command::Render { file } => render_command(open_input(file.as_deref())?, options)?,
    };

    let mut out = stdout().lock();
    writeln!(out, "{output}").context("writing output")?;
    Ok(())
}

fn outline_options(config: &Config) -> OutlineOptions {
    OutlineOptions {
        indent_width: config.indent_width,
        keep_collapsed: config.keep_collapsed,
    }
}

fn parse_command<R: BufRead>(input: R, options: OutlineOptions, normalize: bool) -> Result<String> {
    let forest = io::parse_reader(input, options).context("reading outline")?;
    log::info!("parsed {} root blocks", forest.len());

    let forest = if normalize {
        normalize_with(&forest, options)
    } else {
        forest
    };
    Ok(io::forest_to_json(&forest)?)
}

fn render_command<R: Read>(input: R, options: OutlineOptions) -> Result<String> {
    let forest = io::read_forest_json(input).context("reading block JSON")?;
    Ok(Serializer::with_options(options).to_text(&forest))
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(stdin().lock())),
    }
}

fn open_lines(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(Box::new(BufReader::new(open_input(path)?)))
}
