use anyhow::{Context, Result, bail};
use clap::Parser;
use proposal_ingest_config::{Config, OutputFormat};
use proposal_ingest_engine::{
    PageContent, ParseOptions, TextStyle, blocks_to_typst, nodes_to_typst,
    parse_inline_bold, parse_mixed_content_with, parse_smart_table_with, render_rich_text,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Parser)]
#[command(
    name = "proposal-ingest",
    author,
    version,
    about = "Turn pasted proposal text or editor HTML into structured content"
)]
struct App {
    #[command(subcommand)]
    mode: Mode,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
struct Global {
    /// Output format: json or typst (default from the config file, else json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Config file to use instead of ~/.config/proposal-ingest/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log heuristic decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Mode {
    /// Split pasted plain text into title / plain / list / table blocks
    Blocks(InputArgs),

    /// Parse delimiter-separated text into a 2 or 3 column table
    Table(InputArgs),

    /// Split text into bold and plain segments
    Inline(InputArgs),

    /// Render editor HTML into styled paragraphs and lists
    Render(RenderArgs),

    /// Convert editor HTML into page sections
    Sections(InputArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct InputArgs {
    /// File to read; stdin when omitted or `-`
    input: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// CSS color applied to text without its own color
    #[arg(long)]
    base_color: Option<String>,
}

impl Mode {
    fn input(&self) -> Option<&Path> {
        match self {
            Self::Blocks(args) | Self::Table(args) | Self::Inline(args) | Self::Sections(args) => {
                args.input.as_deref()
            }
            Self::Render(args) => args.input.input.as_deref(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Blocks(_) => "blocks",
            Self::Table(_) => "table",
            Self::Inline(_) => "inline",
            Self::Render(_) => "render",
            Self::Sections(_) => "sections",
        }
    }
}

fn main() -> Result<()> {
    let app = App::parse();
    init_logging(app.global.verbose);

    let config = load_config(app.global.config.as_deref())?;
    let format = app.global.format.unwrap_or(config.output.format);
    let pretty = app.global.pretty || config.output.pretty;

    let text = read_input(app.mode.input())?;
    log::debug!(
        "{} mode: {} byte(s) of input, {format} output",
        app.mode.name(),
        text.len()
    );

    let output = execute(&app.mode, &text, &config.parsing, format, pretty)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Config from `--config`, else the default location. A missing file gives defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let config_path = Config::config_path();
        let loaded = Config::load()
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        return Ok(match loaded {
            Some(config) => {
                log::debug!("Loaded config from {}", config_path.display());
                config
            }
            None => {
                log::debug!("No config at {}, using defaults", config_path.display());
                Config::default()
            }
        });
    };

    let config_path = Config::expand_path(path);
    match Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    {
        Some(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => bail!("Config file not found: {}", config_path.display()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn execute(
    mode: &Mode,
    text: &str,
    options: &ParseOptions,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match (mode, format) {
        (Mode::Blocks(_), OutputFormat::Json) => {
            to_json(&parse_mixed_content_with(text, options), pretty)
        }
        (Mode::Blocks(_), OutputFormat::Typst) => {
            Ok(blocks_to_typst(&parse_mixed_content_with(text, options)))
        }
        (Mode::Render(args), _) => {
            let base = TextStyle {
                color: args.base_color.clone(),
                ..TextStyle::default()
            };
            let nodes = render_rich_text(text, &base);
            match format {
                OutputFormat::Json => to_json(&nodes, pretty),
                OutputFormat::Typst => Ok(nodes_to_typst(&nodes)),
            }
        }
        (_, OutputFormat::Typst) => {
            bail!(
                "typst output is only available for the blocks and render modes, not {}",
                mode.name()
            )
        }
        (Mode::Table(_), OutputFormat::Json) => {
            to_json(&parse_smart_table_with(text, &options.table), pretty)
        }
        (Mode::Inline(_), OutputFormat::Json) => to_json(&parse_inline_bold(text), pretty),
        (Mode::Sections(_), OutputFormat::Json) => {
            let mut page = PageContent::new();
            page.paste_html_with(text, options);
            to_json(page.sections(), pretty)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
