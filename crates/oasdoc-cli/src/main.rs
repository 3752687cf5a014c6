use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use oasdoc_core::DocumentSink;
use oasdoc_core::assemble::convert_document;
use oasdoc_core::config::{
    self, CONFIG_FILE_NAME, ConvertOptions, OasdocConfig, OutputFormat, SourceFormat,
};
use oasdoc_core::parse;
use oasdoc_confluence::ConfluenceSink;
use oasdoc_markdown::MarkdownSink;

#[derive(Parser)]
#[command(name = "oasdoc", about = "Swagger 2.0 documentation generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an API document into readable documentation
    Convert {
        /// Path to the API document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output markup dialect
        #[arg(short, long)]
        format: Option<FormatArg>,

        /// Emit a table of contents before the operation details
        #[arg(long)]
        toc: bool,
    },

    /// Validate an API document
    Validate {
        /// Path to the API document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new oasdoc configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Confluence,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Confluence => OutputFormat::Confluence,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            toc,
        } => cmd_convert(input, output, format, toc),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oasdoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OasdocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Pick the source encoding from the file extension; anything that isn't
/// `.json` is treated as YAML.
fn source_format(path: &Path) -> SourceFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => SourceFormat::Json,
        _ => SourceFormat::Yaml,
    }
}

/// Run a conversion through the sink matching the chosen format and return
/// the rendered document.
fn render(
    content: &str,
    format: OutputFormat,
    source: SourceFormat,
    options: &ConvertOptions,
) -> Result<String> {
    match format {
        OutputFormat::Markdown => {
            let mut sink = MarkdownSink::new();
            convert_document(content, source, options, &mut sink)?;
            Ok(sink.into_output())
        }
        OutputFormat::Confluence => {
            let mut sink = ConfluenceSink::new();
            convert_document(content, source, options, &mut sink)?;
            Ok(sink.into_output())
        }
    }
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
    toc: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.or_else(|| cfg.output.as_ref().map(PathBuf::from));
    let format = format.map(OutputFormat::from).unwrap_or(cfg.format);

    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let options = ConvertOptions {
        toc: toc || cfg.toc,
        method_path: None,
    };

    log::info!("converting {} to {}", input.display(), format);
    let rendered = render(&content, format, source_format(&input), &options)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let doc = match source_format(input) {
        SourceFormat::Json => parse::from_json(&content)?,
        SourceFormat::Yaml => parse::from_yaml(&content)?,
    };

    eprintln!(
        "OK: {} v{} ({} path(s), {} definition(s))",
        doc.info.title,
        doc.info.version,
        doc.paths.len(),
        doc.definitions.len()
    );
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, config::default_config_content())
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}
