use anyhow::{Context, Result, bail};
use clap::Parser;
use jiam_markdown::{Renderer, parsing::escape::escape_attribute, to_plain_text};
use jiam_markdown_config::Config;
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "jiam-markdown")]
#[command(version)]
#[command(about = "Render Jiam chat markdown to HTML or plain text")]
struct Args {
    /// Markdown file to render; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/jiam/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit plain text for speech instead of HTML
    #[arg(long, conflicts_with = "standalone")]
    plain: bool,

    /// Wrap the HTML in a complete document
    #[arg(long)]
    standalone: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;
    let rendered = convert(&args, &config, &text);
    write_output(args.output.as_deref(), &rendered)
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            let Some(config) = config else {
                bail!("Config file '{}' does not exist", path.display());
            };
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                Ok(config)
            }
            None => {
                log::debug!(
                    "No config at {}, using default theme",
                    Config::config_path().display()
                );
                Ok(Config::default())
            }
        },
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn convert(args: &Args, config: &Config, text: &str) -> String {
    if args.plain {
        return to_plain_text(text);
    }
    let html = Renderer::new(config.theme.clone()).render(text);
    if args.standalone {
        standalone_document(&html, config.stylesheet.as_deref())
    } else {
        html
    }
}

fn standalone_document(body: &str, stylesheet: Option<&Path>) -> String {
    let mut doc = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(stylesheet) = stylesheet {
        let href = stylesheet.to_string_lossy();
        doc.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_attribute(&href)
        ));
    }
    doc.push_str("</head>\n<body>\n");
    doc.push_str(body);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log::debug!("Wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write stdout")?;
        }
    }
    Ok(())
}
