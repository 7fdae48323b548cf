//! livemark CLI - render Markdown (optionally with sources) to styled HTML

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use livemark::{Citation, Options, RenderedDocument, StreamRenderer, Theme};

#[derive(Debug, Parser)]
#[command(name = "livemark", version, about)]
struct Cli {
    /// Markdown file to render; `-` or nothing reads stdin.
    input: Option<PathBuf>,

    /// JSON array of `{"title", "url"}` citations to append.
    #[arg(long, value_name = "FILE")]
    sources: Option<PathBuf>,

    /// Grounding metadata JSON (`[{"web": {"uri", "title"}}]`) to append
    /// as citations.
    #[arg(long, value_name = "FILE")]
    grounding: Option<PathBuf>,

    /// Emit bare tags without CSS classes.
    #[arg(long)]
    plain: bool,

    /// Escape HTML in text and inline code (for untrusted input).
    #[arg(long)]
    escape_text: bool,

    /// Print diagnostics to stderr.
    #[arg(long)]
    diagnostics: bool,

    /// Replay the input as a stream of chunks of this many bytes.
    #[arg(long, value_name = "BYTES")]
    stream_chunk: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let sources = read_sources(&cli)?;

    let options = Options {
        theme: if cli.plain {
            Theme::plain()
        } else {
            Theme::styled()
        },
        escape_text: cli.escape_text,
        ..Options::default()
    };

    let doc = match cli.stream_chunk {
        Some(size) => replay(&input, size, options, &sources),
        None => livemark::compose_with_options(Some(&input), &sources, &options),
    };

    if cli.diagnostics {
        for diagnostic in &doc.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }

    io::stdout()
        .write_all(doc.html.as_bytes())
        .context("failed to write output")?;

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_sources(cli: &Cli) -> anyhow::Result<Vec<Citation>> {
    let mut sources = Vec::new();

    if let Some(path) = &cli.sources {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        sources.extend(
            livemark::parse_sources(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?,
        );
    }

    if let Some(path) = &cli.grounding {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        sources.extend(
            livemark::parse_grounding_chunks(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?,
        );
    }

    debug!(count = sources.len(), "loaded sources");
    Ok(sources)
}

/// Feed the input through a stream renderer in fixed-size chunks, split
/// on character boundaries.
fn replay(input: &str, size: usize, options: Options, sources: &[Citation]) -> RenderedDocument {
    let size = size.max(1);
    let mut stream = StreamRenderer::new(options);
    let mut rest = input;

    while !rest.is_empty() {
        let mut end = size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (chunk, tail) = rest.split_at(end);
        let snapshot = stream.push(chunk);
        debug!(
            received = stream.len(),
            html = snapshot.html.len(),
            diagnostics = snapshot.diagnostics.len(),
            "stream snapshot"
        );
        rest = tail;
    }

    info!(renders = stream.renders(), "stream replay finished");
    stream.finish(sources)
}
