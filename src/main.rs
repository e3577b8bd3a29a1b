//! linkernizer CLI - wrap links in plain text with HTML hyperlink markup

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use linkernizer::{Linkernizer, Options};

#[derive(Parser, Debug)]
#[command(name = "linkernizer")]
#[command(about = "Wrap links and email addresses in plain text with HTML hyperlink markup")]
#[command(version)]
struct Args {
    /// Input file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Scheme prepended to the href of links starting with `www.`
    #[arg(long, default_value = "https://")]
    default_scheme: String,

    /// Host whose links open in the same tab, e.g. `www.example.org`
    #[arg(long, default_value = "")]
    internal_host: String,

    /// Open external links in a new tab
    #[arg(long)]
    new_tab: bool,

    /// Print the detected spans instead of the rewritten text
    #[arg(long)]
    spans: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options::new()
            .with_default_scheme(self.default_scheme.clone())
            .with_internal_host(self.internal_host.clone())
            .with_external_links_in_new_tab(self.new_tab)
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let input = read_input(&args.input)?;
    let linkernizer = Linkernizer::new(args.options());

    let mut stdout = io::stdout().lock();
    if args.spans {
        for replacement in linkernizer.find_replacements(&input) {
            let range = replacement.range;
            writeln!(
                stdout,
                "{}..{} {} {}",
                range.start,
                range.end,
                replacement.kind,
                range.slice(&input)
            )?;
        }
    } else {
        stdout.write_all(linkernizer.linkernize(&input).as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}
