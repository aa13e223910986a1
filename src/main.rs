//! headinganchor - add heading ids and anchors to a markdown-it token stream

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use headinganchor::{
    HeadingAnchorOptions, Result, add_heading_anchors, parse_tokens, render_html, to_json,
    to_json_pretty,
};

#[derive(Parser)]
#[command(name = "headinganchor")]
#[command(version, about = "Add heading ids and anchors to markdown-it tokens", long_about = None)]
#[command(after_help = "EXAMPLES:
    headinganchor tokens.json                 Rewrite tokens, print JSON
    headinganchor --html tokens.json          Rewrite tokens, print HTML
    headinganchor --no-anchor < tokens.json   Only set heading ids")]
struct Cli {
    /// Token JSON produced by md.parse() (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// JSON option object (anchorClass, addHeadingID, addHeadingAnchor)
    #[arg(long, value_name = "FILE")]
    options: Option<String>,

    /// CSS class for injected anchors
    #[arg(long, value_name = "CLASS")]
    anchor_class: Option<String>,

    /// Do not set id attributes on headings
    #[arg(long)]
    no_id: bool,

    /// Do not inject anchor elements
    #[arg(long)]
    no_anchor: bool,

    /// Render HTML instead of writing tokens back as JSON
    #[arg(long)]
    html: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "html")]
    pretty: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = resolve_options(cli)?;
    if options.is_noop() && !cli.quiet {
        eprintln!("warning: heading ids and anchors are both disabled; tokens pass through unchanged");
    }

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut tokens = parse_tokens(&input)?;
    let report = add_heading_anchors(&mut tokens, &options);

    let rendered = if cli.html {
        render_html(&tokens)
    } else if cli.pretty {
        to_json_pretty(&tokens)? + "\n"
    } else {
        to_json(&tokens)? + "\n"
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    if !cli.quiet {
        eprintln!(
            "{} headings ({} ids, {} anchors, {} skipped)",
            report.headings, report.ids, report.anchors, report.skipped
        );
    }

    Ok(())
}

/// Options file first, then command-line flags on top.
fn resolve_options(cli: &Cli) -> Result<HeadingAnchorOptions> {
    let mut options = match &cli.options {
        Some(path) => HeadingAnchorOptions::from_json(&fs::read_to_string(path)?)?,
        None => HeadingAnchorOptions::default(),
    };

    if let Some(class) = &cli.anchor_class {
        options = options.with_anchor_class(class.as_str());
    }
    if cli.no_id {
        options = options.with_heading_id(false);
    }
    if cli.no_anchor {
        options = options.with_heading_anchor(false);
    }

    Ok(options)
}
