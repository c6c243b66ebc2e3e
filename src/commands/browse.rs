use crate::core::{
    catalog::{CatalogSource, FileSource},
    config::NavigatorConfig,
    error::Result,
    event_parser::{Command, CommandParser},
    format_session_error,
    render::{render_help, render_loading, render_navigator},
    session::{Layout, LoadState},
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub fn execute_browse(catalog: Option<PathBuf>, layout: Option<Layout>) -> Result<()> {
    let config = NavigatorConfig::load_or_default()?;
    let catalog_path = config.resolve_catalog(catalog)?;
    let layout = layout.unwrap_or(config.default_layout);

    log::debug!(
        "Starting {layout} session on {}",
        catalog_path.display()
    );

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_session(
        FileSource::new(catalog_path),
        layout,
        &config.quote_link,
        stdin.lock(),
        &mut out,
        prompt,
    )
}

/// Drive one session: fetch the catalog once, then apply one command per input
/// line and redraw after each accepted event. Rejected input prints an error
/// and the session carries on.
pub fn run_session<S, R, W>(
    source: S,
    layout: Layout,
    quote_link: &str,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    S: CatalogSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_loading())?;
    let state = LoadState::fetch(source);
    let mut navigator = state.navigator(layout)?;
    write_lines(out, &render_navigator(&navigator, quote_link))?;

    let mut applied = 0usize;
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let outcome = CommandParser::parse(&line).and_then(|command| match command {
            None => Ok(false),
            Some(Command::Quit) => Ok(true),
            Some(Command::Help) => {
                write_lines(out, &render_help())?;
                Ok(false)
            }
            Some(Command::Navigate(event)) => {
                navigator.apply(event)?;
                applied += 1;
                write_lines(out, &render_navigator(&navigator, quote_link))?;
                Ok(false)
            }
        });

        match outcome {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => {
                log::warn!("Rejected input '{}': {e}", line.trim());
                writeln!(out, "{}", format_session_error(&e.to_string()))?;
            }
        }
    }

    log::debug!("Session ended after {applied} events");
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
