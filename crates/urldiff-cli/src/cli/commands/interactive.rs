//! `urldiff interactive` – line-driven comparison session over stdin.
//!
//! Any line that is not a `:command` becomes the candidate URL and is compared
//! against the current URL. `:apply` makes the candidate current.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use urldiff_core::config::UrlDiffConfig;
use urldiff_core::DiffSession;

use crate::cli::render::render_table;

const HELP: &str = "\
Enter a URL to compare it with the current URL.
  :apply    make the compared URL the current URL
  :cancel   discard the compared URL
  :current  print the current URL
  :help     show this help
  :quit     exit";

pub fn run_interactive(start_url: &str, cfg: &UrlDiffConfig) -> Result<()> {
    let mut session = DiffSession::new(start_url);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    interact(&mut session, stdin.lock(), &mut stdout, &cfg.empty_placeholder)
}

fn interact<R: BufRead, W: Write>(
    session: &mut DiffSession,
    input: R,
    out: &mut W,
    placeholder: &str,
) -> Result<()> {
    writeln!(out, "Current URL: {}", session.current_url())?;
    writeln!(out, "Type :help for commands.")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":help" => writeln!(out, "{HELP}")?,
            ":current" => writeln!(out, "Current URL: {}", session.current_url())?,
            ":cancel" => {
                session.cancel();
                writeln!(out, "Cancelled.")?;
            }
            ":apply" => match session.apply() {
                Ok(url) => writeln!(out, "Current URL: {url}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            _ => {
                session.set_candidate(line.as_str());
                match session.submit() {
                    Ok(rows) => write!(out, "{}", render_table(&rows, placeholder))?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
