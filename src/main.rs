use crate::config::Config;
use crate::grid::{RowWidth, paginate_into_rows};
use crate::loaders::Loader;
use crate::model::ProjectRecord;
use crate::search::{Query, filter_records};
use clap::{Parser, Subcommand};
use eyre::{Error, WrapErr};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, debug, info};

mod checks;
mod config;
mod display;
mod grid;
mod html;
mod loaders;
mod model;
mod search;

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    #[arg(short, long, help = "Use FILE instead of showcase.toml")]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Read the catalog from FILE instead of the configured one")]
    data: Option<PathBuf>,
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    verbosity: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the HTML gallery
    Render {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, help = "Write to FILE instead of the standard output")]
        output: Option<PathBuf>,
    },
    /// Print the filtered gallery as text
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Read one query per line and print the matching gallery after each one
    Interactive,
    /// Report records with missing fields
    Check,
}

/// Run the search for one query over the whole catalog.
fn filtered_for<'a>(
    records: &'a [ProjectRecord],
    query: &str,
    width: RowWidth,
) -> Vec<&'a ProjectRecord> {
    let filtered = filter_records(records, &Query::new(query));
    debug!(
        query,
        matched = filtered.len(),
        total = records.len(),
        rows = filtered.len().div_ceil(width.get()),
        "query processed"
    );
    filtered
}

fn render(
    config: &Config,
    records: &[ProjectRecord],
    query: &str,
    output: Option<PathBuf>,
) -> Result<(), Error> {
    let filtered = filtered_for(records, query, config.row_width);
    let rows = paginate_into_rows(&filtered, config.row_width);
    let page = html::render_page(&config.page, query, &rows)?;
    match output {
        Some(path) => {
            fs::write(&path, page)
                .wrap_err_with(|| format!("cannot write gallery to {}", path.display()))?;
            info!(path = %path.display(), cards = filtered.len(), "gallery written");
        }
        None => io::stdout().write_all(page.as_bytes())?,
    }
    Ok(())
}

fn list(
    config: &Config,
    records: &[ProjectRecord],
    query: &str,
    out: &mut impl Write,
) -> Result<(), Error> {
    let filtered = filtered_for(records, query, config.row_width);
    let rows = paginate_into_rows(&filtered, config.row_width);
    out.write_all(display::display_rows(&rows, records.len()).as_bytes())?;
    Ok(())
}

fn interactive(config: &Config, records: &[ProjectRecord]) -> Result<(), Error> {
    let mut stdout = io::stdout();
    let prompt = |stdout: &mut io::Stdout| -> Result<(), Error> {
        write!(stdout, "search> ")?;
        stdout.flush()?;
        Ok(())
    };
    prompt(&mut stdout)?;
    for line in io::stdin().lock().lines() {
        list(config, records, &line?, &mut stdout)?;
        prompt(&mut stdout)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load(options.config.as_deref())?;
    let data = options.data.as_deref().unwrap_or(&config.catalog.file);
    let records = Loader::new(data).load()?;
    match options.command {
        Command::Render { query, output } => render(&config, &records, &query, output)?,
        Command::List { query } => list(&config, &records, &query, &mut io::stdout())?,
        Command::Interactive => interactive(&config, &records)?,
        Command::Check => {
            let incomplete = checks::check_records(&records)?;
            println!("{} records checked, {incomplete} incomplete", records.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<ProjectRecord> {
        (1..=7)
            .map(|i| {
                let topic = if i % 2 == 0 { "nlp" } else { "vision" };
                ProjectRecord::new(&format!("Team {i}"), "", topic)
            })
            .collect()
    }

    #[test]
    fn list_paginates_filtered_records() {
        let mut out = Vec::new();
        list(&Config::default(), &catalog(), "", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Row 3:\n  - Team 7\n"));
        assert!(!text.contains("Row 4:"));
        assert!(text.ends_with("Showing 7 of 7 projects\n"));
    }

    #[test]
    fn list_with_query() {
        let mut out = Vec::new();
        list(&Config::default(), &catalog(), "NLP", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Row 1:\n  - Team 2\n  - Team 4\n  - Team 6\n"));
        assert!(text.ends_with("Showing 3 of 7 projects\n"));
    }

    #[test]
    fn render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        render(&Config::default(), &catalog(), "vision", Some(path.clone())).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 4);
        assert_eq!(html.matches(r#"<div class="row">"#).count(), 2);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}
