use crate::config::PageConfig;
use crate::model::ProjectRecord;
use askama::Template;
use eyre::{Error, WrapErr};

#[derive(Template)]
#[template(path = "card.html")]
pub struct Card<'a> {
    pub record: &'a ProjectRecord,
    pub button_label: &'a str,
}

#[derive(Template)]
#[template(path = "grid.html")]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct Page<'a> {
    pub page: &'a PageConfig,
    pub query: &'a str,
    /// Rendered grid, absent when no record matches.
    pub grid: Option<String>,
}

pub fn render_card(record: &ProjectRecord, button_label: &str) -> Result<String, Error> {
    Card {
        record,
        button_label,
    }
    .render()
    .wrap_err_with(|| format!("cannot render card for {record}"))
}

pub fn render_grid(rows: &[&[&ProjectRecord]], button_label: &str) -> Result<String, Error> {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|record| render_card(record, button_label))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid { rows }.render().wrap_err("cannot render gallery grid")
}

pub fn render_page(
    page: &PageConfig,
    query: &str,
    rows: &[&[&ProjectRecord]],
) -> Result<String, Error> {
    let grid = if rows.is_empty() {
        None
    } else {
        Some(render_grid(rows, &page.button_label)?)
    };
    Page {
        page,
        query: query.trim(),
        grid,
    }
    .render()
    .wrap_err("cannot render gallery page")
}
