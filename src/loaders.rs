use crate::model::ProjectRecord;
use csv::StringRecord;
use eyre::{Error, WrapErr, bail};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, trace, warn};

const TEAM_COLUMN: &str = "Team";

pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_owned(),
        }
    }

    /// Read the whole catalog. Any failure means no data can be shown.
    pub fn load(&self) -> Result<Vec<ProjectRecord>, Error> {
        let records = File::open(&self.path)
            .map_err(Error::from)
            .and_then(load_from_reader)
            .wrap_err_with(|| format!("data unavailable: cannot load {}", self.path.display()))?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(records)
    }
}

/// Parse a catalog. Invalid UTF-8 in a cell is replaced and rows that cannot
/// be decoded are skipped, so only a broken header or stream fails the load.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<ProjectRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == TEAM_COLUMN) {
        bail!("missing {TEAM_COLUMN} column");
    }
    let mut records = Vec::new();
    for (index, row) in reader.byte_records().enumerate() {
        let row = row.wrap_err_with(|| format!("cannot read catalog row {}", index + 1))?;
        let fields = row
            .iter()
            .enumerate()
            .map(|(column, field)| {
                String::from_utf8(field.to_vec()).unwrap_or_else(|_| {
                    warn!(
                        row = index + 1,
                        column = headers.get(column).unwrap_or("?"),
                        "invalid UTF-8 in catalog cell"
                    );
                    String::from_utf8_lossy(field).into_owned()
                })
            })
            .collect::<Vec<_>>();
        match StringRecord::from(fields).deserialize::<ProjectRecord>(Some(&headers)) {
            Ok(record) => {
                trace!(record = %record, "loaded record");
                records.push(record);
            }
            Err(e) => warn!(row = index + 1, error = %e, "skipping unreadable catalog row"),
        }
    }
    Ok(records)
}
