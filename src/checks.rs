use crate::model::ProjectRecord;
use eyre::{Error, bail};
use tracing::warn;

/// Warn about every record a card cannot be fully rendered for. Records
/// without a team name are an error.
pub fn check_records(records: &[ProjectRecord]) -> Result<usize, Error> {
    let mut incomplete = 0;
    let mut unnamed = 0;
    for (index, record) in records.iter().enumerate() {
        let missing = record.missing_fields();
        if missing.is_empty() {
            continue;
        }
        incomplete += 1;
        if record.team.is_empty() {
            unnamed += 1;
        }
        warn!(
            row = index + 1,
            record = %record,
            missing = ?missing,
            "incomplete record"
        );
    }
    if unnamed > 0 {
        bail!("{unnamed} records have no team name");
    }
    Ok(incomplete)
}
