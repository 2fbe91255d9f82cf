use crate::model::ProjectRecord;

/// A normalized free-text query. An empty query matches everything.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match against team, members or description.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.is_empty()
            || record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Keep the records matching `query`, in catalog order.
pub fn filter_records<'a>(records: &'a [ProjectRecord], query: &Query) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}
