mod record;

pub use record::ProjectRecord;
