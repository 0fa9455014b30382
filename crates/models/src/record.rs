use crate::errors::ModelError;

/// Identity and timestamp behavior shared by every collection record.
///
/// Timestamps are integer epoch milliseconds, stamped by the store: both on
/// create, `updated_at` alone on mutation. `updated_at >= created_at` holds
/// for any record that carries both.
pub trait Entry {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn stamp_created(&mut self, now_ms: i64);
    fn stamp_updated(&mut self, now_ms: i64);
}

/// A typed partial update applied over an existing record. Fields left as
/// `None` keep their prior value.
pub trait RecordPatch {
    type Target: Entry;
    fn apply(self, target: &mut Self::Target);
}

pub(crate) fn require(value: Option<String>, what: &str) -> Result<String, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ModelError::Validation(format!("{what} is required"))),
    }
}

pub(crate) fn check_http_url(url: &str, what: &str) -> Result<(), ModelError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ModelError::Validation(format!("{what} must start with http(s)")))
    }
}
