use crate::modules::marks::application::errors::ApplicationError;
use crate::modules::marks::core::mark::Mark;
use crate::modules::marks::core::record::Record;
use crate::modules::marks::core::store::RecordStore;

/// Validates the raw mark before it reaches the store; nothing is written on rejection.
pub async fn handle(
    store: &RecordStore,
    student: &str,
    raw_mark: &str,
) -> Result<Record, ApplicationError> {
    let mark = Mark::parse(raw_mark)?;
    Ok(store.add(student, mark).await?)
}
