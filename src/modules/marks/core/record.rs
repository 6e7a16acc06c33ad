use crate::modules::marks::core::mark::Mark;
use std::collections::BTreeMap;

/// Full state as persisted: student name to mark, ordered by name.
pub type MarkSheet = BTreeMap<String, Mark>;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub student: String,
    pub mark: Mark,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Record),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    NotFound(String),
}
