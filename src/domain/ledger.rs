use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::record::LessonRecord;

/// The in-memory collection of lesson records for the session, in insertion
/// order. Exactly one writer exists: the session that owns it.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<LessonRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[LessonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: LessonRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record with the given id. A miss is a no-op;
    /// the surface only ever asks to remove ids it currently displays.
    pub fn remove(&mut self, id: Uuid) -> Option<LessonRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// The current view of the ledger under the given criteria: a pure
    /// function of both, recomputed per call, preserving insertion order
    /// among the matches.
    pub fn filtered<'a>(&'a self, criteria: &FilterCriteria) -> Vec<&'a LessonRecord> {
        self.records.iter().filter(|r| criteria.matches(r)).collect()
    }
}

/// Three independent optional predicates over the ledger. `None` means
/// "match everything" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub student: Option<String>,
    pub teacher: Option<String>,
    pub date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &LessonRecord) -> bool {
        let student_match = self
            .student
            .as_deref()
            .map_or(true, |name| record.student_name == name);
        let teacher_match = self
            .teacher
            .as_deref()
            .map_or(true, |name| record.teacher_name == name);
        let date_match = self.date.map_or(true, |date| record.date == date);
        student_match && teacher_match && date_match
    }
}
