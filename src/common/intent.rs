use chrono::NaiveDate;
use uuid::Uuid;

/// Represents a user intent that is dispatched from the presentation surface
/// to the worker for processing.
#[derive(Debug)]
pub enum LessonIntent {
    Add {
        student: String,
        teacher: String,
        hours: u32,
        minutes: u32,
        date: NaiveDate,
    },
    Remove {
        id: Uuid,
    },
}
