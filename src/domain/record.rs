use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::duration::LessonDuration;

/// A single lesson entry in the ledger. Created by the add operation after
/// validation, removed by the delete operation, never mutated in place.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LessonRecord {
    pub id: Uuid,
    pub student_name: String,
    pub teacher_name: String,
    pub duration: LessonDuration,
    pub date: NaiveDate,
}

impl LessonRecord {
    pub fn new(
        student_name: String,
        teacher_name: String,
        duration: LessonDuration,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_name,
            teacher_name,
            duration,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_get_distinct_ids() {
        let duration = LessonDuration::new(1, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let a = LessonRecord::new("王小明".into(), "張教練".into(), duration, date);
        let b = LessonRecord::new("王小明".into(), "張教練".into(), duration, date);

        assert_ne!(a.id, b.id);
    }
}
