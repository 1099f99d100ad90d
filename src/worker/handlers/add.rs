use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    common::{duration::LessonDuration, error::AppError},
    domain::{ledger::Ledger, record::LessonRecord, roster::Rosters},
    notify::{self, LessonAction},
};

pub fn handle(
    ledger: &mut Ledger,
    rosters: &Rosters,
    student: String,
    teacher: String,
    hours: u32,
    minutes: u32,
    date: NaiveDate,
) -> Result<Uuid, AppError> {
    // empty means "nothing selected" on the surface
    if student.is_empty() {
        return Err(AppError::Validation("no student selected".into()));
    }
    if teacher.is_empty() {
        return Err(AppError::Validation("no teacher selected".into()));
    }

    // names must resolve against the loaded rosters
    if !rosters.has_student(&student) {
        return Err(AppError::Validation(format!("unknown student: {student}")));
    }
    if !rosters.has_teacher(&teacher) {
        return Err(AppError::Validation(format!("unknown teacher: {teacher}")));
    }

    let duration = LessonDuration::new(hours, minutes)?;

    let record = LessonRecord::new(student, teacher, duration, date);
    let id = record.id;
    notify::send_email(&rosters.students, &record.student_name, LessonAction::Added);
    ledger.push(record);
    Ok(id)
}
