use log::info;

use crate::domain::roster::Student;

/// Ledger mutation kinds reported through the notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAction {
    Added,
    Deleted,
}

impl LessonAction {
    fn as_str(self) -> &'static str {
        match self {
            LessonAction::Added => "added",
            LessonAction::Deleted => "deleted",
        }
    }
}

/// Best-effort notice to the student whose lesson was added or deleted.
///
/// Looks up the contact address by display name; a miss sends nothing (the
/// record may predate the roster, or the name was free-typed). On a hit the
/// delivery line is emitted through `log`, the stand-in for a real mail
/// transport: on a detached task when a tokio runtime is current, inline
/// otherwise. Either way the call never blocks or fails the mutation that
/// triggered it.
pub fn send_email(students: &[Student], student_name: &str, action: LessonAction) {
    let Some(student) = students.iter().find(|s| s.name == student_name) else {
        return;
    };

    let message = format!(
        "Sending email to {}: Lesson {}",
        student.email,
        action.as_str()
    );
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move { info!("{message}") });
        }
        Err(_) => info!("{message}"),
    }
}
