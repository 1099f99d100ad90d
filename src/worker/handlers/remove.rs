use uuid::Uuid;

use crate::{
    domain::{ledger::Ledger, record::LessonRecord, roster::Rosters},
    notify::{self, LessonAction},
};

/// Removes the record with the given id, returning it when it existed.
/// Unknown ids are a silent no-op.
pub fn handle(ledger: &mut Ledger, rosters: &Rosters, id: Uuid) -> Option<LessonRecord> {
    let removed = ledger.remove(id)?;
    notify::send_email(
        &rosters.students,
        &removed.student_name,
        LessonAction::Deleted,
    );
    Some(removed)
}
