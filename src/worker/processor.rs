use uuid::Uuid;

use crate::{
    common::{error::AppError, intent::LessonIntent},
    domain::{ledger::Ledger, record::LessonRecord, roster::Rosters},
    worker::handlers::{add, remove},
};

/// Outcome of a successfully applied intent.
#[derive(Debug)]
pub enum Applied {
    /// A record was appended under the returned id.
    Added(Uuid),
    /// The remove ran; `None` when the id was already absent.
    Removed(Option<LessonRecord>),
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        rosters: &Rosters,
        intent: LessonIntent,
    ) -> Result<Applied, AppError> {
        match intent {
            LessonIntent::Add {
                student,
                teacher,
                hours,
                minutes,
                date,
            } => {
                let id = add::handle(ledger, rosters, student, teacher, hours, minutes, date)?;
                Ok(Applied::Added(id))
            }
            LessonIntent::Remove { id } => {
                let removed = remove::handle(ledger, rosters, id);
                Ok(Applied::Removed(removed))
            }
        }
    }
}
