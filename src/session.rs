use std::io::Write;

use chrono::NaiveDate;
use log::error;
use uuid::Uuid;

use crate::{
    common::{error::AppError, intent::LessonIntent, notice::Notice},
    domain::{
        ledger::{FilterCriteria, Ledger},
        record::LessonRecord,
        roster::Rosters,
    },
    io::{
        remote::{self, RosterSources},
        writer,
    },
    worker::processor::{Applied, Processor},
};

/// Session-scoped state container: rosters, ledger, filter criteria, the
/// loading gate and the pending notices, owned by exactly one surface
/// context. The presentation surface reads state through the accessors and
/// mutates through the intent dispatchers; nothing here is shared or
/// static.
#[derive(Debug)]
pub struct Session {
    client: reqwest::Client,
    sources: RosterSources,
    rosters: Rosters,
    ledger: Ledger,
    criteria: FilterCriteria,
    loading: bool,
    notices: Vec<Notice>,
    processor: Processor,
}

impl Session {
    pub fn new(sources: RosterSources) -> Self {
        Self {
            client: reqwest::Client::new(),
            sources,
            rosters: Rosters::default(),
            ledger: Ledger::new(),
            criteria: FilterCriteria::default(),
            loading: false,
            notices: Vec::new(),
            processor: Processor::new(),
        }
    }

    /// One-shot roster load, run once at session start. Both fetches go out
    /// concurrently and settle together; on any failure the rosters stay
    /// empty and a single destructive notice is queued. No retry.
    pub async fn load_rosters(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let result = remote::fetch_rosters(&self.client, &self.sources).await;
        self.loading = false;

        match result {
            Ok(rosters) => {
                self.rosters = rosters;
                Ok(())
            }
            Err(err) => {
                error!("roster load failed: {err}");
                self.notices.push(Notice::destructive(
                    "錯誤",
                    "無法載入學生或教練資料。請稍後再試。",
                ));
                Err(err)
            }
        }
    }

    /// The gate the surface checks before admitting input: true while the
    /// roster fetches are outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Publishes roster lists directly, for surfaces that bundle their
    /// reference data instead of fetching it.
    pub fn set_rosters(&mut self, rosters: Rosters) {
        self.rosters = rosters;
    }

    /// Validates and appends a lesson record, queuing the matching notice.
    /// On a validation failure the ledger is untouched.
    pub fn add_lesson(
        &mut self,
        student: impl Into<String>,
        teacher: impl Into<String>,
        hours: u32,
        minutes: u32,
        date: NaiveDate,
    ) -> Result<Uuid, AppError> {
        let intent = LessonIntent::Add {
            student: student.into(),
            teacher: teacher.into(),
            hours,
            minutes,
            date,
        };
        match self.processor.process(&mut self.ledger, &self.rosters, intent) {
            Ok(Applied::Added(id)) => {
                self.notices.push(Notice::normal("成功", "課程記錄已新增。"));
                Ok(id)
            }
            Ok(Applied::Removed(_)) => unreachable!("add intent always appends"),
            Err(err) => {
                self.notices
                    .push(Notice::destructive("錯誤", "請填寫所有必要資訊。"));
                Err(err)
            }
        }
    }

    /// Removes the record with the given id. Unknown ids are a silent
    /// no-op; only an actual removal queues a notice.
    pub fn remove_lesson(&mut self, id: Uuid) {
        let applied = self
            .processor
            .process(&mut self.ledger, &self.rosters, LessonIntent::Remove { id });
        if let Ok(Applied::Removed(Some(_))) = applied {
            self.notices.push(Notice::normal("成功", "課程記錄已刪除。"));
        }
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Restores the match-everything view.
    pub fn reset_filter(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current filtered view, recomputed from the ledger and criteria
    /// on every call so it can never go stale.
    pub fn filtered(&self) -> Vec<&LessonRecord> {
        self.ledger.filtered(&self.criteria)
    }

    /// Writes the current filtered view through the CSV export writer.
    pub fn export_csv<W: Write>(&self, out: W) -> Result<(), AppError> {
        writer::write_records(out, &self.filtered())
    }

    /// Hands the pending notices to the surface, clearing the queue.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn rosters(&self) -> &Rosters {
        &self.rosters
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
