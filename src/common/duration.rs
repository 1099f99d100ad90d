use std::fmt;

use crate::common::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
/// The length of a single lesson, split into hours and minutes.
///
/// # Why a value object?
/// Wrapping the two counters keeps the minute bound (`0..=59`) and the
/// strictly-positive invariant in one place: a `LessonDuration` that exists
/// is always displayable and never zero, so the ledger and the export path
/// don't re-validate.
///
/// # Examples
/// ```
/// use lesson_tracker::common::duration::LessonDuration;
///
/// let length = LessonDuration::new(1, 30).unwrap();
/// assert_eq!(length.to_string(), "1小時30分鐘");
/// assert!(LessonDuration::new(0, 0).is_err());
/// ```
pub struct LessonDuration {
    hours: u32,
    minutes: u32,
}

impl LessonDuration {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, AppError> {
        if minutes > 59 {
            return Err(AppError::Validation(format!(
                "minutes out of range: {minutes}"
            )));
        }
        if hours == 0 && minutes == 0 {
            return Err(AppError::Validation("duration must be positive".into()));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for LessonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}小時{}分鐘", self.hours, self.minutes)
    }
}
