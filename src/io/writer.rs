use std::io::Write;

use crate::{common::error::AppError, domain::record::LessonRecord};

/// Canonical filename the surface offers for the download.
pub const EXPORT_FILE_NAME: &str = "桌球課程記錄.csv";

/// UTF-8 byte-order marker; spreadsheet tools key the encoding off it.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(serde::Serialize)]
/// Export row shape. Columns are written in field order under the
/// `日期,學生,教練,時數` header; the duration is the display string.
struct ExportRow {
    date: String,
    student: String,
    teacher: String,
    duration: String,
}

/// Writes the given records as a UTF-8 CSV document with a leading
/// byte-order marker.
///
/// The header row is always present, so N records produce N + 1 lines.
/// Fields are quoted only as needed. No round-trip with the reader is
/// claimed: export always originates from internally formatted strings.
///
/// # Errors
///
/// Returns an error if writing or serializing any row fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lesson_tracker::common::duration::LessonDuration;
/// use lesson_tracker::domain::record::LessonRecord;
/// use lesson_tracker::io::writer::write_records;
///
/// let record = LessonRecord::new(
///     "王小明".into(),
///     "張教練".into(),
///     LessonDuration::new(1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// );
///
/// let mut out = Vec::new();
/// write_records(&mut out, &[&record]).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with('\u{feff}'));
/// assert!(text.contains("2024-01-01,王小明,張教練,1小時30分鐘"));
/// ```
pub fn write_records<W: Write>(mut out: W, records: &[&LessonRecord]) -> Result<(), AppError> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    // Header is written explicitly so an empty export still carries it.
    wtr.write_record(["日期", "學生", "教練", "時數"])?;
    for record in records {
        wtr.serialize(ExportRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            student: record.student_name.clone(),
            teacher: record.teacher_name.clone(),
            duration: record.duration.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
