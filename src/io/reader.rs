use std::{collections::HashMap, io::Read};

/// A parsed CSV row: trimmed field values keyed by trimmed header name.
#[derive(Debug, Clone, Default)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Looks up a field by header name. Headers the row had no value for
    /// resolve to `None` rather than an empty string.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }
}

/// Reads header-keyed rows from loosely formatted CSV text.
///
/// The first line is the header; values align to headers positionally, so a
/// short row simply leaves its trailing headers absent. Rows whose every
/// field is empty are dropped, and row-level failures are skipped instead of
/// propagated: the roster fetch must stay resilient to transient empty
/// responses, at the cost of hiding real errors.
///
/// # Examples
///
/// ```
/// use lesson_tracker::io::reader::read_rows;
///
/// let data = "序號,姓名,班級,email\n\
/// 1,王小明,初級班,ming@example.com\n\
/// ,,,\n";
/// let rows = read_rows(data.as_bytes());
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("姓名"), Some("王小明"));
/// ```
pub fn read_rows<R: Read>(input: R) -> Vec<Row> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(_) => return Vec::new(),
    };

    rdr.records()
        .filter_map(|res| res.ok())
        .map(|record| {
            let fields = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect();
            Row { fields }
        })
        .filter(|row| !row.is_blank())
        .collect()
}
