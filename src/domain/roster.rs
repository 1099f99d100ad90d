use crate::io::reader::Row;

/// A student roster entry. Loaded once per session from the remote CSV and
/// immutable afterwards. `name` is the key the ledger and the notification
/// stub match on; `seq` is the external identifier as-is from the source.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Student {
    pub seq: String,
    pub name: String,
    pub class: String,
    pub email: String,
}

impl Student {
    pub fn from_row(row: &Row) -> Self {
        Self {
            seq: row.get("序號").unwrap_or_default().to_string(),
            name: row.get("姓名").unwrap_or_default().to_string(),
            class: row.get("班級").unwrap_or_default().to_string(),
            email: row.get("email").unwrap_or_default().to_string(),
        }
    }
}

/// A teacher roster entry. `hourly_rate` stays the raw roster text; no
/// arithmetic is performed on it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Teacher {
    pub seq: String,
    pub name: String,
    pub hourly_rate: String,
}

impl Teacher {
    pub fn from_row(row: &Row) -> Self {
        Self {
            seq: row.get("序號").unwrap_or_default().to_string(),
            name: row.get("姓名").unwrap_or_default().to_string(),
            hourly_rate: row.get("時薪").unwrap_or_default().to_string(),
        }
    }
}

/// The two roster lists for the session, in source order.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Rosters {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
}

impl Rosters {
    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|s| s.name == name)
    }

    pub fn has_teacher(&self, name: &str) -> bool {
        self.teachers.iter().any(|t| t.name == name)
    }

    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }
}
