use crate::{
    common::error::AppError,
    domain::roster::{Rosters, Student, Teacher},
    io::reader,
};

/// Remote locations of the two roster documents. Plain HTTP(S) GET, no
/// authentication.
#[derive(Debug, Clone)]
pub struct RosterSources {
    pub students_url: String,
    pub teachers_url: String,
}

impl Default for RosterSources {
    fn default() -> Self {
        Self {
            students_url:
                "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/students-1CGfw6jI4Kbxgt4OfupksyyexuLsjo.csv"
                    .to_string(),
            teachers_url:
                "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/teachers-IJ1SDMufncRF9JDeVg0W6zAueCPsZK.csv"
                    .to_string(),
        }
    }
}

/// Fetches both roster documents concurrently and parses them into lookup
/// lists. The caller observes a single suspension point.
///
/// All-or-nothing: if either fetch fails (network error, non-2xx status,
/// unreadable body) the whole load fails and no partial roster is
/// published. One-shot; retrying is the caller's decision.
pub async fn fetch_rosters(
    client: &reqwest::Client,
    sources: &RosterSources,
) -> Result<Rosters, AppError> {
    let (students_text, teachers_text) = tokio::try_join!(
        fetch_text(client, &sources.students_url),
        fetch_text(client, &sources.teachers_url),
    )?;

    let students = reader::read_rows(students_text.as_bytes())
        .iter()
        .map(Student::from_row)
        .collect();
    let teachers = reader::read_rows(teachers_text.as_bytes())
        .iter()
        .map(Teacher::from_row)
        .collect();

    Ok(Rosters { students, teachers })
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let resp = client.get(url).send().await?.error_for_status()?;
    Ok(resp.text().await?)
}
