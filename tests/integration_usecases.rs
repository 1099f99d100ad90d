use std::fs;

use chrono::NaiveDate;
use uuid::Uuid;

use lesson_tracker::common::notice::Severity;
use lesson_tracker::domain::ledger::FilterCriteria;
use lesson_tracker::domain::roster::{Rosters, Student, Teacher};
use lesson_tracker::io::reader::read_rows;
use lesson_tracker::io::remote::RosterSources;
use lesson_tracker::session::Session;

// Builds the session the way the surface would after a successful load,
// but from the fixture files instead of the network.
fn session_from_fixtures() -> Session {
    let students_csv = fs::read_to_string("tests/fixtures/students.csv").unwrap();
    let teachers_csv = fs::read_to_string("tests/fixtures/teachers.csv").unwrap();

    let rosters = Rosters {
        students: read_rows(students_csv.as_bytes())
            .iter()
            .map(Student::from_row)
            .collect(),
        teachers: read_rows(teachers_csv.as_bytes())
            .iter()
            .map(Teacher::from_row)
            .collect(),
    };

    let mut session = Session::new(RosterSources::default());
    session.set_rosters(rosters);
    session
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    // Also allows tests to be stable across platforms.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_roster_fixtures_parse_into_lookup_lists() {
    let session = session_from_fixtures();

    assert_eq!(session.rosters().students.len(), 3);
    assert_eq!(session.rosters().teachers.len(), 2);
    assert!(session.rosters().has_student("王小明"));
    assert!(session.rosters().has_teacher("李教練"));
    assert_eq!(
        session.rosters().find_student("陳美玲").map(|s| s.email.as_str()),
        Some("meiling@example.com")
    );
}

#[test]
fn case2_add_filter_export_round_trip() {
    let mut session = session_from_fixtures();

    session
        .add_lesson("王小明", "張教練", 1, 0, date("2024-01-01"))
        .unwrap();
    session
        .add_lesson("陳美玲", "張教練", 0, 30, date("2024-01-02"))
        .unwrap();
    session
        .add_lesson("王小明", "李教練", 2, 0, date("2024-01-03"))
        .unwrap();

    session.set_filter(FilterCriteria {
        student: Some("王小明".into()),
        ..FilterCriteria::default()
    });

    let mut out = Vec::<u8>::new();
    session.export_csv(&mut out).expect("failed to write export CSV");
    let actual = String::from_utf8(out).expect("output was not valid UTF-8");

    let body = actual
        .strip_prefix('\u{feff}')
        .expect("export must start with the byte-order marker");

    let expected = fs::read_to_string("tests/fixtures/expected_filtered_export.csv").unwrap();
    assert_eq!(normalize_csv(body), normalize_csv(&expected));
}

#[test]
fn case3_validation_failures_leave_the_ledger_unchanged() {
    let mut session = session_from_fixtures();
    session
        .add_lesson("王小明", "張教練", 1, 0, date("2024-01-01"))
        .unwrap();
    session.drain_notices();

    // zero duration
    assert!(
        session
            .add_lesson("王小明", "張教練", 0, 0, date("2024-01-02"))
            .is_err()
    );
    // nothing selected
    assert!(session.add_lesson("", "張教練", 1, 0, date("2024-01-02")).is_err());
    // free-typed name not on the roster
    assert!(
        session
            .add_lesson("路人甲", "張教練", 1, 0, date("2024-01-02"))
            .is_err()
    );

    assert_eq!(session.ledger().len(), 1);
    let notices = session.drain_notices();
    assert_eq!(notices.len(), 3);
    assert!(notices.iter().all(|n| n.severity == Severity::Destructive));
}

#[test]
fn case4_removal_is_exact_and_silent_on_misses() {
    let mut session = session_from_fixtures();
    let first = session
        .add_lesson("王小明", "張教練", 1, 0, date("2024-01-01"))
        .unwrap();
    let second = session
        .add_lesson("陳美玲", "李教練", 0, 45, date("2024-01-02"))
        .unwrap();
    session.drain_notices();

    session.remove_lesson(Uuid::new_v4());
    assert_eq!(session.ledger().len(), 2);
    assert!(session.drain_notices().is_empty());

    session.remove_lesson(first);
    assert_eq!(session.ledger().len(), 1);
    assert!(session.filtered().iter().all(|r| r.id != first));
    assert_eq!(session.filtered()[0].id, second);
    assert_eq!(session.drain_notices().len(), 1);
}

#[tokio::test]
async fn case5_roster_load_failure_leaves_rosters_empty() {
    // Nothing listens on the discard port, so both fetches reject.
    let sources = RosterSources {
        students_url: "http://127.0.0.1:9/students.csv".to_string(),
        teachers_url: "http://127.0.0.1:9/teachers.csv".to_string(),
    };
    let mut session = Session::new(sources);

    let result = session.load_rosters().await;

    assert!(result.is_err());
    assert!(!session.is_loading());
    assert!(session.rosters().students.is_empty());
    assert!(session.rosters().teachers.is_empty());

    let notices = session.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Destructive);
    assert_eq!(notices[0].description, "無法載入學生或教練資料。請稍後再試。");

    // the form stays usable, but adds against the empty roster fail validation
    assert!(
        session
            .add_lesson("王小明", "張教練", 1, 0, date("2024-01-01"))
            .is_err()
    );
}
