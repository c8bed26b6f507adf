use chrono::NaiveDate;
use tempfile::TempDir;

use clinic_absences::{
    catalog::PLACEHOLDER_TEXT,
    entities::{
        AbsenceRecord, AbsenceStatus, AssessmentSelection, AssessmentSelections, CareType,
        CellEdit, LedgerDiff, ResultLevel, StatisticsView, REPORT_CONTENT_TYPE,
    },
    util::AbsenceDashboardUtil,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(patient: &str, d: NaiveDate, status: AbsenceStatus, loss: f64) -> AbsenceRecord {
    AbsenceRecord::new(patient, d, status, loss, CareType::Consultation)
}

#[test]
fn test_missing_store_opens_empty_and_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let dashboard = AbsenceDashboardUtil::open(dir.path().join("absences.csv")).unwrap();
    assert!(dashboard.ledger().is_empty());
    assert_eq!(
        dashboard.period_statistics(None, None, None),
        StatisticsView::NoData
    );
    assert_eq!(dashboard.annual_statistics(None), StatisticsView::NoData);
}

#[test]
fn test_mutations_are_visible_after_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absences.csv");

    let mut dashboard = AbsenceDashboardUtil::open(&path).unwrap();
    dashboard
        .add_absence(record("Alice", date(2024, 1, 8), AbsenceStatus::NoShow, 45.0))
        .unwrap();
    dashboard
        .add_absence(record("Bob", date(2024, 2, 9), AbsenceStatus::Cancelled, 30.0))
        .unwrap();
    dashboard
        .apply_grid_diff(&LedgerDiff::new().edit(1, CellEdit::Comment("rappelé".into())))
        .unwrap();

    let reopened = AbsenceDashboardUtil::open(&path).unwrap();
    assert_eq!(reopened.ledger(), dashboard.ledger());
    assert_eq!(reopened.ledger().get(1).unwrap().comment, "rappelé");
}

#[test]
fn test_append_then_delete_restores_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absences.csv");

    let mut dashboard = AbsenceDashboardUtil::open(&path).unwrap();
    dashboard
        .add_absence(record("Alice", date(2024, 1, 8), AbsenceStatus::NoShow, 45.0))
        .unwrap();
    let before = std::fs::read(&path).unwrap();

    dashboard
        .add_absence(record("Bob", date(2024, 2, 9), AbsenceStatus::Excused, 0.0))
        .unwrap();
    dashboard
        .apply_grid_diff(&LedgerDiff::new().delete(1))
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_empty_diff_still_writes_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absences.csv");

    let mut dashboard = AbsenceDashboardUtil::open(&path).unwrap();
    assert!(!path.exists());
    dashboard.apply_grid_diff(&LedgerDiff::new()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_malformed_store_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absences.csv");
    std::fs::write(
        &path,
        "Nom du patient,Date de l'absence,Statut de l'absence,MAG,Type de prise en charge,Commentaire\n\
         Alice,2024-01-08,Annulée,45,Consultation,\"appel\n\nsans réponse\"\n\
         Bob,2024-01-09,Excusée,-3,Suivi,\n",
    )
    .unwrap();
    let err = AbsenceDashboardUtil::open(&path).err().unwrap().to_string();
    assert!(err.contains("line 5"), "{err}");
    assert!(err.contains("'MAG'"), "{err}");
}

#[test]
fn test_statistics_and_charts() {
    let dir = TempDir::new().unwrap();
    let mut dashboard = AbsenceDashboardUtil::open(dir.path().join("absences.csv")).unwrap();
    dashboard
        .add_absence(record("Alice", date(2023, 12, 4), AbsenceStatus::NoShow, 50.0))
        .unwrap();
    dashboard
        .add_absence(record("Bob", date(2024, 5, 6), AbsenceStatus::Cancelled, 30.0))
        .unwrap();

    let period = dashboard
        .period_statistics(None, None, Some("Bob"))
        .ready()
        .unwrap();
    let comparison = period.loss_comparison.as_ref().unwrap();
    assert_eq!(comparison.patient_total, 30.0);
    assert_eq!(comparison.all_total, 80.0);
    assert_eq!(dashboard.period_charts(&period).len(), 2);

    let annual = dashboard.annual_statistics(Some(2024)).ready().unwrap();
    assert_eq!(annual.monthly.len(), 12);
    assert_eq!(annual.monthly[4].total_loss, 30.0);
    let charts = dashboard.annual_charts(&annual);
    assert_eq!(charts.len(), 2);
    assert!(charts[1].to_json().contains("\"mai\""));

    let empty = dashboard.period_statistics(Some(date(2025, 1, 1)), Some(date(2025, 12, 31)), None);
    assert!(matches!(empty, StatisticsView::EmptyPeriod(_)));
}

#[test]
fn test_report_generation() {
    let dir = TempDir::new().unwrap();
    let dashboard = AbsenceDashboardUtil::open(dir.path().join("absences.csv")).unwrap();

    let selections: AssessmentSelections = vec![
        AssessmentSelection::new("Bilan type A", "épreuve 1.1", ResultLevel::Good),
        AssessmentSelection::new("Bilan type A", "épreuve 1.2", ResultLevel::Low),
        AssessmentSelection::new(
            "Bilan type A",
            "épreuve 1.3",
            ResultLevel::Unlisted("excellent".into()),
        ),
    ]
    .into_iter()
    .collect();

    let report = dashboard.compose_report("Patient 1", &selections);
    assert_eq!(report.headings(1).count(), 1);
    assert_eq!(report.paragraphs().last(), Some(PLACEHOLDER_TEXT));

    let preview = dashboard.preview_report(&report);
    assert!(preview.contains("Bilan pour Patient 1"));

    let artifact = dashboard.generate_report("Patient 1", &selections).unwrap();
    assert_eq!(artifact.file_name, "bilan_Patient_1.docx");
    let written = dashboard.write_report(&report).unwrap();
    assert_eq!(written.file_name, artifact.file_name);
    assert!(written.bytes.starts_with(b"PK"));
    assert_eq!(artifact.content_type, REPORT_CONTENT_TYPE);
    assert!(artifact.bytes.starts_with(b"PK"));
    // Nothing lands on disk.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
