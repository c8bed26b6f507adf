use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike as _, NaiveDate};

use crate::{
    domain::logic::months::{month_name, MONTH_NAMES},
    entities::{
        AbsenceRecord, AbsenceStatus, LossComparison, MonthlyLoss, PatientStatusCount, Period,
        YearlyLoss,
    },
};

/// Copy of `records` with patient names stripped of surrounding whitespace,
/// so that "Alice" and "Alice " group together.
pub fn normalized(records: &[AbsenceRecord]) -> Vec<AbsenceRecord> {
    records
        .iter()
        .map(|r| AbsenceRecord {
            patient_name: r.patient_name.trim().to_string(),
            ..r.clone()
        })
        .collect()
}

/// Earliest and latest absence dates, or `None` for an empty table.
pub fn date_bounds(records: &[AbsenceRecord]) -> Option<Period> {
    let start = records.iter().map(|r| r.absence_date).min()?;
    let end = records.iter().map(|r| r.absence_date).max()?;
    Some(Period::new(start, end))
}

/// Records whose absence date lies in `[start, end]`. A missing bound defaults
/// to the earliest / latest date in the table. An inverted range matches
/// nothing.
pub fn filter_by_period(
    records: &[AbsenceRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<AbsenceRecord> {
    let Some(bounds) = date_bounds(records) else {
        return Vec::new();
    };
    let period = Period::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end));
    records
        .iter()
        .filter(|r| period.contains(r.absence_date))
        .cloned()
        .collect()
}

/// Distinct non-empty patient names, in first-seen order.
pub fn patients(records: &[AbsenceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.patient_name.as_str())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Number of absences per (patient, status) pair, sorted by patient then by
/// status label.
pub fn group_by_patient_status(records: &[AbsenceRecord]) -> Vec<PatientStatusCount> {
    let mut counts: BTreeMap<(&str, &'static str), (AbsenceStatus, usize)> = BTreeMap::new();
    for r in records {
        counts
            .entry((r.patient_name.as_str(), r.status.label()))
            .or_insert((r.status, 0))
            .1 += 1;
    }
    counts
        .into_iter()
        .map(|((patient, _), (status, count))| PatientStatusCount {
            patient: patient.to_string(),
            status,
            count,
        })
        .collect()
}

/// Loss attributed to `patient` against the loss across all patients, over the
/// same records.
pub fn compare_financial_loss(records: &[AbsenceRecord], patient: &str) -> LossComparison {
    LossComparison {
        patient: patient.to_string(),
        patient_total: records
            .iter()
            .filter(|r| r.patient_name == patient)
            .map(|r| r.financial_loss)
            .sum(),
        all_total: records.iter().map(|r| r.financial_loss).sum(),
    }
}

/// Total loss per calendar year, years ascending. Only years with records are
/// listed.
pub fn yearly_loss(records: &[AbsenceRecord]) -> Vec<YearlyLoss> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for r in records {
        *totals.entry(r.absence_date.year()).or_default() += r.financial_loss;
    }
    totals
        .into_iter()
        .map(|(year, total_loss)| YearlyLoss { year, total_loss })
        .collect()
}

/// Years present in the table, ascending.
pub fn available_years(records: &[AbsenceRecord]) -> Vec<i32> {
    yearly_loss(records).into_iter().map(|y| y.year).collect()
}

/// Total loss per month of `year`. Always twelve entries, January to December;
/// months without records report zero.
pub fn monthly_loss(records: &[AbsenceRecord], year: i32) -> Vec<MonthlyLoss> {
    let mut totals = [0.0_f64; 12];
    for r in records.iter().filter(|r| r.absence_date.year() == year) {
        totals[r.absence_date.month0() as usize] += r.financial_loss;
    }
    (1..=12u32)
        .zip(totals)
        .map(|(month, total_loss)| MonthlyLoss {
            month,
            month_name: month_name(month).unwrap_or(MONTH_NAMES[0]),
            total_loss,
        })
        .collect()
}
