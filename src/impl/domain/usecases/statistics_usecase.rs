use chrono::NaiveDate;

use crate::{
    domain::logic::aggregation::{
        available_years, compare_financial_loss, date_bounds, filter_by_period,
        group_by_patient_status, monthly_loss, normalized, patients, yearly_loss,
    },
    entities::{AbsenceLedger, AnnualStatistics, Period, PeriodStatistics, StatisticsView},
};

/// Read-only views over the ledger. Every request recomputes from scratch.
pub(crate) struct StatisticsUsecase;

impl StatisticsUsecase {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Absences per patient and status, plus a loss comparison for `patient`
    /// (or the first patient if none is given), over `[start, end]`.
    pub(crate) fn period_statistics(
        &self,
        ledger: &AbsenceLedger,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        patient: Option<&str>,
    ) -> StatisticsView<PeriodStatistics> {
        let records = normalized(ledger.records());
        let Some(bounds) = date_bounds(&records) else {
            return StatisticsView::NoData;
        };
        let period = Period::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end));

        let filtered = filter_by_period(&records, Some(period.start), Some(period.end));
        if filtered.is_empty() {
            return StatisticsView::EmptyPeriod(period);
        }

        let patients = patients(&records);
        let loss_comparison = patient
            .map(|p| p.trim().to_string())
            .or_else(|| patients.first().cloned())
            .map(|p| compare_financial_loss(&filtered, &p));

        StatisticsView::Ready(PeriodStatistics {
            period,
            patients,
            absences_by_patient_status: group_by_patient_status(&filtered),
            loss_comparison,
        })
    }

    /// Loss per year, and per month for `year` (the earliest year if `None`).
    pub(crate) fn annual_statistics(
        &self,
        ledger: &AbsenceLedger,
        year: Option<i32>,
    ) -> StatisticsView<AnnualStatistics> {
        let records = ledger.records();
        let Some(&earliest) = available_years(records).first() else {
            return StatisticsView::NoData;
        };
        let selected_year = year.unwrap_or(earliest);
        StatisticsView::Ready(AnnualStatistics {
            yearly: yearly_loss(records),
            selected_year,
            monthly: monthly_loss(records, selected_year),
        })
    }
}
