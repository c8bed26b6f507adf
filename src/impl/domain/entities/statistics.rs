use super::{absence_record::AbsenceStatus, period::Period};

/// Outcome of a statistics request.
///
/// Empty inputs are reported explicitly so that callers show a notice instead
/// of trying to render an empty chart.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsView<T> {
    /// The ledger holds no records at all.
    NoData,
    /// The ledger has records, but none fall inside the period.
    EmptyPeriod(Period),
    Ready(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientStatusCount {
    pub patient: String,
    pub status: AbsenceStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LossComparison {
    pub patient: String,
    pub patient_total: f64,
    pub all_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyLoss {
    pub year: i32,
    pub total_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyLoss {
    /// 1 to 12.
    pub month: u32,
    pub month_name: &'static str,
    pub total_loss: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStatistics {
    pub period: Period,
    /// Every patient in the ledger, first-seen order.
    pub patients: Vec<String>,
    pub absences_by_patient_status: Vec<PatientStatusCount>,
    /// `None` when the ledger has no named patient to compare.
    pub loss_comparison: Option<LossComparison>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnualStatistics {
    pub yearly: Vec<YearlyLoss>,
    pub selected_year: i32,
    /// Always twelve entries, January first.
    pub monthly: Vec<MonthlyLoss>,
}

// --

impl<T> StatisticsView<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            StatisticsView::Ready(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StatisticsView::Ready(_))
    }

    /// Notice shown in place of a chart, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            StatisticsView::NoData => Some("Aucune donnée disponible."),
            StatisticsView::EmptyPeriod(_) => Some("Aucune absence sur cette période."),
            StatisticsView::Ready(_) => None,
        }
    }
}
