use std::path::Path;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    charts::{ChartRenderer, ChartSpec},
    config::DashboardConfig,
    domain::{
        logic::{report_composer::ReportComposer, report_text_catalog::REPORT_TEXTS},
        usecases::{
            ledger_usecase::{LedgerUsecase as _, LedgerUsecaseImpl},
            statistics_usecase::StatisticsUsecase,
        },
    },
    entities::{
        AbsenceLedger, AbsenceRecord, AnnualStatistics, AssessmentSelections, LedgerDiff,
        PeriodStatistics, ReportArtifact, ReportDocument, StatisticsView,
    },
    presentation::{docx_writer::DocxWriter, report_preview::ReportPreviewPrinter},
};

/// One dashboard session: the ledger, loaded once at start, plus everything
/// needed to mutate, persist, chart and report on it.
///
/// The persisted store is rewritten after every mutation, so the file and
/// [`ledger`](Self::ledger) match whenever a method returns. Only one session
/// should write to a given store at a time.
pub struct AbsenceDashboardUtil {
    ledger: AbsenceLedger,
    ledger_usecase: LedgerUsecaseImpl,
    statistics_usecase: StatisticsUsecase,
    chart_renderer: ChartRenderer,
    docx_writer: DocxWriter,
    preview_printer: ReportPreviewPrinter,
}

impl AbsenceDashboardUtil {
    /// Opens the store at `data_path`, starting with an empty ledger if the
    /// file does not exist. A malformed file is an error.
    pub fn open(data_path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let ledger_usecase = LedgerUsecaseImpl::new(data_path);
        let ledger = ledger_usecase.load()?;
        Ok(Self {
            ledger,
            ledger_usecase,
            statistics_usecase: StatisticsUsecase::new(),
            chart_renderer: ChartRenderer::new(),
            docx_writer: DocxWriter::new(),
            preview_printer: ReportPreviewPrinter::new(),
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, ServerError> {
        Self::open(&config.data_path)
    }

    pub fn ledger(&self) -> &AbsenceLedger {
        &self.ledger
    }

    // Ledger.
    // ---

    pub fn add_absence(&mut self, record: AbsenceRecord) -> Result<(), ServerError> {
        self.ledger = self.ledger_usecase.append(&self.ledger, record)?;
        Ok(())
    }

    /// Applies edits and deletions from the grid. The store is rewritten even
    /// when `diff` is empty.
    pub fn apply_grid_diff(&mut self, diff: &LedgerDiff) -> Result<(), ServerError> {
        self.ledger = self.ledger_usecase.edit_or_delete(&self.ledger, diff)?;
        Ok(())
    }

    // Statistics.
    // ---

    pub fn period_statistics(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        patient: Option<&str>,
    ) -> StatisticsView<PeriodStatistics> {
        self.statistics_usecase
            .period_statistics(&self.ledger, start, end, patient)
    }

    pub fn annual_statistics(&self, year: Option<i32>) -> StatisticsView<AnnualStatistics> {
        self.statistics_usecase.annual_statistics(&self.ledger, year)
    }

    /// Patient/status chart, plus the loss comparison chart when a patient is
    /// selected.
    pub fn period_charts(&self, statistics: &PeriodStatistics) -> Vec<ChartSpec> {
        let mut charts = vec![self
            .chart_renderer
            .absences_by_patient_status(&statistics.absences_by_patient_status)];
        if let Some(comparison) = &statistics.loss_comparison {
            charts.push(self.chart_renderer.loss_comparison(comparison));
        }
        charts
    }

    pub fn annual_charts(&self, statistics: &AnnualStatistics) -> Vec<ChartSpec> {
        vec![
            self.chart_renderer.yearly_loss(&statistics.yearly),
            self.chart_renderer
                .monthly_loss(statistics.selected_year, &statistics.monthly),
        ]
    }

    // Reports.
    // ---

    pub fn compose_report(
        &self,
        patient: &str,
        selections: &AssessmentSelections,
    ) -> ReportDocument {
        ReportComposer::new(&REPORT_TEXTS).compose(patient, selections)
    }

    /// Builds the DOCX report for `patient`. Nothing is written to disk.
    pub fn generate_report(
        &self,
        patient: &str,
        selections: &AssessmentSelections,
    ) -> Result<ReportArtifact, ServerError> {
        self.write_report(&self.compose_report(patient, selections))
    }

    /// Serializes an already composed report to DOCX bytes.
    pub fn write_report(&self, report: &ReportDocument) -> Result<ReportArtifact, ServerError> {
        self.docx_writer.write(report)
    }

    pub fn preview_report(&self, report: &ReportDocument) -> String {
        self.preview_printer.print(report)
    }
}
