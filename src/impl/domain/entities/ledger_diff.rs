use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::absence_record::{AbsenceRecord, AbsenceStatus, CareType};

/// A single cell change coming from the editing grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CellEdit {
    PatientName(String),
    AbsenceDate(NaiveDate),
    Status(AbsenceStatus),
    FinancialLoss(f64),
    CareType(CareType),
    Comment(String),
}

/// Everything one grid interaction changed.
///
/// Row indices in `edited_rows` and `deleted_rows` refer to the ledger as it
/// was before the diff. Edits are applied first, then deletions, then the
/// added rows are appended in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerDiff {
    pub edited_rows: BTreeMap<usize, Vec<CellEdit>>,
    pub deleted_rows: Vec<usize>,
    pub added_rows: Vec<AbsenceRecord>,
}

impl LedgerDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(mut self, row: usize, edit: CellEdit) -> Self {
        self.edited_rows.entry(row).or_default().push(edit);
        self
    }

    pub fn delete(mut self, row: usize) -> Self {
        self.deleted_rows.push(row);
        self
    }

    pub fn add(mut self, record: AbsenceRecord) -> Self {
        self.added_rows.push(record);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edited_rows.is_empty() && self.deleted_rows.is_empty() && self.added_rows.is_empty()
    }
}
