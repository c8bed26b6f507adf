use std::collections::BTreeSet;

use fractic_server_error::ServerError;

use crate::{
    entities::{AbsenceLedger, AbsenceRecord, CellEdit, LedgerDiff},
    errors::{InvalidFinancialLoss, NegativeFinancialLoss, RowOutOfBounds},
};

/// Pure ledger mutations. Nothing here touches the store; callers persist the
/// returned ledger themselves.
pub(crate) struct LedgerEditor<'a> {
    ledger: &'a AbsenceLedger,
}

impl<'a> LedgerEditor<'a> {
    pub(crate) fn new(ledger: &'a AbsenceLedger) -> Self {
        Self { ledger }
    }

    /// New ledger with `record` as its last row.
    pub(crate) fn append(&self, record: AbsenceRecord) -> Result<AbsenceLedger, ServerError> {
        self.apply_diff(&LedgerDiff::new().add(record))
    }

    /// New ledger with `diff` applied: edits, then deletions, then additions.
    /// Any invalid row or value rejects the whole diff.
    pub(crate) fn apply_diff(&self, diff: &LedgerDiff) -> Result<AbsenceLedger, ServerError> {
        let len = self.ledger.len();
        let mut records = self.ledger.records().to_vec();

        for (&row, edits) in &diff.edited_rows {
            let record = records
                .get_mut(row)
                .ok_or_else(|| RowOutOfBounds::new(row, len))?;
            for edit in edits {
                apply_cell_edit(record, edit)?;
            }
        }

        let deleted: BTreeSet<usize> = diff.deleted_rows.iter().copied().collect();
        if let Some(&row) = deleted.iter().find(|&&row| row >= len) {
            return Err(RowOutOfBounds::new(row, len));
        }
        let mut row = 0;
        records.retain(|_| {
            let keep = !deleted.contains(&row);
            row += 1;
            keep
        });

        for record in &diff.added_rows {
            check_loss(record.financial_loss)?;
            records.push(record.clone());
        }

        Ok(AbsenceLedger::from(records))
    }
}

fn apply_cell_edit(record: &mut AbsenceRecord, edit: &CellEdit) -> Result<(), ServerError> {
    match edit {
        CellEdit::PatientName(name) => record.patient_name = name.clone(),
        CellEdit::AbsenceDate(date) => record.absence_date = *date,
        CellEdit::Status(status) => record.status = *status,
        CellEdit::FinancialLoss(amount) => {
            check_loss(*amount)?;
            record.financial_loss = *amount;
        }
        CellEdit::CareType(care_type) => record.care_type = *care_type,
        CellEdit::Comment(comment) => record.comment = comment.clone(),
    }
    Ok(())
}

fn check_loss(amount: f64) -> Result<(), ServerError> {
    if !amount.is_finite() {
        return Err(InvalidFinancialLoss::new(&amount.to_string()));
    }
    if amount < 0.0 {
        return Err(NegativeFinancialLoss::new(amount));
    }
    Ok(())
}
