use fractic_server_error::ServerError;

use crate::{
    data::repositories::absences_repository_impl::AbsencesRepositoryImpl,
    domain::{
        logic::ledger_editor::LedgerEditor,
        repositories::absences_repository::AbsencesRepository,
    },
    entities::{AbsenceLedger, AbsenceRecord, LedgerDiff},
};

pub trait LedgerUsecase {
    /// Persisted ledger, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AbsenceLedger, ServerError>;

    /// Appends `record` and persists the result before returning it.
    fn append(
        &self,
        ledger: &AbsenceLedger,
        record: AbsenceRecord,
    ) -> Result<AbsenceLedger, ServerError>;

    /// Applies a grid diff and persists the result before returning it. The
    /// store is written even if the diff changes nothing.
    fn edit_or_delete(
        &self,
        ledger: &AbsenceLedger,
        diff: &LedgerDiff,
    ) -> Result<AbsenceLedger, ServerError>;

    fn persist(&self, ledger: &AbsenceLedger) -> Result<(), ServerError>;
}

pub(crate) struct LedgerUsecaseImpl<
    R1 = AbsencesRepositoryImpl, // Default.
> where
    R1: AbsencesRepository,
{
    absences_repository: R1,
}

impl<R1> LedgerUsecase for LedgerUsecaseImpl<R1>
where
    R1: AbsencesRepository,
{
    fn load(&self) -> Result<AbsenceLedger, ServerError> {
        Ok(AbsenceLedger::from(self.absences_repository.load()?))
    }

    fn append(
        &self,
        ledger: &AbsenceLedger,
        record: AbsenceRecord,
    ) -> Result<AbsenceLedger, ServerError> {
        let updated = LedgerEditor::new(ledger).append(record)?;
        self.persist(&updated)?;
        Ok(updated)
    }

    fn edit_or_delete(
        &self,
        ledger: &AbsenceLedger,
        diff: &LedgerDiff,
    ) -> Result<AbsenceLedger, ServerError> {
        tracing::debug!(
            edited = diff.edited_rows.len(),
            deleted = diff.deleted_rows.len(),
            added = diff.added_rows.len(),
            "applying ledger diff"
        );
        let updated = LedgerEditor::new(ledger).apply_diff(diff)?;
        self.persist(&updated)?;
        Ok(updated)
    }

    fn persist(&self, ledger: &AbsenceLedger) -> Result<(), ServerError> {
        self.absences_repository.save(ledger.records())
    }
}

impl<R1: AbsencesRepository> LedgerUsecaseImpl<R1> {
    pub(crate) fn with_repository(absences_repository: R1) -> Self {
        LedgerUsecaseImpl {
            absences_repository,
        }
    }
}

impl LedgerUsecaseImpl {
    pub(crate) fn new(path: impl AsRef<std::path::Path>) -> Self {
        Self::with_repository(AbsencesRepositoryImpl::new(path))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{AbsenceStatus, CareType, CellEdit};

    #[derive(Default)]
    struct InMemoryRepository {
        stored: RefCell<Vec<AbsenceRecord>>,
        saves: RefCell<usize>,
    }

    impl AbsencesRepository for &InMemoryRepository {
        fn load(&self) -> Result<Vec<AbsenceRecord>, ServerError> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, records: &[AbsenceRecord]) -> Result<(), ServerError> {
            *self.stored.borrow_mut() = records.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn record(patient: &str) -> AbsenceRecord {
        AbsenceRecord::new(
            patient,
            NaiveDate::from_ymd_opt(2024, 9, 9).unwrap(),
            AbsenceStatus::NoShow,
            35.0,
            CareType::FollowUp,
        )
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let repository = InMemoryRepository::default();
        let usecase = LedgerUsecaseImpl::with_repository(&repository);

        let ledger = usecase.load().unwrap();
        let ledger = usecase.append(&ledger, record("Alice")).unwrap();
        assert_eq!(*repository.stored.borrow(), ledger.records());

        let ledger = usecase
            .edit_or_delete(&ledger, &LedgerDiff::new().edit(0, CellEdit::Comment("x".into())))
            .unwrap();
        assert_eq!(repository.stored.borrow()[0].comment, "x");
        assert_eq!(*repository.saves.borrow(), 2);

        usecase.edit_or_delete(&ledger, &LedgerDiff::new()).unwrap();
        assert_eq!(*repository.saves.borrow(), 3);
    }

    #[test]
    fn test_rejected_diff_writes_nothing() {
        let repository = InMemoryRepository::default();
        let usecase = LedgerUsecaseImpl::with_repository(&repository);
        let ledger = usecase.append(&AbsenceLedger::new(), record("Alice")).unwrap();

        assert!(usecase
            .edit_or_delete(&ledger, &LedgerDiff::new().delete(7))
            .is_err());
        assert_eq!(*repository.saves.borrow(), 1);
        assert_eq!(repository.stored.borrow().len(), 1);
    }
}
