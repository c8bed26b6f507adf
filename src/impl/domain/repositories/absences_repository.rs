use fractic_server_error::ServerError;

use crate::entities::AbsenceRecord;

/// Persistent home of the absence ledger. The whole table is read and written
/// at once.
pub trait AbsencesRepository {
    /// Returns an empty table if nothing has been persisted yet.
    fn load(&self) -> Result<Vec<AbsenceRecord>, ServerError>;

    /// Replaces the persisted table with `records`.
    fn save(&self, records: &[AbsenceRecord]) -> Result<(), ServerError>;
}
