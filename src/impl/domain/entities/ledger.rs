use super::absence_record::AbsenceRecord;

/// Working copy of every absence record in the current session.
///
/// Row order is insertion order, and the row index is the only identity a
/// record has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsenceLedger {
    records: Vec<AbsenceRecord>,
}

impl AbsenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AbsenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&AbsenceRecord> {
        self.records.get(row)
    }
}

impl From<Vec<AbsenceRecord>> for AbsenceLedger {
    fn from(records: Vec<AbsenceRecord>) -> Self {
        Self { records }
    }
}
