use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AbsenceStatus {
    Cancelled,
    NoShow,
    Excused,
    Rescheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CareType {
    Consultation,
    FollowUp,
    Emergency,
    Assessment,
}

/// One missed or cancelled appointment.
///
/// Records have no key of their own: a record is identified by its row
/// position in the ledger, and duplicate (patient, date) pairs are legal.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceRecord {
    pub patient_name: String,
    pub absence_date: NaiveDate,
    pub status: AbsenceStatus,
    /// Revenue lost because of the absence (MAG), in euros.
    pub financial_loss: f64,
    pub care_type: CareType,
    pub comment: String,
}

// --

impl AbsenceStatus {
    pub const ALL: [AbsenceStatus; 4] = [
        AbsenceStatus::Cancelled,
        AbsenceStatus::NoShow,
        AbsenceStatus::Excused,
        AbsenceStatus::Rescheduled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AbsenceStatus::Cancelled => "Annulée",
            AbsenceStatus::NoShow => "Non venue",
            AbsenceStatus::Excused => "Excusée",
            AbsenceStatus::Rescheduled => "Reportée",
        }
    }

    /// Inverse of [`label`](Self::label), ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl CareType {
    pub const ALL: [CareType; 4] = [
        CareType::Consultation,
        CareType::FollowUp,
        CareType::Emergency,
        CareType::Assessment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CareType::Consultation => "Consultation",
            CareType::FollowUp => "Suivi",
            CareType::Emergency => "Urgence",
            CareType::Assessment => "Bilan",
        }
    }

    /// Inverse of [`label`](Self::label), ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl AbsenceRecord {
    pub fn new(
        patient_name: impl Into<String>,
        absence_date: NaiveDate,
        status: AbsenceStatus,
        financial_loss: f64,
        care_type: CareType,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            absence_date,
            status,
            financial_loss,
            care_type,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
