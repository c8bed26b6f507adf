use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    entities::{AbsenceStatus, CareType},
    errors::{UnknownAbsenceStatus, UnknownCareType},
};

#[derive(Debug)]
pub(crate) struct AbsenceStatusModel(AbsenceStatus);
impl FromStr for AbsenceStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbsenceStatus::from_label(s)
            .map(AbsenceStatusModel)
            .ok_or_else(|| UnknownAbsenceStatus::new(s.trim()))
    }
}
impl Into<AbsenceStatus> for AbsenceStatusModel {
    fn into(self) -> AbsenceStatus {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct CareTypeModel(CareType);
impl FromStr for CareTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CareType::from_label(s)
            .map(CareTypeModel)
            .ok_or_else(|| UnknownCareType::new(s.trim()))
    }
}
impl Into<CareType> for CareTypeModel {
    fn into(self) -> CareType {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_parse_back() {
        for status in AbsenceStatus::ALL {
            let parsed: AbsenceStatus =
                status.label().parse::<AbsenceStatusModel>().unwrap().into();
            assert_eq!(parsed, status);
        }
        let padded: AbsenceStatus = " Non venue ".parse::<AbsenceStatusModel>().unwrap().into();
        assert_eq!(padded, AbsenceStatus::NoShow);
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!("Absent".parse::<AbsenceStatusModel>().is_err());
        assert!("Hospitalisation".parse::<CareTypeModel>().is_err());
    }
}
