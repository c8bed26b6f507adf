use std::path::{Path, PathBuf};

use fractic_server_error::ServerError;

use crate::{
    data::datasources::absences_csv_datasource::{
        AbsencesCsvDatasource, AbsencesCsvDatasourceImpl,
    },
    domain::repositories::absences_repository::AbsencesRepository,
    entities::AbsenceRecord,
};

pub(crate) struct AbsencesRepositoryImpl<DS = AbsencesCsvDatasourceImpl>
where
    DS: AbsencesCsvDatasource,
{
    path: PathBuf,
    datasource: DS,
}

impl<DS> AbsencesRepository for AbsencesRepositoryImpl<DS>
where
    DS: AbsencesCsvDatasource,
{
    fn load(&self) -> Result<Vec<AbsenceRecord>, ServerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no absence store yet, starting empty");
            return Ok(Vec::new());
        }
        let records = self.datasource.from_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), rows = records.len(), "loaded absence store");
        Ok(records)
    }

    fn save(&self, records: &[AbsenceRecord]) -> Result<(), ServerError> {
        self.datasource.to_file(&self.path, records)?;
        tracing::info!(path = %self.path.display(), rows = records.len(), "saved absence store");
        Ok(())
    }
}

impl AbsencesRepositoryImpl<AbsencesCsvDatasourceImpl> {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        AbsencesRepositoryImpl {
            path: path.as_ref().to_path_buf(),
            datasource: AbsencesCsvDatasourceImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        entities::{AbsenceStatus, CareType},
        errors::UnexpectedStoreColumns,
    };

    fn sample() -> Vec<AbsenceRecord> {
        vec![
            AbsenceRecord::new(
                "Alice",
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                AbsenceStatus::NoShow,
                40.0,
                CareType::Consultation,
            ),
            AbsenceRecord::new(
                "Bob",
                NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
                AbsenceStatus::Rescheduled,
                0.0,
                CareType::FollowUp,
            )
            .with_comment("prévenu la veille"),
        ]
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repository = AbsencesRepositoryImpl::new(dir.path().join("absences.csv"));
        assert!(repository.load().unwrap().is_empty());
        assert!(!dir.path().join("absences.csv").exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repository = AbsencesRepositoryImpl::new(dir.path().join("absences.csv"));
        repository.save(&sample()).unwrap();
        assert_eq!(repository.load().unwrap(), sample());
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let repository = AbsencesRepositoryImpl::new(dir.path().join("absences.csv"));
        repository.save(&sample()).unwrap();
        repository.save(&sample()[..1]).unwrap();
        assert_eq!(repository.load().unwrap(), sample()[..1].to_vec());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absences.csv");
        std::fs::write(&path, "not,a,store\n1,2,3\n").unwrap();
        let err = AbsencesRepositoryImpl::new(&path).load().unwrap_err();
        let expected = UnexpectedStoreColumns::new("not,a,store").to_string();
        assert!(err.to_string().contains(&expected), "{err}");
    }
}
