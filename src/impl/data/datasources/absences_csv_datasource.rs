use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{
        financial_loss_model::FinancialLossModel,
        iso_date_model::ISODateModel,
        label_models::{AbsenceStatusModel, CareTypeModel},
    },
    entities::AbsenceRecord,
    errors::{InvalidCsv, MalformedStoreFile, ReadError, UnexpectedStoreColumns, WriteError},
};

/// Column headers of the absence store, in file order.
pub(crate) const STORE_COLUMNS: [&str; 6] = [
    "Nom du patient",
    "Date de l'absence",
    "Statut de l'absence",
    "MAG",
    "Type de prise en charge",
    "Commentaire",
];

pub(crate) trait AbsencesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<AbsenceRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<AbsenceRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;

    fn to_string(&self, records: &[AbsenceRecord]) -> Result<String, ServerError>;

    fn to_file<P>(&self, path: P, records: &[AbsenceRecord]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct AbsencesCsvDatasourceImpl;

impl AbsencesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AbsencesCsvDatasource for AbsencesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<AbsenceRecord>, ServerError> {
        let mut reader = csv::Reader::from_reader(s.as_bytes());

        let headers = reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?;
        if headers.iter().map(str::trim).ne(STORE_COLUMNS) {
            return Err(UnexpectedStoreColumns::new(
                &headers.iter().collect::<Vec<_>>().join(","),
            ));
        }

        reader
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Physical line where the row starts; quoted cells may span
                    // several lines.
                    let line = r.position().map_or(i + 2, |p| p.line() as usize);
                    let malformed = |column: usize, e: ServerError| {
                        MalformedStoreFile::with_debug(line, STORE_COLUMNS[column], &e)
                    };

                    // Extract from CSV record.
                    let raw_patient_name = r.get(0).unwrap_or("");
                    let raw_absence_date = r.get(1).unwrap_or("");
                    let raw_status = r.get(2).unwrap_or("");
                    let raw_financial_loss = r.get(3).unwrap_or("");
                    let raw_care_type = r.get(4).unwrap_or("");
                    let raw_comment = r.get(5).unwrap_or("");

                    // Parse.
                    let absence_date = ISODateModel::from_str(raw_absence_date)
                        .map_err(|e| malformed(1, e))?;
                    let status = AbsenceStatusModel::from_str(raw_status)
                        .map_err(|e| malformed(2, e))?;
                    let financial_loss = FinancialLossModel::from_str(raw_financial_loss)
                        .map_err(|e| malformed(3, e))?;
                    let care_type =
                        CareTypeModel::from_str(raw_care_type).map_err(|e| malformed(4, e))?;

                    // Build.
                    Ok(AbsenceRecord {
                        patient_name: raw_patient_name.into(),
                        absence_date: absence_date.into(),
                        status: status.into(),
                        financial_loss: financial_loss.into(),
                        care_type: care_type.into(),
                        comment: raw_comment.into(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<AbsenceRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }

    fn to_string(&self, records: &[AbsenceRecord]) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(STORE_COLUMNS)
            .map_err(|e| WriteError::with_debug(&e))?;
        for record in records {
            writer
                .write_record([
                    record.patient_name.clone(),
                    ISODateModel::from(record.absence_date).to_string(),
                    record.status.label().to_string(),
                    FinancialLossModel(record.financial_loss).to_string(),
                    record.care_type.label().to_string(),
                    record.comment.clone(),
                ])
                .map_err(|e| WriteError::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| WriteError::with_debug(&e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| WriteError::with_debug(&e))
    }

    fn to_file<P>(&self, path: P, records: &[AbsenceRecord]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        // Overwrites in place; there is no temp-file-and-rename step.
        fs::write(path, self.to_string(records)?).map_err(|e| WriteError::with_debug(&e))
    }
}
