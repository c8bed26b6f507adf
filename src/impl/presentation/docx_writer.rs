use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use fractic_server_error::ServerError;

use crate::{
    entities::{ReportArtifact, ReportBlock, ReportDocument, REPORT_CONTENT_TYPE},
    errors::DocumentSerializationFailed,
};

const TITLE_STYLE: &str = "Title";
const HEADING_1_STYLE: &str = "Heading1";
const HEADING_2_STYLE: &str = "Heading2";

/// Serializes reports to DOCX entirely in memory.
pub(crate) struct DocxWriter;

impl DocxWriter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn write(&self, report: &ReportDocument) -> Result<ReportArtifact, ServerError> {
        let mut docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(52),
            )
            .add_style(
                Style::new(HEADING_1_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_style(
                Style::new(HEADING_2_STYLE, StyleType::Paragraph)
                    .name("Heading 2")
                    .size(26)
                    .bold(),
            )
            .add_paragraph(styled(&report.title, TITLE_STYLE));

        for block in &report.blocks {
            docx = docx.add_paragraph(match block {
                ReportBlock::Heading { level: 1, text } => styled(text, HEADING_1_STYLE),
                ReportBlock::Heading { text, .. } => styled(text, HEADING_2_STYLE),
                ReportBlock::Paragraph(text) => {
                    Paragraph::new().add_run(Run::new().add_text(text.as_str()))
                }
            });
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| DocumentSerializationFailed::with_debug(&report.patient, &e))?;

        tracing::info!(
            patient = %report.patient,
            bytes = buffer.get_ref().len(),
            "generated report"
        );
        Ok(ReportArtifact {
            file_name: report.file_name(),
            content_type: REPORT_CONTENT_TYPE,
            bytes: buffer.into_inner(),
        })
    }
}

fn styled(text: &str, style: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ReportDocument {
        ReportDocument {
            patient: "Patient 1".into(),
            title: "Bilan pour Patient 1".into(),
            blocks: vec![
                ReportBlock::Heading {
                    level: 1,
                    text: "Bilan type A".into(),
                },
                ReportBlock::Heading {
                    level: 2,
                    text: "épreuve 1.1".into(),
                },
                ReportBlock::Paragraph("Texte non défini.".into()),
            ],
        }
    }

    #[test]
    fn test_writes_zip_container_in_memory() {
        let artifact = DocxWriter::new().write(&report()).unwrap();
        assert!(artifact.bytes.starts_with(b"PK"));
        assert_eq!(artifact.file_name, "bilan_Patient_1.docx");
        assert_eq!(
            artifact.content_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_written_document_reads_back() {
        let artifact = DocxWriter::new().write(&report()).unwrap();
        assert!(docx_rs::read_docx(&artifact.bytes).is_ok());
    }
}
