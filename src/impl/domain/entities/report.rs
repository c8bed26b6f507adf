pub const REPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    /// Level 1 for assessment types, level 2 for tests.
    Heading { level: u8, text: String },
    Paragraph(String),
}

/// Structured report, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub patient: String,
    pub title: String,
    pub blocks: Vec<ReportBlock>,
}

/// A serialized report ready to be handed over as a download.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

// --

impl ReportDocument {
    pub fn headings(&self, level: u8) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(move |b| match b {
            ReportBlock::Heading { level: l, text } if *l == level => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            ReportBlock::Paragraph(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn file_name(&self) -> String {
        format!("bilan_{}.docx", self.patient.replace(' ', "_"))
    }
}
