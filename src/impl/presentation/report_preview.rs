use crate::entities::{ReportBlock, ReportDocument};

const WRAP_WIDTH: usize = 78;

/// Plain-text rendering of a report, for terminals.
pub(crate) struct ReportPreviewPrinter;

impl ReportPreviewPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, report: &ReportDocument) -> String {
        let mut output = String::new();
        output.push_str(&report.title);
        output.push('\n');
        output.push_str(&"=".repeat(report.title.chars().count()));
        output.push('\n');

        for block in &report.blocks {
            match block {
                ReportBlock::Heading { level: 1, text } => {
                    output.push('\n');
                    output.push_str(text);
                    output.push('\n');
                    output.push_str(&"-".repeat(text.chars().count()));
                    output.push('\n');
                }
                ReportBlock::Heading { text, .. } => {
                    output.push_str("\n## ");
                    output.push_str(text);
                    output.push('\n');
                }
                ReportBlock::Paragraph(text) => {
                    for line in textwrap::wrap(text, WRAP_WIDTH) {
                        output.push_str(&line);
                        output.push('\n');
                    }
                }
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_layout() {
        let report = ReportDocument {
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
                ReportBlock::Paragraph("mot ".repeat(40).trim_end().to_string()),
            ],
        };
        let preview = ReportPreviewPrinter::new().print(&report);
        assert!(preview.starts_with("Bilan pour Patient 1\n====="));
        assert!(preview.contains("\nBilan type A\n------------\n"));
        assert!(preview.contains("\n## épreuve 1.1\n"));
        assert!(preview.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
        assert!(preview.lines().filter(|l| l.starts_with("mot")).count() >= 2);
    }
}
