use std::collections::HashSet;

use crate::{
    domain::logic::report_text_catalog::ReportTextCatalog,
    entities::{AssessmentSelections, ReportBlock, ReportDocument},
};

pub(crate) struct ReportComposer<'a> {
    catalog: &'a ReportTextCatalog,
}

impl<'a> ReportComposer<'a> {
    pub(crate) fn new(catalog: &'a ReportTextCatalog) -> Self {
        Self { catalog }
    }

    /// Builds the report for `patient`.
    ///
    /// Each assessment type gets one level-1 heading, placed where the type is
    /// first seen in `selections`. Every selected test gets a level-2 heading
    /// followed by its catalog text, or the placeholder if the combination is
    /// not in the catalog.
    pub(crate) fn compose(
        &self,
        patient: &str,
        selections: &AssessmentSelections,
    ) -> ReportDocument {
        let mut blocks = Vec::new();
        let mut seen_types: HashSet<&str> = HashSet::new();

        for (key, level) in selections.iter() {
            if seen_types.insert(key.assessment_type.as_str()) {
                blocks.push(ReportBlock::Heading {
                    level: 1,
                    text: key.assessment_type.clone(),
                });
            }
            blocks.push(ReportBlock::Heading {
                level: 2,
                text: key.test_name.clone(),
            });
            let text = match self.catalog.get(key, level) {
                Some(text) => text,
                None => {
                    tracing::warn!(
                        assessment_type = %key.assessment_type,
                        test = %key.test_name,
                        level = %level,
                        "no report text for combination, using placeholder"
                    );
                    self.catalog.text_or_placeholder(key, level)
                }
            };
            blocks.push(ReportBlock::Paragraph(text.to_string()));
        }

        ReportDocument {
            patient: patient.to_string(),
            title: format!("Bilan pour {}", patient),
            blocks,
        }
    }
}
