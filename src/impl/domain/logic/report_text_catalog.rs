use std::{collections::HashMap, sync::LazyLock};

use crate::entities::{AssessmentKey, ResultLevel};

/// Text used when a (type, test, level) combination has no entry.
pub const PLACEHOLDER_TEXT: &str = "Texte non défini.";

/// Immutable lookup from (assessment type, test, result level) to the
/// narrative paragraph inserted in reports.
#[derive(Debug)]
pub struct ReportTextCatalog {
    texts: HashMap<(&'static str, &'static str, &'static str), &'static str>,
    /// Assessment types and their tests, in menu order.
    menu: Vec<(&'static str, Vec<&'static str>)>,
}

impl ReportTextCatalog {
    fn from_entries(
        entries: &[(&'static str, &'static str, &'static str, &'static str)],
    ) -> Self {
        let mut texts = HashMap::new();
        let mut menu: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
        for &(assessment_type, test_name, level, text) in entries {
            texts.insert((assessment_type, test_name, level), text);
            match menu.iter().position(|(t, _)| *t == assessment_type) {
                Some(i) if !menu[i].1.contains(&test_name) => menu[i].1.push(test_name),
                Some(_) => {}
                None => menu.push((assessment_type, vec![test_name])),
            }
        }
        Self { texts, menu }
    }

    /// Narrative text for the combination, if the catalog defines one.
    pub fn get(&self, key: &AssessmentKey, level: &ResultLevel) -> Option<&'static str> {
        if let ResultLevel::Unlisted(_) = level {
            return None;
        }
        // Narrow the key lifetimes so borrowed strings can be looked up.
        let texts: &HashMap<(&str, &str, &str), &'static str> = &self.texts;
        texts
            .get(&(
                key.assessment_type.as_str(),
                key.test_name.as_str(),
                level.label(),
            ))
            .copied()
    }

    /// Like [`get`](Self::get), falling back to [`PLACEHOLDER_TEXT`].
    pub fn text_or_placeholder(&self, key: &AssessmentKey, level: &ResultLevel) -> &'static str {
        self.get(key, level).unwrap_or(PLACEHOLDER_TEXT)
    }

    pub fn assessment_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.menu.iter().map(|(t, _)| *t)
    }

    pub fn tests_for(&self, assessment_type: &str) -> &[&'static str] {
        self.menu
            .iter()
            .find(|(t, _)| *t == assessment_type)
            .map(|(_, tests)| tests.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

pub static REPORT_TEXTS: LazyLock<ReportTextCatalog> = LazyLock::new(|| {
    ReportTextCatalog::from_entries(&[
        // Bilan type A.
        (
            "Bilan type A",
            "épreuve 1.1",
            "faible",
            "Résultat faible à l’épreuve 1.1 du bilan type A, indiquant des capacités limitées.",
        ),
        (
            "Bilan type A",
            "épreuve 1.1",
            "moyen",
            "Résultat moyen à l’épreuve 1.1 du bilan type A, correspondant à une performance modérée.",
        ),
        (
            "Bilan type A",
            "épreuve 1.1",
            "bon",
            "Bon résultat à l’épreuve 1.1 du bilan type A, reflétant des compétences solides.",
        ),
        (
            "Bilan type A",
            "épreuve 1.2",
            "faible",
            "Performance faible à l’épreuve 1.2, ce qui suggère des difficultés notables.",
        ),
        (
            "Bilan type A",
            "épreuve 1.2",
            "moyen",
            "Performance moyenne à l’épreuve 1.2, résultat dans la norme.",
        ),
        (
            "Bilan type A",
            "épreuve 1.2",
            "bon",
            "Résultat satisfaisant à l’épreuve 1.2, montrant une bonne maîtrise.",
        ),
        (
            "Bilan type A",
            "épreuve 1.3",
            "faible",
            "L’épreuve 1.3 révèle une performance faible, nécessitant une attention particulière.",
        ),
        (
            "Bilan type A",
            "épreuve 1.3",
            "moyen",
            "L’épreuve 1.3 montre un niveau intermédiaire, sans difficulté majeure.",
        ),
        (
            "Bilan type A",
            "épreuve 1.3",
            "bon",
            "L’épreuve 1.3 est réussie avec de bons résultats.",
        ),
        // Bilan type B.
        (
            "Bilan type B",
            "épreuve 2.1",
            "faible",
            "Résultat faible à l’épreuve 2.1 du bilan type B, en dessous des attentes.",
        ),
        (
            "Bilan type B",
            "épreuve 2.1",
            "moyen",
            "Résultat moyen à l’épreuve 2.1, indiquant une performance acceptable.",
        ),
        (
            "Bilan type B",
            "épreuve 2.1",
            "bon",
            "Très bonne performance à l’épreuve 2.1, dans les normes supérieures.",
        ),
        (
            "Bilan type B",
            "épreuve 2.2",
            "faible",
            "Épreuve 2.2 difficile pour le patient, avec des résultats faibles.",
        ),
        (
            "Bilan type B",
            "épreuve 2.2",
            "moyen",
            "Épreuve 2.2 réalisée avec des résultats moyens.",
        ),
        (
            "Bilan type B",
            "épreuve 2.2",
            "bon",
            "Épreuve 2.2 réussie avec de bons résultats, conforme aux attentes.",
        ),
        (
            "Bilan type B",
            "épreuve 2.3",
            "faible",
            "Des limites importantes sont observées à l’épreuve 2.3.",
        ),
        (
            "Bilan type B",
            "épreuve 2.3",
            "moyen",
            "Résultat intermédiaire à l’épreuve 2.3.",
        ),
        (
            "Bilan type B",
            "épreuve 2.3",
            "bon",
            "Bonne réussite de l’épreuve 2.3, sans difficulté apparente.",
        ),
        // Bilan type C.
        (
            "Bilan type C",
            "épreuve 3.1",
            "faible",
            "L’épreuve 3.1 a révélé un résultat faible, en deçà de la norme attendue.",
        ),
        (
            "Bilan type C",
            "épreuve 3.1",
            "moyen",
            "Résultat moyen obtenu à l’épreuve 3.1.",
        ),
        (
            "Bilan type C",
            "épreuve 3.1",
            "bon",
            "Excellente performance à l’épreuve 3.1, sans difficulté.",
        ),
        (
            "Bilan type C",
            "épreuve 3.2",
            "faible",
            "Faiblesse marquée sur l’épreuve 3.2 du bilan C.",
        ),
        (
            "Bilan type C",
            "épreuve 3.2",
            "moyen",
            "Résultat correct à l’épreuve 3.2.",
        ),
        (
            "Bilan type C",
            "épreuve 3.2",
            "bon",
            "Très bon score à l’épreuve 3.2.",
        ),
        (
            "Bilan type C",
            "épreuve 3.3",
            "faible",
            "Performance en difficulté à l’épreuve 3.3.",
        ),
        (
            "Bilan type C",
            "épreuve 3.3",
            "moyen",
            "Performance dans la moyenne pour l’épreuve 3.3.",
        ),
        (
            "Bilan type C",
            "épreuve 3.3",
            "bon",
            "Résultat élevé à l’épreuve 3.3, montrant de bonnes capacités.",
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_menu_combination() {
        assert_eq!(REPORT_TEXTS.len(), 27);
        for assessment_type in REPORT_TEXTS.assessment_types() {
            let tests = REPORT_TEXTS.tests_for(assessment_type);
            assert_eq!(tests.len(), 3);
            for test in tests {
                let key = AssessmentKey::new(assessment_type, *test);
                for level in [ResultLevel::Low, ResultLevel::Medium, ResultLevel::Good] {
                    assert!(REPORT_TEXTS.get(&key, &level).is_some());
                }
            }
        }
    }

    #[test]
    fn test_menu_keeps_declaration_order() {
        let types: Vec<_> = REPORT_TEXTS.assessment_types().collect();
        assert_eq!(types, ["Bilan type A", "Bilan type B", "Bilan type C"]);
        assert_eq!(
            REPORT_TEXTS.tests_for("Bilan type B"),
            ["épreuve 2.1", "épreuve 2.2", "épreuve 2.3"]
        );
        assert!(REPORT_TEXTS.tests_for("Bilan type Z").is_empty());
    }

    #[test]
    fn test_unknown_combinations_fall_back_to_placeholder() {
        let key = AssessmentKey::new("Bilan type A", "épreuve 1.1");
        assert_eq!(
            REPORT_TEXTS.text_or_placeholder(&key, &ResultLevel::Unlisted("excellent".into())),
            PLACEHOLDER_TEXT
        );
        let foreign = AssessmentKey::new("Bilan type A", "épreuve 2.1");
        assert_eq!(
            REPORT_TEXTS.text_or_placeholder(&foreign, &ResultLevel::Good),
            "Texte non défini."
        );
    }
}
