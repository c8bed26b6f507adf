use std::{convert::Infallible, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultLevel {
    Low,
    Medium,
    Good,
    /// A level outside the catalog. Never matches a catalog entry.
    Unlisted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssessmentKey {
    pub assessment_type: String,
    pub test_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSelection {
    pub assessment_type: String,
    pub test_name: String,
    pub result_level: ResultLevel,
}

/// Insertion-ordered (assessment type, test) -> result level mapping for one
/// report request.
///
/// Selecting a test a second time replaces its level in place, so the test
/// keeps the position it was first selected at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentSelections {
    entries: Vec<(AssessmentKey, ResultLevel)>,
}

// --

impl ResultLevel {
    pub fn label(&self) -> &str {
        match self {
            ResultLevel::Low => "faible",
            ResultLevel::Medium => "moyen",
            ResultLevel::Good => "bon",
            ResultLevel::Unlisted(s) => s,
        }
    }
}

impl FromStr for ResultLevel {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "faible" => ResultLevel::Low,
            "moyen" => ResultLevel::Medium,
            "bon" => ResultLevel::Good,
            other => ResultLevel::Unlisted(other.to_string()),
        })
    }
}

impl fmt::Display for ResultLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AssessmentKey {
    pub fn new(assessment_type: impl Into<String>, test_name: impl Into<String>) -> Self {
        Self {
            assessment_type: assessment_type.into(),
            test_name: test_name.into(),
        }
    }
}

impl AssessmentSelection {
    pub fn new(
        assessment_type: impl Into<String>,
        test_name: impl Into<String>,
        result_level: ResultLevel,
    ) -> Self {
        Self {
            assessment_type: assessment_type.into(),
            test_name: test_name.into(),
            result_level,
        }
    }
}

impl AssessmentSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: AssessmentKey, level: ResultLevel) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = level,
            None => self.entries.push((key, level)),
        }
    }

    pub fn get(&self, key: &AssessmentKey) -> Option<&ResultLevel> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, l)| l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssessmentKey, &ResultLevel)> {
        self.entries.iter().map(|(k, l)| (k, l))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AssessmentSelection> for AssessmentSelections {
    fn from_iter<I: IntoIterator<Item = AssessmentSelection>>(iter: I) -> Self {
        let mut selections = AssessmentSelections::new();
        for s in iter {
            selections.insert(
                AssessmentKey::new(s.assessment_type, s.test_name),
                s.result_level,
            );
        }
        selections
    }
}
