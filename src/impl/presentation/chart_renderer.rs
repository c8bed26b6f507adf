use serde_json::{json, Value};

use crate::{
    domain::logic::months::{MONTH_COLORS, MONTH_NAMES},
    entities::{LossComparison, MonthlyLoss, PatientStatusCount, YearlyLoss},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
    Group,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct AxisBinding {
    pub field: String,
    pub title: String,
}

/// Declarative description of a chart. Holds no rendering logic; any charting
/// front end can draw it.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub x: AxisBinding,
    pub y: AxisBinding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_field: Option<String>,
    pub bar_mode: BarMode,
    /// Category order for the x axis. Empty means data order.
    pub category_order: Vec<String>,
    /// Fixed color per category value.
    pub color_map: Vec<(String, String)>,
    pub data: Vec<Value>,
}

impl ChartSpec {
    fn bar(x: AxisBinding, y: AxisBinding) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: None,
            x,
            y,
            color_field: None,
            text_field: None,
            bar_mode: BarMode::Group,
            category_order: Vec::new(),
            color_map: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing plain strings, numbers and vectors cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn axis(field: &str, title: &str) -> AxisBinding {
    AxisBinding {
        field: field.to_string(),
        title: title.to_string(),
    }
}

pub struct ChartRenderer;

impl ChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Stacked bars: absences per patient, one segment per status.
    pub fn absences_by_patient_status(&self, counts: &[PatientStatusCount]) -> ChartSpec {
        ChartSpec {
            color_field: Some("Statut de l'absence".into()),
            text_field: Some("Nombre d'absences".into()),
            bar_mode: BarMode::Stack,
            data: counts
                .iter()
                .map(|c| {
                    json!({
                        "Nom du patient": c.patient,
                        "Statut de l'absence": c.status.label(),
                        "Nombre d'absences": c.count,
                    })
                })
                .collect(),
            ..ChartSpec::bar(
                axis("Nom du patient", "Patient"),
                axis("Nombre d'absences", "Nombre d'absences"),
            )
        }
    }

    /// Two bars: the patient's loss next to the loss of all patients.
    pub fn loss_comparison(&self, comparison: &LossComparison) -> ChartSpec {
        ChartSpec {
            title: Some("Manque à gagner du patient vs. total".into()),
            color_field: Some("Catégorie".into()),
            text_field: Some("MAG (€)".into()),
            data: vec![
                json!({ "Catégorie": comparison.patient, "MAG (€)": comparison.patient_total }),
                json!({ "Catégorie": "Tous les patients", "MAG (€)": comparison.all_total }),
            ],
            ..ChartSpec::bar(axis("Catégorie", "Catégorie"), axis("MAG (€)", "MAG (€)"))
        }
    }

    pub fn yearly_loss(&self, yearly: &[YearlyLoss]) -> ChartSpec {
        ChartSpec {
            title: Some("Manque à gagner total par année".into()),
            color_field: Some("Année".into()),
            category_order: yearly.iter().map(|y| y.year.to_string()).collect(),
            data: yearly
                .iter()
                .map(|y| json!({ "Année": y.year, "MAG": y.total_loss }))
                .collect(),
            ..ChartSpec::bar(axis("Année", "Année"), axis("MAG", "Manque à gagner (€)"))
        }
    }

    /// One bar per month, calendar order, fixed palette.
    pub fn monthly_loss(&self, year: i32, monthly: &[MonthlyLoss]) -> ChartSpec {
        ChartSpec {
            title: Some(format!("Manque à gagner par mois en {}", year)),
            color_field: Some("Nom du mois".into()),
            category_order: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
            color_map: MONTH_NAMES
                .iter()
                .zip(MONTH_COLORS)
                .map(|(m, c)| (m.to_string(), c.to_string()))
                .collect(),
            data: monthly
                .iter()
                .map(|m| {
                    json!({
                        "Mois": m.month,
                        "Nom du mois": m.month_name,
                        "MAG": m.total_loss,
                    })
                })
                .collect(),
            ..ChartSpec::bar(axis("Nom du mois", "Mois"), axis("MAG", "Manque à gagner (€)"))
        }
    }
}
