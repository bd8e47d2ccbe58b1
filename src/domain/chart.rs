// Chart request/response domain models
use serde::{Deserialize, Serialize};

/// Chart types the frontend knows how to render. Unrecognized strings
/// decode as `Other`, which dispatches the same as `Bar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Donut,
    Other,
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "donut" => ChartKind::Donut,
            _ => ChartKind::Other,
        }
    }
}

impl ChartKind {
    /// Pie and donut charts share the same categorical data shape.
    pub fn is_circular(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }
}

/// Caller-supplied description of the chart it wants data for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub fields: Vec<String>,
    pub title: Option<String>,
}

/// Chart.js-style payload: category labels plus one or more datasets of
/// equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// Single labeled dataset over the given category labels.
    pub fn single(labels: &[&str], label: &str, data: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: Some(label.to_string()),
                data: data.to_vec(),
            }],
        }
    }

    /// Single unlabeled dataset, the shape pie and donut charts expect.
    pub fn unlabeled(labels: &[&str], data: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: data.to_vec(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_defaults() {
        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.kind, ChartKind::Bar);
        assert!(config.fields.is_empty());
        assert!(config.title.is_none());
    }

    #[test]
    fn test_unknown_chart_kind_decodes_as_other() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"type": "scatter"}"#).unwrap();
        assert_eq!(config.kind, ChartKind::Other);
        assert!(!config.kind.is_circular());
    }

    #[test]
    fn test_unlabeled_dataset_omits_label_key() {
        let data = ChartData::unlabeled(&["A", "B"], &[1.0, 2.0]);
        let rendered = serde_json::to_string(&data).unwrap();
        assert!(!rendered.contains("label"));
    }
}
