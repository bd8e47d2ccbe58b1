// Conversation and dashboard domain models
use serde::{Deserialize, Serialize};

use super::chart::ChartKind;

/// Who authored a conversation turn. Anything that is not literally
/// "user" is treated as the assistant, matching the upstream contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    User,
    Assistant,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        if value == "user" { Role::User } else { Role::Assistant }
    }
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One prior message in the conversation, caller-supplied and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// The dashboard description the model is asked to return. The shape is a
/// contract suggested via the prompt, so decoding is lenient: every field
/// is defaulted when missing and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSpec {
    pub title: String,
    pub subtitle: String,
    pub key_insights: Vec<String>,
    pub fields_used: Vec<String>,
    pub metrics: Vec<MetricDescriptor>,
    pub visualizations: Vec<VisualizationDescriptor>,
    pub recommendations: Vec<String>,
}

/// A single metric card. All fields are free text; `value` is a
/// placeholder string, not a computed number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricDescriptor {
    pub label: String,
    pub value: String,
    pub calculation: String,
    pub field: String,
    pub insight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationDescriptor {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub description: String,
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_decodes_as_assistant() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"role": "system", "content": "hi"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);

        let turn: ConversationTurn =
            serde_json::from_str(r#"{"role": "user", "content": "hi"}"#).unwrap();
        assert_eq!(turn.role, Role::User);
    }

    #[test]
    fn test_dashboard_spec_decodes_leniently() {
        let spec: DashboardSpec = serde_json::from_str(
            r#"{
                "title": "Attrition Overview",
                "key_insights": ["Attrition peaked in May"],
                "unexpected_field": 42
            }"#,
        )
        .unwrap();

        assert_eq!(spec.title, "Attrition Overview");
        assert_eq!(spec.subtitle, "");
        assert_eq!(spec.key_insights.len(), 1);
        assert!(spec.metrics.is_empty());
    }

    #[test]
    fn test_visualization_kind_defaults_to_bar() {
        let viz: VisualizationDescriptor =
            serde_json::from_str(r#"{"title": "Headcount by Band"}"#).unwrap();
        assert_eq!(viz.kind, ChartKind::Bar);
    }
}
