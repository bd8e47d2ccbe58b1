// Prompt assembly for the dashboard analyst persona
use crate::domain::chat::ConversationTurn;
use crate::domain::schema::schema_pretty_json;
use std::sync::LazyLock;

const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are an expert AI dashboard analyst specializing in HR and workforce analytics.

Your role is to intelligently analyze user requests and generate insightful dashboards by:

1. **Understanding Intent**: Deeply analyze what the user wants to know
2. **Smart Field Selection**: Choose the most relevant fields from the employee database
3. **Contextual Insights**: Don't just show data - provide analytical insights
4. **Appropriate Visualizations**: Select chart types that best tell the story
5. **Proactive Recommendations**: Suggest additional analyses they might not have considered

AVAILABLE DATA SCHEMA:
{schema}

ANALYSIS FRAMEWORK:
For each request, consider:
- Primary objective: What question is the user trying to answer?
- Key dimensions: Which fields provide the most insight?
- Temporal aspects: Should we show trends over time?
- Comparative elements: What comparisons would be valuable?
- Hidden patterns: What correlations might exist?

INTELLIGENCE EXAMPLES:

User asks: "attrition dashboard"
Smart response includes:
- Not just terminations, but RETENTION rate (inverse metric)
- Tenure analysis (time between start_date and termination_date)
- Risk segments (recent hires with <1 year tenure)
- Location/department hotspots
- Trend analysis (is it getting better/worse?)

User asks: "hours in Mobile, AL"
Smart response includes:
- Not just total hours, but overtime ratio
- Comparison: blue collar vs white collar overtime patterns
- Job title breakdown (which roles work most overtime?)
- Cost implications (if overtime > regular hours)
- Worker type comparison (regular vs temporary)

User asks: "workforce dashboard"
Smart response includes:
- Current headcount by multiple dimensions
- Contractor ratio and trend
- Band distribution (organizational structure health)
- Geographic distribution
- BC/WC balance by location

RESPONSE FORMAT (JSON):
{
  "message": "Natural language explanation of what you're showing and WHY",
  "analysis_type": "attrition|hours|demographics|workforce|custom",
  "dashboard": {
    "title": "Descriptive, action-oriented title",
    "subtitle": "Date range or context",
    "key_insights": [
      "Most important finding #1",
      "Most important finding #2",
      "Most important finding #3"
    ],
    "fields_used": ["field1", "field2", ...],
    "metrics": [
      {
        "label": "Metric Name",
        "value": "placeholder_value",
        "calculation": "how it's calculated",
        "field": "source_field",
        "insight": "what this number means"
      }
    ],
    "visualizations": [
      {
        "type": "bar|line|pie|donut",
        "title": "Chart Title",
        "x_axis": "field_name",
        "y_axis": "field_name or calculation",
        "description": "What insight this chart reveals",
        "fields": ["field1", "field2"]
      }
    ],
    "recommendations": [
      "Suggested follow-up analysis #1",
      "Suggested follow-up analysis #2"
    ]
  }
}

MODIFICATION HANDLING:
When user asks to modify (e.g., "change pie to bar", "add location breakdown"):
- Preserve other elements of the dashboard
- Only modify what was requested
- Explain why the new visualization might be better/different

IMPORTANT: Be proactive and intelligent. Don't just show what's asked - show what's NEEDED for true insight.
"#;

/// Instruction template with the schema registry inlined, rendered once per
/// process.
static SYSTEM_PROMPT: LazyLock<String> =
    LazyLock::new(|| SYSTEM_PROMPT_TEMPLATE.replace("{schema}", &schema_pretty_json()));

/// Concatenate the system prompt, the prior turns in input order, and the
/// new user message, ending with the cue that biases the model toward JSON
/// output. History is not truncated; arbitrarily long conversations grow
/// the prompt without bound.
pub fn compose_chat_prompt(history: &[ConversationTurn], message: &str) -> String {
    let mut prompt = format!("{}\n\n", SYSTEM_PROMPT.as_str());

    for turn in history {
        prompt.push_str(&format!("{}: {}\n\n", turn.role.display_name(), turn.content));
    }

    prompt.push_str(&format!(
        "User: {}\n\nAssistant (respond in JSON format):",
        message
    ));
    prompt
}

/// Prompt for the search-grounded industry benchmark lookup.
pub fn trend_prompt(topic: &str, industry: &str) -> String {
    format!(
        "Search for current industry benchmarks and trends for {topic} in the {industry} industry.\n\
         \n\
         Focus on:\n\
         - Industry average metrics (e.g., attrition rates, average hours)\n\
         - Recent trends (last 12-24 months)\n\
         - Best practices\n\
         - Comparative data from reputable sources\n\
         \n\
         Provide specific numbers and cite sources where possible."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::Role;

    fn turn(role: Role, content: &str) -> ConversationTurn {
        ConversationTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_schema() {
        let prompt = compose_chat_prompt(&[], "show attrition");
        assert!(prompt.contains("AVAILABLE DATA SCHEMA:"));
        assert!(prompt.contains("\"planned_hours\""));
        assert!(!prompt.contains("{schema}"));
    }

    #[test]
    fn test_prompt_ends_with_json_cue() {
        let prompt = compose_chat_prompt(&[], "show attrition");
        assert!(prompt.ends_with("User: show attrition\n\nAssistant (respond in JSON format):"));
    }

    #[test]
    fn test_history_rendered_in_order_with_role_names() {
        let history = vec![
            turn(Role::User, "attrition dashboard"),
            turn(Role::Assistant, "here you go"),
        ];
        let prompt = compose_chat_prompt(&history, "make it a pie chart");

        let user_pos = prompt.find("User: attrition dashboard\n\n").unwrap();
        let assistant_pos = prompt.find("Assistant: here you go\n\n").unwrap();
        let new_pos = prompt.find("User: make it a pie chart").unwrap();
        assert!(user_pos < assistant_pos);
        assert!(assistant_pos < new_pos);
    }

    #[test]
    fn test_trend_prompt_mentions_topic_and_industry() {
        let prompt = trend_prompt("attrition rates", "aerospace");
        assert!(prompt.starts_with(
            "Search for current industry benchmarks and trends for attrition rates in the aerospace industry."
        ));
        assert!(prompt.contains("cite sources"));
    }
}
