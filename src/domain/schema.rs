// Employee data schema registry embedded into the system prompt
use serde_json::{Value, json};
use std::sync::LazyLock;

/// Static description of the fields available in the employee database,
/// plus the canned analysis templates the model is told about. Built once
/// per process and read-only thereafter.
pub static EMPLOYEE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "fields": {
            "demographics": ["first_name", "last_name", "gender", "country_of_birth", "birth_year"],
            "location": ["location_city"],
            "job_info": ["job_profile", "job_title", "job_family_group", "job_family_name", "job_code"],
            "organization": ["supervisory_organization_siglum", "band"],
            "classification": ["blue_white_collar", "worker_type", "worker_status"],
            "time_tracking": ["planned_hours", "overtime_hours"],
            "employment_dates": ["start_date", "termination_date"]
        },
        "common_analyses": {
            "attrition": {
                "key_fields": ["termination_date", "worker_status", "start_date", "job_family_name", "band", "location_city"],
                "metrics": ["attrition_rate", "average_tenure", "terminations_by_period", "retention_rate"],
                "recommended_charts": ["line_chart_trend", "bar_chart_by_department", "donut_chart_by_reason"]
            },
            "hours": {
                "key_fields": ["planned_hours", "overtime_hours", "job_title", "blue_white_collar", "location_city", "worker_type"],
                "metrics": ["total_hours", "overtime_percentage", "average_hours_per_employee"],
                "recommended_charts": ["bar_chart_by_location", "pie_chart_collar_type", "line_chart_overtime_trend"]
            },
            "demographics": {
                "key_fields": ["gender", "country_of_birth", "birth_year", "job_family_group", "location_city"],
                "metrics": ["headcount", "diversity_metrics", "age_distribution"],
                "recommended_charts": ["pie_chart_gender", "bar_chart_age_groups", "donut_chart_location"]
            },
            "workforce_composition": {
                "key_fields": ["worker_type", "worker_status", "blue_white_collar", "band", "job_family_name"],
                "metrics": ["active_headcount", "temp_ratio", "bc_wc_ratio"],
                "recommended_charts": ["donut_chart_worker_type", "bar_chart_by_band", "pie_chart_collar"]
            }
        }
    })
});

/// Pretty-printed rendering used when the schema is inlined into prompt text.
pub fn schema_pretty_json() -> String {
    serde_json::to_string_pretty(&*EMPLOYEE_SCHEMA).expect("static schema serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_all_field_groups() {
        let fields = EMPLOYEE_SCHEMA["fields"].as_object().unwrap();
        for group in [
            "demographics",
            "location",
            "job_info",
            "organization",
            "classification",
            "time_tracking",
            "employment_dates",
        ] {
            assert!(fields.contains_key(group), "missing field group {group}");
        }
    }

    #[test]
    fn test_schema_lists_four_analysis_templates() {
        let analyses = EMPLOYEE_SCHEMA["common_analyses"].as_object().unwrap();
        assert_eq!(analyses.len(), 4);
        assert!(analyses.contains_key("attrition"));
        assert!(analyses.contains_key("workforce_composition"));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let rendered = schema_pretty_json();
        assert!(rendered.contains("\n  \"fields\""));
        assert!(rendered.contains("planned_hours"));
    }
}
