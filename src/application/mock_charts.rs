// Mock chart data provider - placeholder for a real analytics query engine
//
// Dispatch is a case-insensitive substring match against the joined field
// names, crossed with the requested chart kind. The constants below are a
// compatibility contract with the dashboard frontend; a real data layer
// must be able to drop in behind the same shapes.
use crate::domain::chart::{ChartConfig, ChartData, ChartKind, Dataset};

/// Deterministically build canned chart data for the given config. No side
/// effects, no external calls; identical input always yields identical
/// output.
pub fn chart_data_for(config: &ChartConfig) -> ChartData {
    let haystack = config.fields.join(" ").to_lowercase();

    if haystack.contains("attrition") || haystack.contains("termination") {
        attrition_data(config)
    } else if haystack.contains("hours") || haystack.contains("overtime") {
        hours_data(config)
    } else {
        generic_data(config)
    }
}

fn attrition_data(config: &ChartConfig) -> ChartData {
    if config.kind == ChartKind::Line {
        ChartData::single(
            &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ],
            "Monthly Attrition Rate (%)",
            &[
                11.2, 10.8, 12.5, 11.9, 13.2, 12.1, 11.5, 10.9, 11.8, 12.3, 11.7, 10.5,
            ],
        )
    } else if config.kind.is_circular() {
        ChartData::unlabeled(
            &["Engineering", "Sales", "Operations", "Support", "Admin"],
            &[28.0, 22.0, 18.0, 20.0, 12.0],
        )
    } else {
        ChartData::single(
            &["Band I", "Band II", "Band III", "Band IV", "Band V"],
            "Attrition Count",
            &[15.0, 22.0, 18.0, 12.0, 8.0],
        )
    }
}

fn hours_data(config: &ChartConfig) -> ChartData {
    if config.kind == ChartKind::Line {
        ChartData::new(
            vec![
                "Week 1".to_string(),
                "Week 2".to_string(),
                "Week 3".to_string(),
                "Week 4".to_string(),
            ],
            vec![
                Dataset {
                    label: Some("Planned Hours".to_string()),
                    data: vec![1680.0, 1720.0, 1690.0, 1700.0],
                },
                Dataset {
                    label: Some("Overtime Hours".to_string()),
                    data: vec![145.0, 168.0, 152.0, 138.0],
                },
            ],
        )
    } else if config.kind.is_circular() {
        ChartData::unlabeled(&["Blue Collar", "White Collar"], &[62.0, 38.0])
    } else {
        ChartData::single(
            &["Mobile, AL", "Herndon, VA", "Austin, TX", "Seattle, WA"],
            "Avg Overtime Hours/Employee",
            &[8.5, 5.2, 6.8, 4.9],
        )
    }
}

fn generic_data(config: &ChartConfig) -> ChartData {
    if config.kind.is_circular() {
        ChartData::unlabeled(
            &["Category A", "Category B", "Category C", "Category D"],
            &[35.0, 28.0, 22.0, 15.0],
        )
    } else {
        ChartData::single(
            &["Q1", "Q2", "Q3", "Q4"],
            config.title.as_deref().unwrap_or("Metric"),
            &[65.0, 72.0, 68.0, 81.0],
        )
    }
}
