use std::path::Path;

use tracing::{info, instrument};

use super::sort_by_name;
use crate::error::Result;
use crate::schema::descriptor::Descriptor;
use crate::schema::summary::DatabaseSummary;
use crate::schema::IdentifiableDescriptor;

const TITLE: &str = "openLCA Database Contents";
const HEAVY_RULE_WIDTH: usize = 60;
const LIGHT_RULE_WIDTH: usize = 40;

/// Render the full report for the given flows and processes.
pub fn render(flows: &[Descriptor], processes: &[Descriptor]) -> String {
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    let summary = DatabaseSummary::from_counts(flows.len(), processes.len());

    let mut lines = vec![TITLE.to_string(), heavy.clone(), String::new()];

    lines.push("FLOWS".to_string());
    lines.push(heavy.clone());
    entries(&mut lines, "flows", flows);

    heading(&mut lines, "PROCESSES");
    entries(&mut lines, "processes", processes);

    heading(&mut lines, "SUMMARY");
    lines.push(format!("Total Flows: {}", summary.flows));
    lines.push(format!("Total Processes: {}", summary.processes));
    lines.push(format!("Total Entities: {}", summary.total_entities));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The report is rendered in memory before the file is created.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_report(
    path: &Path,
    flows: &[Descriptor],
    processes: &[Descriptor],
) -> Result<DatabaseSummary> {
    let report = render(flows, processes);
    std::fs::write(path, report)?;

    let summary = DatabaseSummary::from_counts(flows.len(), processes.len());
    info!(?summary, "wrote text report");
    Ok(summary)
}

fn heading(lines: &mut Vec<String>, title: &str) {
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push(title.to_string());
    lines.push(heavy);
}

fn entries(lines: &mut Vec<String>, noun: &str, descriptors: &[Descriptor]) {
    lines.push(format!(
        "Found {} {} in the database:",
        descriptors.len(),
        noun
    ));
    lines.push(String::new());

    let light = "-".repeat(LIGHT_RULE_WIDTH);
    for d in sort_by_name(descriptors) {
        lines.push(format!("Name: {}", d.name));
        lines.push(format!("UUID: {}", d.id()));
        if let Some(category) = d.category() {
            lines.push(format!("Category: {}", category));
        }
        lines.push(light.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_flows() -> Vec<Descriptor> {
        vec![
            Descriptor::new("u2", "steel").with_category("Metals"),
            Descriptor::new("u1", "Electricity, AC"),
        ]
    }

    #[test]
    fn test_render_example() {
        let report = render(&example_flows(), &[]);
        let heavy = "=".repeat(60);
        let light = "-".repeat(40);

        let expected = format!(
            "openLCA Database Contents\n{heavy}\n\n\
             FLOWS\n{heavy}\nFound 2 flows in the database:\n\n\
             Name: Electricity, AC\nUUID: u1\n{light}\n\
             Name: steel\nUUID: u2\nCategory: Metals\n{light}\n\
             \n{heavy}\nPROCESSES\n{heavy}\nFound 0 processes in the database:\n\n\
             \n{heavy}\nSUMMARY\n{heavy}\n\
             Total Flows: 2\nTotal Processes: 0\nTotal Entities: 2\n"
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_database_reports_zero() {
        let report = render(&[], &[]);

        assert!(report.contains("Found 0 flows in the database:"));
        assert!(report.contains("Found 0 processes in the database:"));
        assert!(report.ends_with("Total Entities: 0\n"));
        assert_eq!(
            report,
            format!(
                "openLCA Database Contents\n{heavy}\n\n\
                 FLOWS\n{heavy}\nFound 0 flows in the database:\n\n\
                 \n{heavy}\nPROCESSES\n{heavy}\nFound 0 processes in the database:\n\n\
                 \n{heavy}\nSUMMARY\n{heavy}\n\
                 Total Flows: 0\nTotal Processes: 0\nTotal Entities: 0\n",
                heavy = "=".repeat(60)
            )
        );
    }

    #[test]
    fn test_total_entities_is_sum() {
        let processes = vec![
            Descriptor::new("p1", "transport, lorry"),
            Descriptor::new("p2", "steel production").with_category(""),
        ];

        let report = render(&example_flows(), &processes);

        assert!(report.contains("Total Flows: 2\n"));
        assert!(report.contains("Total Processes: 2\n"));
        assert!(report.contains("Total Entities: 4\n"));
        assert_eq!(report.matches("Category:").count(), 1);
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let summary = write_report(&path, &example_flows(), &[]).unwrap();

        assert_eq!(summary.total_entities, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render(&example_flows(), &[])
        );
    }

    #[test]
    fn test_write_report_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        assert!(write_report(&path, &[], &[]).is_err());
        assert!(!path.exists());
    }
}
