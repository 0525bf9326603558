use archlab::{DomainGraph, Severity, ValidationReport};

use crate::ui::blocks::finding::FindingGroup;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    snapshot: &str,
    graph: &DomainGraph,
    fail_on: Severity,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "archlab check");
    header.add("Snapshot", snapshot);
    header.add("Graph", format!("{} ({} nodes)", graph.meta.name, graph.node_count()));
    header.add("Fail on", fail_on.as_str());
    header.render(supports_color, supports_unicode)
}

/// Group findings by node, in the order nodes first appear in the report
pub fn group_findings(graph: &DomainGraph, report: &ValidationReport) -> Vec<FindingGroup> {
    let mut groups: Vec<FindingGroup> = Vec::new();
    for finding in &report.findings {
        let node_id = finding.node_id.as_str();
        let entry = (finding.severity, finding.message.clone());
        if let Some(group) = groups.iter_mut().find(|g| g.node_id == node_id) {
            group.findings.push(entry);
            continue;
        }

        let heading = match (graph.node_kind(&finding.node_id), graph.node_name(&finding.node_id)) {
            (Some(kind), Some(name)) => format!("{} {}", kind, name),
            _ => format!("Node {}", node_id),
        };
        groups.push(FindingGroup {
            heading,
            node_id: node_id.to_string(),
            findings: vec![entry],
        });
    }
    groups
}

pub fn render_findings(
    graph: &DomainGraph,
    report: &ValidationReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    group_findings(graph, report)
        .iter()
        .map(|group| group.render(verbose > 0, supports_color, supports_unicode))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_check_summary(
    report: &ValidationReport,
    failed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if failed {
        ResultSummary::failed("Check FAILED")
    } else if report.is_clean() {
        ResultSummary::success("Graph is valid")
    } else {
        ResultSummary::partial("Check passed with findings")
    };

    summary.add_stat("errors", report.error_count());
    summary.add_stat("warnings", report.warning_count());
    if failed {
        summary.with_next_step("Fix the findings above and re-run `archlab check`");
    } else {
        summary.with_next_step("Run `archlab generate` to write the source files");
    }

    summary.render(supports_color, supports_unicode)
}
