use archlab::{DomainGraph, Edge, NodeId, NodeKind};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

fn label(graph: &DomainGraph, id: &NodeId) -> String {
    match graph.node_name(id) {
        Some(name) => name.to_string(),
        None => format!("<missing {}>", id),
    }
}

/// `Source --kind--> Target` with names, or the id for dangling ends
pub fn render_edge(graph: &DomainGraph, edge: &Edge) -> String {
    format!(
        "{} --{}--> {}",
        label(graph, &edge.source),
        edge.kind.label(),
        label(graph, &edge.target)
    )
}

pub fn render_inspect(
    snapshot: &str,
    graph: &DomainGraph,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Inspect, "archlab inspect");
    header.add("Snapshot", snapshot);
    header.add("Graph", format!("{} (v{})", graph.meta.name, graph.meta.version));
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    let mut counts = Panel::with_title("Nodes").style(PanelStyle::Info);
    for kind in NodeKind::ALL {
        counts.add_line(format!("{:<14} {:>3}", kind.display_name(), graph.count(kind)));
    }
    out.push_str(&counts.render(supports_color, supports_unicode));

    let edges = graph.edges();
    out.push('\n');
    if edges.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Pending.colored(supports_color, supports_unicode),
            ColoredText::dim("No relationships.").render(supports_color)
        ));
        return out;
    }

    let mut relations = Panel::with_title(format!("Relationships ({})", edges.len()));
    for edge in &edges {
        relations.add_line(render_edge(graph, edge));
    }
    out.push_str(&relations.render(supports_color, supports_unicode));
    out
}
