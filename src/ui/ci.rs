//! GitHub Actions workflow commands for findings

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl From<archlab::Severity> for AnnotationLevel {
    fn from(severity: archlab::Severity) -> Self {
        match severity {
            archlab::Severity::Warning => AnnotationLevel::Warning,
            archlab::Severity::Error => AnnotationLevel::Error,
        }
    }
}

/// Running inside GitHub Actions
pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let props: Vec<String> = file
        .map(|f| format!("file={}", escape_property(f)))
        .into_iter()
        .chain(title.map(|t| format!("title={}", escape_property(t))))
        .collect();

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
