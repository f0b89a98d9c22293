//! Smart search across projects, components, vulnerabilities and licenses.

use dt_client::{ClientError, DashboardApi};
use dt_core::{ComponentHit, LicenseHit, ProjectHit, SearchKind, VulnerabilityHit};
use dt_format::{is_blank, to_html};
use serde::Serialize;

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Plain text for the input box once the suggestion is chosen.
    pub display: String,
    /// Link markup for the dropdown.
    pub html: String,
}

/// One source's results under its header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSection {
    pub kind: SearchKind,
    pub header: String,
    pub suggestions: Vec<Suggestion>,
}

impl SearchSection {
    fn new(kind: SearchKind, suggestions: Vec<Suggestion>) -> Self {
        Self {
            kind,
            header: format!(r#"<h4 class="section-title">{}</h4>"#, kind.heading()),
            suggestions,
        }
    }
}

fn link(href: &str, text: &str) -> String {
    format!(r#"<a class="tt-suggestion-item" href="{href}">{}</a>"#, to_html(text))
}

fn project_suggestion(context_path: &str, hit: &ProjectHit) -> Suggestion {
    Suggestion {
        display: hit.name.clone(),
        html: link(
            &format!("{context_path}project/?uuid={}", to_html(&hit.uuid)),
            &hit.name,
        ),
    }
}

fn component_suggestion(context_path: &str, hit: &ComponentHit) -> Suggestion {
    Suggestion {
        display: hit.name.clone(),
        html: link(
            &format!("{context_path}component/?uuid={}", to_html(&hit.uuid)),
            &hit.name,
        ),
    }
}

fn vulnerability_suggestion(context_path: &str, hit: &VulnerabilityHit) -> Suggestion {
    Suggestion {
        display: hit.vuln_id.clone(),
        html: link(
            &format!(
                "{context_path}vulnerability/?source={}&vulnId={}",
                to_html(&hit.source),
                to_html(&hit.vuln_id)
            ),
            &hit.vuln_id,
        ),
    }
}

fn license_suggestion(context_path: &str, hit: &LicenseHit) -> Suggestion {
    Suggestion {
        display: hit.name.clone(),
        html: link(
            &format!(
                "{context_path}license/?licenseId={}",
                to_html(&hit.license_id)
            ),
            &hit.name,
        ),
    }
}

/// A failed source is logged and contributes nothing.
fn section<T>(
    kind: SearchKind,
    result: Result<Vec<T>, ClientError>,
    render: impl Fn(&T) -> Suggestion,
) -> SearchSection {
    let hits = result.unwrap_or_else(|error| {
        tracing::warn!(%error, source = %kind, "search source failed");
        Vec::new()
    });
    SearchSection::new(kind, hits.iter().map(render).collect())
}

/// Query all four sources concurrently for `query`.
///
/// Sections come back in a fixed order (projects, components,
/// vulnerabilities, licenses). Links are rooted at `context_path`. A blank
/// query returns no sections without touching the backend.
pub async fn smart_search<A: DashboardApi>(
    api: &A,
    token: Option<&str>,
    context_path: &str,
    query: &str,
) -> Vec<SearchSection> {
    if is_blank(query) {
        return Vec::new();
    }
    let mut root = context_path.to_string();
    if !root.ends_with('/') {
        root.push('/');
    }

    let (projects, components, vulnerabilities, licenses) = tokio::join!(
        api.smart_search_project(token, query),
        api.smart_search_component(token, query),
        api.smart_search_vulnerability(token, query),
        api.smart_search_license(token, query),
    );

    vec![
        section(SearchKind::Project, projects, |hit| {
            project_suggestion(&root, hit)
        }),
        section(SearchKind::Component, components, |hit| {
            component_suggestion(&root, hit)
        }),
        section(SearchKind::Vulnerability, vulnerabilities, |hit| {
            vulnerability_suggestion(&root, hit)
        }),
        section(SearchKind::License, licenses, |hit| {
            license_suggestion(&root, hit)
        }),
    ]
}
