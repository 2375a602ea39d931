use serde::Serialize;
use url::Url;

/// Topical buckets a documentation page can be filed under, derived from
/// its URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Nodes & Integrations")]
    NodesAndIntegrations,
    #[serde(rename = "Workflows")]
    Workflows,
    #[serde(rename = "API Reference")]
    ApiReference,
    #[serde(rename = "Hosting & Deployment")]
    HostingAndDeployment,
    #[serde(rename = "Troubleshooting")]
    Troubleshooting,
    #[serde(rename = "Tutorials & Courses")]
    TutorialsAndCourses,
    #[serde(rename = "Core Concepts")]
    CoreConcepts,
    #[serde(rename = "Credentials")]
    Credentials,
    #[serde(rename = "Code & Expressions")]
    CodeAndExpressions,
    #[serde(rename = "General Documentation")]
    General,
}

/// Ordered path-substring pattern table. First match wins, so the order
/// here is part of the contract: a path matching several rows always
/// resolves to the earliest one.
const PATTERNS: &[(&[&str], Category)] = &[
    (&["/nodes/", "/integrations/"], Category::NodesAndIntegrations),
    (&["/workflows/"], Category::Workflows),
    (&["/api/"], Category::ApiReference),
    (&["/hosting/", "/deploy/"], Category::HostingAndDeployment),
    (&["/troubleshooting/", "/errors/"], Category::Troubleshooting),
    (&["/courses/", "/tutorials/"], Category::TutorialsAndCourses),
    (&["/core-concepts/", "/getting-started/"], Category::CoreConcepts),
    (&["/credentials/"], Category::Credentials),
    (&["/code/", "/expressions/"], Category::CodeAndExpressions),
];

impl Category {
    /// Human-readable display name, used for section headings and grouping
    pub fn name(&self) -> &'static str {
        match self {
            Category::NodesAndIntegrations => "Nodes & Integrations",
            Category::Workflows => "Workflows",
            Category::ApiReference => "API Reference",
            Category::HostingAndDeployment => "Hosting & Deployment",
            Category::Troubleshooting => "Troubleshooting",
            Category::TutorialsAndCourses => "Tutorials & Courses",
            Category::CoreConcepts => "Core Concepts",
            Category::Credentials => "Credentials",
            Category::CodeAndExpressions => "Code & Expressions",
            Category::General => "General Documentation",
        }
    }

    /// Anchor-safe slug for table-of-contents links: lowercase, spaces
    /// become hyphens, "&" becomes "and"
    pub fn slug(&self) -> String {
        self.name().to_lowercase().replace(' ', "-").replace('&', "and")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Assigns a category to a URL from its path
///
/// The path is lowercased and checked against the ordered pattern table;
/// the first row with any matching substring wins. URLs matching no row
/// fall back to [`Category::General`].
///
/// # Examples
///
/// ```
/// use doc_harvest::url::{categorize, Category};
/// use url::Url;
///
/// let url = Url::parse("https://docs.example.com/workflows/intro/").unwrap();
/// assert_eq!(categorize(&url), Category::Workflows);
/// ```
pub fn categorize(url: &Url) -> Category {
    let path = url.path().to_lowercase();

    for (substrings, category) in PATTERNS {
        if substrings.iter().any(|s| path.contains(s)) {
            return *category;
        }
    }

    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize_path(path: &str) -> Category {
        let url = Url::parse(&format!("https://docs.example.com{}", path)).unwrap();
        categorize(&url)
    }

    #[test]
    fn test_categorize_nodes_and_integrations() {
        assert_eq!(
            categorize_path("/nodes/http-request/"),
            Category::NodesAndIntegrations
        );
        assert_eq!(
            categorize_path("/integrations/slack/"),
            Category::NodesAndIntegrations
        );
    }

    #[test]
    fn test_categorize_workflows() {
        assert_eq!(categorize_path("/workflows/create/"), Category::Workflows);
    }

    #[test]
    fn test_categorize_api() {
        assert_eq!(
            categorize_path("/api/authentication/"),
            Category::ApiReference
        );
    }

    #[test]
    fn test_categorize_hosting_and_deploy() {
        assert_eq!(
            categorize_path("/hosting/docker/"),
            Category::HostingAndDeployment
        );
        assert_eq!(
            categorize_path("/deploy/server/"),
            Category::HostingAndDeployment
        );
    }

    #[test]
    fn test_categorize_troubleshooting() {
        assert_eq!(
            categorize_path("/troubleshooting/common/"),
            Category::Troubleshooting
        );
        assert_eq!(categorize_path("/errors/e123/"), Category::Troubleshooting);
    }

    #[test]
    fn test_categorize_tutorials_and_courses() {
        assert_eq!(
            categorize_path("/courses/level-one/"),
            Category::TutorialsAndCourses
        );
        assert_eq!(
            categorize_path("/tutorials/first-steps/"),
            Category::TutorialsAndCourses
        );
    }

    #[test]
    fn test_categorize_core_concepts() {
        assert_eq!(
            categorize_path("/core-concepts/data/"),
            Category::CoreConcepts
        );
        assert_eq!(
            categorize_path("/getting-started/install/"),
            Category::CoreConcepts
        );
    }

    #[test]
    fn test_categorize_credentials() {
        assert_eq!(
            categorize_path("/credentials/oauth/"),
            Category::Credentials
        );
    }

    #[test]
    fn test_categorize_code_and_expressions() {
        assert_eq!(
            categorize_path("/code/builtin/"),
            Category::CodeAndExpressions
        );
        assert_eq!(
            categorize_path("/expressions/syntax/"),
            Category::CodeAndExpressions
        );
    }

    #[test]
    fn test_categorize_fallback() {
        assert_eq!(categorize_path("/release-notes/"), Category::General);
        assert_eq!(categorize_path("/"), Category::General);
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(categorize_path("/Workflows/Create/"), Category::Workflows);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        // Matches both /nodes/ (row 1) and /api/ (row 3): row order decides.
        assert_eq!(
            categorize_path("/nodes/api/"),
            Category::NodesAndIntegrations
        );
        // Matches both /credentials/ (row 8) and /code/ (row 9).
        assert_eq!(categorize_path("/credentials/code/"), Category::Credentials);
    }

    #[test]
    fn test_slug() {
        assert_eq!(
            Category::NodesAndIntegrations.slug(),
            "nodes-and-integrations"
        );
        assert_eq!(Category::General.slug(), "general-documentation");
        assert_eq!(Category::ApiReference.slug(), "api-reference");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Category::Workflows.to_string(), "Workflows");
        assert_eq!(
            Category::CodeAndExpressions.to_string(),
            "Code & Expressions"
        );
    }
}
