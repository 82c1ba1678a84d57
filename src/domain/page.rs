// Page and content domain models
use serde::Serialize;
use std::fmt;

/// One navigable screen, identified by its menu label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageKey(String);

impl PageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardLink {
    pub label: PageKey,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Frame,
    Video,
}

#[derive(Debug, Clone)]
pub struct DocumentEmbed {
    pub label: PageKey,
    pub title: String,
    pub url: String,
    pub kind: DocumentKind,
    pub link: Option<String>,
}

impl DocumentEmbed {
    /// Where the link-through affordance of a video points.
    pub fn link_target(&self) -> &str {
        self.link.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusArea {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub domain: String,
    pub summary: String,
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewContent {
    pub headline: String,
    pub intro: Vec<String>,
    pub focus: Vec<FocusArea>,
    pub dataset: DatasetInfo,
    pub significance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub description: String,
}
