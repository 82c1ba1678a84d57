// Site catalog - Validated, read-only configuration tables
use crate::domain::embed::parse_shared_link;
use crate::domain::navigation::Branch;
use crate::domain::page::{
    DashboardLink, DatasetInfo, DocumentEmbed, DocumentKind, FocusArea, OverviewContent, PageKey,
    ToolEntry,
};
use crate::infrastructure::config::{DocumentKindConfig, ShellConfig};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("navigation menu is empty")]
    EmptyNavigation,
    #[error("page '{0}' appears more than once in the navigation menu")]
    DuplicatePage(String),
    #[error("default page '{0}' is not in the navigation menu")]
    UnknownDefault(String),
    #[error("page '{0}' has no overview, tools, dashboard or document content")]
    Unrouted(String),
    #[error("page '{key}' matches more than one content source ({branches})")]
    Ambiguous { key: String, branches: String },
    #[error("{table} entry '{label}' is not offered in the navigation menu")]
    Unlisted { table: &'static str, label: String },
    #[error("{table} entry '{label}' has an empty url")]
    EmptyUrl { table: &'static str, label: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub heading: String,
    pub default_page: PageKey,
    pub frame_height: u32,
    pub overview_page: PageKey,
    pub tools_page: PageKey,
    pub navigation: Vec<PageKey>,
    pub pre_resolved: bool,
    pub embed_origin: String,
    pub dashboards: Vec<DashboardLink>,
    pub documents: Vec<DocumentEmbed>,
    pub overview: OverviewContent,
    pub tools: Vec<ToolEntry>,
}

impl Catalog {
    /// Build the catalog and check that every menu entry routes to exactly one
    /// content source.
    pub fn from_config(config: &ShellConfig) -> Result<Self, CatalogError> {
        let catalog = Self::build(config);
        catalog.validate()?;
        catalog.warn_unresolvable_dashboards();
        Ok(catalog)
    }

    fn build(config: &ShellConfig) -> Self {
        let site = &config.site;

        let dashboards = config
            .dashboards
            .entries
            .iter()
            .map(|entry| DashboardLink {
                label: PageKey::new(entry.label.clone()),
                title: entry.title.clone(),
                description: entry.description.clone(),
                url: entry.url.trim().to_string(),
            })
            .collect();

        let documents = config
            .documents
            .iter()
            .map(|entry| DocumentEmbed {
                label: PageKey::new(entry.label.clone()),
                title: entry.title.clone(),
                url: entry.url.trim().to_string(),
                kind: match entry.kind {
                    DocumentKindConfig::Frame => DocumentKind::Frame,
                    DocumentKindConfig::Video => DocumentKind::Video,
                },
                link: entry.link.as_deref().map(|link| link.trim().to_string()),
            })
            .collect();

        let overview = &config.overview;
        let overview = OverviewContent {
            headline: overview.headline.clone(),
            intro: overview.intro.clone(),
            focus: overview
                .focus
                .iter()
                .map(|f| FocusArea {
                    title: f.title.clone(),
                    text: f.text.clone(),
                })
                .collect(),
            dataset: DatasetInfo {
                name: overview.dataset.name.clone(),
                domain: overview.dataset.domain.clone(),
                summary: overview.dataset.summary.clone(),
                attributes: overview.dataset.attributes.clone(),
            },
            significance: overview.significance.clone(),
        };

        let tools = config
            .tools
            .iter()
            .map(|t| ToolEntry {
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect();

        Self {
            title: site.title.clone(),
            heading: site.heading.clone(),
            default_page: PageKey::new(site.default_page.clone()),
            frame_height: site.frame_height,
            overview_page: PageKey::new(site.overview_page.clone()),
            tools_page: PageKey::new(site.tools_page.clone()),
            navigation: site.navigation.iter().cloned().map(PageKey::new).collect(),
            pre_resolved: config.dashboards.pre_resolved,
            embed_origin: config.dashboards.embed_origin.trim().to_string(),
            dashboards,
            documents,
            overview,
            tools,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.navigation.is_empty() {
            return Err(CatalogError::EmptyNavigation);
        }

        let mut seen = HashSet::new();
        for key in &self.navigation {
            if !seen.insert(key) {
                return Err(CatalogError::DuplicatePage(key.to_string()));
            }
        }

        if !seen.contains(&self.default_page) {
            return Err(CatalogError::UnknownDefault(self.default_page.to_string()));
        }

        for key in &self.navigation {
            let branches = self.branches_for(key);
            match branches.len() {
                0 => return Err(CatalogError::Unrouted(key.to_string())),
                1 => {}
                _ => {
                    return Err(CatalogError::Ambiguous {
                        key: key.to_string(),
                        branches: branches
                            .iter()
                            .map(Branch::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
            }
        }

        for dashboard in &self.dashboards {
            check_entry("dashboard", &dashboard.label, &dashboard.url, &seen)?;
        }
        for document in &self.documents {
            check_entry("document", &document.label, &document.url, &seen)?;
            if document.link.as_deref().is_some_and(str::is_empty) {
                return Err(CatalogError::EmptyUrl {
                    table: "document link",
                    label: document.label.to_string(),
                });
            }
        }

        Ok(())
    }

    fn warn_unresolvable_dashboards(&self) {
        if self.pre_resolved {
            return;
        }
        for dashboard in &self.dashboards {
            if parse_shared_link(&dashboard.url).is_none() {
                tracing::warn!(
                    "Dashboard '{}' url has no /viz/<workbook>/<sheet> path, embedding as is: {}",
                    dashboard.label,
                    dashboard.url
                );
            }
        }
    }

    /// Every content source that claims `key`, one element per matching entry.
    pub fn branches_for(&self, key: &PageKey) -> Vec<Branch> {
        let mut branches = Vec::new();
        if *key == self.overview_page {
            branches.push(Branch::Overview);
        }
        branches.extend(
            self.dashboards
                .iter()
                .filter(|d| d.label == *key)
                .map(|_| Branch::Dashboard),
        );
        branches.extend(
            self.documents
                .iter()
                .filter(|d| d.label == *key)
                .map(|_| Branch::Document),
        );
        if *key == self.tools_page {
            branches.push(Branch::Tools);
        }
        branches
    }

    pub fn dashboard(&self, key: &PageKey) -> Option<&DashboardLink> {
        self.dashboards.iter().find(|d| d.label == *key)
    }

    pub fn document(&self, key: &PageKey) -> Option<&DocumentEmbed> {
        self.documents.iter().find(|d| d.label == *key)
    }
}

fn check_entry(
    table: &'static str,
    label: &PageKey,
    url: &str,
    navigation: &HashSet<&PageKey>,
) -> Result<(), CatalogError> {
    if !navigation.contains(label) {
        return Err(CatalogError::Unlisted {
            table,
            label: label.to_string(),
        });
    }
    if url.is_empty() {
        return Err(CatalogError::EmptyUrl {
            table,
            label: label.to_string(),
        });
    }
    Ok(())
}
