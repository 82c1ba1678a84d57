use crate::domain::embed::DEFAULT_EMBED_ORIGIN;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub site: SiteSettings,
    #[serde(default)]
    pub dashboards: DashboardsConfig,
    #[serde(default)]
    pub documents: Vec<DocumentConfig>,
    #[serde(default)]
    pub overview: OverviewConfig,
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    pub title: String,
    pub heading: String,
    pub default_page: String,
    #[serde(default = "default_frame_height")]
    pub frame_height: u32,
    pub overview_page: String,
    pub tools_page: String,
    #[serde(default)]
    pub navigation: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardsConfig {
    /// Stored urls are already embed links and skip resolution.
    #[serde(default)]
    pub pre_resolved: bool,
    /// Host for resolved links whose shared url has no `scheme://host`.
    #[serde(default = "default_embed_origin")]
    pub embed_origin: String,
    #[serde(default)]
    pub entries: Vec<DashboardConfig>,
}

impl Default for DashboardsConfig {
    fn default() -> Self {
        Self {
            pre_resolved: false,
            embed_origin: default_embed_origin(),
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub label: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKindConfig {
    #[default]
    Frame,
    Video,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    pub label: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub kind: DocumentKindConfig,
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OverviewConfig {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub focus: Vec<FocusConfig>,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub significance: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FocusConfig {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToolConfig {
    pub name: String,
    pub description: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_embed_origin() -> String {
    DEFAULT_EMBED_ORIGIN.to_string()
}

fn default_frame_height() -> u32 {
    900
}

pub fn load_shell_config() -> anyhow::Result<ShellConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/site"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
