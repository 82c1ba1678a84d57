// Navigation service - Maps the selected page to a render instruction
use crate::application::catalog::Catalog;
use crate::domain::embed::resolve_embed_url;
use crate::domain::navigation::{
    FrameEmbed, MenuItem, NavigationError, RenderInstruction, VideoEmbed,
};
use crate::domain::page::{DocumentKind, PageKey};
use std::sync::Arc;

#[derive(Clone)]
pub struct NavigationService {
    catalog: Arc<Catalog>,
}

impl NavigationService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn default_page(&self) -> &PageKey {
        &self.catalog.default_page
    }

    /// Menu entries in navigation order with the branch each one routes to.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.catalog
            .navigation
            .iter()
            .filter_map(|key| {
                let branch = *self.catalog.branches_for(key).first()?;
                Some(MenuItem {
                    key: key.clone(),
                    branch,
                })
            })
            .collect()
    }

    /// Pick the content for `key`. First match wins: overview, dashboards,
    /// documents, tools.
    pub fn dispatch(&self, key: &PageKey) -> Result<RenderInstruction, NavigationError> {
        let catalog = &self.catalog;

        if *key == catalog.overview_page {
            return Ok(RenderInstruction::Overview(catalog.overview.clone()));
        }

        if let Some(dashboard) = catalog.dashboard(key) {
            let url = if catalog.pre_resolved {
                dashboard.url.clone()
            } else {
                resolve_embed_url(&dashboard.url, &catalog.embed_origin)
            };
            return Ok(RenderInstruction::Frame(FrameEmbed {
                title: dashboard.title.clone(),
                description: dashboard.description.clone(),
                url,
                height: catalog.frame_height,
                scrolling: true,
            }));
        }

        if let Some(document) = catalog.document(key) {
            return Ok(match document.kind {
                DocumentKind::Frame => RenderInstruction::Frame(FrameEmbed {
                    title: document.title.clone(),
                    description: None,
                    url: document.url.clone(),
                    height: catalog.frame_height,
                    scrolling: true,
                }),
                DocumentKind::Video => RenderInstruction::Video(VideoEmbed {
                    title: document.title.clone(),
                    url: document.url.clone(),
                    link: document.link_target().to_string(),
                }),
            });
        }

        if *key == catalog.tools_page {
            return Ok(RenderInstruction::Tools {
                tools: catalog.tools.clone(),
            });
        }

        tracing::debug!("No content routed for page '{}'", key);
        Err(NavigationError::UnknownPage(key.to_string()))
    }
}
