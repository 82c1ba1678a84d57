// Shared-link to embed-link resolution for Tableau Public views
use regex::Regex;
use std::sync::LazyLock;

const EMBED_FLAGS: &str = "?:showVizHome=no&:embed=yes";

/// Origin used for shared links that carry no `scheme://host` of their own.
pub const DEFAULT_EMBED_ORIGIN: &str = "https://public.tableau.com";

// /viz/<workbook>/<sheet> at the very end of the path
static VIZ_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/viz/([^/]+)/([^/]+)$").expect("viz tail pattern is valid")
});

static URL_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]*://[^/]+)/").expect("origin pattern is valid")
});

/// Workbook and sheet identifiers pulled out of a shared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizPath<'a> {
    /// `scheme://host` of the link, if it has one.
    pub origin: Option<&'a str>,
    pub workbook: &'a str,
    pub sheet: &'a str,
}

/// Parse `.../viz/<workbook>/<sheet>` out of a shared link, ignoring its query.
pub fn parse_shared_link(shared_url: &str) -> Option<VizPath<'_>> {
    let base = shared_url.split('?').next().unwrap_or(shared_url);
    let caps = VIZ_TAIL.captures(base)?;
    let origin = URL_ORIGIN
        .captures(base)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());

    Some(VizPath {
        origin,
        workbook: caps.get(1)?.as_str(),
        sheet: caps.get(2)?.as_str(),
    })
}

/// Convert a shared visualization link into its embed form.
///
/// The embed link keeps the host of `shared_url`; links without one get
/// `default_origin`. Links that do not carry a `/viz/<workbook>/<sheet>` path
/// are returned unchanged, so feeding an already resolved `/views/` link back
/// in is a no-op.
pub fn resolve_embed_url(shared_url: &str, default_origin: &str) -> String {
    match parse_shared_link(shared_url) {
        Some(viz) => format!(
            "{}/views/{}/{}{}",
            viz.origin.unwrap_or(default_origin.trim_end_matches('/')),
            viz.workbook,
            viz.sheet,
            EMBED_FLAGS
        ),
        None => {
            tracing::debug!("No /viz/<workbook>/<sheet> path in {}, using it as is", shared_url);
            shared_url.to_string()
        }
    }
}
