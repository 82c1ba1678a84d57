// HTML page rendering - Sidebar shell around embedded frames
use crate::application::catalog::Catalog;
use crate::application::page_renderer::PageRenderer;
use crate::domain::navigation::{FrameEmbed, RenderInstruction, VideoEmbed};
use crate::domain::page::{OverviewContent, PageKey, ToolEntry};
use std::fmt::Write;

const STYLESHEET: &str = r#"
html, body { margin: 0; font-family: "Segoe UI", Arial, sans-serif; background-color: #0f0f14; color: #e6e6eb; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 240px; flex-shrink: 0; padding: 2rem 1.25rem; background-color: #14141c; border-right: 1px solid #2a2a35; }
.sidebar h3 { margin-top: 0; }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar li a { display: block; padding: 0.4rem 0.6rem; border-radius: 4px; color: #c9c3e6; }
.sidebar li a.active { background-color: #1c1c26; color: #f1c7d9; }
.content { flex: 1; padding: 2rem 3rem; min-width: 0; }
h1 { color: #e6e6eb; font-weight: 600; }
h2 { color: #c9c3e6; font-weight: 500; }
h3 { color: #b07aa1; font-weight: 500; }
p, li, label, summary { color: #b3b3bd; font-size: 0.95rem; }
a { color: #e6b6cf; text-decoration: none; }
a:hover { color: #f1c7d9; }
hr { border: none; border-top: 1px solid #2a2a35; margin: 1.5rem 0; }
code { background-color: #1c1c26; color: #f1c7d9; border-radius: 4px; padding: 0.1rem 0.3rem; }
.columns { display: flex; gap: 2rem; }
.columns ul { flex: 1; }
iframe { width: 100%; border: none; }
video { width: 100%; max-height: 80vh; background-color: #000; }
"#;

pub struct HtmlRenderer {
    title: String,
    heading: String,
    navigation: Vec<PageKey>,
}

impl HtmlRenderer {
    pub fn new(title: String, heading: String, navigation: Vec<PageKey>) -> Self {
        Self {
            title,
            heading,
            navigation,
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(
            catalog.title.clone(),
            catalog.heading.clone(),
            catalog.navigation.clone(),
        )
    }

    fn document(&self, active: Option<&PageKey>, main: &str) -> String {
        let title = match active {
            Some(key) => format!("{} · {}", key, self.title),
            None => self.title.clone(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="shell">
<nav class="sidebar">
<h3>{heading}</h3>
{menu}</nav>
<main class="content">
{main}</main>
</div>
</body>
</html>
"#,
            title = html_escape(&title),
            css = STYLESHEET,
            heading = html_escape(&self.heading),
            menu = self.menu(active),
            main = main,
        )
    }

    fn menu(&self, active: Option<&PageKey>) -> String {
        let mut out = String::from("<ul>\n");
        for key in &self.navigation {
            let current = if Some(key) == active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            let _ = writeln!(
                out,
                r#"<li><a{} href="{}">{}</a></li>"#,
                current,
                html_escape(&page_href(key)),
                html_escape(key.as_str())
            );
        }
        out.push_str("</ul>\n");
        out
    }
}

impl PageRenderer for HtmlRenderer {
    fn render_page(&self, active: &PageKey, instruction: &RenderInstruction) -> String {
        let main = match instruction {
            RenderInstruction::Overview(overview) => overview_panel(overview),
            RenderInstruction::Frame(frame) => frame_panel(frame),
            RenderInstruction::Video(video) => video_panel(video),
            RenderInstruction::Tools { tools } => tools_panel(tools),
        };
        self.document(Some(active), &main)
    }

    fn render_not_found(&self, requested: &str) -> String {
        let main = format!(
            "<h2>Page not found</h2>\n\
             <p>There is no page named <code>{}</code>. Pick one from the menu.</p>\n",
            html_escape(requested)
        );
        self.document(None, &main)
    }
}

/// Link for a menu entry; keys may contain spaces.
pub fn page_href(key: &PageKey) -> String {
    format!("/pages/{}", urlencoding::encode(key.as_str()))
}

fn overview_panel(overview: &OverviewContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h2>{}</h2>", html_escape(&overview.headline));
    for paragraph in &overview.intro {
        let _ = writeln!(out, "<p>{}</p>", html_escape(paragraph));
    }

    if !overview.focus.is_empty() {
        out.push_str("<hr>\n<h3>Analytical Focus</h3>\n<div class=\"columns\">\n");
        let half = overview.focus.len().div_ceil(2);
        for column in overview.focus.chunks(half) {
            out.push_str("<ul>\n");
            for area in column {
                let _ = writeln!(
                    out,
                    "<li><strong>{}</strong><br>{}</li>",
                    html_escape(&area.title),
                    html_escape(&area.text)
                );
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }

    let dataset = &overview.dataset;
    if !dataset.summary.is_empty() || !dataset.attributes.is_empty() {
        out.push_str("<hr>\n<h3>Dataset Overview</h3>\n");
        if !dataset.summary.is_empty() {
            let _ = writeln!(out, "<p>{}</p>", html_escape(&dataset.summary));
        }
        out.push_str("<details>\n<summary>View dataset details</summary>\n");
        if !dataset.name.is_empty() {
            let _ = writeln!(
                out,
                "<p><strong>Dataset Name:</strong> {}</p>",
                html_escape(&dataset.name)
            );
        }
        if !dataset.domain.is_empty() {
            let _ = writeln!(
                out,
                "<p><strong>Data Domain:</strong> {}</p>",
                html_escape(&dataset.domain)
            );
        }
        if !dataset.attributes.is_empty() {
            out.push_str("<p><strong>Key Attributes:</strong></p>\n<ul>\n");
            for attribute in &dataset.attributes {
                let _ = writeln!(out, "<li>{}</li>", html_escape(attribute));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</details>\n");
    }

    if !overview.significance.is_empty() {
        let _ = writeln!(
            out,
            "<hr>\n<h3>Project Significance</h3>\n<p>{}</p>",
            html_escape(&overview.significance)
        );
    }
    out
}

fn frame_panel(frame: &FrameEmbed) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h2>{}</h2>", html_escape(&frame.title));
    if let Some(description) = &frame.description {
        let _ = writeln!(out, "<p>{}</p>", html_escape(description));
    }
    let _ = writeln!(
        out,
        r#"<hr>
<iframe src="{}" height="{}" scrolling="{}" loading="lazy" allowfullscreen></iframe>"#,
        html_escape(&frame.url),
        frame.height,
        if frame.scrolling { "yes" } else { "no" }
    );
    out
}

fn video_panel(video: &VideoEmbed) -> String {
    format!(
        r#"<h2>{title}</h2>
<hr>
<video controls preload="metadata" src="{src}"></video>
<p><a href="{link}" target="_blank" rel="noopener">Open the video in a new tab</a></p>
"#,
        title = html_escape(&video.title),
        src = html_escape(&video.url),
        link = html_escape(&video.link),
    )
}

fn tools_panel(tools: &[ToolEntry]) -> String {
    let mut out = String::from("<h2>Tools and Technologies</h2>\n<ul>\n");
    for tool in tools {
        let _ = writeln!(
            out,
            "<li><strong>{}</strong> – {}</li>",
            html_escape(&tool.name),
            html_escape(&tool.description)
        );
    }
    out.push_str("</ul>\n");
    out
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::{DatasetInfo, FocusArea};

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(
            "NYC 311".to_string(),
            "NYC 311 Dashboard".to_string(),
            vec![
                PageKey::new("Overview"),
                PageKey::new("Dashboard 1"),
                PageKey::new("Video"),
                PageKey::new("Tools"),
            ],
        )
    }

    fn frame(url: &str) -> RenderInstruction {
        RenderInstruction::Frame(FrameEmbed {
            title: "Temporal Patterns".to_string(),
            description: Some("Volumes over time.".to_string()),
            url: url.to_string(),
            height: 900,
            scrolling: true,
        })
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_href_encodes_spaces() {
        assert_eq!(page_href(&PageKey::new("Dashboard 1")), "/pages/Dashboard%201");
    }

    #[test]
    fn test_menu_marks_only_active_page() {
        let html = renderer().render_page(
            &PageKey::new("Dashboard 1"),
            &frame("https://public.tableau.com/views/B/S?:showVizHome=no&:embed=yes"),
        );

        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(
            r#"<a class="active" aria-current="page" href="/pages/Dashboard%201">Dashboard 1</a>"#
        ));
        assert!(html.contains(r#"<a href="/pages/Overview">Overview</a>"#));
        assert!(html.contains("<title>Dashboard 1 · NYC 311</title>"));
    }

    #[test]
    fn test_frame_panel_attributes() {
        let html = renderer().render_page(
            &PageKey::new("Dashboard 1"),
            &frame("https://public.tableau.com/views/B/S?:showVizHome=no&:embed=yes"),
        );

        assert!(html.contains(
            r#"<iframe src="https://public.tableau.com/views/B/S?:showVizHome=no&amp;:embed=yes""#
        ));
        assert!(html.contains(r#"height="900" scrolling="yes""#));
        assert!(html.contains("<h2>Temporal Patterns</h2>"));
        assert!(html.contains("<p>Volumes over time.</p>"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_video_panel_uses_video_element() {
        let html = renderer().render_page(
            &PageKey::new("Video"),
            &RenderInstruction::Video(VideoEmbed {
                title: "Walkthrough".to_string(),
                url: "https://cdn.example.com/a.mp4".to_string(),
                link: "https://cdn.example.com/a.mp4".to_string(),
            }),
        );

        assert!(html.contains(
            r#"<video controls preload="metadata" src="https://cdn.example.com/a.mp4">"#
        ));
        assert!(html.contains(r#"<a href="https://cdn.example.com/a.mp4" target="_blank""#));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_static_pages_have_no_embeds() {
        let overview = RenderInstruction::Overview(OverviewContent {
            headline: "NYC 311 Service Requests Analysis".to_string(),
            intro: vec!["Intro <b>text</b>".to_string()],
            focus: vec![
                FocusArea {
                    title: "A".to_string(),
                    text: "a".to_string(),
                },
                FocusArea {
                    title: "B".to_string(),
                    text: "b".to_string(),
                },
                FocusArea {
                    title: "C".to_string(),
                    text: "c".to_string(),
                },
            ],
            dataset: DatasetInfo {
                name: "NYC 311 Service Requests".to_string(),
                domain: "Civic and Urban Services".to_string(),
                summary: "Records of complaints.".to_string(),
                attributes: vec!["Borough and location information".to_string()],
            },
            significance: "Transparency.".to_string(),
        });
        let tools = RenderInstruction::Tools {
            tools: vec![ToolEntry {
                name: "Tableau Public".to_string(),
                description: "Interactive dashboard development".to_string(),
            }],
        };

        let overview_html = renderer().render_page(&PageKey::new("Overview"), &overview);
        assert!(overview_html.contains("<p>Intro &lt;b&gt;text&lt;/b&gt;</p>"));
        assert_eq!(overview_html.matches("<ul>\n<li><strong>").count(), 2);
        assert!(overview_html.contains("<summary>View dataset details</summary>"));
        assert!(overview_html.contains("<p>Transparency.</p>"));

        let tools_html = renderer().render_page(&PageKey::new("Tools"), &tools);
        assert!(tools_html.contains(
            "<li><strong>Tableau Public</strong> – Interactive dashboard development</li>"
        ));

        for html in [overview_html, tools_html] {
            assert!(!html.contains("<iframe"));
            assert!(!html.contains("<video"));
        }
    }

    #[test]
    fn test_not_found_escapes_request() {
        let html = renderer().render_not_found("<script>");

        assert!(html.contains("<code>&lt;script&gt;</code>"));
        assert!(!html.contains("aria-current"));
        assert!(html.contains("<title>NYC 311</title>"));
    }
}
