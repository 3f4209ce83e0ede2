use std::fmt::Write;

use tagcloud_core::TagCloud;

/// Stylesheet published with the course tag cloud assignment.
pub const HOSTED_STYLESHEET: &str =
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
/// Local copy looked up next to the generated page.
pub const LOCAL_STYLESHEET: &str = "tagcloud.css";

pub fn default_stylesheets() -> Vec<String> {
    vec![HOSTED_STYLESHEET.to_string(), LOCAL_STYLESHEET.to_string()]
}

pub trait CloudRenderer: Send + Sync {
    fn render(&self, source_name: &str, cloud: &TagCloud) -> String;
}

/// Renders a cloud as a standalone HTML page styled by `f{size}` classes.
#[derive(Debug, Clone)]
pub struct HtmlCloudRenderer {
    stylesheets: Vec<String>,
}

impl HtmlCloudRenderer {
    pub fn new(stylesheets: Vec<String>) -> Self {
        Self { stylesheets }
    }
}

impl Default for HtmlCloudRenderer {
    fn default() -> Self {
        Self::new(default_stylesheets())
    }
}

impl CloudRenderer for HtmlCloudRenderer {
    fn render(&self, source_name: &str, cloud: &TagCloud) -> String {
        let heading = format!(
            "Top {} words in {}",
            cloud.requested,
            escape_html(source_name)
        );

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        let _ = writeln!(page, "<title>{heading}</title>");
        for href in &self.stylesheets {
            let _ = writeln!(
                page,
                "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
                escape_html(href)
            );
        }
        page.push_str("</head>\n<body>\n");
        let _ = writeln!(page, "<h2>{heading}</h2>");
        page.push_str("<hr>\n<div class=\"cdiv\">\n<p class=\"cbox\">\n");
        for word in &cloud.words {
            let _ = writeln!(
                page,
                "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
                word.font_size,
                word.count,
                escape_html(&word.word)
            );
        }
        page.push_str("</p>\n</div>\n</body>\n</html>\n");
        page
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
