//! HTML page rendering.
//!
//! Pages are askama templates compiled from `templates/`. Callers only see
//! [`render_page`]: a page identifier in, an HTML string out.

use askama::Template;

use crate::error::Result;

/// Renderable page identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Home,
}

/// Navigation entry on the landing page.
#[derive(Debug)]
struct NavLink {
    label: &'static str,
    href: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    title: &'static str,
    tagline: &'static str,
    links: Vec<NavLink>,
}

impl HomeTemplate {
    fn new() -> Self {
        Self {
            title: "Luxta",
            tagline: "Welcome to Luxta! Under development.",
            links: vec![
                NavLink {
                    label: "Status",
                    href: "/status",
                },
                NavLink {
                    label: "Brightness",
                    href: "/brightness",
                },
                NavLink {
                    label: "Sun times",
                    href: "/api/sun",
                },
            ],
        }
    }
}

/// Render `page` to HTML.
pub fn render_page(page: Page) -> Result<String> {
    match page {
        Page::Home => Ok(HomeTemplate::new().render()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_renders_html() {
        let html = render_page(Page::Home).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Welcome to Luxta! Under development."));
        assert!(html.contains(r#"href="/brightness""#));
    }
}
