//! Server-rendered HTML views.
//!
//! All interpolated values pass through [`escape`] or [`escape_attr`].

pub mod admin;
pub mod public;

use axum::response::Html;
use std::borrow::Cow;

use crate::constants::SITE_NAME;

pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

pub(crate) fn escape_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

fn layout(title: &str, nav: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 0; color: #1f2933; }}
header, main, footer {{ padding: 1rem 2rem; }}
header {{ background: #102a43; color: #fff; }}
header a {{ color: #fff; margin-right: 1rem; text-decoration: none; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border-bottom: 1px solid #d9e2ec; padding: .5rem; text-align: left; }}
.error {{ color: #b42318; }}
.notice {{ color: #027a48; }}
</style>
</head>
<body>
<header><strong>{site}</strong> <nav>{nav}</nav></header>
<main>
{body}
</main>
<footer><small>&copy; {site}</small></footer>
</body>
</html>"#,
        title = escape(title),
        site = escape(SITE_NAME),
    ))
}

fn public_nav() -> &'static str {
    r#"<a href="/">Home</a><a href="/services">Services</a><a href="/contact">Contact</a>"#
}

fn admin_nav() -> &'static str {
    r#"<a href="/admin/dashboard">Dashboard</a><a href="/admin/enquiries">Enquiries</a><a href="/admin/logout">Log out</a>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralises_markup() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn test_layout_escapes_title() {
        let Html(page) = layout("<b>x</b>", "", "");
        assert!(page.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!page.contains("<b>x</b>"));
    }
}
