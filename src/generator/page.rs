use maud::{html, PreEscaped, DOCTYPE};

use crate::context::Site;

use super::utils::current_month_year;

const PAGE_STYLE: &str = include_str!("page.css");
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Noto+Serif+SC:wght@300;400;500;600;700&family=Open+Sans:wght@300;400;600&display=swap";

pub(crate) const LISTING_PAGE: &str = "blog.html";
pub(crate) const HOME_PAGE: &str = "index.html";

/// Full article page, dated with the current month.
pub(crate) fn build_page(site: &Site, title: &str, body_html: &str, path_prefix: &str) -> String {
    build_page_dated(site, title, body_html, path_prefix, &current_month_year())
}

pub(crate) fn build_page_dated(
    site: &Site,
    title: &str,
    body_html: &str,
    path_prefix: &str,
    date: &str,
) -> String {
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site.blog_name) }
                link rel="stylesheet" type="text/css" href={ (path_prefix) "css/main.css" };
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href=(FONTS_URL) rel="stylesheet";
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                div.blog-post-container {
                    header.blog-post-header {
                        h1 { (title) }
                        div.blog-post-date { (date) }
                    }
                    article.blog-post-content {
                        (PreEscaped(body_html))
                    }
                    nav.nav-links {
                        a.nav-link href={ (path_prefix) (LISTING_PAGE) } { "← Back to Blog" }
                        a.nav-link href={ (path_prefix) (HOME_PAGE) } { "Home" }
                    }
                }
            }
        }
    }
    .into()
}
