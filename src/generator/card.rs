use maud::{html, PreEscaped};

use crate::context::Site;

use super::utils::current_month_year;

/// Listing card for a post. `date` defaults to the current month.
pub(crate) fn build_card(
    site: &Site,
    title: &str,
    excerpt: &str,
    html_path: &str,
    date: Option<&str>,
) -> String {
    let date = date.map_or_else(current_month_year, str::to_string);
    // `--` would close the comment early
    let mut label = title.to_string();
    while label.contains("--") {
        label = label.replace("--", "- -");
    }

    html! {
        (PreEscaped(format!("<!-- Blog Post: {label} -->")))
        a.blog-card href=(html_path) {
            div.blog-card-title { (title) }
            div.blog-card-date { (date) }
            div.blog-card-excerpt { (excerpt) }
            span.blog-card-read-more { (site.read_more) }
        }
    }
    .into()
}
