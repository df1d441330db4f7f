use std::path::PathBuf;

use anyhow::Context as _;
use log::{debug, info};

use crate::{context::Context, metadata::Metadata, renderer::MarkdownRenderer};

pub(crate) mod card;
pub(crate) mod page;
pub(crate) mod utils;

/// What a single run produced.
#[derive(Debug)]
pub(crate) struct Conversion {
    pub output_path: PathBuf,
    pub title: String,
    pub card: Option<String>,
}

fn read_document(ctx: &Context) -> anyhow::Result<String> {
    let content = std::fs::read_to_string(&ctx.input_path)
        .with_context(|| format!("while reading {:?}", ctx.input_path))?;
    Ok(content.replace("\r\n", "\n"))
}

pub(crate) fn generate(ctx: &Context, renderer: &dyn MarkdownRenderer) -> anyhow::Result<Conversion> {
    let content = read_document(ctx)?;

    let metadata = Metadata::extract(&content, ctx.excerpt_length);
    debug!("Extracted {metadata:?}");

    let body_html = renderer
        .render(&content)
        .with_context(|| format!("while rendering {:?}", ctx.input_path))?;

    debug!("Path prefix for {:?}: {:?}", ctx.input_path, ctx.path_prefix);
    let page_html = page::build_page(&ctx.site, &metadata.title, &body_html, &ctx.path_prefix);

    std::fs::write(&ctx.output_path, page_html)
        .with_context(|| format!("while writing {:?}", ctx.output_path))?;
    info!("Wrote {:?}", ctx.output_path);

    let card = ctx.update_index.then(|| {
        card::build_card(
            &ctx.site,
            &metadata.title,
            &metadata.excerpt,
            &utils::href_of(&ctx.output_path),
            None,
        )
    });

    Ok(Conversion {
        output_path: ctx.output_path.clone(),
        title: metadata.title,
        card,
    })
}

pub(crate) fn report(conversion: &Conversion) {
    println!("✅ Created: {}", conversion.output_path.display());
    println!("   Title: {}", conversion.title);

    if let Some(card) = &conversion.card {
        println!(
            "\n📝 Add this to {} inside <div class=\"blog-list\">:",
            page::LISTING_PAGE
        );
        println!("{card}");
    }

    println!("\n💡 Next steps:");
    println!("   1. Open the generated HTML file to verify formatting");
    println!(
        "   2. Add a blog card entry to {} if not done automatically",
        page::LISTING_PAGE
    );
    println!("   3. Commit and push to deploy");
}
