//! Markdown edition output.
//!
//! An edition is a coloured listing of every article linking to a detail
//! section further down the same page. The file is written to
//! `{markdown_output_dir}/{date}_{time_of_day}.md`.

use crate::error::OutputError;
use crate::models::{ArticleRecord, FrontPage};
use crate::utils::{slugify_title, upcase};
use std::fmt::Write;
use tokio::fs;
use tracing::{info, instrument};

/// Render the whole edition: heading, listing, then one section per article.
pub fn front_page_to_markdown(front_page: &FrontPage) -> String {
    let mut md = String::new();
    let _ = writeln!(
        md,
        "# Bourse Digest: {} {} Edition\n",
        front_page.local_date,
        upcase(&front_page.time_of_day)
    );
    let _ = writeln!(md, "_Updated at {}_\n", front_page.local_time);

    if front_page.articles.is_empty() {
        md.push_str("No articles were found for this edition.\n");
        return md;
    }

    md.push_str("## Articles\n\n");
    for article in &front_page.articles {
        let _ = writeln!(
            md,
            "- <span style=\"color:{}\">[{} - {}](#{})</span>",
            article.sentiment_label.color(),
            article.date,
            article.title,
            slugify_title(&article.title)
        );
    }

    for article in &front_page.articles {
        md.push_str("\n---\n\n");
        md.push_str(&article_to_markdown(article));
    }
    md
}

/// Render the detail section of one article.
pub fn article_to_markdown(article: &ArticleRecord) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "<a id=\"{}\"></a>\n", slugify_title(&article.title));
    let _ = writeln!(md, "## {}\n", article.title);
    let _ = writeln!(md, "- **Date:** {}", article.date);
    let _ = writeln!(md, "- **Link:** [{0}]({0})", article.link);
    let _ = writeln!(
        md,
        "- **Sentiment:** <span style=\"color:{}\">{}</span>\n",
        article.sentiment_label.color(),
        article.sentiment_explanation
    );

    md.push_str("### Summary\n\n");
    if article.summary.is_empty() {
        md.push_str("_No summary available._\n\n");
    } else {
        let _ = writeln!(md, "{}\n", article.summary);
    }

    md.push_str("### Article\n\n");
    let _ = writeln!(md, "{}", article.raw_text.trim());
    md
}

/// Write the edition and return the path of the file.
#[instrument(level = "info", skip_all, fields(%markdown_output_dir, date = %front_page.local_date))]
pub async fn write_frontpage(
    front_page: &FrontPage,
    markdown_output_dir: &str,
) -> Result<String, OutputError> {
    let path = format!(
        "{}/{}_{}.md",
        markdown_output_dir.trim_end_matches('/'),
        front_page.local_date,
        front_page.time_of_day
    );
    fs::write(&path, front_page_to_markdown(front_page))
        .await
        .map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
    info!(%path, articles = front_page.articles.len(), "Wrote Markdown edition");
    Ok(path)
}
