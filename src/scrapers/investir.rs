//! Investir / Les Echos section scraper.
//!
//! Listing pages hold article cards whose links carry the headline in an
//! `aria-label` attribute. Article pages carry the publication date in a
//! dedicated span and the body in `<p>` elements, followed by a paywall
//! teaser that is cut off.

use crate::config::SourceConfig;
use crate::error::PipelineError;
use crate::http::Fetch;
use crate::models::{ListingEntry, NO_DATE, RawArticle};
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

fn selector(css: &str) -> Result<Selector, PipelineError> {
    Selector::parse(css).map_err(|e| PipelineError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Index a section listing page.
///
/// A non-200 listing page yields no articles; a transport failure is fatal.
#[instrument(level = "info", skip_all, fields(source = %source.name, url = %source.listing_url))]
pub async fn index_articles<F: Fetch>(
    fetcher: &F,
    source: &SourceConfig,
) -> Result<Vec<ListingEntry>, PipelineError> {
    let response = fetcher
        .fetch(&source.listing_url)
        .await
        .map_err(|e| PipelineError::Listing {
            url: source.listing_url.clone(),
            source: e,
        })?;

    if !response.is_success() {
        warn!(status = response.status, "Listing page not found; section skipped");
        return Ok(Vec::new());
    }

    let entries = parse_listing(&response.body, source)?;
    info!(count = entries.len(), "Indexed article links");
    debug!(links = ?entries.iter().map(|e| &e.link).collect::<Vec<_>>(), "Article links");
    Ok(entries)
}

/// Extract `(aria-label, absolute link)` pairs in document order.
pub fn parse_listing(
    html: &str,
    source: &SourceConfig,
) -> Result<Vec<ListingEntry>, PipelineError> {
    let base = Url::parse(&source.base_url).map_err(|e| PipelineError::InvalidUrl {
        url: source.base_url.clone(),
        source: e,
    })?;
    let links = selector(&source.listing_selector())?;
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    for element in document.select(&links) {
        let attrs = element.value();
        let (Some(title), Some(href)) = (attrs.attr("aria-label"), attrs.attr("href")) else {
            continue;
        };
        if title.is_empty() {
            continue;
        }
        let link = base.join(href).map_err(|e| PipelineError::InvalidUrl {
            url: href.to_string(),
            source: e,
        })?;
        entries.push(ListingEntry {
            title: title.to_string(),
            link: link.to_string(),
        });
    }
    Ok(entries)
}

/// Fetch one article page.
///
/// A non-200 answer or a transport failure becomes the sentinel record; a
/// request that cannot even be built (e.g. a `javascript:` link) is fatal.
#[instrument(level = "info", skip_all, fields(url = %entry.link))]
pub async fn fetch_article<F: Fetch>(
    fetcher: &F,
    entry: ListingEntry,
    source: &SourceConfig,
) -> Result<RawArticle, PipelineError> {
    let response = match fetcher.fetch(&entry.link).await {
        Ok(response) if response.is_success() => response,
        Ok(response) => {
            warn!(status = response.status, "Article not retrieved");
            return Ok(RawArticle::unavailable(entry));
        }
        Err(e) if e.is_transient() => {
            warn!(error = %e, "Article not retrieved");
            return Ok(RawArticle::unavailable(entry));
        }
        Err(e) => {
            error!(error = %e, "Article url rejected");
            return Err(PipelineError::Article {
                url: entry.link,
                source: e,
            });
        }
    };

    let (date, raw_text) = parse_article(&response.body, source)?;
    debug!(%date, bytes = raw_text.len(), "Parsed article");
    Ok(RawArticle {
        date,
        title: entry.title,
        link: entry.link,
        raw_text,
    })
}

/// Extract the publication date and the body text of an article page.
pub fn parse_article(
    html: &str,
    source: &SourceConfig,
) -> Result<(String, String), PipelineError> {
    let date_selector = selector(&source.date_selector)?;
    let content_selector = selector(&source.content_selector)?;
    let document = Html::parse_document(html);

    let date = document
        .select(&date_selector)
        .next()
        .map(|el| {
            el.text()
                .collect::<String>()
                .replace(&source.date_prefix, "")
                .trim()
                .to_string()
        })
        .unwrap_or_else(|| NO_DATE.to_string());

    let mut text = document
        .select(&content_selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    for phrase in &source.strip_phrases {
        text = text.replace(phrase.as_str(), "");
    }
    if let Some(marker) = &source.truncate_at {
        if let Some(at) = text.find(marker.as_str()) {
            text.truncate(at);
        }
    }

    Ok((date, text))
}
