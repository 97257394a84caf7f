//! Transform, order, and persist the outfit feed.
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::Reverse;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::model::{Item, Outfit};
use crate::store::model::{Document, Fields};
use crate::store::{FetchError, StoreClient};

/// How a materializer run concluded. The feed file is written either way;
/// the variant lets callers and logs tell a degraded run from a real one
/// without the call ever failing for fetch reasons.
#[derive(Debug)]
pub enum Outcome {
    /// The remote fetch succeeded and the feed holds `count` records.
    Fetched { count: usize },
    /// Fetch, decode, or the initial write failed; an empty feed was
    /// written instead.
    Fallback { cause: FallbackCause },
}

/// Why a run degraded to the empty feed.
#[derive(Debug, Error)]
pub enum FallbackCause {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("feed write failed: {0}")]
    Write(anyhow::Error),
}

/// Fetch the collection, transform it, and overwrite the feed file.
///
/// Fetch, decode, and initial-write failures are absorbed into
/// `Outcome::Fallback` with an empty feed on disk. The only error this
/// returns is a filesystem fault during the fallback write itself, which
/// shares the same path and has no further protection.
pub async fn materialize(client: &StoreClient, cfg: &Config) -> Result<Outcome> {
    let cause = match fetch_outfits(client, cfg).await {
        Ok(mut outfits) => {
            sort_newest_first(&mut outfits);
            match write_feed(&cfg.output.path, &outfits).await {
                Ok(()) => {
                    debug!(count = outfits.len(), "wrote outfit feed");
                    return Ok(Outcome::Fetched {
                        count: outfits.len(),
                    });
                }
                Err(err) => FallbackCause::Write(err),
            }
        }
        Err(err) => FallbackCause::Fetch(err),
    };
    write_feed(&cfg.output.path, &[]).await?;
    Ok(Outcome::Fallback { cause })
}

async fn fetch_outfits(client: &StoreClient, cfg: &Config) -> Result<Vec<Outfit>, FetchError> {
    let resp = client
        .list_documents(&cfg.store.project_id, &cfg.store.collection)
        .await?;
    // Snapshot once so every record missing a date gets the same default.
    let fetched_at = Utc::now();
    Ok(resp
        .documents
        .iter()
        .map(|doc| outfit_from_document(doc, fetched_at))
        .collect())
}

/// Decode one raw document into the canonical record shape. Total: absent
/// fields and wrong tags become defaults, never errors.
pub fn outfit_from_document(doc: &Document, fetched_at: DateTime<Utc>) -> Outfit {
    let f = &doc.fields;
    Outfit {
        id: trailing_segment(&doc.name),
        main_image: f.str_or("mainImage", ""),
        season: f.str_or("season", "fall"),
        slug: f.str_or("slug", ""),
        seo_title: f.str_or("seoTitle", ""),
        meta_description: f.str_or("metaDescription", ""),
        main_image_alt: f.str_or("mainImageAlt", ""),
        full_seo_description: f.str_or("fullSeoDescription", ""),
        outfit_code: f.str_or("outfitCode", ""),
        date_added: f
            .str_opt("dateAdded")
            .map(str::to_string)
            .unwrap_or_else(|| fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        items: f.maps("items").map(item_from_fields).collect(),
    }
}

fn item_from_fields(f: &Fields) -> Item {
    Item {
        name: f.str_or("name", ""),
        image: f.str_or("image", ""),
        link: f.str_or("link", ""),
        alt_text: f.str_or("altText", ""),
        is_accessory: f.bool_or("isAccessory", false),
        category: f.str_or("category", ""),
    }
}

/// Last segment of a document resource path, e.g. `.../outfits/abc123`
/// yields `abc123`.
fn trailing_segment(name: &str) -> String {
    name.rsplit('/').next().unwrap_or_default().to_string()
}

/// Stable sort, newest first. Unparseable timestamps key as the Unix epoch
/// and therefore sort last, keeping their fetch order among themselves.
pub fn sort_newest_first(outfits: &mut [Outfit]) {
    outfits.sort_by_key(|o| Reverse(sort_key(&o.date_added)));
}

fn sort_key(date_added: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(date_added)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Create the destination directory if needed and overwrite the feed file
/// with a pretty-printed JSON array.
pub async fn write_feed(path: &Path, outfits: &[Outfit]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let body = serde_json::to_vec_pretty(outfits).context("failed to serialize feed")?;
    fs::write(path, body)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
