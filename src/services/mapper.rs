//! Photo-to-record mapping
//!
//! Builds one normalized [`Image`] from one raw upstream photo, leaving the
//! date of sponsored entries unset for the repair pass in
//! [`super::normalizer`].

use std::collections::BTreeMap;

use chrono::DateTime;
use tracing::debug;

use crate::domain::models::{
    Image, ImageSize, Orientation, SizeRegistry, SizeSpec, IMAGE_MIME_TYPE,
};
use crate::infrastructure::unsplash::RawPhoto;
use crate::services::resize::with_render_params;

/// Referral query mandated by the upstream attribution guidelines.
const REFERRAL_QUERY: &str = "?utm_source=altis&utm_medium=referral";

/// Map a raw upstream photo to a normalized record.
///
/// The record's date is parsed from the photo's capture timestamp unless
/// the entry is sponsored; sponsored entries (and unparseable timestamps)
/// stay undated for the repair pass.
#[must_use]
pub fn map_photo(photo: &RawPhoto, sizes: &SizeRegistry) -> Image {
    let title = photo
        .description
        .clone()
        .or_else(|| photo.alt_description.clone())
        .unwrap_or_default();
    let alt = photo.alt_description.clone().unwrap_or_default();
    let credit = attribution(photo);

    Image {
        id: photo.id.clone(),
        source_id: photo.id.clone(),
        mime_type: IMAGE_MIME_TYPE.to_string(),
        url: photo.urls.raw.clone(),
        filename: format!("{}.jpg", photo.id),
        link: photo.links.html.clone(),
        title,
        width: photo.width,
        height: photo.height,
        alt,
        caption: credit.clone(),
        description: credit,
        sizes: build_sizes(photo, sizes),
        date: effective_date(photo),
    }
}

/// Parse the effective date, or `None` for entries the repair pass dates.
fn effective_date(photo: &RawPhoto) -> Option<i64> {
    if photo.is_sponsored() {
        return None;
    }
    let raw = photo.created_at.as_deref()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.timestamp()),
        Err(err) => {
            debug!(id = %photo.id, %err, "unparseable timestamp, treating as undated");
            None
        }
    }
}

/// Build the ready-to-render photographer credit line.
fn attribution(photo: &RawPhoto) -> String {
    let photographer_url = format!("{}{REFERRAL_QUERY}", photo.user.links.html);
    let unsplash_url = format!("https://unsplash.com/{REFERRAL_QUERY}");
    format!(
        r#"Photo by <a href="{photographer_url}">{}</a> on <a href="{unsplash_url}">Unsplash</a>"#,
        escape_html(&photo.user.name)
    )
}

/// Minimal HTML escaping for text interpolated into the credit line.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Generate the named size variants for a photo.
///
/// Every registered size plus a `full` variant at the photo's native
/// dimensions. Cropped sizes render with `fit=crop`, the rest with
/// `fit=max`. Orientation is the source photo's and is shared by all
/// variants.
fn build_sizes(photo: &RawPhoto, registry: &SizeRegistry) -> BTreeMap<String, ImageSize> {
    let orientation = Orientation::from_dimensions(photo.width, photo.height);
    let full = SizeSpec {
        width: photo.width,
        height: photo.height,
        crop: false,
    };

    registry
        .entries()
        .chain(std::iter::once(("full", full)))
        .map(|(name, spec)| {
            let fit = if spec.crop { "crop" } else { "max" };
            let url = with_render_params(
                &photo.urls.raw,
                &[
                    ("w", spec.width.to_string()),
                    ("h", spec.height.to_string()),
                    ("fit", fit.to_string()),
                ],
            )
            .unwrap_or_else(|err| {
                debug!(id = %photo.id, %err, "size URL fell back to base");
                photo.urls.raw.clone()
            });

            (
                name.to_string(),
                ImageSize {
                    width: spec.width,
                    height: spec.height,
                    orientation,
                    url,
                },
            )
        })
        .collect()
}
