//! Resize URL construction
//!
//! Unsplash raw image URLs accept imgix-style rendering parameters, so
//! resizing is pure URL surgery: no network calls, and setting a parameter
//! replaces any existing value of the same name, which keeps the operation
//! deterministic and idempotent.

use url::Url;

use crate::domain::ports::{CropMode, ResizeError};

/// Default crop focus hint when the caller supplies no anchors.
pub const DEFAULT_CROP_FOCUS: &str = "faces,focalpoint";

/// Build a resized-image URL from a record's base URL.
///
/// Appends `w`, `h`, a fit mode (`crop` when cropping, `clip` otherwise)
/// and a `crop` focus hint. Caller-supplied anchors are joined with `,`
/// after `center` entries are dropped; a list that filters down to nothing
/// yields an empty `crop=` parameter, which upstream reads as "no focus
/// hint".
///
/// # Errors
/// Fails only when the base URL does not parse.
pub fn resize_url(
    base_url: &str,
    width: u32,
    height: u32,
    crop: &CropMode,
) -> Result<String, ResizeError> {
    let fit = match crop {
        CropMode::Clip => "clip",
        CropMode::Crop | CropMode::Anchored(_) => "crop",
    };

    let focus = match crop {
        CropMode::Anchored(anchors) => anchors
            .iter()
            .filter(|anchor| *anchor != "center")
            .cloned()
            .collect::<Vec<_>>()
            .join(","),
        CropMode::Clip | CropMode::Crop => DEFAULT_CROP_FOCUS.to_string(),
    };

    with_render_params(
        base_url,
        &[
            ("w", width.to_string()),
            ("h", height.to_string()),
            ("fit", fit.to_string()),
            ("crop", focus),
        ],
    )
}

/// Set rendering parameters on a base URL, replacing same-named parameters.
///
/// Parameters already on the URL that are not being set are retained in
/// their original order; the new parameters follow in the given order.
pub fn with_render_params(
    base_url: &str,
    params: &[(&str, String)],
) -> Result<String, ResizeError> {
    let mut url = Url::parse(base_url)?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url.into())
}
