//! URL construction for the character endpoints

use rickdex_core::prelude::*;
use url::Url;

/// Collection path segment under the API base
const CHARACTER_SEGMENT: &str = "character";

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| Error::config(format!("API base URL cannot carry a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `GET {base}/character` for page 1, `{base}/character?page=N` otherwise.
///
/// Page 1 is requested without a query string.
pub fn character_collection_url(base: &Url, page: u32) -> Result<Url> {
    let mut url = with_segments(base, &[CHARACTER_SEGMENT])?;
    if page > 1 {
        url.query_pairs_mut().append_pair("page", &page.to_string());
    }
    Ok(url)
}

/// `GET {base}/character/{id}`
pub fn character_url(base: &Url, id: u32) -> Result<Url> {
    with_segments(base, &[CHARACTER_SEGMENT, &id.to_string()])
}
