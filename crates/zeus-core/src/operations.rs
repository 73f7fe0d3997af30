//! The publication operations exposed to request boundaries.
//!
//! Each operation takes exactly one directory snapshot. Nothing is cached
//! between calls.

use std::collections::BTreeMap;

use tracing::{debug, info, info_span, warn};
use zeus_directory::PublicationDirectory;
use zeus_estimate::estimate;
use zeus_match::{find_by_id, find_by_ids, find_matches};
use zeus_model::{PricedPublication, Publication, PublicationId};

use crate::error::QuoteError;
use crate::request::QuoteRequest;

/// Priced publications keyed by id.
pub type Quote = BTreeMap<PublicationId, PricedPublication>;

/// Publications covering the requested postcode, each with its estimated cost.
///
/// Publications that cover the postcode but have no usable price are left
/// out.
pub fn quote_publications(
    directory: &dyn PublicationDirectory,
    request: &QuoteRequest,
) -> Result<Quote, QuoteError> {
    let span = info_span!(
        "quote",
        outcode = request.postcode.outcode(),
        chars = request.chars.get()
    );
    let _guard = span.enter();

    let snapshot = directory.snapshot()?;
    let mut quote = Quote::new();
    for found in find_matches(&snapshot, &request.postcode) {
        let publication = found.publication;
        debug!(
            id = %publication.id,
            matched_on = found.matched_on.as_str(),
            "publication covers postcode"
        );
        match estimate(publication, request.chars) {
            Some(estimated) => {
                quote.insert(
                    publication.id.clone(),
                    PricedPublication::new(publication.clone(), estimated.cost),
                );
            }
            None => warn!(
                id = %publication.id,
                name = %publication.name,
                "publication has no usable price; excluded from quote"
            ),
        }
    }

    info!(priced = quote.len(), "quote complete");
    Ok(quote)
}

/// Publications covering `postcode`, in directory order, without pricing.
pub fn list_publications(
    directory: &dyn PublicationDirectory,
    postcode: &str,
) -> Result<Vec<Publication>, QuoteError> {
    let parts = zeus_postcode::normalize(postcode)?;
    let span = info_span!("list", outcode = parts.outcode());
    let _guard = span.enter();

    let snapshot = directory.snapshot()?;
    let matches: Vec<Publication> = find_matches(&snapshot, &parts)
        .into_iter()
        .map(|found| {
            debug!(
                id = %found.publication.id,
                matched_on = found.matched_on.as_str(),
                "publication covers postcode"
            );
            found.publication.clone()
        })
        .collect();

    info!(matches = matches.len(), "listing complete");
    Ok(matches)
}

/// The publication with id `id`, if any.
pub fn get_publication(
    directory: &dyn PublicationDirectory,
    id: &str,
) -> Result<Option<Publication>, QuoteError> {
    if id.trim().is_empty() {
        return Err(QuoteError::MissingId);
    }
    let snapshot = directory.snapshot()?;
    Ok(find_by_id(&snapshot, id).cloned())
}

/// Publications matching any of `ids`, ignoring case, in directory order.
pub fn get_publications<S: AsRef<str>>(
    directory: &dyn PublicationDirectory,
    ids: &[S],
) -> Result<Vec<Publication>, QuoteError> {
    if ids.iter().all(|id| id.as_ref().trim().is_empty()) {
        return Err(QuoteError::InvalidIds);
    }
    let snapshot = directory.snapshot()?;
    Ok(find_by_ids(&snapshot, ids).into_iter().cloned().collect())
}

/// Every publication in the directory, sorted by name.
pub fn all_publications(
    directory: &dyn PublicationDirectory,
) -> Result<Vec<Publication>, QuoteError> {
    let mut publications = directory.snapshot()?;
    publications.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(publications)
}
