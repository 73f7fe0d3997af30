//! Matching postcodes against a directory snapshot.

use zeus_model::Publication;
use zeus_postcode::PostcodeParts;

use crate::circulation::{CirculationTokens, MatchedOn};

/// A publication whose circulation covers the query postcode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirculationMatch<'a> {
    pub publication: &'a Publication,
    pub matched_on: MatchedOn,
}

/// Which part of `parts` the publication's circulation covers, if any.
pub fn matched_on(publication: &Publication, parts: &PostcodeParts) -> Option<MatchedOn> {
    CirculationTokens::parse(&publication.circulation).covers(parts)
}

/// Publications covering `parts`, with what each one matched on.
///
/// Directory order is kept and each publication appears at most once, however
/// many of its tokens match.
pub fn find_matches<'a>(
    publications: &'a [Publication],
    parts: &PostcodeParts,
) -> Vec<CirculationMatch<'a>> {
    publications
        .iter()
        .filter_map(|publication| {
            matched_on(publication, parts).map(|matched_on| CirculationMatch {
                publication,
                matched_on,
            })
        })
        .collect()
}

/// Publications covering `parts`, in directory order.
///
/// An empty directory or a postcode outside every circulation gives an empty
/// result.
pub fn match_publications<'a>(
    publications: &'a [Publication],
    parts: &PostcodeParts,
) -> Vec<&'a Publication> {
    find_matches(publications, parts)
        .into_iter()
        .map(|found| found.publication)
        .collect()
}
