//! Id lookups over a directory snapshot.

use zeus_model::Publication;

/// The publication with exactly this id.
pub fn find_by_id<'a>(publications: &'a [Publication], id: &str) -> Option<&'a Publication> {
    let id = id.trim();
    publications
        .iter()
        .find(|publication| publication.id.as_str() == id)
}

/// Publications whose id equals any of `ids`, ignoring case.
///
/// Results keep directory order; repeated ids do not repeat publications.
pub fn find_by_ids<'a, S: AsRef<str>>(
    publications: &'a [Publication],
    ids: &[S],
) -> Vec<&'a Publication> {
    publications
        .iter()
        .filter(|publication| ids.iter().any(|id| publication.id.eq_ignore_case(id.as_ref())))
        .collect()
}
