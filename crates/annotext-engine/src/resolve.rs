use crate::scan::Candidate;

/// Merges link and mention candidates into a sorted, non-overlapping list.
///
/// Candidates are ordered by start offset; a candidate that starts before the
/// end of the last kept one is dropped. Position decides, not length or kind.
/// The sort is stable and links come first, so links win ties.
pub fn resolve(links: Vec<Candidate>, mentions: Vec<Candidate>) -> Vec<Candidate> {
    let mut all: Vec<Candidate> = links.into_iter().chain(mentions).collect();
    all.sort_by_key(|c| c.span.start);

    let mut kept: Vec<Candidate> = Vec::with_capacity(all.len());
    for candidate in all {
        if let Some(prev) = kept.last()
            && candidate.span.start < prev.span.end
        {
            log::trace!(
                "dropping {:?} overlapping kept candidate at {:?}",
                candidate.span,
                prev.span
            );
            continue;
        }
        kept.push(candidate);
    }
    kept
}
