// crates/country-picker-core/src/pipeline.rs

//! The search / preferred / selected ordering pipeline.
//!
//! [`compute`] is a pure function of its inputs so hosts can re-run it
//! eagerly on every input change; identical inputs always produce
//! identical output.

use crate::model::ResolvedCountry;
use crate::text::fold_key;

/// Caller-supplied replacement for the built-in stages.
///
/// When present its output is the pipeline's output, unconditionally:
/// search, preferred pinning and selected pinning are *not* re-applied
/// on top of it. A panicking filter propagates to the caller; that is a
/// caller extension point failing, not an internal fault.
pub type CustomFilter = dyn Fn(&[ResolvedCountry], &str) -> Vec<ResolvedCountry>;

/// Compute the final ordered list shown to the user.
///
/// Stage order (each stage consumes the previous stage's output):
/// 1. custom filter, if any — replaces everything below;
/// 2. search: trimmed non-empty `query` keeps records whose folded
///    display name, folded English name, lowercased code or raw calling
///    code contains the folded query;
/// 3. preferred pinning — only when the query is empty, so search
///    results are never reshuffled by preference; preferred entries are
///    ordered by their position in `preferred`, the rest keep their
///    incoming order;
/// 4. selected pinning — always last, so a standing selection is
///    visible at the top even mid-search. If the selection did not
///    survive the earlier stages, no pinning occurs.
pub fn compute(
    directory: &[ResolvedCountry],
    query: &str,
    selected: Option<&ResolvedCountry>,
    preferred: &[String],
    custom_filter: Option<&CustomFilter>,
) -> Vec<ResolvedCountry> {
    if let Some(filter) = custom_filter {
        return filter(directory, query);
    }

    let trimmed = query.trim();
    let mut list: Vec<ResolvedCountry> = if trimmed.is_empty() {
        directory.to_vec()
    } else {
        let q = fold_key(trimmed);
        directory
            .iter()
            .filter(|c| matches_query(c, &q))
            .cloned()
            .collect()
    };

    if trimmed.is_empty() && !preferred.is_empty() {
        list = pin_preferred(list, preferred);
    }

    if let Some(sel) = selected {
        if let Some(pos) = list
            .iter()
            .position(|c| c.code().eq_ignore_ascii_case(sel.code()))
        {
            let head = list.remove(pos);
            list.insert(0, head);
        }
    }

    list
}

/// Substring match against the folded display name, the folded English
/// fallback name, the lowercased ISO2 code, and the raw calling code.
fn matches_query(country: &ResolvedCountry, folded_query: &str) -> bool {
    fold_key(&country.display_name).contains(folded_query)
        || fold_key(country.english_name()).contains(folded_query)
        || country.code().to_lowercase().contains(folded_query)
        || country.calling_code().contains(folded_query)
}

/// Partition into preferred/rest and order the preferred partition by
/// its position in the caller's list. Ties are impossible since codes
/// are unique within a directory.
fn pin_preferred(list: Vec<ResolvedCountry>, preferred: &[String]) -> Vec<ResolvedCountry> {
    let rank = |code: &str| {
        preferred
            .iter()
            .position(|p| p.trim().eq_ignore_ascii_case(code))
    };

    let mut pinned: Vec<(usize, ResolvedCountry)> = Vec::new();
    let mut rest: Vec<ResolvedCountry> = Vec::new();
    for country in list {
        match rank(country.code()) {
            Some(index) => pinned.push((index, country)),
            None => rest.push(country),
        }
    }
    pinned.sort_by_key(|(index, _)| *index);

    pinned
        .into_iter()
        .map(|(_, country)| country)
        .chain(rest)
        .collect()
}
