//! Shared tag-merge step for index-targeted tag commands.

use crate::command::TagCommandError;
use crate::display::DisplayIndex;
use crate::model::person::ContactRecord;
use crate::model::tag::TagSet;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;
use log::{debug, warn};

/// Validates raw tag arguments for an index-targeted tag command.
///
/// # Errors
/// - `ValidationError::EmptyTagSet` when no names are given.
/// - Any tag or duplicate-tag error from `TagSet::from_names`.
pub(crate) fn tag_set_from_args<I, S>(tag_names: I) -> Result<TagSet, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags = TagSet::from_names(tag_names)?;
    if tags.is_empty() {
        return Err(ValidationError::EmptyTagSet);
    }
    Ok(tags)
}

/// Merges `tags` into the record shown at `visible_index` and replaces it.
///
/// The target's tag set is cloned before merging, so the original record
/// and any other holder of it are never affected.
pub(crate) fn merge_tags_at(
    word: &'static str,
    store: &mut RecordStore,
    shown: &DisplayIndex,
    visible_index: i64,
    tags: &TagSet,
) -> Result<ContactRecord, TagCommandError> {
    let outcome = resolve_and_replace(store, shown, visible_index, tags);
    match &outcome {
        Ok(updated) => debug!(
            "event=tag_merge module=command status=ok command={} tag_count={}",
            word,
            updated.tags().len()
        ),
        Err(err) => warn!(
            "event=tag_merge module=command status=error command={} error_code={}",
            word,
            err.code()
        ),
    }
    outcome
}

fn resolve_and_replace(
    store: &mut RecordStore,
    shown: &DisplayIndex,
    visible_index: i64,
    tags: &TagSet,
) -> Result<ContactRecord, TagCommandError> {
    let target = shown.resolve(visible_index)?;
    let mut merged = target.tags().clone();
    merged.merge_from(tags);
    let updated = target.with_tags(merged);
    store.replace(target, updated.clone())?;
    Ok(updated)
}
