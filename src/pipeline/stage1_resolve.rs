use tracing::warn;

use crate::input::Catalog;
use crate::model::records::DataSourceNode;
use crate::pipeline::PipelineError;

/// Traversal cap; the source data is a forest, so hitting this means a
/// cycle in the parent links.
pub const MAX_ANCESTRY_DEPTH: usize = 64;

/// Resolves the ancestor chain of `target_id`, root first, target last.
///
/// An unknown target is fatal. A `parent_id` that does not resolve to a
/// catalog entry truncates the chain there: the partial chain is still
/// usable, so this degrades softly with a warning.
pub fn resolve_ancestry<'a>(
    catalog: &'a Catalog,
    target_id: &str,
) -> Result<Vec<&'a DataSourceNode>, PipelineError> {
    let mut chain = Vec::new();
    let mut current = catalog
        .source(target_id)
        .ok_or_else(|| PipelineError::UnknownTarget(target_id.to_string()))?;

    loop {
        if chain.len() >= MAX_ANCESTRY_DEPTH {
            return Err(PipelineError::AncestryDepthExceeded {
                target: target_id.to_string(),
                max: MAX_ANCESTRY_DEPTH,
            });
        }
        chain.push(current);

        let Some(parent_id) = current.parent_id.as_deref() else {
            break;
        };
        match catalog.source(parent_id) {
            Some(parent) => current = parent,
            None => {
                warn!(
                    "data source `{}` references unknown parent `{parent_id}`; \
                     continuing with the partial ancestry",
                    current.id
                );
                break;
            }
        }
    }

    chain.reverse();
    Ok(chain)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_resolve.rs"]
mod tests;
