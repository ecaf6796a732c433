//! Quote collection: runs the handler registry over a document

use crate::error::UnquoteError;
use crate::handlers::Handler;
use crate::patterns;
use crate::tree::{Document, NodeRef, NodeSet};
use crate::types::UnquoteOptions;
use tracing::{debug, trace, warn};

/// Collect the elements to act on, in document order
#[must_use]
pub fn collect(document: &Document, handlers: &[Handler], options: &UnquoteOptions) -> NodeSet {
    let mut candidates = NodeSet::new();

    for handler in handlers {
        match run_handler(document, handler) {
            Ok(found) => {
                trace!("Handler {} matched {} element(s)", handler.name, found.len());
                for node in found {
                    candidates.insert(node);
                }
            }
            Err(e) => warn!("Skipping handler: {e}"),
        }
    }

    let total = candidates.len();

    if options.ignore_first_forward {
        candidates.retain(|node| !patterns::is_forward(&node.text_contents()));
    }

    let depths: Vec<usize> = candidates
        .iter()
        .map(|node| candidates.ancestors_within(node))
        .collect();
    let mut depths = depths.into_iter();
    candidates.retain(|_| depths.next().is_some_and(|depth| options.depth.allows(depth)));
    candidates.sort_in_document_order(document);

    debug!(
        "Collected {} quote element(s) from {} candidate(s), depth {}",
        candidates.len(),
        total,
        options.depth
    );

    candidates
}

fn run_handler(document: &Document, handler: &Handler) -> crate::Result<Vec<NodeRef>> {
    let matched = document.select(&handler.selector).ok_or_else(|| {
        UnquoteError::InvalidSelector {
            handler: handler.name.to_string(),
            selector: handler.selector.to_string(),
        }
    })?;

    Ok(matched.iter().flat_map(|node| handler.resolve(node)).collect())
}
