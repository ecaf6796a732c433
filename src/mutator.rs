//! Removing or wrapping collected quotes

use crate::tree::{self, Document, NodeRef, NodeSet};
use crate::types::Mode;
use tracing::debug;

/// Remove or wrap every element of `quoted`, mutating `document` in place
pub fn apply(document: &Document, quoted: &NodeSet, mode: Mode, label: &str) {
    match mode {
        Mode::Remove => {
            for node in quoted {
                node.detach();
            }
            let swept = cleanup(document);
            debug!("Removed {} quote element(s), swept {swept} empty", quoted.len());
        }
        Mode::Wrap => {
            let groups = clusters(quoted);
            debug!(
                "Wrapping {} quote element(s) in {} group(s)",
                quoted.len(),
                groups.len()
            );
            for group in &groups {
                wrap(group, label);
            }
        }
    }
}

/// Delete elements left without text or child elements.
///
/// One sweep in document order: parents are visited before their children,
/// so a parent emptied by this sweep survives it. Returns the number of
/// elements removed.
pub fn cleanup(document: &Document) -> usize {
    let mut removed = 0;
    for node in document.body_elements() {
        if is_empty_element(&node) {
            node.detach();
            removed += 1;
        }
    }
    removed
}

/// Repeat [`cleanup`] until a sweep removes nothing
pub fn cleanup_until_stable(document: &Document) -> usize {
    let mut removed = 0;
    loop {
        match cleanup(document) {
            0 => return removed,
            n => removed += n,
        }
    }
}

fn is_empty_element(node: &NodeRef) -> bool {
    !tree::is_void(node)
        && !tree::has_element_child(node)
        && node.text_contents().trim().is_empty()
}

/// Split `quoted` into runs of consecutive siblings.
///
/// Nodes between two members of a run are members themselves or blank text,
/// so wrapping a run never moves reply content.
fn clusters(quoted: &NodeSet) -> Vec<Vec<NodeRef>> {
    let mut groups: Vec<Vec<NodeRef>> = Vec::new();
    for node in quoted {
        let joins = groups
            .last()
            .and_then(|group| group.last())
            .is_some_and(|previous| continues(previous, node, quoted));
        match groups.last_mut() {
            Some(group) if joins => group.push(node.clone()),
            _ => groups.push(vec![node.clone()]),
        }
    }
    groups
}

fn continues(previous: &NodeRef, node: &NodeRef, quoted: &NodeSet) -> bool {
    for sibling in previous.following_siblings() {
        if tree::same_node(&sibling, node) {
            return true;
        }
        let gap = if sibling.as_element().is_some() {
            !quoted.contains(&sibling)
        } else {
            !sibling.text_contents().trim().is_empty()
        };
        if gap {
            return false;
        }
    }
    false
}

fn wrap(group: &[NodeRef], label: &str) {
    let Some(first) = group.first() else {
        return;
    };
    let container = tree::disclosure(label);
    first.insert_before(container.clone());
    for node in group {
        container.append(node.clone());
    }
}
