//! Path traversal over the document tree.
//!
//! These are the primitives the [`Document`](super::Document) API is built
//! on: pure walks over the root mapping and the nested values below it, with
//! no defaults and no sentinel values. Absence is `None`; a declared null is
//! `Some(&Value::Null)`.
//!
//! Traversal rules, shared by every walk:
//! - mappings descend by key
//! - lists descend by index, where the segment must be plain decimal digits
//!   with no sign and no leading zeros and must be in range
//! - anything else is not navigable

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::{Document, Path, Value};

/// Parses a segment as a list index.
///
/// Accepts decimal digits only: no sign, no leading zeros (`"0"` itself is
/// fine), and the parsed index must be strictly less than `len`.
pub(crate) fn list_index(segment: &str, len: usize) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = segment.parse().ok()?;
    (index < len).then_some(index)
}

/// Walks `path` through the root mapping and returns the value it lands on.
pub(crate) fn resolve<'a>(root: &'a IndexMap<String, Value>, path: &Path) -> Option<&'a Value> {
    let mut components = path.components();
    let first = components.next()?;
    let mut current = root.get(first)?;
    for segment in components {
        current = match current {
            Value::Doc(doc) => doc.as_map().get(segment)?,
            Value::List(items) => items.get(list_index(segment, items.len())?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable variant of [`resolve`]. Never inserts.
pub(crate) fn resolve_mut<'a>(
    root: &'a mut IndexMap<String, Value>,
    path: &Path,
) -> Option<&'a mut Value> {
    let mut components = path.components();
    let first = components.next()?;
    let mut current = root.get_mut(first)?;
    for segment in components {
        current = match current {
            Value::Doc(doc) => doc.as_map_mut().get_mut(segment)?,
            Value::List(items) => {
                let index = list_index(segment, items.len())?;
                items.get_mut(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Writes `value` at `path`, creating empty mappings for missing or
/// non-navigable intermediate segments.
///
/// Lists are descended in place when the segment is a valid in-range index
/// and replaced with a fresh mapping otherwise. With `overwrite` set to
/// false, the final assignment is skipped when the slot already holds a
/// non-null value.
pub(crate) fn assign(
    root: &mut IndexMap<String, Value>,
    path: &Path,
    value: Value,
    overwrite: bool,
) {
    let (front, leaf) = match path.split_leaf() {
        (None, leaf) => {
            assign_entry(root, leaf, value, overwrite);
            return;
        }
        (Some(front), leaf) => (front, leaf),
    };

    let mut components = front.components();
    let first = match components.next() {
        Some(first) => first,
        None => return,
    };
    let mut current = root.entry(first.to_string()).or_insert(Value::Null);
    for segment in components {
        current = advance(current, segment);
    }
    assign_slot(current, leaf, value, overwrite);
}

/// One intermediate step of a write walk: coerce `current` into a container
/// that can hold `segment`, then descend into that slot.
fn advance<'a>(current: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match current {
        Value::List(items) => list_index(segment, items.len()),
        _ => None,
    };
    if let Some(index) = index {
        match current {
            Value::List(items) => return &mut items[index],
            _ => unreachable!(),
        }
    }
    if !matches!(current, Value::Doc(_)) {
        *current = Value::Doc(Document::new());
    }
    match current {
        Value::Doc(doc) => doc
            .as_map_mut()
            .entry(segment.to_string())
            .or_insert(Value::Null),
        _ => unreachable!(),
    }
}

/// Final step of a write walk: same coercion as [`advance`], but assigns into
/// the slot instead of descending.
fn assign_slot(current: &mut Value, segment: &str, value: Value, overwrite: bool) {
    if let Value::List(items) = current {
        if let Some(index) = list_index(segment, items.len()) {
            if overwrite || items[index].is_null() {
                items[index] = value;
            }
            return;
        }
    }
    if !matches!(current, Value::Doc(_)) {
        *current = Value::Doc(Document::new());
    }
    match current {
        Value::Doc(doc) => assign_entry(doc.as_map_mut(), segment, value, overwrite),
        _ => unreachable!(),
    }
}

fn assign_entry(map: &mut IndexMap<String, Value>, key: &str, value: Value, overwrite: bool) {
    match map.entry(key.to_string()) {
        Entry::Occupied(mut entry) => {
            if overwrite || entry.get().is_null() {
                entry.insert(value);
            }
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
    }
}

/// Removes and returns the value at `path`.
///
/// Single-segment paths delete directly from the root mapping. Nested paths
/// walk the non-final segments with stay-on-miss semantics: a segment that
/// does not resolve leaves the cursor where it is instead of aborting, and
/// the final segment is removed from whatever container the walk ended on.
/// Walking onto a scalar ends the operation with nothing removed.
pub(crate) fn prune(root: &mut IndexMap<String, Value>, path: &Path) -> Option<Value> {
    let (front, leaf) = match path.split_leaf() {
        (None, leaf) => return root.shift_remove(leaf),
        (Some(front), leaf) => (front, leaf),
    };

    enum Spot<'a> {
        Root(&'a mut IndexMap<String, Value>),
        Node(&'a mut Value),
    }

    let mut spot = Spot::Root(root);
    for segment in front.components() {
        // Decide first: descending moves the borrow out of `spot`.
        let can_descend = match &spot {
            Spot::Root(map) => map.contains_key(segment),
            Spot::Node(value) => match &**value {
                Value::Doc(doc) => doc.as_map().contains_key(segment),
                Value::List(items) => list_index(segment, items.len()).is_some(),
                _ => return None,
            },
        };
        if !can_descend {
            continue;
        }
        spot = match spot {
            Spot::Root(map) => match map.get_mut(segment) {
                Some(child) => Spot::Node(child),
                None => unreachable!(),
            },
            Spot::Node(value) => match value {
                Value::Doc(doc) => match doc.as_map_mut().get_mut(segment) {
                    Some(child) => Spot::Node(child),
                    None => unreachable!(),
                },
                Value::List(items) => {
                    let index = match list_index(segment, items.len()) {
                        Some(index) => index,
                        None => unreachable!(),
                    };
                    Spot::Node(&mut items[index])
                }
                _ => unreachable!(),
            },
        };
    }

    match spot {
        Spot::Root(map) => map.shift_remove(leaf),
        Spot::Node(value) => match value {
            Value::Doc(doc) => doc.as_map_mut().shift_remove(leaf),
            Value::List(items) => {
                let index = list_index(leaf, items.len())?;
                Some(items.remove(index))
            }
            _ => None,
        },
    }
}
