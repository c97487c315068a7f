use std::collections::HashSet;

use anyhow::{Result, bail};
use log::{debug, info};

use super::{
    keygen::KeyGenerator,
    mapping::{Mapping, MappingEntry},
};

/// Redraws allowed per new entry before giving up on a crowded key space.
pub const MAX_KEY_ATTEMPTS: usize = 1000;

/// Result of reconciling a mapping against the strings found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub mapping: Mapping,
    /// New entries, in the order they were appended.
    pub added: Vec<MappingEntry>,
    /// Dropped entries, in their previous order.
    pub removed: Vec<MappingEntry>,
    unchanged: bool,
}

impl Reconciliation {
    /// True when the new mapping equals the previous one, entry for entry.
    pub fn is_unchanged(&self) -> bool {
        self.unchanged
    }
}

/// Build the updated mapping for `strings`.
///
/// Entries whose string is still used keep their key and relative order.
/// Entries whose string is gone are dropped. Every occurrence in `strings`
/// of a string the previous mapping did not hold is appended under a fresh
/// key, so a new string used twice gets two entries.
///
/// Fails when no free key turns up within [`MAX_KEY_ATTEMPTS`] draws.
pub fn reconcile<G>(
    previous: &Mapping,
    strings: &[String],
    keys: &mut G,
) -> Result<Reconciliation>
where
    G: KeyGenerator + ?Sized,
{
    let used: HashSet<&str> = strings.iter().map(String::as_str).collect();

    let mut mapping = Mapping::new();
    let mut removed = Vec::new();
    for entry in previous {
        if used.contains(entry.value.as_str()) {
            mapping.insert(entry.key.as_str(), entry.value.as_str());
        } else {
            info!("removing unused string: \"{}\"", entry.value);
            removed.push(entry.clone());
        }
    }

    let old_values: HashSet<&str> = previous.values().collect();
    let mut added = Vec::new();
    for value in strings.iter().filter(|s| !old_values.contains(s.as_str())) {
        info!("adding new string: \"{}\"", value);
        let key = fresh_key(keys, &mapping)?;
        mapping.insert(key.as_str(), value.as_str());
        added.push(MappingEntry::new(key, value.as_str()));
    }

    let unchanged = mapping == *previous;

    Ok(Reconciliation {
        mapping,
        added,
        removed,
        unchanged,
    })
}

/// Draw keys until one is not already taken in `mapping`.
fn fresh_key<G>(keys: &mut G, mapping: &Mapping) -> Result<String>
where
    G: KeyGenerator + ?Sized,
{
    for _ in 0..MAX_KEY_ATTEMPTS {
        let key = keys.generate();
        if !mapping.contains_key(&key) {
            return Ok(key);
        }
        debug!("generated key {} is already taken, drawing another", key);
    }
    bail!(
        "no free key after {} attempts ({} keys in use), increase 'keyLength'",
        MAX_KEY_ATTEMPTS,
        mapping.len()
    )
}
