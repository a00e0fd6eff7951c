//! Map lookup with an explicit fallback policy.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Return the value stored under `key`, or `default` when the key is absent.
///
/// Used for the two "missing means default" maps in the pipeline:
/// symptom weights (fallback 1.0) and condition priors (fallback 0.01).
pub fn lookup_or<K, Q, V>(map: &HashMap<K, V>, key: &Q, default: V) -> V
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: Copy,
{
    map.get(key).copied().unwrap_or(default)
}
