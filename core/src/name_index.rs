use crate::graph::VertexId;

/// Default bucket count. Sized well above the default vertex bound so
/// chains stay short; chains absorb any overflow, so this never grows.
pub const DEFAULT_BUCKETS: usize = 512;

#[derive(Debug, Clone)]
struct Entry {
    hash: u32,
    key: String,
    id: VertexId,
}

/// Hash index binding each vertex name to the slot id it was created under.
///
/// Collisions are resolved by chaining: each bucket holds a vector of
/// entries scanned linearly, with new keys appended at the tail. The bucket
/// array is fixed at construction and entries are never removed.
///
/// Binding is first-wins: once a name is bound, later [`set`](Self::set)
/// calls for the same name are no-ops, whatever id they carry. This is what
/// keeps the index agreeing with the graph's insertion-order ids.
#[derive(Debug, Clone)]
pub struct NameIndex {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// An index with a custom bucket count (at least one bucket).
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: vec![Vec::new(); buckets],
            len: 0,
        }
    }

    /// Looks up the id bound to an exactly-equal name.
    pub fn get(&self, name: &str) -> Option<VertexId> {
        let hash = bkdr_hash(name);
        let bucket = &self.buckets[hash as usize % self.buckets.len()];
        bucket
            .iter()
            .find(|e| e.hash == hash && e.key == name)
            .map(|e| e.id)
    }

    /// Binds `name` to `id`, returning the id the name resolves to.
    ///
    /// If the name is already bound, the existing binding is kept and its
    /// id returned; the call is a no-op even when `id` differs.
    pub fn set(&mut self, name: &str, id: VertexId) -> VertexId {
        let hash = bkdr_hash(name);
        let slot = hash as usize % self.buckets.len();
        let bucket = &mut self.buckets[slot];
        if let Some(existing) = bucket.iter().find(|e| e.hash == hash && e.key == name) {
            return existing.id;
        }
        bucket.push(Entry {
            hash,
            key: name.to_string(),
            id,
        });
        self.len += 1;
        id
    }

    /// Number of distinct names bound.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for NameIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// BKDR multiplicative rolling hash, masked to 31 bits.
fn bkdr_hash(s: &str) -> u32 {
    let seed: u32 = 131;
    let mut hash: u32 = 0;
    for b in s.bytes() {
        hash = hash.wrapping_mul(seed).wrapping_add(u32::from(b));
    }
    hash & 0x7FFF_FFFF
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn get_returns_bound_id() {
        let mut index = NameIndex::new();
        assert_eq!(index.get("alpha"), None);
        assert_eq!(index.set("alpha", 0), 0);
        assert_eq!(index.set("beta", 1), 1);
        assert_eq!(index.get("alpha"), Some(0));
        assert_eq!(index.get("beta"), Some(1));
        assert_eq!(index.get("gamma"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn rebinding_is_a_noop() {
        let mut index = NameIndex::new();
        index.set("alpha", 3);
        // Same name, conflicting id: the first bind wins.
        assert_eq!(index.set("alpha", 9), 3);
        assert_eq!(index.get("alpha"), Some(3));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn single_bucket_forces_chaining() {
        let mut index = NameIndex::with_buckets(1);
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            index.set(name, i);
        }
        assert_eq!(index.len(), 5);
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            assert_eq!(index.get(name), Some(i));
        }
        assert_eq!(index.get("f"), None);
    }

    #[test]
    fn equal_strings_hash_equal() {
        assert_eq!(bkdr_hash("vertex"), bkdr_hash("vertex"));
        assert_ne!(bkdr_hash("vertex"), bkdr_hash("vertey"));
        // 31-bit mask
        assert_eq!(bkdr_hash("") >> 31, 0);
        assert_eq!(bkdr_hash("a"), 97);
    }

    proptest! {
        #[test]
        fn first_bind_wins_under_any_sequence(
            names in prop::collection::vec("[a-z]{1,8}", 1..64),
        ) {
            let mut index = NameIndex::with_buckets(8);
            let mut reference: HashMap<String, usize> = HashMap::new();
            for (i, name) in names.iter().enumerate() {
                let expected = *reference.entry(name.clone()).or_insert(i);
                prop_assert_eq!(index.set(name, i), expected);
            }
            prop_assert_eq!(index.len(), reference.len());
            for (name, id) in &reference {
                prop_assert_eq!(index.get(name), Some(*id));
            }
        }
    }
}
