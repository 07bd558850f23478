use super::buckets::BucketTable;
use super::buckets::Upsert;
use super::ordered::OrderedEntries;
use super::LongMap;
use crate::config::Config;
use crate::config::UpdatePolicy;
use slog::debug;
use slog::o;
use slog::Discard;
use slog::Logger;
use std::fmt;

/// A `LongMap` backed by a fixed number of separately chained buckets.
///
/// Every live entry is also mirrored, in insertion order, by a pair of
/// index-aligned key and value sequences. Enumeration and the `contains_*`
/// checks scan that mirror, so they cost O(size).
///
/// The bucket count is chosen once, clamped into
/// `[MIN_CAPACITY, MAX_CAPACITY]`, and never changes: chains get longer as
/// the map fills up.
pub struct ChainedLongMap<V> {
    buckets: BucketTable<V>,
    ordered: OrderedEntries<V>,
    update_policy: UpdatePolicy,
    log: Logger,
}

impl<V> ChainedLongMap<V> {
    pub fn new() -> Self {
        Self::from_config(&Config::default(), Logger::root(Discard, o!()))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&Config::with_capacity(capacity), Logger::root(Discard, o!()))
    }

    pub fn from_config(config: &Config, log: Logger) -> Self {
        let bucket_count = config.bucket_count();
        if bucket_count != config.capacity {
            debug!(log, "clamped bucket count"; "requested" => config.capacity, "buckets" => bucket_count);
        }
        let ordered_capacity = config.ordered_capacity();
        if ordered_capacity != config.initial_entries {
            debug!(log, "clamped initial entries"; "requested" => config.initial_entries, "entries" => ordered_capacity);
        }
        Self {
            buckets: BucketTable::new(bucket_count),
            ordered: OrderedEntries::with_capacity(ordered_capacity),
            update_policy: config.update_policy,
            log,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.bucket_count()
    }

    /// Allocated capacity of the ordered key/value sequences.
    pub fn ordered_capacity(&self) -> usize {
        self.ordered.capacity()
    }

    /// Length of the longest bucket chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.longest_chain()
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> {
        self.ordered.iter()
    }
}

impl<V: Clone + PartialEq> LongMap<V> for ChainedLongMap<V> {
    fn put(&mut self, key: i64, value: V) -> &V {
        let index = match self.buckets.upsert(key, value.clone()) {
            Upsert::Inserted(index) => {
                if self.ordered.push(key, value) {
                    debug!(self.log, "grew ordered entries";
                        "size" => self.ordered.len(), "capacity" => self.ordered.capacity());
                }
                index
            }
            Upsert::Replaced(index, previous) => {
                match self.update_policy {
                    UpdatePolicy::ByKey => self.ordered.replace(key, value),
                    UpdatePolicy::ByValue => self.ordered.replace_matching(&previous, &value),
                }
                index
            }
        };
        self.buckets.value(index)
    }

    fn get(&self, key: i64) -> Option<&V> {
        self.buckets.get(key)
    }

    fn remove(&mut self, key: i64) -> Option<V> {
        let value = self.buckets.remove(key)?;
        self.ordered.remove(key);
        Some(value)
    }

    fn is_empty(&self) -> bool {
        self.ordered.len() == 0
    }

    fn contains_key(&self, key: i64) -> bool {
        self.ordered.contains_key(key)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.ordered.contains_value(value)
    }

    fn keys(&self) -> Vec<i64> {
        self.ordered.keys()
    }

    fn values(&self) -> Vec<V> {
        self.ordered.values()
    }

    fn size(&self) -> usize {
        self.ordered.len()
    }

    fn clear(&mut self) {
        self.buckets.clear();
        self.ordered.clear();
    }
}

impl<V> Default for ChainedLongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedLongMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Clone + PartialEq> Extend<(i64, V)> for ChainedLongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V: Clone + PartialEq> FromIterator<(i64, V)> for ChainedLongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
