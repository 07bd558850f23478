/// A map from `i64` keys to values of type `V`.
pub trait LongMap<V> {
    /// Insert `value` under `key`, overwriting any previous value. Return the
    /// stored value.
    fn put(&mut self, key: i64, value: V) -> &V;

    /// Get the value of `key`. If the key does not exist, return None.
    fn get(&self, key: i64) -> Option<&V>;

    /// Remove `key`. Return its value, or None if the key does not exist.
    fn remove(&mut self, key: i64) -> Option<V>;

    fn is_empty(&self) -> bool;

    fn contains_key(&self, key: i64) -> bool;

    fn contains_value(&self, value: &V) -> bool;

    /// Snapshot of the keys in insertion order.
    fn keys(&self) -> Vec<i64>;

    /// Snapshot of the values, index-aligned with `keys`.
    fn values(&self) -> Vec<V>;

    fn size(&self) -> usize;

    fn clear(&mut self);
}

mod buckets;

mod ordered;

mod chained;
pub use chained::ChainedLongMap;
