/// Index-aligned key and value sequences holding the live entries in
/// insertion order.
pub(crate) struct OrderedEntries<V> {
    keys: Vec<i64>,
    values: Vec<V>,
}

impl<V> OrderedEntries<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    /// Appends an entry, growing both sequences by half their length when
    /// full. Returns whether they grew.
    pub fn push(&mut self, key: i64, value: V) -> bool {
        let grew = self.keys.len() == self.keys.capacity();
        if grew {
            let additional = (self.keys.len() >> 1).max(1);
            self.keys.reserve_exact(additional);
            self.values.reserve_exact(additional);
        }
        self.keys.push(key);
        self.values.push(value);
        grew
    }

    /// Removes `key`, shifting every later entry one position left.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let position = self.position(key)?;
        self.keys.remove(position);
        Some(self.values.remove(position))
    }

    pub fn replace(&mut self, key: i64, value: V) {
        if let Some(position) = self.position(key) {
            self.values[position] = value;
        }
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.keys.contains(&key)
    }

    pub fn keys(&self) -> Vec<i64> {
        self.keys.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> {
        self.keys.iter().copied().zip(self.values.iter())
    }

    /// Drops every entry but keeps both allocations.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn position(&self, key: i64) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }
}

impl<V: Clone + PartialEq> OrderedEntries<V> {
    /// Overwrites every value equal to `previous` with `value`.
    pub fn replace_matching(&mut self, previous: &V, value: &V) {
        for slot in self.values.iter_mut().filter(|slot| **slot == *previous) {
            *slot = value.clone();
        }
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.values.contains(value)
    }

    pub fn values(&self) -> Vec<V> {
        self.values.clone()
    }
}
