use crate::hash::bucket_index;
use std::mem;

struct Node<V> {
    key: i64,
    value: V,
    next: Option<usize>,
}

enum Slot<V> {
    Occupied(Node<V>),
    Vacant,
}

pub(crate) enum Upsert<V> {
    /// A new node was linked at this arena index.
    Inserted(usize),
    /// The node at this arena index already held the key; carries its old value.
    Replaced(usize, V),
}

/// Fixed-size bucket heads over an arena of chain nodes.
///
/// Heads and links are arena indices. Released slots go on `vacant` and are
/// handed out again before the arena grows.
pub(crate) struct BucketTable<V> {
    heads: Box<[Option<usize>]>,
    slots: Vec<Slot<V>>,
    vacant: Vec<usize>,
}

impl<V> BucketTable<V> {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            heads: vec![None; bucket_count].into_boxed_slice(),
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        let mut cursor = self.heads[self.bucket(key)];
        while let Some(index) = cursor {
            let node = self.node(index);
            if node.key == key {
                return Some(&node.value);
            }
            cursor = node.next;
        }
        None
    }

    pub fn value(&self, index: usize) -> &V {
        &self.node(index).value
    }

    /// Overwrites the value of `key` in place, or links a new node at the
    /// tail of its chain.
    pub fn upsert(&mut self, key: i64, value: V) -> Upsert<V> {
        let bucket = self.bucket(key);
        let mut cursor = self.heads[bucket];
        let mut tail = None;
        while let Some(index) = cursor {
            let node = self.node_mut(index);
            if node.key == key {
                return Upsert::Replaced(index, mem::replace(&mut node.value, value));
            }
            tail = Some(index);
            cursor = node.next;
        }

        let index = self.allocate(Node {
            key,
            value,
            next: None,
        });
        match tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.heads[bucket] = Some(index),
        }
        Upsert::Inserted(index)
    }

    pub fn remove(&mut self, key: i64) -> Option<V> {
        let bucket = self.bucket(key);
        let mut previous = None;
        let mut cursor = self.heads[bucket];
        while let Some(index) = cursor {
            let node = self.node(index);
            if node.key == key {
                let next = node.next;
                match previous {
                    Some(previous) => self.node_mut(previous).next = next,
                    None => self.heads[bucket] = next,
                }
                return Some(self.release(index).value);
            }
            previous = Some(index);
            cursor = node.next;
        }
        None
    }

    /// Empties every chain. The arena keeps its allocation.
    pub fn clear(&mut self) {
        self.heads.iter_mut().for_each(|head| *head = None);
        self.slots.clear();
        self.vacant.clear();
    }

    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut cursor = self.heads[bucket];
        while let Some(index) = cursor {
            len += 1;
            cursor = self.node(index).next;
        }
        len
    }

    pub fn longest_chain(&self) -> usize {
        (0..self.bucket_count())
            .map(|bucket| self.chain_len(bucket))
            .max()
            .unwrap_or(0)
    }

    fn bucket(&self, key: i64) -> usize {
        bucket_index(key, self.heads.len())
    }

    fn node(&self, index: usize) -> &Node<V> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("chain links to vacant slot {}", index),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<V> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("chain links to vacant slot {}", index),
        }
    }

    fn allocate(&mut self, node: Node<V>) -> usize {
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node<V> {
        match mem::replace(&mut self.slots[index], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.vacant.push(index);
                node
            }
            Slot::Vacant => unreachable!("slot {} released twice", index),
        }
    }
}
