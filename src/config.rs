use crate::error::LongMapError;
use std::fmt;
use std::str::FromStr;

/// Fewest buckets a map is built with.
pub const MIN_CAPACITY: usize = 16;
/// Most buckets a map is built with.
pub const MAX_CAPACITY: usize = 1000;
/// Initial capacity of the ordered key/value sequences.
pub const INITIAL_ENTRIES: usize = 100;
/// Largest initial capacity allocated up front for the ordered sequences.
pub const MAX_INITIAL_ENTRIES: usize = 1 << 16;

/// How the ordered value sequence follows an overwrite of an existing key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Replace the value stored at the key's own position.
    #[default]
    ByKey,
    /// Replace every value equal to the key's previous value, whichever key
    /// it belongs to. Other keys keep their value in the bucket chains, so
    /// `get` and `values` can disagree afterwards.
    ByValue,
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByKey => write!(f, "by-key"),
            Self::ByValue => write!(f, "by-value"),
        }
    }
}

impl FromStr for UpdatePolicy {
    type Err = LongMapError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "by-key" => Ok(Self::ByKey),
            "by-value" => Ok(Self::ByValue),
            val => Err(LongMapError::UnknownPolicy(val.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Requested bucket count, clamped into `[MIN_CAPACITY, MAX_CAPACITY]`.
    pub capacity: usize,
    /// Initial capacity of the ordered sequences, clamped to
    /// `MAX_INITIAL_ENTRIES`.
    pub initial_entries: usize,
    pub update_policy: UpdatePolicy,
}

impl Config {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Number of buckets actually allocated for this configuration.
    pub fn bucket_count(&self) -> usize {
        self.capacity.clamp(MIN_CAPACITY, MAX_CAPACITY)
    }

    /// Initial capacity actually allocated for the ordered sequences.
    pub fn ordered_capacity(&self) -> usize {
        self.initial_entries.min(MAX_INITIAL_ENTRIES)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            initial_entries: INITIAL_ENTRIES,
            update_policy: UpdatePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(Config::with_capacity(0).bucket_count(), MIN_CAPACITY);
        assert_eq!(Config::with_capacity(15).bucket_count(), MIN_CAPACITY);
        assert_eq!(Config::with_capacity(64).bucket_count(), 64);
        assert_eq!(Config::with_capacity(1000).bucket_count(), MAX_CAPACITY);
        assert_eq!(Config::with_capacity(usize::MAX).bucket_count(), MAX_CAPACITY);
    }

    #[test]
    fn initial_entries_are_clamped() {
        let config = |initial_entries| Config {
            initial_entries,
            ..Config::default()
        };
        assert_eq!(config(0).ordered_capacity(), 0);
        assert_eq!(config(INITIAL_ENTRIES).ordered_capacity(), INITIAL_ENTRIES);
        assert_eq!(config(usize::MAX).ordered_capacity(), MAX_INITIAL_ENTRIES);
    }

    #[test]
    fn policy_round_trips_through_its_name() {
        for policy in [UpdatePolicy::ByKey, UpdatePolicy::ByValue] {
            assert_eq!(policy.to_string().parse::<UpdatePolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = "by-index".parse::<UpdatePolicy>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized update policy: by-index");
    }
}
