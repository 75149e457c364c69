//! Identifier generation for component and page nodes
//!
//! Every node created during a generation pass gets its id from an
//! [`IdGenerator`]. The generator is an explicit value that callers inject,
//! so independent passes (or tests) can each own one. There is no global
//! instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "node";

/// Length of the random suffix on timestamped ids
const SUFFIX_LEN: usize = 5;

/// Opaque identifier of a component or page node
///
/// New ids can only be minted by an [`IdGenerator`]. Deserialization is
/// allowed so that previously generated trees can be read back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub(crate) fn new(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How an id is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `prefix-<unix millis>-<counter>-<random>`, safe to persist across restarts
    #[default]
    Timestamped,
    /// `prefix-<counter>`, reproducible output for tests and snapshots
    Sequential,
}

/// Mints unique node identifiers
///
/// Uniqueness within one generator comes from the atomic counter alone;
/// the timestamp and random suffix keep ids from different processes apart.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    strategy: IdStrategy,
    counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Create a timestamped generator with the default prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a timestamped generator with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            strategy: IdStrategy::Timestamped,
            counter: AtomicU64::new(0),
        }
    }

    /// Create a generator producing `prefix-0`, `prefix-1`, ...
    pub fn sequential(prefix: impl Into<String>) -> Self {
        Self::with_prefix(prefix).with_strategy(IdStrategy::Sequential)
    }

    /// Set the id strategy
    pub fn with_strategy(mut self, strategy: IdStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Mint a new identifier. Never returns the same value twice.
    pub fn next_id(&self) -> NodeId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let id = match self.strategy {
            IdStrategy::Sequential => format!("{}-{}", self.prefix, n),
            IdStrategy::Timestamped => format!(
                "{}-{}-{}-{}",
                self.prefix,
                chrono::Utc::now().timestamp_millis(),
                n,
                random_suffix()
            ),
        };
        NodeId::new(id)
    }
}

fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = IdGenerator::sequential("c");
        assert_eq!(ids.next_id().as_str(), "c-0");
        assert_eq!(ids.next_id().as_str(), "c-1");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_timestamped_id_shape() {
        let ids = IdGenerator::with_prefix("comp");
        let id = ids.next_id();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "comp");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2], "0");
        assert_eq!(parts[3].len(), SUFFIX_LEN);
    }

    #[test]
    fn test_ids_unique_in_tight_loop() {
        let ids = IdGenerator::new();
        let seen: HashSet<NodeId> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn test_generators_count_independently() {
        let a = IdGenerator::sequential("a");
        let b = IdGenerator::sequential("b");
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id().as_str(), "b-0");
        assert_eq!(a.issued(), 2);
        assert_eq!(b.issued(), 1);
    }

    #[test]
    fn test_node_id_serializes_as_plain_string() {
        let ids = IdGenerator::sequential("p");
        let json = serde_json::to_string(&ids.next_id()).unwrap();
        assert_eq!(json, "\"p-0\"");
    }
}
