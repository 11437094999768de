//! The fixed table of built-in hash functions.
//!
//! Table order is display order only; lookup is by exact name.

use crate::hash;
use serde::Serialize;

/// Pure mapping from a byte sequence to a 32-bit unsigned value.
pub type HashFn = fn(&[u8]) -> u32;

#[derive(Serialize)]
pub struct HashEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub hash: HashFn,
}

static REGISTRY: &[HashEntry] = &[
    HashEntry {
        name: "acc",
        description: "hash += data[i]",
        hash: hash::acc::hash,
    },
    HashEntry {
        name: "acc_mul",
        description: "hash += data[i] * i",
        hash: hash::acc_mul::hash,
    },
    HashEntry {
        name: "jenkins",
        description: "jenkins_one_at_a_time_hash",
        hash: hash::jenkins::hash,
    },
    HashEntry {
        name: "djb2",
        description: "hash = ((hash << 5) + hash) + c;",
        hash: hash::djb2::hash,
    },
    HashEntry {
        name: "sdbm",
        description: "hash = c + (hash << 6) + (hash << 16) - hash;",
        hash: hash::sdbm::hash,
    },
    HashEntry {
        name: "dek",
        description: "hash = ((hash << 5) ^ (hash >> 27)) ^ (*str);",
        hash: hash::dek::hash,
    },
];

/// The full table, in display order.
pub fn entries() -> &'static [HashEntry] {
    REGISTRY
}

/// Look a function up by exact name.
pub fn find(name: &str) -> Option<&'static HashEntry> {
    REGISTRY.iter().find(|entry| entry.name == name)
}
