#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Key and value comparison policies.
///
/// This module provides the `Comparator` trait the table uses for hashing,
/// equality, and sentinel ("is this the empty value") tests, along with the
/// default and host-handle-aware implementations.
pub mod compare;

/// A key-value map facade over the double-hashing `HashTable`.
pub mod hash_map;

pub mod hash_table;

pub mod prime;

pub mod size_policy;

pub use compare::Comparator;
pub use compare::DefaultComparator;
pub use compare::HostComparator;
pub use compare::HostHandle;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
pub use size_policy::SizePolicy;
