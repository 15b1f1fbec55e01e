// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bloom filter sized from a target false positive rate.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! a key is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If a key was inserted, `find()` will always return `true`
//! - **Possible false positives**: `find()` may return `true` for keys never inserted
//! - **Fixed size**: the bit count is computed once and never changes
//! - **Set-only**: bits are never cleared, so the population count only grows
//!
//! # Usage
//!
//! ```rust
//! use bloomsketch::bloom::BloomFilter;
//!
//! // 1000 expected keys, 7 hash functions, 1% target false positive rate
//! let mut filter = BloomFilter::new(1000, 7, 0.01).unwrap();
//!
//! filter.insert("apple");
//! filter.insert("banana");
//!
//! assert!(filter.find("apple")); // true - definitely inserted
//!
//! println!("Size: {} bits", filter.bits_needed());
//! println!("Bits set: {}", filter.num_bits_set());
//! println!("Projected FPP: {:.4}%", filter.false_positive_rate() * 100.0);
//! ```
//!
//! # Sizing
//!
//! Given `n` expected keys, `d` hash functions and target rate `P`, the filter needs `N` bits
//! such that, once `n` keys are in, a fraction `phi = 1 - P^(1/d)` of them are still 0:
//!
//! ```text
//! N = trunc(d / (1 - phi^(1/n)))
//! ```
//!
//! See [`bits_needed`] for the limits and error cases.
//!
//! # Implementation Details
//!
//! - Bit positions come from a [`HashFamily`](crate::hash::HashFamily), reduced modulo `N`
//! - Bits are packed in `u64` words with a tracked population count
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod planner;
mod sketch;

pub use self::planner::bits_needed;
pub use self::planner::projected_false_positive_rate;
pub use self::planner::MAX_NUM_BITS;
pub use self::planner::MAX_NUM_HASHES;
pub use self::planner::MIN_NUM_HASHES;
pub use self::sketch::BloomFilter;
