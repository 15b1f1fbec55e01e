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

use super::planner::bits_needed;
use super::planner::projected_false_positive_rate;
use crate::bitarray::BitArray;
use crate::error::Error;
use crate::hash::HashFamily;
use crate::hash::SeededMurmur3;

/// A Bloom filter sized from an expected key count, a hash count and a target false positive
/// rate.
///
/// Provides membership queries with:
/// - No false negatives (inserted keys always return `true`)
/// - A false positive rate that reaches the target once `expected_keys` keys are in
/// - A bit count fixed at construction
///
/// The filter is a plain value; sharing it across threads needs external synchronization
/// around [`insert`](Self::insert).
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter<H = SeededMurmur3> {
    /// Expected number of keys (n)
    expected_keys: u64,
    /// Number of hash functions (d)
    num_hashes: u16,
    /// Target false positive rate (P)
    target_fpp: f64,
    /// Bit array of length N, holding the count of bits set
    bits: BitArray,
    /// Hash family deriving the d bit positions of a key
    family: H,
}

impl BloomFilter {
    /// Creates a filter using the default [`SeededMurmur3`] hash family.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if
    /// `expected_keys` or `num_hashes` is 0, or `target_fpp` is not strictly between 0 and 1.
    /// See [`bits_needed`](super::bits_needed) for the full list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilter;
    /// let filter = BloomFilter::new(10, 1, 0.5).unwrap();
    /// assert_eq!(filter.bits_needed(), 14);
    /// assert_eq!(filter.num_bits_set(), 0);
    ///
    /// assert!(BloomFilter::new(10, 0, 0.5).is_err());
    /// ```
    pub fn new(expected_keys: u64, num_hashes: u16, target_fpp: f64) -> Result<Self, Error> {
        Self::with_hash_family(
            expected_keys,
            num_hashes,
            target_fpp,
            SeededMurmur3::default(),
        )
    }
}

impl<H: HashFamily> BloomFilter<H> {
    /// Creates a filter that derives bit positions with `family`.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilter;
    /// # use bloomsketch::hash::KirschMitzenmacher;
    /// let family = KirschMitzenmacher::with_seed(42);
    /// let mut filter = BloomFilter::with_hash_family(1000, 7, 0.01, family).unwrap();
    /// filter.insert("apple");
    /// assert!(filter.find("apple"));
    /// ```
    pub fn with_hash_family(
        expected_keys: u64,
        num_hashes: u16,
        target_fpp: f64,
        family: H,
    ) -> Result<Self, Error> {
        let num_bits = bits_needed(expected_keys, num_hashes, target_fpp)?;
        let bits = BitArray::new(num_bits)?;
        tracing::debug!(
            expected_keys,
            num_hashes,
            target_fpp,
            num_bits,
            "sized bloom filter"
        );

        Ok(BloomFilter {
            expected_keys,
            num_hashes,
            target_fpp,
            bits,
            family,
        })
    }

    /// Inserts a key into the filter.
    ///
    /// After insertion, `find(key)` will always return `true`. Inserting the same key again
    /// sets no new bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
    ///
    /// filter.insert("apple");
    /// filter.insert(b"raw bytes");
    /// filter.insert(&vec![1u8, 2, 3]);
    ///
    /// assert!(filter.find("apple"));
    /// assert!(filter.find(&[1u8, 2, 3]));
    /// ```
    pub fn insert<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) {
        let num_bits = self.bits.len();
        let bits = &mut self.bits;
        self.family
            .each_hash(key.as_ref(), self.num_hashes, |hash| {
                bits.set_bit(hash % num_bits);
                true
            });
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Key was **possibly** inserted (or false positive)
    /// - `false`: Key was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
    /// assert!(!filter.find("apple"));
    ///
    /// filter.insert("apple");
    /// assert!(filter.find("apple"));
    /// ```
    pub fn find<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        let num_bits = self.bits.len();
        let mut found = true;
        self.family
            .each_hash(key.as_ref(), self.num_hashes, |hash| {
                found = self.bits.bit(hash % num_bits);
                found
            });
        found
    }

    /// Tests and inserts a key in a single pass.
    ///
    /// Returns what [`find`](Self::find) would have returned before the insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
    ///
    /// assert!(!filter.find_and_insert("apple")); // first insertion
    /// assert!(filter.find_and_insert("apple")); // now it's in the set
    /// ```
    pub fn find_and_insert<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> bool {
        let num_bits = self.bits.len();
        let bits = &mut self.bits;
        let mut was_present = true;
        self.family
            .each_hash(key.as_ref(), self.num_hashes, |hash| {
                if bits.set_bit(hash % num_bits) {
                    was_present = false;
                }
                true
            });
        was_present
    }

    /// Returns the number of bits in the filter (N), fixed at construction.
    pub fn bits_needed(&self) -> u64 {
        self.bits.len()
    }

    /// Returns the number of bits set to 1.
    pub fn num_bits_set(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Returns the projected false positive rate given the current fill level.
    ///
    /// Uses `(1 - phi)^d` where `phi` is the fraction of bits still 0. This tracks the
    /// actual bits set, not the target rate: it starts at 0 and lands near the target once
    /// `expected_keys` distinct keys are in.
    pub fn false_positive_rate(&self) -> f64 {
        projected_false_positive_rate(self.bits.len(), self.bits.count_ones(), self.num_hashes)
    }

    /// Returns the fraction of bits set to 1.
    pub fn load_factor(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Returns whether no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the expected number of keys (n).
    pub fn expected_keys(&self) -> u64 {
        self.expected_keys
    }

    /// Returns the number of hash functions (d).
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the target false positive rate (P).
    pub fn target_false_positive_rate(&self) -> f64 {
        self.target_fpp
    }

    /// Returns the hash family.
    pub fn hash_family(&self) -> &H {
        &self.family
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::error::ErrorKind;
    use crate::hash::KirschMitzenmacher;
    use crate::hash::SeededMurmur3;

    #[test]
    fn test_new() {
        let filter = BloomFilter::new(10, 1, 0.5).unwrap();
        assert_eq!(filter.bits_needed(), 14);
        assert_eq!(filter.expected_keys(), 10);
        assert_eq!(filter.num_hashes(), 1);
        assert_eq!(filter.target_false_positive_rate(), 0.5);
        assert_eq!(filter.hash_family(), &SeededMurmur3::default());
        assert!(filter.is_empty());
        assert_eq!(filter.false_positive_rate(), 0.0);
        assert_eq!(filter.load_factor(), 0.0);
    }

    #[test]
    fn test_new_rejects_bad_parameters() {
        for (n, d, p) in [(0, 1, 0.5), (10, 0, 0.5), (10, 1, 0.0), (10, 1, 1.0)] {
            let err = BloomFilter::new(n, d, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn test_insert_and_find() {
        let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
        assert!(!filter.find("apple"));

        filter.insert("apple");
        assert!(filter.find("apple"));
        assert!(!filter.is_empty());
        assert!(filter.num_bits_set() >= 1 && filter.num_bits_set() <= 3);
    }

    #[test]
    fn test_str_and_bytes_agree() {
        let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
        filter.insert("apple");
        assert!(filter.find(b"apple"));
        assert!(filter.find(&b"apple".to_vec()));
        assert!(filter.find(&String::from("apple")));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut filter = BloomFilter::new(100, 4, 0.01).unwrap();
        filter.insert("apple");
        let after_first = filter.num_bits_set();
        filter.insert("apple");
        assert_eq!(filter.num_bits_set(), after_first);
        assert!(filter.find("apple"));
    }

    #[test]
    fn test_find_and_insert() {
        let mut filter = BloomFilter::new(100, 3, 0.01).unwrap();
        assert!(!filter.find_and_insert(&42u64.to_le_bytes()));
        assert!(filter.find_and_insert(&42u64.to_le_bytes()));
        assert!(filter.find(&42u64.to_le_bytes()));
    }

    #[test]
    fn test_families_agree_on_membership() {
        let mut murmur = BloomFilter::new(1000, 5, 0.01).unwrap();
        let mut km =
            BloomFilter::with_hash_family(1000, 5, 0.01, KirschMitzenmacher::default()).unwrap();
        assert_eq!(murmur.bits_needed(), km.bits_needed());

        for i in 0..500u32 {
            murmur.insert(&i.to_le_bytes());
            km.insert(&i.to_le_bytes());
        }
        for i in 0..500u32 {
            assert!(murmur.find(&i.to_le_bytes()));
            assert!(km.find(&i.to_le_bytes()));
        }
    }

    #[test]
    fn test_same_seed_same_bits() {
        let mut f1 = BloomFilter::new(100, 3, 0.01).unwrap();
        let mut f2 = BloomFilter::new(100, 3, 0.01).unwrap();
        let mut f3 =
            BloomFilter::with_hash_family(100, 3, 0.01, SeededMurmur3::with_seed(1)).unwrap();
        for key in ["a", "b", "c"] {
            f1.insert(key);
            f2.insert(key);
            f3.insert(key);
        }
        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
    }
}
