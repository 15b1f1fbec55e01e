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

use super::murmurhash3_x64_128;
use super::DEFAULT_SEED;

/// A family of seeded hash functions over byte-string keys.
pub trait HashFamily {
    /// Hashes `key` with stream number `seed`.
    ///
    /// Must return the same value for the same `(key, seed)` pair for the lifetime of the
    /// process.
    fn hash(&self, key: &[u8], seed: u16) -> u64;

    /// Feeds `hash(key, 1)` through `hash(key, count)` to `visit` in order, stopping early
    /// once `visit` returns `false`.
    ///
    /// Families that derive all streams from shared work override this to do that work once
    /// per key.
    fn each_hash<F: FnMut(u64) -> bool>(&self, key: &[u8], count: u16, mut visit: F) {
        for seed in 1..=count {
            if !visit(self.hash(key, seed)) {
                return;
            }
        }
    }
}

/// MurmurHash3 x64/128 evaluated once per stream.
///
/// Stream `seed` hashes the key with hash seed `base + seed` and keeps the low 64 bits.
///
/// # Examples
///
/// ```
/// # use bloomsketch::hash::HashFamily;
/// # use bloomsketch::hash::SeededMurmur3;
/// let family = SeededMurmur3::default();
/// assert_eq!(family.hash(b"apple", 1), family.hash(b"apple", 1));
/// assert_ne!(family.hash(b"apple", 1), family.hash(b"apple", 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededMurmur3 {
    base: u64,
}

impl SeededMurmur3 {
    /// Creates the family with a custom base seed.
    pub fn with_seed(base: u64) -> Self {
        SeededMurmur3 { base }
    }

    /// Returns the base seed.
    pub fn seed(&self) -> u64 {
        self.base
    }
}

impl Default for SeededMurmur3 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl HashFamily for SeededMurmur3 {
    fn hash(&self, key: &[u8], seed: u16) -> u64 {
        murmurhash3_x64_128(key, self.base.wrapping_add(u64::from(seed))).0
    }
}

/// Double hashing (Kirsch-Mitzenmacher) over one MurmurHash3 x64/128 evaluation.
///
/// Stream `seed` is `h1 + seed * (h2 | 1)` with wrapping arithmetic. Inserting or querying a key
/// through [`HashFamily::each_hash`] costs one MurmurHash3 evaluation regardless of the number
/// of streams, while keeping the asymptotic false positive rate of independent hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KirschMitzenmacher {
    base: u64,
}

impl KirschMitzenmacher {
    /// Creates the family with a custom base seed.
    pub fn with_seed(base: u64) -> Self {
        KirschMitzenmacher { base }
    }

    /// Returns the base seed.
    pub fn seed(&self) -> u64 {
        self.base
    }
}

impl Default for KirschMitzenmacher {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl HashFamily for KirschMitzenmacher {
    fn hash(&self, key: &[u8], seed: u16) -> u64 {
        let (h1, h2) = murmurhash3_x64_128(key, self.base);
        combine(h1, h2, seed)
    }

    fn each_hash<F: FnMut(u64) -> bool>(&self, key: &[u8], count: u16, mut visit: F) {
        let (h1, h2) = murmurhash3_x64_128(key, self.base);
        for seed in 1..=count {
            if !visit(combine(h1, h2, seed)) {
                return;
            }
        }
    }
}

#[inline]
fn combine(h1: u64, h2: u64, seed: u16) -> u64 {
    // h2 is forced odd so no stream collapses onto h1 for every key.
    h1.wrapping_add(u64::from(seed).wrapping_mul(h2 | 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_streams<H: HashFamily>(family: &H, key: &[u8], d: u16) -> usize {
        let mut values: Vec<u64> = (1..=d).map(|i| family.hash(key, i)).collect();
        values.sort_unstable();
        values.dedup();
        values.len()
    }

    #[test]
    fn test_seeded_murmur3_streams_differ() {
        let family = SeededMurmur3::default();
        assert_eq!(family.seed(), DEFAULT_SEED);
        assert_eq!(distinct_streams(&family, b"apple", 16), 16);
        assert_eq!(distinct_streams(&family, b"", 16), 16);
    }

    #[test]
    fn test_kirsch_mitzenmacher_streams_differ() {
        let family = KirschMitzenmacher::default();
        assert_eq!(distinct_streams(&family, b"apple", 16), 16);
        assert_eq!(distinct_streams(&family, b"", 16), 16);
    }

    #[test]
    fn test_kirsch_mitzenmacher_uses_odd_step() {
        let family = KirschMitzenmacher::with_seed(5);
        let (h1, h2) = murmurhash3_x64_128(b"apple", 5);
        for seed in 1..=8u16 {
            let step = u64::from(seed).wrapping_mul(h2 | 1);
            assert_eq!(family.hash(b"apple", seed), h1.wrapping_add(step));
        }
    }

    #[test]
    fn test_base_seed_matters() {
        let a = SeededMurmur3::with_seed(1);
        let b = SeededMurmur3::with_seed(2);
        assert_ne!(a.hash(b"apple", 1), b.hash(b"apple", 1));

        let a = KirschMitzenmacher::with_seed(1);
        let b = KirschMitzenmacher::with_seed(2);
        assert_ne!(a.hash(b"apple", 1), b.hash(b"apple", 1));
    }

    #[test]
    fn test_streams_spread_over_small_range() {
        // Each of 4 streams over 1000 keys should hit all 8 residues mod 8.
        let family = SeededMurmur3::default();
        for seed in 1..=4 {
            let mut hits = [0u32; 8];
            for i in 0..1000u32 {
                hits[(family.hash(&i.to_le_bytes(), seed) % 8) as usize] += 1;
            }
            assert!(hits.iter().all(|&n| n > 60), "stream {seed}: {hits:?}");
        }
    }

    #[test]
    fn test_each_hash_matches_hash() {
        fn collect<H: HashFamily>(family: &H, count: u16) -> Vec<u64> {
            let mut out = vec![];
            family.each_hash(b"key", count, |h| {
                out.push(h);
                true
            });
            out
        }

        let murmur = SeededMurmur3::default();
        let expected: Vec<u64> = (1..=5).map(|i| murmur.hash(b"key", i)).collect();
        assert_eq!(collect(&murmur, 5), expected);

        let km = KirschMitzenmacher::default();
        let expected: Vec<u64> = (1..=5).map(|i| km.hash(b"key", i)).collect();
        assert_eq!(collect(&km, 5), expected);
    }

    #[test]
    fn test_each_hash_stops_early() {
        let mut visited = 0;
        SeededMurmur3::default().each_hash(b"key", 10, |_| {
            visited += 1;
            visited < 3
        });
        assert_eq!(visited, 3);
    }
}
