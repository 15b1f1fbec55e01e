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

//! Fixed-length, set-only bit storage.
//!
//! Bits are packed into `u64` words. A bit may go from 0 to 1 but never back, so the
//! population count is tracked as bits are set and read back in O(1).

use crate::error::Error;

/// A fixed-length array of bits with a tracked population count.
///
/// # Examples
///
/// ```
/// # use bloomsketch::bitarray::BitArray;
/// let mut bits = BitArray::new(100).unwrap();
/// assert!(bits.set(42).unwrap()); // 0 -> 1
/// assert!(!bits.set(42).unwrap()); // already set
/// assert!(bits.get(42).unwrap());
/// assert_eq!(bits.count_ones(), 1);
/// assert!(bits.get(100).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    /// Number of addressable bits
    len: u64,
    /// Number of bits currently set to 1
    num_ones: u64,
    /// Length = ceil(len / 64)
    words: Box<[u64]>,
}

impl BitArray {
    /// Creates an array of `len` bits, all 0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if `len` is 0.
    pub fn new(len: u64) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::invalid_parameter(
                "bit array length must be at least 1",
            ));
        }

        let num_words = usize::try_from(len.div_ceil(64)).map_err(|_| {
            Error::invalid_parameter("bit array length exceeds addressable memory")
                .with_context("len", len)
        })?;
        tracing::trace!(len, num_words, "allocating bit array");

        Ok(BitArray {
            len,
            num_ones: 0,
            words: vec![0u64; num_words].into_boxed_slice(),
        })
    }

    /// Returns the number of bits in the array.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns whether no bit has been set yet.
    pub fn is_empty(&self) -> bool {
        self.num_ones == 0
    }

    /// Returns the number of bits set to 1.
    pub fn count_ones(&self) -> u64 {
        self.num_ones
    }

    /// Reads the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if `index >= len`.
    pub fn get(&self, index: u64) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// Sets the bit at `index` to 1.
    ///
    /// Returns `true` if the bit was 0 before the call. Setting a bit that is already 1
    /// leaves the array and its population count untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if `index >= len`.
    pub fn set(&mut self, index: u64) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.set_bit(index))
    }

    fn check_index(&self, index: u64) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, self.len))
        }
    }

    /// Reads a bit whose index is already known to be in range.
    pub(crate) fn bit(&self, index: u64) -> bool {
        let (word, mask) = locate(index);
        (self.words[word] & mask) != 0
    }

    /// Sets a bit whose index is already known to be in range.
    pub(crate) fn set_bit(&mut self, index: u64) -> bool {
        let (word, mask) = locate(index);
        if (self.words[word] & mask) != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.num_ones += 1;
        true
    }
}

/// Splits a bit index into its word index and the mask within that word.
#[inline]
fn locate(index: u64) -> (usize, u64) {
    ((index >> 6) as usize, 1u64 << (index & 63))
}
