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

//! Seeded hash families that derive the bit positions of a key.
//!
//! A [`HashFamily`] maps a key and a stream number `seed` in `1..=d` to a 64-bit value. The
//! capacity math in [`crate::bloom`] assumes the `d` streams behave as independent uniform
//! hashes, so any implementation must be deterministic and must not correlate streams for the
//! same key.
//!
//! Two families are provided:
//!
//! - [`SeededMurmur3`] (default): one MurmurHash3 x64/128 evaluation per stream, each with its
//!   own hash seed.
//! - [`KirschMitzenmacher`]: a single MurmurHash3 x64/128 evaluation per key, with stream `i`
//!   computed as `h1 + i * (h2 | 1)`. Forcing `h2` odd keeps every stream distinct.

mod family;
mod murmurhash;

pub use self::family::HashFamily;
pub use self::family::KirschMitzenmacher;
pub use self::family::SeededMurmur3;
pub(crate) use self::murmurhash::murmurhash3_x64_128;

/// The base seed used when none is given.
///
/// Two filters only agree on bit positions if they share a family and a base seed.
pub const DEFAULT_SEED: u64 = 9001;
