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

//! # bloomsketch
//!
//! A Bloom filter for cheap approximate membership tests over byte-string keys. The filter is
//! sized from the number of keys it should hold, the number of hash functions, and the false
//! positive rate it should have once full. It never reports a false negative.
//!
//! The library is divided into modules that constitute distinct groups of functionality:
//!
//! - [`bloom`]: the filter and its capacity math
//! - [`bitarray`]: set-only bit storage with an O(1) population count
//! - [`hash`]: seeded hash families that derive bit positions
//! - [`error`]: the error type returned by fallible constructors

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bitarray;
pub mod bloom;
pub mod error;
pub mod hash;
