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

//! Inserts the first 100,000 words of a word list, checks none of them went missing, then
//! measures how many of the next 100,000 words are falsely reported as present.
//!
//! ```text
//! cargo run --example word_list -- path/to/wordlist.txt
//! ```

use std::error::Error;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use bloomsketch::bloom::BloomFilter;

const NUM_KEYS: usize = 100_000;
const NUM_HASHES: u16 = 4;
const TARGET_FPP: f64 = 0.05;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wordlist.txt".to_string());

    let mut filter = BloomFilter::new(NUM_KEYS as u64, NUM_HASHES, TARGET_FPP)?;
    println!(
        "Created Bloom filter for {} keys, {} hashes, target FPP {}",
        NUM_KEYS, NUM_HASHES, TARGET_FPP
    );
    println!("Bits needed: {}", filter.bits_needed());

    let mut lines = BufReader::new(File::open(&path)?).lines();
    let mut inserted = Vec::with_capacity(NUM_KEYS);
    for line in lines.by_ref().take(NUM_KEYS) {
        let word = line?;
        filter.insert(&word);
        inserted.push(word);
    }
    println!("\nInserted {} words", inserted.len());
    println!(
        "The PROJECTED false positive rate is: {}",
        filter.false_positive_rate()
    );

    let missing = inserted.iter().filter(|w| !filter.find(*w)).count();
    println!("There are {missing} keys missing from the Bloom filter! (should be 0)");

    let mut probed = 0usize;
    let mut false_hits = 0usize;
    for line in lines.take(NUM_KEYS) {
        probed += 1;
        if filter.find(&line?) {
            false_hits += 1;
        }
    }
    if probed == 0 {
        println!(
            "No words left to probe; use a list of at least {} words",
            2 * NUM_KEYS
        );
        return Ok(());
    }
    println!(
        "The ACTUAL false positive rate is: {} ({false_hits} of {probed})",
        false_hits as f64 / probed as f64
    );

    Ok(())
}
