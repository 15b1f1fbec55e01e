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

use crate::error::Error;

/// Smallest accepted number of hash functions.
pub const MIN_NUM_HASHES: u16 = 1;
/// Largest accepted number of hash functions.
pub const MAX_NUM_HASHES: u16 = i16::MAX as u16;
/// Largest bit count a filter may be sized to.
pub const MAX_NUM_BITS: u64 = i32::MAX as u64 * 64;

/// Computes the number of bits a filter needs so that, after `expected_keys` insertions with
/// `num_hashes` hash functions, its projected false positive rate equals `target_fpp`.
///
/// Formula:
/// ```text
/// phi = 1 - P^(1/d)
/// N   = trunc(d / (1 - phi^(1/n)))
/// ```
///
/// `phi` is the fraction of bits that must still be 0 once `n` keys are in. The result is
/// truncated toward zero, so the realized rate can sit fractionally above `target_fpp`.
///
/// A `target_fpp` small enough that `phi` rounds to 1.0 (e.g. `1e-20` with `d = 1`) makes the
/// size infinite and is reported as out of range.
///
/// # Errors
///
/// Returns [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if `expected_keys`
/// is 0, `num_hashes` is outside `[MIN_NUM_HASHES, MAX_NUM_HASHES]`, `target_fpp` is not
/// strictly between 0 and 1, or the resulting size is not finite or exceeds [`MAX_NUM_BITS`].
///
/// # Examples
///
/// ```
/// # use bloomsketch::bloom::bits_needed;
/// // phi = 0.5, N = 1 / (1 - 0.5^(1/10)) = 14.93...
/// assert_eq!(bits_needed(10, 1, 0.5).unwrap(), 14);
/// assert!(bits_needed(0, 1, 0.5).is_err());
/// ```
pub fn bits_needed(expected_keys: u64, num_hashes: u16, target_fpp: f64) -> Result<u64, Error> {
    if expected_keys == 0 {
        return Err(Error::invalid_parameter(
            "expected_keys must be greater than 0",
        ));
    }
    if num_hashes < MIN_NUM_HASHES {
        return Err(Error::invalid_parameter(format!(
            "num_hashes must be at least {MIN_NUM_HASHES}"
        )));
    }
    if num_hashes > MAX_NUM_HASHES {
        return Err(Error::invalid_parameter(format!(
            "num_hashes must not exceed {MAX_NUM_HASHES}"
        ))
        .with_context("num_hashes", num_hashes));
    }
    // Also rejects NaN.
    if !(target_fpp > 0.0 && target_fpp < 1.0) {
        return Err(
            Error::invalid_parameter("target_fpp must be between 0.0 and 1.0, exclusive")
                .with_context("target_fpp", target_fpp),
        );
    }

    let n = expected_keys as f64;
    let d = f64::from(num_hashes);
    let phi = 1.0 - target_fpp.powf(1.0 / d);
    let bits = d / (1.0 - phi.powf(1.0 / n));

    if !bits.is_finite() || bits > MAX_NUM_BITS as f64 {
        return Err(
            Error::invalid_parameter("required bit count is out of range")
                .with_context("expected_keys", expected_keys)
                .with_context("num_hashes", num_hashes)
                .with_context("target_fpp", target_fpp)
                .with_context("bits", bits),
        );
    }

    Ok(bits as u64)
}

/// Projects the false positive rate of a filter from its actual fill level.
///
/// Formula: `(1 - phi)^d` where `phi = (num_bits - bits_set) / num_bits` is the fraction of
/// bits still 0.
///
/// Returns 0.0 for an empty bit array.
///
/// # Examples
///
/// ```
/// # use bloomsketch::bloom::projected_false_positive_rate;
/// assert_eq!(projected_false_positive_rate(100, 0, 3), 0.0);
/// assert_eq!(projected_false_positive_rate(100, 50, 2), 0.25);
/// assert_eq!(projected_false_positive_rate(100, 100, 3), 1.0);
/// ```
pub fn projected_false_positive_rate(num_bits: u64, bits_set: u64, num_hashes: u16) -> f64 {
    if num_bits == 0 {
        return 0.0;
    }
    let bits_set = bits_set.min(num_bits);
    let phi = (num_bits - bits_set) as f64 / num_bits as f64;
    (1.0 - phi).powi(i32::from(num_hashes))
}
