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

//! Error types for bloomsketch operations

use std::fmt;

/// ErrorKind is all kinds of Error of bloomsketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A construction parameter is out of its valid domain.
    InvalidParameter,
    /// A bit index fell outside `[0, len)`.
    ///
    /// Never produced through [`BloomFilter`](crate::bloom::BloomFilter), which reduces every
    /// hash into range before touching its bits. Seeing it there means a bug.
    IndexOutOfRange,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidParameter => "InvalidParameter",
            ErrorKind::IndexOutOfRange => "IndexOutOfRange",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all fallible bloomsketch functions.
///
/// # Examples
///
/// ```
/// # use bloomsketch::error::Error;
/// # use bloomsketch::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidParameter, "num_hashes must be at least 1");
/// assert_eq!(err.kind(), ErrorKind::InvalidParameter);
/// assert_eq!(err.message(), "num_hashes must be at least 1");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the context value recorded under `key`, if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Error {
    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter, msg)
    }

    pub(crate) fn index_out_of_range(index: u64, len: u64) -> Self {
        Self::new(ErrorKind::IndexOutOfRange, "bit index out of range")
            .with_context("index", index)
            .with_context("len", len)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_invalid_parameter_format() {
        let err = Error::invalid_parameter("target_fpp must be in (0, 1)")
            .with_context("target_fpp", 1.5);
        assert_snapshot!(err, @"InvalidParameter, context: { target_fpp: 1.5 } => target_fpp must be in (0, 1)");
    }

    #[test]
    fn test_index_out_of_range_format() {
        let err = Error::index_out_of_range(14, 14);
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.context("index"), Some("14"));
        assert_eq!(err.context("missing"), None);
        assert_snapshot!(err, @"IndexOutOfRange, context: { index: 14, len: 14 } => bit index out of range");
    }

    #[test]
    fn test_debug_report() {
        let err = Error::index_out_of_range(3, 2);
        assert_eq!(
            format!("{err:?}"),
            "IndexOutOfRange => bit index out of range\n\nContext:\n   index: 3\n   len: 2\n"
        );
    }
}
