//! Frequency view: distinct terms with their occurrence counts.

use std::collections::BTreeMap;

use crate::analysis::token::TokenStream;
use crate::view::{ViewOutput, ViewReducer};

/// Separator written after every entry, the last one included.
const ENTRY_SEPARATOR: &str = "   ";

/// A view counting how often each term occurs.
///
/// Terms are listed in ordinal (byte-wise) ascending order as
/// `"<term> [<count>]   "`. The reported token count is the number of tokens
/// consumed, not the number of distinct terms.
///
/// The term table is allocated per call, so a reduction never sees counts
/// left over from an earlier one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrequencyView;

impl FrequencyView {
    pub fn new() -> Self {
        FrequencyView
    }

    /// Count the terms of `stream`. Returns the table and the token count.
    pub fn term_frequencies(stream: TokenStream) -> (BTreeMap<String, usize>, usize) {
        let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
        let mut token_count = 0;

        for token in stream {
            token_count += 1;
            *frequencies.entry(token.text).or_insert(0) += 1;
        }

        (frequencies, token_count)
    }
}

impl ViewReducer for FrequencyView {
    fn name(&self) -> &'static str {
        "Term Frequencies"
    }

    fn reduce(&self, stream: TokenStream) -> ViewOutput {
        let (frequencies, token_count) = Self::term_frequencies(stream);

        let report: String = frequencies
            .iter()
            .map(|(term, count)| format!("{term} [{count}]{ENTRY_SEPARATOR}"))
            .collect();

        ViewOutput {
            report,
            token_count,
        }
    }
}
