//! Offsets view: every token with its start and end offsets.

use crate::analysis::token::{Token, TokenStream};
use crate::view::{ViewOutput, ViewReducer};

/// Width of the right-aligned offset columns.
const OFFSET_WIDTH: usize = 5;

/// A view listing each token, in order, with its character span.
///
/// Each token renders as one line:
///
/// ```text
/// hello   Start:     0  End:     5
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetsView;

impl OffsetsView {
    pub fn new() -> Self {
        OffsetsView
    }

    fn render_token(token: &Token) -> String {
        format!(
            "{}   Start: {:>width$}  End: {:>width$}\n",
            token.text,
            token.start_offset,
            token.end_offset,
            width = OFFSET_WIDTH
        )
    }
}

impl ViewReducer for OffsetsView {
    fn name(&self) -> &'static str {
        "Terms With Offsets"
    }

    fn reduce(&self, stream: TokenStream) -> ViewOutput {
        let mut output = ViewOutput::default();

        for token in stream {
            output.token_count += 1;
            output.report.push_str(&Self::render_token(&token));
        }

        output
    }
}
