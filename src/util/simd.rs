//! Byte-level text helpers used on the analysis hot path.

/// Chunked ASCII operations.
pub mod ascii {

    /// Convert ASCII characters to lowercase, processing 8 bytes at a time.
    ///
    /// The caller must pass ASCII text; [`to_lowercase`] checks this.
    pub fn to_lowercase_optimized(input: &str) -> String {
        let bytes = input.as_bytes();
        let mut result = Vec::with_capacity(bytes.len());

        let chunks = bytes.chunks_exact(8);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let mut processed = [0u8; 8];
            for (i, &byte) in chunk.iter().enumerate() {
                processed[i] = byte.to_ascii_lowercase();
            }
            result.extend_from_slice(&processed);
        }

        for &byte in remainder {
            result.push(byte.to_ascii_lowercase());
        }

        // SAFETY: lowercasing maps ASCII bytes to ASCII bytes and leaves every
        // other byte untouched, so the output is valid UTF-8 whenever the input is.
        unsafe { String::from_utf8_unchecked(result) }
    }

    /// Unicode-aware lowercase conversion, one character at a time.
    ///
    /// Each character maps the same way wherever it sits in the word, so a
    /// capital sigma always becomes `σ` and never the final form `ς`.
    pub fn to_lowercase_fallback(input: &str) -> String {
        input.chars().flat_map(char::to_lowercase).collect()
    }

    /// Main entry point for lowercase conversion.
    ///
    /// Short or non-ASCII input goes through the Unicode-aware path.
    pub fn to_lowercase(input: &str) -> String {
        if input.is_ascii() && input.len() >= 16 {
            to_lowercase_optimized(input)
        } else {
            to_lowercase_fallback(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ascii;

    #[test]
    fn test_to_lowercase_optimized() {
        let input = "The QUICK Brown FOX Jumps";
        assert_eq!(ascii::to_lowercase_optimized(input), input.to_lowercase());
    }

    #[test]
    fn test_to_lowercase_non_ascii() {
        assert_eq!(ascii::to_lowercase("ÉCOLE Straße"), "école straße");
    }

    #[test]
    fn test_to_lowercase_is_context_free() {
        assert_eq!(ascii::to_lowercase("ΟΔΟΣ"), "οδοσ");
        assert_eq!(ascii::to_lowercase("ΣΑΣ"), "σασ");
    }

    #[test]
    fn test_to_lowercase_short() {
        assert_eq!(ascii::to_lowercase("AbC"), "abc");
        assert_eq!(ascii::to_lowercase(""), "");
    }
}
