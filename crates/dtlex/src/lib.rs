//! Pull tokenizer for free-form date/time strings.
//!
//! Turns input such as `2024-01-05T12:30:45.123`, `12/05/24 3:45 p.m.` or
//! `@1700000000` into a stream of typed [`Token`]s for a downstream date/time
//! format grammar. There is no fixed grammar behind the scan: runs of
//! characters are classified when they end, by the rules in [`classifier`].
//!
//! Tokens are offset/length pairs into the input; nothing is copied or
//! normalized. The only conversions offered are the integer decoders on
//! [`Tokenizer`], for use once a token is known to be numeric.
//!
//! ```
//! use dtlex::{Symbol, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("@1700000000");
//! assert_eq!(tokenizer.next_token()?.symbol, Symbol::At);
//! let digits = tokenizer.next_token()?;
//! assert_eq!(tokenizer.read_long(digits)?, 1_700_000_000);
//! assert!(tokenizer.next_token()?.is_eof());
//! # Ok::<(), dtlex::LexError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`SourceBuffer`] / [`Cursor`]: input view with a virtual null sentinel
//! - [`CharClass`]: the character classes the scanner dispatches on
//! - [`classifier`]: end-of-run symbol rules
//! - [`FieldPattern`]: date/time field patterns
//! - [`Tokenizer`]: the scanner and token read helpers

mod char_class;
pub mod classifier;
mod cursor;
mod decode;
mod error;
mod patterns;
mod run_buffer;
mod source_buffer;
mod symbol;
mod tokenizer;

use std::sync::Once;

pub use char_class::CharClass;
pub use cursor::Cursor;
pub use error::LexError;
pub use patterns::FieldPattern;
pub use run_buffer::RunKinds;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use symbol::{Symbol, Token};
pub use tokenizer::Tokenizer;

/// Tokenize `input` completely.
///
/// Returns every token before `Eof`, or the first classification failure.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input).collect()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=dtlex=trace` to see every emitted token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
