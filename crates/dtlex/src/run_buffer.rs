//! Accumulation buffer for the run currently being scanned.
//!
//! A run is contiguous in the input, so the buffer only needs its start
//! offset; the token length is the number of accumulated bytes. Only ASCII
//! bytes are ever pushed.

use bitflags::bitflags;

bitflags! {
    /// Which kinds of characters a run contains.
    ///
    /// The classifier compares this set exactly ("digits only",
    /// "letters and punctuation"), never with a subset test.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RunKinds: u8 {
        const DIGIT = 1 << 0;
        const LETTER = 1 << 1;
        const PUNCTUATION = 1 << 2;
    }
}

/// The pending run.
///
/// # Invariant
///
/// `text` is non-empty if and only if `start` is `Some`. [`RunBuffer::reset`]
/// is the only way `start` becomes `None` again.
#[derive(Clone, Debug, Default)]
pub(crate) struct RunBuffer {
    text: String,
    kinds: RunKinds,
    start: Option<u32>,
}

impl RunBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `byte` found at `pos`, recording `kind` in the summary.
    ///
    /// Marks the run start if no run is pending. An empty `kind` appends the
    /// byte without touching the summary (date/time markers, sign prefixes).
    pub(crate) fn push(&mut self, pos: u32, byte: u8, kind: RunKinds) {
        debug_assert!(byte.is_ascii(), "run bytes are ASCII, got {byte:#04x}");
        if self.start.is_none() {
            self.start = Some(pos);
        }
        debug_assert_eq!(
            self.start.map(|s| s as usize + self.text.len()),
            Some(pos as usize),
            "run must stay contiguous"
        );
        self.text.push(char::from(byte));
        self.kinds |= kind;
    }

    /// Last accumulated byte, or `0x00` for an empty run.
    pub(crate) fn last_byte(&self) -> u8 {
        self.text.as_bytes().last().copied().unwrap_or(0)
    }

    pub(crate) fn kinds(&self) -> RunKinds {
        self.kinds
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn start(&self) -> Option<u32> {
        self.start
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.start.is_some()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "a run never exceeds the source length, which fits in u32"
    )]
    pub(crate) fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub(crate) fn reset(&mut self) {
        self.text.clear();
        self.kinds = RunKinds::empty();
        self.start = None;
    }
}
