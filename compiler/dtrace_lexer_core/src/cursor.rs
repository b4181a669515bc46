//! Character cursor over a sentinel-terminated buffer.
//!
//! The cursor is the tokenizer's only view of the input. It hands out one
//! character per [`read()`](Cursor::read), lets the tokenizer push back
//! characters read since the last accepted token with
//! [`backup()`](Cursor::backup), and exposes the text of the token being
//! built.
//!
//! # End of Input
//!
//! End-of-input is the sentinel (`0x00`) at `pos >= source_len`. A NUL byte
//! at `pos < source_len` is an ordinary character. Reading at end-of-input
//! returns `None` and is counted, so a tokenizer that reads past the end and
//! then backs up one character undoes the end-of-input read rather than
//! stepping back over real text.
//!
//! # Fast Paths
//!
//! Comment, literal and preprocessor bodies are skipped with `memchr`
//! searches for the few ASCII bytes that matter. Those bytes are always
//! character boundaries, so a skip never splits a UTF-8 sequence.

/// Character cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. The bytes before `source_len` are
/// valid UTF-8. Both are guaranteed by [`SourceBuffer`](crate::SourceBuffer)
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Start of the token being built.
    token_start: u32,
    /// End-of-input reads not yet pushed back.
    eof_reads: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            token_start: 0,
            eof_reads: 0,
            source_len,
        }
    }

    /// Move to `offset` and start a new token there.
    ///
    /// Callers check the offset first; see
    /// [`SourceBuffer::cursor_at`](crate::SourceBuffer::cursor_at).
    pub(crate) fn seek(&mut self, offset: u32) {
        debug_assert!(
            offset <= self.source_len,
            "seek offset {offset} exceeds source length {}",
            self.source_len
        );
        debug_assert!(
            !is_utf8_continuation(self.buf[offset as usize]),
            "seek offset {offset} is not a character boundary"
        );
        self.pos = offset;
        self.token_start = offset;
        self.eof_reads = 0;
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end-of-input (the sentinel). Interior NUL bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns `true` if the cursor has reached end-of-input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Byte offset where the current token starts.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Read the next character, or `None` at end-of-input.
    ///
    /// Multi-byte UTF-8 characters are consumed whole.
    pub fn read(&mut self) -> Option<char> {
        if self.is_eof() {
            self.eof_reads += 1;
            return None;
        }
        let start = self.pos;
        self.pos += Self::utf8_char_width(self.current());
        self.slice(start, self.pos).chars().next()
    }

    /// Push back the last `n` characters read.
    ///
    /// Pending end-of-input reads are undone first, then real characters
    /// from the end of the current token.
    ///
    /// # Contract
    ///
    /// Only characters read since the last [`accept()`](Self::accept) can be
    /// pushed back.
    pub fn backup(&mut self, n: u32) {
        for _ in 0..n {
            if self.eof_reads > 0 {
                self.eof_reads -= 1;
                continue;
            }
            debug_assert!(
                self.pos > self.token_start,
                "backup past the start of the current token"
            );
            if self.pos <= self.token_start {
                return;
            }
            self.pos -= 1;
            while self.pos > self.token_start && is_utf8_continuation(self.current()) {
                self.pos -= 1;
            }
        }
    }

    /// Number of bytes read into the current token.
    #[inline]
    pub fn read_len(&self) -> u32 {
        self.pos - self.token_start
    }

    /// Raw text of the current token.
    pub fn read_text(&self) -> &'a str {
        self.slice(self.token_start, self.pos)
    }

    /// Close the current token and start the next one here.
    ///
    /// Returns the byte length of the closed token.
    pub fn accept(&mut self) -> u32 {
        let len = self.read_len();
        self.token_start = self.pos;
        self.eof_reads = 0;
        len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content (`end <= source_len`)
    /// and on character boundaries. Every position the cursor itself
    /// produces satisfies this.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was built from a `&str`, and the cursor only
        // stops on character boundaries: `cursor_at` rejects offsets inside a
        // character, reads and backups move by whole characters, and memchr
        // skips land on ASCII bytes.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `byte` or to end-of-input.
    ///
    /// The found byte is not consumed.
    pub fn eat_until(&mut self, byte: u8) {
        let found = memchr::memchr(byte, self.remaining());
        self.skip_to(found);
    }

    /// Advance to the next `a` or `b`, or to end-of-input.
    pub fn eat_until2(&mut self, a: u8, b: u8) {
        let found = memchr::memchr2(a, b, self.remaining());
        self.skip_to(found);
    }

    /// Advance to the next `a`, `b` or `c`, or to end-of-input.
    pub fn eat_until3(&mut self, a: u8, b: u8, c: u8) {
        let found = memchr::memchr3(a, b, c, self.remaining());
        self.skip_to(found);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Unread source content from the current position.
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within remaining() are <= source_len which fits in u32"
    )]
    fn skip_to(&mut self, found: Option<usize>) {
        match found {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.pos.max(self.source_len),
        }
    }
}

/// Returns `true` for UTF-8 continuation bytes (`10xx_xxxx`).
#[inline]
pub(crate) fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
