//! Primitive readers over a row buffer.

use bytes::Buf;

use crate::{error::CursorError, options::TextEncoding};

/// Longest varint accepted by [`RowCursor::read_var_u32`].
///
/// Protobuf-style writers sign-extend negative `int32` values to ten groups,
/// so the cap is ten rather than the five a `u32` strictly needs.
pub const MAX_VARINT_GROUPS: usize = 10;

/// Forward-only read cursor over a borrowed row buffer.
///
/// Every read is bounds-checked and the underlying bytes are never modified,
/// so one buffer can be decoded any number of times, from any thread.
#[derive(Debug, Clone)]
pub struct RowCursor<'a> {
    buf: &'a [u8],
    initial_len: usize,
}

impl<'a> RowCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            initial_len: buf.len(),
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    /// Read a base-128 varint. Group `i` contributes `(byte & 0x7F) << (7 * i)`;
    /// bits beyond the 32nd are dropped.
    pub fn read_var_u32(&mut self) -> Result<u32, CursorError> {
        let start = self.position();
        let mut value = 0u32;

        for group in 0..MAX_VARINT_GROUPS {
            self.ensure(1)?;
            let byte = self.buf.get_u8();
            if let Some(bits) = u32::from(byte & 0x7F).checked_shl(7 * group as u32) {
                value |= bits;
            }
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(CursorError::MalformedVarint { offset: start })
    }

    /// Read a varint byte length followed by that many bytes of text.
    pub fn read_string(&mut self, encoding: TextEncoding) -> Result<String, CursorError> {
        let len = self.read_var_u32()? as usize;
        self.ensure(len)?;
        let text = encoding.decode(&self.buf[..len]);
        self.buf.advance(len);
        Ok(text)
    }

    /// Read a little-endian IEEE-754 binary32.
    pub fn read_f32(&mut self) -> Result<f32, CursorError> {
        self.ensure(4)?;
        Ok(self.buf.get_f32_le())
    }

    /// Skip `n` raw bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), CursorError> {
        self.ensure(n)?;
        self.buf.advance(n);
        Ok(())
    }

    fn ensure(&self, requested: usize) -> Result<(), CursorError> {
        if self.buf.remaining() < requested {
            return Err(CursorError::OutOfBounds {
                offset: self.position(),
                requested,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }
}
