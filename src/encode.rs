//! RFC 3986 percent-encoding applied on the write path.
//!
//! The client never builds an encoded copy of a URI in memory. Instead,
//! outgoing bytes pass through an [`EncodedWriter`] that escapes disallowed
//! characters as they are written to the transport, one byte (or one `%XX`
//! triple) at a time. Which characters are escaped depends on the current
//! [`Mode`], which the request serializer switches as it moves between the
//! path, query parameters and header lines.

use crate::error::Error;
use crate::trace;
use crate::transport::Write;

/// Encoding applied to bytes written through an [`EncodedWriter`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Pass bytes through untouched.
    ///
    /// Used for the request line scaffolding, header lines and the body.
    Off,
    /// Escape everything except unreserved and reserved characters.
    ///
    /// Reserved characters such as `/` and `?` carry URI structure and
    /// survive unescaped. Used when writing the request path.
    Path,
    /// Escape everything except unreserved characters.
    ///
    /// Reserved characters are escaped too, so a literal `&` or `=` inside
    /// a value cannot be mistaken for a separator. Used when writing a
    /// query parameter name or value.
    Component,
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 3986 unreserved characters, never escaped in any mode.
pub(crate) fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// RFC 3986 reserved characters, the URI delimiters that survive [`Mode::Path`].
pub(crate) fn is_reserved(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'*'
            | b'\''
            | b'('
            | b')'
            | b';'
            | b':'
            | b'@'
            | b'&'
            | b'='
            | b'+'
            | b'$'
            | b','
            | b'/'
            | b'?'
            | b'#'
            | b'['
            | b']'
    )
}

/// A write-side percent-encoding filter over a transport writer.
///
/// The writer owns the encoding mode for one request; the mode starts at
/// [`Mode::Off`] and is switched by the request serializer as it crosses
/// component boundaries. When the debug flag is set, every on-wire byte is
/// also mirrored to the trace channel.
pub struct EncodedWriter<'a, W: Write> {
    inner: &'a mut W,
    mode: Mode,
    debug: bool,
}

impl<'a, W: Write> EncodedWriter<'a, W> {
    /// Wrap a transport writer. The mode starts at [`Mode::Off`].
    pub fn new(inner: &'a mut W, debug: bool) -> Self {
        Self {
            inner,
            mode: Mode::Off,
            debug,
        }
    }

    /// Switch the encoding applied to subsequent writes.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Forward one byte to the transport, unencoded.
    fn put(&mut self, byte: u8) -> Result<(), Error> {
        match self.inner.write(&[byte]) {
            Ok(1) => {
                if self.debug {
                    trace::tx(byte);
                }
                Ok(())
            }
            Ok(_) => Err(Error::WriteError),
            Err(_) => Err(Error::WriteError),
        }
    }

    /// Write one byte, escaping it as `%XX` if the current mode requires.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        let escape = match self.mode {
            Mode::Off => false,
            Mode::Path => !is_unreserved(byte) && !is_reserved(byte),
            Mode::Component => !is_unreserved(byte),
        };

        if escape {
            self.put(b'%')?;
            self.put(HEX[(byte >> 4) as usize])?;
            self.put(HEX[(byte & 0x0F) as usize])?;
        } else {
            self.put(byte)?;
        }
        Ok(())
    }

    /// Write a run of bytes through the current mode.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush the underlying transport.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush().map_err(|_| Error::WriteError)
    }
}
