//! A byte-stream transport abstraction for embedded systems
//!
//! This module defines the traits the host platform must implement to give
//! the client a TCP-like connection primitive. The client is transport
//! agnostic: anything that can open a connection, move bytes in both
//! directions and close again will do, whether that is a `std` TCP socket,
//! a smoltcp socket or a serial modem driver.

#![allow(missing_docs)]

/// Re-exports of the transport traits.
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection.
    ///
    /// Blocks until at least one byte is available and returns the number of
    /// bytes placed in `buf`. Returns `Ok(0)` only on orderly end-of-stream.
    /// A dropped connection must surface as an error rather than a hang, so
    /// implementations re-check liveness while waiting.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection.
    ///
    /// A short write (`Ok(n)` with `n < buf.len()`) aborts the request in
    /// progress; the client does not retry the remainder.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous bidirectional connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client side)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `remote`, given as `host:port` or `a.b.c.d:port`
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}
