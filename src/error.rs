//! Common error types for HTTP client operations

/// A common error type for HTTP client operations.
///
/// This enum defines the set of errors that can occur while performing a
/// request. It is designed to be simple and portable for `no_std`
/// environments. All failures are local to a single request: either a
/// usable body stream is returned, or the transport is left closed and one
/// of these errors is reported.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The transport refused the connection; nothing was written.
    ConnectionFailed,
    /// A write failed or was short; the request was aborted mid-send.
    WriteError,
    /// A read faulted while receiving the response.
    ReadError,
    /// The connection closed before the response header block ended.
    ConnectionClosed,
    /// The response status line did not parse as `HTTP/1.1 <code>`.
    ProtocolError,
    /// A host or address string exceeds the fixed internal buffer.
    InvalidAddress,
    /// The Basic-Auth `name:password` pair exceeds the fixed encoding buffer.
    CredentialTooLong,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ConnectionFailed => defmt::write!(f, "ConnectionFailed"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::CredentialTooLong => defmt::write!(f, "CredentialTooLong"),
        }
    }
}
