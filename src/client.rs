//! The HTTP client and response body handle.
//!
//! [`Client`] drives one full request/response cycle per call: it opens a
//! fresh connection through the platform's [`Connect`] implementation,
//! serializes the request, parses the response status line, skips the
//! header block and hands back a [`Body`] positioned at the first body
//! byte. Connections are never reused; every request carries
//! `Connection: close` and the transport is torn down when the caller
//! releases the body.

use core::fmt::Write as _;
use heapless::String;

use crate::auth;
use crate::encode::EncodedWriter;
use crate::error::Error;
use crate::request::{self, Header, Method, Param};
use crate::response;
use crate::trace;
use crate::transport::{Close, Connect, Connection, Read};

/// Default TCP port for plain HTTP.
pub const DEFAULT_PORT: u16 = 80;

const MAX_HOST_LEN: usize = 64;
const MAX_REMOTE_LEN: usize = 72;

/// A synchronous HTTP/1.1 client.
///
/// The client owns a connector and an immutable connection target fixed at
/// construction: either a host name (resolved by the transport) or a raw
/// IPv4 address, plus a port. One request is in flight at a time; each
/// request blocks the calling thread until a [`Body`] is returned or the
/// request fails.
///
/// # Type Parameters
///
/// * `N` - The connector type implementing [`Connect`]
///
/// # Examples
///
/// ```rust,no_run
/// use libhttpc::client::{Client, DEFAULT_PORT};
/// use libhttpc::request::{Header, Param};
/// # use libhttpc::transport::{Close, Connect, Connection, Read, Write};
/// # struct MockConnection;
/// # impl Connection for MockConnection {}
/// # impl Read for MockConnection {
/// #     type Error = ();
/// #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
/// # }
/// # impl Write for MockConnection {
/// #     type Error = ();
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl Close for MockConnection {
/// #     type Error = ();
/// #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockNetwork;
/// # impl Connect for MockNetwork {
/// #     type Connection = MockConnection;
/// #     type Error = ();
/// #     fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
/// #         Ok(MockConnection)
/// #     }
/// # }
///
/// let mut client = Client::new(MockNetwork, "example.org", DEFAULT_PORT).unwrap();
///
/// let params = [Param { name: "unit", value: Some("celsius") }];
/// let headers = [Header { name: "X-Device", value: Some("sensor-01") }];
/// // let mut body = client.get("/api/temperature", &params, &headers)?;
/// // assert_eq!(body.status(), 200);
/// // body.close()?;
/// ```
pub struct Client<N: Connect> {
    network: N,
    remote: String<MAX_REMOTE_LEN>,
    host: String<MAX_HOST_LEN>,
    credential: Option<auth::Credential>,
    last_status: Option<u16>,
    debug: bool,
}

impl<N: Connect> core::fmt::Debug for Client<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client")
            .field("remote", &self.remote)
            .field("host", &self.host)
            .field("last_status", &self.last_status)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<N: Connect> Client<N> {
    /// Create a client that connects by host name.
    ///
    /// `host` feeds both the `Host` header and the `host:port` target
    /// string handed to the connector, which is responsible for name
    /// resolution. Returns [`Error::InvalidAddress`] when `host` exceeds
    /// the fixed internal buffer.
    pub fn new(network: N, host: &str, port: u16) -> Result<Self, Error> {
        let mut remote: String<MAX_REMOTE_LEN> = String::new();
        write!(remote, "{}:{}", host, port).map_err(|_| Error::InvalidAddress)?;
        Ok(Self {
            network,
            remote,
            host: String::try_from(host).map_err(|_| Error::InvalidAddress)?,
            credential: None,
            last_status: None,
            debug: false,
        })
    }

    /// Create a client that connects to a raw IPv4 address.
    ///
    /// `host` still supplies the `Host` header value; the connector
    /// receives the dotted-quad `a.b.c.d:port` target and performs no name
    /// resolution.
    pub fn with_ip(network: N, host: &str, ip: [u8; 4], port: u16) -> Result<Self, Error> {
        let mut remote: String<MAX_REMOTE_LEN> = String::new();
        write!(remote, "{}.{}.{}.{}:{}", ip[0], ip[1], ip[2], ip[3], port)
            .map_err(|_| Error::InvalidAddress)?;
        Ok(Self {
            network,
            remote,
            host: String::try_from(host).map_err(|_| Error::InvalidAddress)?,
            credential: None,
            last_status: None,
            debug: false,
        })
    }

    /// Attach a Basic-Auth credential, encoded once and sent with every
    /// subsequent request.
    ///
    /// Returns [`Error::CredentialTooLong`] when `name:password` exceeds
    /// the fixed encoding buffer (48 bytes).
    pub fn with_basic_auth(mut self, name: &str, password: &str) -> Result<Self, Error> {
        self.credential = Some(auth::basic_credential(name, password)?);
        Ok(self)
    }

    /// Toggle the byte-level wire echo. Persists across requests.
    pub fn set_debug(&mut self, on: bool) {
        self.debug = on;
    }

    /// The status code of the last completed request, if any.
    ///
    /// `None` until a status line has been successfully parsed; reset at
    /// the start of every request.
    pub fn last_status(&self) -> Option<u16> {
        self.last_status
    }

    /// Perform a GET request.
    ///
    /// `params` are appended to the path as a percent-encoded query
    /// string; `headers` are emitted after the fixed header set. On
    /// success the returned [`Body`] is positioned at the first body byte.
    pub fn get(
        &mut self,
        path: &str,
        params: &[Param<'_>],
        headers: &[Header<'_>],
    ) -> Result<Body<N::Connection>, Error> {
        self.request(Method::Get, path, params, headers, None)
    }

    /// Perform a POST request with a fully-resident body.
    ///
    /// The body must be in memory up front because `Content-Length` is
    /// emitted before the first body byte.
    pub fn post(
        &mut self,
        path: &str,
        params: &[Param<'_>],
        body: &[u8],
        headers: &[Header<'_>],
    ) -> Result<Body<N::Connection>, Error> {
        self.request(Method::Post, path, params, headers, Some(body))
    }

    /// Perform a PUT request with a fully-resident body.
    pub fn put(
        &mut self,
        path: &str,
        params: &[Param<'_>],
        body: &[u8],
        headers: &[Header<'_>],
    ) -> Result<Body<N::Connection>, Error> {
        self.request(Method::Put, path, params, headers, Some(body))
    }

    fn request(
        &mut self,
        method: Method,
        path: &str,
        params: &[Param<'_>],
        headers: &[Header<'_>],
        body: Option<&[u8]>,
    ) -> Result<Body<N::Connection>, Error> {
        self.last_status = None;

        let mut conn = self
            .network
            .connect(&self.remote)
            .map_err(|_| Error::ConnectionFailed)?;

        match self.exchange(&mut conn, method, path, params, headers, body) {
            Ok(status) => {
                self.last_status = Some(status);
                Ok(Body {
                    conn,
                    status,
                    debug: self.debug,
                })
            }
            Err(err) => {
                let _ = conn.close();
                Err(err)
            }
        }
    }

    /// Write the request and scan the response headers on an open
    /// connection. The caller tears the connection down on error.
    fn exchange<C: Connection>(
        &self,
        conn: &mut C,
        method: Method,
        path: &str,
        params: &[Param<'_>],
        headers: &[Header<'_>],
        body: Option<&[u8]>,
    ) -> Result<u16, Error> {
        {
            let mut writer = EncodedWriter::new(conn, self.debug);
            request::write_request(
                &mut writer,
                method,
                path,
                params,
                headers,
                &self.host,
                self.credential.as_deref(),
                body,
            )?;
        }
        response::read_status(conn, self.debug)
    }
}

/// An open response body stream.
///
/// Owns the connection for the rest of the exchange. Reads yield body
/// bytes until the server closes the stream (`Ok(0)`); the caller releases
/// the transport with [`Body::close`].
pub struct Body<C: Connection> {
    conn: C,
    status: u16,
    debug: bool,
}

impl<C: Connection> core::fmt::Debug for Body<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Body")
            .field("status", &self.status)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<C: Connection> Body<C> {
    /// The status code parsed from the response status line.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Release the body and tear down the transport.
    pub fn close(self) -> Result<(), Error> {
        self.conn.close().map_err(|_| Error::ConnectionClosed)
    }
}

impl<C: Connection> Read for Body<C> {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.conn.read(buf) {
            Ok(n) => {
                if self.debug {
                    for &byte in &buf[..n] {
                        trace::rx(byte);
                    }
                }
                Ok(n)
            }
            Err(_) => Err(Error::ReadError),
        }
    }
}
