//! # libhttpc - Embedded HTTP/1.1 Client
//!
//! A minimal HTTP/1.1 client for memory-constrained devices. The client is
//! built on top of a byte-stream transport supplied by the host platform and
//! is designed for `no_std` environments: all buffers are fixed-size, there
//! is no allocator requirement, and a request blocks the calling thread
//! until it completes or fails.
//!
//! ## Features
//!
//! - Request line, header and body serialization for GET, POST and PUT
//! - Transparent RFC 3986 percent-encoding of URI paths and query parameters
//! - Status-code extraction that tolerates `\r\n` and `\n` line endings
//! - Streaming response body access positioned past the header block
//! - Optional HTTP Basic authentication (Base64, fixed credential buffer)
//! - Connection agnostic (works with any transport)
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhttpc = "0.1.0"
//! ```
//!
//! ### Basic GET Request
//!
//! ```rust,no_run
//! use libhttpc::client::Client;
//! use libhttpc::request::Param;
//! # use libhttpc::transport::{Close, Connect, Connection, Read, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = ();
//! #     fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
//! #         Ok(MockConnection)
//! #     }
//! # }
//!
//! let mut client = Client::new(MockNetwork, "example.org", 80).unwrap();
//!
//! let params = [Param { name: "q", value: Some("sensor data") }];
//! // let mut body = client.get("/api/readings", &params, &[])?;
//! // assert_eq!(body.status(), 200);
//! // ... read the body, then release the transport:
//! // body.close()?;
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices via `std` TCP sockets
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support and the byte-level wire echo

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Transport abstraction consumed by the client.
///
/// Defines the [`Read`](transport::Read), [`Write`](transport::Write),
/// [`Close`](transport::Close), [`Connection`](transport::Connection) and
/// [`Connect`](transport::Connect) traits a platform must implement to
/// supply the byte-stream transport.
pub mod transport;

/// Common error type for client operations.
pub mod error;

/// RFC 3986 percent-encoding write filter.
pub mod encode;

/// HTTP request types and serialization.
pub mod request;

/// The HTTP client and response body handle.
pub mod client;

mod auth;
mod response;
mod trace;
