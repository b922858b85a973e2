//! HTTP request types and serialization.

use core::fmt::Write as _;
use heapless::String;

use crate::encode::{EncodedWriter, Mode};
use crate::error::Error;
use crate::transport::Write;

/// HTTP request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// A single URI query parameter.
///
/// Parameters are serialized in input order. A parameter without a value is
/// written as `name=` with an empty value. Names and values are
/// percent-encoded on the wire, so they may contain any bytes, including
/// literal `&` and `=`.
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    /// Parameter name.
    pub name: &'a str,
    /// Parameter value, if any.
    pub value: Option<&'a str>,
}

/// An extra request header.
///
/// Headers are serialized in input order after the fixed header set. A
/// header without a value is skipped entirely. Names and values are written
/// verbatim; the caller is responsible for keeping them token-clean.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    /// Header name.
    pub name: &'a str,
    /// Header value, or `None` to suppress the header.
    pub value: Option<&'a str>,
}

/// Serialize one complete request through the encoding filter.
///
/// Emits the request line with the percent-encoded path and query, the
/// fixed `Host`/`Accept`/`Connection: close` headers, the caller's extra
/// headers, the stored credential and finally the `Content-Length`-prefixed
/// body (or the bare blank line when there is none), then flushes.
pub(crate) fn write_request<W: Write>(
    writer: &mut EncodedWriter<'_, W>,
    method: Method,
    path: &str,
    params: &[Param<'_>],
    headers: &[Header<'_>],
    host: &str,
    credential: Option<&str>,
    body: Option<&[u8]>,
) -> Result<(), Error> {
    writer.write_all(method.as_str().as_bytes())?;
    writer.write_all(b" ")?;

    writer.set_mode(Mode::Path);
    writer.write_all(path.as_bytes())?;

    if !params.is_empty() {
        writer.set_mode(Mode::Off);
        writer.write_all(b"?")?;
        for (i, param) in params.iter().enumerate() {
            writer.set_mode(Mode::Off);
            if i > 0 {
                writer.write_all(b"&")?;
            }
            writer.set_mode(Mode::Component);
            writer.write_all(param.name.as_bytes())?;
            writer.set_mode(Mode::Off);
            writer.write_all(b"=")?;
            if let Some(value) = param.value {
                writer.set_mode(Mode::Component);
                writer.write_all(value.as_bytes())?;
            }
        }
    }

    writer.set_mode(Mode::Off);
    writer.write_all(b" HTTP/1.1\r\n")?;
    writer.write_all(b"Host: ")?;
    writer.write_all(host.as_bytes())?;
    writer.write_all(b"\r\n")?;
    writer.write_all(b"Accept: */*\r\n")?;
    writer.write_all(b"Connection: close\r\n")?;

    for header in headers {
        if let Some(value) = header.value {
            writer.write_all(header.name.as_bytes())?;
            writer.write_all(b": ")?;
            writer.write_all(value.as_bytes())?;
            writer.write_all(b"\r\n")?;
        }
    }

    if let Some(credential) = credential {
        writer.write_all(b"Authorization: Basic ")?;
        writer.write_all(credential.as_bytes())?;
        writer.write_all(b"\r\n")?;
    }

    // The body is written unencoded, so Content-Length is both the input
    // and the on-wire byte count.
    if let Some(body) = body {
        let mut len_str: String<10> = String::new();
        write!(len_str, "{}", body.len()).unwrap();

        writer.write_all(b"Content-Length: ")?;
        writer.write_all(len_str.as_bytes())?;
        writer.write_all(b"\r\n\r\n")?;
        writer.write_all(body)?;
    } else {
        writer.write_all(b"\r\n")?;
    }

    writer.flush()
}
