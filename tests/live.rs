//! Tests against a live HTTP endpoint. Off by default; run with
//! `cargo test -- --ignored` on a machine with network access. The target
//! host can be overridden with `TEST_HTTP_HOST` in the environment.

use dotenvy::dotenv;
use libhttpc::client::{Client, DEFAULT_PORT};
use libhttpc::error::Error;
use libhttpc::request::{Header, Param};
use libhttpc::transport::{Close, Connect, Connection, Read, Write};
use std::env;
use std::io::{Read as StdRead, Write as StdWrite};
use std::net::TcpStream;

struct NetConnection {
    stream: TcpStream,
}

impl Read for NetConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(|_| Error::ReadError)
    }
}

impl Write for NetConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for NetConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        self.stream
            .shutdown(std::net::Shutdown::Both)
            .map_err(|_| Error::ConnectionClosed)
    }
}

impl Connection for NetConnection {}

struct TcpNetwork;

impl Connect for TcpNetwork {
    type Connection = NetConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let stream = TcpStream::connect(remote).map_err(|_| Error::ConnectionFailed)?;
        stream
            .set_read_timeout(Some(std::time::Duration::from_secs(5)))
            .map_err(|_| Error::ConnectionFailed)?;
        Ok(NetConnection { stream })
    }
}

fn test_host() -> String {
    dotenv().ok();
    env::var("TEST_HTTP_HOST").unwrap_or("httpbin.org".to_string())
}

#[test]
#[ignore = "requires network access"]
fn test_live_get() {
    let host = test_host();
    let mut client = Client::new(TcpNetwork, host.as_str(), DEFAULT_PORT).unwrap();

    let params = [Param {
        name: "probe",
        value: Some("hello world"),
    }];
    let mut body = client.get("/get", &params, &[]).unwrap();
    assert_eq!(body.status(), 200);

    let mut collected = Vec::new();
    let mut buf = [0u8; 256];
    loop {
        match body.read(&mut buf).unwrap() {
            0 => break,
            n => collected.extend_from_slice(&buf[..n]),
        }
    }
    body.close().unwrap();

    // httpbin echoes the decoded query arguments back in the body.
    let text = String::from_utf8_lossy(&collected);
    assert!(text.contains("hello world"));
}

#[test]
#[ignore = "requires network access"]
fn test_live_post() {
    let host = test_host();
    let mut client = Client::new(TcpNetwork, host.as_str(), DEFAULT_PORT).unwrap();

    let headers = [Header {
        name: "Content-Type",
        value: Some("application/json"),
    }];
    let body = client
        .post("/post", &[], br#"{"hello":"world"}"#, &headers)
        .unwrap();
    assert_eq!(body.status(), 200);
    assert_eq!(client.last_status(), Some(200));
    body.close().unwrap();
}
