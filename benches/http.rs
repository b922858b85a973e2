use criterion::{Criterion, Throughput};
use libhttpc::client::{Client, DEFAULT_PORT};
use libhttpc::encode::{EncodedWriter, Mode};
use libhttpc::error::Error;
use libhttpc::transport::{Close, Connect, Connection, Read, Write};
use rand::Rng;

const PAYLOAD_LEN: usize = 1024;

/// Discards writes; keeps the encoder honest without measuring a buffer.
struct Sink;

impl Write for Sink {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct MockConnection {
    response: &'static [u8],
    pos: usize,
}

impl Read for MockConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.pos == self.response.len() {
            return Ok(0);
        }
        buf[0] = self.response[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

impl Write for MockConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for MockConnection {}

struct MockNetwork;

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
        Ok(MockConnection {
            response: b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n",
            pos: 0,
        })
    }
}

fn random_payload() -> Vec<u8> {
    let mut payload = vec![0u8; PAYLOAD_LEN];
    rand::thread_rng().fill(&mut payload[..]);
    payload
}

fn bench_mode(c: &mut Criterion, name: &str, mode: Mode) {
    let payload = random_payload();
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function(name, |b| {
        b.iter(|| {
            let mut sink = Sink;
            let mut writer = EncodedWriter::new(&mut sink, false);
            writer.set_mode(mode);
            writer.write_all(&payload).expect("Failed to encode");
        })
    });
    group.finish();
}

pub fn bench_encode_component(c: &mut Criterion) {
    bench_mode(c, "encode_component", Mode::Component);
}

pub fn bench_encode_path(c: &mut Criterion) {
    bench_mode(c, "encode_path", Mode::Path);
}

pub fn bench_get_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_exchange");
    group.bench_function("get_exchange", |b| {
        b.iter_batched_ref(
            || Client::new(MockNetwork, "bench.local", DEFAULT_PORT).expect("Failed to build"),
            |client| {
                let body = client.get("/bench", &[], &[]).expect("Failed to request");
                body.close().expect("Failed to close");
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}
