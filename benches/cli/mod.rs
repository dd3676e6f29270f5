use std::hint::black_box;

use criterion::{Criterion, Throughput};

use libcli::cli::{Command, CommandInterface, DispatchStatus};
use libcli::stream::{Read, Stream, Write};

const LINE: &[u8] = b"cfg write \"boot delay\" 250 alpha beta gamma delta\r";

/// Replays one prepared line over and over, discarding handler output.
struct ReplayStream {
    data: &'static [u8],
    pos: usize,
}

impl ReplayStream {
    fn new(data: &'static [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl Read for ReplayStream {
    fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }
}

impl Write for ReplayStream {
    type Error = ();

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Stream for ReplayStream {}

fn sink(
    argc: usize,
    argv: &[&str],
    _stream: &mut ReplayStream,
    _cli: &CommandInterface<'_, ReplayStream, ()>,
    _data: &(),
) -> bool {
    black_box(argc);
    black_box(argv.first().copied());
    true
}

static COMMANDS: [Command<ReplayStream, ()>; 1] = [Command {
    name: "cfg",
    handler: sink,
    data: (),
}];

pub fn bench_process_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("cli");
    group.throughput(Throughput::Bytes(LINE.len() as u64));

    let mut buf = [0u8; 128];
    let mut cli: CommandInterface<'_, ReplayStream, ()> =
        CommandInterface::new(&mut buf, &[]).unwrap();
    let mut stream = ReplayStream::new(LINE);

    group.bench_function("process_input", |b| {
        b.iter(|| {
            stream.rewind();
            cli.process_input(&mut stream);
            // Drain the pending line so the next iteration parses afresh.
            cli.execute_input(&mut stream)
        })
    });
    group.finish();
}

pub fn bench_dispatch_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("cli");
    group.throughput(Throughput::Bytes(LINE.len() as u64));

    let mut buf = [0u8; 128];
    let mut cli = CommandInterface::new(&mut buf, &COMMANDS).unwrap();
    let mut stream = ReplayStream::new(LINE);

    group.bench_function("dispatch_round_trip", |b| {
        b.iter(|| {
            stream.rewind();
            cli.process_input(&mut stream);
            assert_eq!(cli.execute_input(&mut stream), DispatchStatus::Executed);
        })
    });
    group.finish();
}
