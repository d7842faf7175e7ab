//! The write seam between record construction and the output stream.

use crate::record::Record;
use std::io::{Stdout, Write};
use tracing_subscriber::fmt::MakeWriter;

/// The default writer: a fresh stdout handle per record.
pub type MakeStdout = fn() -> Stdout;

/// Serializes records and writes them one line at a time.
///
/// Failures never escape: a record that cannot be serialized degrades to
/// a diagnostic fallback line on the same writer, and write errors are
/// swallowed. Logging must not crash the caller.
pub(crate) struct Printer<W> {
    make_writer: W,
}

impl Printer<MakeStdout> {
    pub(crate) fn stdout() -> Self {
        Printer::new(std::io::stdout as MakeStdout)
    }
}

impl<W> Printer<W>
where
    W: for<'a> MakeWriter<'a>,
{
    pub(crate) fn new(make_writer: W) -> Self {
        Printer { make_writer }
    }

    pub(crate) fn print(&self, record: &Record) {
        let mut buf = Vec::with_capacity(256);
        if let Err(err) = write_record(record, &mut buf) {
            buf.clear();
            let _ = writeln!(buf, "logger ERROR: cannot serialize record: {}", err);
        }
        let _ = self.make_writer.make_writer().write_all(&buf);
    }
}

fn write_record(record: &Record, buf: &mut Vec<u8>) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *buf, record)?;
    buf.push(b'\n');
    Ok(())
}
