//! The end-to-end walkthrough: a caller tags a context, passes it down a
//! call tree, and a deeply nested callee reports an error with the full
//! tag set and a stack trace.

use ctxlog::{Context, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8(bytes.clone())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn logger(&self) -> Logger<impl for<'a> tracing_subscriber::fmt::MakeWriter<'a>> {
        let writer = self.clone();
        Logger::with_writer(move || writer.clone())
    }

    fn logger_from(
        &self,
        ctx: &Context,
    ) -> Logger<impl for<'a> tracing_subscriber::fmt::MakeWriter<'a>> {
        let writer = self.clone();
        Logger::from_context_with_writer(ctx, move || writer.clone())
    }
}

fn stuff(sink: &Capture, ctx: &Context) {
    let mut logger = sink.logger_from(ctx);
    let ctx = logger.with(ctx, "function", "stuff");
    logger.info("thing message");
    assert_eq!(logger.value_string("user_id"), "123");
    crash(sink, &ctx);
}

fn crash(sink: &Capture, ctx: &Context) {
    let logger = sink.logger_from(ctx);
    logger.error("broken");
}

#[test]
fn walkthrough() {
    let sink = Capture::default();

    let mut logger = sink.logger();
    logger.info("first message");
    let ctx = logger.with(&Context::new(), "user_id", "123");
    logger.info("second message");
    stuff(&sink, &ctx);

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0]["level"], "INFO");
    assert_eq!(lines[0]["message"], "first message");
    assert!(!lines[0].as_object().unwrap().contains_key("tags"));

    assert_eq!(lines[1]["message"], "second message");
    assert_eq!(lines[1]["tags"], serde_json::json!({ "user_id": "123" }));

    assert_eq!(lines[2]["message"], "thing message");
    assert_eq!(
        lines[2]["tags"],
        serde_json::json!({ "user_id": "123", "function": "stuff" }),
    );

    assert_eq!(lines[3]["level"], "ERROR");
    assert_eq!(lines[3]["message"], "broken");
    assert_eq!(
        lines[3]["tags"],
        serde_json::json!({ "user_id": "123", "function": "stuff" }),
    );
    let trace = lines[3]["trace"].as_str().unwrap();
    assert!(!trace.is_empty());
    // The callee chain shows up innermost-first.
    assert!(trace.contains("crash"));
}
