//! The logger and its tag store.

use crate::context::Context;
use crate::flag;
use crate::printer::{MakeStdout, Printer};
use crate::record::{Level, Record};
use crate::stack::{self, BacktraceCapturer, StackCapturer};
use crate::value::Value;
use chrono::Utc;
use std::collections::BTreeMap;
use tracing_subscriber::fmt::MakeWriter;

/// Frames between the capture point and the caller of a level method:
/// `capture`, `log`, and the level method itself.
const CAPTURE_SKIP: usize = 3;

/// A structured logger owning a set of tags.
///
/// Every record a logger emits carries its current tag snapshot. Tags are
/// attached with [`with`], which also returns a new [`Context`] for
/// passing down the call tree; any callee can recover a logger carrying
/// all tags attached so far with [`from_context`].
///
/// A logger is cheap to construct and is not meant to be shared between
/// tasks: share the context and reconstruct per task instead. Attaching
/// tags takes `&mut self`, so the borrow checker already rules out
/// concurrent attachment on one instance.
///
/// # Examples
///
/// ```
/// use ctxlog::{Context, Logger};
///
/// let mut logger = Logger::new();
/// logger.info("first message");
///
/// let ctx = logger.with(&Context::new(), "user_id", "123");
/// logger.info("second message"); // carries tags {"user_id": "123"}
///
/// let downstream = Logger::from_context(&ctx);
/// assert_eq!(downstream.value_string("user_id"), "123");
/// ```
///
/// [`with`]: Logger::with
/// [`from_context`]: Logger::from_context
pub struct Logger<W = MakeStdout> {
    tags: BTreeMap<String, Value>,
    printer: Printer<W>,
    capturer: Box<dyn StackCapturer>,
}

impl Logger {
    /// Returns a logger with an empty tag store, writing to stdout.
    pub fn new() -> Self {
        Logger {
            tags: BTreeMap::new(),
            printer: Printer::stdout(),
            capturer: Box::new(BacktraceCapturer),
        }
    }

    /// Returns a new logger populated with every tag attached along the
    /// chain from the context's root, later attachments winning key
    /// collisions. An empty context yields an empty logger.
    ///
    /// The reconstruction is independent: further [`with`] calls on it
    /// affect neither the originating logger nor sibling reconstructions.
    ///
    /// [`with`]: Logger::with
    pub fn from_context(ctx: &Context) -> Self {
        let mut logger = Logger::new();
        logger.adopt(ctx);
        logger
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

impl<W> Logger<W>
where
    W: for<'a> MakeWriter<'a>,
{
    /// Returns an empty logger writing through `make_writer` instead of
    /// stdout.
    pub fn with_writer(make_writer: W) -> Self {
        Logger {
            tags: BTreeMap::new(),
            printer: Printer::new(make_writer),
            capturer: Box::new(BacktraceCapturer),
        }
    }

    /// Like [`Logger::from_context`], writing through `make_writer`.
    pub fn from_context_with_writer(ctx: &Context, make_writer: W) -> Self {
        let mut logger = Logger::with_writer(make_writer);
        logger.adopt(ctx);
        logger
    }

    /// Replaces the stack capturer used for error records.
    pub fn with_stack_capturer(mut self, capturer: impl StackCapturer + 'static) -> Self {
        self.capturer = Box::new(capturer);
        self
    }

    /// Sets `key` to `value` in this logger's own store, overwriting any
    /// previous value, and returns a child of `ctx` carrying every
    /// binding currently in the store.
    ///
    /// Re-asserting the whole store means the returned context is the
    /// sole channel a downstream [`Logger::from_context`] needs: tags
    /// this logger attached through *other* contexts travel too.
    pub fn with(&mut self, ctx: &Context, key: impl Into<String>, value: impl Into<Value>) -> Context {
        self.tags.insert(key.into(), value.into());
        let mut next = ctx.clone();
        for (key, value) in &self.tags {
            next = next.with_tag(key.as_str(), value);
        }
        next
    }

    /// Returns the value stored under `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&Value> {
        self.tags.get(key)
    }

    /// Returns the string form of the value stored under `key`, or `""`
    /// if absent.
    ///
    /// A key set to an empty string is indistinguishable from an absent
    /// one here; use [`Logger::tag`] when the difference matters.
    pub fn value_string(&self, key: &str) -> String {
        match self.tags.get(key) {
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }

    /// Emits a debug-level record, or does nothing if the process-wide
    /// debug flag is off.
    pub fn debug(&self, message: &str) {
        if !flag::debug_enabled() {
            return;
        }
        self.log(Level::Debug, message);
    }

    /// Emits an info-level record.
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Emits an error-level record, capturing a trace of the active call
    /// stack at the call site.
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn log(&self, level: Level, message: &str) {
        let trace = match level {
            Level::Error => Some(stack::render(&self.capturer.capture(CAPTURE_SKIP))),
            _ => None,
        };
        let record = Record {
            level,
            event_time: Utc::now(),
            message,
            trace,
            tags: &self.tags,
        };
        self.printer.print(&record);
    }

    fn adopt(&mut self, ctx: &Context) {
        for (key, value) in ctx.tags() {
            self.tags.insert(key.to_owned(), value.clone());
        }
    }
}
