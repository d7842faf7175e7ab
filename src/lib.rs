//! Structured JSON logging with tags that propagate through call-chain
//! contexts.
//!
//! # Overview
//!
//! `ctxlog` writes one JSON object per log line and automatically carries
//! key/value "tags" down a call chain. A caller attaches tags to a
//! [`Logger`]; each attachment returns a new [`Context`] that can be
//! passed to callees, and any callee can reconstruct a logger from the
//! context it received, inheriting every tag its ancestors attached —
//! without a logger argument threaded through every call.
//!
//! Propagation is strictly one-directional: a callee's additions are
//! visible to its own subtree, never to its caller.
//!
//! # Getting started
//!
//! ```
//! use ctxlog::{Context, Logger};
//!
//! fn main() {
//!     let mut logger = Logger::new();
//!     logger.info("first message");
//!
//!     let ctx = logger.with(&Context::new(), "user_id", "123");
//!     logger.info("second message");
//!     stuff(&ctx);
//! }
//!
//! fn stuff(ctx: &Context) {
//!     let mut logger = Logger::from_context(ctx);
//!     let ctx = logger.with(ctx, "function", "stuff");
//!     logger.info("thing message");
//!     crash(&ctx);
//! }
//!
//! fn crash(ctx: &Context) {
//!     let logger = Logger::from_context(ctx);
//!     logger.error("broken");
//! }
//! ```
//! ```log
//! {"level":"INFO","event_time":"2024-05-01T12:30:00Z","message":"first message"}
//! {"level":"INFO","event_time":"2024-05-01T12:30:00Z","message":"second message","tags":{"user_id":"123"}}
//! {"level":"INFO","event_time":"2024-05-01T12:30:00Z","message":"thing message","tags":{"function":"stuff","user_id":"123"}}
//! {"level":"ERROR","event_time":"2024-05-01T12:30:00Z","message":"broken","trace":"main.rs:crash:38, main.rs:stuff:34, ...","tags":{"function":"stuff","user_id":"123"}}
//! ```
//!
//! # Levels
//!
//! Three levels are emitted: `DEBUG`, `INFO`, and `ERROR`. Info and error
//! records are always written; debug records are written only while the
//! process-wide debug flag is on. The flag is seeded from `DEBUG=TRUE` in
//! the environment and can be flipped at runtime with [`set_debug`].
//! Error records additionally carry a `trace` field with a
//! comma-separated snapshot of the active call stack (see [`stack`]).
//!
//! Formatted variants of the level methods are provided as macros:
//! [`debugf!`], [`infof!`], and [`errorf!`].
//!
//! # Failure transparency
//!
//! Logging never returns or raises an error. A record that cannot be
//! serialized degrades to a diagnostic fallback line, write errors are
//! swallowed, and looking up an absent tag is an ordinary result
//! ([`Logger::tag`] returns `None`, [`Logger::value_string`] returns
//! `""`).

pub mod context;
pub mod stack;
pub mod value;
#[macro_use]
mod macros;
mod flag;
mod logger;
mod printer;
mod record;
mod ser;

pub use crate::context::Context;
pub use crate::flag::{debug_enabled, set_debug};
pub use crate::logger::Logger;
pub use crate::printer::MakeStdout;
pub use crate::stack::{BacktraceCapturer, Frame, StackCapturer};
pub use crate::value::Value;
