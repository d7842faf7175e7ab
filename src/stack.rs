//! Call-stack capture for error-level records.
//!
//! Capture sits behind the [`StackCapturer`] trait so the logging core
//! stays portable; [`BacktraceCapturer`] is the default implementation on
//! top of the `backtrace` crate. Frames render as `file:function:line`
//! with the file and function reduced to their last path component, so
//! build-machine paths never leak into log output.

use backtrace::Backtrace;
use std::fmt;

/// Frames collected per capture before giving up on deep stacks.
const MAX_FRAMES: usize = 100;

/// Rendered when a frame's symbols cannot be resolved.
const UNRESOLVED: &str = "???";

/// One resolved entry of a captured call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Last path component of the source file.
    pub file: String,
    /// Last path component of the function name, without the symbol hash.
    pub function: String,
    /// Line number, or 0 when unknown.
    pub line: u32,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}

/// A capability for walking the active call stack.
///
/// The default is [`BacktraceCapturer`]; tests and embedders that cannot
/// introspect the runtime stack can substitute their own via
/// [`Logger::with_stack_capturer`].
///
/// [`Logger::with_stack_capturer`]: crate::Logger::with_stack_capturer
pub trait StackCapturer: Send + Sync {
    /// Collects frames starting `skip` frames above the capture point,
    /// innermost first.
    fn capture(&self, skip: usize) -> Vec<Frame>;
}

/// The default [`StackCapturer`], backed by the `backtrace` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktraceCapturer;

impl StackCapturer for BacktraceCapturer {
    fn capture(&self, skip: usize) -> Vec<Frame> {
        let backtrace = Backtrace::new();
        let mut frames = Vec::new();
        let mut remaining = skip;
        let mut past_internals = false;

        'walk: for frame in backtrace.frames() {
            for symbol in frame.symbols() {
                let name = symbol
                    .name()
                    .map(|name| name.to_string())
                    .unwrap_or_default();

                if !past_internals {
                    // The innermost frames belong to the backtrace
                    // machinery itself; `skip` is counted from the first
                    // frame after them, i.e. from `capture` itself.
                    if name.is_empty() || name.contains("backtrace::") {
                        continue;
                    }
                    past_internals = true;
                }

                if remaining > 0 {
                    remaining -= 1;
                    continue;
                }

                // Known chain-termination markers: the program entry point
                // and the runtime's startup transition frames.
                if is_runtime_transition(&name) || is_entry_point(&name) {
                    break 'walk;
                }

                frames.push(resolve(symbol, &name));
                if frames.len() == MAX_FRAMES {
                    break 'walk;
                }
            }
        }

        frames
    }
}

fn resolve(symbol: &backtrace::BacktraceSymbol, name: &str) -> Frame {
    let file = symbol
        .filename()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNRESOLVED.to_owned());

    let function = if name.is_empty() {
        UNRESOLVED.to_owned()
    } else {
        last_component(name)
    };

    Frame {
        file,
        function,
        line: symbol.lineno().unwrap_or(0),
    }
}

/// Joins frames into the record's comma-separated trace field. Never
/// empty: an unresolvable stack still yields a marker entry.
pub(crate) fn render(frames: &[Frame]) -> String {
    if frames.is_empty() {
        return UNRESOLVED.to_owned();
    }
    let entries: Vec<String> = frames.iter().map(Frame::to_string).collect();
    entries.join(", ")
}

/// Strips the trailing `::h0123abcd...` symbol hash, if present.
fn strip_hash(name: &str) -> &str {
    match name.rfind("::h") {
        Some(i) => {
            let hash = &name[i + 3..];
            if !hash.is_empty() && hash.chars().all(|c| c.is_ascii_hexdigit()) {
                &name[..i]
            } else {
                name
            }
        }
        None => name,
    }
}

fn last_component(name: &str) -> String {
    let name = strip_hash(name);
    name.rsplit("::").next().unwrap_or(name).to_owned()
}

fn is_entry_point(name: &str) -> bool {
    let name = strip_hash(name);
    name == "main" || name.ends_with("::main")
}

fn is_runtime_transition(name: &str) -> bool {
    name.contains("__rust_begin_short_backtrace")
        || name.contains("lang_start")
        || name.contains("__libc_start_main")
}
