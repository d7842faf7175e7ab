//! Tag propagation through context chains.

use ctxlog::{Context, Logger, Value};

#[test]
fn reconstruction_recovers_all_ancestor_tags() {
    let mut logger = Logger::new();
    let ctx = Context::new();
    let ctx = logger.with(&ctx, "request_id", "r-1");
    let ctx = logger.with(&ctx, "user_id", "123");

    let downstream = Logger::from_context(&ctx);
    assert_eq!(downstream.value_string("request_id"), "r-1");
    assert_eq!(downstream.value_string("user_id"), "123");
}

#[test]
fn later_attachment_wins_key_collisions() {
    let mut logger = Logger::new();
    let ctx = logger.with(&Context::new(), "user_id", "123");
    let ctx = logger.with(&ctx, "user_id", "456");

    assert_eq!(logger.value_string("user_id"), "456");

    let downstream = Logger::from_context(&ctx);
    assert_eq!(downstream.value_string("user_id"), "456");
}

#[test]
fn callee_tags_do_not_leak_upward() {
    let mut caller = Logger::new();
    let ctx = caller.with(&Context::new(), "user_id", "123");

    // Callee extends its own context and reconstructs with both tags.
    let mut callee = Logger::from_context(&ctx);
    let callee_ctx = callee.with(&ctx, "function", "stuff");
    let reconstructed = Logger::from_context(&callee_ctx);
    assert_eq!(reconstructed.value_string("user_id"), "123");
    assert_eq!(reconstructed.value_string("function"), "stuff");

    // The caller's logger and context are untouched.
    assert_eq!(caller.value_string("user_id"), "123");
    assert_eq!(caller.value_string("function"), "");
    assert!(ctx.get("function").is_none());
}

#[test]
fn reconstruction_is_idempotent_and_independent() {
    let mut logger = Logger::new();
    let ctx = logger.with(&Context::new(), "user_id", "123");

    let mut first = Logger::from_context(&ctx);
    let second = Logger::from_context(&ctx);
    assert_eq!(first.value_string("user_id"), second.value_string("user_id"));

    // Mutating one reconstruction affects neither the other nor the original.
    first.with(&ctx, "extra", "x");
    assert_eq!(second.value_string("extra"), "");
    assert_eq!(logger.value_string("extra"), "");
}

#[test]
fn with_reasserts_the_whole_store_into_the_context() {
    // Tags attached through one context travel through a later `with` on
    // a different context: the logger's store is the source of truth.
    let mut logger = Logger::new();
    let _first = logger.with(&Context::new(), "user_id", "123");
    let second = logger.with(&Context::new(), "function", "stuff");

    let downstream = Logger::from_context(&second);
    assert_eq!(downstream.value_string("user_id"), "123");
    assert_eq!(downstream.value_string("function"), "stuff");
}

#[test]
fn empty_context_yields_empty_logger() {
    let logger = Logger::from_context(&Context::new());
    assert_eq!(logger.value_string("anything"), "");
    assert!(logger.tag("anything").is_none());
}

#[test]
fn value_string_conflates_absent_and_empty() {
    let mut logger = Logger::new();
    logger.with(&Context::new(), "empty", "");

    assert_eq!(logger.value_string("empty"), "");
    assert_eq!(logger.value_string("missing"), "");

    // `tag` is the accessor that keeps the distinction.
    assert_eq!(logger.tag("empty"), Some(&Value::from("")));
    assert_eq!(logger.tag("empty").and_then(Value::as_str), Some(""));
    assert_eq!(logger.tag("missing"), None);
}

#[test]
fn context_is_shareable_across_threads() {
    let mut logger = Logger::new();
    let ctx = logger.with(&Context::new(), "user_id", "123");

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let mut task_logger = Logger::from_context(&ctx);
                task_logger.with(&ctx, "task", i as i64);
                task_logger.value_string("user_id")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "123");
    }
    // Per-task attachments never reached the shared context.
    assert!(ctx.get("task").is_none());
}
