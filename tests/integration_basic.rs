//! End-to-end tests for the public redaction API.
//!
//! These tests exercise the integration of:
//! - path compilation and its conflict-resolution policy,
//! - the redaction walker over disposable payload clones, and
//! - the payload logger hooks around a simulated pipeline.

use std::sync::{Arc, Mutex};

use omission::{FieldPath, Invocation, Logger, Options, PathTree, PayloadLogger, omit};
use serde_json::{Value, json};

fn capturing_logger() -> (Logger, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let logger = Logger::from_fn(move |message: &Value| {
        sink.lock().unwrap().push(message.clone());
    });
    (logger, seen)
}

mod compilation {
    use super::*;

    #[test]
    fn compiling_twice_yields_identical_trees() {
        let paths = ["a.b.c", "a.b.d", "items.[].secret"];
        assert_eq!(PathTree::compile(paths), PathTree::compile(paths));
    }

    #[test]
    fn ancestor_wins_regardless_of_input_order() {
        let ancestor_first = PathTree::compile(["a", "a.b"]);
        let descendant_first = PathTree::compile(["a.b", "a"]);

        assert_eq!(ancestor_first, descendant_first);

        let mut payload = json!({"a": {"b": 1, "c": 2}});
        omit(&mut payload, &descendant_first);
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn duplicate_paths_are_idempotent() {
        assert_eq!(
            PathTree::compile(["a.b", "a.b", "a.b"]),
            PathTree::compile(["a.b"])
        );
    }

    #[test]
    fn empty_path_list_matches_nothing() {
        let tree = PathTree::compile(Vec::<FieldPath>::new());
        assert!(tree.is_empty());

        let mut payload = json!({"a": 1});
        omit(&mut payload, &tree);
        assert_eq!(payload, json!({"a": 1}));
    }

    #[test]
    fn segment_lists_and_dotted_strings_compile_alike() {
        let dotted = PathTree::compile(["body.password"]);
        let segmented = PathTree::compile([FieldPath::new(["body", "password"])]);
        assert_eq!(dotted, segmented);
    }

    #[test]
    fn forbidden_segment_paths_are_discarded() {
        let tree = PathTree::compile(["__proto__.polluted", "a.__proto__", "a.__proto__.b"]);
        assert!(tree.is_empty());

        let mut payload = json!({"__proto__": {"polluted": true}, "a": {"__proto__": 1}});
        let original = payload.clone();
        omit(&mut payload, &tree);
        assert_eq!(payload, original);
    }
}

mod walking {
    use super::*;

    #[test]
    fn deletes_nested_leaf() {
        let tree = PathTree::compile(["body.password"]);
        let mut payload = json!({"body": {"password": "x", "user": "a"}});
        omit(&mut payload, &tree);
        assert_eq!(payload, json!({"body": {"user": "a"}}));
    }

    #[test]
    fn wildcard_applies_to_every_element() {
        let tree = PathTree::compile(["items.[].secret"]);
        let mut payload = json!({"items": [{"secret": 1, "id": 2}, {"secret": 3, "id": 4}]});
        omit(&mut payload, &tree);
        assert_eq!(payload, json!({"items": [{"id": 2}, {"id": 4}]}));
    }

    #[test]
    fn absent_paths_are_noops() {
        let tree = PathTree::compile(["x.y"]);
        let mut payload = json!({"a": 1});
        omit(&mut payload, &tree);
        assert_eq!(payload, json!({"a": 1}));
    }

    #[test]
    fn redacting_twice_is_a_noop() {
        let tree = PathTree::compile(["body.password", "items.[].secret"]);
        let mut payload = json!({
            "body": {"password": "x", "user": "a"},
            "items": [{"secret": 1}]
        });

        omit(&mut payload, &tree);
        let after_first = payload.clone();
        omit(&mut payload, &tree);

        assert_eq!(payload, after_first);
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn before_logs_redacted_event() {
        let (logger, seen) = capturing_logger();
        let payload_logger = PayloadLogger::new(
            Options::default()
                .with_omit_paths(["event.body.password", "response.headers.authorization"])
                .with_logger(logger),
        )
        .unwrap();

        let invocation = Invocation::new(json!({"body": {"password": "x", "user": "a"}}));
        payload_logger.before(&invocation);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![json!({"event": {"body": {"user": "a"}}})]
        );
    }

    #[test]
    fn after_logs_redacted_response() {
        let (logger, seen) = capturing_logger();
        let payload_logger = PayloadLogger::new(
            Options::default()
                .with_omit_paths(["event.body.password", "response.headers.authorization"])
                .with_logger(logger),
        )
        .unwrap();

        let invocation = Invocation::new(json!({}))
            .with_response(json!({"headers": {"authorization": "Bearer x", "etag": "abc"}}));
        payload_logger.after(&invocation);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![json!({"response": {"headers": {"etag": "abc"}}})]
        );
    }

    #[test]
    fn original_payload_is_never_mutated() {
        let (logger, _seen) = capturing_logger();
        let payload_logger = PayloadLogger::new(
            Options::default()
                .with_omit_paths(["event.body.password"])
                .with_logger(logger),
        )
        .unwrap();

        let event = json!({"body": {"password": "x", "user": "a"}});
        let invocation = Invocation::new(event.clone());
        payload_logger.before(&invocation);

        assert_eq!(invocation.event, event);
    }
}
