//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `SlogSink` forwards messages as nested JSON values, not flat strings
//! - redaction has already happened by the time slog sees the message
//! - `Logger::from(slog::Logger)` wires the adapter into the middleware

#![cfg(feature = "slog")]

use std::sync::{Arc, Mutex};

use omission::{Invocation, Logger, Options, PayloadLogger};
use serde_json::{Value as JsonValue, json};

// A test drain that captures serialized key-value pairs from every record.
struct CapturingDrain {
    captured: Arc<Mutex<Vec<(String, JsonValue)>>>,
}

struct CapturingSerializer {
    captured: Vec<(String, JsonValue)>,
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &std::fmt::Arguments<'_>) -> slog::Result {
        self.captured
            .push((key.into(), JsonValue::String(val.to_string())));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured.push((key.into(), json));
        Ok(())
    }
}

impl slog::Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<(), slog::Never> {
        use slog::KV;

        let mut serializer = CapturingSerializer {
            captured: Vec::new(),
        };
        record.kv().serialize(record, &mut serializer).ok();
        values.serialize(record, &mut serializer).ok();
        self.captured.lock().unwrap().extend(serializer.captured);
        Ok(())
    }
}

fn capturing_slog_logger() -> (slog::Logger, Arc<Mutex<Vec<(String, JsonValue)>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let drain = CapturingDrain {
        captured: Arc::clone(&captured),
    };
    (slog::Logger::root(drain, slog::o!()), captured)
}

fn message_values(captured: &Arc<Mutex<Vec<(String, JsonValue)>>>) -> Vec<JsonValue> {
    captured
        .lock()
        .unwrap()
        .iter()
        .filter(|(key, _)| key == "message")
        .map(|(_, value)| value.clone())
        .collect()
}

mod sink_adapter {
    use super::*;

    #[test]
    fn emits_redacted_messages_as_nested_json() {
        let (slog_logger, captured) = capturing_slog_logger();
        let payload_logger = PayloadLogger::new(
            Options::default()
                .with_omit_paths(["event.body.password"])
                .with_logger(Logger::from(slog_logger)),
        )
        .unwrap();

        let invocation = Invocation::new(json!({"body": {"password": "x", "user": "a"}}));
        payload_logger.before(&invocation);

        assert_eq!(
            message_values(&captured),
            vec![json!({"event": {"body": {"user": "a"}}})]
        );
    }

    #[test]
    fn emits_one_record_per_hook() {
        let (slog_logger, captured) = capturing_slog_logger();
        let payload_logger = PayloadLogger::new(
            Options::default().with_logger(Logger::from(slog_logger)),
        )
        .unwrap();

        let invocation =
            Invocation::new(json!({"a": 1})).with_response(json!({"statusCode": 200}));
        payload_logger.before(&invocation);
        payload_logger.after(&invocation);

        assert_eq!(
            message_values(&captured),
            vec![
                json!({"event": {"a": 1}}),
                json!({"response": {"statusCode": 200}})
            ]
        );
    }
}
