//! Property-based tests for gog using proptest

use gog::core::placeholder::substitute;
use gog::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::All),
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
        Just(Level::Off),
    ]
}

fn recordable_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
    ]
}

struct BodyFormatter;

impl Formatter for BodyFormatter {
    fn format(&self, _level: Level, _level_name: &str, record: &Record) -> Result<Vec<u8>> {
        Ok(record.body().as_bytes().to_vec())
    }
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Writer for Capture {
    fn write(&mut self, _record: &Record, data: &[u8]) -> Result<usize> {
        self.0.lock().push(String::from_utf8_lossy(data).into_owned());
        Ok(data.len())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

fn capturing_logger(gate: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(gate)
        .config(
            Config::new()
                .with_formatter(BodyFormatter)
                .with_writer(capture.clone()),
        )
        .build();
    (logger, capture)
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Names of recordable levels parse back to the same level
    #[test]
    fn test_level_name_roundtrip(level in recordable_level(), lower in any::<bool>()) {
        let name = if lower {
            level.name().to_lowercase()
        } else {
            level.name().to_string()
        };
        prop_assert_eq!(name.parse::<Level>(), Ok(level));
    }

    /// Lossy parsing never fails and falls back to All
    #[test]
    fn test_parse_lossy_total(input in "[a-z]{0,12}") {
        let level = Level::parse_lossy(&input);
        match input.parse::<Level>() {
            Ok(parsed) => prop_assert_eq!(level, parsed),
            Err(_) => prop_assert_eq!(level, Level::All),
        }
    }
}

// ============================================================================
// Gating Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A record is written iff its level is at or above the gate and the
    /// gate is not Off
    #[test]
    fn test_gate_admits_iff_at_or_above(gate in any_level(), level in recordable_level()) {
        let (logger, capture) = capturing_logger(gate);
        logger.emit("", level, &["x".into()]);
        logger.emitf("", level, "y", &[]);

        let expected = gate != Level::Off && level >= gate;
        prop_assert_eq!(logger.enabled(level), expected);
        prop_assert_eq!(capture.0.lock().len(), if expected { 2 } else { 0 });
    }

    /// The body is the concatenation of the values' text
    #[test]
    fn test_values_join_without_separator(parts in prop::collection::vec(".{0,8}", 1..6)) {
        let (logger, capture) = capturing_logger(Level::All);
        let values: Vec<Value> = parts.iter().map(Value::from).collect();
        logger.info(&values);

        prop_assert_eq!(capture.0.lock().clone(), vec![parts.concat()]);
    }
}

// ============================================================================
// Substitution Tests
// ============================================================================

proptest! {
    /// Text without placeholders passes through unchanged
    #[test]
    fn test_substitute_plain_text(text in "[^{}]*", arg in any::<i64>()) {
        prop_assert_eq!(substitute(&text, &[&arg]), text);
    }

    /// Each placeholder takes one argument; missing ones stay verbatim
    #[test]
    fn test_substitute_counts(slots in 0usize..6, args in prop::collection::vec(0u32..1000, 0..6)) {
        let format = vec!["{}"; slots].join("|");
        let display: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();

        let expected: Vec<String> = (0..slots)
            .map(|i| args.get(i).map_or_else(|| "{}".to_string(), |a| a.to_string()))
            .collect();
        prop_assert_eq!(substitute(&format, &display), expected.join("|"));
    }
}

// ============================================================================
// Robustness Tests
// ============================================================================

proptest! {
    /// Arbitrary tags, bodies and levels never panic any formatter
    #[test]
    fn test_formatters_no_panic(
        tag in ".*",
        body in ".*",
        level in any_level(),
    ) {
        let record = Record::new(tag, level, body);
        let name = level.name();
        prop_assert!(TextFormatter::new().format(level, name, &record).is_ok());
        prop_assert!(JsonFormatter::new().format(level, name, &record).is_ok());
        prop_assert!(JsonFormatter::pretty().format(level, name, &record).is_ok());
    }

    /// JSON output parses back to the record's fields
    #[test]
    fn test_json_preserves_fields(tag in ".*", body in ".*", level in recordable_level()) {
        let record = Record::new(tag.clone(), level, body.clone());
        let bytes = JsonFormatter::new().format(level, level.name(), &record).unwrap();
        let line: gog::formatters::JsonLine = serde_json::from_slice(&bytes).unwrap();

        prop_assert_eq!(line.tag, tag);
        prop_assert_eq!(line.message, body);
        prop_assert_eq!(line.level, level.name());
    }
}
