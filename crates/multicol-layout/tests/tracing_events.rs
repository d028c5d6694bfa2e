#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Spans and events enabled:
//!   cargo test -p multicol-layout --features tracing --test tracing_events
//!
//! Without the feature only the zero-overhead check runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use multicol_layout::{
    Column, ColumnPolicy, ContentProvider, Insets, RowConfiguration, Size, size_columns,
};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A span or event with its fields, flattened to strings.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    level: tracing::Level,
    fields: HashMap<String, String>,
}

#[derive(Default, Clone)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

#[allow(dead_code)]
impl CaptureHandle {
    fn spans(&self) -> Vec<Captured> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }

    fn event_with_message(&self, message: &str) -> Option<Captured> {
        self.events()
            .into_iter()
            .find(|e| e.fields.get("message").is_some_and(|m| m == message))
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct Capture(CaptureHandle);

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            level: *attrs.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.0.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured<F: FnOnce()>(f: F) -> CaptureHandle {
    let handle = CaptureHandle::default();
    let subscriber = tracing_subscriber::registry().with(Capture(handle.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handle
}

struct Fill(f64);

impl ContentProvider for Fill {
    fn measure(&self, width_constraint: f64) -> Size {
        Size::new(width_constraint.min(self.0), 10.0)
    }

    fn reuse_key(&self) -> &str {
        "fill"
    }

    fn content_hash(&self) -> u64 {
        self.0.to_bits()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn sizing_pass_opens_a_span() {
    let handle = with_captured(|| {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(40.0), Fill(10.0)),
            Column::new(ColumnPolicy::proportional(), Fill(10.0)),
        ]);
        size_columns(&config, 120.0).unwrap();
    });

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "size_columns")
        .expect("size_columns span");
    assert_eq!(span.level, tracing::Level::DEBUG);
    assert_eq!(span.fields.get("columns").map(String::as_str), Some("2"));
    assert_eq!(
        span.fields.get("available_width").map(String::as_str),
        Some("120")
    );

    let reserved = handle
        .event_with_message("width reserved")
        .expect("reservation event");
    assert_eq!(reserved.fields.get("proportional_width").map(String::as_str), Some("80"));
}

#[test]
#[cfg(feature = "tracing")]
fn overflow_is_warned() {
    let handle = with_captured(|| {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(60.0), Fill(1.0)),
            Column::new(ColumnPolicy::fixed(60.0), Fill(1.0)),
        ]);
        assert!(size_columns(&config, 100.0).is_err());
    });

    let warning = handle
        .event_with_message("reserved width exceeds row width")
        .expect("overflow warning");
    assert_eq!(warning.level, tracing::Level::WARN);
}

#[test]
#[cfg(feature = "tracing")]
fn collapse_is_reported_at_debug() {
    let handle = with_captured(|| {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(90.0), Fill(1.0)),
            Column::new(
                ColumnPolicy::proportional().insets(Insets::symmetric(0.0, 8.0)),
                Fill(1.0),
            ),
        ]);
        size_columns(&config, 100.0).unwrap();
    });

    let event = handle
        .event_with_message("collapsing proportional column")
        .expect("collapse event");
    assert_eq!(event.level, tracing::Level::DEBUG);
    assert_eq!(event.fields.get("index").map(String::as_str), Some("1"));
}

/// Without the feature, a full pass emits nothing.
#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let handle = with_captured(|| {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(60.0), Fill(1.0)),
            Column::new(ColumnPolicy::fixed(60.0), Fill(1.0)),
        ]);
        let _ = size_columns(&config, 100.0);
    });
    assert!(handle.spans().is_empty());
    assert!(handle.events().is_empty());
}
