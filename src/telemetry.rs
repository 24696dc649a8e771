//! Application telemetry events and sinks.
//!
//! Telemetry is local only: events describe how collection runs ended so a
//! truncated listing can be diagnosed after the fact.

use std::io;

use serde::{Deserialize, Serialize};

use crate::github::pagination::{Collected, CollectionStatus};

/// Outcome of a collection run as recorded in telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordedStatus {
    /// Every page was fetched.
    Complete,
    /// The run stopped early after at least one page.
    Partial,
    /// No page could be fetched.
    Unavailable,
}

impl From<CollectionStatus> for RecordedStatus {
    fn from(value: CollectionStatus) -> Self {
        match value {
            CollectionStatus::Complete => Self::Complete,
            CollectionStatus::Partial => Self::Partial,
            CollectionStatus::Unavailable => Self::Unavailable,
        }
    }
}

/// A structured telemetry event emitted by repopulse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the end of an exhaustive collection run.
    CollectionFetched {
        /// Collection name (e.g. `stargazers`).
        collection: String,
        /// Pages fetched successfully.
        pages_fetched: u32,
        /// Items accumulated.
        item_count: usize,
        /// How the run ended.
        status: RecordedStatus,
    },
}

impl TelemetryEvent {
    /// Builds a [`TelemetryEvent::CollectionFetched`] for `collected`.
    #[must_use]
    pub fn collection_fetched<T>(collection: &str, collected: &Collected<T>) -> Self {
        Self::CollectionFetched {
            collection: collection.to_owned(),
            pages_fetched: collected.pages_fetched(),
            item_count: collected.items().len(),
            status: collected.status().into(),
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{RecordedStatus, TelemetryEvent, TelemetrySink};
    use crate::github::error::FetchError;
    use crate::github::pagination::{Collected, PageNumber, StopReason};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }

    #[rstest]
    fn recording_sink_captures_collection_events() {
        let collected = Collected::new(
            vec![1_u8, 2],
            1,
            StopReason::Failed {
                page: PageNumber::new(2).expect("page should be valid"),
                error: FetchError::Network {
                    message: "reset".to_owned(),
                },
            },
        );
        let sink = RecordingSink::default();
        sink.record(TelemetryEvent::collection_fetched("forks", &collected));

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::CollectionFetched {
                collection: "forks".to_owned(),
                pages_fetched: 1,
                item_count: 2,
                status: RecordedStatus::Partial,
            }]
        );
    }

    #[rstest]
    fn events_serialise_with_type_tag() {
        let event = TelemetryEvent::CollectionFetched {
            collection: "stargazers".to_owned(),
            pages_fetched: 3,
            item_count: 250,
            status: RecordedStatus::Complete,
        };

        let value = serde_json::to_value(&event).expect("event should serialise");
        assert_eq!(
            value,
            json!({
                "type": "collection_fetched",
                "collection": "stargazers",
                "pages_fetched": 3,
                "item_count": 250,
                "status": "complete"
            })
        );
    }
}
