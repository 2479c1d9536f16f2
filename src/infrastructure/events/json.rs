//! JSON Event Sink
//!
//! Outputs assemble events as NDJSON for CI/automation consumption.

use crate::domain::ports::{AssembleEvent, AssembleEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON value for a single event
pub fn event_to_json(event: &AssembleEvent) -> serde_json::Value {
    match event {
        AssembleEvent::Started {
            source_root,
            destination,
            platform,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "assemble",
            "source_root": source_root.display().to_string(),
            "destination": destination.display().to_string(),
            "platform": platform.name(),
            "dry_run": dry_run,
        }),

        AssembleEvent::RemovingDestination { path } => serde_json::json!({
            "event": "destination_removed",
            "command": "assemble",
            "path": path.display().to_string(),
        }),

        AssembleEvent::DestinationCreated { path } => serde_json::json!({
            "event": "destination_created",
            "command": "assemble",
            "path": path.display().to_string(),
        }),

        AssembleEvent::FileCopied { from, to } => serde_json::json!({
            "event": "copy",
            "command": "assemble",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),

        AssembleEvent::TreeCopied { from, to } => serde_json::json!({
            "event": "copytree",
            "command": "assemble",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),

        AssembleEvent::PermissionsSet { path } => serde_json::json!({
            "event": "chmod",
            "command": "assemble",
            "path": path.display().to_string(),
            "mode": "0o777",
        }),

        AssembleEvent::LibraryFound { path } => serde_json::json!({
            "event": "library_found",
            "command": "assemble",
            "path": path.display().to_string(),
        }),

        AssembleEvent::LibrarySkipped { path, reason } => serde_json::json!({
            "event": "library_skipped",
            "command": "assemble",
            "path": path.display().to_string(),
            "reason": reason.as_str(),
        }),

        AssembleEvent::LibraryScanFinished {
            dir,
            dir_present,
            found,
        } => serde_json::json!({
            "event": "library_scan",
            "command": "assemble",
            "dir": dir.display().to_string(),
            "dir_present": dir_present,
            "found": found,
        }),

        AssembleEvent::Completed {
            files_copied,
            trees_copied,
            libraries_found,
        } => serde_json::json!({
            "event": "complete",
            "command": "assemble",
            "status": "success",
            "files": files_copied,
            "trees": trees_copied,
            "libraries": libraries_found,
        }),
    }
}

impl AssembleEventSink for JsonEventSink {
    fn on_event(&self, event: AssembleEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SkipReason;
    use crate::domain::value_objects::Platform;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(AssembleEvent::Started {
            source_root: PathBuf::from("build_out"),
            destination: PathBuf::from("ogm-release"),
            platform: Platform::Windows,
            dry_run: false,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"start\""));
        assert!(output.contains("\"platform\":\"windows\""));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn json_sink_outputs_skip_reason() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(AssembleEvent::LibrarySkipped {
            path: PathBuf::from("libs/gig.so"),
            reason: SkipReason::PrimaryLibrary,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["event"], "library_skipped");
        assert_eq!(value["reason"], "primary library");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(AssembleEvent::Completed {
            files_copied: 17,
            trees_copied: 1,
            libraries_found: 2,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"complete\""));
        assert!(output.contains("\"status\":\"success\""));
        assert!(output.contains("\"files\":17"));
    }
}
