//! Console Event Sink
//!
//! Prints one human-readable line per copy operation, the way release
//! scripts traditionally narrate their work. Skips and permission changes
//! only show up at `-v`.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{AssembleEvent, AssembleEventSink};

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
    color: bool,
    unicode: bool,
    dry_run: AtomicBool,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout(verbose: u8, color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), verbose, color, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbose: u8,
        color: bool,
        unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
            color,
            unicode,
            dry_run: AtomicBool::new(false),
        }
    }

    fn line(&self, text: impl Display) {
        if let Ok(mut writer) = self.writer.lock() {
            let prefix = if self.dry_run.load(Ordering::Relaxed) {
                "[dry-run] "
            } else {
                ""
            };
            let _ = writeln!(writer, "{}{}", prefix, text);
            let _ = writer.flush();
        }
    }

    fn dim(&self, text: String) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text
        }
    }

    fn success(&self, text: String) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text
        }
    }

    fn warn(&self, text: String) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text
        }
    }

    fn check_icon(&self) -> &'static str {
        if self.unicode {
            "✓"
        } else {
            "[OK]"
        }
    }
}

impl AssembleEventSink for ConsoleEventSink {
    fn on_event(&self, event: AssembleEvent) {
        match event {
            AssembleEvent::Started {
                source_root,
                destination,
                platform,
                dry_run,
            } => {
                self.dry_run.store(dry_run, Ordering::Relaxed);
                self.line(format!(
                    "assembling {} release: {} -> {}",
                    platform,
                    source_root.display(),
                    destination.display()
                ));
            }
            AssembleEvent::RemovingDestination { path } => {
                self.line(self.warn(format!("removing existing {}", path.display())));
            }
            AssembleEvent::DestinationCreated { path } => {
                if self.verbose > 0 {
                    self.line(self.dim(format!("created {}", path.display())));
                }
            }
            AssembleEvent::FileCopied { from, to } => {
                self.line(format!("copy {} -> {}", from.display(), to.display()));
            }
            AssembleEvent::TreeCopied { from, to } => {
                self.line(format!("copytree {} -> {}", from.display(), to.display()));
            }
            AssembleEvent::PermissionsSet { path } => {
                if self.verbose > 0 {
                    self.line(self.dim(format!("chmod 0o777 {}", path.display())));
                }
            }
            AssembleEvent::LibraryFound { path } => {
                self.line(format!("found {}", path.display()));
            }
            AssembleEvent::LibrarySkipped { path, reason } => {
                if self.verbose > 0 {
                    self.line(self.dim(format!(
                        "skip {} ({})",
                        path.display(),
                        reason.as_str()
                    )));
                }
            }
            AssembleEvent::LibraryScanFinished {
                dir,
                dir_present,
                found,
            } => {
                if !dir_present {
                    if self.verbose > 0 {
                        self.line(self.dim(format!("no library directory at {}", dir.display())));
                    }
                } else if found == 0 {
                    self.line(format!("no additional libraries found in {}", dir.display()));
                } else {
                    self.line(format!(
                        "{} additional librar{} found in {}",
                        found,
                        if found == 1 { "y" } else { "ies" },
                        dir.display()
                    ));
                }
            }
            AssembleEvent::Completed {
                files_copied,
                trees_copied,
                libraries_found,
            } => {
                self.line(self.success(format!(
                    "{} Release assembled: {} files, {} trees, {} extra libraries",
                    self.check_icon(),
                    files_copied,
                    trees_copied,
                    libraries_found
                )));
            }
        }
    }
}
