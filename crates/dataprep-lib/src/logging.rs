//! Console logging: every event is printed to stdout as `[LEVEL] message`.

use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Event format without timestamps or targets, for human-facing output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "[{}] ", level_label(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` directives take precedence
/// over `log_level`.
pub fn init_console_logging(log_level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .event_format(ConsoleFormat)
        .with_writer(std::io::stdout)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::{Mismatch, render_mismatch_report};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(&Level::WARN), "WARNING");
        assert_eq!(level_label(&Level::INFO), "INFO");
        assert_eq!(level_label(&Level::ERROR), "ERROR");
    }

    #[test]
    fn test_mismatch_report_is_printed_under_error_header() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(ConsoleFormat)
            .with_writer(captured.clone())
            .finish();
        let mismatches = vec![Mismatch {
            file_name: "reviews.csv".to_string(),
            expected: Some("cc".to_string()),
            actual: None,
        }];

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("{}", render_mismatch_report(&mismatches));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "[ERROR] Checksum validation failed:\n  - reviews.csv: expected cc, got none\n"
        );
    }

    #[test]
    fn test_console_format_prefixes_level() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(ConsoleFormat)
            .with_writer(captured.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Downloading {}", "listings.csv.gz");
            tracing::warn!("checksums_expected.sha256 not found");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "[INFO] Downloading listings.csv.gz\n[WARNING] checksums_expected.sha256 not found\n"
        );
    }
}
