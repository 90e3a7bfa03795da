use crate::errors::PreflightError;

use chrono::Local;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, Layer, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Renders every event as `YYYY-MM-DD HH:MM:SS [LEVEL] - message`.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
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
        write!(
            writer,
            "{} [{}] - ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn open_log_file(log_file: &str) -> Result<File, PreflightError> {
    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => Ok(file),
        Err(e) => Err(PreflightError::Environment(format!(
            "cannot open log file '{}': {}",
            log_file, e
        ))),
    }
}

/// A fmt layer writing `LineFormat` lines to `writer`.
pub fn line_layer<S, W>(writer: W) -> Layer<S, DefaultFields, LineFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .event_format(LineFormat)
}

/// Send log lines to stdout and append them to `log_file`.
///
/// Level defaults to INFO; `RUST_LOG` overrides it.
pub fn init_logging(log_file: &str) -> Result<(), PreflightError> {
    let file = open_log_file(log_file)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(line_layer(std::io::stdout))
        .with(line_layer(Mutex::new(file)))
        .try_init()
    {
        return Err(PreflightError::Environment(format!(
            "cannot install logger: {}",
            e
        )));
    }

    Ok(())
}
