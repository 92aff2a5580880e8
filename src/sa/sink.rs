//! Ready-made progress sinks.

use std::io::{self, Write};

use super::types::{ProgressEvent, ProgressSink, SinkControl};
use crate::error::SinkError;

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_progress(&mut self, _event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        Ok(SinkControl::Continue)
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<ProgressEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for RecordingSink {
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        self.events.push(*event);
        Ok(SinkControl::Continue)
    }
}

/// Adapts a closure into a sink. See [`sink_fn`] and [`inspect`].
pub struct FnSink<F>(F);

impl<F> ProgressSink for FnSink<F>
where
    F: FnMut(&ProgressEvent) -> Result<SinkControl, SinkError>,
{
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        (self.0)(event)
    }
}

/// Wraps a fallible closure that decides whether to continue.
pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&ProgressEvent) -> Result<SinkControl, SinkError>,
{
    FnSink(f)
}

/// Wraps an infallible observer; the run always continues.
pub fn inspect<F>(
    mut f: F,
) -> FnSink<impl FnMut(&ProgressEvent) -> Result<SinkControl, SinkError>>
where
    F: FnMut(&ProgressEvent),
{
    FnSink(move |event: &ProgressEvent| {
        f(event);
        Ok(SinkControl::Continue)
    })
}

/// Writes one `;`-separated line per temperature level.
///
/// ```text
/// step;temperature;energy;% worse accepted
/// 0;100.000000;3.000000;85%
/// ```
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub const HEADER: &'static str = "step;temperature;energy;% worse accepted";

    /// Writes the header line and returns the sink.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", Self::HEADER)?;
        Ok(Self { out })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ProgressSink for CsvSink<W> {
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        writeln!(
            self.out,
            "{};{:.6};{:.6};{:.0}%",
            event.step_index, event.temperature, event.best_energy, event.worse_accepted_percent
        )?;
        Ok(SinkControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(step_index: usize) -> ProgressEvent {
        ProgressEvent {
            step_index,
            temperature: 100.0,
            best_energy: 3.0,
            current_energy: 4.0,
            worse_accepted_percent: 85.0,
        }
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        for i in 0..3 {
            assert_eq!(sink.on_progress(&event(i)).unwrap(), SinkControl::Continue);
        }
        let steps: Vec<usize> = sink.events.iter().map(|e| e.step_index).collect();
        assert_eq!(steps, vec![0, 1, 2]);
    }

    #[test]
    fn test_csv_sink_format() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.on_progress(&event(0)).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "step;temperature;energy;% worse accepted\n0;100.000000;3.000000;85%\n"
        );
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_csv_sink_header_error() {
        assert!(CsvSink::new(BrokenWriter).is_err());
    }

    #[test]
    fn test_sink_fn_can_stop() {
        let mut sink = sink_fn(|e: &ProgressEvent| {
            Ok(if e.step_index >= 1 {
                SinkControl::Stop
            } else {
                SinkControl::Continue
            })
        });
        assert_eq!(sink.on_progress(&event(0)).unwrap(), SinkControl::Continue);
        assert_eq!(sink.on_progress(&event(1)).unwrap(), SinkControl::Stop);
    }

    #[test]
    fn test_inspect_sees_events() {
        let mut count = 0;
        {
            let mut sink = inspect(|_| count += 1);
            sink.on_progress(&event(0)).unwrap();
            sink.on_progress(&event(1)).unwrap();
        }
        assert_eq!(count, 2);
    }
}
