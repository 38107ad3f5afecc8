//! Step-by-step observation of the algorithms.
//!
//! The algorithms report what they do as [`Event`]s to a [`Trace`]. The plain entry points use
//! [`NoTrace`], which compiles down to nothing. Events only carry positions and lengths, never
//! element values, so tracing puts no extra bounds on the element type.

use std::fmt;
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Elements at `a` and `b` were exchanged. Never emitted for `a == b`.
    Swap { a: usize, b: usize },
    /// A bubble sort pass over the unsorted region finished.
    Pass { pass: usize, swaps: usize },
    /// In-place quick sort placed the pivot of `[low, high]` at `pivot`.
    Partition { low: usize, high: usize, pivot: usize },
    /// Non-in-place quick sort split a segment of `len` elements around the element at `pivot`.
    Split {
        len: usize,
        pivot: usize,
        low: usize,
        high: usize,
    },
    /// Merge sort merged two sorted runs.
    Merge { left: usize, right: usize },
    /// Binary search compared the element at `mid` within the window `[low, high]`.
    Probe { low: usize, high: usize, mid: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::Swap { a, b } => write!(f, "swap {a} <-> {b}"),
            Event::Pass { pass, swaps } => write!(f, "pass {pass}: {swaps} swaps"),
            Event::Partition { low, high, pivot } => {
                write!(f, "partition [{low}, {high}] -> pivot at {pivot}")
            }
            Event::Split {
                len,
                pivot,
                low,
                high,
            } => write!(
                f,
                "split {len} elements at {pivot}: {low} low, 1 pivot, {high} high"
            ),
            Event::Merge { left, right } => write!(f, "merge {left} + {right}"),
            Event::Probe { low, high, mid } => write!(f, "probe {mid} in [{low}, {high}]"),
        }
    }
}

pub trait Trace {
    fn event(&mut self, event: Event);
}

impl<F: FnMut(Event)> Trace for F {
    #[inline]
    fn event(&mut self, event: Event) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    #[inline(always)]
    fn event(&mut self, _event: Event) {}
}

/// Counts [`Event::Swap`]s, ignores everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapCount(pub usize);

impl Trace for SwapCount {
    #[inline]
    fn event(&mut self, event: Event) {
        if let Event::Swap { .. } = event {
            self.0 += 1;
        }
    }
}

/// Keeps every event in order of arrival.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Trace for Recorder {
    fn event(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Writes one line per event to `W`.
///
/// Writing stops at the first I/O error, which is reported by [`Printer::finish`].
pub struct Printer<W: io::Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> Trace for Printer<W> {
    fn event(&mut self, event: Event) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = writeln!(self.out, "{event}") {
            self.error = Some(err);
        }
    }
}
