//! Span type: start/stop/step selections over one matrix axis.
//!
//! A `Span` carries the unresolved endpoints of a selection; resolving it
//! against an axis length produces the concrete index sequence. Resolution
//! follows Python slice semantics: negative endpoints count from the end,
//! out-of-range endpoints clamp to the axis, omitted endpoints default by
//! step sign, and a zero step is rejected.

use crate::error::MatError;

/// An unresolved start/stop/step selection over one axis.
///
/// `None` endpoints are open: they resolve to the start or end of the axis
/// depending on the sign of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Span {
    /// The full axis (`:`).
    pub fn all() -> Self {
        Span { start: None, stop: None, step: 1 }
    }

    /// Every `step`-th index over the full axis (`::step`).
    pub fn every(step: isize) -> Self {
        Span { start: None, stop: None, step }
    }

    /// A fully explicit span.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Span { start, stop, step }
    }

    /// Resolve against an axis of `len` elements.
    ///
    /// Returns the concrete index sequence, clamped to the axis. Fails only
    /// when `step` is zero.
    pub fn indices(&self, len: usize) -> Result<SpanIndices, MatError> {
        if self.step == 0 {
            return Err(MatError::ZeroStep);
        }
        let len = len as isize;
        let step = self.step;
        // Bounds an endpoint may occupy after adjustment. A negative step
        // walks down to (but not through) -1.
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |endpoint: Option<isize>, open_default: isize| -> isize {
            match endpoint {
                None => open_default,
                Some(mut e) => {
                    if e < 0 {
                        e += len;
                        if e < lower {
                            e = lower;
                        }
                    } else if e > upper {
                        e = upper;
                    }
                    e
                }
            }
        };
        let start = clamp(self.start, if step < 0 { upper } else { lower });
        let stop = clamp(self.stop, if step < 0 { lower } else { upper });
        Ok(SpanIndices { next: start, stop, step })
    }
}

impl From<std::ops::Range<isize>> for Span {
    fn from(r: std::ops::Range<isize>) -> Self {
        Span { start: Some(r.start), stop: Some(r.end), step: 1 }
    }
}

impl From<std::ops::RangeFrom<isize>> for Span {
    fn from(r: std::ops::RangeFrom<isize>) -> Self {
        Span { start: Some(r.start), stop: None, step: 1 }
    }
}

impl From<std::ops::RangeTo<isize>> for Span {
    fn from(r: std::ops::RangeTo<isize>) -> Self {
        Span { start: None, stop: Some(r.end), step: 1 }
    }
}

impl From<std::ops::RangeFull> for Span {
    fn from(_: std::ops::RangeFull) -> Self {
        Span::all()
    }
}

/// Concrete index sequence produced by [`Span::indices`].
#[derive(Clone, Debug)]
pub struct SpanIndices {
    next: isize,
    stop: isize,
    step: isize,
}

impl SpanIndices {
    fn remaining(&self) -> usize {
        let d = if self.step > 0 {
            self.stop - self.next + self.step - 1
        } else {
            self.stop - self.next + self.step + 1
        };
        (d / self.step).max(0) as usize
    }
}

impl Iterator for SpanIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let exhausted = if self.step > 0 {
            self.next >= self.stop
        } else {
            self.next <= self.stop
        };
        if exhausted {
            return None;
        }
        // `next` stays within [0, len) while unexhausted, for either sign.
        let idx = self.next as usize;
        self.next += self.step;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SpanIndices {}
