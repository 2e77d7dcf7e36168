//! Matrix module: the dense container, spans, and span-based selection.

pub mod dense;
pub use dense::Matrix;
pub mod span;
pub use span::{Span, SpanIndices};
pub mod select;
pub use select::{RowEntry, Slicing};
