mod buffer;
mod metrics;
mod predicates;
mod relate;

pub use buffer::{Buffer, BufferStyle, CapStyle, JoinStyle, OffsetCurveStyle};
pub use metrics::Metrics;
pub use predicates::Predicates;
pub use relate::{IntersectionMatrix, Relate};
