pub mod counter;
pub mod sink;
pub mod stream;
pub mod units;

pub use sink::{OutputSink, PipeSink, StreamSink};
pub use stream::{check_range, stream, StreamReport};
