// Adapters layer: concrete collaborators used by the binary.

pub mod char_counter;
pub mod tracing_doer;

pub use char_counter::CharCounter;
pub use tracing_doer::TracingDoer;
