//! Hand-written test doubles for the collaborator capabilities.
//!
//! These are the manual counterpart to the `mockall` generated `MockCounter`
//! and `MockDoer` (available under the `test_tools` feature). A stub is a
//! plain struct wrapping a closure, so behavior is set by the test and the
//! recorded calls are inspected directly afterwards.

pub mod stub_counter;
pub mod stub_doer;

pub use stub_counter::StubCounter;
pub use stub_doer::StubDoer;
