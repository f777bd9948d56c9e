//! Arena-backed linked containers.
//!
//! Every container in this crate keeps its nodes in a private arena.
//! Links are arena indices rather than pointers, so back-references (`prev`)
//! never own anything and there are no reference cycles to leak.
//!
//! - [`Sequence`]: doubly-linked, 1-indexed positional and value-based
//!   access, ascending insertion and stable sorting
//! - [`Stack`]: singly-linked LIFO
//! - [`Queue`]: singly-linked FIFO
//!
//! Operations that need an element fail with [`ListError`] instead of
//! panicking.

mod error;
mod node;
mod queue;
mod sequence;
mod stack;

pub use error::ListError;
pub use queue::Queue;
pub use sequence::{Iter, Sequence};
pub use stack::Stack;
