//! Double-buffered cell storage for dualgrid simulations.
//!
//! # Architecture
//!
//! ```text
//! PingPongStore<T>
//! ├── buffers[0]: Vec<T>  ←── read (even generations) / write (odd)
//! ├── buffers[1]: Vec<T>  ←── write (even generations) / read (odd)
//! └── read_index          ←── the only state a flip touches
//! ```
//!
//! During a tick every read comes from the read buffer and every write
//! goes to the write buffer, so no cell ever observes a value produced in
//! the same tick. [`PingPongStore::flip`] then swaps the two roles in O(1)
//! without moving any data.
//!
//! Out-of-bounds access never fails: reads return `T::default()` and
//! writes are dropped. The slot lookup is delegated to
//! [`dualgrid_space::flat_index`] so the policy lives in one place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;

pub use error::ArenaError;
pub use pingpong::{PingPongStore, TickGuard};
