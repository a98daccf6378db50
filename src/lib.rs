//! Scene translation between the runtime's entity/component graph, the
//! visual editor's manifest and a versioned storable snapshot.

pub mod engine;

pub use engine::*;
