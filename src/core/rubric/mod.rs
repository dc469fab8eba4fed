// Rubric engine: trigger gate, pillar scorers and result assembly.
// Pure and synchronous; no I/O.

pub mod assembler;
pub mod engine;
pub mod gate;
pub mod pillars;
pub mod types;

pub use engine::evaluate;
pub use types::*;
