//! Node storage for parsed programs.
//!
//! Nodes live in a bump-allocated, fixed-capacity array. A [`arena::Region`]
//! owns the allocation and hands out [`arena::Arena`]s; releasing the region
//! frees every node in one step.

pub mod arena;
