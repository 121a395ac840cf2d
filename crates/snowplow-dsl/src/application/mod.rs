//! Event assembly and the dispatch entry points.

pub mod assembler;
pub mod dispatch;
