mod backtrack;
mod output;

pub(crate) use backtrack::*;

pub use output::*;
