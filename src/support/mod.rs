pub mod errors;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::*;
