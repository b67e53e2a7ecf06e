#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate thiserror;

pub mod iterator;
pub mod keys;
pub mod materialize;
pub mod prelude;
pub mod source;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LazySeqError {
    #[error("Error: {0}")]
    Custom(String),
    #[error("Chunk size must be greater than 0")]
    InvalidChunkSize,
    #[error("Chunk {chunk} was read after chunk {current} had been requested")]
    StaleChunk { chunk: usize, current: usize },
}

impl LazySeqError {
    pub fn custom(error: String) -> Self {
        Self::Custom(error)
    }
}
