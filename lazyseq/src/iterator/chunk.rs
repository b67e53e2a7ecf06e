//! Splits a sequence into consecutive chunks of at most `chunk_size` entries.
//!
//! Every chunk is a [`head`] over one cursor shared with the outer sequence,
//! so chunks are views, not copies. **A chunk must be read before the next
//! one is requested.** Requesting chunk `n + 1` invalidates chunk `n`: reading
//! from it afterwards fails with [`LazySeqError::StaleChunk`]. Entries chunk
//! `n` did not read are streamed by chunk `n + 1`.
//!
//! Since a stale read is reported through the input's error type, chunking
//! requires `E: From<LazySeqError>`. An input that cannot fail
//! (`E = Infallible`) has to be given an error type first, for instance with
//! `map_err(|never| -> LazySeqError { match never {} })`.

use std::{cell::RefCell, rc::Rc};

use fallible_iterator::FallibleIterator;

use super::head::{head, Head};
use crate::{keys::KeyPolicy, LazySeqError};

struct ChunkState<I: FallibleIterator> {
    input: I,
    lookahead: Option<I::Item>,
    end_of_input: bool,
    current: usize,
}

impl<I: FallibleIterator> ChunkState<I> {
    fn pull(&mut self) -> Result<Option<I::Item>, I::Error> {
        if let Some(item) = self.lookahead.take() {
            return Ok(Some(item));
        }
        if self.end_of_input {
            return Ok(None);
        }
        let item = self.input.next()?;
        if item.is_none() {
            self.end_of_input = true;
        }
        Ok(item)
    }

    fn has_more(&mut self) -> Result<bool, I::Error> {
        if self.lookahead.is_none() {
            self.lookahead = self.pull()?;
        }
        Ok(self.lookahead.is_some())
    }
}

/// Cursor a single chunk reads through.
pub struct ChunkCursor<I: FallibleIterator> {
    state: Rc<RefCell<ChunkState<I>>>,
    chunk: usize,
}

impl<I: FallibleIterator> FallibleIterator for ChunkCursor<I>
where
    I::Error: From<LazySeqError>,
{
    type Item = I::Item;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.current != self.chunk {
            tracing::trace!(
                chunk = self.chunk,
                current = state.current,
                "read attempt on stale chunk"
            );
            return Err(LazySeqError::StaleChunk {
                chunk: self.chunk,
                current: state.current,
            }
            .into());
        }
        state.pull()
    }
}

/// A chunk: at most `chunk_size` entries read through the shared cursor.
pub type Chunk<I, P> = Head<ChunkCursor<I>, P>;

/// Outer sequence of [`chunk`], keyed by chunk ordinal.
pub struct Chunks<I: FallibleIterator, P> {
    state: Rc<RefCell<ChunkState<I>>>,
    chunk_size: usize,
    keys: P,
    next_chunk: usize,
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for Chunks<I, P>
where
    I::Error: From<LazySeqError>,
    P: KeyPolicy<K, V> + Clone,
{
    type Item = (usize, Chunk<I, P>);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let mut state = self.state.borrow_mut();
        if !state.has_more()? {
            return Ok(None);
        }
        let chunk = self.next_chunk;
        self.next_chunk += 1;
        state.current = chunk;
        tracing::trace!(chunk, chunk_size = self.chunk_size, "chunk started");
        let cursor = ChunkCursor {
            state: Rc::clone(&self.state),
            chunk,
        };
        Ok(Some((chunk, head(cursor, self.chunk_size, self.keys.clone()))))
    }
}

/// Splits `input` into chunks of `chunk_size` entries, the last one possibly
/// shorter.
///
/// Fails with [`LazySeqError::InvalidChunkSize`] when `chunk_size` is 0.
pub fn chunk<I, K, V, P>(
    input: I,
    chunk_size: usize,
    keys: P,
) -> Result<Chunks<I, P>, LazySeqError>
where
    I: FallibleIterator<Item = (K, V)>,
    I::Error: From<LazySeqError>,
    P: KeyPolicy<K, V> + Clone,
{
    if chunk_size == 0 {
        return Err(LazySeqError::InvalidChunkSize);
    }
    Ok(Chunks {
        state: Rc::new(RefCell::new(ChunkState {
            input,
            lookahead: None,
            end_of_input: false,
            current: 0,
        })),
        chunk_size,
        keys,
        next_chunk: 0,
    })
}
