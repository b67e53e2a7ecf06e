use fallible_iterator::FallibleIterator;

use crate::keys::{KeyedPairs, Ordinal, SourceKeys};

pub mod chain;
pub mod chunk;
pub mod filter;
pub mod head;
pub mod io;
pub mod map;
pub mod skip;
pub mod tail;
pub mod tee;

pub use self::{
    chain::{chain, Chain},
    chunk::{chunk, Chunk, ChunkCursor, Chunks},
    filter::{filter, Filter},
    head::{head, Head},
    map::{map, Map},
    skip::{skip, Skip},
    tail::{tail, Tail},
    tee::{tee, Side, TeeHalf},
};

use crate::LazySeqError;

pub fn from_fn<T, E, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    FromFn(f)
}

pub struct FromFn<F>(F);

impl<T, E, F> FallibleIterator for FromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (self.0)()
    }
}

/// Chaining form of the operators.
///
/// Plain methods re-key their output with [`Ordinal`], `*_keyed` methods keep
/// the source keys ([`SourceKeys`]). The names avoid the `skip`, `chain`,
/// `filter` and `map` methods already provided by [`FallibleIterator`].
pub trait SequenceExt<K, V>: FallibleIterator<Item = (K, V)> + Sized {
    fn head(self, count: usize) -> Head<Self, Ordinal> {
        head(self, count, Ordinal::new())
    }

    fn head_keyed(self, count: usize) -> Head<Self, SourceKeys> {
        head(self, count, SourceKeys)
    }

    fn tail(self, count: usize) -> Tail<Self, Ordinal> {
        tail(self, count, Ordinal::new())
    }

    fn tail_keyed(self, count: usize) -> Tail<Self, SourceKeys> {
        tail(self, count, SourceKeys)
    }

    fn skip_n(self, count: usize) -> Skip<Self, Ordinal> {
        skip(self, count, Ordinal::new())
    }

    fn skip_n_keyed(self, count: usize) -> Skip<Self, SourceKeys> {
        skip(self, count, SourceKeys)
    }

    fn chain_with<S>(self, others: S) -> Chain<Self, Ordinal>
    where
        S: IntoIterator<Item = Self>,
    {
        chain(std::iter::once(self).chain(others), Ordinal::new())
    }

    fn chain_with_keyed<S>(self, others: S) -> Chain<Self, KeyedPairs>
    where
        S: IntoIterator<Item = Self>,
    {
        chain(std::iter::once(self).chain(others), KeyedPairs::new())
    }

    fn filter_by<F>(self, predicate: F) -> Filter<Self, F, Ordinal>
    where
        F: FnMut(&V, &K) -> Result<bool, Self::Error>,
    {
        filter(self, predicate, Ordinal::new())
    }

    fn filter_by_keyed<F>(self, predicate: F) -> Filter<Self, F, SourceKeys>
    where
        F: FnMut(&V, &K) -> Result<bool, Self::Error>,
    {
        filter(self, predicate, SourceKeys)
    }

    fn map_values<U, F>(self, transform: F) -> Map<Self, F, Ordinal, U>
    where
        F: FnMut(V, &K) -> Result<U, Self::Error>,
    {
        map(self, transform, Ordinal::new())
    }

    fn map_values_keyed<U, F>(self, transform: F) -> Map<Self, F, SourceKeys, U>
    where
        F: FnMut(V, &K) -> Result<U, Self::Error>,
    {
        map(self, transform, SourceKeys)
    }

    fn tee(self) -> (TeeHalf<Self, Ordinal>, TeeHalf<Self, Ordinal>)
    where
        K: Clone,
        V: Clone,
    {
        tee(self, Ordinal::new())
    }

    fn tee_keyed(self) -> (TeeHalf<Self, SourceKeys>, TeeHalf<Self, SourceKeys>)
    where
        K: Clone,
        V: Clone,
    {
        tee(self, SourceKeys)
    }

    fn chunk(self, chunk_size: usize) -> Result<Chunks<Self, Ordinal>, LazySeqError>
    where
        Self::Error: From<LazySeqError>,
    {
        chunk(self, chunk_size, Ordinal::new())
    }

    fn chunk_keyed(self, chunk_size: usize) -> Result<Chunks<Self, SourceKeys>, LazySeqError>
    where
        Self::Error: From<LazySeqError>,
    {
        chunk(self, chunk_size, SourceKeys)
    }
}

impl<I, K, V> SequenceExt<K, V> for I where I: FallibleIterator<Item = (K, V)> {}
