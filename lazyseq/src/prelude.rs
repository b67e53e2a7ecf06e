pub use crate::{
    iterator::{
        chain, chunk, filter, head, map, skip, tail, tee, Chain, Chunk, Chunks, Filter, Head, Map,
        SequenceExt, Side, Skip, Tail, TeeHalf,
    },
    keys::{KeyPolicy, KeyedPairs, MergingKeyPolicy, Ordinal, SourceKeys},
    materialize::{entries, to_map, values},
    source::{keyed, letters},
    LazySeqError,
};
pub use fallible_iterator::FallibleIterator;
