use std::collections::VecDeque;

use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

/// Drains the input, keeps its last `count` entries and streams them.
///
/// Nothing is emitted before the input is exhausted. Retention is bounded by
/// `count`: older entries are evicted first.
pub struct Tail<I: FallibleIterator, P> {
    input: I,
    count: usize,
    keys: P,
    state: State<I::Item>,
}

impl<I: FallibleIterator, P> Tail<I, P> {
    pub fn new(input: I, count: usize, keys: P) -> Self {
        Self {
            input,
            count,
            keys,
            state: State::Buffering {
                buffer: VecDeque::new(),
                evicted: 0,
            },
        }
    }
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for Tail<I, P>
where
    P: KeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if let State::Buffering { buffer, evicted } = &mut self.state {
            while let Some(entry) = self.input.next()? {
                if self.count == 0 {
                    *evicted += 1;
                    continue;
                }
                if buffer.len() == self.count {
                    buffer.pop_front();
                    *evicted += 1;
                }
                buffer.push_back(entry);
            }
            tracing::trace!(
                retained = buffer.len(),
                evicted = *evicted,
                "tail reached end of input"
            );
            self.state = State::Reading(std::mem::take(buffer));
        }
        match &mut self.state {
            State::Buffering { .. } => {
                unreachable!();
            }
            State::Reading(buffer) => Ok(buffer
                .pop_front()
                .map(|(key, value)| self.keys.apply(key, value))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Buffering { .. } => (0, Some(self.count)),
            State::Reading(buffer) => (buffer.len(), Some(buffer.len())),
        }
    }
}

enum State<T> {
    Buffering { buffer: VecDeque<T>, evicted: usize },
    Reading(VecDeque<T>),
}

pub fn tail<I, K, V, P>(input: I, count: usize, keys: P) -> Tail<I, P>
where
    I: FallibleIterator<Item = (K, V)>,
    P: KeyPolicy<K, V>,
{
    Tail::new(input, count, keys)
}
