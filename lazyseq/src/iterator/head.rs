use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

/// Streams at most `count` entries from the front of the input.
///
/// Nothing is pulled once `count` entries have been emitted, so handing over
/// `&mut source` leaves the source positioned right after the last emitted
/// entry and a later `head` resumes from there.
#[derive(new)]
pub struct Head<I, P> {
    input: I,
    remaining: usize,
    keys: P,
}

impl<I, P> Head<I, P> {
    /// Number of entries this view may still emit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for Head<I, P>
where
    P: KeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.remaining == 0 {
            return Ok(None);
        }
        match self.input.next()? {
            Some((key, value)) => {
                self.remaining -= 1;
                Ok(Some(self.keys.apply(key, value)))
            }
            None => {
                self.remaining = 0;
                Ok(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.input.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

pub fn head<I, K, V, P>(input: I, count: usize, keys: P) -> Head<I, P>
where
    I: FallibleIterator<Item = (K, V)>,
    P: KeyPolicy<K, V>,
{
    Head::new(input, count, keys)
}
