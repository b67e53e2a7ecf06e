use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

/// Streams the entries for which `predicate(value, key)` holds.
///
/// Each input entry is pulled exactly once and tested once, in order. A
/// predicate error is returned as is and the input stays positioned right
/// after the entry that caused it.
#[derive(new)]
pub struct Filter<I, F, P> {
    input: I,
    predicate: F,
    keys: P,
    #[new(default)]
    end_of_input: bool,
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, F, P> FallibleIterator for Filter<I, F, P>
where
    F: FnMut(&V, &K) -> Result<bool, I::Error>,
    P: KeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.end_of_input {
            return Ok(None);
        }
        while let Some((key, value)) = self.input.next()? {
            if (self.predicate)(&value, &key)? {
                return Ok(Some(self.keys.apply(key, value)));
            }
        }
        self.end_of_input = true;
        Ok(None)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.end_of_input {
            return (0, Some(0));
        }
        (0, self.input.size_hint().1)
    }
}

pub fn filter<I, K, V, F, P>(input: I, predicate: F, keys: P) -> Filter<I, F, P>
where
    I: FallibleIterator<Item = (K, V)>,
    F: FnMut(&V, &K) -> Result<bool, I::Error>,
    P: KeyPolicy<K, V>,
{
    Filter::new(input, predicate, keys)
}
