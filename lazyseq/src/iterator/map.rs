use std::marker::PhantomData;

use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

/// Streams `transform(value, key)` for every entry. Keys are never
/// transformed.
#[derive(new)]
pub struct Map<I, F, P, U> {
    input: I,
    transform: F,
    keys: P,
    #[new(default)]
    end_of_input: bool,
    #[new(default)]
    _value: PhantomData<fn() -> U>,
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, F, P, U> FallibleIterator for Map<I, F, P, U>
where
    F: FnMut(V, &K) -> Result<U, I::Error>,
    P: KeyPolicy<K, U>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.end_of_input {
            return Ok(None);
        }
        match self.input.next()? {
            Some((key, value)) => {
                let value = (self.transform)(value, &key)?;
                Ok(Some(self.keys.apply(key, value)))
            }
            None => {
                self.end_of_input = true;
                Ok(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.end_of_input {
            return (0, Some(0));
        }
        self.input.size_hint()
    }
}

pub fn map<I, K, V, F, P, U>(input: I, transform: F, keys: P) -> Map<I, F, P, U>
where
    I: FallibleIterator<Item = (K, V)>,
    F: FnMut(V, &K) -> Result<U, I::Error>,
    P: KeyPolicy<K, U>,
{
    Map::new(input, transform, keys)
}
