use fallible_iterator::FallibleIterator;

use crate::keys::MergingKeyPolicy;

/// Streams every entry of each input in turn, draining one input before
/// moving to the next.
///
/// Inputs must share one type; box them as
/// `Box<dyn FallibleIterator<Item = _, Error = _>>` to chain different kinds of
/// sequences. Source keys are never emitted as keys since they may collide
/// across inputs, see [`MergingKeyPolicy`].
pub struct Chain<I, P> {
    current: Option<I>,
    pending: std::vec::IntoIter<I>,
    keys: P,
}

impl<I, P> Chain<I, P> {
    pub fn new<S>(inputs: S, keys: P) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        let mut pending = inputs.into_iter().collect::<Vec<_>>().into_iter();
        Self {
            current: pending.next(),
            pending,
            keys,
        }
    }
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for Chain<I, P>
where
    P: MergingKeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(input) = &mut self.current {
            if let Some((key, value)) = input.next()? {
                return Ok(Some(self.keys.apply(key, value)));
            }
            self.current = self.pending.next();
        }
        Ok(None)
    }
}

pub fn chain<S, I, K, V, P>(inputs: S, keys: P) -> Chain<I, P>
where
    S: IntoIterator<Item = I>,
    I: FallibleIterator<Item = (K, V)>,
    P: MergingKeyPolicy<K, V>,
{
    Chain::new(inputs, keys)
}
