use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

/// Discards the first `count` entries, then streams the rest unchanged.
#[derive(new)]
pub struct Skip<I, P> {
    input: I,
    to_skip: usize,
    keys: P,
    #[new(default)]
    end_of_input: bool,
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for Skip<I, P>
where
    P: KeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.end_of_input {
            return Ok(None);
        }
        while self.to_skip > 0 {
            if self.input.next()?.is_none() {
                self.to_skip = 0;
                self.end_of_input = true;
                return Ok(None);
            }
            self.to_skip -= 1;
        }
        match self.input.next()? {
            Some((key, value)) => Ok(Some(self.keys.apply(key, value))),
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
        let (lower, upper) = self.input.size_hint();
        (
            lower.saturating_sub(self.to_skip),
            upper.map(|upper| upper.saturating_sub(self.to_skip)),
        )
    }
}

pub fn skip<I, K, V, P>(input: I, count: usize, keys: P) -> Skip<I, P>
where
    I: FallibleIterator<Item = (K, V)>,
    P: KeyPolicy<K, V>,
{
    Skip::new(input, count, keys)
}

#[test]
fn should_skip_items_and_stream_the_rest() {
    use std::convert::Infallible;

    use crate::{keys::Ordinal, source::letters};

    let mut stream = skip(letters::<Infallible>(10), 4, Ordinal::new());
    for (i, c) in "efghij".chars().enumerate() {
        assert_matches!(stream.next(), Ok(Some((k, v))) if k == i && v == c);
    }
    // End of stream
    assert_matches!(stream.next(), Ok(None));
    assert_matches!(stream.next(), Ok(None));
}

#[test]
fn should_skip_items_and_stream_the_rest_with_keys() {
    use std::convert::Infallible;

    use crate::{keys::SourceKeys, materialize::entries, source::letters};

    let actual = entries(skip(letters::<Infallible>(10), 4, SourceKeys));
    assert_eq!(
        actual,
        Ok(vec![(4, 'e'), (5, 'f'), (6, 'g'), (7, 'h'), (8, 'i'), (9, 'j')])
    );
}

#[test]
fn should_stream_nothing_when_skipping_past_the_end() {
    use std::convert::Infallible;

    use crate::{keys::Ordinal, source::letters};

    let mut stream = skip(letters::<Infallible>(3), 42, Ordinal::new());
    assert_matches!(stream.next(), Ok(None));
    assert_matches!(stream.next(), Ok(None));
}

#[test]
fn should_stream_everything_when_skipping_nothing() {
    use std::convert::Infallible;

    use crate::{keys::Ordinal, materialize::values, source::letters};

    let actual = values(skip(letters::<Infallible>(3), 0, Ordinal::new()));
    assert_eq!(actual, Ok(vec!['a', 'b', 'c']));
}

#[test]
fn should_stay_exhausted_once_input_ended() {
    use std::convert::Infallible;

    use crate::{keys::SourceKeys, source::resuming_after_end};

    let mut stream = skip(resuming_after_end::<Infallible>(), 5, SourceKeys);
    assert_matches!(stream.next(), Ok(None));
    assert_matches!(stream.next(), Ok(None));
    assert_eq!(stream.size_hint(), (0, Some(0)));

    let mut stream = skip(resuming_after_end::<Infallible>(), 0, SourceKeys);
    assert_matches!(stream.next(), Ok(Some((0, 'a'))));
    assert_matches!(stream.next(), Ok(None));
    assert_matches!(stream.next(), Ok(None));
}

#[test]
fn should_hint_size_without_skipped_items() {
    use std::convert::Infallible;

    use crate::{keys::Ordinal, source::keyed};

    let stream = skip(keyed::<_, Infallible>(0..10), 4, Ordinal::new());
    assert_eq!(stream.size_hint(), (6, Some(6)));
    let stream = skip(keyed::<_, Infallible>(0..3), 4, Ordinal::new());
    assert_eq!(stream.size_hint(), (0, Some(0)));
}
