//! Producers of keyed sequences.

use fallible_iterator::FallibleIterator;

use crate::iterator::from_fn;

/// Streams `values` keyed by their 0-based position.
///
/// The error type is free so the sequence can feed operators whose callbacks
/// fail with a specific error.
pub fn keyed<I, E>(values: I) -> impl FallibleIterator<Item = (usize, I::Item), Error = E>
where
    I: IntoIterator,
{
    fallible_iterator::convert(values.into_iter().enumerate().map(Ok))
}

/// Streams `a`, `b`, `c`... keyed by their 0-based position.
///
/// At least one letter is streamed and at most 26.
pub fn letters<E>(count: usize) -> impl FallibleIterator<Item = (usize, char), Error = E> {
    let count = count.clamp(1, 26);
    let mut next = 0;
    from_fn(move || {
        if next < count {
            let letter = char::from(b'a' + next as u8);
            let key = next;
            next += 1;
            Ok::<_, E>(Some((key, letter)))
        } else {
            Ok(None)
        }
    })
}

/// Streams `a`, reports the end, then streams `z` as if nothing happened.
#[cfg(test)]
pub(crate) fn resuming_after_end<E>() -> impl FallibleIterator<Item = (usize, char), Error = E> {
    let mut calls = 0;
    from_fn(move || {
        calls += 1;
        match calls {
            1 => Ok::<_, E>(Some((0, 'a'))),
            3 => Ok(Some((1, 'z'))),
            _ => Ok(None),
        }
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn should_stream_letters() {
        let mut stream = letters::<Infallible>(3);
        assert_matches!(stream.next(), Ok(Some((0, 'a'))));
        assert_matches!(stream.next(), Ok(Some((1, 'b'))));
        assert_matches!(stream.next(), Ok(Some((2, 'c'))));
        // End of stream
        assert_matches!(stream.next(), Ok(None));
        assert_matches!(stream.next(), Ok(None));
    }

    #[test]
    fn should_stream_at_least_one_letter() {
        let mut stream = letters::<Infallible>(0);
        assert_matches!(stream.next(), Ok(Some((0, 'a'))));
        assert_matches!(stream.next(), Ok(None));
    }

    #[test]
    fn should_resume_after_end() {
        let mut stream = resuming_after_end::<Infallible>();
        assert_matches!(stream.next(), Ok(Some((0, 'a'))));
        assert_matches!(stream.next(), Ok(None));
        assert_matches!(stream.next(), Ok(Some((1, 'z'))));
        assert_matches!(stream.next(), Ok(None));
    }

    #[test]
    fn should_key_values_by_position() {
        let mut stream = keyed::<_, Infallible>(["x", "y"]);
        assert_matches!(stream.next(), Ok(Some((0, "x"))));
        assert_matches!(stream.next(), Ok(Some((1, "y"))));
        assert_matches!(stream.next(), Ok(None));
    }
}
