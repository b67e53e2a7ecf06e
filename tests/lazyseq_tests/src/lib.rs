#[cfg(test)]
#[macro_use]
extern crate more_asserts;

#[cfg(test)]
mod properties {
    use fallible_iterator::FallibleIterator;
    use lazyseq::prelude::*;
    use rand::Rng;
    use rand_chacha::rand_core::SeedableRng;

    fn source(len: usize) -> impl FallibleIterator<Item = (usize, usize), Error = anyhow::Error> {
        keyed(0..len)
    }

    fn seeded_rng() -> rand_chacha::ChaCha8Rng {
        let rng = rand_chacha::ChaCha8Rng::from_entropy();
        println!("Seed: {:02x?}", rng.get_seed());
        rng
    }

    #[test]
    fn head_calls_resume_one_after_the_other() -> anyhow::Result<()> {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let len = rng.gen_range(0..40);
            let mut input = source(len);
            let mut all = Vec::new();
            let mut requested = 0;
            for _ in 0..rng.gen_range(1..8) {
                let count = rng.gen_range(0..10);
                requested += count;
                all.extend(values(head(&mut input, count, Ordinal::new()))?);
            }
            assert_eq!(all, (0..requested.min(len)).collect::<Vec<_>>());
        }
        Ok(())
    }

    #[test]
    fn tail_keeps_the_last_items() -> anyhow::Result<()> {
        for len in 0..12 {
            for count in 0..15 {
                let actual = values(tail(source(len), count, Ordinal::new()))?;
                let kept = count.min(len);
                assert_eq!(actual.len(), kept);
                assert_eq!(actual, (len - kept..len).collect::<Vec<_>>());
            }
        }
        Ok(())
    }

    #[test]
    fn skipped_prefix_and_rest_rebuild_the_input() -> anyhow::Result<()> {
        for len in 0..12 {
            for count in 0..15 {
                let (left, right) = source(len).tee();
                let mut rebuilt = values(head(left, count, Ordinal::new()))?;
                rebuilt.extend(values(skip(right, count, Ordinal::new()))?);
                assert_eq!(rebuilt, (0..len).collect::<Vec<_>>());
            }
        }
        Ok(())
    }

    #[test]
    fn chain_is_associative() -> anyhow::Result<()> {
        type Boxed = Box<dyn FallibleIterator<Item = (usize, usize), Error = anyhow::Error>>;
        let boxed = |len| -> Boxed { Box::new(source(len)) };

        let flat = values(chain([source(3), source(0), source(2)], Ordinal::new()))?;
        let left = values(chain(
            [
                Box::new(chain([source(3), source(0)], Ordinal::new())) as Boxed,
                boxed(2),
            ],
            Ordinal::new(),
        ))?;
        let right = values(chain(
            [
                boxed(3),
                Box::new(chain([source(0), source(2)], Ordinal::new())) as Boxed,
            ],
            Ordinal::new(),
        ))?;
        assert_eq!(flat, vec![0, 1, 2, 0, 1]);
        assert_eq!(left, flat);
        assert_eq!(right, flat);
        Ok(())
    }

    #[test]
    fn identity_filter_and_map_keep_the_input() -> anyhow::Result<()> {
        let filtered = entries(filter(source(7), |_, _| Ok(true), SourceKeys))?;
        let mapped = entries(map(source(7), |value, _| Ok(value), SourceKeys))?;
        let expected = entries(source(7))?;
        assert_eq!(filtered, expected);
        assert_eq!(mapped, expected);
        Ok(())
    }

    #[test]
    fn tee_halves_stream_the_input_whatever_the_interleaving() -> anyhow::Result<()> {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let len = rng.gen_range(0..60);
            let (mut left, mut right) = source(len).tee_keyed();
            let (mut from_left, mut from_right) = (Vec::new(), Vec::new());
            loop {
                let (half, seen) = if rng.gen_bool(0.5) {
                    (&mut left, &mut from_left)
                } else {
                    (&mut right, &mut from_right)
                };
                let step = rng.gen_range(1..6);
                seen.extend(values(head(&mut *half, step, SourceKeys))?);
                assert_eq!(
                    half.buffered(),
                    half.consumed().abs_diff(half.other_consumed())
                );
                assert_le!(half.buffered(), len);
                if from_left.len() == len && from_right.len() == len {
                    break;
                }
            }
            let expected = (0..len).collect::<Vec<_>>();
            assert_eq!(from_left, expected);
            assert_eq!(from_right, expected);
            assert_eq!(left.buffered(), 0);
        }
        Ok(())
    }

    #[test]
    fn tee_runs_halves_to_exhaustion_independently() -> anyhow::Result<()> {
        let (left, right) = letters::<anyhow::Error>(10).tee();
        let right = values(right)?;
        let left = values(left)?;
        assert_eq!(left, right);
        assert_eq!(left.into_iter().collect::<String>(), "abcdefghij");
        Ok(())
    }

    #[test]
    fn tee_scenario() -> anyhow::Result<()> {
        let (mut left, mut right) = letters::<anyhow::Error>(10).tee();
        let take = |half: &mut TeeHalf<_, _>, count| -> anyhow::Result<String> {
            Ok(values(head(half, count, Ordinal::new()))?.into_iter().collect())
        };
        assert_eq!(take(&mut left, 3)?, "abc");
        assert_eq!(take(&mut right, 5)?, "abcde");
        assert_eq!(take(&mut left, 5)?, "defgh");
        assert_eq!(take(&mut right, 2)?, "fg");
        assert_eq!(take(&mut left, 2)?, "ij");
        assert_eq!(take(&mut right, 3)?, "hij");
        Ok(())
    }

    #[test]
    fn chunks_cover_the_input() -> anyhow::Result<()> {
        for len in 0..20 {
            for chunk_size in 1..8 {
                let mut chunks = chunk(source(len), chunk_size, Ordinal::new())?;
                let mut sizes = Vec::new();
                let mut all = Vec::new();
                while let Some((_, chunk)) = chunks.next()? {
                    let items = values(chunk)?;
                    sizes.push(items.len());
                    all.extend(items);
                }
                assert_eq!(all, (0..len).collect::<Vec<_>>());
                if let Some((last, full)) = sizes.split_last() {
                    assert!(full.iter().all(|size| *size == chunk_size));
                    let rest = len % chunk_size;
                    assert_eq!(*last, if rest == 0 { chunk_size } else { rest });
                    assert_ge!(*last, 1);
                } else {
                    assert_eq!(len, 0);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn chunk_scenario() -> anyhow::Result<()> {
        let chunks = letters::<anyhow::Error>(10).chunk(3)?;
        let actual = values(chunks.map_values(|chunk, _| values(chunk)))?;
        assert_eq!(
            actual,
            vec![
                vec!['a', 'b', 'c'],
                vec!['d', 'e', 'f'],
                vec!['g', 'h', 'i'],
                vec!['j'],
            ]
        );
        Ok(())
    }

    #[test]
    fn callback_errors_surface_where_they_happen() {
        let mut input = source(5);
        let result = values(map(
            &mut input,
            |value, _| {
                if value == 2 {
                    anyhow::bail!("cannot map {}", value);
                }
                Ok(value * 10)
            },
            Ordinal::new(),
        ));
        assert_eq!(
            result.map_err(|err| err.to_string()),
            Err("cannot map 2".to_owned())
        );
        assert_eq!(values(input).unwrap(), vec![3, 4]);
    }
}
