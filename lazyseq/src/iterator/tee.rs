//! Forks one sequence into two independently paced sequences.
//!
//! Both halves share a single state: the source, one FIFO buffer and
//! the number of entries each half has consumed so far. The half that is
//! ahead (or level) pulls from the source and appends a copy of the entry to
//! the buffer. The half that is behind pops the oldest buffered entry. Hence:
//!
//! - the source is pulled exactly once per entry,
//! - the buffer always holds `|left - right|` entries, those the lagging half
//!   has not seen yet,
//! - each half sees the entries in source order.
//!
//! Once a half is dropped, the other one stops buffering for it. Halves are not
//! meant to be shared between threads.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use fallible_iterator::FallibleIterator;

use crate::keys::KeyPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

struct TeeState<I: FallibleIterator> {
    input: I,
    end_of_input: bool,
    buffer: VecDeque<I::Item>,
    left: usize,
    right: usize,
    detached: Option<Side>,
}

impl<I: FallibleIterator> TeeState<I> {
    fn position(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn position_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn detach(&mut self, side: Side) {
        self.detached = Some(side);
        if self.position(side) < self.position(side.other()) {
            tracing::trace!(
                ?side,
                dropped = self.buffer.len(),
                "lagging tee half detached"
            );
            self.buffer.clear();
        }
    }
}

impl<I: FallibleIterator<Item = (K, V)>, K: Clone, V: Clone> TeeState<I> {
    fn pull(&mut self, side: Side) -> Result<Option<I::Item>, I::Error> {
        let other = side.other();
        let entry = if self.position(side) >= self.position(other) {
            if self.end_of_input {
                return Ok(None);
            }
            match self.input.next()? {
                Some((key, value)) => {
                    if self.detached != Some(other) {
                        self.buffer.push_back((key.clone(), value.clone()));
                        tracing::trace!(
                            ?side,
                            buffered = self.buffer.len(),
                            "tee pulled from input"
                        );
                    }
                    (key, value)
                }
                None => {
                    self.end_of_input = true;
                    return Ok(None);
                }
            }
        } else {
            match self.buffer.pop_front() {
                Some(entry) => {
                    tracing::trace!(?side, buffered = self.buffer.len(), "tee replayed entry");
                    entry
                }
                None => {
                    debug_assert!(false, "tee buffer is empty while {:?} lags behind", side);
                    return Ok(None);
                }
            }
        };
        *self.position_mut(side) += 1;
        Ok(Some(entry))
    }
}

/// One of the two sequences returned by [`tee`].
pub struct TeeHalf<I: FallibleIterator, P> {
    state: Rc<RefCell<TeeState<I>>>,
    side: Side,
    keys: P,
}

impl<I: FallibleIterator, P> TeeHalf<I, P> {
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of entries this half has emitted.
    pub fn consumed(&self) -> usize {
        self.state.borrow().position(self.side)
    }

    /// Number of entries the other half has emitted.
    pub fn other_consumed(&self) -> usize {
        self.state.borrow().position(self.side.other())
    }

    /// Number of entries held for the lagging half.
    pub fn buffered(&self) -> usize {
        self.state.borrow().buffer.len()
    }
}

impl<I: FallibleIterator<Item = (K, V)>, K, V, P> FallibleIterator for TeeHalf<I, P>
where
    K: Clone,
    V: Clone,
    P: KeyPolicy<K, V>,
{
    type Item = (P::Key, P::Value);
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let entry = self.state.borrow_mut().pull(self.side)?;
        Ok(entry.map(|(key, value)| self.keys.apply(key, value)))
    }
}

impl<I: FallibleIterator, P> Drop for TeeHalf<I, P> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.detach(self.side);
        }
    }
}

/// Forks `input` into a left and a right sequence which both stream all of
/// its entries, each at its own pace.
pub fn tee<I, K, V, P>(input: I, keys: P) -> (TeeHalf<I, P>, TeeHalf<I, P>)
where
    I: FallibleIterator<Item = (K, V)>,
    K: Clone,
    V: Clone,
    P: KeyPolicy<K, V> + Clone,
{
    let state = Rc::new(RefCell::new(TeeState {
        input,
        end_of_input: false,
        buffer: VecDeque::new(),
        left: 0,
        right: 0,
        detached: None,
    }));
    (
        TeeHalf {
            state: Rc::clone(&state),
            side: Side::Left,
            keys: keys.clone(),
        },
        TeeHalf {
            state,
            side: Side::Right,
            keys,
        },
    )
}
