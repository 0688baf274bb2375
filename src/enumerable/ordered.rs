//! The sort stage of a pipeline.

use std::fmt;

use crate::ordering::{Direction, KeyList, sort_slice};

/// Iterator produced by [`Enumerable::order_by`](super::Enumerable::order_by)
/// and [`Enumerable::order_by_descending`](super::Enumerable::order_by_descending).
///
/// Nothing is pulled from the upstream until the first call to `next`, which
/// buffers the whole upstream, sorts it, and then drains the buffer.
///
/// ```text
///                  first next()
///     Pending ─────────────────────► Draining
/// ```
pub struct Ordered<'a, I: Iterator> {
    state: OrderedState<'a, I>,
}

enum OrderedState<'a, I: Iterator> {
    /// Upstream not yet pulled.
    Pending {
        source: I,
        keys: KeyList<'a, I::Item>,
        direction: Direction,
    },
    /// Upstream buffered and sorted.
    Draining(std::vec::IntoIter<I::Item>),
}

impl<'a, I: Iterator> Ordered<'a, I> {
    pub(super) fn new(source: I, keys: KeyList<'a, I::Item>, direction: Direction) -> Self {
        Self {
            state: OrderedState::Pending {
                source,
                keys,
                direction,
            },
        }
    }

    fn materialize(&mut self) {
        let state = std::mem::replace(
            &mut self.state,
            OrderedState::Draining(Vec::new().into_iter()),
        );
        if let OrderedState::Pending {
            source,
            keys,
            direction,
        } = state
        {
            let mut buffer: Vec<I::Item> = source.collect();
            sort_slice(&mut buffer, &keys, direction);
            tracing::trace!(
                buffered = buffer.len(),
                keys = keys.len(),
                ?direction,
                "Ordered stage materialized"
            );
            self.state = OrderedState::Draining(buffer.into_iter());
        }
    }

    /// Returns `true` once the upstream has been buffered.
    #[cfg(test)]
    const fn is_materialized(&self) -> bool {
        matches!(self.state, OrderedState::Draining(_))
    }
}

impl<I: Iterator> Iterator for Ordered<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, OrderedState::Pending { .. }) {
            self.materialize();
        }
        match &mut self.state {
            OrderedState::Draining(buffer) => buffer.next(),
            OrderedState::Pending { .. } => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            OrderedState::Pending { source, .. } => source.size_hint(),
            OrderedState::Draining(buffer) => buffer.size_hint(),
        }
    }
}

impl<I: Iterator> fmt::Debug for Ordered<'_, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            OrderedState::Pending { direction, .. } => format!("Pending({direction:?})"),
            OrderedState::Draining(buffer) => format!("Draining({} left)", buffer.len()),
        };
        formatter
            .debug_struct("Ordered")
            .field("state", &state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{by_key, validate_keys};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_pending_until_first_pull() {
        let pulls = Cell::new(0);
        let source = vec![3, 1, 2].into_iter().inspect(|_| pulls.set(pulls.get() + 1));
        let keys = validate_keys([by_key(|value: &i32| *value)]).unwrap();
        let mut ordered = Ordered::new(source, keys, Direction::Ascending);

        assert!(!ordered.is_materialized());
        assert_eq!(pulls.get(), 0);

        assert_eq!(ordered.next(), Some(1));
        assert!(ordered.is_materialized());
        assert_eq!(pulls.get(), 3);

        assert_eq!(ordered.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_descending() {
        let keys = validate_keys([by_key(|value: &i32| *value)]).unwrap();
        let ordered = Ordered::new(vec![3, 1, 2].into_iter(), keys, Direction::Descending);
        assert_eq!(ordered.collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_empty_upstream() {
        let keys = validate_keys([by_key(|value: &i32| *value)]).unwrap();
        let mut ordered = Ordered::new(Vec::new().into_iter(), keys, Direction::Ascending);
        assert_eq!(ordered.next(), None);
        assert_eq!(ordered.next(), None);
    }

    #[rstest]
    fn test_size_hint_tracks_buffer() {
        let keys = validate_keys([by_key(|value: &i32| *value)]).unwrap();
        let mut ordered = Ordered::new(vec![2, 1].into_iter(), keys, Direction::Ascending);
        assert_eq!(ordered.size_hint(), (2, Some(2)));
        ordered.next();
        assert_eq!(ordered.size_hint(), (1, Some(1)));
    }

    #[rstest]
    fn test_debug_reports_state() {
        let keys = validate_keys([by_key(|value: &i32| *value)]).unwrap();
        let ordered = Ordered::new(vec![1].into_iter(), keys, Direction::Ascending);
        assert_eq!(
            format!("{ordered:?}"),
            "Ordered { state: \"Pending(Ascending)\" }"
        );
    }
}
