use std::collections::VecDeque;
use std::vec::IntoIter;

/// An iterator that supports peeking and conditional consumption.
///
/// This struct is a beefed-up version of rustlib's [`Peekable`]. Besides peeking at the next
/// item, it can consume that item only when it satisfies a predicate, which is what a
/// recursive-descent parser needs to decide between grammar alternatives.
///
/// [`Peekable`]: core::iter::Peekable
pub struct PeekIter<T>
where
    T: Clone,
{
    iter: IntoIter<T>,
    /// A store of items we had to consume from the iterator for peeking.
    lookahead: VecDeque<Option<T>>,
}

impl<T> PeekIter<T>
where
    T: Clone,
{
    pub fn new(iter: IntoIter<T>) -> Self {
        let mut lookahead = VecDeque::new();
        lookahead.reserve(2);

        Self { iter, lookahead }
    }

    /// Returns a reference to the next value in the iterator, without consuming it, or `None` if
    /// the iteration is complete.
    pub fn peek(&mut self) -> Option<&T> {
        if self.lookahead.is_empty() {
            let next = self.iter.next();
            self.lookahead.push_back(next);
        }
        self.lookahead[0].as_ref()
    }

    /// Consumes and returns the next value only if it satisfies `pred`.
    pub fn next_if<P>(&mut self, pred: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self.peek() {
            Some(item) if pred(item) => self.next(),
            _ => None,
        }
    }
}

impl<T> Iterator for PeekIter<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.lookahead
            .pop_front()
            // Note that unwrap_or *cannot* be used here because it is easily evaluated, and will
            // evaluate `self.iter.next()` before the lookahead is checked!
            .unwrap_or_else(|| self.iter.next())
    }
}
