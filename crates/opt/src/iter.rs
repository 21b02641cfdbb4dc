use core::mem;

use crate::opt::Opt;

/// Borrowing iterator over the zero or one values of an `Opt`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Opt<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Opt<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        mem::replace(&mut self.inner, Opt::None).into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over the zero or one values of an `Opt`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Opt<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        mem::replace(&mut self.inner, Opt::None).into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
