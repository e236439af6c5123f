use core::convert::Infallible;

/// A fallible operation applied to each element of a sequence.
///
/// Any `FnMut(T) -> Result<(), E>` closure is a visitor. Implement the trait
/// directly for visitors that keep state the caller wants back afterwards,
/// and pass them with [`Visit::by_ref`].
pub trait Visit<T> {
    type Error;

    /// Visit one element. Returning `Err` stops a fail-fast traversal.
    fn visit(&mut self, item: T) -> Result<(), Self::Error>;

    /// Borrow this visitor so it can be passed by value and used again.
    fn by_ref(&mut self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef(self)
    }
}

impl<T, E, F> Visit<T> for F
where
    F: FnMut(T) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn visit(&mut self, item: T) -> Result<(), E> {
        self(item)
    }
}

/// The visitor that does nothing. It never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Noop;

impl<T> Visit<T> for Noop {
    type Error = Infallible;

    #[inline]
    fn visit(&mut self, _item: T) -> Result<(), Infallible> {
        Ok(())
    }
}

/// A visitor borrowed through [`Visit::by_ref`].
#[derive(Debug)]
pub struct ByRef<'a, V>(&'a mut V);

impl<T, V: Visit<T>> Visit<T> for ByRef<'_, V> {
    type Error = V::Error;

    #[inline]
    fn visit(&mut self, item: T) -> Result<(), V::Error> {
        self.0.visit(item)
    }
}
