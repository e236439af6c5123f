use super::visit::Visit;

/// Visit every element of `sequence` in order and return how many there were.
///
/// The visitor is called exactly once per element. An empty sequence returns
/// `0` without calling it.
///
/// ```
/// use tally_core::count;
///
/// let mut seen = Vec::new();
/// let n = count(&[7, 3, 9], |x| seen.push(*x));
/// assert_eq!(n, 3);
/// assert_eq!(seen, [7, 3, 9]);
/// ```
pub fn count<I, F>(sequence: I, mut visitor: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    let Ok(n) = try_count(sequence, |item: I::Item| {
        visitor(item);
        Ok::<(), core::convert::Infallible>(())
    });
    n
}

/// Fail-fast variant of [`count`].
///
/// The first error returned by the visitor ends the traversal: no later
/// element is visited and the error is returned as is, without a count.
///
/// ```
/// use tally_core::try_count;
///
/// let mut seen = Vec::new();
/// let res = try_count(["a", "b", "c", "d"], |s: &str| {
///     seen.push(s.to_string());
///     if s == "c" { Err(format!("cannot visit {s}")) } else { Ok(()) }
/// });
/// assert_eq!(res, Err("cannot visit c".to_string()));
/// assert_eq!(seen, ["a", "b", "c"]);
/// ```
pub fn try_count<I, V>(sequence: I, mut visitor: V) -> Result<usize, V::Error>
where
    I: IntoIterator,
    V: Visit<I::Item>,
{
    let mut n = 0;
    for item in sequence {
        visitor.visit(item)?;
        n += 1;
    }
    Ok(n)
}
