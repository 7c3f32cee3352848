//! Set intersection and filtering helpers.
//!
//! Pure functions - no I/O, no shared state.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements present in both slices.
///
/// Hashes the shorter slice and scans the longer one, so the result keeps the
/// longer slice's order and duplicates. See `find_common_elements_unique` for
/// set semantics.
pub fn find_common_elements<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let seen: HashSet<&T> = small.iter().collect();
    large.iter().filter(|x| seen.contains(x)).cloned().collect()
}

/// Elements of `b` that also appear in `a`, in `b`'s order.
///
/// Works on arbitrary iterators, so the sides cannot be swapped by length.
pub fn find_common_elements_iter<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let seen: HashSet<T> = a.into_iter().collect();
    b.into_iter().filter(|x| seen.contains(x)).collect()
}

/// Distinct elements present in both inputs. Order is unspecified.
pub fn find_common_elements_unique<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let right: HashSet<T> = b.into_iter().collect();
    let left: HashSet<T> = a.into_iter().collect();
    left.into_iter().filter(|x| right.contains(x)).collect()
}

/// Even integers from `numbers`, in input order.
pub fn even_numbers<I>(numbers: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    numbers.into_iter().filter(|n| n % 2 == 0).collect()
}
