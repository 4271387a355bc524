//! Emptiness capabilities.
//!
//! A value can report emptiness in one of three ways: by the length of its
//! text, by the count of a sized container, or by pulling a first element from
//! a sequence. [`Emptiness`] maps a type onto exactly one of these, or onto
//! [`Capability::Opaque`] when it has none.
//!
//! Every type declares a single capability, which settles the priority rules
//! statically: text types never report as containers (even though `String`
//! has a length), and sized containers never report as sequences (counting
//! does not consume anything, pulling might).
//!
//! ```rust
//! use allege::emptiness::{Capability, Emptiness};
//!
//! let mut words = vec!["a", "b"];
//! assert!(matches!(words.capability(), Capability::Counted(2)));
//!
//! let mut name = String::from("report");
//! assert!(matches!(name.capability(), Capability::Text("report")));
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::iter::{Empty, Once};
use std::ops::{Range, RangeInclusive};
use std::rc::Rc;
use std::sync::Arc;

/// The closed set of ways a value can report emptiness.
pub enum Capability<'a> {
    /// String-like value; empty when the text has zero length.
    Text(&'a str),
    /// Sized container; empty when the count is zero.
    Counted(usize),
    /// Traversal-only sequence; empty when no first element can be pulled.
    Sequence(Traversal<'a>),
    /// No recognized capability.
    Opaque,
}

/// Types that can report whether they are empty.
///
/// The default implementation reports [`Capability::Opaque`], so a type that
/// should be rejected as unsupported only needs an empty `impl`.
pub trait Emptiness {
    /// Returns the capability through which this value reports emptiness.
    fn capability(&mut self) -> Capability<'_> {
        Capability::Opaque
    }
}

trait Cursor {
    fn advance(&mut self) -> bool;
}

impl<I: Iterator> Cursor for I {
    #[inline]
    fn advance(&mut self) -> bool {
        self.next().is_some()
    }
}

/// A scoped cursor over a sequence.
///
/// Dropping the traversal releases the cursor. [`Traversal::pull_first`]
/// consumes `self`, so the cursor is gone once the check returns or unwinds.
pub struct Traversal<'a> {
    cursor: Box<dyn Cursor + 'a>,
}

impl<'a> Traversal<'a> {
    /// Wraps an iterator as a traversal cursor.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator + 'a,
    {
        Self { cursor: Box::new(iter) }
    }

    /// Pulls at most one element and releases the cursor.
    ///
    /// Returns `true` if an element was available. The element itself is
    /// dropped immediately.
    pub fn pull_first(mut self) -> bool {
        self.cursor.advance()
    }
}

/// A single-pass sequence.
///
/// Checking a `Sequence` for emptiness consumes its first element. Wrap
/// `&mut iter` to keep ownership of the iterator and observe that
/// consumption; wrap the iterator by value to have it dropped with the check.
#[derive(Debug, Clone)]
pub struct Sequence<I>(pub I);

impl<I: Iterator> Sequence<I> {
    /// Wraps an iterator.
    pub fn new(iter: I) -> Self {
        Self(iter)
    }

    /// Unwraps the iterator.
    pub fn into_inner(self) -> I {
        self.0
    }
}

/// Wraps anything iterable as a single-pass [`Sequence`].
pub fn sequence<T: IntoIterator>(iterable: T) -> Sequence<T::IntoIter> {
    Sequence(iterable.into_iter())
}

impl<I: Iterator> Emptiness for Sequence<I> {
    fn capability(&mut self) -> Capability<'_> {
        Capability::Sequence(Traversal::new(&mut self.0))
    }
}

/// A repeatable sequence backed by a borrowed source.
///
/// Each check starts a fresh iterator over the source, so nothing is consumed
/// and repeated checks agree.
#[derive(Debug)]
pub struct Iterable<'c, C: ?Sized>(pub &'c C);

impl<C: ?Sized> Clone for Iterable<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Iterable<'_, C> {}

/// Wraps a borrowed source as a repeatable [`Iterable`].
pub fn iterable<C: ?Sized>(source: &C) -> Iterable<'_, C> {
    Iterable(source)
}

impl<'c, C: ?Sized> Emptiness for Iterable<'c, C>
where
    &'c C: IntoIterator,
    <&'c C as IntoIterator>::IntoIter: 'c,
{
    fn capability(&mut self) -> Capability<'_> {
        Capability::Sequence(Traversal::new(<&'c C as IntoIterator>::into_iter(self.0)))
    }
}

macro_rules! text {
    ($(impl[$($g:tt)*] $ty:ty;)*) => {$(
        impl<$($g)*> Emptiness for $ty {
            #[inline]
            fn capability(&mut self) -> Capability<'_> {
                Capability::Text(<$ty as AsRef<str>>::as_ref(self))
            }
        }
    )*};
}

macro_rules! counted {
    ($(impl[$($g:tt)*] $ty:ty;)*) => {$(
        impl<$($g)*> Emptiness for $ty {
            #[inline]
            fn capability(&mut self) -> Capability<'_> {
                Capability::Counted(self.len())
            }
        }
    )*};
}

macro_rules! traversed {
    ($(impl[$($g:tt)*] $ty:ty;)*) => {$(
        impl<$($g)*> Emptiness for $ty
        where
            $ty: Iterator,
        {
            fn capability(&mut self) -> Capability<'_> {
                Capability::Sequence(Traversal::new(self))
            }
        }
    )*};
}

text! {
    impl['a] &'a str;
    impl['a] &'a mut str;
    impl[] String;
    impl['a] &'a String;
    impl['a] &'a mut String;
    impl[] Box<str>;
    impl['a] &'a Box<str>;
    impl[] Rc<str>;
    impl[] Arc<str>;
    impl['a] Cow<'a, str>;
}

counted! {
    impl['a, T] &'a [T];
    impl['a, T] &'a mut [T];
    impl[T, const N: usize] [T; N];
    impl['a, T, const N: usize] &'a [T; N];
    impl[T] Box<[T]>;
    impl[T] Vec<T>;
    impl['a, T] &'a Vec<T>;
    impl['a, T] &'a mut Vec<T>;
    impl[T] VecDeque<T>;
    impl['a, T] &'a VecDeque<T>;
    impl['a, T] &'a mut VecDeque<T>;
    impl[T] LinkedList<T>;
    impl['a, T] &'a LinkedList<T>;
    impl['a, T] &'a mut LinkedList<T>;
    impl[T] BinaryHeap<T>;
    impl['a, T] &'a BinaryHeap<T>;
    impl['a, T] &'a mut BinaryHeap<T>;
    impl[K, V, S] HashMap<K, V, S>;
    impl['a, K, V, S] &'a HashMap<K, V, S>;
    impl['a, K, V, S] &'a mut HashMap<K, V, S>;
    impl[T, S] HashSet<T, S>;
    impl['a, T, S] &'a HashSet<T, S>;
    impl['a, T, S] &'a mut HashSet<T, S>;
    impl[K, V] BTreeMap<K, V>;
    impl['a, K, V] &'a BTreeMap<K, V>;
    impl['a, K, V] &'a mut BTreeMap<K, V>;
    impl[T] BTreeSet<T>;
    impl['a, T] &'a BTreeSet<T>;
    impl['a, T] &'a mut BTreeSet<T>;
}

// Std ranges are their own iterators, so they are single-pass like `Sequence`.
traversed! {
    impl[A] Range<A>;
    impl[A] RangeInclusive<A>;
    impl[T] Empty<T>;
    impl[T] Once<T>;
}

impl Emptiness for () {}
impl Emptiness for &dyn Any {}
impl Emptiness for Box<dyn Any> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn is_text<T: Emptiness>(mut value: T) -> bool {
        let capability = value.capability();
        matches!(capability, Capability::Text(_))
    }

    fn count<T: Emptiness>(mut value: T) -> Option<usize> {
        if let Capability::Counted(n) = value.capability() {
            return Some(n);
        }
        None
    }

    #[test]
    fn test_strings_report_text() {
        assert!(is_text("abc"));
        assert!(is_text(String::new()));
        assert!(is_text(Cow::Borrowed("x")));
        assert!(is_text(Arc::<str>::from("shared")));
    }

    #[test]
    fn test_containers_report_count() {
        assert_eq!(count(vec![1, 2, 3]), Some(3));
        assert_eq!(count([0u8; 4]), Some(4));
        assert_eq!(count(&[] as &[i32]), Some(0));
        assert_eq!(count(HashMap::<u8, u8>::new()), Some(0));
        assert_eq!(count(BTreeSet::from([1, 2])), Some(2));
    }

    #[test]
    fn test_counting_does_not_mutate() {
        let mut items = vec![1, 2];
        assert_eq!(count(&items), Some(2));
        items.push(3);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_inner_keeps_remaining_elements() {
        let mut seq = sequence(vec!['a', 'b', 'c']);
        match seq.capability() {
            Capability::Sequence(t) => assert!(t.pull_first()),
            _ => panic!("expected a sequence"),
        }
        assert_eq!(seq.into_inner().collect::<String>(), "bc");
    }

    #[test]
    fn test_sequence_pull_consumes_one() {
        let mut iter = 1..=3;
        let mut seq = Sequence::new(&mut iter);
        match seq.capability() {
            Capability::Sequence(t) => assert!(t.pull_first()),
            _ => panic!("expected a sequence"),
        }
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_iterable_is_repeatable() {
        let source = vec![10, 20];
        let mut it = iterable(&source);
        for _ in 0..3 {
            match it.capability() {
                Capability::Sequence(t) => assert!(t.pull_first()),
                _ => panic!("expected a sequence"),
            }
        }
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_traversal_drops_cursor() {
        struct Tracked<'a>(&'a Cell<bool>);
        impl Iterator for Tracked<'_> {
            type Item = ();
            fn next(&mut self) -> Option<()> {
                None
            }
        }
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let released = Cell::new(false);
        let traversal = Traversal::new(Tracked(&released));
        assert!(!released.get());
        assert!(!traversal.pull_first());
        assert!(released.get());
    }

    #[test]
    fn test_default_is_opaque() {
        struct Handle;
        impl Emptiness for Handle {}
        assert!(matches!(Handle.capability(), Capability::Opaque));
        assert!(matches!(().capability(), Capability::Opaque));
    }
}
