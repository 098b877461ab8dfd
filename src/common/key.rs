//! Key validity contract.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A key that can be stored in the tree.
///
/// Keys must be totally ordered. A key may additionally report itself as
/// *null*, the equivalent of a missing argument; the tree rejects null keys
/// with [`Error::InvalidArgument`](crate::Error::InvalidArgument) before it
/// touches any node.
///
/// Plain values (integers, strings, byte strings) are never null. An
/// `Option<T>` key is null when it is `None`.
///
/// # Example
/// ```
/// use fanout_btree::IndexKey;
///
/// assert!(!"".is_null());
/// assert!(!42u64.is_null());
/// assert!(None::<u64>.is_null());
/// assert!(!Some(7u64).is_null());
/// ```
pub trait IndexKey: Ord {
    /// Whether this key stands for "no key at all".
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl IndexKey for $ty {})*
    };
}

impl_never_null!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, (), String, str,
);

impl<T: Ord> IndexKey for [T] {}

impl<T: Ord> IndexKey for Vec<T> {}

impl<T: Ord, const N: usize> IndexKey for [T; N] {}

impl<T: Ord> IndexKey for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: IndexKey + ?Sized> IndexKey for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: IndexKey + ?Sized> IndexKey for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: IndexKey + ?Sized> IndexKey for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: IndexKey + ?Sized> IndexKey for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> IndexKey for Cow<'_, T>
where
    T: IndexKey + ToOwned + ?Sized,
{
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
