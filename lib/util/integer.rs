use std::iter::Map;
use std::mem::{size_of, transmute_copy};
use std::ops::RangeInclusive;

/// Trait for types that can be represented by a contiguous range of `i8`.
///
/// # Safety
///
/// Must only be implemented for types that can be safely transmuted to and from `i8`.
pub unsafe trait Integer: Copy {
    /// The minimum repr.
    const MIN: i8;

    /// The maximum repr.
    const MAX: i8;

    /// Casts from the repr.
    #[inline(always)]
    fn new(i: i8) -> Self {
        debug_assert_eq!(size_of::<Self>(), size_of::<i8>());
        debug_assert!(Self::in_range(i));
        unsafe { transmute_copy(&i) }
    }

    /// Casts to the repr.
    #[inline(always)]
    fn get(self) -> i8 {
        unsafe { transmute_copy(&self) }
    }

    /// Converts from the repr if it is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn convert(i: i8) -> Option<Self> {
        Self::in_range(i).then(|| Self::new(i))
    }

    /// Whether a value is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: i8) -> bool {
        (Self::MIN..=Self::MAX).contains(&i)
    }

    /// An iterator over all values in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<i8>, fn(i8) -> Self> {
        (Self::MIN..=Self::MAX).map(Self::new as fn(i8) -> Self)
    }
}
