/// Build a [`GrowableArray`](crate::GrowableArray) from a literal list,
/// or from one value repeated `n` times.
///
/// Capacity always equals the number of elements.
///
/// ```
/// use growvec_array::{growable, GrowableArray};
///
/// let empty: GrowableArray<u8> = growable![];
/// assert!(empty.is_empty());
///
/// let zeros = growable![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let list = growable![1, 2, 3];
/// assert_eq!(list.capacity(), 3);
/// ```
#[macro_export]
macro_rules! growable {
    () => {
        $crate::GrowableArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowableArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($x),+])
    };
}
