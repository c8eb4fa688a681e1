//! Splits a sequence around its first element.

/// Removes the first element of `v` as the pivot and splits the rest into the elements for which
/// `is_less(elem, &pivot)` holds and all others.
///
/// Returns `None` for an empty input. Both partitions keep the order in which the elements were
/// encountered, and elements equal to the pivot end up in the right partition. Exactly
/// `v.len() - 1` comparisons are made, front to back.
pub fn partition_first<T, F>(v: Vec<T>, is_less: &mut F) -> Option<(T, Vec<T>, Vec<T>)>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut iter = v.into_iter();
    let pivot = iter.next()?;

    let (left, right): (Vec<T>, Vec<T>) = iter.partition(|elem| is_less(elem, &pivot));

    Some((pivot, left, right))
}

/// Like [`partition_first`], but stops at the first comparison that fails.
///
/// On error the pivot, the already partitioned elements and the rest of the input are dropped.
pub(crate) fn try_partition_first<T, E, F>(
    v: Vec<T>,
    is_less: &mut F,
) -> Result<Option<(T, Vec<T>, Vec<T>)>, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut iter = v.into_iter();
    let Some(pivot) = iter.next() else {
        return Ok(None);
    };

    let mut left = Vec::new();
    let mut right = Vec::with_capacity(iter.len());

    for elem in iter {
        if is_less(&elem, &pivot)? {
            left.push(elem);
        } else {
            right.push(elem);
        }
    }

    Ok(Some((pivot, left, right)))
}
