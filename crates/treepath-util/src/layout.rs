//! Split flat lists into rows or columns for grid layouts.

/// Split `items` into rows of at most `columns` items, row-major.
///
/// Returns no rows when `columns` is zero.
///
/// ```
/// use treepath_util::split_rows;
///
/// assert_eq!(split_rows(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn split_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    if columns == 0 {
        return Vec::new();
    }
    items.chunks(columns).map(<[T]>::to_vec).collect()
}

/// Split `items` into at most `rows` columns, filling each column top to
/// bottom before moving to the next index.
///
/// Item `i` lands in column `i % rows`. Columns that would be empty are
/// dropped, and zero `rows` yields nothing.
///
/// ```
/// use treepath_util::split_cols;
///
/// assert_eq!(split_cols(&[1, 2, 3, 4, 5], 2), vec![vec![1, 3, 5], vec![2, 4]]);
/// ```
pub fn split_cols<T: Clone>(items: &[T], rows: usize) -> Vec<Vec<T>> {
    if rows == 0 {
        return Vec::new();
    }
    let limit = items.len().div_ceil(rows);
    (0..rows)
        .map(|row| {
            (0..limit)
                .filter_map(|col| items.get(col * rows + row))
                .cloned()
                .collect::<Vec<T>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}
