//! Row driver for whole-frame conversions

/// Calls `f` with the index and contents of every row of `buffer`
///
/// Rows are independent, with the `rayon` feature they are processed in
/// parallel. A trailing chunk shorter than `row_len` is passed as well.
///
/// ```
/// # use vpack_common::frame::for_each_row;
/// let mut buffer = vec![0_usize; 6];
/// for_each_row(&mut buffer, 2, |y, row| row.fill(y));
/// assert_eq!(buffer, [0, 0, 1, 1, 2, 2]);
/// ```
pub fn for_each_row<E, F>(buffer: &mut [E], row_len: usize, f: F)
where
    E: Send,
    F: Fn(usize, &mut [E]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        buffer
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "rayon"))]
    {
        buffer
            .chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_row_length() {
        let mut buffer = [1_u16; 3];
        for_each_row(&mut buffer, 0, |_, row| row.fill(0));
        assert_eq!(buffer, [1; 3]);
    }

    #[test]
    fn every_row_visited_once() {
        let mut buffer = vec![0_usize; 1080 * 4];
        for_each_row(&mut buffer, 4, |y, row| {
            for v in row.iter_mut() {
                *v += y;
            }
        });
        for (y, row) in buffer.chunks(4).enumerate() {
            assert!(row.iter().all(|v| *v == y));
        }
    }
}
