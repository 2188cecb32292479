use super::*;
use num::{CheckedMul, NumCast, Zero};

/// Area of the largest rectangle that fits under the histogram `heights`.
///
/// Each bar extends left and right up to (not including) the nearest strictly
/// lower bar, found with one deque pass in each direction.
pub fn largest_rectangle_area<T>(heights: &[T]) -> Result<T>
where
    T: Copy + Ord + Zero + CheckedMul + NumCast,
{
    if let Some(i) = heights.iter().position(|h| *h < T::zero()) {
        return Err(WindowError::invalid(
            "heights",
            format!("bar {i} has a negative height"),
        ));
    }
    let n = heights.len();
    let left = nearest_better::<_, Min>(heights, &Identity, Scan::LeftToRight);
    let right = nearest_better::<_, Min>(heights, &Identity, Scan::RightToLeft);

    let mut best = T::zero();
    for (i, &h) in heights.iter().enumerate() {
        // A zero bar has zero area whatever its width, which need not fit in `T`.
        if h == T::zero() {
            continue;
        }
        // Boundaries are exclusive: -1 and n when no lower bar exists.
        let lo = left[i].map_or(0, |l| l + 1);
        let hi = right[i].unwrap_or(n);
        let area = <T as NumCast>::from(hi - lo)
            .and_then(|width| width.checked_mul(&h))
            .ok_or_else(|| {
                WindowError::invalid("heights", format!("area at bar {i} overflows"))
            })?;
        best = best.max(area);
    }
    debug!(n, "largest_rectangle_area");
    Ok(best)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classic() {
        assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), Ok(10));
        assert_eq!(largest_rectangle_area(&[2u64, 4]), Ok(4));
    }

    #[test]
    fn monotone_histograms() {
        // Every bar hits a sentinel boundary on one side.
        assert_eq!(largest_rectangle_area(&[1, 2, 3, 4, 5]), Ok(9));
        assert_eq!(largest_rectangle_area(&[5, 4, 3, 2, 1]), Ok(9));
        assert_eq!(largest_rectangle_area(&[3, 3, 3]), Ok(9));
    }

    #[test]
    fn degenerate() {
        assert_eq!(largest_rectangle_area::<i32>(&[]), Ok(0));
        assert_eq!(largest_rectangle_area(&[0, 0]), Ok(0));
        assert_eq!(largest_rectangle_area(&[7]), Ok(7));
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            largest_rectangle_area(&[1, -2]),
            Err(WindowError::InvalidArgument { name: "heights", .. })
        ));
        assert!(largest_rectangle_area(&[100u8, 100, 100]).is_err());
    }

    #[test]
    fn zero_bars_wider_than_the_type() {
        assert_eq!(largest_rectangle_area(&[0i8; 200]), Ok(0));
        assert_eq!(largest_rectangle_area(&[0u8; 300]), Ok(0));
        let mut heights = vec![0u8; 300];
        heights[150] = 5;
        assert_eq!(largest_rectangle_area(&heights), Ok(5));
    }
}
