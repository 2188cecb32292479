use super::*;

/// For each day, the number of days until a strictly warmer one, or 0 if no
/// warmer day follows.
pub fn daily_temperatures<T: Ord + Clone>(temps: &[T]) -> Vec<usize> {
    next_greater_elements(temps)
        .into_iter()
        .enumerate()
        .map(|(i, j)| j.map_or(0, |j| j - i))
        .collect()
}

/// For each index, the nearest later index holding a strictly greater value.
pub fn next_greater_elements<T: Ord + Clone>(seq: &[T]) -> Vec<Option<usize>> {
    nearest_better::<_, Max>(seq, &Identity, Scan::RightToLeft)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warmer_days() {
        assert_eq!(
            daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
            [1, 1, 4, 2, 1, 1, 0, 0]
        );
    }

    #[test]
    fn equal_is_not_warmer() {
        assert_eq!(daily_temperatures(&[30, 30, 30]), [0, 0, 0]);
        assert_eq!(daily_temperatures(&[30, 30, 31]), [2, 1, 0]);
    }

    #[test]
    fn monotone_inputs() {
        assert_eq!(daily_temperatures(&[1, 2, 3, 4]), [1, 1, 1, 0]);
        assert_eq!(daily_temperatures(&[4, 3, 2, 1]), [0, 0, 0, 0]);
        assert!(daily_temperatures::<i32>(&[]).is_empty());
    }

    #[test]
    fn next_greater() {
        assert_eq!(
            next_greater_elements(&['b', 'a', 'c']),
            [Some(2), Some(2), None]
        );
    }
}
