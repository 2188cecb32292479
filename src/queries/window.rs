use super::*;

/// Maximum of every window of `w` consecutive values.
pub fn sliding_window_maximum<T: Ord + Clone>(seq: &[T], w: usize) -> Result<Vec<T>> {
    Ok(sliding_extremum::<_, _, Max>(seq, &Identity, w, Direction::Rightmost)?
        .into_iter()
        .map(|e| e.key)
        .collect())
}

/// Minimum of every window of `w` consecutive values.
pub fn sliding_window_minimum<T: Ord + Clone>(seq: &[T], w: usize) -> Result<Vec<T>> {
    Ok(sliding_extremum::<_, _, Min>(seq, &Identity, w, Direction::Rightmost)?
        .into_iter()
        .map(|e| e.key)
        .collect())
}

/// Position of the maximum of every window of `w` consecutive values.
/// `ties` picks between equal maxima.
pub fn sliding_window_argmax<T: Ord + Clone>(
    seq: &[T],
    w: usize,
    ties: Direction,
) -> Result<Vec<usize>> {
    Ok(sliding_extremum::<_, _, Max>(seq, &Identity, w, ties)?
        .into_iter()
        .map(|e| e.index)
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    const SEQ: [i32; 9] = [1, 2, 3, 1, 4, 5, 2, 3, 6];

    #[test]
    fn maximum() {
        assert_eq!(sliding_window_maximum(&SEQ, 3), Ok(vec![3, 3, 4, 5, 5, 5, 6]));
        assert_eq!(sliding_window_maximum(&SEQ, 1), Ok(SEQ.to_vec()));
        assert_eq!(sliding_window_maximum(&SEQ, 9), Ok(vec![6]));
    }

    #[test]
    fn minimum() {
        assert_eq!(sliding_window_minimum(&SEQ, 3), Ok(vec![1, 1, 1, 1, 2, 2, 2]));
        assert_eq!(sliding_window_minimum(&SEQ, 9), Ok(vec![1]));
    }

    #[test]
    fn argmax_ties() {
        let seq = [2, 2, 1, 2];
        assert_eq!(
            sliding_window_argmax(&seq, 2, Direction::Rightmost),
            Ok(vec![1, 1, 3])
        );
        assert_eq!(
            sliding_window_argmax(&seq, 2, Direction::Leftmost),
            Ok(vec![0, 1, 3])
        );
    }

    #[test]
    fn invalid_windows() {
        assert!(sliding_window_maximum(&SEQ, 0).is_err());
        assert!(sliding_window_maximum(&SEQ, 10).is_err());
        assert_eq!(sliding_window_maximum::<u8>(&[], 3), Ok(vec![]));
    }
}
