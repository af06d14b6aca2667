//! List Reordering
//!
//! Drag-and-drop moves expressed as plain index arithmetic.

/// Move the element at `from` so it ends up at index `to`.
///
/// Same as removing it and reinserting it at `to`. Returns `false` (and
/// leaves the list untouched) when either index is out of range.
pub fn move_index<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() || to >= list.len() {
        return false;
    }
    if from != to {
        let moved = list.remove(from);
        list.insert(to, moved);
    }
    true
}

/// Where a tracked position ends up after `move_index(list, from, to)`.
///
/// The tracked element keeps its identity: it follows itself when it is
/// the one moved, shifts up when an earlier element jumps past it and
/// shifts down when a later element jumps in front of it.
pub fn adjust_tracked_index(tracked: usize, from: usize, to: usize) -> usize {
    if tracked == from {
        to
    } else if from < tracked && tracked <= to {
        tracked - 1
    } else if to <= tracked && tracked < from {
        tracked + 1
    } else {
        tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        assert!(move_index(&mut list, 0, 2));
        assert_eq!(list, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        assert!(move_index(&mut list, 3, 1));
        assert_eq!(list, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut list = vec!['a', 'b'];
        assert!(!move_index(&mut list, 2, 0));
        assert!(!move_index(&mut list, 0, 5));
        assert_eq!(list, vec!['a', 'b']);
    }

    #[test]
    fn test_move_keeps_every_element_once() {
        let original: Vec<u32> = (0..5).collect();
        for from in 0..5 {
            for to in 0..5 {
                let mut list = original.clone();
                assert!(move_index(&mut list, from, to));
                assert_eq!(list.len(), original.len());
                assert_eq!(list[to], original[from]);

                let mut without_moved = original.clone();
                without_moved.remove(from);
                let mut rest = list.clone();
                rest.remove(to);
                assert_eq!(rest, without_moved);
            }
        }
    }

    #[test]
    fn test_tracked_index_follows_same_element() {
        let original = vec!['a', 'b', 'c', 'd', 'e'];
        for tracked in 0..original.len() {
            for from in 0..original.len() {
                for to in 0..original.len() {
                    let mut list = original.clone();
                    move_index(&mut list, from, to);
                    let adjusted = adjust_tracked_index(tracked, from, to);
                    assert_eq!(list[adjusted], original[tracked], "tracked={tracked} from={from} to={to}");
                }
            }
        }
    }

    #[test]
    fn test_current_song_example() {
        // [A, B, C] playing C; drag A to the end -> [B, C, A] still playing C
        let mut list = vec!["A", "B", "C"];
        move_index(&mut list, 0, 2);
        assert_eq!(list, vec!["B", "C", "A"]);
        assert_eq!(adjust_tracked_index(2, 0, 2), 1);
    }
}
