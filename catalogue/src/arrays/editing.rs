//! Positional insert/delete written as explicit element shifts.
//!
//! Equations:
//!   insert_at(p): for i in (p, N]: a[i] = a[i-1]; a[p] = x     O(N - p)
//!   delete_at(p): for i in [p, N-1): a[i] = a[i+1]; pop         O(N - p)

use crate::error::{CatalogueError, Result};

/// Inserts `element` at `position` (`0..=len`), shifting the tail right.
pub fn insert_at<T: Clone>(items: &mut Vec<T>, element: T, position: usize) -> Result<()> {
    let len = items.len();
    if position > len {
        return Err(CatalogueError::PositionOutOfRange { position, len });
    }
    items.push(element.clone());
    for i in (position + 1..=len).rev() {
        items[i] = items[i - 1].clone();
    }
    items[position] = element;
    Ok(())
}

/// Removes and returns the element at `position`, shifting the tail left.
pub fn delete_at<T: Clone>(items: &mut Vec<T>, position: usize) -> Result<T> {
    let len = items.len();
    if position >= len {
        return Err(CatalogueError::PositionOutOfRange { position, len });
    }
    let removed = items[position].clone();
    for i in position..len - 1 {
        items[i] = items[i + 1].clone();
    }
    items.pop();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shifts_right() {
        let mut v = vec![1, 2, 4, 5];
        insert_at(&mut v, 3, 2).unwrap();
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
        insert_at(&mut v, 6, 5).unwrap();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
        insert_at(&mut v, 0, 0).unwrap();
        assert_eq!(v[0], 0);
    }

    #[test]
    fn delete_shifts_left() {
        let mut v = vec![10, 20, 30, 40];
        assert_eq!(delete_at(&mut v, 1), Ok(20));
        assert_eq!(v, vec![10, 30, 40]);
        assert_eq!(delete_at(&mut v, 2), Ok(40));
        assert_eq!(v, vec![10, 30]);
    }

    #[test]
    fn invalid_positions_are_rejected() {
        let mut v = vec![1];
        assert_eq!(
            insert_at(&mut v, 9, 3),
            Err(CatalogueError::PositionOutOfRange { position: 3, len: 1 })
        );
        let mut empty: Vec<i32> = Vec::new();
        assert!(delete_at(&mut empty, 0).is_err());
        assert_eq!(v, vec![1]);
    }
}
