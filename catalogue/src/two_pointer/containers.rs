use crate::error::{CatalogueError, Result};

/// Largest `min(h[l], h[r]) * (r - l)` over all pairs of lines.
pub fn max_area(heights: &[u64]) -> Result<u64> {
    if heights.len() < 2 {
        return Ok(0);
    }
    let (mut l, mut r) = (0, heights.len() - 1);
    let mut best = 0;
    while l < r {
        let area = heights[l]
            .min(heights[r])
            .checked_mul((r - l) as u64)
            .ok_or(CatalogueError::Overflow)?;
        best = best.max(area);
        if heights[l] < heights[r] { l += 1; } else { r -= 1; }
    }
    Ok(best)
}

/// Units of rain held by an elevation map.
pub fn trap_water(heights: &[u64]) -> Result<u64> {
    if heights.is_empty() {
        return Ok(0);
    }
    let (mut l, mut r) = (0, heights.len() - 1);
    let (mut left_max, mut right_max) = (heights[l], heights[r]);
    let mut water: u64 = 0;
    while l < r {
        let held = if heights[l] < heights[r] {
            l += 1;
            left_max = left_max.max(heights[l]);
            left_max - heights[l]
        } else {
            r -= 1;
            right_max = right_max.max(heights[r]);
            right_max - heights[r]
        };
        water = water.checked_add(held).ok_or(CatalogueError::Overflow)?;
    }
    Ok(water)
}
