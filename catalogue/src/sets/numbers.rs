use std::collections::HashMap;

use crate::error::{CatalogueError, Result};

/// Trial division up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Memoised Fibonacci. `F(186)` is the last value that fits in `u128`.
#[derive(Debug, Default)]
pub struct Fibonacci {
    cache: HashMap<u32, u128>,
}

impl Fibonacci {
    pub fn new() -> Self { Self::default() }

    pub fn get(&mut self, n: u32) -> Result<u128> {
        if n <= 1 {
            return Ok(u128::from(n));
        }
        if let Some(&v) = self.cache.get(&n) {
            return Ok(v);
        }
        // Bottom-up; every index up to n lands in the cache.
        let (mut a, mut b) = (0u128, 1u128);
        for i in 2..=n {
            let next = a.checked_add(b).ok_or(CatalogueError::Overflow)?;
            a = b;
            b = next;
            self.cache.insert(i, b);
        }
        Ok(b)
    }

    pub fn cached(&self) -> usize { self.cache.len() }
}

/// Floor division and modulo; the remainder takes the sign of the divisor.
pub fn divide_with_remainder(dividend: i64, divisor: i64) -> Result<(i64, i64)> {
    if divisor == 0 {
        return Err(CatalogueError::ZeroDivisor);
    }
    let q = dividend.checked_div(divisor).ok_or(CatalogueError::Overflow)?;
    let r = dividend % divisor;
    if r != 0 && (r < 0) != (divisor < 0) {
        Ok((q - 1, r + divisor))
    } else {
        Ok((q, r))
    }
}

pub fn manhattan_distance(a: (i64, i64), b: (i64, i64)) -> u64 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn fibonacci_memo() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.get(0), Ok(0));
        assert_eq!(fib.get(10), Ok(55));
        assert_eq!(fib.get(50), Ok(12_586_269_025));
        assert_eq!(fib.get(10), Ok(55));
        assert!(fib.cached() >= 49);
        assert!(fib.get(186).is_ok());
        assert_eq!(fib.get(187), Err(CatalogueError::Overflow));
    }

    #[test]
    fn floor_division() {
        assert_eq!(divide_with_remainder(17, 5), Ok((3, 2)));
        assert_eq!(divide_with_remainder(-17, 5), Ok((-4, 3)));
        assert_eq!(divide_with_remainder(17, -5), Ok((-4, -3)));
        assert_eq!(divide_with_remainder(1, 0), Err(CatalogueError::ZeroDivisor));
        assert_eq!(divide_with_remainder(i64::MIN, -1), Err(CatalogueError::Overflow));
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance((1, 2), (4, 6)), 7);
        assert_eq!(manhattan_distance((-3, 0), (3, 0)), 6);
    }
}
