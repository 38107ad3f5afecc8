//! Fibonacci numbers by plain and memoized recursion, with `fib(0) = 0` and `fib(1) = 1`.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_N: u32 = 93;

/// Plain double recursion, *O*(2^*n*) calls. Only usable for small `n`.
pub fn fib(n: u32) -> Result<u64> {
    check_n(n)?;

    Ok(fib_unchecked(n))
}

/// Memoized recursion, *O*(*n*) calls.
///
/// `memo` is owned by the caller and may be reused across calls; it only ever gains entries for
/// `2..=n`.
pub fn fib_memo(n: u32, memo: &mut HashMap<u32, u64>) -> Result<u64> {
    check_n(n)?;

    Ok(fib_memo_unchecked(n, memo))
}

/// [`fib_memo`] with a cache scoped to this call.
pub fn fib_memoized(n: u32) -> Result<u64> {
    fib_memo(n, &mut HashMap::new())
}

/// `fib(0), fib(1), ..., fib(n)`.
pub fn sequence(n: u32) -> Result<Vec<u64>> {
    check_n(n)?;

    let mut seq = Vec::with_capacity(n as usize + 1);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..=n {
        seq.push(a);
        // `b` runs ahead of `a` and wraps near MAX_N. Wrapped values are never pushed.
        (a, b) = (b, a.wrapping_add(b));
    }

    Ok(seq)
}

fn check_n(n: u32) -> Result<()> {
    if n > MAX_N {
        Err(Error::FibonacciOverflow { n })
    } else {
        Ok(())
    }
}

fn fib_unchecked(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }

    fib_unchecked(n - 1) + fib_unchecked(n - 2)
}

fn fib_memo_unchecked(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
    if n <= 1 {
        return n as u64;
    }

    if let Some(&val) = memo.get(&n) {
        return val;
    }

    let val = fib_memo_unchecked(n - 1, memo) + fib_memo_unchecked(n - 2, memo);
    memo.insert(n, val);

    val
}
