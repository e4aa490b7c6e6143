//! Demo Functions Module
//!
//! Integer sequences served through the playground's shared memo table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MemoQueueError, Result};
use crate::memo::{Entries, MemoOptions, Memoized, PolicyKind};

/// Argument tuple of the playground memo table.
pub type DemoArgs = (DemoFunction, u64);

/// Signature of the function wrapped by the playground memo table.
pub type DemoFn = fn(&DemoArgs) -> Result<u128>;

/// The playground's memoized evaluator.
pub type MemoTable = Memoized<DemoArgs, u128, DemoFn>;

// == Demo Function ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoFunction {
    Fibonacci,
    Factorial,
    Triangular,
}

impl DemoFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoFunction::Fibonacci => "fibonacci",
            DemoFunction::Factorial => "factorial",
            DemoFunction::Triangular => "triangular",
        }
    }

    // == Evaluate ==
    /// Computes the `n`th term.
    ///
    /// # Errors
    /// `Overflow` when the term does not fit in a `u128`.
    pub fn evaluate(&self, n: u64) -> Result<u128> {
        let overflow = || MemoQueueError::Overflow(format!("{}({}) exceeds u128", self, n));

        match self {
            DemoFunction::Fibonacci => {
                if n == 0 {
                    return Ok(0);
                }
                // only ever computes up to F(n), so F(186) still fits
                let (mut a, mut b) = (0u128, 1u128);
                for _ in 1..n {
                    let next = a.checked_add(b).ok_or_else(overflow)?;
                    a = b;
                    b = next;
                }
                Ok(b)
            }
            DemoFunction::Factorial => (1..=n as u128)
                .try_fold(1u128, |acc, k| acc.checked_mul(k))
                .ok_or_else(overflow),
            DemoFunction::Triangular => {
                let n = n as u128;
                n.checked_mul(n + 1).map(|v| v / 2).ok_or_else(overflow)
            }
        }
    }
}

impl fmt::Display for DemoFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemoFunction {
    type Err = MemoQueueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fibonacci" => Ok(DemoFunction::Fibonacci),
            "factorial" => Ok(DemoFunction::Factorial),
            "triangular" => Ok(DemoFunction::Triangular),
            other => Err(MemoQueueError::NotFound(format!("function '{}'", other))),
        }
    }
}

fn evaluate(args: &DemoArgs) -> Result<u128> {
    let (function, n) = args;
    function.evaluate(*n)
}

// == Custom Eviction ==
/// Evicts the first entry holding an even result, falling back to the ledger head.
pub fn evict_first_even(entries: &mut Entries<DemoArgs, u128>) {
    let victim = entries
        .iter()
        .find(|(_, entry)| entry.value % 2 == 0)
        .map(|(key, _)| *key)
        .or_else(|| entries.front().map(|(key, _)| *key));

    if let Some(key) = victim {
        entries.remove(&key);
    }
}

// == Table Construction ==
/// Builds the playground memo table.
///
/// The CUSTOM policy is wired to [`evict_first_even`]. `max_age` is only
/// consulted by the TIME policy.
pub fn build_memo_table(
    max_size: usize,
    policy: PolicyKind,
    max_age: std::time::Duration,
) -> Result<MemoTable> {
    let mut options = MemoOptions::new()
        .max_size(max_size)
        .policy(policy)
        .max_age(max_age);
    if policy == PolicyKind::Custom {
        options = options.custom_evict(evict_first_even);
    }
    options.build(evaluate as DemoFn)
}
