//! Item Identifiers
//!
//! Short random ids: 8 random base-36 characters followed by the last
//! 4 base-36 characters of the creation time.

use std::sync::atomic::{AtomicU64, Ordering};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 8;
const TIME_LEN: usize = 4;
const MAX_ATTEMPTS: usize = 10;

/// Used only when the random source is unavailable
static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

fn random_part() -> String {
    let mut bytes = [0u8; RANDOM_LEN];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => bytes
            .iter()
            .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "random source unavailable, using counter ids");
            let n = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("{:0>width$}", to_base36(n), width = RANDOM_LEN)
        }
    }
}

fn time_part(now_ms: i64) -> String {
    let encoded = to_base36(now_ms.unsigned_abs());
    let start = encoded.len().saturating_sub(TIME_LEN);
    encoded[start..].to_string()
}

/// Generate one id for an item created at `now_ms`
pub fn generate_id(now_ms: i64) -> String {
    format!("{}{}", random_part(), time_part(now_ms))
}

/// Generate an id not accepted by `taken`
pub fn generate_unique_id(now_ms: i64, taken: impl Fn(&str) -> bool) -> String {
    let mut id = generate_id(now_ms);
    for _ in 1..MAX_ATTEMPTS {
        if !taken(&id) {
            return id;
        }
        id = generate_id(now_ms);
    }
    // Random source keeps colliding; the counter is unique for this page
    let n = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", id, to_base36(n))
}
