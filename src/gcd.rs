use tracing::trace;

/// Greatest common divisor of `a` and `b` by the Euclidean algorithm.
///
/// Both operands are replaced by their absolute values first, so the result
/// is never negative and does not depend on how `%` treats negative numbers.
/// `gcd(a, 0)` is `|a|`, which makes `gcd(0, 0)` equal to `0`.
///
/// The result is an `i64` because `|i32::MIN|` does not fit in an `i32`.
pub fn gcd(a: i32, b: i32) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    let mut steps: u32 = 0;

    // gcd(a, b) = gcd(b, a mod b) until the second operand runs out
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
        steps += 1;
    }

    trace!(steps, result = a, "euclid finished");
    i64::from(a)
}
