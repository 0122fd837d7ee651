//! Integer square root.

use primitive_types::U256;

/// Returns `floor(√x)`, exact for perfect squares.
///
/// Integer Newton–Raphson: start from `z = x`, `guess = ⌈x / 2⌉`, and
/// keep replacing `z` with `guess` and `guess` with `(z + x / z) / 2`
/// while the guess keeps shrinking.  Every division floors.  Converges in
/// `O(log x)` steps; `0` and `1` return immediately.
///
/// # Examples
///
/// ```
/// use pair_amm::math::isqrt;
/// use pair_amm::U256;
///
/// assert_eq!(isqrt(U256::from(10_000u64)), U256::from(100u64));
/// assert_eq!(isqrt(U256::from(99u64)), U256::from(9u64));
/// ```
#[must_use]
pub fn isqrt(x: U256) -> U256 {
    let two = U256::from(2u8);
    let mut z = x;
    // (x + 1) / 2 without overflowing at U256::MAX.
    let mut guess = x / two + x % two;
    while guess < z {
        z = guess;
        // z >= 1 here and z + x / z stays below 2^256 once z <= ⌈x / 2⌉.
        guess = (z + x / z) / two;
    }
    z
}
