use rand::Rng;

/// Drop one ball through `num_cols` rows of pegs.
///
/// Each peg sends the ball one step left or right with equal probability.
/// Returns the final displacement shifted by `num_cols`, which is always in
/// `[0, 2 * num_cols]` and can be used directly as a histogram bin.
pub fn simulate_one_drop<R: Rng + ?Sized>(num_cols: u32, rng: &mut R) -> usize {
    let mut position: i64 = 0;
    for _ in 0..num_cols {
        position += if rng.random_bool(0.5) { 1 } else { -1 };
    }
    (position + i64::from(num_cols)) as usize
}
