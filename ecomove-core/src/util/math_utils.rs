/// rounds a non-negative magnitude half-up at the second decimal place.
/// f64::round is half-away-from-zero, which coincides with half-up for the
/// non-negative emission/cost magnitudes this crate reports. callers rely on
/// this exact behavior for golden-output comparisons, so do not replace it
/// with banker's rounding.
pub fn round_half_up_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// clamps a ratio expressed as a percentage into [0, 100], rounding half-up
/// to a whole percent.
pub fn percent_clamped(numerator: f64, denominator: f64) -> u32 {
    if denominator <= 0.0 {
        return 0;
    }
    let percent = (numerator / denominator * 100.0).round();
    (percent.max(0.0) as u32).min(100)
}
