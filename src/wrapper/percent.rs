// src/wrapper/percent.rs

/// Shares below this many percent keep four decimals instead of two.
const SMALL_SHARE: f64 = 0.01;

/// `value` as a percentage of `total`.
///
/// Tiny shares are rounded to 4 decimals so they don't collapse to zero;
/// everything else to 2. A zero total yields `0.0`.
pub fn as_percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = value as f64 / total as f64 * 100.0;
    if percentage < SMALL_SHARE {
        round_to(percentage, 4)
    } else {
        round_to(percentage, 2)
    }
}

/// A stored fraction (`0.45`) as a percentage rounded to 2 decimals.
pub fn fraction_to_percent(fraction: f64) -> f64 {
    round_to(fraction * 100.0, 2)
}

/// Round half away from zero to `digits` decimals.
///
/// Scaling can land just below a `.5` boundary (`1.005 * 100 == 100.49999…`);
/// the check against the unscaled value nudges those back up.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let mut scaled = (value * scale).round();
    if value > 0.0 && (scaled + 0.5) / scale <= value {
        scaled += 1.0;
    } else if value < 0.0 && (scaled - 0.5) / scale >= value {
        scaled -= 1.0;
    }
    scaled / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(as_percentage(12_345, 100_000), 12.35);
        assert_eq!(as_percentage(1, 3), 33.33);
        assert_eq!(as_percentage(2, 3), 66.67);
        assert_eq!(as_percentage(4000, 10_000), 40.0);
    }

    #[test]
    fn test_small_shares_keep_four_decimals() {
        // 1 / 20_000 is exactly 0.005%
        assert_eq!(as_percentage(1, 20_000), 0.005);
        assert_eq!(as_percentage(1, 300_000), 0.0003);
        // 0.01% is not "small"
        assert_eq!(as_percentage(1, 10_000), 0.01);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(as_percentage(0, 0), 0.0);
        assert_eq!(as_percentage(5, 0), 0.0);
    }

    #[test]
    fn test_whole_and_nothing() {
        assert_eq!(as_percentage(7, 7), 100.0);
        assert_eq!(as_percentage(0, 7), 0.0);
    }

    #[test]
    fn test_fraction_to_percent() {
        assert_eq!(fraction_to_percent(0.45), 45.0);
        assert_eq!(fraction_to_percent(0.5012), 50.12);
        assert_eq!(fraction_to_percent(0.55834), 55.83);
        assert_eq!(fraction_to_percent(0.0), 0.0);
    }

    #[test]
    fn test_round_to_half_up() {
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(2.675, 2), 2.68);
        assert_eq!(round_to(-1.005, 2), -1.01);
        assert_eq!(round_to(0.00005, 4), 0.0001);
    }
}
