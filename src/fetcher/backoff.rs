use rand::Rng;
use std::time::Duration;

/// Exponent cap; with the default 500ms base this tops out around 30s.
const MAX_EXPONENT: u32 = 6;

/// Exponential backoff with ±30% jitter: `base * 2^attempt`.
pub fn calculate_backoff_delay(attempt: u32, base: Duration) -> Duration {
    let capped_attempt = attempt.min(MAX_EXPONENT);
    let base_delay = base.saturating_mul(2_u32.saturating_pow(capped_attempt));

    let jitter_factor = rand::thread_rng().gen_range(0.7..1.3);
    base_delay.mul_f64(jitter_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_progression() {
        let base = Duration::from_millis(1000);

        let delay0 = calculate_backoff_delay(0, base);
        let delay1 = calculate_backoff_delay(1, base);
        let delay2 = calculate_backoff_delay(2, base);

        assert!(delay0.as_millis() >= 700 && delay0.as_millis() <= 1300);
        assert!(delay1.as_millis() >= 1400 && delay1.as_millis() <= 2600);
        assert!(delay2.as_millis() >= 2800 && delay2.as_millis() <= 5200);
    }

    #[test]
    fn test_backoff_cap() {
        let base = Duration::from_millis(500);

        // 500ms * 2^6 = 32s, jittered
        let delay_high = calculate_backoff_delay(40, base);
        assert!(delay_high.as_millis() >= 22_400 && delay_high.as_millis() <= 41_600);
    }

    #[test]
    fn test_zero_base_means_no_wait() {
        assert_eq!(calculate_backoff_delay(3, Duration::ZERO), Duration::ZERO);
    }
}
