#[cfg(test)]
mod tests {
    use crate::simulation::{FixedJitter, FnJitter, JitterSource, RandomJitter, ZeroJitter};
    use crate::{PriceLevel, Side, SimulatorConfig, calculate_order_impact};

    #[test]
    fn test_random_jitter_bounds() {
        for _ in 0..200 {
            let value = RandomJitter.jitter_ms(5000.0);
            assert!((0.0..5000.0).contains(&value));
        }
    }

    #[test]
    fn test_random_jitter_degenerate_max() {
        assert_eq!(RandomJitter.jitter_ms(0.0), 0.0);
        assert_eq!(RandomJitter.jitter_ms(-10.0), 0.0);
        assert_eq!(RandomJitter.jitter_ms(f64::NAN), 0.0);
    }

    #[test]
    fn test_fixed_and_zero_jitter() {
        assert_eq!(ZeroJitter.jitter_ms(5000.0), 0.0);
        assert_eq!(FixedJitter(300.0).jitter_ms(5000.0), 300.0);
        assert_eq!(FixedJitter(300.0).jitter_ms(100.0), 100.0);
    }

    #[test]
    fn test_misbehaving_source_is_clamped() {
        let levels = [PriceLevel {
            price: 100.0,
            size: 1.0,
        }];
        let config = SimulatorConfig::default();

        let negative = FnJitter(|_max: f64| -500.0);
        let result =
            calculate_order_impact(Side::Buy, 1.0, None, &levels, &config, &negative).unwrap();
        assert_eq!(result.estimated_time_to_fill_ms, 1000.0);

        let nan = FnJitter(|_max: f64| f64::NAN);
        let result = calculate_order_impact(Side::Buy, 1.0, None, &levels, &config, &nan).unwrap();
        assert_eq!(result.estimated_time_to_fill_ms, 1000.0);

        let huge = FnJitter(|max: f64| max * 10.0);
        let result = calculate_order_impact(Side::Buy, 1.0, None, &levels, &config, &huge).unwrap();
        assert_eq!(result.estimated_time_to_fill_ms, 6000.0);
    }
}
