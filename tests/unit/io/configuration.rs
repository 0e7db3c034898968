//! Tests for configuration constants and validation

#[cfg(test)]
mod tests {
    use allcolors::AlgorithmError;
    use allcolors::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_SNAPSHOT_EVERY, DEFAULT_SPREAD, DEFAULT_WIDTH,
        GrowthConfig, MAX_CANVAS_DIMENSION, MAX_SPREAD, OUTPUT_INDEX_WIDTH, OUTPUT_PREFIX,
        PRESET_ARM_LENGTH, validate_dimensions,
    };

    // Tests defaults match the reference rendering settings
    // Verified by changing constant values
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_SEED, 1);
        assert_eq!(DEFAULT_SPREAD, 1);
        assert_eq!(DEFAULT_SNAPSHOT_EVERY, 512);
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (1920, 1080));
        assert_eq!(PRESET_ARM_LENGTH, 5);
        assert_eq!(OUTPUT_PREFIX, "image");
        assert_eq!(OUTPUT_INDEX_WIDTH, 4);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = GrowthConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.spread, DEFAULT_SPREAD);
        assert_eq!(config.snapshot_every, DEFAULT_SNAPSHOT_EVERY);
        assert!(config.validate().is_ok());
    }

    // Tests zero spread and zero snapshot cadence are rejected
    // Verified by removing each check
    #[test]
    fn test_validate_rejects_zero_parameters() {
        let zero_spread = GrowthConfig {
            spread: 0,
            ..GrowthConfig::default()
        };
        assert!(matches!(
            zero_spread.validate(),
            Err(AlgorithmError::InvalidParameter {
                parameter: "spread",
                ..
            })
        ));

        let zero_cadence = GrowthConfig {
            snapshot_every: 0,
            ..GrowthConfig::default()
        };
        assert!(matches!(
            zero_cadence.validate(),
            Err(AlgorithmError::InvalidParameter {
                parameter: "snapshot_every",
                ..
            })
        ));
    }

    // Tests radii past the limit are rejected, including ones that would wrap as i32
    // Verified by only checking for zero
    #[test]
    fn test_validate_rejects_oversized_spread() {
        for spread in [MAX_SPREAD + 1, 100_000, 1 << 31, u32::MAX] {
            let config = GrowthConfig {
                spread,
                ..GrowthConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(AlgorithmError::InvalidParameter {
                        parameter: "spread",
                        ..
                    })
                ),
                "spread {spread} accepted"
            );
        }

        let widest = GrowthConfig {
            spread: MAX_SPREAD,
            ..GrowthConfig::default()
        };
        assert!(widest.validate().is_ok());
    }

    // Tests the palette is validated as part of the run configuration
    #[test]
    fn test_validate_checks_palette() {
        let mut config = GrowthConfig::default();
        config.palette.blue_levels = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(1, 1).is_ok());
        assert!(validate_dimensions(MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION).is_ok());
        assert!(validate_dimensions(0, 10).is_err());
        assert!(validate_dimensions(10, 0).is_err());
        assert!(validate_dimensions(MAX_CANVAS_DIMENSION + 1, 10).is_err());
    }
}
