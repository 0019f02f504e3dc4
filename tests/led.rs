mod tests {
    use myrtio_ambient_light::color::{GREEN, RED};
    use myrtio_ambient_light::{LedChannel, LedState, PWM_PERIOD, Rgb};

    #[test]
    fn test_from_color() {
        assert_eq!(
            LedState::from_color(RED, PWM_PERIOD),
            LedState {
                red: PWM_PERIOD,
                green: 0,
                blue: 0
            }
        );
        let dim = LedState::from_color(Rgb::new(0, 0, 51), PWM_PERIOD);
        assert_eq!(dim.blue, 200);
    }

    #[test]
    fn test_from_color_large_period() {
        let leds = LedState::from_color(GREEN, 50_000_000);
        assert_eq!(leds.green, 50_000_000);

        let leds = LedState::from_color(RED, u32::MAX);
        assert_eq!(leds.red, u32::MAX);
        assert_eq!(leds.get(LedChannel::Blue), 0);
    }

    #[test]
    fn test_on_is_derived_from_duties() {
        let mut leds = LedState::OFF;
        assert!(!leds.is_on());
        leds.set(LedChannel::Blue, 1);
        assert!(leds.is_on());
    }
}
