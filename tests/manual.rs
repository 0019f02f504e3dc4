mod tests {
    use myrtio_ambient_light::brightness::DEFAULT_GAMMA;
    use myrtio_ambient_light::color::{BLUE, GREEN, RED};
    use myrtio_ambient_light::{
        BrightnessLevel, BrightnessMapper, LedState, ManualPanel, PWM_PERIOD, RatioCorrection,
    };

    const MAPPER: BrightnessMapper = BrightnessMapper::new(PWM_PERIOD, DEFAULT_GAMMA);

    #[test]
    fn test_color_cycle() {
        let mut panel = ManualPanel::new();
        let mut leds = LedState::OFF;

        assert_eq!(panel.click_color(&mut leds, PWM_PERIOD), RED);
        assert_eq!(
            leds,
            LedState {
                red: PWM_PERIOD,
                green: 0,
                blue: 0
            }
        );
        assert_eq!(panel.click_color(&mut leds, PWM_PERIOD), GREEN);
        assert_eq!(leds.green, PWM_PERIOD);
        assert_eq!(leds.red, 0);
        assert_eq!(panel.click_color(&mut leds, PWM_PERIOD), BLUE);
        assert_eq!(panel.click_color(&mut leds, PWM_PERIOD), RED);
    }

    #[test]
    fn test_brightness_cycle() {
        let mut panel = ManualPanel::new();
        let mut leds = LedState::OFF;
        panel.click_color(&mut leds, PWM_PERIOD);

        assert_eq!(panel.click_brightness(&mut leds, &MAPPER), BrightnessLevel::Dim);
        assert_eq!(leds.red, 606);
        assert_eq!(panel.click_brightness(&mut leds, &MAPPER), BrightnessLevel::Medium);
        assert_eq!(leds.red, 662);
        assert_eq!(panel.click_brightness(&mut leds, &MAPPER), BrightnessLevel::Bright);
        assert_eq!(leds.red, 827);
        assert_eq!(panel.click_brightness(&mut leds, &MAPPER), BrightnessLevel::Off);
        assert_eq!(leds, LedState::OFF);
        assert_eq!((leds.green, leds.blue), (0, 0));
    }

    #[test]
    fn test_single_correction_dims_linearly() {
        let mapper = MAPPER.with_ratio_correction(RatioCorrection::Single);
        let mut panel = ManualPanel::new();
        let mut leds = LedState::OFF;
        panel.click_color(&mut leds, PWM_PERIOD);

        panel.click_brightness(&mut leds, &mapper);
        assert_eq!(leds.red, 333);
    }

    #[test]
    fn test_color_click_rewinds_brightness() {
        let mut panel = ManualPanel::new();
        let mut leds = LedState::OFF;
        panel.click_color(&mut leds, PWM_PERIOD);
        panel.click_brightness(&mut leds, &MAPPER);
        panel.click_brightness(&mut leds, &MAPPER);
        assert_eq!(panel.brightness(), BrightnessLevel::Medium);

        panel.click_color(&mut leds, PWM_PERIOD);
        assert_eq!(panel.brightness(), BrightnessLevel::Off);
        assert_eq!(panel.click_brightness(&mut leds, &MAPPER), BrightnessLevel::Dim);
    }

    #[test]
    fn test_dim_dark_lamp_stays_dark() {
        let mut panel = ManualPanel::new();
        let mut leds = LedState::OFF;
        panel.click_brightness(&mut leds, &MAPPER);
        assert_eq!(leds, LedState::OFF);
    }
}
