mod tests {
    use myrtio_ambient_light::{ButtonDebouncer, ButtonEdge, ButtonState, PinLevel};

    const PRESSED: PinLevel = PinLevel::Low;
    const RELEASED: PinLevel = PinLevel::High;

    fn clicks(levels: &[PinLevel]) -> Vec<Option<ButtonEdge>> {
        let mut debouncer = ButtonDebouncer::new();
        levels.iter().map(|level| debouncer.poll(*level)).collect()
    }

    #[test]
    fn test_press_then_release_clicks_once() {
        let edges = clicks(&[PRESSED, PRESSED, RELEASED]);
        assert_eq!(
            edges,
            [Some(ButtonEdge::Pressed), None, Some(ButtonEdge::Clicked)]
        );
    }

    #[test]
    fn test_held_button_never_clicks() {
        let edges = clicks(&[PRESSED, PRESSED, PRESSED]);
        let count = edges
            .iter()
            .filter(|edge| **edge == Some(ButtonEdge::Clicked))
            .count();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_idle_button_is_silent() {
        assert_eq!(clicks(&[RELEASED, RELEASED]), [None, None]);
    }

    #[test]
    fn test_state_transitions() {
        let mut debouncer = ButtonDebouncer::new();
        assert_eq!(debouncer.state(), ButtonState::WaitingForPress);
        debouncer.poll(PRESSED);
        assert_eq!(debouncer.state(), ButtonState::WaitingForRelease);
        debouncer.poll(RELEASED);
        assert_eq!(debouncer.state(), ButtonState::WaitingForPress);
    }

    #[test]
    fn test_two_clicks() {
        let edges = clicks(&[PRESSED, RELEASED, RELEASED, PRESSED, RELEASED]);
        let count = edges
            .iter()
            .filter(|edge| **edge == Some(ButtonEdge::Clicked))
            .count();
        assert_eq!(count, 2);
    }
}
