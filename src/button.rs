//! Press/release edge detection for the two panel buttons
//!
//! Buttons are active-low. A click is reported only once the button has
//! been seen pressed and then released; holding it never repeats.

/// Physical buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Button 1, cycles the color
    Color,
    /// Button 2, cycles the brightness level
    Brightness,
}

impl Button {
    pub const ALL: [Self; 2] = [Self::Color, Self::Brightness];

    /// Number printed on the panel
    pub const fn number(self) -> u8 {
        match self {
            Self::Color => 1,
            Self::Brightness => 2,
        }
    }
}

/// Raw digital pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// Pressed buttons pull the pin low
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Low)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    WaitingForPress,
    WaitingForRelease,
}

/// Edge reported by [`ButtonDebouncer::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// Press recognized, no action yet
    Pressed,
    /// Press followed by release
    Clicked,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonDebouncer {
    state: ButtonState,
}

impl ButtonDebouncer {
    pub const fn new() -> Self {
        Self {
            state: ButtonState::WaitingForPress,
        }
    }

    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Feed the pin level sampled this cycle
    pub fn poll(&mut self, level: PinLevel) -> Option<ButtonEdge> {
        match (self.state, level.is_pressed()) {
            (ButtonState::WaitingForPress, true) => {
                self.state = ButtonState::WaitingForRelease;
                Some(ButtonEdge::Pressed)
            }
            (ButtonState::WaitingForRelease, false) => {
                self.state = ButtonState::WaitingForPress;
                Some(ButtonEdge::Clicked)
            }
            _ => None,
        }
    }
}
