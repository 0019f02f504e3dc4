use core::ops::ControlFlow;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Board;
use crate::auto_light::{AutoDecision, AutoLightController, Thresholds};
use crate::averager::{INVALID_SAMPLE, SampledAverager};
use crate::brightness::{BrightnessMapper, DEFAULT_GAMMA, RatioCorrection};
use crate::button::{Button, ButtonDebouncer, ButtonEdge};
use crate::command::Command;
use crate::countdown::{CountdownEvent, CountdownTimer, DEFAULT_TICK_RATE_HZ};
use crate::display::{Console, Notice};
use crate::led::{LedChannel, LedState, Mode, PWM_PERIOD};
use crate::mailbox::Inbox;
use crate::manual::ManualPanel;

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// PWM period, the full-on duty
    pub pwm_period: u32,
    pub gamma: f64,
    /// Correction applied by the brightness button
    pub ratio_correction: RatioCorrection,
    pub thresholds: Thresholds,
    /// Rate at which the periodic tick source fires
    pub tick_rate_hz: u32,
    /// Duties at power up
    pub initial_leds: LedState,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pwm_period: PWM_PERIOD,
            gamma: DEFAULT_GAMMA,
            ratio_correction: RatioCorrection::Double,
            thresholds: Thresholds::default(),
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            initial_leds: LedState::uniform(PWM_PERIOD),
        }
    }
}

/// Result of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keep polling
    Continue,
    /// An exit command was accepted, stop the loop
    Terminated,
}

impl PollOutcome {
    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Lamp controller - composes sensor, buttons, commands and countdown
///
/// Owns all control state. Call [`Controller::poll`] at a fixed cadence,
/// e.g. through [`PollScheduler`](crate::PollScheduler).
pub struct Controller<'a, B: Board> {
    // External dependencies and configuration
    board: B,
    inbox: &'a Inbox,
    mapper: BrightnessMapper,
    auto_light: AutoLightController,

    // Internal state
    leds: LedState,
    mode: Mode,
    averager: SampledAverager,
    buttons: [ButtonDebouncer; 2],
    panel: ManualPanel,
    countdown: CountdownTimer,
    console: Console,
    terminated: bool,
}

impl<'a, B: Board> Controller<'a, B> {
    pub fn new(board: B, inbox: &'a Inbox, config: &ControllerConfig) -> Self {
        Self {
            board,
            inbox,
            mapper: BrightnessMapper::new(config.pwm_period, config.gamma)
                .with_ratio_correction(config.ratio_correction),
            auto_light: AutoLightController::new(config.thresholds),
            leds: config.initial_leds,
            mode: Mode::Auto,
            averager: SampledAverager::new(),
            buttons: [ButtonDebouncer::new(); 2],
            panel: ManualPanel::new(),
            countdown: CountdownTimer::new(config.tick_rate_hz),
            console: Console::new(),
            terminated: false,
        }
    }

    /// Run one control cycle
    ///
    /// Sensor, automatic decision, buttons, one pending command, elapsed
    /// countdown ticks, then the duties are written to the board.
    pub fn poll(&mut self) -> PollOutcome {
        if self.terminated {
            return PollOutcome::Terminated;
        }

        self.process_sensor();
        self.process_buttons();

        if self.process_command().is_break() {
            self.write_duties();
            return PollOutcome::Terminated;
        }

        self.process_ticks();
        self.write_duties();

        PollOutcome::Continue
    }

    /// Sample the light sensor and run the automatic decision
    fn process_sensor(&mut self) {
        let sample = self.board.read_light_sample().unwrap_or_else(|| {
            #[cfg(feature = "esp32-log")]
            println!("[Controller.process_sensor] sensor read failed, sample dropped");
            INVALID_SAMPLE
        });
        self.averager.push(sample);

        if self.mode != Mode::Auto {
            return;
        }

        let average = self.averager.average();
        let (decision, changed) = self.auto_light.apply(&mut self.leds, average, &self.mapper);
        if changed {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Controller.process_sensor] {:?} at average {}",
                decision, average
            );
            if decision == AutoDecision::HalfOn {
                self.console.emit(&mut self.board, Notice::Duties(self.leds));
            }
        }
    }

    /// Poll both debouncers and act on clicks
    fn process_buttons(&mut self) {
        for (index, button) in Button::ALL.into_iter().enumerate() {
            let level = self.board.read_button(button);
            match self.buttons[index].poll(level) {
                Some(ButtonEdge::Pressed) => {
                    self.console.emit(&mut self.board, Notice::ButtonPressed(button));
                }
                Some(ButtonEdge::Clicked) => {
                    self.set_mode(Mode::Manual);
                    self.handle_click(button);
                }
                None => {}
            }
        }
    }

    fn handle_click(&mut self, button: Button) {
        match button {
            Button::Color => {
                self.panel.click_color(&mut self.leds, self.mapper.period());
                if let Some(channel) = LedChannel::ALL.into_iter().find(|c| self.leds.get(*c) > 0) {
                    self.console.emit(&mut self.board, Notice::ColorSelected(channel));
                }
            }
            Button::Brightness => {
                let level = self.panel.click_brightness(&mut self.leds, &self.mapper);
                self.console.emit(&mut self.board, Notice::BrightnessSelected(level));
            }
        }
        self.console.emit(&mut self.board, Notice::Duties(self.leds));
    }

    /// Decode and apply at most one received frame
    fn process_command(&mut self) -> ControlFlow<()> {
        let Some(frame) = self.inbox.take_frame() else {
            return ControlFlow::Continue(());
        };
        let command = Command::parse(&frame);

        #[cfg(feature = "esp32-log")]
        println!("[Controller.process_command] {:?}", command);

        self.apply_command(command)
    }

    /// Apply a decoded command to mode, duties and countdown
    ///
    /// Breaks when the command stops the controller.
    pub fn apply_command(&mut self, command: Command) -> ControlFlow<()> {
        if command.forces_manual() {
            self.set_mode(Mode::Manual);
        }

        match command {
            Command::SetChannelBrightness { channel, percent } => {
                let duty = self.mapper.percent_to_duty(percent);
                self.leds.set(channel, duty);
                self.console.emit(&mut self.board, Notice::ChannelBrightness { channel, duty });
                self.console.emit(&mut self.board, Notice::Duties(self.leds));
            }
            Command::SetTimer { minutes, turn_on } => {
                if self.leds.is_on() == turn_on {
                    self.console.emit(&mut self.board, Notice::TimerRedundant { turn_on });
                } else {
                    self.countdown.arm(minutes, turn_on);
                    self.console.emit(&mut self.board, Notice::TimerArmed { minutes, turn_on });
                }
            }
            Command::ResetTimer => {
                self.countdown.reset();
                self.console.emit(&mut self.board, Notice::TimerReset);
            }
            Command::SetMode { auto } => {
                self.set_mode(if auto { Mode::Auto } else { Mode::Manual });
            }
            Command::SetAllOn => self.switch_all(true),
            Command::SetAllOff => self.switch_all(false),
            Command::Terminate => {
                self.terminated = true;
                self.console.emit(&mut self.board, Notice::Terminating);
                return ControlFlow::Break(());
            }
            Command::Invalid => {
                self.console.emit(&mut self.board, Notice::InvalidCommand);
                self.console.emit(&mut self.board, Notice::Usage);
            }
        }

        ControlFlow::Continue(())
    }

    /// Advance the countdown once per tick elapsed since the last cycle
    fn process_ticks(&mut self) {
        let ticks = self.inbox.take_ticks();
        for _ in 0..ticks {
            match self.countdown.advance() {
                Some(CountdownEvent::Second(remaining)) => {
                    self.console.emit(&mut self.board, Notice::Countdown(remaining));
                }
                Some(CountdownEvent::Fired { turn_on }) => {
                    self.console.emit(&mut self.board, Notice::Countdown(self.countdown.remaining()));
                    #[cfg(feature = "esp32-log")]
                    println!("[Controller.process_ticks] countdown fired, on: {}", turn_on);
                    self.leds = self.full_or_off(turn_on);
                    self.console.emit(&mut self.board, Notice::TimerFired { turn_on });
                    self.console.emit(&mut self.board, Notice::Duties(self.leds));
                }
                None => {}
            }
        }
    }

    fn switch_all(&mut self, on: bool) {
        self.leds = self.full_or_off(on);
        self.console.emit(&mut self.board, Notice::AllSwitched { on });
        self.console.emit(&mut self.board, Notice::Duties(self.leds));
    }

    const fn full_or_off(&self, on: bool) -> LedState {
        if on {
            LedState::uniform(self.mapper.period())
        } else {
            LedState::OFF
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        #[cfg(feature = "esp32-log")]
        println!("[Controller.set_mode] {}", mode.as_str());
        self.console.emit(&mut self.board, Notice::ModeChanged(mode));
    }

    fn write_duties(&mut self) {
        for channel in LedChannel::ALL {
            self.board.set_duty(channel, self.leds.get(channel));
        }
    }

    pub const fn leds(&self) -> LedState {
        self.leds
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn countdown(&self) -> &CountdownTimer {
        &self.countdown
    }

    pub const fn averager(&self) -> &SampledAverager {
        &self.averager
    }

    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Get a reference to the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Get a mutable reference to the board.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}
