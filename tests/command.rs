mod tests {
    use myrtio_ambient_light::{Command, LedChannel};

    #[test]
    fn test_channel_brightness() {
        assert_eq!(
            Command::parse(b"HDRR50TAIL\r"),
            Command::SetChannelBrightness {
                channel: LedChannel::Red,
                percent: 50
            }
        );
        assert_eq!(
            Command::parse(b"HDRG0TAIL\r"),
            Command::SetChannelBrightness {
                channel: LedChannel::Green,
                percent: 0
            }
        );
        assert_eq!(
            Command::parse(b"HDRB100TAIL"),
            Command::SetChannelBrightness {
                channel: LedChannel::Blue,
                percent: 100
            }
        );
    }

    #[test]
    fn test_channel_brightness_saturates() {
        assert_eq!(
            Command::parse(b"HDRR99999999999999TAIL\r"),
            Command::SetChannelBrightness {
                channel: LedChannel::Red,
                percent: u32::MAX
            }
        );
    }

    #[test]
    fn test_channel_brightness_needs_digits() {
        assert_eq!(Command::parse(b"HDRRTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRR5xTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRR-5TAIL\r"), Command::Invalid);
    }

    #[test]
    fn test_timer() {
        assert_eq!(
            Command::parse(b"HDRT5ONTAIL\r"),
            Command::SetTimer {
                minutes: 5,
                turn_on: true
            }
        );
        assert_eq!(
            Command::parse(b"HDRT10OFFTAIL\r"),
            Command::SetTimer {
                minutes: 10,
                turn_on: false
            }
        );
        assert_eq!(
            Command::parse(b"HDRT99ONTAIL\r"),
            Command::SetTimer {
                minutes: 99,
                turn_on: true
            }
        );
    }

    #[test]
    fn test_timer_without_minutes() {
        assert_eq!(
            Command::parse(b"HDRTONTAIL\r"),
            Command::SetTimer {
                minutes: 0,
                turn_on: true
            }
        );
    }

    #[test]
    fn test_timer_rejects_three_digits() {
        assert_eq!(Command::parse(b"HDRT100ONTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRT5TAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRT5ONXTAIL\r"), Command::Invalid);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse(b"HDRSTAIL\r"), Command::ResetTimer);
        assert_eq!(Command::parse(b"HDRAONTAIL\r"), Command::SetMode { auto: true });
        assert_eq!(Command::parse(b"HDRAOFFTAIL\r"), Command::SetMode { auto: false });
        assert_eq!(Command::parse(b"HDRONTAIL\r"), Command::SetAllOn);
        assert_eq!(Command::parse(b"HDROFFTAIL\r"), Command::SetAllOff);
        assert_eq!(Command::parse(b"HDREXITTAIL\r"), Command::Terminate);
    }

    #[test]
    fn test_unknown_payload() {
        assert_eq!(Command::parse(b"HDRXYZTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRSXTAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDREXITNOWTAIL\r"), Command::Invalid);
        assert!(!Command::parse(b"HDRAUTOTAIL\r").is_valid());
    }

    #[test]
    fn test_missing_framing() {
        assert_eq!(Command::parse(b"R50TAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b"HDRR50\r"), Command::Invalid);
        assert_eq!(Command::parse(b"xHDRR50TAIL\r"), Command::Invalid);
        assert_eq!(Command::parse(b""), Command::Invalid);
    }

    #[test]
    fn test_bytes_after_tail_are_ignored() {
        assert_eq!(Command::parse(b"HDRONTAILgarbage\r"), Command::SetAllOn);
    }

    #[test]
    fn test_forces_manual() {
        assert!(Command::SetAllOn.forces_manual());
        assert!(Command::SetAllOff.forces_manual());
        assert!(
            Command::SetTimer {
                minutes: 1,
                turn_on: false
            }
            .forces_manual()
        );
        assert!(!Command::ResetTimer.forces_manual());
        assert!(!Command::SetMode { auto: false }.forces_manual());
        assert!(!Command::Terminate.forces_manual());
        assert!(!Command::Invalid.forces_manual());
    }
}
