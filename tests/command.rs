mod common;

mod tests {
    use super::common::{BLACK, RED, animator, at, ms, sink};
    use strip_animator::channel::{PayloadError, TrySendError};
    use strip_animator::command::{DEFAULT_BUTTONS, action_for};
    use strip_animator::{
        AnimationMode, Animator, AnimatorConfig, ButtonAction, ButtonBinding, Command,
        CommandChannel, CommandDispatcher, DecodeError, Playlist, Rgb, Strand, TickOutcome,
    };

    #[test]
    fn test_decode_color() {
        assert_eq!(
            Command::decode(b"C\x10\x20\x30"),
            Ok(Command::SetColor(Rgb::new(0x10, 0x20, 0x30)))
        );
        // Trailing bytes are ignored
        assert_eq!(
            Command::decode(b"C\x01\x02\x03\x04"),
            Ok(Command::SetColor(Rgb::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_decode_button() {
        assert_eq!(
            Command::decode(b"B21"),
            Ok(Command::Button {
                id: 2,
                pressed: true
            })
        );
        assert_eq!(
            Command::decode(b"B60"),
            Ok(Command::Button {
                id: 6,
                pressed: false
            })
        );
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        assert_eq!(Command::decode(b""), Err(DecodeError::Empty));
        assert_eq!(Command::decode(b"X12"), Err(DecodeError::UnknownTag(b'X')));
        assert_eq!(
            Command::decode(b"C\x01"),
            Err(DecodeError::Truncated {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            Command::decode(b"B2"),
            Err(DecodeError::Truncated {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(Command::decode(b"Bx1"), Err(DecodeError::InvalidDigit(b'x')));
        assert_eq!(Command::decode(b"B2!"), Err(DecodeError::InvalidDigit(b'!')));
    }

    #[test]
    fn test_default_button_table() {
        assert_eq!(
            action_for(DEFAULT_BUTTONS, 2),
            Some(ButtonAction::Start(AnimationMode::ColorWipe))
        );
        assert_eq!(
            action_for(DEFAULT_BUTTONS, 8),
            Some(ButtonAction::Start(AnimationMode::RotatingColorWipe))
        );
        assert_eq!(action_for(DEFAULT_BUTTONS, 6), Some(ButtonAction::Pause));
        assert_eq!(action_for(DEFAULT_BUTTONS, 5), Some(ButtonAction::Resume));
        assert_eq!(action_for(DEFAULT_BUTTONS, 7), None);
        assert_eq!(action_for(DEFAULT_BUTTONS, 9), None);
    }

    #[test]
    fn test_channel_is_bounded() {
        let channel = CommandChannel::<2>::new();
        let sender = channel.sender();
        let command = Command::SetColor(RED);

        assert!(sender.try_send(command).is_ok());
        assert!(sender.try_send(command).is_ok());
        assert_eq!(sender.try_send(command), Err(TrySendError(command)));
        assert_eq!(channel.len(), 2);
        assert_eq!(
            sender.try_send_payload(b"B21"),
            Err(PayloadError::Full(Command::Button {
                id: 2,
                pressed: true
            }))
        );

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(command));
        assert_eq!(receiver.try_receive(), Ok(command));
        assert!(receiver.try_receive().is_err());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_queue_errors_display() {
        let channel = CommandChannel::<1>::new();
        let sender = channel.sender();
        sender.try_send(Command::SetColor(RED)).unwrap();

        let full = sender.try_send(Command::SetColor(RED)).unwrap_err();
        assert!(full.to_string().starts_with("command queue is full"));

        let malformed = sender.try_send_payload(b"Z").unwrap_err();
        assert_eq!(
            malformed.to_string(),
            format!("malformed payload: {}", DecodeError::UnknownTag(b'Z'))
        );
        let source = std::error::Error::source(&malformed).map(ToString::to_string);
        assert_eq!(source, Some(DecodeError::UnknownTag(b'Z').to_string()));

        channel.receiver().try_receive().unwrap();
        let empty = channel.receiver().try_receive().unwrap_err();
        assert_eq!(empty.to_string(), "command queue is empty");
    }

    #[test]
    fn test_malformed_payload_never_queued() {
        let channel = CommandChannel::<4>::new();
        assert_eq!(
            channel.sender().try_send_payload(b"Q"),
            Err(PayloadError::Decode(DecodeError::UnknownTag(b'Q')))
        );
        assert!(channel.is_empty());
    }

    #[test]
    fn test_dispatcher_drives_animator() {
        let channel = CommandChannel::<8>::new();
        let sender = channel.sender();
        let config = AnimatorConfig::default();
        let mut dispatcher = CommandDispatcher::new(channel.receiver(), &config);
        let mut animator = animator::<10>();

        sender.try_send_payload(b"B21").unwrap();
        sender.try_send_payload(b"B20").unwrap();
        assert_eq!(dispatcher.process_pending(&mut animator, at(0)), 2);
        assert_eq!(animator.mode(), AnimationMode::ColorWipe);
        assert_eq!(animator.active_color(), Some(RED));
        assert_eq!(animator.step_interval(), ms(30));

        for now in [0, 30] {
            assert_eq!(animator.tick(at(now)), TickOutcome::Stepped);
        }

        sender.try_send_payload(b"B61").unwrap();
        dispatcher.process_pending(&mut animator, at(40));
        assert_eq!(animator.mode(), AnimationMode::Static);
        assert_eq!(animator.tick(at(60)), TickOutcome::Idle);

        sender.try_send_payload(b"B51").unwrap();
        dispatcher.process_pending(&mut animator, at(70));
        assert_eq!(animator.mode(), AnimationMode::ColorWipe);
        assert_eq!(animator.pixel_index(), 2);

        sender.try_send_payload(b"B81").unwrap();
        dispatcher.process_pending(&mut animator, at(80));
        assert_eq!(animator.mode(), AnimationMode::RotatingColorWipe);
        assert_eq!(animator.pixel_index(), 0);

        sender.try_send_payload(b"C\x00\x00\x00").unwrap();
        dispatcher.process_pending(&mut animator, at(90));
        assert_eq!(animator.mode(), AnimationMode::Static);
        assert_eq!(animator.sink().strand(Strand::A), &[BLACK; 10]);
    }

    #[test]
    fn test_dispatcher_ignores_unmapped_and_released_buttons() {
        let channel = CommandChannel::<4>::new();
        let config = AnimatorConfig::default();
        let mut dispatcher = CommandDispatcher::new(channel.receiver(), &config);
        let mut animator = animator::<10>();

        channel.sender().try_send_payload(b"B91").unwrap();
        channel.sender().try_send_payload(b"B80").unwrap();
        channel.sender().try_send_payload(b"B51").unwrap();
        assert_eq!(dispatcher.process_pending(&mut animator, at(0)), 3);
        assert_eq!(animator.mode(), AnimationMode::Static);
        assert_eq!(dispatcher.process_pending(&mut animator, at(0)), 0);
    }

    #[test]
    fn test_scanner_button_uses_scanner_interval() {
        let channel = CommandChannel::<4>::new();
        let config = AnimatorConfig::default();
        let mut dispatcher = CommandDispatcher::new(channel.receiver(), &config);
        let mut animator = animator::<10>();

        channel.sender().try_send_payload(b"B11").unwrap();
        dispatcher.process_pending(&mut animator, at(0));
        assert_eq!(animator.mode(), AnimationMode::LarsonScanner);
        assert_eq!(animator.step_interval(), ms(20));
        assert_eq!(animator.active_color(), Some(RED));
    }

    #[test]
    fn test_dispatcher_shares_animator_config() {
        let config = AnimatorConfig {
            scanner_interval: ms(45),
            brightness: 64,
            ..AnimatorConfig::default()
        };
        let channel = CommandChannel::<4>::new();
        let playlist = Playlist::<1>::new(&[RED]).unwrap();
        let mut animator = Animator::new(sink::<10>(), playlist, &config);
        let mut dispatcher = CommandDispatcher::new(channel.receiver(), &config);
        assert!(core::ptr::eq(dispatcher.config(), &config));
        assert_eq!(animator.sink().brightness(), 64);

        channel.sender().try_send_payload(b"B11").unwrap();
        dispatcher.process_pending(&mut animator, at(0));
        assert_eq!(animator.step_interval(), ms(45));
    }

    #[test]
    fn test_custom_button_table() {
        static BUTTONS: [ButtonBinding; 1] = [ButtonBinding::new(
            7,
            ButtonAction::Start(AnimationMode::RainbowCycle),
        )];
        let config = AnimatorConfig {
            buttons: &BUTTONS,
            ..AnimatorConfig::default()
        };
        let channel = CommandChannel::<4>::new();
        let dispatcher = CommandDispatcher::new(channel.receiver(), &config);
        let mut animator = animator::<10>();

        dispatcher.dispatch(
            &mut animator,
            Command::Button {
                id: 2,
                pressed: true,
            },
            at(0),
        );
        assert_eq!(animator.mode(), AnimationMode::Static);

        dispatcher.dispatch(
            &mut animator,
            Command::Button {
                id: 7,
                pressed: true,
            },
            at(0),
        );
        assert_eq!(animator.mode(), AnimationMode::RainbowCycle);
        assert_eq!(animator.step_interval(), ms(10));
    }
}
