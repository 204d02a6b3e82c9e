mod tests {
    use myrtio_segment_composer::color::{ChannelOrder, Color};
    use myrtio_segment_composer::fade::{FadeConfig, FadeFunction, PhaseState};
    use myrtio_segment_composer::{ConfigError, OutputDriver, Path, PathConfig, SegmentSpec};

    const LEVEL: u8 = 100;

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<u8>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, data: &[u8]) {
            self.frames.push(data.to_vec());
        }
    }

    fn flat_config() -> PathConfig {
        PathConfig {
            channel_order: ChannelOrder::Mono,
            brightness: 1.0,
            segment_color: Color::rgb(0, LEVEL, 0),
            fade: FadeConfig::FLAT,
            ..PathConfig::default()
        }
    }

    fn two_segments() -> Path<64, 4> {
        let segments = [SegmentSpec::new("left", 4), SegmentSpec::new("right", 6)];
        Path::new(10, &segments, &flat_config()).unwrap()
    }

    #[test]
    fn test_segments_partition_path() {
        let path = two_segments();
        assert_eq!(path.num_leds(), 10);
        assert_eq!(path.num_segments(), 2);

        let total: usize = path.segments().iter().map(|s| s.length()).sum();
        assert_eq!(total, path.num_leds());

        let right = path.segment(1).unwrap();
        assert_eq!(right.name(), "right");
        assert_eq!(right.offset(), 4);
        assert_eq!(right.range(), 4..10);
        assert!(path.segment(2).is_none());
    }

    #[test]
    fn test_uniform_layout() {
        let path = Path::<256, 8>::uniform(3, 20, &PathConfig::default()).unwrap();
        assert_eq!(path.num_leds(), 60);
        assert_eq!(path.data().len(), 60 * 3);
        assert_eq!(path.segment(2).unwrap().offset(), 40);
    }

    #[test]
    fn test_length_mismatch() {
        let segments = [SegmentSpec::new("a", 4), SegmentSpec::new("b", 5)];
        let result = Path::<64, 4>::new(10, &segments, &flat_config());
        assert_eq!(
            result.err(),
            Some(ConfigError::SegmentLengthMismatch {
                expected: 10,
                actual: 9
            })
        );
    }

    #[test]
    fn test_capacity_errors() {
        let grb = PathConfig::default();
        let result = Path::<8, 4>::new(3, &[SegmentSpec::new("a", 3)], &grb);
        assert_eq!(
            result.err(),
            Some(ConfigError::BufferTooSmall {
                required: 9,
                capacity: 8
            })
        );

        let segments = [SegmentSpec::new("a", 1), SegmentSpec::new("b", 1)];
        let result = Path::<64, 1>::new(2, &segments, &grb);
        assert_eq!(
            result.err(),
            Some(ConfigError::TooManySegments {
                count: 2,
                capacity: 1
            })
        );

        let result = Path::<64, 4>::new(0, &[], &grb);
        assert_eq!(result.err(), Some(ConfigError::EmptyPath));
    }

    #[test]
    fn test_update_flushes_once() {
        let mut path = two_segments();
        let mut driver = RecordingDriver::default();

        path.update(16.0, &mut driver);
        assert_eq!(driver.frames.len(), 1);
        assert_eq!(driver.frames[0], vec![LEVEL; 10]);
        assert_eq!(driver.frames[0].as_slice(), path.data());
    }

    #[test]
    fn test_inactive_segment_is_dark() {
        let mut path = two_segments();
        let mut driver = RecordingDriver::default();

        path.segment_mut(0).unwrap().set_active(false);
        path.update(16.0, &mut driver);

        assert_eq!(&driver.frames[0][..4], &[0; 4]);
        assert_eq!(&driver.frames[0][4..], &[LEVEL; 6]);
        assert_eq!(path.pixel(5), Some(&[LEVEL][..]));
        assert_eq!(path.pixel(10), None);
    }

    #[test]
    fn test_zero_step_is_idempotent() {
        let config = PathConfig {
            fade: FadeConfig::PATH,
            ..flat_config()
        };
        let mut path = Path::<64, 4>::uniform(2, 4, &config).unwrap();
        path.set_reveal_cursor(3.0);
        let mut driver = RecordingDriver::default();

        path.update(0.0, &mut driver);
        let phase = *path.phase();
        path.update(0.0, &mut driver);

        assert_eq!(path.reveal_cursor(), 3.0);
        assert_eq!(*path.phase(), phase);
        assert_eq!(driver.frames[0], driver.frames[1]);
    }

    #[test]
    fn test_reveal_cursor_grows_and_saturates() {
        let mut path = two_segments();
        let mut driver = RecordingDriver::default();
        path.set_reveal_cursor(0.0);
        path.set_growth_rate(1000.0);

        path.update(2.0, &mut driver);
        assert_eq!(driver.frames[0], vec![0; 10]);
        assert_eq!(path.reveal_cursor(), 2.0);

        path.update(2.0, &mut driver);
        assert_eq!(&driver.frames[1][..2], &[LEVEL; 2]);
        assert_eq!(&driver.frames[1][2..], &[0; 8]);

        let mut last = path.reveal_cursor();
        for _ in 0..10 {
            path.update(1.5, &mut driver);
            assert!(path.reveal_cursor() >= last);
            assert!(path.reveal_cursor() <= 10.0);
            last = path.reveal_cursor();
        }
        assert_eq!(path.reveal_cursor(), 10.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut path = two_segments();

        path.set_brightness(2.0);
        assert_eq!(path.brightness(), 1.0);
        path.set_brightness(-1.0);
        assert_eq!(path.brightness(), 0.0);

        path.set_reveal_cursor(25.0);
        assert_eq!(path.reveal_cursor(), 10.0);

        path.set_growth_rate(-5.0);
        assert_eq!(path.growth_rate(), 0.0);
    }

    #[test]
    fn test_brightness_scales_output() {
        let mut path = two_segments();
        let mut driver = RecordingDriver::default();

        path.set_brightness(0.5);
        path.update(0.0, &mut driver);
        assert_eq!(driver.frames[0], vec![50; 10]);
    }

    #[test]
    fn test_fade_override_lasts_one_frame() {
        let config = PathConfig {
            fade: FadeConfig::PATH,
            ..flat_config()
        };
        let mut path = Path::<64, 4>::uniform(2, 4, &config).unwrap();
        let mut driver = RecordingDriver::default();

        path.override_fade(&FadeFunction::flat(), &PhaseState::new());
        path.update(0.0, &mut driver);
        path.update(0.0, &mut driver);

        assert_eq!(driver.frames[0], vec![LEVEL; 8]);
        // Own fade at zero phase halves the first pixel
        assert_eq!(driver.frames[1][0], 50);
    }

    #[test]
    fn test_clear() {
        let mut path = two_segments();
        let mut driver = RecordingDriver::default();
        path.update(0.0, &mut driver);

        path.clear();
        assert!(path.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_nan_brightness_is_dark() {
        let config = PathConfig {
            brightness: f32::NAN,
            ..flat_config()
        };
        let path = Path::<64, 4>::uniform(2, 4, &config).unwrap();
        assert_eq!(path.brightness(), 0.0);
    }

    #[test]
    fn test_oversized_layouts_are_rejected() {
        let huge = [SegmentSpec::new("a", usize::MAX), SegmentSpec::new("b", 2)];
        assert_eq!(
            Path::<64, 4>::new(5, &huge, &flat_config()).err(),
            Some(ConfigError::SegmentLengthMismatch {
                expected: 5,
                actual: usize::MAX
            })
        );

        let half = usize::MAX / 2 + 1;
        let result = Path::<64, 4>::new(half, &[SegmentSpec::new("a", half)], &PathConfig::default());
        assert_eq!(
            result.err(),
            Some(ConfigError::BufferTooSmall {
                required: usize::MAX,
                capacity: 64
            })
        );

        assert!(matches!(
            Path::<64, 4>::uniform(2, usize::MAX, &flat_config()),
            Err(ConfigError::SegmentLengthMismatch { .. })
        ));
    }
}
