mod tests {
    use std::collections::VecDeque;

    use myrtio_segment_composer::color::{ChannelOrder, Color, Palette};
    use myrtio_segment_composer::fade::{FadeConfig, FadeFunction};
    use myrtio_segment_composer::mode::{
        FlashMode, GrowthRange, Mode, OneColorMode, SegmentToggleMode, SinusFillMode,
        TriggerRange,
    };
    use myrtio_segment_composer::{OutputDriver, Path, PathConfig, RandomSource};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const RED: Color = Color::rgb(200, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 120);

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<u8>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, data: &[u8]) {
            self.frames.push(data.to_vec());
        }
    }

    /// Replays queued values, falls back to the lower bound
    #[derive(Default)]
    struct ScriptedRng {
        ints: VecDeque<u32>,
        floats: VecDeque<f32>,
    }

    impl RandomSource for ScriptedRng {
        fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
            if max <= min {
                return min;
            }
            self.ints.pop_front().map_or(min, |v| v.clamp(min, max))
        }

        fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
            if max <= min {
                return min;
            }
            self.floats.pop_front().map_or(min, |v| v.clamp(min, max))
        }
    }

    fn mono_config() -> PathConfig {
        PathConfig {
            channel_order: ChannelOrder::Mono,
            brightness: 1.0,
            fade: FadeConfig::FLAT,
            ..PathConfig::default()
        }
    }

    fn mono_path(num_segments: usize, length: usize) -> Path<64, 8> {
        Path::uniform(num_segments, length, &mono_config()).unwrap()
    }

    #[test]
    fn test_fixed_period_fires_exactly_at_period() {
        let mut rng = SmallRng::seed_from_u64(1);
        let palette = Palette::new(&[RED, BLUE]).unwrap();
        let mut path = mono_path(2, 4);

        let mut mode = OneColorMode::new(TriggerRange::fixed(1000.0), palette.clone(), &mut rng);
        let initial = path.segment(0).unwrap().color();

        mode.process(999.0, &mut path, &mut rng);
        assert_eq!(path.segment(0).unwrap().color(), initial);

        let mut fresh = OneColorMode::new(TriggerRange::fixed(1000.0), palette, &mut rng);
        let next = fresh.next_color();
        fresh.process(1000.0, &mut path, &mut rng);
        assert!(path.segments().iter().all(|s| s.color() == next));
        assert_eq!(fresh.trigger().time_accumulator(), 0.0);
        assert_eq!(fresh.trigger().trigger_time(), 1000.0);
    }

    #[test]
    fn test_one_color_scenario() {
        let mut rng = SmallRng::seed_from_u64(42);
        let palette = Palette::new(&[RED, BLUE]).unwrap();
        let mut path = mono_path(2, 4);
        let mut driver = RecordingDriver::default();

        let mut mode = OneColorMode::new(TriggerRange::fixed(1000.0), palette, &mut rng);
        let drawn = mode.next_color();

        mode.process(1000.0, &mut path, &mut rng);
        path.update(1000.0, &mut driver);
        assert_eq!(driver.frames[0], vec![drawn.brightest(); 8]);

        mode.process(999.0, &mut path, &mut rng);
        assert!(path.segments().iter().all(|s| s.color() == drawn));
    }

    #[test]
    fn test_large_step_fires_once() {
        let mut rng = ScriptedRng::default();
        let mut path = mono_path(2, 4);
        let mut mode = FlashMode::new(TriggerRange::fixed(100.0), GrowthRange::default(), &mut rng);

        path.set_reveal_cursor(8.0);
        mode.process(1000.0, &mut path, &mut rng);
        assert_eq!(path.reveal_cursor(), 0.0);
        assert_eq!(mode.trigger().time_accumulator(), 0.0);

        // Overshoot was dropped, the next short step does not fire again
        path.set_reveal_cursor(8.0);
        mode.process(10.0, &mut path, &mut rng);
        assert_eq!(path.reveal_cursor(), 8.0);
    }

    #[test]
    fn test_reset_fires_on_next_process() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut path = mono_path(2, 4);
        let mut mode = OneColorMode::new(
            TriggerRange::new(5_000.0, 25_000.0),
            Palette::single(BLUE),
            &mut rng,
        );

        mode.reset(&mut path);
        assert_eq!(mode.trigger().trigger_time(), 0.0);

        mode.process(0.0, &mut path, &mut rng);
        assert!(path.segments().iter().all(|s| s.color() == BLUE));
        assert!(mode.trigger().trigger_time() >= 5_000.0);
    }

    #[test]
    fn test_flash_chase_returns_to_full_length() {
        let mut rng = ScriptedRng::default();
        let mut path = mono_path(2, 5);
        let mut driver = RecordingDriver::default();
        let mut mode = FlashMode::new(
            TriggerRange::fixed(100.0),
            GrowthRange::new(2.0, 2.0),
            &mut rng,
        );

        mode.process(100.0, &mut path, &mut rng);
        assert_eq!(path.reveal_cursor(), 0.0);
        assert_eq!(path.growth_rate(), 20.0);

        // 10 leds at 20 leds/s take 500 ms
        let mut last = 0.0;
        for _ in 0..5 {
            path.update(100.0, &mut driver);
            assert!(path.reveal_cursor() >= last);
            last = path.reveal_cursor();
        }
        assert_eq!(path.reveal_cursor(), 10.0);

        path.update(100.0, &mut driver);
        assert_eq!(path.reveal_cursor(), 10.0);
    }

    #[test]
    fn test_flash_growth_scales_with_path() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut path = mono_path(4, 10);
        let mut mode = FlashMode::new(TriggerRange::fixed(50.0), GrowthRange::default(), &mut rng);

        for _ in 0..20 {
            mode.process(50.0, &mut path, &mut rng);
            let rate = path.growth_rate();
            assert!((40.0..=160.0).contains(&rate), "growth rate {rate}");
        }
    }

    #[test]
    fn test_segment_toggle_draws_per_segment() {
        let mut rng = ScriptedRng {
            ints: VecDeque::from([1, 0, 1]),
            floats: VecDeque::from([0.1, 0.9, 0.3]),
        };
        let mut path = mono_path(3, 2);
        let palette = Palette::new(&[RED, BLUE]).unwrap();
        let mut mode = SegmentToggleMode::new(TriggerRange::fixed(100.0), palette, &mut rng);

        mode.process(100.0, &mut path, &mut rng);

        let active: Vec<bool> = path.segments().iter().map(|s| s.active()).collect();
        let colors: Vec<Color> = path.segments().iter().map(|s| s.color()).collect();
        assert_eq!(active, [true, false, true]);
        assert_eq!(colors, [BLUE, RED, BLUE]);

        mode.reset(&mut path);
        assert!(path.segments().iter().all(|s| s.active()));
    }

    #[test]
    fn test_sinus_fill_renders_every_process() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = PathConfig {
            fade: FadeConfig::PATH,
            segment_color: Color::rgb(0, 100, 0),
            ..mono_config()
        };
        let mut path = Path::<64, 8>::uniform(2, 4, &config).unwrap();
        let mut driver = RecordingDriver::default();
        let mut mode = SinusFillMode::new(FadeFunction::flat());

        mode.process(16.0, &mut path, &mut rng);
        path.update(16.0, &mut driver);
        assert_eq!(driver.frames[0], vec![100; 8]);

        path.segment_mut(1).unwrap().set_active(false);
        mode.process(16.0, &mut path, &mut rng);
        path.update(16.0, &mut driver);
        assert_eq!(driver.frames[1], [vec![100u8; 4], vec![0u8; 4]].concat());
    }

    #[test]
    fn test_sinus_fill_phase_moves_and_resets() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut path = mono_path(2, 4);
        let fade = FadeFunction::new(&FadeConfig::SINUS_FILL).unwrap();
        let mut mode = SinusFillMode::new(fade);

        mode.process(100.0, &mut path, &mut rng);
        assert!(mode.phase().offsets().iter().any(|offset| *offset > 0.0));

        mode.reset(&mut path);
        assert!(mode.phase().offsets().iter().all(|offset| *offset == 0.0));
    }
}
