#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Color;
use crate::error::ConfigError;
use crate::intent::{ComposerIntent, IntentReceiver};
use crate::mode::{ModeConfig, ModeId, Program};
use crate::path::Path;
use crate::random::RandomSource;

/// Configuration for the composer
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Program started on construction
    pub mode: ModeId,
    pub modes: ModeConfig,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            mode: ModeId::Composite,
            modes: ModeConfig::default(),
        }
    }
}

/// Segment composer - the main orchestrator
///
/// Owns the path, the running program and the random source. Every tick it
/// applies pending intents, lets the program mutate the path and flushes
/// the path to the output.
pub struct Composer<
    'a,
    R: RandomSource,
    const MAX_BYTES: usize,
    const MAX_SEGMENTS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    modes: ModeConfig,

    path: Path<MAX_BYTES, MAX_SEGMENTS>,
    program: Program,
    rng: R,
}

impl<'a, R, const MAX_BYTES: usize, const MAX_SEGMENTS: usize, const INTENT_CHANNEL_SIZE: usize>
    Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE>
where
    R: RandomSource,
{
    /// Create a composer running `config.mode` on the given path
    pub fn new(
        path: Path<MAX_BYTES, MAX_SEGMENTS>,
        mut rng: R,
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &ComposerConfig,
    ) -> Result<Self, ConfigError> {
        config.modes.validate()?;
        let program = Program::from_id(config.mode, &config.modes, &mut rng)?;

        Ok(Self {
            intents,
            modes: config.modes.clone(),
            path,
            program,
            rng,
        })
    }

    /// Advance the animation by `delta_ms` and write one frame to `output`
    pub fn tick<O: OutputDriver>(&mut self, delta_ms: f32, output: &mut O) {
        self.process_intents();
        self.program.process(delta_ms, &mut self.path, &mut self.rng);
        self.path.update(delta_ms, output);
    }

    /// Replace the running program
    ///
    /// The outgoing program is reset first so it leaves no inactive
    /// segments behind.
    pub fn set_mode(&mut self, id: ModeId) -> Result<(), ConfigError> {
        let program = Program::from_id(id, &self.modes, &mut self.rng)?;
        self.program.reset(&mut self.path);
        self.program = program;

        #[cfg(feature = "esp32-log")]
        println!("[Composer.set_mode] switched to {}", id.as_str());

        Ok(())
    }

    /// Reset the running program
    pub fn reset(&mut self) {
        self.program.reset(&mut self.path);
    }

    pub fn mode_id(&self) -> ModeId {
        self.program.id()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn path(&self) -> &Path<MAX_BYTES, MAX_SEGMENTS> {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut Path<MAX_BYTES, MAX_SEGMENTS> {
        &mut self.path
    }

    pub fn modes(&self) -> &ModeConfig {
        &self.modes
    }

    /// Drain pending intents (non-blocking)
    fn process_intents(&mut self) {
        while let Ok(intent) = self.intents.try_receive() {
            self.apply_intent(intent);
        }
    }

    fn apply_intent(&mut self, intent: ComposerIntent) {
        match intent {
            ComposerIntent::SetBrightness(brightness) => {
                self.path.set_brightness(brightness);

                #[cfg(feature = "esp32-log")]
                println!("[Composer.apply_intent] brightness {}", self.path.brightness());
            }
            ComposerIntent::SwitchMode(id) => {
                if let Err(_err) = self.set_mode(id) {
                    #[cfg(feature = "esp32-log")]
                    println!("[Composer.apply_intent] cannot switch to {}: {}", id.as_str(), _err);
                }
            }
            ComposerIntent::SetColor(color) => self.set_color(color),
            ComposerIntent::SetGrowthRate(rate) => {
                self.path.set_growth_rate(rate);

                #[cfg(feature = "esp32-log")]
                println!("[Composer.apply_intent] growth rate {}", self.path.growth_rate());
            }
            ComposerIntent::Reset => {
                self.reset();

                #[cfg(feature = "esp32-log")]
                println!("[Composer.apply_intent] reset {}", self.program.id().as_str());
            }
        }
    }

    fn set_color(&mut self, color: Color) {
        self.path.set_all_segments(color);

        #[cfg(feature = "esp32-log")]
        println!("[Composer.set_color] 0x{:08x}", color.to_u32());
    }
}
