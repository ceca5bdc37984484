//! The generation pipeline.
//!
//! Configuration -> palette resolution -> grid synthesis -> rasterization ->
//! encode. Every call builds its own random stream and surface, so calls
//! share nothing and can run side by side. A call either returns a complete
//! image or an error; partial surfaces never escape.

use crate::error::Result;
use crate::generate::{synthesize, FamilyRules, Layout};
use crate::render::{draw_flat, draw_isometric, Png, Surface, SurfaceEncoder};
use crate::types::GeneratorConfig;

/// A finished image together with the config that produced it.
#[derive(Debug, Clone)]
pub struct Artwork {
    /// The input config with its seed and palette filled in.
    pub config: GeneratorConfig,

    /// Encoded image bytes.
    pub png: Vec<u8>,

    pub width: u32,

    pub height: u32,
}

/// Runs the pipeline with a pluggable encoder.
#[derive(Debug, Clone, Default)]
pub struct Generator<E = Png> {
    encoder: E,
}

impl Generator<Png> {
    /// Create a generator that writes PNG.
    pub fn new() -> Self {
        Self { encoder: Png::new() }
    }
}

impl<E: SurfaceEncoder> Generator<E> {
    /// Create a generator with a custom encoder.
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    /// Generate and encode one image.
    ///
    /// Config errors are reported before anything is drawn.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<Artwork> {
        let config = config.with_resolved_seed();
        let surface = render_surface(&config)?;
        let png = self.encoder.encode(&surface)?;

        Ok(Artwork {
            width: surface.width(),
            height: surface.height(),
            config,
            png,
        })
    }
}

/// Synthesize the logical layout for a config without drawing it.
pub fn layout(config: &GeneratorConfig) -> Result<Layout> {
    let palette = config.validate()?;
    let rules = FamilyRules::for_family(config.family);
    Ok(synthesize(rules, config.projection, palette, config.resolve_seed()))
}

/// Render a config to an unencoded surface.
pub fn render_surface(config: &GeneratorConfig) -> Result<Surface> {
    let palette = config.validate()?;
    let rules = FamilyRules::for_family(config.family);
    let layout = synthesize(rules, config.projection, palette, config.resolve_seed());
    let cell = rules.cell_pixels(config.projection, config.size);

    let mut surface = Surface::new(config.size, config.size, rules.background);
    match &layout {
        Layout::Flat(grid) => draw_flat(&mut surface, grid, palette, cell),
        Layout::Isometric(blocks) => draw_isometric(
            &mut surface,
            blocks,
            palette,
            cell,
            rules.isometric.vertical_divisor,
        ),
    }

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;
    use crate::types::{Colour, Projection, VisualFamily};

    #[test]
    fn test_render_surface_size() {
        let config = GeneratorConfig::default().with_size(256).with_seed(1);
        let surface = render_surface(&config).unwrap();
        assert_eq!(surface.size(), (256, 256));
    }

    #[test]
    fn test_sky_band_paints_stray_blocks() {
        let config = GeneratorConfig::default().with_size(256).with_seed(42);
        let surface = render_surface(&config).unwrap();
        let classic = config.resolve_palette().unwrap();

        // Cell (0, 0) stays sky; cell (7, 0) drew low and took the surface rule.
        assert_eq!(surface.get(8, 8), Some(Colour::hex(0x87CEEB)));
        assert_eq!(surface.get(7 * 16 + 8, 8), Some(classic.entries[0].base));

        let Layout::Flat(grid) = layout(&config).unwrap() else {
            panic!("expected a flat layout");
        };
        let painted_sky = grid.painted().filter(|&(_, y, _)| y < 4).count();
        assert_eq!(painted_sky, 17);
    }

    #[test]
    fn test_invalid_config_draws_nothing() {
        let config = GeneratorConfig::default().with_palette("psychic").with_seed(1);
        assert!(matches!(
            render_surface(&config),
            Err(ForgeError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Generator::new().generate(&config),
            Err(ForgeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_generate_records_seed() {
        let config = GeneratorConfig::new(VisualFamily::Creature, Projection::Flat).with_size(256);
        let artwork = Generator::new().generate(&config).unwrap();

        let seed = artwork.config.seed.unwrap();
        let again = Generator::new()
            .generate(&config.clone().with_seed(seed))
            .unwrap();
        assert_eq!(artwork.png, again.png);
    }

    struct FailingEncoder;

    impl SurfaceEncoder for FailingEncoder {
        fn encode(&self, _surface: &Surface) -> Result<Vec<u8>> {
            Err(ForgeError::Encode {
                message: "no data".to_string(),
            })
        }
    }

    #[test]
    fn test_encode_failure_surfaces() {
        let config = GeneratorConfig::default().with_size(256).with_seed(3);
        let err = Generator::with_encoder(FailingEncoder)
            .generate(&config)
            .unwrap_err();
        assert!(matches!(err, ForgeError::Encode { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_layout_matches_render() {
        let config = GeneratorConfig::default().with_size(512).with_seed(42);
        let Layout::Flat(grid) = layout(&config).unwrap() else {
            panic!("expected a flat layout");
        };
        let surface = render_surface(&config).unwrap();
        let palette = config.resolve_palette().unwrap();

        for y in 0..16 {
            for x in 0..16 {
                let centre = surface.get(x * 32 + 16, y * 32 + 16).unwrap();
                let expected = grid
                    .get(x, y)
                    .and_then(|i| palette.get(i))
                    .map_or(Colour::hex(0x87CEEB), |e| e.base);
                assert_eq!(centre, expected, "cell ({}, {})", x, y);
            }
        }
    }
}
