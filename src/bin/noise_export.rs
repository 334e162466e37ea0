use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use perlin_texture::{generate_texture, GeneratorSettings};

#[derive(Parser)]
#[command(name = "noise-export")]
#[command(about = "Generate a seeded Perlin noise texture and save it as PNG")]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the permutation table (random when omitted)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Grid side in pixels
    #[arg(long)]
    size: Option<u32>,

    #[arg(long)]
    octaves: Option<u32>,

    #[arg(long)]
    frequency: Option<f32>,

    #[arg(long)]
    amplitude: Option<f32>,

    /// Frequency multiplier per octave
    #[arg(long)]
    growth: Option<f32>,

    /// Amplitude multiplier per octave
    #[arg(long)]
    decay: Option<f32>,

    /// Gain applied before clamping
    #[arg(long)]
    gain: Option<f32>,

    #[arg(long)]
    parallel: bool,

    #[arg(long, default_value = "noise_texture.png")]
    output: PathBuf,
}

impl Args {
    fn settings(&self) -> perlin_texture::Result<GeneratorSettings> {
        let mut settings = match &self.config {
            Some(path) => GeneratorSettings::load(path)?,
            None => GeneratorSettings::default(),
        };

        let field = &mut settings.field;
        if let Some(v) = self.size {
            field.grid_size = v;
        }
        if let Some(v) = self.octaves {
            field.octave_count = v;
        }
        if let Some(v) = self.frequency {
            field.base_frequency = v;
        }
        if let Some(v) = self.amplitude {
            field.base_amplitude = v;
        }
        if let Some(v) = self.growth {
            field.frequency_growth = v;
        }
        if let Some(v) = self.decay {
            field.amplitude_decay = v;
        }
        if let Some(v) = self.gain {
            field.final_gain = v;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.parallel |= self.parallel;

        Ok(settings)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = args.settings()?;

    let start = Instant::now();
    let generated = generate_texture(&settings)?;
    generated.texture.save_png(&args.output)?;

    println!("Seed: {}", generated.seed);
    println!("Size: {}x{}", generated.texture.width(), generated.texture.height());
    println!("Output: {}", args.output.display());
    println!("Time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
