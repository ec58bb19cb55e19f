use std::path::PathBuf;
use std::process;

use clap::Parser;

use stylecam_core::capture::infrastructure::image_file_sink::ImageFileSink;
use stylecam_core::capture::infrastructure::image_file_source::ImageFileSource;
use stylecam_core::pipeline::stylize_image_use_case::StylizeImageUseCase;
use stylecam_core::stylize::domain::style_transform::StyleKind;
use stylecam_core::stylize::infrastructure::style_factory::create_transform;

/// Photo enhancement and stylized rendering.
#[derive(Parser)]
#[command(name = "stylecam")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Rendering style: original, anime, oil or comic.
    #[arg(long, default_value = "original")]
    style: String,

    /// Fixed seed for the oil-paint grain (random when omitted).
    #[arg(long)]
    grain_seed: Option<u64>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let kind = StyleKind::from_name(&cli.style);
    if kind.name() != cli.style {
        log::warn!(
            "Unknown style '{}', falling back to '{}'",
            cli.style,
            kind.name()
        );
    }

    let source = Box::new(ImageFileSource::new(&cli.input));
    let sink = Box::new(ImageFileSink::new(&cli.output));
    let transform = create_transform(kind, cli.grain_seed);

    let mut use_case = StylizeImageUseCase::new(source, sink, transform);
    use_case.execute()?;
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    Ok(())
}
