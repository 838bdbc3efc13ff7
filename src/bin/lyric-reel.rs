use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lyric-reel", version, about = "Render text slides and assemble a lyric video")]
struct Cli {
    /// Log debug output.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one PNG per configured slide.
    Image(ImageArgs),
    /// Assemble the slide images and audio into an MP4 (requires `ffmpeg` and `ffprobe`).
    Video(ConfigArg),
    /// Render the images, then the video.
    Build(ImageArgs),
    /// Print the resolved project.
    Show(ConfigArg),
    /// Render a synthetic sample slide without any config.
    Test(TestArgs),
}

#[derive(Parser, Debug)]
struct ConfigArg {
    /// Project YAML file.
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    /// Project YAML file.
    config: PathBuf,

    /// Render slides on all cores.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct TestArgs {
    /// Output PNG path.
    #[arg(long, default_value = "test_image.png")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Image(args) => cmd_image(&args.config, args.parallel),
        Command::Video(args) => cmd_video(&args.config),
        Command::Build(args) => {
            cmd_image(&args.config, args.parallel)?;
            cmd_video(&args.config)
        }
        Command::Show(args) => cmd_show(&args.config),
        Command::Test(args) => cmd_test(&args.out),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_image(config: &Path, parallel: bool) -> anyhow::Result<()> {
    let project = lyric_reel::load_project(config)?;
    let slides = lyric_reel::generate_images(&project, parallel)?;
    for slide in &slides {
        eprintln!("wrote {}", slide.path.display());
    }
    Ok(())
}

fn cmd_video(config: &Path) -> anyhow::Result<()> {
    let project = lyric_reel::load_project(config)?;
    let out = lyric_reel::generate_video(&project)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_show(config: &Path) -> anyhow::Result<()> {
    let project = lyric_reel::load_project(config)?;
    println!("{}", lyric_reel::format_project(&project));
    Ok(())
}

fn cmd_test(out: &Path) -> anyhow::Result<()> {
    let settings = lyric_reel::RenderSettings::default();
    let slide = lyric_reel::render_test_slide(&settings, out)?;
    eprintln!(
        "wrote {} ({} findings)",
        slide.path.display(),
        slide.report.findings.len()
    );
    Ok(())
}
