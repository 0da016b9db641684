use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sc2_quantize::{
    decode_sc2, decode_sc4, sc2_to_sc4, Palette, PaletteFamily, Sc2Converter, VRAM_SIZE,
};
use sc2conv::error::CliError;
use sc2conv::models::{
    parse_color, parse_palette_arg, ConvertProfile, EightDot, OutputFormat, Oversize, Undersize,
};
use sc2conv::services::{
    check_conflicts, collect_inputs, encode_indexed_png, load_rgb, plan_jobs, read_bytes,
    write_bytes,
};

#[derive(Parser)]
#[command(name = "sc2conv")]
#[command(about = "Convert PNG images into MSX Screen 2 (.sc2) or Screen 4 (.sc4) VRAM files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PNG files (or folders of PNGs) to .sc2/.sc4
    Convert(ConvertArgs),
    /// Turn an existing .sc2 file into a .sc4 file
    Remap {
        /// Screen 2 file (with or without BSAVE header)
        input: PathBuf,

        /// Output .sc4 file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        palette: PaletteArgs,

        /// Write raw VRAM data without the 7-byte BSAVE header
        #[arg(long)]
        no_header: bool,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },
    /// Render an .sc2/.sc4 file to PNG
    View {
        /// Screen 2 or Screen 4 file
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Input format; guessed from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Palette for Screen 2 files (Screen 4 files carry their own)
        #[command(flatten)]
        palette: PaletteArgs,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },
    /// List the MSX1 and MSX2 base palettes
    Palette,
}

#[derive(Args)]
struct PaletteArgs {
    /// Use the MSX2 base palette instead of MSX1
    #[arg(long)]
    msx2_palette: bool,

    /// Override a palette entry, e.g. --palette 5=255,0,0 (repeatable)
    #[arg(long = "palette", value_name = "N=COLOR")]
    overrides: Vec<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// PNG files or folders containing PNGs (non-recursive)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Destination directory for output files
    #[arg(short, long)]
    output_dir: PathBuf,

    /// YAML profile with default settings; flags override it
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix for output file names
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix for output file names (before the extension)
    #[arg(long)]
    suffix: Option<String>,

    /// How to handle images larger than 256x192
    #[arg(long, value_enum)]
    oversize: Option<Oversize>,

    /// How to handle images smaller than 256x192
    #[arg(long, value_enum)]
    undersize: Option<Undersize>,

    /// Padding color (e.g. 0,0,0 or #000000)
    #[arg(long)]
    background: Option<String>,

    /// Strategy for limiting each 8-pixel run to two colors
    #[arg(long, value_enum, ignore_case = true)]
    eightdot: Option<EightDot>,

    /// Gamma curve applied before palette matching
    #[arg(long)]
    gamma: Option<f32>,

    /// Contrast factor applied before palette matching
    #[arg(long)]
    contrast: Option<f32>,

    /// Hue rotation in degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true)]
    hue_shift: Option<f32>,

    /// Posterize the source to this many colors first
    #[arg(long)]
    posterize_colors: Option<u32>,

    #[command(flatten)]
    palette: PaletteArgs,

    /// Write raw VRAM data without the 7-byte BSAVE header
    #[arg(long)]
    no_header: bool,

    /// Only use solid palette colors
    #[arg(long)]
    no_dither: bool,

    /// Match against dither patterns but write their nearest solid color
    #[arg(long)]
    skip_dither_application: bool,

    /// Also write a PNG preview next to each output
    #[arg(long)]
    preview: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    force: bool,
}

impl PaletteArgs {
    fn overrides(&self) -> Result<BTreeMap<u8, String>, CliError> {
        self.overrides.iter().map(|arg| parse_palette_arg(arg)).collect()
    }

    fn build(&self) -> Result<Palette, CliError> {
        let family = if self.msx2_palette {
            PaletteFamily::Msx2
        } else {
            PaletteFamily::Msx1
        };
        let mut overrides = BTreeMap::new();
        for (code, text) in self.overrides()? {
            overrides.insert(code, parse_color(&text)?);
        }
        Ok(Palette::build(family, &overrides)?)
    }
}

impl ConvertArgs {
    /// Flags as a profile, so they can be layered over a loaded one.
    fn as_profile(&self) -> Result<ConvertProfile, CliError> {
        Ok(ConvertProfile {
            format: self.format,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            oversize: self.oversize,
            undersize: self.undersize,
            background: self.background.clone(),
            eightdot: self.eightdot,
            gamma: self.gamma,
            contrast: self.contrast,
            hue_shift: self.hue_shift,
            posterize_colors: self.posterize_colors,
            msx2_palette: self.palette.msx2_palette.then_some(true),
            header: self.no_header.then_some(false),
            dither: self.no_dither.then_some(false),
            skip_dither_application: self.skip_dither_application.then_some(true),
            palette: self.palette.overrides()?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sc2conv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Convert(args) => run_convert_command(&args),
        Commands::Remap {
            input,
            output,
            palette,
            no_header,
            force,
        } => run_remap_command(&input, &output, &palette, !no_header, force),
        Commands::View {
            input,
            output,
            format,
            palette,
            force,
        } => run_view_command(&input, &output, format, &palette, force),
        Commands::Palette => {
            run_palette_command();
            Ok(())
        }
    }
}

/// Convert a batch of PNG files
fn run_convert_command(args: &ConvertArgs) -> anyhow::Result<()> {
    let profile = match &args.profile {
        Some(path) => ConvertProfile::load(path)?,
        None => ConvertProfile::default(),
    };
    let settings = profile.overlay(args.as_profile()?);
    let format = settings.format.unwrap_or_default();
    let converter = Sc2Converter::new(settings.to_options()?)?;

    let inputs = collect_inputs(&args.inputs[..])?;
    let jobs = plan_jobs(
        inputs,
        &args.output_dir,
        settings.prefix.as_deref().unwrap_or(""),
        settings.suffix.as_deref().unwrap_or(""),
        format.extension(),
        args.force,
    )?;
    if args.preview {
        let previews: Vec<PathBuf> = jobs.iter().map(|j| j.output.with_extension("png")).collect();
        check_conflicts(&previews, args.force)?;
    }
    tracing::info!(files = jobs.len(), ?format, "Converting");

    for job in &jobs {
        let image = load_rgb(&job.input)?;
        let convert_err = |source| CliError::Convert {
            path: job.input.clone(),
            source,
        };
        let data = match format {
            OutputFormat::Sc2 => converter.to_sc2(&image),
            OutputFormat::Sc4 => converter.to_sc4(&image),
        }
        .map_err(convert_err)?;
        write_bytes(&job.output, &data)?;
        println!("wrote {}", job.output.display());

        if args.preview {
            let grid = decode_sc2(&data).map_err(convert_err)?;
            let png = encode_indexed_png(&grid, converter.palette())?;
            let path = job.output.with_extension("png");
            write_bytes(&path, &png)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}

/// Remap an existing Screen 2 dump to Screen 4
fn run_remap_command(
    input: &Path,
    output: &Path,
    palette: &PaletteArgs,
    include_header: bool,
    force: bool,
) -> anyhow::Result<()> {
    check_conflicts(&[output.to_path_buf()], force)?;
    let palette = palette.build()?;
    let data = read_bytes(input)?;
    let sc4 = sc2_to_sc4(&data, &palette, include_header).map_err(|source| CliError::Convert {
        path: input.to_path_buf(),
        source,
    })?;
    write_bytes(output, &sc4)?;
    println!("wrote {}", output.display());
    Ok(())
}

/// Render a VRAM dump to an indexed PNG
fn run_view_command(
    input: &Path,
    output: &Path,
    format: Option<OutputFormat>,
    palette: &PaletteArgs,
    force: bool,
) -> anyhow::Result<()> {
    check_conflicts(&[output.to_path_buf()], force)?;
    let format = format.unwrap_or_else(|| guess_format(input));
    let data = read_bytes(input)?;
    tracing::debug!(bytes = data.len(), expected = VRAM_SIZE, ?format, "Read VRAM file");

    let convert_err = |source| CliError::Convert {
        path: input.to_path_buf(),
        source,
    };
    let (grid, palette) = match format {
        OutputFormat::Sc2 => (decode_sc2(&data).map_err(convert_err)?, palette.build()?),
        OutputFormat::Sc4 => decode_sc4(&data).map_err(convert_err)?,
    };
    write_bytes(output, &encode_indexed_png(&grid, &palette)?)?;
    println!("wrote {}", output.display());
    Ok(())
}

fn guess_format(path: &Path) -> OutputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("sc4") => OutputFormat::Sc4,
        _ => OutputFormat::Sc2,
    }
}

fn run_palette_command() {
    println!(
        "MSX1 palette: {}",
        Palette::base(PaletteFamily::Msx1).describe()
    );
    println!(
        "MSX2 palette: {}",
        Palette::base(PaletteFamily::Msx2).describe()
    );
}
