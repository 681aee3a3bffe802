use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexkit::{timed, GridConfig, GridRenderer, HexHitResult, Point2};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for rendering hex grids and resolving clicks against them, via the
/// hexkit engine.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexkit")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. If omitted, the default config is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, output files will be saved to this directory. The exact
    /// files that appear in the directory are defined by the output formats.
    /// See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the grid in. Supported formats:
    ///
    /// cfg - The full config object used for the grid, in TOML format
    ///
    /// json - Render data (cells, vertices, and edges) in JSON format
    ///
    /// svg - 2D rendering of the grid
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Pixel position(s) to hit test against the grid, formatted as `x,y`.
    /// One JSON result is printed to stdout per position, in order.
    #[structopt(long = "hit")]
    hits: Vec<PixelArg>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid's full config in a human-readable file
    Cfg,
    /// Export the render data snapshot as JSON
    Json,
    /// Render the grid as a 2D SVG
    Svg,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

/// A pixel position passed on the command line, as `x,y`
#[derive(Copy, Clone, Debug, PartialEq)]
struct PixelArg(Point2);

impl FromStr for PixelArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected position as x,y, got {:?}", s))?;
        let x = x
            .trim()
            .parse()
            .with_context(|| format!("invalid x coordinate {:?}", x))?;
        let y = y
            .trim()
            .parse()
            .with_context(|| format!("invalid y coordinate {:?}", y))?;
        Ok(Self(Point2::new(x, y)))
    }
}

/// One line of hit test output
#[derive(Debug, Serialize)]
struct HitOutput {
    point: Point2,
    #[serde(flatten)]
    result: HexHitResult,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    let config: GridConfig =
        settings.try_into().context("error reading config")?;
    config.validated()
}

/// Generate an output form of the grid in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    config: &GridConfig,
    renderer: &GridRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        config: &GridConfig,
        renderer: &GridRenderer,
    ) -> anyhow::Result<Vec<u8>> {
        let grid = config.grid::<()>();
        let bytes = match output_format {
            OutputFormat::Cfg => {
                // Serialize just the config via toml
                toml::to_string_pretty(config)
                    .context("error serializing config")?
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize the render data snapshot via JSON
                renderer.render_data(&grid).to_json()?.into_bytes()
            }
            OutputFormat::Svg => {
                // Render the grid in 2D
                renderer.render_as_svg(&grid).into_bytes()
            }
        };
        Ok(bytes)
    }

    let output_file_path = output_dir
        .join("grid")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, config, renderer)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded config from {:?}", config_path);
            config
        }
        None => GridConfig::default().validated()?,
    };

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = &opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(output_dir)?;

        let renderer = config.renderer()?;
        for output_format in &opt.output_formats {
            gen_output(output_dir, *output_format, &config, &renderer)?;
        }
    } else if !opt.output_formats.is_empty() {
        bail!("output formats were given, but no output dir (--output)")
    }

    if !opt.hits.is_empty() {
        let tester = config.hit_tester();
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        for PixelArg(point) in &opt.hits {
            let result = tester.hit_test_in_grid(*point, config.radius.into());
            let output = HitOutput {
                point: *point,
                result,
            };
            serde_json::to_writer(&mut stdout, &output)
                .context("error serializing hit result")?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
