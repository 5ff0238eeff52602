//! Add letter-spacing to a font
use clap::Parser;
use spacedfont::NumberFormat;
use spacedfont_cli::{make_spaced_font, Options, Ttx, DEFAULT_BASE_FONT_SIZE};
use std::path::PathBuf;

/// Add letter-spacing to a font.
///
/// Spacing is given as a CSS length. `--letter-spacing=0.1em` adds a tenth of
/// an em; `--letter-spacing=2px` adds 2px of space at a 16px font size, that is
/// 0.125em; `--letter-spacing=3px --base-font-size=12px` adds 0.25em.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// The amount of space to add
    #[clap(short, long, allow_hyphen_values = true)]
    letter_spacing: String,

    /// The base font size, used to convert absolute spacing such as px to
    /// ems. Spacing given in em or rem is not affected by it.
    #[clap(short, long, default_value = DEFAULT_BASE_FONT_SIZE)]
    base_font_size: String,

    /// The output font file
    #[clap(short, long)]
    output_file: Option<PathBuf>,

    /// Round rewritten metrics to whole font units
    #[clap(long)]
    round: bool,

    /// The ttx program to use (defaults to $SPACEDFONT_TTX, then ttx)
    #[clap(long)]
    ttx: Option<PathBuf>,

    /// Input font
    input: PathBuf,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 64 } else { 0 });
        }
    };

    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        },
    ));

    let compiler = match args.ttx {
        Some(program) => Ttx::new(program),
        None => Ttx::from_env(),
    };
    let options = Options {
        input_file: args.input,
        output_file: args.output_file,
        letter_spacing: args.letter_spacing,
        base_font_size: Some(args.base_font_size),
        number_format: if args.round {
            NumberFormat::Rounded
        } else {
            NumberFormat::Exact
        },
    };

    match make_spaced_font(&options, &compiler) {
        Ok(path) => println!("Font written to {}", path.display()),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(64);
        }
    }
}
