use clap::Parser;
use mgrender::convert;
use mgrender::ppm::PpmFormat;
use std::path::PathBuf;
use std::process;

/// Render a VIC-20 MG picture file to a PPM image.
#[derive(Parser, Debug)]
#[command(version = env!("MGRENDER_VERSION"), about, long_about = None)]
struct Args {
    /// The MG file to read
    input: PathBuf,

    /// Where to write the PPM image
    output: PathBuf,

    /// Write a plain-text (P3) PPM instead of a binary (P6) one
    #[arg(long)]
    plain: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let format = if args.plain {
        PpmFormat::Plain
    } else {
        PpmFormat::Raw
    };

    if let Err(e) = convert::convert(&args.input, &args.output, format) {
        eprintln!("mgrender: Error: {}", e);
        process::exit(e.exit_code());
    }
}
