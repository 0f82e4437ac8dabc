use clap::Parser;
use log::debug;
use mgrender::convert;
use mgrender::decode::{X_SIZE, Y_SIZE};
use mgrender::palette;
use mgrender::raster::Raster;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, WindowCanvas};
use sdl2::EventPump;
use std::path::PathBuf;

const VERSION: &str = env!("MGRENDER_VERSION");

/// Show a VIC-20 MG picture file in a window.
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Args {
    /// The MG file to show
    input: PathBuf,

    /// Window pixels per picture pixel (1 to 16)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,

    /// Make pixels twice as wide as they are high, like on a VIC-20 screen
    #[arg(long)]
    wide: bool,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let viewer = Viewer::new(&args)?;
    viewer.run()
}

struct Viewer {
    title: String,
    raster: Raster,
    window_size: (u32, u32),
}

impl Viewer {
    pub fn new(args: &Args) -> Result<Viewer, String> {
        let mgfile = convert::load(&args.input).map_err(|e| e.to_string())?;
        let controls = mgfile.controls();
        let horizontal_scale = if args.wide { 2 * args.scale } else { args.scale };
        Ok(Viewer {
            title: format!(
                "{} ({} background) - mgrender {}",
                args.input.display(),
                palette::NAMES[usize::from(controls.background_aux >> 4)],
                VERSION
            ),
            raster: mgfile.render(),
            window_size: (
                X_SIZE as u32 * horizontal_scale,
                Y_SIZE as u32 * args.scale,
            ),
        })
    }

    pub fn run(self) -> Result<(), String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        let window = video
            .window(&self.title, self.window_size.0, self.window_size.1)
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        let mut event_pump = sdl.event_pump()?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, X_SIZE as u32, Y_SIZE as u32)
            .map_err(|e| e.to_string())?;

        // The picture never changes, one upload is enough.
        let raster = &self.raster;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for y in 0..Y_SIZE {
                raster.line_to_rgb24(y, &mut buffer[y * pitch..y * pitch + X_SIZE * 3]);
            }
        })?;
        debug!("uploaded {}x{} picture", X_SIZE, Y_SIZE);

        event_loop(&mut event_pump, &mut canvas, &texture)
    }
}

fn event_loop(
    event_pump: &mut EventPump,
    canvas: &mut WindowCanvas,
    texture: &Texture,
) -> Result<(), String> {
    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(()),
                _ => (),
            }
        }
        canvas.clear();
        canvas.copy(texture, None, None)?;
        canvas.present();
    }
}
