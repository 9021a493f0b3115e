use std::str::FromStr;

use tracing_subscriber::prelude::*;
use vpack::prelude::*;

const USAGE: &str = "Usage: vpack-inspect <packed-file> <width> <height> <format> [x] [y]";

fn arg<T: FromStr>(n: usize) -> Option<T> {
    std::env::args().nth(n).and_then(|x| x.parse().ok())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let (Some(path), Some(width), Some(height), Some(format)) = (
        arg::<String>(1),
        arg::<u32>(2),
        arg::<u32>(3),
        arg::<PixelFormat>(4),
    ) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let x = arg(5).unwrap_or(width / 2);
    let y = arg(6).unwrap_or(height / 2);

    let data = std::fs::read(path).unwrap();
    let expected = vpack::frame_size(format, width, height).unwrap();

    println!("Format: {format} ({:#010x})", format.fourcc());
    println!("Frame: {width}x{height}, {expected} bytes, file {} bytes", data.len());
    println!("Row stride: {} bytes", vpack::row_bytes(format, width).unwrap());

    let [a, b, c] = vpack::inspect::read_pixel(&data, width, height, format, x, y).unwrap();
    if format.is_ycbcr() {
        println!("Pixel {x}x{y}: Y {b}, Cb {a}, Cr {c}");
    } else {
        println!("Pixel {x}x{y}: R {a}, G {b}, B {c}");
    }
}
