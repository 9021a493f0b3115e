use std::str::FromStr;

use tracing_subscriber::prelude::*;
use vpack::prelude::*;

const USAGE: &str =
    "Usage: vpack-pattern <packed-file> <width> <height> <format> [pattern] [matrix] [output-range]";

fn arg<T: FromStr>(n: usize) -> Option<T> {
    std::env::args().nth(n).and_then(|x| x.parse().ok())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let (Some(output), Some(width), Some(height), Some(format)) = (
        arg::<String>(1),
        arg::<u32>(2),
        arg::<u32>(3),
        arg::<PixelFormat>(4),
    ) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let pattern: TestPattern = arg(5).unwrap_or_default();
    let settings = CodecSettings::new(format)
        .matrix(arg(6).unwrap_or_default())
        .output_range(arg(7).unwrap_or(SignalRange::Narrow));

    let frame = pattern.render(width, height).unwrap();
    let packed = PixelCodec::new(settings).encode(&frame, width, height).unwrap();

    std::fs::write(&output, &packed).unwrap();
    tracing::info!(?pattern, %format, bytes = packed.len(), "Wrote {output}");
}
