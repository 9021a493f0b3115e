use std::str::FromStr;

use tracing_subscriber::prelude::*;
use vpack::prelude::*;

const USAGE: &str = "Usage: vpack-convert <rgb-file> <packed-file> <width> <height> <format> \
                     [u8|u16|f32] [matrix] [input-range] [output-range]";

fn arg<T: FromStr>(n: usize) -> Option<T> {
    std::env::args().nth(n).and_then(|x| x.parse().ok())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let (Some(input), Some(output), Some(width), Some(height), Some(format)) = (
        arg::<String>(1),
        arg::<String>(2),
        arg::<u32>(3),
        arg::<u32>(4),
        arg::<PixelFormat>(5),
    ) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let sample_type = arg(6).unwrap_or(SampleType::F32);
    let settings = CodecSettings::new(format)
        .matrix(arg(7).unwrap_or_default())
        .input_range(arg(8).unwrap_or(SignalRange::Full))
        .output_range(arg(9).unwrap_or(SignalRange::Narrow));
    let codec = PixelCodec::new(settings);

    let data = std::fs::read(&input).unwrap();
    let packed = match sample_type {
        SampleType::U8 => codec.encode(&data, width, height),
        SampleType::U16 => {
            let samples: Vec<u16> = data
                .chunks_exact(2)
                .map(|x| u16::from_le_bytes([x[0], x[1]]))
                .collect();
            codec.encode(&samples, width, height)
        }
        SampleType::F32 => {
            let samples: Vec<f32> = data
                .chunks_exact(4)
                .map(|x| f32::from_le_bytes([x[0], x[1], x[2], x[3]]))
                .collect();
            codec.encode(&samples, width, height)
        }
    }
    .unwrap();

    std::fs::write(&output, &packed).unwrap();
    tracing::info!(%format, bytes = packed.len(), "Wrote {output}");
}
