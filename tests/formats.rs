use vpack::prelude::*;
use vpack::inspect::read_pixel;

#[test]
fn narrow_10_bit_codes_are_stable() {
    let spec = RangeSpec::NARROW_10;
    for code in (0..=u16::MAX).filter(|c| spec.bit_depth().holds(*c)) {
        assert_eq!(spec.quantize(spec.normalize(code)), code);
        assert_eq!(spec.rescale(code, &RangeSpec::NARROW_10), code);
    }
}

#[test]
fn matrix_round_trip_grid() {
    let steps: Vec<f64> = (0..=20).map(|i| f64::from(i) / 20.).collect();
    for matrix in [Matrix::Rec601, Matrix::Rec709, Matrix::Rec2020] {
        let m = matrix.coefficients();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let [y, cb, cr] = m.forward([r, g, b]);
                    assert!((-1e-12..=1. + 1e-12).contains(&y));
                    assert!(cb.abs() <= 0.5 + 1e-12 && cr.abs() <= 0.5 + 1e-12);

                    let back = m.inverse([y, cb, cr]);
                    assert!(back
                        .iter()
                        .zip([r, g, b])
                        .all(|(x, y)| (x - y).abs() < 1e-6));
                }
            }
        }
    }
}

#[test]
fn r12l_straddling_fields_through_codec() {
    let codec = PixelCodec::new(
        CodecSettings::new(PixelFormat::Rgb12)
            .input_range(SignalRange::Full)
            .output_range(SignalRange::Full),
    );

    // 12-bit full range codes in the top bits of 16-bit samples
    let codes: [u16; 8] = [0, 1, 2, 0x0FF, 0x100, 0x7FF, 0xF00, 0xFFF];
    let samples: Vec<u16> = (0..8)
        .flat_map(|i| [codes[i], codes[7 - i], codes[(i + 3) % 8]])
        .map(|c| c << 4 | c >> 8)
        .collect();

    let packed = codec.encode(&samples, 8, 1).unwrap();
    assert_eq!(packed.len(), 36);

    for x in 0..8 {
        assert_eq!(
            read_pixel(&packed, 8, 1, PixelFormat::Rgb12, x, 0).unwrap(),
            [codes[x as usize], codes[7 - x as usize], codes[(x as usize + 3) % 8]]
        );
    }

    let decoded: Vec<u16> = codec.reversed().decode(&packed, 8, 1).unwrap();
    assert_eq!(decoded, samples);
}

#[test]
fn r10l_and_r210_differ_in_byte_order_only() {
    let samples = [1.0_f32, 0.5, 0.];
    let le = PixelCodec::new(CodecSettings::new(PixelFormat::Rgb10))
        .encode(&samples, 1, 1)
        .unwrap();
    let be = PixelCodec::new(CodecSettings::new(PixelFormat::Rgb10Be))
        .encode(&samples, 1, 1)
        .unwrap();

    let le = u32::from_le_bytes([le[0], le[1], le[2], le[3]]);
    let be = u32::from_be_bytes([be[0], be[1], be[2], be[3]]);
    assert_eq!(le >> 2, be);
    assert_eq!(be >> 20, 940);
    assert_eq!(be >> 10 & 0x3FF, 502);
    assert_eq!(be & 0x3FF, 64);
}

#[test]
fn bgra_copies_full_range_bytes() {
    let codec = PixelCodec::new(
        CodecSettings::new(PixelFormat::Bgra8)
            .input_range(SignalRange::Full)
            .output_range(SignalRange::Full),
    );
    let samples: [u8; 6] = [255, 128, 0, 1, 2, 3];
    let packed = codec.encode(&samples, 2, 1).unwrap();
    assert_eq!(packed, [0, 128, 255, 255, 3, 2, 1, 255]);

    let decoded: Vec<u8> = codec.reversed().decode(&packed, 2, 1).unwrap();
    assert_eq!(decoded, samples);
    assert_eq!(
        read_pixel(&packed, 2, 1, PixelFormat::Bgra8, 1, 0).unwrap(),
        [1, 2, 3]
    );

    // Narrow range output scales to studio levels
    let narrow = PixelCodec::new(CodecSettings::new(PixelFormat::Bgra8));
    let packed = narrow.encode(&[255_u8, 0, 255], 1, 1).unwrap();
    assert_eq!(packed, [235, 16, 235, 255]);
}

#[test]
fn format_identifiers() {
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"v210")), Ok(PixelFormat::Yuv10));
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"2vuy")), Ok(PixelFormat::Yuv8));
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"R10l")), Ok(PixelFormat::Rgb10));
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"r210")), Ok(PixelFormat::Rgb10Be));
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"R12L")), Ok(PixelFormat::Rgb12));
    assert_eq!(PixelFormat::try_from(u32::from_be_bytes(*b"BGRA")), Ok(PixelFormat::Bgra8));
    assert!(PixelFormat::try_from(u32::from_be_bytes(*b"v410")).is_err());

    assert_eq!(Matrix::try_from(1), Ok(Matrix::Rec709));
    assert_eq!(SignalRange::try_from(0), Ok(SignalRange::Narrow));
}

#[test]
fn row_strides() {
    let hd = [
        (PixelFormat::Yuv8, 3840),
        (PixelFormat::Yuv10, 5120),
        (PixelFormat::Rgb10, 7680),
        (PixelFormat::Rgb10Be, 7680),
        (PixelFormat::Rgb12, 8640),
        (PixelFormat::Bgra8, 7680),
    ];
    for (format, stride) in hd {
        assert_eq!(vpack::row_bytes(format, 1920).unwrap(), stride);
        assert_eq!(vpack::frame_size(format, 1920, 1080).unwrap(), stride * 1080);
    }

    assert_eq!(vpack::row_bytes(PixelFormat::Yuv10, 1280).unwrap(), 3424);
    assert!(matches!(
        vpack::frame_size(PixelFormat::Rgb12, u32::MAX, u32::MAX),
        Err(Error::Math(_))
    ));
}

#[test]
fn test_patterns_encode() {
    let codec = PixelCodec::new(CodecSettings::new(PixelFormat::Yuv10));
    for pattern in ["gradient", "bars", "checkerboard", "smpte"] {
        let pattern: TestPattern = pattern.parse().unwrap();
        let frame = pattern.render(720, 486).unwrap();
        let packed = codec.encode(&frame, 720, 486).unwrap();
        assert_eq!(packed.len(), 1920 * 486);
    }

    // Top left of the color bars is 75% white
    let frame = TestPattern::ColorBars.render(720, 486).unwrap();
    let packed = codec.encode(&frame, 720, 486).unwrap();
    let [cb, y, cr] = read_pixel(&packed, 720, 486, PixelFormat::Yuv10, 0, 0).unwrap();
    assert_eq!([cb, y, cr], [512, 721, 512]);
}
