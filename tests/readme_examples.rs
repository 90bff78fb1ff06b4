//! Validates the code examples from README.md compile and behave correctly.

use chanswiz::{ChannelFormat, ConvertError, ConvertOptions, ExecutionMode, FillMode};

#[test]
fn readme_usage() -> Result<(), ConvertError> {
    use chanswiz::convert;

    let rgb = vec![255u8, 0, 128];
    let bgra = convert(&rgb, ChannelFormat::Rgb, ChannelFormat::Bgra, &ConvertOptions::new())?;
    assert_eq!(bgra, [128, 0, 255, 255]);

    let opts = ConvertOptions::new().with_fill(FillMode::Min);
    let rgba = convert(&[7u16], ChannelFormat::R, ChannelFormat::Rgba, &opts)?;
    assert_eq!(rgba, [7, 0, 0, 0]);
    Ok(())
}

#[test]
fn readme_kernels() -> Result<(), ConvertError> {
    use chanswiz::convert;

    let opts = ConvertOptions::new().with_mode(ExecutionMode::Scalar);
    let bgr = convert(&[1u8, 2, 3, 4], ChannelFormat::Rgba, ChannelFormat::Bgr, &opts)?;
    assert_eq!(bgr, [3, 2, 1]);

    let opts = ConvertOptions::new().with_mode(ExecutionMode::Vectorized);
    let bgr = convert(&[1u8, 2, 3, 4], ChannelFormat::Rgba, ChannelFormat::Bgr, &opts)?;
    assert_eq!(bgr, [3, 2, 1]);
    Ok(())
}

#[test]
fn readme_convert_into() -> Result<(), ConvertError> {
    use chanswiz::convert_into;

    let src = [0.5f32, 0.25];
    let mut dst = [9.0f32; 5];
    convert_into(&src, ChannelFormat::Rg, &mut dst, ChannelFormat::Bgra, &ConvertOptions::new())?;
    assert_eq!(dst, [1.0, 0.25, 0.5, 1.0, 9.0]);
    Ok(())
}

#[test]
fn readme_pixel_buffer() -> Result<(), ConvertError> {
    use chanswiz::PixelBuffer;

    let img = PixelBuffer::new(vec![10u8, 20, 30, 40, 50, 60], 2, 1, ChannelFormat::Rgb)?;
    let bgra = img.convert(ChannelFormat::Bgra, &ConvertOptions::new())?;
    assert_eq!(bgra.width(), 2);
    assert_eq!(bgra.pixel(1, 0), Some(&[60u8, 50, 40, 255][..]));
    Ok(())
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() -> Result<(), ConvertError> {
    use chanswiz::typed;
    use rgb::{Bgra, Rgb};

    let pixels = vec![Rgb::new(255u8, 0, 128); 100];
    let bgra: Vec<Bgra<u8>> = typed::convert_pixels(&pixels, &ConvertOptions::new())?;
    assert_eq!(bgra[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
    Ok(())
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() -> Result<(), ConvertError> {
    use ::imgref::ImgVec;
    use chanswiz::img;
    use rgb::{Bgra, Rgba};

    let rgba_img = ImgVec::new(vec![Rgba::new(255, 0, 128, 200); 640 * 480], 640, 480);
    let bgra_img: ImgVec<Bgra<u8>> = img::convert_image(rgba_img.as_ref(), &ConvertOptions::new())?;
    assert_eq!(bgra_img.width(), 640);
    assert_eq!(bgra_img.height(), 480);
    assert_eq!(bgra_img.buf()[0], Bgra { b: 128, g: 0, r: 255, a: 200 });
    Ok(())
}

#[test]
fn readme_errors() {
    let err = chanswiz::convert(
        &[1u8, 2, 3, 4],
        ChannelFormat::Rgb,
        ChannelFormat::Rgba,
        &ConvertOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err, ConvertError::NotPixelAligned { len: 4, channels: 3 });
}
