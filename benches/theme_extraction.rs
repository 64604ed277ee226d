use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use share_card::gradient::render_vertical_gradient;
use share_card::ThemeExtractor;

fn cover(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255]);
    }
    DynamicImage::ImageRgba8(img)
}

fn benchmark_theme_extraction(c: &mut Criterion) {
    let extractor = ThemeExtractor::new();
    let small = cover(300, 300);
    let large = cover(1080, 1920);

    c.bench_function("extract_300x300", |b| {
        b.iter(|| extractor.extract(black_box(&small)))
    });
    c.bench_function("extract_1080x1920", |b| {
        b.iter(|| extractor.extract(black_box(&large)))
    });

    let palette = extractor.extract(&small).unwrap();
    c.bench_function("gradient_1080x1920", |b| {
        b.iter(|| render_vertical_gradient(black_box(&palette), 1080, 1920))
    });
}

criterion_group!(benches, benchmark_theme_extraction);
criterion_main!(benches);
