use criterion::{Criterion, criterion_group, criterion_main};
use css_color::Color;
use std::hint::black_box;

const SAMPLES: [&str; 6] = [
    "rgb(123, 222, 24)",
    "rgba(0, 0, 0, 0)",
    "hsl(210deg, 50%, 40%)",
    "#1e90ff",
    "cornflowerblue",
    "transparent",
];

fn bench_color_new(criterion: &mut Criterion) {
    criterion.bench_function("color_new_mixed_formats", |bencher| {
        bencher.iter(|| {
            for raw in SAMPLES {
                let color = Color::new(black_box(raw));
                black_box(color.map(|color| color.channels()).ok());
            }
        });
    });
}

criterion_group!(color_benches, bench_color_new);
criterion_main!(color_benches);
