use criterion::{criterion_group, criterion_main, Criterion};
use mujigae_color::{canonicalize, format, Color, Notation};
use std::hint::black_box;

const INPUTS: [&str; 6] = [
    "#3b82f6",
    "rgb(59, 130, 246)",
    "hsl(217.22, 91.22%, 59.8%)",
    "oklch(0.6231 0.1880 259.8145)",
    "oklab(0.6231 -0.0332 -0.1851)",
    "rebeccapurple",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = black_box(input).parse::<Color>();
            }
        })
    });

    let blue = Color::from_24bit(0x3b, 0x82, 0xf6);
    for notation in Notation::ALL {
        group.bench_function(format!("format-{}", notation), |b| {
            b.iter(|| format(black_box(notation), black_box(&blue)))
        });
    }

    group.bench_function("canonicalize", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = canonicalize(black_box(input));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
