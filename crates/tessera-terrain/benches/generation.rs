use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tessera_terrain::*;

fn bench_rng_draw(c: &mut Criterion) {
    let mut rng = SeededRng::from_str_seed("bench");
    c.bench_function("lcg_next_float", |bencher| {
        bencher.iter(|| black_box(rng.next_float()))
    });
}

fn bench_octave_synthesis(c: &mut Criterion) {
    let field = NoiseField::new(64, 64, &mut SeededRng::from_str_seed("bench"));
    let synth = OctaveSynthesizer::new(&field, OctaveParams::default());
    c.bench_function("octave_synthesize_64x64", |bencher| {
        bencher.iter(|| black_box(synth.synthesize()))
    });
}

fn bench_generate_world(c: &mut Criterion) {
    let generator = WorldGenerator::new(GeneratorConfig {
        width: 32,
        height: 32,
        seed: "bench".to_string(),
        ..Default::default()
    });
    c.bench_function("generate_32x32_interpolated", |bencher| {
        bencher.iter(|| black_box(generator.generate()))
    });
}

criterion_group!(
    benches,
    bench_rng_draw,
    bench_octave_synthesis,
    bench_generate_world
);
criterion_main!(benches);
