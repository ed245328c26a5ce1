use std::hint::black_box;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ffg::config::FFGConfig;
use ffg::io;
use ffg::opt::budget::Budget;
use ffg::opt::multi_start::MultiStartOptimizer;
use ffg::opt::packer::FFGPacker;
use sheetpack::entities::SheetInstance;
use sheetpack::io::import;

criterion_main!(benches);
criterion_group!(benches, grid_step_bench, multi_start_bench);

const INSTANCE_PATH: &str = "../assets/mixed60.json";

const GRID_STEPS: [f64; 4] = [0.5, 1.0, 2.0, 5.0];

fn load_instance() -> SheetInstance {
    let ext_request = io::read_request(Path::new(INSTANCE_PATH)).unwrap();
    import(&ext_request).unwrap()
}

/// Benchmark a single greedy pass for different grid resolutions
fn grid_step_bench(c: &mut Criterion) {
    let instance = load_instance();
    let mut group = c.benchmark_group("grid_step_bench");
    for step in GRID_STEPS {
        //pin the effective step, regardless of the spacing of the instance
        let config = FFGConfig {
            grid_step: step,
            min_grid_step: step,
            ..FFGConfig::default()
        };
        let budget = Budget::unlimited();
        group.bench_with_input(BenchmarkId::from_parameter(step), &config, |b, config| {
            b.iter(|| black_box(FFGPacker::new(&instance, config, &budget).pack()))
        });
    }
    group.finish();
}

/// Benchmark the multi-start optimizer, sequential versus parallel trials
fn multi_start_bench(c: &mut Criterion) {
    let instance = load_instance();
    let mut group = c.benchmark_group("multi_start_bench");
    group.sample_size(10);
    for parallel in [false, true] {
        let config = FFGConfig {
            n_iterations: 16,
            parallel,
            ..FFGConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &config, |b, config| {
            b.iter(|| black_box(MultiStartOptimizer::new(&instance, *config, Budget::unlimited()).optimize()))
        });
    }
    group.finish();
}
