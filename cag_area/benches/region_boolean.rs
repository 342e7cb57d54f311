use cag_area::Region;
use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
mod test_shapes;
use test_shapes::*;

fn bench_combine(b: &mut Bencher, regions: &[Region<f64>]) {
    b.iter(|| combine(regions))
}

fn bench_contains_point(b: &mut Bencher, region: &Region<f64>) {
    b.iter(|| {
        let mut inside = 0;
        for i in 0..32 {
            for j in 0..32 {
                if region.contains_point(i as f64 * 40.0, j as f64 * 40.0) {
                    inside += 1;
                }
            }
        }
        inside
    })
}

fn region_boolean_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_boolean");
    let shape_counts = &[10, 50, 200];
    for &i in shape_counts {
        let regions = random_regions(i, 0);
        group.bench_with_input(BenchmarkId::new("combine", i), &regions, |b, regions| {
            bench_combine(b, regions)
        });
    }

    group.finish();
}

fn region_query_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_query");
    let shape_counts = &[10, 50, 200];
    for &i in shape_counts {
        let region = combine(&random_regions(i, 1));
        group.bench_with_input(BenchmarkId::new("contains_point", i), &region, |b, region| {
            bench_contains_point(b, region)
        });
    }

    group.finish();
}

criterion_group!(region_boolean, region_boolean_group, region_query_group);
criterion_main!(region_boolean);
