use core::{alloc::Layout, time::Duration};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pica_texture_codec::bench::{linear, morton};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// 1024x1024 texture, a common size for game assets.
const EDGE: u32 = 1024;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn filled(num_bytes: usize) -> RawAlloc {
    let mut data = allocate_align_64(num_bytes);
    for (index, byte) in data.as_mut_slice().iter_mut().enumerate() {
        *byte = (index as u8).wrapping_mul(31);
    }
    data
}

fn morton_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morton");
    let pixels = (EDGE * EDGE) as usize;
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    let linear_rgba8 = filled(pixels * 4);
    let mut tiled_rgba8 = allocate_align_64(pixels * 4);
    group.throughput(criterion::Throughput::Bytes((pixels * 4) as u64));
    group.bench_function(BenchmarkId::new("swizzle rgba8", EDGE), |b| {
        b.iter(|| {
            morton::swizzle_rgba8(
                EDGE,
                EDGE,
                0,
                (pixels * 4) as u32,
                black_box(linear_rgba8.as_slice()),
                black_box(tiled_rgba8.as_mut_slice()),
            )
        })
    });

    let mut linear_out = allocate_align_64(pixels * 4);
    group.bench_function(BenchmarkId::new("unswizzle rgba8", EDGE), |b| {
        b.iter(|| {
            morton::unswizzle_rgba8(
                EDGE,
                EDGE,
                0,
                (pixels * 4) as u32,
                black_box(tiled_rgba8.as_slice()),
                black_box(linear_out.as_mut_slice()),
            )
        })
    });

    let tiled_rgb565 = filled(pixels * 2);
    group.bench_function(BenchmarkId::new("unswizzle rgb565 converted", EDGE), |b| {
        b.iter(|| {
            morton::unswizzle_rgb565_converted(
                EDGE,
                EDGE,
                0,
                (pixels * 2) as u32,
                black_box(tiled_rgb565.as_slice()),
                black_box(linear_out.as_mut_slice()),
            )
        })
    });

    let tiled_etc1 = filled(pixels / 2);
    group.bench_function(BenchmarkId::new("unswizzle etc1", EDGE), |b| {
        b.iter(|| {
            morton::unswizzle_etc1(
                EDGE,
                EDGE,
                0,
                (pixels / 2) as u32,
                black_box(tiled_etc1.as_slice()),
                black_box(linear_out.as_mut_slice()),
            )
        })
    });

    group.finish();
}

fn linear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Linear");
    let size = (EDGE * EDGE * 4) as usize;
    let input = filled(size);
    let mut output = allocate_align_64(size);
    group.throughput(criterion::Throughput::Bytes(size as u64));

    type Kernel = fn(&[u8], &mut [u8]);
    let kernels: [(&str, Kernel); 5] = [
        ("copy", linear::copy_bytes),
        ("rgba8 per pixel", linear::rgba8_decode_per_pixel),
        ("rgba8 multiversion", linear::rgba8_decode_multiversion),
        ("d24s8 per pixel", linear::d24s8_decode_per_pixel),
        ("d24s8 multiversion", linear::d24s8_decode_multiversion),
    ];
    for (name, kernel) in kernels {
        group.bench_function(BenchmarkId::new(name, size), |b| {
            b.iter(|| kernel(black_box(input.as_slice()), black_box(output.as_mut_slice())))
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = morton_benchmark, linear_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = morton_benchmark, linear_benchmark
}

criterion_main!(benches);
