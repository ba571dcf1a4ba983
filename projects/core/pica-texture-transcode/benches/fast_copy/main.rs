use core::{alloc::Layout, time::Duration};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pica_texture_codec::PixelFormat;
use pica_texture_transcode::bench::{copy_dispatched, copy_portable};
use pica_texture_transcode::{decode_texture, PAddr, SurfaceParams};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

type CopyFn = unsafe fn(*const u8, *mut u8, usize);

fn kernel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bulk Copy");
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    let kernels: [(&str, CopyFn); 2] = [
        ("portable", copy_portable),
        ("dispatched", copy_dispatched),
    ];
    for size in [4096usize, 65536, 4 * 1024 * 1024] {
        let input = allocate_align_64(size);
        let mut output = allocate_align_64(size);
        group.throughput(criterion::Throughput::Bytes(size as u64));

        for (name, kernel) in kernels {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter(|| unsafe {
                    kernel(
                        black_box(input.as_ptr()),
                        black_box(output.as_mut_ptr()),
                        size,
                    )
                })
            });
        }
    }

    group.finish();
}

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Untiled Decode");
    let surface = SurfaceParams::new(PAddr(0x1800_0000), 1024, 1024, PixelFormat::Rgba8, false);
    let guest = allocate_align_64(surface.size());
    let mut host = allocate_align_64(surface.linear_size(true));
    group.throughput(criterion::Throughput::Bytes(surface.size() as u64));

    for convert in [false, true] {
        let name = if convert { "rgba8 converted" } else { "rgba8 copy" };
        group.bench_function(BenchmarkId::new(name, surface.size()), |b| {
            b.iter(|| {
                decode_texture(
                    &surface,
                    surface.addr,
                    surface.end(),
                    black_box(guest.as_slice()),
                    black_box(host.as_mut_slice()),
                    convert,
                )
            })
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
    targets = kernel_benchmark, decode_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = kernel_benchmark, decode_benchmark
}

criterion_main!(benches);
