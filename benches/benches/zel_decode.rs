//! Benchmark suite for ZEL frame decoding
//!
//! Measures whole-frame and single-zone decode throughput over synthetic
//! files, with raw and LZ4-compressed zone chunks.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use zel_benches::{generate_test_zel_data, sizes};
use zel_types::{Compression, ZelDecoder};

/// Benchmark whole-frame index decoding across geometries
fn bench_decode_index8(c: &mut Criterion) {
	let mut group = c.benchmark_group("zel_decode_index8");

	let cases = [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("qvga", sizes::QVGA),
		("tft", sizes::TFT),
	];

	for (name, (width, height, zone_width, zone_height)) in cases {
		for compression in [Compression::None, Compression::Lz4] {
			let data = generate_test_zel_data(width, height, zone_width, zone_height, compression);
			let pixels = u64::from(width) * u64::from(height);
			group.throughput(Throughput::Bytes(pixels));

			let label = format!("{name}/{compression}");
			group.bench_with_input(BenchmarkId::new("decode", label), &data, |b, data| {
				let mut zel = ZelDecoder::from_bytes(data).unwrap();
				let mut dst = vec![0u8; pixels as usize];
				b.iter(|| {
					zel.decode_frame_index8(0, black_box(&mut dst), width as usize).unwrap();
				});
			});
		}
	}

	group.finish();
}

/// Benchmark RGB565 expansion, which adds the per-pixel palette lookup
fn bench_decode_rgb565(c: &mut Criterion) {
	let mut group = c.benchmark_group("zel_decode_rgb565");

	let (width, height, zone_width, zone_height) = sizes::QVGA;
	for compression in [Compression::None, Compression::Lz4] {
		let data = generate_test_zel_data(width, height, zone_width, zone_height, compression);
		let pixels = u64::from(width) * u64::from(height);
		group.throughput(Throughput::Elements(pixels));

		group.bench_with_input(
			BenchmarkId::new("decode", format!("qvga/{compression}")),
			&data,
			|b, data| {
				let mut zel = ZelDecoder::from_bytes(data).unwrap();
				let mut dst = vec![0u16; pixels as usize];
				b.iter(|| {
					zel.decode_frame_rgb565(0, black_box(&mut dst), width as usize).unwrap();
				});
			},
		);
	}

	group.finish();
}

/// Benchmark single-zone random access, the display-refresh hot path
fn bench_decode_zone(c: &mut Criterion) {
	let mut group = c.benchmark_group("zel_decode_zone");

	let (width, height, zone_width, zone_height) = sizes::QVGA;
	let data = generate_test_zel_data(width, height, zone_width, zone_height, Compression::Lz4);
	let mut zel = ZelDecoder::from_bytes(&data).unwrap();
	let zone_pixels = usize::from(zone_width) * usize::from(zone_height);
	let last_zone = zel.zone_count() - 1;

	let mut dst = vec![0u8; zone_pixels];
	group.bench_function("first_zone", |b| {
		b.iter(|| {
			zel.decode_frame_index8_zone(0, 0, black_box(&mut dst)).unwrap();
		});
	});
	// The chunk stream has no offset table, so the last zone pays a full walk
	group.bench_function("last_zone", |b| {
		b.iter(|| {
			zel.decode_frame_index8_zone(0, last_zone, black_box(&mut dst)).unwrap();
		});
	});

	group.finish();
}

/// Benchmark header parsing and open separately
fn bench_open(c: &mut Criterion) {
	let (width, height, zone_width, zone_height) = sizes::SMALL;
	let data = generate_test_zel_data(width, height, zone_width, zone_height, Compression::None);

	c.bench_function("zel_open_memory", |b| {
		b.iter(|| {
			let zel = ZelDecoder::from_bytes(black_box(&data)).unwrap();
			black_box(zel.frame_count())
		});
	});
}

criterion_group!(benches, bench_decode_index8, bench_decode_rgb565, bench_decode_zone, bench_open);
criterion_main!(benches);
