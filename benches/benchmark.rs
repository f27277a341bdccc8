use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use textfix_domain::endings::{LineEndingStyle, normalize, scan};
use textfix_domain::indent::{ConversionRequest, Direction, convert};
use textfix_shared_kernel::TabWidth;

fn mixed_buffer() -> Vec<u8> {
    let mut buf = Vec::new();
    for i in 0..4000 {
        buf.extend_from_slice(b"some reasonably long line of text");
        buf.extend_from_slice(match i % 3 {
            0 => b"\n".as_slice(),
            1 => b"\r\n".as_slice(),
            _ => b"\r".as_slice(),
        });
    }
    buf
}

fn benchmark_endings(c: &mut Criterion) {
    let buf = mixed_buffer();

    c.bench_function("scan_mixed_endings", |b| {
        b.iter(|| black_box(scan(black_box(&buf))));
    });

    c.bench_function("normalize_to_lf", |b| {
        b.iter(|| black_box(normalize(black_box(&buf), LineEndingStyle::Lf)));
    });
}

fn benchmark_indent(c: &mut Criterion) {
    let text = "\t\t    let value = compute(input);\n".repeat(4000);
    let request =
        ConversionRequest::converting(Direction::TabsToSpaces, TabWidth::DEFAULT);

    c.bench_function("convert_tabs_to_spaces", |b| {
        b.iter(|| black_box(convert(black_box(&text), &request)));
    });
}

criterion_group!(benches, benchmark_endings, benchmark_indent);
criterion_main!(benches);
