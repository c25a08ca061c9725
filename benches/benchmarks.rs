//! Performance benchmarks for crumbs

use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use crumbs::test_utils::TestTree;
use crumbs::{
    OutputConfig, PlainFormatter, ScanConfig, ScanOutput, ScanSummary, SmallFile,
    SmallFileWalker, parse_size,
};
use termcolor::NoColor;

/// Discards every match so only the walk and reads are measured.
struct Sink;

impl ScanOutput for Sink {
    fn output_file(&mut self, file: &SmallFile) -> io::Result<()> {
        black_box(file);
        Ok(())
    }

    fn finish(&mut self, _summary: &ScanSummary) -> io::Result<()> {
        Ok(())
    }
}

fn create_tree(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        let path = format!("dir{}/sub{}/file{}.txt", i % 10, i % 3, i);
        // Mix of files below and above the default threshold
        tree.add_sized_file(&path, (i * 37) % 300);
    }
    tree
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for count in [100, 1000] {
        let tree = create_tree(count);
        let walker = SmallFileWalker::new(ScanConfig::default()).unwrap();

        group.bench_function(format!("{}_files", count), |b| {
            b.iter(|| walker.walk_streaming(black_box(tree.path()), &mut Sink).unwrap())
        });
    }

    group.finish();
}

fn bench_plain_output(c: &mut Criterion) {
    let tree = create_tree(500);
    let walker = SmallFileWalker::new(ScanConfig::default()).unwrap();
    let config = OutputConfig {
        use_color: false,
        summary: true,
    };

    c.bench_function("plain_output_500_files", |b| {
        b.iter(|| {
            let mut formatter = PlainFormatter::with_writer(config.clone(), NoColor::new(Vec::new()));
            walker.walk_streaming(tree.path(), &mut formatter).unwrap();
            black_box(formatter.into_inner());
        })
    });
}

fn bench_parse_size(c: &mut Criterion) {
    c.bench_function("parse_size", |b| {
        b.iter(|| {
            for s in ["150", "4K", "12MB", "1g"] {
                black_box(parse_size(black_box(s)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_walk, bench_plain_output, bench_parse_size);
criterion_main!(benches);
