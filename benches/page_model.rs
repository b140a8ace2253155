// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::page::layout::PageLayout;
use iced_folio::page::{demo, parse, ImageList};
use std::hint::black_box;
use std::path::Path;

fn large_page_source(sections: usize, items: usize) -> String {
    let mut source = String::from("title = \"Bench\"\n");
    for section in 0..sections {
        source.push_str(&format!(
            "\n[[sections]]\nid = \"s{section}\"\nnav = \"Section {section}\"\nheading = \"Section {section}\"\n\
             body = [\"{}\"]\n",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(8)
        ));
        for item in 0..items {
            source.push_str(&format!(
                "\n[[sections.gallery]]\nplaceholder = \"Item {item}\"\n"
            ));
        }
    }
    source
}

fn page_model_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_model");

    let source = large_page_source(20, 12);
    group.bench_function("parse_240_placeholders", |b| {
        b.iter(|| {
            let _ = black_box(parse(black_box(&source), Path::new(".")));
        });
    });

    let page = demo::demo_page();
    group.bench_function("layout_demo_page", |b| {
        b.iter(|| black_box(PageLayout::compute(&page, black_box(1280.0))));
    });

    group.bench_function("flatten_demo_page", |b| {
        b.iter(|| black_box(ImageList::from_page(&page)));
    });

    group.finish();
}

criterion_group!(benches, page_model_benchmark);
criterion_main!(benches);
