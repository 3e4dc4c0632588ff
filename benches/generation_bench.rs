//! Generation performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketchc::*;

const DESCRIPTIONS: &[&str] = &[
    "a large blue rounded button with text 'Submit'",
    "centered h2 heading with text 'Welcome' and red background white text",
    "a password input with 2px dotted #ccc border and padding 4px 8px",
    "image src 'foo.png' with strong shadow",
    "a pill shaped green link href 'https://example.com' with text 'Home'",
];

fn bench_parse(c: &mut Criterion) {
    let parser = DescriptionParser::new();

    c.bench_function("parse_descriptions", |b| {
        b.iter(|| {
            for description in DESCRIPTIONS {
                black_box(parser.parse(black_box(description)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let records: Vec<PropertyRecord> = DESCRIPTIONS.iter().map(|d| parse(d)).collect();
    let light = Theme::light();

    c.bench_function("render_variables", |b| {
        b.iter(|| {
            for record in &records {
                black_box(render(black_box(record)));
            }
        })
    });

    c.bench_function("render_light", |b| {
        b.iter(|| {
            for record in &records {
                black_box(render_with_theme(black_box(record), &light));
            }
        })
    });
}

fn bench_full_generation(c: &mut Criterion) {
    c.bench_function("generate_fresh_parser", |b| {
        b.iter(|| generate(black_box(DESCRIPTIONS[0])).unwrap())
    });

    let parser = DescriptionParser::new();
    let options = GeneratorOptions::default();
    c.bench_function("generate_shared_parser", |b| {
        b.iter(|| {
            for description in DESCRIPTIONS {
                generate_with_parser(&parser, black_box(description), &options).unwrap();
            }
        })
    });
}

fn bench_preview_page(c: &mut Criterion) {
    let element = generate(DESCRIPTIONS[1]).unwrap();

    c.bench_function("preview_page", |b| {
        b.iter(|| {
            let page = PreviewPage::new(DESCRIPTIONS[1], element.clone(), Theme::variables());
            black_box(page.to_html())
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_render,
    bench_full_generation,
    bench_preview_page
);
criterion_main!(benches);
