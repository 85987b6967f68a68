use criterion::{Criterion, black_box, criterion_group, criterion_main};

use grants990::core::{ExtractorConfig, parse_amount};
use grants990::export::write_csv;
use grants990::extract::GrantExtractor;
use grants990::xml::Document;

fn build_filing(groups: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="utf-8"?><Return xmlns="http://www.irs.gov/efile"><ReturnData><IRS990ScheduleI><RecipientTable>"#,
    );
    for i in 0..groups {
        xml.push_str(&format!(
            "<GrantOrContributionPdDurYrGrp>\
               <RecipientBusinessName><BusinessNameLine1Txt>Recipient Organization {i}</BusinessNameLine1Txt></RecipientBusinessName>\
               <RecipientEIN>{:09}</RecipientEIN>\
               <USAddress><AddressLine1Txt>{i} Main St</AddressLine1Txt><CityNm>Springfield</CityNm></USAddress>\
               <Amt>${},{:03}.00</Amt>\
               <PurposeOfGrantTxt>General operating support</PurposeOfGrantTxt>\
             </GrantOrContributionPdDurYrGrp>",
            100_000_000 + i,
            1 + i % 50,
            i % 1000
        ));
    }
    xml.push_str("</RecipientTable></IRS990ScheduleI></ReturnData></Return>");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let small = build_filing(10);
    let large = build_filing(1000);

    c.bench_function("parse_10_groups", |b| {
        b.iter(|| Document::parse(black_box(&small)).unwrap())
    });
    c.bench_function("parse_1000_groups", |b| {
        b.iter(|| Document::parse(black_box(&large)).unwrap())
    });
}

fn bench_extract(c: &mut Criterion) {
    let xml = build_filing(1000);
    let doc = Document::parse(&xml).unwrap();
    let extractor = GrantExtractor::new(ExtractorConfig::default());

    c.bench_function("extract_1000_groups", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });

    let rows = extractor.extract(&doc).rows;
    c.bench_function("write_csv_1000_rows", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64 * 1024);
            write_csv(black_box(&rows), &mut buf).unwrap();
            buf
        })
    });
}

fn bench_amount(c: &mut Criterion) {
    let samples = ["$1,234,567.89", "(12,500)", "\u{a0}7\u{a0}500\u{a0}", "n/a"];
    c.bench_function("parse_amount_mixed", |b| {
        b.iter(|| {
            for s in samples {
                black_box(parse_amount(black_box(s)));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_extract, bench_amount);
criterion_main!(benches);
