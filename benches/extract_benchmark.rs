use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use iphosts::filter::filter_hostnames;
use iphosts::utils::{extract_second_column, parse_document};

fn build_page(rows: usize) -> String {
    let mut page = String::from("<html><body><table><tr><th>IP</th><th>Hostname</th></tr>");
    for i in 0..rows {
        let host = if i % 3 == 0 {
            "not a hostname!".to_string()
        } else {
            format!("host-{}.example.com", i)
        };
        page.push_str(&format!(
            "<tr><td>10.0.{}.{}</td><td>{}</td></tr>",
            i / 256,
            i % 256,
            host
        ));
    }
    page.push_str("</table></body></html>");
    page
}

fn extract_benchmark(c: &mut Criterion) {
    let page = build_page(256);

    c.bench_function("extract_hostnames_256_rows", |b| {
        b.iter(|| {
            let document = parse_document(black_box(page.as_bytes()));
            let candidates = extract_second_column(&document).unwrap();
            filter_hostnames(candidates)
        })
    });
}

criterion_group!(benches, extract_benchmark);
criterion_main!(benches);
