use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use invoview::core::normalize;
use invoview::report::render;

fn rich_invoice(lines: usize) -> Value {
    let lines: Vec<Value> = (1..=lines)
        .map(|i| {
            json!({
                "part_number": format!("PN-{i:04}"),
                "description": format!("Line item {i}"),
                "quantity": i,
                "unit_price": 10.5,
                "total_price": 10.5 * i as f64,
                "tax_class_id": 21,
                "total_with_vat": 12.7 * i as f64,
            })
        })
        .collect();

    json!({
        "type": "invoice",
        "internal_invoice_number": "2024-0042",
        "issue_date": "2024-06-15",
        "due_date": "2024-07-15",
        "own_company_info": {
            "company_name": "Deymed s.r.o.",
            "identification_number": "12345678",
            "tax_number": "CZ12345678",
            "address": {
                "street": "Hlavní 1",
                "postalcode": "54701",
                "city": "Náchod",
                "country": "Czechia",
            },
        },
        "banking_info": {
            "account_number": "115-1234567890",
            "bank_code": "0100",
            "iban": "CZ6501000001151234567890",
        },
        "amount": 1234.5,
        "currency_id": "CZK",
        "amount_wo_rounding": 1234.4,
        "amount_rounding": 0.1,
        "lines": lines,
        "time": 412.7,
    })
}

fn bench_normalize(c: &mut Criterion) {
    let raw = rich_invoice(10);
    c.bench_function("normalize_10_lines", |b| {
        b.iter(|| normalize(black_box(&raw)))
    });

    let raw = rich_invoice(100);
    c.bench_function("normalize_100_lines", |b| {
        b.iter(|| normalize(black_box(&raw)))
    });
}

fn bench_render(c: &mut Criterion) {
    let raw = rich_invoice(10);
    let invoice = normalize(&raw);
    c.bench_function("render_10_lines", |b| {
        b.iter(|| render(black_box(&invoice), black_box(&raw), None))
    });
}

criterion_group!(benches, bench_normalize, bench_render);
criterion_main!(benches);
