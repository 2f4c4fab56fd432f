// benches/render.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nba_report::db::{ResultSet, Value};
use nba_report::html;

fn synthetic_result_set(rows: usize) -> ResultSet {
    let columns = ["name", "team_name", "age", "number", "pos", "accuracy", "3pt"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows = (0..rows)
        .map(|i| {
            vec![
                Value::Text(format!("Player & Co <{}>", i)),
                Value::Text("Boston Celtics".to_string()),
                Value::Int(20 + (i as i64 % 20)),
                Value::Int(i as i64 % 99),
                Value::Text("SG".to_string()),
                Value::Text(format!("{}.{:02}%", 30 + i % 20, i % 100)),
                Value::Int(i as i64),
            ]
        })
        .collect();
    ResultSet { columns, rows }
}

fn bench_render(c: &mut Criterion) {
    let small = synthetic_result_set(30);
    let large = synthetic_result_set(5_000);

    c.bench_function("render_table_30", |b| {
        b.iter(|| black_box(html::render_table(black_box(&small))).len())
    });

    c.bench_function("render_table_5000", |b| {
        b.iter(|| black_box(html::render_table(black_box(&large))).len())
    });

    c.bench_function("escape_hostile", |b| {
        b.iter(|| black_box(html::escape(black_box("<td>\"fish\" & 'chips'</td>"))).len())
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
