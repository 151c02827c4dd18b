//! パフォーマンスベンチマーク
//!
//! メモリ上で生成したワークブックを使って、テキスト変換の速度を測定します。
//!
//! - 行数の多い単一シートの変換
//! - シート数の多いワークブック全体の変換

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use excel2txt::{ConverterBuilder, LoadOptions, Workbook};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::io::Cursor;

/// `rows`行 × 10列のシートを`sheets`枚持つワークブックを生成
fn generate_workbook(sheets: usize, rows: u32) -> Vec<u8> {
    let mut workbook = XlsxWorkbook::new();
    for sheet_idx in 0..sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(format!("Sheet{:03}", sheet_idx))
            .expect("valid sheet name");
        for row in 0..rows {
            for col in 0..10u16 {
                if col % 2 == 0 {
                    worksheet
                        .write_number(row, col, f64::from(row) * 0.5)
                        .expect("write number");
                } else {
                    worksheet
                        .write_string(row, col, format!("R{}C{}", row, col))
                        .expect("write string");
                }
            }
        }
    }
    workbook.save_to_buffer().expect("save workbook")
}

fn benchmark_large_sheet(c: &mut Criterion) {
    let data = generate_workbook(1, 10_000);
    let converter = ConverterBuilder::new().build();

    let mut group = c.benchmark_group("large_sheet");
    group.throughput(Throughput::Elements(10_000));
    group.sample_size(10);

    group.bench_function("write_sheet_10k_rows", |b| {
        b.iter(|| {
            let mut workbook =
                Workbook::from_reader(Cursor::new(data.clone()), LoadOptions::default()).unwrap();
            let mut output = Vec::new();
            converter
                .write_sheet(&mut workbook, "Sheet000", black_box(&mut output))
                .unwrap();
            black_box(output)
        });
    });

    group.finish();
}

fn benchmark_many_sheets(c: &mut Criterion) {
    let data = generate_workbook(50, 100);
    let converter = ConverterBuilder::new().build();

    let mut group = c.benchmark_group("many_sheets");
    group.sample_size(10);

    for read_only in [true, false] {
        let options = LoadOptions {
            read_only,
            values_only: true,
        };
        group.bench_function(format!("write_workbook_read_only_{}", read_only), |b| {
            b.iter(|| {
                let mut workbook =
                    Workbook::from_reader(Cursor::new(data.clone()), options).unwrap();
                let mut output = Vec::new();
                converter
                    .write_workbook(&mut workbook, black_box(&mut output))
                    .unwrap();
                black_box(output)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_large_sheet, benchmark_many_sheets);
criterion_main!(benches);
