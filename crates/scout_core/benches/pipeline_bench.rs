use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scout_core::{
    apply_filters, classify_all, parse_records, rank, FilterSet, Position, Predicate, RankMode,
};

const TEAMS: [&str; 6] = ["ars", "yars", "che", "yche", "eve", "liv"];
const NATS: [&str; 4] = ["eng", "fra", "esp", "bra"];

/// Synthetic export with a deterministic spread of positions and ages.
fn synthetic_export(rows: usize) -> String {
    let mut text = String::with_capacity(rows * 64);
    for i in 0..rows {
        let primary = [(i * 7) % 21, (i * 11) % 21, (i * 13) % 21, (i * 17) % 21];
        text.push_str(&format!(
            "{} P_{:05} {} {} {} {} {} {} {} {} {} {} {}\n",
            TEAMS[i % TEAMS.len()],
            i,
            16 + (i % 20),
            NATS[i % NATS.len()],
            primary[0],
            primary[1],
            primary[2],
            primary[3],
            30 + (i % 20),
            (i * 37) % 2000,
            (i * 41) % 2000,
            (i * 43) % 2000,
            (i * 47) % 2000,
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");
    for rows in [500, 5000] {
        let text = synthetic_export(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| parse_records(black_box(text)))
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let (records, _) = parse_records(&synthetic_export(5000));
    c.bench_function("classify_all_5000", |b| {
        b.iter(|| classify_all(black_box(&records)))
    });
}

fn bench_filter_and_rank(c: &mut Criterion) {
    let (records, _) = parse_records(&synthetic_export(5000));
    let players = classify_all(&records).players;

    let by_position = FilterSet::new()
        .with(Predicate::Position(Position::MF))
        .with(Predicate::age_range(18, 30));
    let by_squad = FilterSet::new().with(Predicate::teams(["ars", "yars"]));

    let mut group = c.benchmark_group("filter_rank");
    group.bench_function("position_mf", |b| {
        b.iter(|| {
            let matched = apply_filters(black_box(&players), &by_position);
            rank(&matched, RankMode::Position(Position::MF))
        })
    });
    group.bench_function("squad_ars", |b| {
        b.iter(|| {
            let matched = apply_filters(black_box(&players), &by_squad);
            rank(&matched, RankMode::Squad)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_classify, bench_filter_and_rank);
criterion_main!(benches);
