use criterion::{criterion_group, criterion_main, Criterion};
use gazetteer_core::{predict, Gazetteer, Locale, SourceRow};
use std::hint::black_box;

const SYLLABLES: [(&str, &str); 12] = [
    ("an", "安"),
    ("bei", "北"),
    ("chang", "长"),
    ("da", "大"),
    ("fu", "阜"),
    ("he", "河"),
    ("jiang", "江"),
    ("lin", "林"),
    ("nan", "南"),
    ("shan", "山"),
    ("xi", "西"),
    ("zhou", "州"),
];

fn capitalize(s: &str) -> String {
    let mut out = s.to_owned();
    out[..1].make_ascii_uppercase();
    out
}

/// ~30k cities over 144 regions, names built from syllable triples so
/// that short prefixes match thousands of entries.
fn synthetic_gazetteer() -> Gazetteer {
    let n = SYLLABLES.len();
    let mut rows = Vec::with_capacity(n * n * n * 18);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                for copy in 0..18 {
                    let (a, ca) = SYLLABLES[i];
                    let (b, cb) = SYLLABLES[j];
                    let (c, cc) = SYLLABLES[k];
                    let foreign = format!("{}{b}{c} {copy}", capitalize(a));
                    let local = format!("{ca}{cb}{cc}{copy}");
                    let region_id = i * n + j;
                    let (country_zh, country_en) = if copy % 3 == 0 {
                        ("中国", "China")
                    } else {
                        ("其他", "Elsewhere")
                    };
                    rows.push(SourceRow::new([
                        &local,
                        &foreign,
                        &format!("区{region_id}"),
                        &format!("Region {region_id}"),
                        country_zh,
                        country_en,
                    ]));
                }
            }
        }
    }
    Gazetteer::from_rows(rows)
}

fn bench_predict(c: &mut Criterion) {
    let db = synthetic_gazetteer();

    c.bench_function("predict_en_one_char", |b| {
        b.iter(|| predict(black_box("s"), &db, Locale::English, 5))
    });
    c.bench_function("predict_en_word", |b| {
        b.iter(|| predict(black_box("Changhe"), &db, Locale::English, 5))
    });
    c.bench_function("predict_zh_one_char", |b| {
        b.iter(|| predict(black_box("北"), &db, Locale::Chinese, 5))
    });
    c.bench_function("predict_no_match", |b| {
        b.iter(|| predict(black_box("qqq"), &db, Locale::English, 5))
    });
}

fn bench_load(c: &mut Criterion) {
    let path = Gazetteer::default_dataset_path();
    c.bench_function("load_bundled_dataset", |b| {
        b.iter(|| Gazetteer::load(black_box(&path)))
    });
}

criterion_group!(benches, bench_predict, bench_load);
criterion_main!(benches);
