use gazetteer_core::prelude::*;
use gazetteer_core::text::normalize;
use std::sync::Arc;
use std::thread;

fn bundled() -> Gazetteer {
    Gazetteer::try_load(Gazetteer::default_dataset_path()).expect("bundled dataset loads")
}

#[test]
fn bundled_dataset_counts() {
    let stats = bundled().stats();
    // 45 rows, one duplicate city key ("London" in the UK and in Canada).
    assert_eq!(stats.cities, 44);
    assert_eq!(stats.regions, 31);
}

#[test]
fn shared_instance_matches_fresh_load() {
    let shared = Gazetteer::shared();
    assert_eq!(shared.len(), bundled().len());
    assert!(std::ptr::eq(shared, Gazetteer::shared()));
}

#[test]
fn municipality_is_both_city_and_region() {
    let db = bundled();
    let city = db.get_city("Beijing").unwrap();
    let region = db.get_region("Beijing").unwrap();
    assert_eq!(city.region_display_name(Locale::Chinese), Some("北京"));
    assert!(region.region_name.is_none());
    // Enumeration order: the region is synthesized right before its city.
    assert_eq!(db.all()[0].key, PlaceKey::region("Beijing"));
    assert_eq!(db.all()[1].key, PlaceKey::city("Beijing"));
}

#[test]
fn later_duplicate_city_row_wins() {
    let db = bundled();
    let london = db.get_city("London").unwrap();
    assert_eq!(london.country_display_name(Locale::English), "Canada");
    let hits = predict("Lon", &db, Locale::English, 5);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, PlaceKey::city("London"));
}

#[test]
fn every_entry_is_found_by_each_of_its_prefixes() {
    let db = bundled();
    let limit = db.len();
    for locale in Locale::ALL {
        for entry in db.all() {
            let full = normalize(entry.display_name(locale), locale).into_owned();
            let prefixes: Vec<&str> = full
                .char_indices()
                .map(|(i, c)| &full[..i + c.len_utf8()])
                .collect();
            for prefix in prefixes {
                let hits = predict(prefix, &db, locale, limit);
                assert!(
                    hits.iter().any(|h| h.key == entry.key),
                    "{:?} missing for prefix {prefix:?} ({locale})",
                    entry.key
                );
            }
        }
    }
}

#[test]
fn results_are_grouped_then_sorted() {
    let db = bundled();
    for query in ["a", "s", "n", "b", "l", "t", "h"] {
        let hits = predict(query, &db, Locale::English, db.len());
        let split = hits.iter().position(|h| !h.is_in_china()).unwrap_or(hits.len());
        assert!(hits[split..].iter().all(|h| !h.is_in_china()), "{query}");
        for group in [&hits[..split], &hits[split..]] {
            assert!(
                group.windows(2).all(|w| w[0].name.en <= w[1].name.en),
                "group not sorted for {query:?}"
            );
        }
    }
}

#[test]
fn home_country_beats_alphabet() {
    let db = bundled();
    let hits = predict("a", &db, Locale::English, 5);
    let names: Vec<_> = hits.iter().map(|h| h.display_name(Locale::English)).collect();
    assert_eq!(names, ["Anhui", "Anqing", "Anyang", "Adelaide", "Amsterdam"]);
}

#[test]
fn truncation_bounds_result_length() {
    let db = bundled();
    for n in 0..8 {
        assert!(predict("s", &db, Locale::English, n).len() <= n);
    }
    assert!(predict("s", &db, Locale::English, 0).is_empty());
}

#[test]
fn multi_word_prefix() {
    let db = bundled();
    let hits = predict("new ", &db, Locale::English, 10);
    let names: Vec<_> = hits.iter().map(|h| h.key.name()).collect();
    assert_eq!(
        names,
        ["New Orleans", "New South Wales", "New York", "New York State"]
    );
}

#[test]
fn chinese_scenarios() {
    let db = bundled();
    let names = |q: &str| -> Vec<String> {
        predict(q, &db, Locale::Chinese, 5)
            .iter()
            .map(|h| h.display_name(Locale::Chinese).to_owned())
            .collect()
    };
    assert_eq!(names("石家庄"), ["石家庄"]);
    assert_eq!(names("阜"), ["阜康", "阜新", "阜阳"]);
    assert_eq!(names("郑"), ["郑州"]);
    // 北京 is both a city and a region; ordering falls back to stable input
    // order for identical Latin names.
    assert_eq!(names("北"), ["北京", "北京", "北荷兰"]);
}

#[test]
fn readers_share_one_gazetteer_across_threads() {
    let db = Arc::new(bundled());
    let handles: Vec<_> = ["sh", "be", "lo", "xi"]
        .into_iter()
        .map(|q| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                predict(q, &db, Locale::English, 5)
                    .iter()
                    .map(|h| h.key.clone())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for (q, handle) in ["sh", "be", "lo", "xi"].into_iter().zip(handles) {
        let from_thread = handle.join().unwrap();
        let local: Vec<_> = predict(q, &db, Locale::English, 5)
            .iter()
            .map(|h| h.key.clone())
            .collect();
        assert_eq!(from_thread, local);
    }
}
