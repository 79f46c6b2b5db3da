//! Simulates a search box: one prediction per keystroke, the way a desktop
//! front end re-renders its candidate list while the user types.

use gazetteer_rs::prelude::*;
use std::time::Instant;

fn type_out(db: &Gazetteer, word: &str, locale: Locale) {
    println!("Typing {word:?} [{locale}]");
    let mut typed = String::new();
    for ch in word.chars() {
        typed.push(ch);
        let started = Instant::now();
        let hits = predict(&typed, db, locale, DEFAULT_MAX_RESULTS);
        let elapsed = started.elapsed();
        let shown: Vec<_> = hits.iter().map(|p| p.display_name(locale)).collect();
        println!("  {typed:<12} {:.1?}  {}", elapsed, shown.join(" | "));
    }
    println!();
}

fn main() {
    let db = Gazetteer::shared();
    if db.is_empty() {
        eprintln!("bundled dataset missing; nothing to suggest");
        return;
    }

    type_out(db, "Shanghai", Locale::English);
    type_out(db, "New York", Locale::English);
    type_out(db, "Xi'an", Locale::English);
    type_out(db, "乌鲁木齐", Locale::Chinese);
}
