//! Dump the verse alignment table side by side for inspection.
//!
//! Usage: cargo run --bin dump_alignment [-- --book Alma] [-- --style "Long"]

use anyhow::Context;

use bomref::config::Config;
use bomref::{AlignmentTable, BookCatalog, Denomination, Style};

fn arg_after(flag: &str) -> Option<String> {
    std::env::args()
        .position(|a| a == flag)
        .and_then(|i| std::env::args().nth(i + 1))
}

fn main() -> anyhow::Result<()> {
    let catalog = BookCatalog::new();
    let book = arg_after("--book").and_then(|name| catalog.resolve(&name));
    let style = arg_after("--style").and_then(|name| Style::from_name(&name)).unwrap_or(Style::Long);

    let config = Config::load()?;
    let path = config.data_path()?;
    let table = AlignmentTable::load(path, &catalog)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    println!("=== {} ({} rows) ===", path.display(), table.len());
    let rows = table
        .rows(Denomination::Rlds)
        .iter()
        .zip(table.rows(Denomination::Lds))
        .enumerate()
        .filter(|(_, (rlds, _))| book.is_none_or(|b| rlds.book == b));

    for (pos, (rlds, lds)) in rows {
        let name = catalog.spell(rlds.book, style).unwrap_or_default();
        let marker = if rlds.chapter == lds.chapter && rlds.verse == lds.verse { ' ' } else { '*' };
        println!(
            "{pos:>6} {marker} {name:<16} RLDS {:>3}:{:<3} LDS {:>3}:{:<3}",
            rlds.chapter, rlds.verse, lds.chapter, lds.verse
        );
    }
    Ok(())
}
