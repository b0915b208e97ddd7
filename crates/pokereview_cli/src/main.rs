//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `pokereview_core` wiring end to end: open a throwaway in-memory
//!   database, run one save/read pass, and print the result.
//! - Keep output deterministic for quick local sanity checks.

use pokereview_core::db::migrations::latest_version;
use pokereview_core::db::open_db_in_memory;
use pokereview_core::{Pokemon, PokemonRepository, SqlitePokemonRepository};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("pokereview_core version={}", pokereview_core::core_version());

    let conn = open_db_in_memory()?;
    println!("schema_version={}", latest_version());

    let repo = SqlitePokemonRepository::try_new(&conn)?;
    let saved = repo.save(&Pokemon::new("Pikachu", "electric"))?;
    println!(
        "smoke_save id={} type={} total={}",
        saved.id.unwrap_or_default(),
        saved.kind,
        repo.find_all()?.len()
    );

    Ok(())
}
