//! Pokemon repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `pokemon` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Pokemon::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `save` is an upsert by id: a missing id inserts a fresh row, an
//!   existing id overwrites that row in place.

use crate::model::pokemon::Pokemon;
use crate::model::EntityId;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const POKEMON_SELECT_SQL: &str = "SELECT id, name, type FROM pokemon";

/// Repository interface for Pokemon persistence operations.
pub trait PokemonRepository {
    /// Upserts one Pokemon and returns the stored record with its id set.
    fn save(&self, pokemon: &Pokemon) -> RepoResult<Pokemon>;
    /// Gets one Pokemon by id. Missing ids yield `Ok(None)`.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Pokemon>>;
    /// Lists every stored Pokemon in id order.
    fn find_all(&self) -> RepoResult<Vec<Pokemon>>;
    /// Lists Pokemon whose type exactly equals `kind` (case-sensitive).
    /// No match yields an empty `Vec`.
    fn find_by_kind(&self, kind: &str) -> RepoResult<Vec<Pokemon>>;
    /// Deletes one Pokemon by id. Idempotent: unknown ids succeed silently.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed Pokemon repository.
pub struct SqlitePokemonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePokemonRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "pokemon", &["id", "name", "type"])?;
        Ok(Self { conn })
    }
}

impl PokemonRepository for SqlitePokemonRepository<'_> {
    fn save(&self, pokemon: &Pokemon) -> RepoResult<Pokemon> {
        pokemon.validate()?;

        // A NULL id lets SQLite assign the next rowid; a bound id either
        // claims that key or overwrites the existing row in place.
        self.conn.execute(
            "INSERT INTO pokemon (id, name, type)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                type = excluded.type;",
            params![pokemon.id, pokemon.name.as_str(), pokemon.kind.as_str()],
        )?;

        let id = match pokemon.id {
            Some(id) => id,
            None => self.conn.last_insert_rowid(),
        };

        Ok(Pokemon {
            id: Some(id),
            name: pokemon.name.clone(),
            kind: pokemon.kind.clone(),
        })
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Pokemon>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POKEMON_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_pokemon_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Pokemon>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POKEMON_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut pokemon = Vec::new();
        while let Some(row) = rows.next()? {
            pokemon.push(parse_pokemon_row(row)?);
        }

        Ok(pokemon)
    }

    fn find_by_kind(&self, kind: &str) -> RepoResult<Vec<Pokemon>> {
        let mut stmt = self.conn.prepare(&format!(
            "{POKEMON_SELECT_SQL} WHERE type = ?1 ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([kind])?;
        let mut pokemon = Vec::new();
        while let Some(row) = rows.next()? {
            pokemon.push(parse_pokemon_row(row)?);
        }

        Ok(pokemon)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        // Idempotent: a zero changed-row count is silent success.
        self.conn
            .execute("DELETE FROM pokemon WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_pokemon_row(row: &Row<'_>) -> RepoResult<Pokemon> {
    let id: EntityId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive id value `{id}` in pokemon.id"
        )));
    }

    let pokemon = Pokemon {
        id: Some(id),
        name: row.get("name")?,
        kind: row.get("type")?,
    };
    pokemon.validate()?;
    Ok(pokemon)
}
