//! Pokemon use-case service.

use crate::model::pokemon::Pokemon;
use crate::model::EntityId;
use crate::repo::pokemon_repo::PokemonRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for Pokemon store operations.
pub struct PokemonService<R: PokemonRepository> {
    repo: R,
}

impl<R: PokemonRepository> PokemonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Catalogs a new Pokemon from name and type input.
    ///
    /// # Contract
    /// - Returns the stored record with its generated id.
    pub fn catalog(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> RepoResult<Pokemon> {
        self.repo.save(&Pokemon::new(name, kind))
    }

    /// Upserts an already-constructed Pokemon.
    pub fn save(&self, pokemon: &Pokemon) -> RepoResult<Pokemon> {
        self.repo.save(pokemon)
    }

    /// Renames an existing Pokemon via the load-mutate-save flow.
    ///
    /// Returns `Ok(None)` when the id is unknown.
    pub fn rename(&self, id: EntityId, new_name: impl Into<String>) -> RepoResult<Option<Pokemon>> {
        let Some(mut pokemon) = self.repo.find_by_id(id)? else {
            return Ok(None);
        };
        pokemon.name = new_name.into();
        self.repo.save(&pokemon).map(Some)
    }

    /// Gets one Pokemon by id.
    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Pokemon>> {
        self.repo.find_by_id(id)
    }

    /// Lists every stored Pokemon.
    pub fn find_all(&self) -> RepoResult<Vec<Pokemon>> {
        self.repo.find_all()
    }

    /// Lists Pokemon of one exact type.
    pub fn find_by_kind(&self, kind: &str) -> RepoResult<Vec<Pokemon>> {
        self.repo.find_by_kind(kind)
    }

    /// Deletes one Pokemon by id (idempotent).
    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
