//! Recipe catalog
//!
//! The catalog is an immutable, append-only recipe set built once at startup and
//! shared by reference (`Arc<Catalog>`) with the generator. Batch "uses" recipes
//! name their base in a [`RecipeSpec`]; [`CatalogBuilder::build`] resolves each
//! name into a [`RecipeId`] exactly once and rejects unresolvable references.

mod builtin;
mod file;

use crate::error::CatalogError;
use crate::types::{BatchRole, FamilyVariant, MealSlot, Protein, RecipeId, Tag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

/// Batch role as written in a recipe spec, before base resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchKind {
    Base,
    Uses,
}

/// Unresolved recipe definition: the input to [`CatalogBuilder::add`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub name: String,
    pub meal: MealSlot,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub protein: Protein,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<BatchKind>,
    /// Name of the base recipe when `batch = "uses"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<FamilyVariant>,
}

impl RecipeSpec {
    pub fn new(name: impl Into<String>, meal: MealSlot, tags: &[Tag], protein: Protein) -> Self {
        Self {
            name: name.into(),
            meal,
            tags: tags.to_vec(),
            protein,
            batch: None,
            base: None,
            uses_note: None,
            notes: None,
            family: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn family(mut self, self_note: impl Into<String>, family_note: impl Into<String>) -> Self {
        self.family = Some(FamilyVariant::new(self_note, family_note));
        self
    }

    /// Mark as a batch-cooking base.
    pub fn batch_base(mut self) -> Self {
        self.batch = Some(BatchKind::Base);
        self
    }

    /// Mark as a recipe that reuses the named batch base.
    pub fn uses(mut self, base: impl Into<String>, note: impl Into<String>) -> Self {
        self.batch = Some(BatchKind::Uses);
        self.base = Some(base.into());
        self.uses_note = Some(note.into());
        self
    }
}

/// Immutable recipe record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub meal: MealSlot,
    pub tags: BTreeSet<Tag>,
    pub protein: Protein,
    pub batch: BatchRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FamilyVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_note: Option<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_batch_base(&self) -> bool {
        matches!(self.batch, BatchRole::Base)
    }

    pub fn is_batch_use(&self) -> bool {
        matches!(self.batch, BatchRole::Uses(_))
    }

    /// Base this recipe reuses, if it is a batch "uses" recipe.
    pub fn base_id(&self) -> Option<RecipeId> {
        match self.batch {
            BatchRole::Uses(id) => Some(id),
            _ => None,
        }
    }
}

/// Collects recipe specs and validates them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    specs: Vec<RecipeSpec>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, spec: RecipeSpec) -> &mut Self {
        self.specs.push(spec);
        self
    }

    pub fn extend<I: IntoIterator<Item = RecipeSpec>>(&mut self, specs: I) -> &mut Self {
        self.specs.extend(specs);
        self
    }

    /// Assign ids in insertion order and resolve every batch base reference.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut index = HashMap::with_capacity(self.specs.len());
        for (pos, spec) in self.specs.iter().enumerate() {
            if index.insert(spec.name.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateName(spec.name.clone()));
            }
        }

        let mut recipes = Vec::with_capacity(self.specs.len());
        for (pos, spec) in self.specs.iter().enumerate() {
            let batch = match spec.batch {
                None => BatchRole::None,
                Some(BatchKind::Base) => BatchRole::Base,
                Some(BatchKind::Uses) => {
                    let base_name = spec
                        .base
                        .as_ref()
                        .ok_or_else(|| CatalogError::MissingBase(spec.name.clone()))?;
                    let base_pos =
                        *index
                            .get(base_name)
                            .ok_or_else(|| CatalogError::UnresolvedBase {
                                recipe: spec.name.clone(),
                                base: base_name.clone(),
                            })?;
                    if self.specs[base_pos].batch != Some(BatchKind::Base) {
                        return Err(CatalogError::NotABase {
                            recipe: spec.name.clone(),
                            base: base_name.clone(),
                        });
                    }
                    BatchRole::Uses(id_for(base_pos))
                }
            };

            recipes.push(Recipe {
                id: id_for(pos),
                name: spec.name.clone(),
                meal: spec.meal,
                tags: spec.tags.iter().copied().collect(),
                protein: spec.protein,
                batch,
                family: spec.family.clone(),
                notes: spec.notes.clone(),
                uses_note: spec.uses_note.clone(),
            });
        }

        debug!(recipes = recipes.len(), "Catalog built");
        Ok(Catalog { recipes, index })
    }
}

fn id_for(pos: usize) -> RecipeId {
    RecipeId(pos as u32 + 1)
}

/// Read-only recipe catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The bundled IBS-friendly recipe set.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::new();
        builder.extend(builtin::recipe_specs());
        builder.build()
    }

    /// Load a catalog from a TOML file of `[[recipe]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        file::load(path)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        file::parse(source)
    }

    /// All recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|pos| self.recipes.get(pos))
    }

    pub fn by_name(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).map(|&pos| &self.recipes[pos])
    }

    pub fn by_meal(&self, meal: MealSlot) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(move |r| r.meal == meal)
    }

    pub fn bases(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|r| r.is_batch_base())
    }

    /// Recipes reusing `base`, in catalog order.
    pub fn uses_of(&self, base: RecipeId) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |r| r.base_id() == Some(base))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
