//! Fixed-catalogue number patterns.

use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::QuizRng;
use crate::error::GenerationError;
use crate::puzzles::{Catalogue, CatalogueEntry, CatalogueId, Puzzle, Rule};
use crate::rules::PuzzleSource;

const VICTORY_HINT: &str = "Sharp spikes bristle thickly along the top of the castle wall.";

/// Source that serves each catalogue entry at most once per session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogueGame {
    catalogue: Catalogue,
    used: FxHashSet<CatalogueId>,
}

impl Default for CatalogueGame {
    fn default() -> Self {
        Self::new(Catalogue::standard())
    }
}

impl CatalogueGame {
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            used: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn is_used(&self, id: CatalogueId) -> bool {
        self.used.contains(&id)
    }
}

impl PuzzleSource for CatalogueGame {
    type Answer = i64;

    fn name(&self) -> &str {
        "number catalogue"
    }

    fn draw(
        &mut self,
        last_rule: Option<&Rule>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<i64>, GenerationError> {
        let available: Vec<&CatalogueEntry> =
            self.catalogue.iter().filter(|e| !self.used.contains(&e.id)).collect();

        if available.is_empty() {
            warn!("all {} catalogue entries used", self.catalogue.len());
            return Err(self.exhausted());
        }

        // Prefer an entry whose step/ratio differs from the last round's.
        let last_key = last_rule.map(Rule::key);
        let preferred: Vec<&CatalogueEntry> = available
            .iter()
            .copied()
            .filter(|e| Some(e.rule().key()) != last_key)
            .collect();
        let pool = if preferred.is_empty() {
            debug!("only entries sharing {last_key:?} remain");
            &available
        } else {
            &preferred
        };

        let entry = match rng.choose(pool) {
            Some(entry) => (*entry).clone(),
            None => return Err(self.exhausted()),
        };
        self.used.insert(entry.id);
        debug!("drew catalogue entry {} ({} left)", entry.label, available.len() - 1);

        Ok(Puzzle::new(entry.rule(), entry.values.iter().copied(), entry.blank_index))
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.catalogue.len() - self.used.len())
    }

    fn reset(&mut self) {
        self.used.clear();
    }

    fn victory_hint(&self) -> Option<&str> {
        Some(VICTORY_HINT)
    }
}
