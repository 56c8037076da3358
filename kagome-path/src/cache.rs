//! Process-wide sharing of constructed parents
//!
//! Building a path model walks every crystal in the cycle to key the
//! lookup tables, and elements only compare equal when their parents
//! are one object. Call sites that rebuild the same model therefore go
//! through a cache keyed by the crystal cycle and the highest weight.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, LazyLock, Mutex};

use tracing::trace;

use kagome_crystal::crystal::PerfectCrystal;
use kagome_crystal::kirillov_reshetikhin::KirillovReshetikhinCrystal;
use kagome_root::weight::Weight;

use crate::error::PathModelError;
use crate::model::KyotoPathModel;

/// Cache of path models keyed by cycle and highest weight.
pub struct ModelCache<B: PerfectCrystal + Eq + Hash> {
    models: Mutex<HashMap<(Vec<Arc<B>>, Weight), KyotoPathModel<B>>>,
}

impl<B: PerfectCrystal + Eq + Hash> ModelCache<B> {
    pub fn new() -> Self {
        Self {
            models: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the model for `(crystals, weight)`, constructing and
    /// memoizing it on first use. Construction failures are not cached.
    pub fn get_or_create(
        &self,
        crystals: Vec<Arc<B>>,
        weight: Weight,
    ) -> Result<KyotoPathModel<B>, PathModelError> {
        let mut models = self.models.lock().unwrap_or_else(|e| e.into_inner());
        let key = (crystals, weight);
        if let Some(model) = models.get(&key) {
            trace!("path model cache hit");
            return Ok(model.clone());
        }
        let model = KyotoPathModel::new(key.0.clone(), key.1.clone())?;
        models.insert(key, model.clone());
        Ok(model)
    }

    /// Drop every cached model. Handles already given out stay valid;
    /// models built afterwards are fresh parents.
    pub fn clear(&self) {
        self.models.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn len(&self) -> usize {
        self.models.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: PerfectCrystal + Eq + Hash> Default for ModelCache<B> {
    fn default() -> Self {
        Self::new()
    }
}

static KR_MODELS: LazyLock<ModelCache<KirillovReshetikhinCrystal>> =
    LazyLock::new(ModelCache::new);

/// Shared path model over a cycle of Kirillov-Reshetikhin crystals.
///
/// Repeated calls with an equal cycle and weight return handles to one
/// parent, so elements from different call sites compare equal.
pub fn shared_model(
    crystals: Vec<Arc<KirillovReshetikhinCrystal>>,
    weight: Weight,
) -> Result<KyotoPathModel<KirillovReshetikhinCrystal>, PathModelError> {
    KR_MODELS.get_or_create(crystals, weight)
}

/// Empty the shared Kirillov-Reshetikhin model cache.
pub fn clear_shared_models() {
    KR_MODELS.clear();
}
