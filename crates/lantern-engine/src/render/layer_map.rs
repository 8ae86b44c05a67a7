use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{RenderError, Result};

use super::TextureLayers;

/// Named layers of a texture array.
///
/// Keys are listed in upload order, so the `i`-th key resolves to
/// `tex_index == i`. Typically keyed by a sprite enum.
#[derive(Debug, Clone)]
pub struct LayerMap<K> {
    indices: HashMap<K, u32>,
    layers: TextureLayers,
}

impl<K: Eq + Hash + Debug> LayerMap<K> {
    /// Builds the map from keys in layer order. Each key may appear once.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Result<Self> {
        let mut indices = HashMap::new();
        let mut count: u32 = 0;
        for key in keys {
            if indices.contains_key(&key) {
                return Err(RenderError::DuplicateLayer { key: format!("{key:?}") });
            }
            indices.insert(key, count);
            count += 1;
        }
        Ok(Self { indices, layers: TextureLayers::new(count) })
    }

    /// `tex_index` for `key`.
    pub fn index(&self, key: &K) -> Result<i32> {
        let layer = self
            .indices
            .get(key)
            .ok_or_else(|| RenderError::UnknownLayer { key: format!("{key:?}") })?;
        self.layers.index(*layer)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.indices.contains_key(key)
    }

    #[inline]
    pub fn layers(&self) -> TextureLayers {
        self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
