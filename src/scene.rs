use std::{fmt, num::NonZeroUsize, sync::Arc};

use log::debug;
use lru::LruCache;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    config::CloudConfig,
    domain::cloud::Cloud,
    layout::generate_clouds,
    render::{
        animation::{AnimationSheet, derive_animation_sheet},
        shape::{CloudShape, cloud_shape},
    },
};

/// One generated loading screen: the clouds in placement order and the
/// animation sheet derived from them. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub seed: u64,
    pub clouds: Vec<Cloud>,
    #[serde(skip)]
    pub sheet: AnimationSheet,
}

impl Scene {
    #[must_use]
    pub fn generate(config: &CloudConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let clouds = generate_clouds(config, &mut rng);
        let sheet = derive_animation_sheet(&clouds);
        Self {
            seed,
            clouds,
            sheet,
        }
    }

    /// Shapes keyed by render index (position in placement order, not id).
    pub fn shapes(&self) -> impl Iterator<Item = (&Cloud, CloudShape)> + '_ {
        self.clouds.iter().enumerate().map(|(index, cloud)| {
            (
                cloud,
                cloud_shape(cloud.width, cloud.height, cloud.opacity, index),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneKey {
    fingerprint: String,
    seed: u64,
}

impl SceneKey {
    #[must_use]
    pub fn new(config: &CloudConfig, seed: u64) -> Self {
        // Debug output of f64 round-trips, so equal keys mean equal configs.
        Self {
            fingerprint: format!("{config:?}"),
            seed,
        }
    }
}

/// Scenes computed once per (config, seed) and shared afterwards.
pub struct SceneCache {
    entries: LruCache<SceneKey, Arc<Scene>>,
    hits: u64,
    misses: u64,
}

impl SceneCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_generate(&mut self, config: &CloudConfig, seed: u64) -> Arc<Scene> {
        let key = SceneKey::new(config, seed);
        if let Some(scene) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(scene);
        }

        self.misses += 1;
        let scene = Arc::new(Scene::generate(config, seed));
        debug!(
            "generated scene for seed {seed} ({} clouds)",
            scene.clouds.len()
        );
        self.entries.put(key, Arc::clone(&scene));
        scene
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl fmt::Debug for SceneCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl Default for SceneCache {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::small_config;

    #[test]
    fn same_key_returns_shared_scene() {
        let mut cache = SceneCache::new(4);
        let config = small_config(12);
        let first = cache.get_or_generate(&config, 5);
        let second = cache.get_or_generate(&config, 5);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn config_change_misses_cache() {
        let mut cache = SceneCache::new(4);
        let first = cache.get_or_generate(&small_config(12), 5);
        let second = cache.get_or_generate(&small_config(13), 5);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.clouds.len(), 13);
        assert_eq!(cache.stats(), (0, 2));
    }

    #[test]
    fn least_recently_used_scene_is_evicted() {
        let mut cache = SceneCache::new(2);
        let config = small_config(3);
        let first = cache.get_or_generate(&config, 1);
        cache.get_or_generate(&config, 2);
        cache.get_or_generate(&config, 3);
        assert_eq!(cache.len(), 2);

        let regenerated = cache.get_or_generate(&config, 1);
        assert!(!Arc::ptr_eq(&first, &regenerated));
        assert_eq!(*first, *regenerated);
    }

    #[test]
    fn zero_capacity_still_caches_one_scene() {
        let mut cache = SceneCache::new(0);
        assert!(cache.is_empty());
        cache.get_or_generate(&small_config(2), 9);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn shapes_use_placement_index() {
        let scene = Scene::generate(&small_config(7), 17);
        let counts: Vec<usize> = scene.shapes().map(|(_, shape)| shape.puffs.len()).collect();
        assert_eq!(counts, vec![5, 3, 4, 4, 4, 3, 5]);
    }

    #[test]
    fn sheet_matches_clouds() {
        let scene = Scene::generate(&small_config(9), 3);
        assert_eq!(scene.sheet.cloud_rules.len(), scene.clouds.len());
        for (cloud, rule) in scene.clouds.iter().zip(&scene.sheet.cloud_rules) {
            assert_eq!(rule.class, format!("cloud-{}", cloud.id));
        }
    }
}
