use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    assets::svg::VectorGlyph,
    foundation::error::{GlyphTrailError, GlyphTrailResult},
};

/// Immutable set of parsed glyph sources keyed by asset key (`"O"` for `O.svg`).
///
/// Loading front-loads all IO so that session construction and the frame loop never touch the
/// filesystem.
#[derive(Clone, Debug, Default)]
pub struct GlyphAssetStore {
    root: PathBuf,
    glyphs: BTreeMap<String, Arc<VectorGlyph>>,
}

impl GlyphAssetStore {
    /// Read and parse `<root>/<key>.svg` for every key, all files concurrently.
    ///
    /// Any single failure aborts the whole load; a store is never partially populated.
    #[tracing::instrument(skip(root, keys))]
    pub fn load<'a>(
        root: impl Into<PathBuf>,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> GlyphTrailResult<Self> {
        let root = root.into();
        let mut unique: Vec<&str> = keys.into_iter().collect();
        unique.sort_unstable();
        unique.dedup();
        for key in &unique {
            validate_asset_key(key)?;
        }

        let loaded = unique
            .par_iter()
            .map(|key| load_one(&root, key))
            .collect::<GlyphTrailResult<Vec<_>>>()?;

        let glyphs = loaded
            .into_iter()
            .map(|g| (g.key.clone(), Arc::new(g)))
            .collect::<BTreeMap<_, _>>();
        tracing::info!(count = glyphs.len(), root = %root.display(), "loaded glyph sources");

        Ok(Self { root, glyphs })
    }

    /// Build a store from glyphs that are already in memory.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = VectorGlyph>) -> Self {
        Self {
            root: PathBuf::new(),
            glyphs: glyphs
                .into_iter()
                .map(|g| (g.key.clone(), Arc::new(g)))
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> GlyphTrailResult<&Arc<VectorGlyph>> {
        self.glyphs
            .get(key)
            .ok_or_else(|| GlyphTrailError::asset(format!("unknown glyph source '{key}'")))
    }
}

/// File name for an asset key under the glyph directory.
pub fn glyph_file_name(key: &str) -> String {
    format!("{key}.svg")
}

/// Asset keys map straight to file names, so they must be a single plain path segment.
pub fn validate_asset_key(key: &str) -> GlyphTrailResult<()> {
    if key.is_empty() {
        return Err(GlyphTrailError::validation("glyph source must be non-empty"));
    }
    if key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(GlyphTrailError::validation(format!(
            "glyph source '{key}' must be a plain file stem"
        )));
    }
    Ok(())
}

fn load_one(root: &Path, key: &str) -> GlyphTrailResult<VectorGlyph> {
    let path = root.join(glyph_file_name(key));
    let bytes = std::fs::read(&path)
        .with_context(|| format!("read glyph source '{}'", path.display()))
        .map_err(|e| GlyphTrailError::asset(format!("{e:#}")))?;
    let glyph = VectorGlyph::from_svg_bytes(key, &bytes).map_err(|e| match e {
        GlyphTrailError::Other(inner) => {
            GlyphTrailError::asset(format!("{}: {inner:#}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(
        key,
        subpaths = glyph.subpaths.len(),
        width = glyph.width,
        height = glyph.height,
        "parsed glyph source"
    );
    Ok(glyph)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
