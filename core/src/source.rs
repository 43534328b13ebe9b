//! Where champion data comes from.
//!
//! The engine never fetches anything itself. A ChampionSource hands it
//! fully-populated records; DataDirSource reads a local mirror laid out
//! exactly like the CDN, so a `wget -r` of the CDN works as a data dir.

use crate::{
    champion::{ChampionDetail, ChampionDetailResponse, ChampionList},
    error::{QuizError, QuizResult},
    types::ChampionId,
};
use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub const CDN_BASE_URL: &str = "https://ddragon.leagueoflegends.com";

pub trait ChampionSource {
    fn latest_version(&mut self) -> QuizResult<String>;
    fn champion_list(&mut self) -> QuizResult<ChampionList>;
    fn champion_detail(&mut self, id: &str) -> QuizResult<ChampionDetail>;
}

/// The resolved "latest" data version.
///
/// Lives exactly as long as its owner: drop or invalidate it to pick up
/// a new patch.
#[derive(Debug, Default, Clone)]
pub struct VersionCache {
    version: Option<String>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Return the cached version, resolving it once on first use.
    pub fn get_or_resolve<F>(&mut self, resolve: F) -> QuizResult<String>
    where
        F: FnOnce() -> QuizResult<String>,
    {
        if let Some(v) = &self.version {
            return Ok(v.clone());
        }
        let v = resolve()?;
        log::debug!("resolved data version {v}");
        self.version = Some(v.clone());
        Ok(v)
    }

    pub fn invalidate(&mut self) {
        self.version = None;
    }
}

/// Local mirror of the CDN:
///   {root}/api/versions.json
///   {root}/cdn/{version}/data/{locale}/champion.json
///   {root}/cdn/{version}/data/{locale}/champion/{id}.json
pub struct DataDirSource {
    root:     PathBuf,
    locale:   String,
    versions: VersionCache,
    details:  HashMap<ChampionId, ChampionDetail>,
}

impl DataDirSource {
    pub fn new(root: impl Into<PathBuf>, locale: &str) -> Self {
        Self::with_cache(root, locale, VersionCache::new())
    }

    pub fn with_cache(root: impl Into<PathBuf>, locale: &str, versions: VersionCache) -> Self {
        Self {
            root: root.into(),
            locale: locale.to_string(),
            versions,
            details: HashMap::new(),
        }
    }

    pub fn version_cache(&self) -> &VersionCache {
        &self.versions
    }

    fn data_dir(&self, version: &str) -> PathBuf {
        self.root
            .join("cdn")
            .join(version)
            .join("data")
            .join(&self.locale)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> QuizResult<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

impl ChampionSource for DataDirSource {
    fn latest_version(&mut self) -> QuizResult<String> {
        let path = self.root.join("api").join("versions.json");
        self.versions.get_or_resolve(|| {
            let versions: Vec<String> = read_json(&path)?;
            versions.into_iter().next().ok_or(QuizError::NoVersions)
        })
    }

    fn champion_list(&mut self) -> QuizResult<ChampionList> {
        let version = self.latest_version()?;
        let list: ChampionList = read_json(&self.data_dir(&version).join("champion.json"))?;
        log::debug!("loaded {} champions for {}", list.data.len(), list.version);
        Ok(list)
    }

    fn champion_detail(&mut self, id: &str) -> QuizResult<ChampionDetail> {
        if let Some(detail) = self.details.get(id) {
            return Ok(detail.clone());
        }
        let version = self.latest_version()?;
        let path = self
            .data_dir(&version)
            .join("champion")
            .join(format!("{id}.json"));
        let response: ChampionDetailResponse = match read_json(&path) {
            Ok(r) => r,
            Err(QuizError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(QuizError::ChampionNotFound { id: id.to_string() });
            }
            Err(e) => return Err(e),
        };
        let detail = response.into_detail(id)?;
        self.details.insert(id.to_string(), detail.clone());
        Ok(detail)
    }
}

/// Image URLs for one data version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    pub base:    String,
    pub version: String,
}

impl AssetUrls {
    pub fn new(version: &str) -> Self {
        Self {
            base: CDN_BASE_URL.to_string(),
            version: version.to_string(),
        }
    }

    pub fn champion_icon(&self, champion_id: &str) -> String {
        format!("{}/cdn/{}/img/champion/{champion_id}.png", self.base, self.version)
    }

    pub fn spell_icon(&self, image_full: &str) -> String {
        format!("{}/cdn/{}/img/spell/{image_full}", self.base, self.version)
    }
}
