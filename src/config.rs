//! Static tables describing the FAQ: which maps exist, where they live, how
//! difficulty colours map to ratings, and the known quirks of the page.
//!
//! The default tables are compiled in from `config/hw_maps.toml`.

use crate::error::*;
use crate::data_structs::MAX_DIFFICULTY;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const EMBEDDED_CONFIG_STR: &'static str = include_str!("../config/hw_maps.toml");

/// A named map page on the FAQ.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapSpec {
    /// Display name, also the prefix of every mission heading on the page.
    pub name: String,
    /// URL path segment below the root URL. Doubles as the DOM id namespace.
    pub path: String,
}

/// A mission heading that doesn't follow the "<map> <cell>" pattern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingOverride {
    pub map: String,
    pub cell: String,
    pub heading: String,
}

/// A logo image that gets swapped for a text label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformLogo {
    /// Exact ending of the image's `src`.
    pub suffix: String,
    pub class: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub root_url: String,
    pub user_agent: String,
    pub title: String,
    pub output: PathBuf,
    pub script: String,
    pub stylesheet: String,
    pub grid_anchor: String,
    /// Recognized mission headers, in rendering order.
    pub mission_headers: Vec<String>,
    pub difficulty_colors: HashMap<String, u8>,
    pub maps: Vec<MapSpec>,
    #[serde(default)]
    pub heading_overrides: Vec<HeadingOverride>,
    #[serde(default)]
    pub platform_logos: Vec<PlatformLogo>,
}

impl Config {
    /// The tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG_STR)
    }

    /// Read an alternate set of tables from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(s)?;

        config.difficulty_colors = config.difficulty_colors
            .into_iter()
            .map(|(hex, rating)| (hex.to_ascii_lowercase(), rating))
            .collect();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.maps.is_empty() {
            bail!(ErrorKind::InvalidConfig("no maps are listed".into()));
        }

        if self.mission_headers.is_empty() {
            bail!(ErrorKind::InvalidConfig("no mission headers are listed".into()));
        }

        // Paths namespace the detail-table ids, so they must not repeat
        let mut seen = HashSet::new();
        for map in &self.maps {
            if !seen.insert(map.path.as_str()) {
                bail!(ErrorKind::InvalidConfig(
                    format!("map path \"{}\" is used more than once", map.path)));
            }
        }

        for (hex, &rating) in &self.difficulty_colors {
            if rating > MAX_DIFFICULTY {
                bail!(ErrorKind::InvalidConfig(
                    format!("colour {} maps to difficulty {} (max is {})",
                            hex, rating, MAX_DIFFICULTY)));
            }
        }

        Ok(())
    }

    /// Difficulty rating for a hex colour (without the `#`), if it is a known one.
    #[inline]
    pub fn difficulty_for(&self, hex: &str) -> Option<u8> {
        self.difficulty_colors.get(&hex.to_ascii_lowercase()).cloned()
    }

    #[inline]
    pub fn is_recognized_header(&self, header: &str) -> bool {
        self.mission_headers.iter().any(|h| h == header)
    }

    /// The exact heading text that introduces the mission table of a cell.
    pub fn mission_heading(&self, map_name: &str, cell: &str) -> String {
        match self.heading_overrides.iter().find(|o| o.map == map_name && o.cell == cell) {
            Some(o) => o.heading.clone(),
            None => format!("{} {}", map_name, cell)
        }
    }
}
