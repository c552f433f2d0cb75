//! Runs the stages in order: gather every page, extract every page, hand the
//! records to the renderer.

use crate::config::{Config, MapSpec};
use crate::data_structs::ExtractedMap;
use crate::error::*;
use crate::normalize::Normalizer;
use crate::scrapers::map_page::MapPageScraper;
use std::fs;
use std::path::PathBuf;

/// Somewhere map pages can be read from.
pub trait PageSource {
    /// Raw HTML of the given map's page.
    fn fetch_page(&self, map: &MapSpec) -> Result<String>;
}

/// Pages saved earlier as `<dir>/<path>.html`.
pub struct LocalPages {
    dir: PathBuf
}

impl LocalPages {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        LocalPages {
            dir: dir.into()
        }
    }

    pub fn page_path(&self, map: &MapSpec) -> PathBuf {
        self.dir.join(format!("{}.html", map.path))
    }

    /// Stores a page where `fetch_page` will look for it.
    pub fn save(&self, map: &MapSpec, html: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.page_path(map), html)?;

        Ok(())
    }
}

impl PageSource for LocalPages {
    fn fetch_page(&self, map: &MapSpec) -> Result<String> {
        Ok(fs::read_to_string(self.page_path(map))?)
    }
}

/// A page's HTML, tagged with the map it belongs to.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub spec: MapSpec,
    pub html: String
}

pub struct Driver<'c> {
    config: &'c Config,
    normalizer: Normalizer
}

impl<'c> Driver<'c> {
    pub fn new(config: &'c Config) -> Result<Self> {
        Ok(Driver {
            config,
            normalizer: Normalizer::new(&config.platform_logos)?
        })
    }

    /// Reads every configured map page, one after the other. The first
    /// failure ends the run.
    pub fn gather<S: PageSource + ?Sized>(&self, source: &S) -> Result<Vec<FetchedPage>> {
        let mut pages = vec![];

        for spec in &self.config.maps {
            info!("Gathering HTML for {}", spec.name);
            let html = source.fetch_page(spec)
                             .chain_err(|| format!("failed to get the page for {}", spec.name))?;

            pages.push(FetchedPage { spec: spec.clone(), html });
        }

        Ok(pages)
    }

    /// Extracts every page, keeping the configured map order.
    pub fn extract(&self, pages: Vec<FetchedPage>) -> Result<Vec<ExtractedMap>> {
        let mut maps = vec![];

        for FetchedPage { spec, html } in pages {
            info!("Extracting records for {}", spec.name);
            let extraction = MapPageScraper::from(html)
                .extract(&spec, self.config, &self.normalizer)
                .chain_err(|| format!("failed to extract {}", spec.name))?;

            if !extraction.warnings.is_empty() {
                info!("{} extracted with {} warning(s)", spec.name, extraction.warnings.len());
            }

            maps.push(ExtractedMap { spec, record: extraction.record });
        }

        Ok(maps)
    }

    /// `gather` followed by `extract`.
    pub fn run<S: PageSource + ?Sized>(&self, source: &S) -> Result<Vec<ExtractedMap>> {
        let pages = self.gather(source)?;
        self.extract(pages)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data_structs::Difficulty;
    use crate::render::Renderer;
    use crate::test_utils::*;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves pages from memory and remembers what was asked for.
    struct MemoryPages {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>
    }

    impl MemoryPages {
        fn new(pages: &[(&str, String)]) -> Self {
            MemoryPages {
                pages: pages.iter().map(|(path, html)| (path.to_string(), html.clone())).collect(),
                requested: RefCell::new(vec![])
            }
        }
    }

    impl PageSource for MemoryPages {
        fn fetch_page(&self, map: &MapSpec) -> Result<String> {
            self.requested.borrow_mut().push(map.path.clone());

            match self.pages.get(&map.path) {
                Some(html) => Ok(html.clone()),
                None => bail!(ErrorKind::NonSuccessStatus(map.path.clone(), 404))
            }
        }
    }

    fn both_pages() -> MemoryPages {
        MemoryPages::new(&[
            ("test-map", TEST_MAP_PAGE.to_string()),
            ("other-map", renamed_map_page("Other Map")),
        ])
    }

    #[test]
    fn pages_are_read_in_order() {
        let config = test_config();
        let source = both_pages();

        let maps = Driver::new(&config).unwrap().run(&source).unwrap();

        assert_eq!(*source.requested.borrow(), vec!["test-map", "other-map"]);
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].spec.name, "Test Map");
        assert_eq!(maps[1].spec.name, "Other Map");
        assert_eq!(maps[1].record.cells["B-1"].difficulty, Difficulty::Rated(6));
        assert_eq!(maps[1].record.cells["B-1"].mission_data["Mission"], "Win the battle");
    }

    #[test]
    fn fetch_failure_stops_the_run() {
        let config = test_config();
        let source = MemoryPages::new(&[("test-map", TEST_MAP_PAGE.to_string())]);

        let err = Driver::new(&config).unwrap().run(&source).unwrap_err();

        match err.kind() {
            ErrorKind::Msg(msg) => assert!(msg.contains("Other Map")),
            other => panic!("unexpected error: {:?}", other)
        }
        assert_eq!(err.iter().count(), 2);
    }

    #[test]
    fn missing_heading_stops_the_run() {
        let config = test_config();
        // Without the override, "Other Map B-1" has no heading of its own
        let source = MemoryPages::new(&[
            ("test-map", TEST_MAP_PAGE.to_string()),
            ("other-map", TEST_MAP_PAGE.replace("<h4>Test Map", "<h4>Other Map")),
        ]);

        let err = Driver::new(&config).unwrap().run(&source).unwrap_err();
        let causes: Vec<String> = err.iter().map(|e| e.to_string()).collect();

        assert_eq!(causes[0], "failed to extract Other Map");
        assert!(causes[1].contains("\"Other Map B-1\""));
    }

    #[test]
    fn local_pages_round_trip() {
        let config = test_config();
        let dir = tempfile::tempdir().unwrap();
        let local = LocalPages::new(dir.path().join("pages"));

        for page in Driver::new(&config).unwrap().gather(&both_pages()).unwrap() {
            local.save(&page.spec, &page.html).unwrap();
        }

        assert!(dir.path().join("pages").join("test-map.html").exists());

        let maps = Driver::new(&config).unwrap().run(&local).unwrap();
        assert_eq!(maps[0].record.cells.len(), 3);
    }

    #[test]
    fn end_to_end() {
        let config = test_config();
        let maps = Driver::new(&config).unwrap().run(&both_pages()).unwrap();
        let generated = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 0).unwrap();
        let doc = Renderer::new(&config, generated).render(&maps);

        assert!(doc.contains(
            "<td class=\"cell-loc difficulty-3\" data-mission=\"test-map-mission-A-1\">A-1</td>"));
        assert!(doc.contains(
            "<td class=\"cell-loc difficulty-invalid\" data-mission=\"test-map-mission-A-2\">A-2</td>"));
        assert!(doc.contains(
            "<td class=\"cell-loc difficulty-6\" data-mission=\"other-map-mission-B-1\">B-1</td>"));

        assert!(doc.contains(
            "<table class=\"mission-data\" id=\"test-map-mission-A-1\">\n<tbody>\n\
             <tr>\n<th>Mission</th>\n<td>Defeat 100 enemies</td>\n</tr>\n\
             <tr>\n<th>Treasure</th>\n<td><span class=\"system-3ds\">3DS:</span><br>Gold Skulltula<br>\
             <span class=\"system-switch\">Switch:</span><br>Heart Piece</td>\n</tr>\n\
             <tr>\n<th>A-Rank KOs</th>\n<td>1200</td>\n</tr>\n\
             <tr>\n<th>Notes</th>\n<td>Opens B-1</td>\n</tr>\n\
             </tbody>\n</table>\n"));

        assert!(!doc.contains("<img"));
        assert!(!doc.contains("style="));
        assert!(!doc.contains("<strong>"));
        assert!(!doc.contains("#test-map-b-1"));
        assert!(!doc.contains("A-Rank Time</th>"));
        assert!(!doc.contains(">None<"));
    }
}
