//! Handles extraction of the difficulty grid and mission tables from one map
//! page of the FAQ.

use super::anchor::Anchor;
use super::{child_elements, sel};
use crate::config::{Config, MapSpec};
use crate::data_structs::{CellRecord, Difficulty, Extraction, GridSize, MapRecord, Warning};
use crate::error::*;
use crate::normalize::Normalizer;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BACKGROUND_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"background-color:\s*#([0-9A-Fa-f]*)").expect("background colour regex is valid")
});

/// Values the FAQ uses for "nothing here".
const PLACEHOLDERS: [&'static str; 2] = ["None", "N/A"];

/// Handles extraction of content from one map page.
///
/// You can either provide your own HTML string (see the `From<String>` impl)
/// or go through a `driver::PageSource`.
pub struct MapPageScraper {
    doc: Html
}

impl From<String> for MapPageScraper {
    fn from(html: String) -> Self {
        MapPageScraper {
            doc: Html::parse_document(&html)
        }
    }
}

impl MapPageScraper {
    /// Extracts the grid and every cell's mission data for the given map.
    ///
    /// Irregularities that only affect part of the record are skipped and
    /// reported in `Extraction::warnings`. A grid or mission table that cannot
    /// be found at all is an error.
    pub fn extract(&self, map: &MapSpec, config: &Config, normalizer: &Normalizer) -> Result<Extraction> {
        let mut warnings = vec![];

        let grid_anchor = Anchor::GridLabel(&config.grid_anchor);
        let grid = match grid_anchor.locate(&self.doc) {
            Some(tbody) => tbody,
            None => bail!(ErrorKind::AnchorNotFound(format!("{} for {}", grid_anchor, map.name)))
        };

        let size = grid_size(grid);
        let mut cells = BTreeMap::new();

        for (label, difficulty) in parse_grid(grid, config, &mut warnings) {
            let heading = config.mission_heading(&map.name, &label);
            let anchor = Anchor::MissionHeading(&heading);

            let tbody = match anchor.locate(&self.doc) {
                Some(tbody) => tbody,
                None => bail!(ErrorKind::AnchorNotFound(anchor.to_string()))
            };

            let mission_data = parse_mission_table(tbody, &heading, config, normalizer, &mut warnings);
            cells.insert(label, CellRecord { difficulty, mission_data });
        }

        Ok(Extraction {
            record: MapRecord { size, cells },
            warnings
        })
    }
}

fn grid_size(grid: ElementRef) -> GridSize {
    let mut rows = child_elements(grid);

    match rows.next() {
        Some(first) => GridSize {
            rows: 1 + rows.count(),
            columns: child_elements(first).count()
        },
        None => GridSize::default()
    }
}

/// Label and difficulty of every non-blank grid cell, in document order.
fn parse_grid(grid: ElementRef, config: &Config, warnings: &mut Vec<Warning>) -> Vec<(String, Difficulty)> {
    let mut cells = vec![];

    for td in grid.select(&sel("td")) {
        let text = td.text().collect::<String>();
        let label = text.trim();
        if label.is_empty() {
            continue;
        }

        let color = background_color(td);
        let difficulty = match color.as_ref().and_then(|hex| config.difficulty_for(hex)) {
            Some(rating) => Difficulty::Rated(rating),
            None => {
                raise(warnings, Warning::InvalidColor { cell: label.into(), color });
                Difficulty::Invalid
            }
        };

        cells.push((label.to_string(), difficulty));
    }

    cells
}

/// Hex digits of the first `background-color` set below the cell.
fn background_color(td: ElementRef) -> Option<String> {
    // skip(1): the cell's own style doesn't count
    let styled = td.descendants()
                   .skip(1)
                   .filter_map(ElementRef::wrap)
                   .filter_map(|e| e.value().attr("style"))
                   .find(|style| style.contains("background-color"))?;

    if_chain! {
        if let Some(caps) = BACKGROUND_COLOR_RE.captures(styled);
        let hex = caps[1].to_string();
        if !hex.is_empty();

    then {
        Some(hex)
    } else {
        None
    }}
}

/// Reads alternating header / value rows into a mission record.
fn parse_mission_table(
    tbody: ElementRef,
    heading: &str,
    config: &Config,
    normalizer: &Normalizer,
    warnings: &mut Vec<Warning>
) -> BTreeMap<String, String> {
    let mut mission_data = BTreeMap::new();
    let rows: Vec<ElementRef> = child_elements(tbody)
        .filter(|e| e.value().name() == "tr")
        .collect();

    for (i, pair) in rows.chunks(2).enumerate() {
        let (headers, values) = match pair {
            [headers, values] => (
                child_elements(*headers).collect::<Vec<_>>(),
                child_elements(*values).collect::<Vec<_>>()
            ),
            _ => {
                raise(warnings, Warning::OddRowCount { heading: heading.into(), rows: rows.len() });
                continue;
            }
        };

        if headers.len() != values.len() {
            raise(warnings, Warning::MismatchedRow {
                heading: heading.into(),
                row: i * 2,
                headers: headers.len(),
                values: values.len()
            });
            continue;
        }

        for (header, value) in headers.into_iter().zip(values) {
            let key = header.text().collect::<String>().trim().to_string();

            if !config.is_recognized_header(&key) {
                debug!("Dropping unrecognized header \"{}\" in {}", key, heading);
                continue;
            }

            let text = normalizer.normalize_cell(value);
            if text.is_empty() || PLACEHOLDERS.contains(&text.as_str()) {
                continue;
            }

            mission_data.insert(key, text);
        }
    }

    mission_data
}

fn raise(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("  {}", warning);
    warnings.push(warning);
}
