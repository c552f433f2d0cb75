//! Writes the extracted maps out as one static page.
//!
//! The page only links `main.js` and `main.css`; showing and hiding the
//! mission tables is entirely up to those two files.

use crate::config::Config;
use crate::data_structs::{cell_label, CellRecord, ExtractedMap, MapRecord, MAX_DIFFICULTY};
use crate::error::*;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

pub struct Renderer<'c> {
    config: &'c Config,
    generated: DateTime<Utc>
}

impl<'c> Renderer<'c> {
    /// `generated` is stamped into the page footer.
    pub fn new(config: &'c Config, generated: DateTime<Utc>) -> Self {
        Renderer {
            config,
            generated
        }
    }

    /// Builds the whole document in memory.
    pub fn render(&self, maps: &[ExtractedMap]) -> String {
        let mut out = String::with_capacity(256 * 1024);

        self.render_header(&mut out);

        for map in maps {
            info!("Writing HTML for {}", map.spec.name);
            self.render_map(&mut out, map);
        }

        out.push_str(&format!(
            "<p class=\"generated\">Generated {}.</p>\n\
             <div class=\"spacer\">&nbsp;</div>\n\
             </body>\n</html>",
            self.generated.format("%Y-%m-%d %H:%M UTC")));

        out
    }

    /// Renders and then writes the document in one go, replacing any existing
    /// file.
    pub fn write<P: AsRef<Path>>(&self, path: P, maps: &[ExtractedMap]) -> Result<()> {
        let document = self.render(maps);
        fs::write(path, document)?;

        Ok(())
    }

    fn render_header(&self, out: &mut String) {
        out.push_str(&format!(
            "<!doctype html>\n<html>\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             <script src=\"{script}\"></script>\n\
             <link href=\"{stylesheet}\" rel=\"stylesheet\" type=\"text/css\">\n\
             </head>\n<body>\n\
             <h1>{title}</h1>\n\
             <h2>Notes</h2>\n",
            title = escape(&self.config.title),
            script = escape(&self.config.script),
            stylesheet = escape(&self.config.stylesheet)));

        out.push_str(&format!(
            "<p>The data is scraped from <a href=\"{}\">SBAllen's HW FAQ</a>.</p>\n",
            escape(self.config.root_url.trim_end_matches('/'))));
        out.push_str(
            "<p>A-Rank Time requirements are left out to save space. Almost every \
             mission asks for 15 minutes; most \"Defeat all Giant Bosses in time!\" \
             missions ask for 7 minutes instead.</p>\n");
        out.push_str(
            "<p>To lock a specific mission details table, click on the cell. \
             To unlock and view other details tables, click it again.</p>\n");

        out.push_str("<p>Difficulty order:");
        for n in 0..=MAX_DIFFICULTY {
            let text = match n {
                0 => "lowest".to_string(),
                MAX_DIFFICULTY => "highest".to_string(),
                _ => (n + 1).to_string()
            };
            if n > 0 {
                out.push_str("-&gt;");
            }
            out.push_str(&format!(
                "<span class=\"difficulty-indicator difficulty-{}\">{}</span>", n, text));
        }
        out.push_str("</p>\n");
    }

    fn render_map(&self, out: &mut String, map: &ExtractedMap) {
        let path = &map.spec.path;
        let record = &map.record;

        out.push_str(&format!("<h2>{}</h2>\n", escape(&map.spec.name)));
        out.push_str("<table>\n<tbody>\n");

        for row in 0..record.size.rows {
            out.push_str("<tr>\n");
            for column in 0..record.size.columns {
                match populated(record, row, column) {
                    Some((label, cell)) => out.push_str(&format!(
                        "<td class=\"cell-loc difficulty-{}\" data-mission=\"{}\">{}</td>\n",
                        cell.difficulty, mission_id(path, &label), escape(&label))),
                    None => out.push_str("<td></td>\n")
                }
            }
            out.push_str("</tr>\n");
        }

        out.push_str("</tbody>\n</table>\n");

        for row in 0..record.size.rows {
            for column in 0..record.size.columns {
                let (label, cell) = match populated(record, row, column) {
                    Some(found) => found,
                    None => continue
                };

                out.push_str(&format!(
                    "<table class=\"mission-data\" id=\"{}\">\n<tbody>\n",
                    mission_id(path, &label)));

                // Canonical order, not the order the FAQ lists them in
                for header in &self.config.mission_headers {
                    if let Some(value) = cell.mission_data.get(header) {
                        out.push_str(&format!(
                            "<tr>\n<th>{}</th>\n<td>{}</td>\n</tr>\n", escape(header), value));
                    }
                }

                out.push_str("</tbody>\n</table>\n");
            }
        }
    }
}

/// The cell at a grid position, if the map has one there.
fn populated(record: &MapRecord, row: usize, column: usize) -> Option<(String, &CellRecord)> {
    let label = cell_label(row, column)?;
    let cell = record.cells.get(&label)?;

    Some((label, cell))
}

/// Id of a cell's detail table. Prefixed with the map's path since every map
/// has its own "A-1".
#[inline]
pub fn mission_id(path: &str, label: &str) -> String {
    format!("{}-mission-{}", path, label)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}
