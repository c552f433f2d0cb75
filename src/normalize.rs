//! Turns a mission value cell from the FAQ into a clean inline-HTML fragment.
//!
//! The rewrite is an ordered list of regex steps over the cell's serialized
//! markup. Some steps rely on earlier ones:
//!
//! * `strip-cell-wrapper` runs before `collapse-lines`, so the wrapper is
//!   matched while the markup still has its original shape.
//! * the `logo-*` steps run before `strip-images`, which would otherwise eat
//!   the platform logos.
//! * `strip-leading-break` runs last, since the line breaks it targets only
//!   lead the fragment once the images in front of them are gone.

use crate::config::PlatformLogo;
use crate::error::*;
use regex::Regex;
use scraper::ElementRef;

/// One rewrite of the pipeline.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pattern: Regex,
    replacement: String,
}

impl Step {
    fn new<N, R>(name: N, pattern: &str, replacement: R) -> Result<Self>
        where N: Into<String>,
              R: Into<String> {

        Ok(Step {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    #[inline]
    pub fn apply(&self, markup: &str) -> String {
        self.pattern.replace_all(markup, self.replacement.as_str()).into_owned()
    }
}

/// The full rewrite pipeline for mission value cells.
#[derive(Debug)]
pub struct Normalizer {
    steps: Vec<Step>,
}

impl Normalizer {
    /// Builds the pipeline, with one substitution step per platform logo.
    pub fn new(logos: &[PlatformLogo]) -> Result<Self> {
        let mut steps = vec![
            Step::new("strip-cell-wrapper", r"(?s)\A\s*<td[^>]*>(.*)</td>\s*\z", "$1")?,
            Step::new("collapse-lines", r"\r?\n", "")?,
            Step::new("strip-styles", r#"\s+style="[^"]*""#, "")?,
            Step::new("strip-strong", r"</?strong(\s[^>]*)?>", "")?,
            Step::new("strip-paragraphs", r"</?p(\s[^>]*)?>", "")?,
        ];

        for logo in logos {
            steps.push(Step::new(
                format!("logo-{}", logo.class),
                &format!(r#"<img\s[^>]*src="[^"]*{}"[^>]*>"#, regex::escape(&logo.suffix)),
                // `$` is special in replacements
                format!(r#"<span class="{}">{}</span>"#, logo.class, logo.label).replace('$', "$$"),
            )?);
        }

        steps.push(Step::new("strip-images", r"<img(\s[^>]*)?>", "")?);
        steps.push(Step::new("strip-anchors", r"</?a(\s[^>]*)?>", "")?);
        steps.push(Step::new("strip-leading-break", r"\A(\s*<br\s*/?>)+", "")?);

        Ok(Normalizer { steps })
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step in order over serialized markup and trims the result.
    pub fn normalize(&self, markup: &str) -> String {
        let rewritten = self.steps
            .iter()
            .fold(markup.to_string(), |acc, step| step.apply(&acc));

        rewritten.trim().to_string()
    }

    /// Normalizes a `td` from a parsed page.
    #[inline]
    pub fn normalize_cell(&self, cell: ElementRef) -> String {
        self.normalize(&cell.html())
    }
}
