//! Scrapes the map pages of SBAllen's Hyrule Warriors: Definitive Edition FAQ
//! and turns them into one interactive page of difficulty grids and mission
//! requirements.
//!
//! ```no_run
//! use hw_maps::config::Config;
//! use hw_maps::driver::{Driver, LocalPages};
//! use hw_maps::render::Renderer;
//!
//! # fn main() -> hw_maps::error::Result<()> {
//! let config = Config::embedded()?;
//! let maps = Driver::new(&config)?.run(&LocalPages::new("pages"))?;
//! Renderer::new(&config, chrono::Utc::now()).write(&config.output, &maps)?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate if_chain;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;
#[cfg(feature = "http-client")]
extern crate reqwest;
extern crate scraper;
extern crate chrono;

pub mod error;
pub mod config;
pub mod data_structs;
pub mod normalize;
pub mod scrapers;
pub mod driver;
pub mod render;
#[cfg(feature = "http-client")]
pub mod http_client;
#[cfg(test)]
mod test_utils;
