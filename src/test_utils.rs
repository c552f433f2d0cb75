use crate::config::Config;

/// A hand-written page shaped like the FAQ's map pages: a 2x2 grid plus one
/// mission table per cell.
pub const TEST_MAP_PAGE: &'static str = include_str!("../test_data/test_map.html");

/// Tables matching `TEST_MAP_PAGE`.
pub const TEST_CONFIG_STR: &'static str = r#"
root_url = "https://faqs.example.com/73095/"
user_agent = "my-grab/0.0.1"
title = "Test Maps"
output = "index.html"
script = "main.js"
stylesheet = "main.css"
grid_anchor = "A-2"
mission_headers = [
    "Mission", "Search", "A-Rank Victory", "Battle Victory", "Treasure",
    "A-Rank KOs", "A-Rank Damage", "Notes",
]

[difficulty_colors]
"000000" = 0
"008000" = 1
"ff9900" = 2
"800080" = 3
"ff6600" = 4
"0000ff" = 5
"ff0000" = 6

[[maps]]
name = "Test Map"
path = "test-map"

[[maps]]
name = "Other Map"
path = "other-map"

[[heading_overrides]]
map = "Test Map"
cell = "B-1"
heading = "Test Map B-"

[[platform_logos]]
suffix = "/73095-150.png"
class = "system-3ds"
label = "3DS:"

[[platform_logos]]
suffix = "/73095-151.png"
class = "system-switch"
label = "Switch:"
"#;

pub fn test_config() -> Config {
    Config::from_toml_str(TEST_CONFIG_STR).unwrap()
}

/// `TEST_MAP_PAGE` with every "Test Map" heading renamed, so it reads as a
/// different map's page. The B-1 heading typo is fixed along the way.
pub fn renamed_map_page(name: &str) -> String {
    TEST_MAP_PAGE.replace("<h4>Test Map", &format!("<h4>{}", name))
                 .replace("B-<strong>1</strong>", "B-1")
}
