use chrono::{NaiveDate, Weekday};
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

use crate::types::CalendarConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// First year covered by the calendar
    pub initial_year: i32,
    /// Years covered after `initial_year` (plus one trailing month)
    pub number_of_years: u32,
    /// Fixed "today", for demos and reproducible screenshots
    pub today: Option<NaiveDate>,
    /// Start in paging mode
    pub paging_enabled: bool,
    /// Days styled as weekend
    pub weekend: Vec<Weekday>,
    pub theme: ThemeConfig,
    pub indicators: Vec<IndicatorConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    /// Regular day numbers; fill of the picked circle
    #[serde(deserialize_with = "deserialize_color")]
    pub label_fg: Color,
    /// Number drawn on the picked circle
    #[serde(deserialize_with = "deserialize_color")]
    pub background_fg: Color,
    /// Today's number, today's month header, picked-today circle
    #[serde(deserialize_with = "deserialize_color")]
    pub today_fg: Color,
    /// Number drawn on the picked-today circle
    #[serde(deserialize_with = "deserialize_color")]
    pub picked_today_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub weekend_fg: Color,
}

/// Indicator badges for one day
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IndicatorConfig {
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_colors")]
    pub colors: Vec<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            initial_year: 2018,
            number_of_years: 10,
            today: None,
            paging_enabled: false,
            weekend: vec![Weekday::Sat, Weekday::Sun],
            theme: ThemeConfig::default(),
            indicators: Vec::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            label_fg: Color::White,
            background_fg: Color::Black,
            today_fg: Color::Red,
            picked_today_fg: Color::White,
            weekend_fg: Color::Gray,
        }
    }
}

impl Config {
    /// Calendar configuration, using `fallback_today` unless the file pins today
    pub fn calendar_config(&self, fallback_today: NaiveDate) -> CalendarConfig {
        CalendarConfig::new(
            self.initial_year,
            self.number_of_years,
            self.today.unwrap_or(fallback_today),
        )
        .with_paging(self.paging_enabled)
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize a list of colors
fn deserialize_colors<'de, D>(deserializer: D) -> Result<Vec<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let strings: Vec<String> = Vec::deserialize(deserializer)?;
    strings
        .iter()
        .map(|s| {
            parse_color(s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
        })
        .collect()
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightblue" => return Some(Color::LightBlue),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        return match hex.len() {
            6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(
            r.trim().parse().ok()?,
            g.trim().parse().ok()?,
            b.trim().parse().ok()?,
        ));
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}
