//! Cosmetic styling from a small CSS subset:
//!
//! ```css
//! /* comment */
//! #Breakout { background-color: #1b1b1b; }
//! .label    { color: white; font-size: 18px; }
//! ```
//!
//! Unknown selectors and properties are ignored.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use egui::Color32;

pub const STYLESHEET_NAME: &str = "breakout.css";

const PANE_SELECTOR: &str = "#Breakout";
const LABEL_SELECTOR: &str = ".label";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stylesheet {
    pub background: Color32,
    pub label_colour: Color32,
    pub label_font_size: f32,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(27),
            label_colour: Color32::WHITE,
            label_font_size: 16.0,
        }
    }
}

impl Stylesheet {
    pub fn parse(source: &str) -> Result<Self> {
        let mut style = Stylesheet::default();
        let source = strip_comments(source)?;
        let mut rest = source.trim();
        while !rest.is_empty() {
            let (selector, after_selector) = rest
                .split_once('{')
                .ok_or_else(|| anyhow!("expected '{{' after '{}'", rest))?;
            let (body, after_body) = after_selector
                .split_once('}')
                .ok_or_else(|| anyhow!("missing '}}' for selector '{}'", selector.trim()))?;
            style.apply_rule(selector.trim(), body)?;
            rest = after_body.trim();
        }
        Ok(style)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).with_context(|| format!("reading stylesheet {}", path.display()))?;
        Stylesheet::parse(&source).with_context(|| format!("parsing stylesheet {}", path.display()))
    }

    /// Falls back to the default style if the stylesheet can't be used.
    pub fn load_or_default(path: &Path) -> Self {
        match Stylesheet::load(path) {
            Ok(style) => {
                log::info!("applied stylesheet {}", path.display());
                style
            }
            Err(e) => {
                log::warn!("{e:#}; using default style");
                Stylesheet::default()
            }
        }
    }

    fn apply_rule(&mut self, selector: &str, body: &str) -> Result<()> {
        for declaration in body.split(';').map(str::trim).filter(|d| !d.is_empty()) {
            let (property, value) = declaration
                .split_once(':')
                .map(|(p, v)| (p.trim(), v.trim()))
                .ok_or_else(|| anyhow!("malformed declaration '{declaration}' in '{selector}'"))?;

            match (selector, property) {
                (PANE_SELECTOR, "background-color") => self.background = parse_colour(value)?,
                (LABEL_SELECTOR, "color") => self.label_colour = parse_colour(value)?,
                (LABEL_SELECTOR, "font-size") => self.label_font_size = parse_size(value)?,
                _ => log::debug!("ignoring '{property}' in '{selector}'"),
            }
        }
        Ok(())
    }
}

fn strip_comments(source: &str) -> Result<String> {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        let end = rest[start..].find("*/").ok_or_else(|| anyhow!("unterminated comment"))?;
        rest = &rest[start + end + 2..];
    }
    result.push_str(rest);
    Ok(result)
}

fn parse_colour(value: &str) -> Result<Color32> {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("colour '{value}' is not of the form #rrggbb");
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid colour '{value}'"))
        };
        return Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    match value.to_ascii_lowercase().as_str() {
        "white" => Ok(Color32::WHITE),
        "black" => Ok(Color32::BLACK),
        "gray" | "grey" => Ok(Color32::GRAY),
        "red" => Ok(Color32::RED),
        "green" => Ok(Color32::GREEN),
        "blue" => Ok(Color32::BLUE),
        "yellow" => Ok(Color32::YELLOW),
        _ => bail!("unknown colour '{value}'"),
    }
}

fn parse_size(value: &str) -> Result<f32> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    let size: f32 = number.parse().with_context(|| format!("invalid size '{value}'"))?;
    if !size.is_finite() || size <= 0.0 {
        bail!("size '{value}' must be a positive number");
    }
    Ok(size)
}
