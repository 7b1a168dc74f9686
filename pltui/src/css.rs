//! CSS strings for theme colors and fonts

use std::fmt;
use std::str::FromStr;

/// Color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    fn channel(value: f64) -> i64 {
        // troncature, comme une conversion entière
        (value * 255.0) as i64
    }
}

/// `rgba(R, G, B, A)`, color channels scaled to 0–255
pub fn css_from_rgba(rgba: &Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {:?})",
        Rgba::channel(rgba.red),
        Rgba::channel(rgba.green),
        Rgba::channel(rgba.blue),
        rgba.alpha
    )
}

/// `rgb(R, G, B)`, alpha dropped
pub fn css_from_rgba_without_alpha(rgba: &Rgba) -> String {
    format!(
        "rgb({}, {}, {})",
        Rgba::channel(rgba.red),
        Rgba::channel(rgba.green),
        Rgba::channel(rgba.blue)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Oblique,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl FontStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Oblique => "oblique",
            FontStyle::Italic => "italic",
        }
    }
}

impl FontVariant {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontVariant::Normal => "normal",
            FontVariant::SmallCaps => "small-caps",
        }
    }
}

impl FontStretch {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStretch::UltraCondensed => "ultra-condensed",
            FontStretch::ExtraCondensed => "extra-condensed",
            FontStretch::Condensed => "condensed",
            FontStretch::SemiCondensed => "semi-condensed",
            FontStretch::Normal => "normal",
            FontStretch::SemiExpanded => "semi-expanded",
            FontStretch::Expanded => "expanded",
            FontStretch::ExtraExpanded => "extra-expanded",
            FontStretch::UltraExpanded => "ultra-expanded",
        }
    }
}

/// Font size as written in the description
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    Points(f64),
    Pixels(f64),
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Points(0.0)
    }
}

impl FontSize {
    /// The number as written, whatever the unit
    pub fn value(&self) -> f64 {
        match self {
            FontSize::Points(v) | FontSize::Pixels(v) => *v,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Points(pt) => write!(f, "{:?}pt", pt),
            FontSize::Pixels(px) => write!(f, "{:?}px", px),
        }
    }
}

/// Font description in the `"[FAMILY-LIST] [STYLE-OPTIONS] [SIZE]"` form,
/// e.g. `"DejaVu Sans, Sans Bold Italic 10"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontDescription {
    pub family: String,
    pub style: FontStyle,
    pub variant: FontVariant,
    /// 100..=1000
    pub weight: u16,
    pub stretch: FontStretch,
    pub size: FontSize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid font size in {0:?}")]
pub struct FontParseError(pub String);

enum StyleWord {
    Style(FontStyle),
    Variant(FontVariant),
    Weight(u16),
    Stretch(FontStretch),
    Normal,
}

fn style_word(word: &str) -> Option<StyleWord> {
    use StyleWord::*;
    let word = word.to_ascii_lowercase().replace('_', "-");
    Some(match word.as_str() {
        "normal" | "roman" | "regular" => Normal,
        "oblique" => Style(FontStyle::Oblique),
        "italic" => Style(FontStyle::Italic),
        "small-caps" => Variant(FontVariant::SmallCaps),
        "thin" => Weight(100),
        "ultra-light" | "extra-light" => Weight(200),
        "light" => Weight(300),
        "semi-light" | "demi-light" => Weight(350),
        "book" => Weight(380),
        "medium" => Weight(500),
        "semi-bold" | "demi-bold" => Weight(600),
        "bold" => Weight(700),
        "ultra-bold" | "extra-bold" => Weight(800),
        "heavy" | "black" => Weight(900),
        "ultra-heavy" | "ultra-black" | "extra-black" => Weight(1000),
        "ultra-condensed" => Stretch(FontStretch::UltraCondensed),
        "extra-condensed" => Stretch(FontStretch::ExtraCondensed),
        "condensed" => Stretch(FontStretch::Condensed),
        "semi-condensed" => Stretch(FontStretch::SemiCondensed),
        "semi-expanded" => Stretch(FontStretch::SemiExpanded),
        "expanded" => Stretch(FontStretch::Expanded),
        "extra-expanded" => Stretch(FontStretch::ExtraExpanded),
        "ultra-expanded" => Stretch(FontStretch::UltraExpanded),
        _ => return None,
    })
}

fn parse_size(token: &str) -> Option<Result<FontSize, ()>> {
    let (number, pixels) = match token.strip_suffix("px") {
        Some(n) => (n, true),
        None => (token, false),
    };
    if !number.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Some(match number.parse::<f64>() {
        Ok(v) if pixels => Ok(FontSize::Pixels(v)),
        Ok(v) => Ok(FontSize::Points(v)),
        Err(_) => Err(()),
    })
}

impl FontDescription {
    pub fn parse(desc: &str) -> Result<Self, FontParseError> {
        let mut font = FontDescription {
            weight: 400,
            ..Default::default()
        };
        let mut words: Vec<&str> = desc.split_whitespace().collect();

        if let Some(last) = words.last() {
            if let Some(size) = parse_size(last) {
                font.size = size.map_err(|_| FontParseError(desc.to_string()))?;
                words.pop();
            }
        }

        // Les options de style se lisent depuis la fin
        while let Some(word) = words.last() {
            let Some(option) = style_word(word) else {
                break;
            };
            match option {
                StyleWord::Style(style) => font.style = style,
                StyleWord::Variant(variant) => font.variant = variant,
                StyleWord::Weight(weight) => font.weight = weight,
                StyleWord::Stretch(stretch) => font.stretch = stretch,
                StyleWord::Normal => {}
            }
            words.pop();
        }

        font.family = words.join(" ").trim_end_matches(',').trim().to_string();
        Ok(font)
    }

    /// CSS weights only go by hundreds, up to 900
    pub fn css_weight(&self) -> u16 {
        (((self.weight + 50) / 100) * 100).min(900)
    }

    /// The size is always emitted in points, even when given in pixels.
    pub fn to_css(&self) -> String {
        format!(
            "font: {} {} {} {} {:?}pt \"{}\"",
            self.style.as_css(),
            self.variant.as_css(),
            self.css_weight(),
            self.stretch.as_css(),
            self.size.value(),
            self.family
        )
    }
}

impl FromStr for FontDescription {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// CSS `font` declaration for a font description string; `""` without one.
pub fn css_from_font_description(desc: Option<&str>) -> Result<String, FontParseError> {
    match desc {
        None => Ok(String::new()),
        Some(desc) => Ok(FontDescription::parse(desc)?.to_css()),
    }
}
