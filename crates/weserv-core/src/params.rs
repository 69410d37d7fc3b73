//! Parameter values, the ordered option map, and the typed option vocabularies.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;

/// A single query-parameter value.
///
/// Rendering follows what the API expects on the wire: integers in decimal,
/// floats in their shortest round-trip form (`2.2`, `2.0` becomes `2`),
/// booleans as `1`/`0`, text verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    /// Numeric view of the value, used by range rules. Text and booleans have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(n) => Some(*n as f64),
            ParamValue::Float(f) => Some(*f),
            ParamValue::Bool(_) | ParamValue::Text(_) => None,
        }
    }

    /// Parses a raw `KEY=VALUE` right-hand side: integer, then float, else text.
    pub fn parse_loose(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            ParamValue::Int(n)
        } else if let Ok(f) = raw.parse::<f64>() {
            ParamValue::Float(f)
        } else {
            ParamValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// Insertion-ordered map of query parameters.
///
/// Setting an existing key replaces its value in place; new keys append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(String, ParamValue)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: ParamValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Defines a closed set of API tokens with `as_str`, `Display` and `FromStr`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| ParseOptionError::new($kind, s))
            }
        }

        impl From<$name> for ParamValue {
            fn from(v: $name) -> Self {
                ParamValue::Text(v.as_str().to_string())
            }
        }
    };
}

token_enum! {
    /// Crop alignment (`a`).
    Alignment, "alignment" {
        Center => "center",
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
        Entropy => "entropy",
        Attention => "attention",
        Focal => "focal",
    }
}

token_enum! {
    /// How the image is fitted into the requested box (`t`).
    Fit, "fit" {
        Inside => "inside",
        Outside => "outside",
        Cover => "cover",
        Fill => "fill",
        Contain => "contain",
    }
}

token_enum! {
    /// Mask shape (`mask`).
    MaskType, "mask type" {
        Circle => "circle",
        Ellipse => "ellipse",
        Triangle => "triangle",
        Triangle180 => "triangle-180",
        Pentagon => "pentagon",
        Pentagon180 => "pentagon-180",
        Hexagon => "hexagon",
        Square => "square",
        Star => "star",
        Heart => "heart",
    }
}

token_enum! {
    /// Colour filter (`filt`).
    Filter, "filter" {
        Greyscale => "greyscale",
        Sepia => "sepia",
        Duotone => "duotone",
        Negate => "negate",
    }
}

token_enum! {
    /// Encoding of the returned image (`output`).
    OutputFormat, "output format" {
        Jpg => "jpg",
        Png => "png",
        Gif => "gif",
        Tiff => "tiff",
        Webp => "webp",
        Avif => "avif",
        Json => "json",
    }
}

/// Rotation request (`ro`): EXIF-driven `auto`, or an explicit angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Auto,
    Degrees(i32),
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Auto => f.write_str("auto"),
            Rotation::Degrees(d) => write!(f, "{d}"),
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("auto") {
            return Ok(Rotation::Auto);
        }
        t.parse::<i32>()
            .map(Rotation::Degrees)
            .map_err(|_| ParseOptionError::new("rotation", s))
    }
}

impl From<i32> for Rotation {
    fn from(degrees: i32) -> Self {
        Rotation::Degrees(degrees)
    }
}

impl From<Rotation> for ParamValue {
    fn from(r: Rotation) -> Self {
        match r {
            Rotation::Auto => ParamValue::Text("auto".to_string()),
            Rotation::Degrees(d) => ParamValue::Int(d.into()),
        }
    }
}
