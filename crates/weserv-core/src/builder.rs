//! Fluent builder for weserv image URLs.
//!
//! Setters record options in an ordered map; nothing is encoded until
//! [`ImageUrlBuilder::build_url`] merges the source URL and the options into a
//! single query string.

use std::fmt;

use url::form_urlencoded;

use crate::config::{WeservConfig, DEFAULT_API_URL};
use crate::error::BuildError;
use crate::params::{
    Alignment, Filter, Fit, MaskType, OptionMap, OutputFormat, ParamValue, Rotation,
};
use crate::validate::{self, Rejection, ValidationMode};

/// Query key carrying the source image URL. Always serialized first.
const SOURCE_KEY: &str = "url";

/// Trim tolerance the API documents as its default.
pub const DEFAULT_TRIM: u32 = 10;

/// Gamma commonly used to undo sRGB encoding.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Accumulates image options and serializes them into an API URL.
///
/// Setters consume and return the builder so calls chain; clone it to branch
/// several variants off a common base.
///
/// ```
/// use weserv_core::ImageUrlBuilder;
///
/// let url = ImageUrlBuilder::new("http://example.com/photo.jpg")
///     .width(300)
///     .height(200)
///     .gamma(2.2)
///     .build_url();
/// assert_eq!(
///     url,
///     "https://images.weserv.nl?url=http%3A%2F%2Fexample.com%2Fphoto.jpg&w=300&h=200&gam=2.2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUrlBuilder {
    api_url: String,
    image_url: String,
    options: OptionMap,
    mode: ValidationMode,
    rejections: Vec<Rejection>,
}

impl ImageUrlBuilder {
    /// Builder against the default API base with silent validation.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            image_url: image_url.into(),
            options: OptionMap::new(),
            mode: ValidationMode::Silent,
            rejections: Vec::new(),
        }
    }

    /// Builder using the configured API base and validation mode.
    pub fn with_config(config: &WeservConfig, image_url: impl Into<String>) -> Self {
        Self::new(image_url)
            .api_url(config.api_url.clone())
            .validation(config.validation)
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Width in pixels.
    pub fn width(self, width: u32) -> Self {
        self.with("w", width)
    }

    /// Height in pixels.
    pub fn height(self, height: u32) -> Self {
        self.with("h", height)
    }

    /// Device pixel ratio, 1..=8.
    pub fn dpr(self, density: u32) -> Self {
        self.with("dpr", density)
    }

    pub fn align(self, alignment: Alignment) -> Self {
        self.with("a", alignment)
    }

    pub fn fit(self, fit: Fit) -> Self {
        self.with("t", fit)
    }

    /// Rectangle crop. With `precrop` the crop runs before any resize.
    pub fn crop(self, x: u32, y: u32, w: u32, h: u32, precrop: bool) -> Self {
        let mut builder = self
            .with("cx", x)
            .with("cy", y)
            .with("cw", w)
            .with("ch", h);
        builder.companion("precrop", precrop.then_some(true.into()));
        builder
    }

    /// Trims edge pixels similar to the top-left pixel. Tolerance 1..=254,
    /// [`DEFAULT_TRIM`] when the caller has no preference.
    pub fn trim(self, tolerance: u32) -> Self {
        self.with("trim", tolerance)
    }

    pub fn mask(mut self, mask: MaskType, trim: bool, background: Option<&str>) -> Self {
        if self.insert("mask", mask.into()) {
            self.companion("mtrim", trim.then_some(true.into()));
            self.companion("mbg", non_empty(background).map(Into::into));
        }
        self
    }

    /// Mirror about the vertical axis.
    pub fn flip(self) -> Self {
        self.with("flip", true)
    }

    /// Mirror about the horizontal axis.
    pub fn flop(self) -> Self {
        self.with("flop", true)
    }

    /// Rotation: `auto` or a multiple of 90 degrees. `background` fills exposed corners.
    pub fn rotate(mut self, rotation: impl Into<Rotation>, background: Option<&str>) -> Self {
        let rotation: Rotation = rotation.into();
        if self.insert("ro", rotation.into()) {
            self.companion("rbg", non_empty(background).map(Into::into));
        }
        self
    }

    pub fn background(self, color: &str) -> Self {
        self.with("bg", color)
    }

    pub fn blur(self, sigma: f64) -> Self {
        self.with("blur", sigma)
    }

    /// Brightness delta, -100..=100.
    pub fn brightness(self, brightness: i32) -> Self {
        self.with("bri", brightness)
    }

    /// Contrast delta, -100..=100.
    pub fn contrast(self, contrast: i32) -> Self {
        self.with("con", contrast)
    }

    /// Colour filter. `start`/`stop` are the duotone colours.
    pub fn filter(mut self, filter: Filter, start: Option<&str>, stop: Option<&str>) -> Self {
        if self.insert("filt", filter.into()) {
            self.companion("start", non_empty(start).map(Into::into));
            self.companion("stop", non_empty(stop).map(Into::into));
        }
        self
    }

    /// Gamma, 1..=3. [`DEFAULT_GAMMA`] is the usual sRGB value.
    pub fn gamma(self, gamma: f64) -> Self {
        self.with("gam", gamma)
    }

    /// Sharpen with optional flat/jagged levels. Zero levels are omitted.
    pub fn sharpen(mut self, sigma: f64, flat: Option<f64>, jagged: Option<f64>) -> Self {
        if self.insert("sharp", sigma.into()) {
            self.companion("sharpf", flat.filter(|f| *f != 0.0).map(Into::into));
            self.companion("sharpj", jagged.filter(|j| *j != 0.0).map(Into::into));
        }
        self
    }

    /// Tints with the given chroma, keeping luminance.
    pub fn tint(self, color: &str) -> Self {
        self.with("tint", color)
    }

    /// Encoder quality, 1..=100.
    pub fn quality(self, quality: u32) -> Self {
        self.with("q", quality)
    }

    pub fn output(self, format: OutputFormat) -> Self {
        self.with("output", format)
    }

    /// Progressive/interlaced output.
    pub fn interlace(self) -> Self {
        self.with("il", true)
    }

    /// Sets an arbitrary key. The key's value rule still applies.
    pub fn param(self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.with(key, value)
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.options.get(key)
    }

    /// Values dropped so far, in call order.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Serializes the source URL and all options into the final URL.
    ///
    /// Read-only: calling it repeatedly yields the same string.
    pub fn build_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(SOURCE_KEY, &self.image_url);
        for (key, value) in self.options.iter() {
            query.append_pair(key, &value.to_string());
        }
        format!("{}?{}", self.api_url, query.finish())
    }

    /// Like [`build_url`](Self::build_url), but in strict mode fails on the
    /// first dropped value.
    pub fn try_build_url(&self) -> Result<String, BuildError> {
        if self.mode == ValidationMode::Strict {
            if let Some(r) = self.rejections.first() {
                return Err(BuildError::InvalidParameter {
                    key: r.key.clone(),
                    value: r.value.to_string(),
                    expected: r.expected,
                });
            }
        }
        Ok(self.build_url())
    }

    fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Stores `value` under `key` unless its rule rejects it. Returns whether it was stored.
    fn insert(&mut self, key: &str, value: ParamValue) -> bool {
        if key == SOURCE_KEY {
            self.reject(key, value, "the source URL is fixed at construction");
            return false;
        }
        if let ParamValue::Float(f) = value {
            if !f.is_finite() {
                self.reject(key, value, "a finite number");
                return false;
            }
        }
        if let Some(rule) = validate::rule_for(key) {
            if !rule.accepts(&value) {
                self.reject(key, value, rule.expected);
                return false;
            }
        }
        self.options.set(key, value);
        true
    }

    /// Sets or clears an optional key that belongs to a compound setter.
    fn companion(&mut self, key: &str, value: Option<ParamValue>) {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.options.remove(key);
            }
        }
    }

    fn reject(&mut self, key: &str, value: ParamValue, expected: &'static str) {
        tracing::debug!(key, %value, expected, "dropping image option");
        self.rejections.push(Rejection {
            key: key.to_string(),
            value,
            expected,
        });
    }
}

impl fmt::Display for ImageUrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_url())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
