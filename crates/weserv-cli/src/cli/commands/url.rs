//! `weserv url <image-url> [options]` – build and print an image URL.

use anyhow::{Context, Result};
use weserv_core::{ImageUrlBuilder, ValidationMode, WeservConfig, DEFAULT_GAMMA, DEFAULT_TRIM};

use crate::cli::UrlArgs;

/// Applies `--api-url` and `--strict` on top of the loaded config.
fn effective_config(cfg: &WeservConfig, args: &UrlArgs) -> Result<WeservConfig> {
    let mut cfg = cfg.clone();
    if let Some(api_url) = &args.api_url {
        cfg.api_url = api_url.clone();
        cfg.validate().context("invalid --api-url")?;
    }
    if args.strict {
        cfg.validation = ValidationMode::Strict;
    }
    Ok(cfg)
}

/// Translate parsed flags into builder calls, in the setter table's order.
pub fn builder_from_args(cfg: &WeservConfig, args: &UrlArgs) -> Result<ImageUrlBuilder> {
    let cfg = effective_config(cfg, args)?;
    let mut b = ImageUrlBuilder::with_config(&cfg, args.image_url.as_str());

    if let Some(w) = args.width {
        b = b.width(w);
    }
    if let Some(h) = args.height {
        b = b.height(h);
    }
    if let Some(dpr) = args.dpr {
        b = b.dpr(dpr);
    }
    if let Some(a) = args.align {
        b = b.align(a);
    }
    if let Some(fit) = args.fit {
        b = b.fit(fit);
    }
    if let Some([x, y, w, h]) = args.crop {
        b = b.crop(x, y, w, h, args.precrop);
    }
    if let Some(t) = args.trim {
        b = b.trim(t.unwrap_or(DEFAULT_TRIM));
    }
    if let Some(mask) = args.mask {
        b = b.mask(mask, args.mask_trim, args.mask_bg.as_deref());
    }
    if args.flip {
        b = b.flip();
    }
    if args.flop {
        b = b.flop();
    }
    if let Some(ro) = args.rotate {
        b = b.rotate(ro, args.rotate_bg.as_deref());
    }
    if let Some(bg) = &args.bg {
        b = b.background(bg);
    }
    if let Some(blur) = args.blur {
        b = b.blur(blur);
    }
    if let Some(bri) = args.brightness {
        b = b.brightness(bri);
    }
    if let Some(con) = args.contrast {
        b = b.contrast(con);
    }
    if let Some(filt) = args.filter {
        b = b.filter(filt, args.filter_start.as_deref(), args.filter_stop.as_deref());
    }
    if let Some(gam) = args.gamma {
        b = b.gamma(gam.unwrap_or(DEFAULT_GAMMA));
    }
    if let Some(sharp) = args.sharpen {
        b = b.sharpen(sharp, args.sharpen_flat, args.sharpen_jagged);
    }
    if let Some(tint) = &args.tint {
        b = b.tint(tint);
    }
    if let Some(q) = args.quality {
        b = b.quality(q);
    }
    if let Some(fmt) = args.output {
        b = b.output(fmt);
    }
    if args.interlace {
        b = b.interlace();
    }
    for (key, value) in &args.params {
        b = b.param(key, value.clone());
    }
    Ok(b)
}

pub fn run_url(cfg: &WeservConfig, args: &UrlArgs) -> Result<()> {
    let builder = builder_from_args(cfg, args)?;
    for r in builder.rejections() {
        tracing::info!(
            source = builder.image_url(),
            key = %r.key,
            value = %r.value,
            "option dropped: expected {}",
            r.expected
        );
    }
    let url = builder.try_build_url()?;
    println!("{url}");
    Ok(())
}
