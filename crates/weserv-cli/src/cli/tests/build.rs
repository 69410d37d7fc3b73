//! Tests for `weserv url`: flag parsing and the resulting URL.

use super::{parse, parse_url};
use crate::cli::commands::builder_from_args;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use weserv_core::{Alignment, OutputFormat, ParamValue, Rotation, ValidationMode, WeservConfig};

fn build(args: &[&str]) -> String {
    builder_from_args(&WeservConfig::default(), &parse_url(args))
        .unwrap()
        .build_url()
}

#[test]
fn cli_parse_url_minimal() {
    match parse(&["weserv", "url", "http://example.com/photo.jpg"]) {
        CliCommand::Url(args) => {
            assert_eq!(args.image_url, "http://example.com/photo.jpg");
            assert!(args.width.is_none());
            assert!(!args.strict);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_builds_reference_url() {
    let url = build(&[
        "http://example.com/photo.jpg",
        "--width",
        "300",
        "--height",
        "200",
        "--gamma",
        "2.2",
    ]);
    assert_eq!(
        url,
        "https://images.weserv.nl?url=http%3A%2F%2Fexample.com%2Fphoto.jpg&w=300&h=200&gam=2.2"
    );
}

#[test]
fn cli_parse_typed_options() {
    let args = parse_url(&[
        "x.jpg", "--align", "top-left", "--output", "webp", "--rotate", "auto",
    ]);
    assert_eq!(args.align, Some(Alignment::TopLeft));
    assert_eq!(args.output, Some(OutputFormat::Webp));
    assert_eq!(args.rotate, Some(Rotation::Auto));
}

#[test]
fn cli_parse_negative_values() {
    let args = parse_url(&["x.jpg", "--brightness", "-40", "--rotate", "-90"]);
    assert_eq!(args.brightness, Some(-40));
    assert_eq!(args.rotate, Some(Rotation::Degrees(-90)));
}

#[test]
fn cli_rejects_unknown_token() {
    assert!(Cli::try_parse_from(["weserv", "url", "x.jpg", "--fit", "stretch"]).is_err());
}

#[test]
fn cli_crop_with_precrop() {
    let url = build(&["x.jpg", "--crop", "10,20,300,400", "--precrop"]);
    assert!(url.ends_with("&cx=10&cy=20&cw=300&ch=400&precrop=1"));
}

#[test]
fn cli_crop_requires_four_parts() {
    assert!(Cli::try_parse_from(["weserv", "url", "x.jpg", "--crop", "1,2,3"]).is_err());
    assert!(Cli::try_parse_from(["weserv", "url", "x.jpg", "--precrop"]).is_err());
}

#[test]
fn cli_out_of_range_is_dropped() {
    let url = build(&["x.jpg", "--dpr", "12", "--width", "50"]);
    assert_eq!(url, "https://images.weserv.nl?url=x.jpg&w=50");
}

#[test]
fn cli_strict_flag_sets_mode() {
    let args = parse_url(&["x.jpg", "--strict", "--trim", "0"]);
    let b = builder_from_args(&WeservConfig::default(), &args).unwrap();
    assert_eq!(b.mode(), ValidationMode::Strict);
    assert!(b.try_build_url().is_err());
}

#[test]
fn cli_api_url_override() {
    let url = build(&["x.jpg", "--api-url", "http://localhost:8080"]);
    assert_eq!(url, "http://localhost:8080?url=x.jpg");
}

#[test]
fn cli_raw_params_repeatable() {
    let args = parse_url(&["x.jpg", "--param", "crop=10,10", "--param", "or=90"]);
    assert_eq!(
        args.params,
        vec![
            ("crop".to_string(), ParamValue::Text("10,10".to_string())),
            ("or".to_string(), ParamValue::Int(90)),
        ]
    );
    assert!(Cli::try_parse_from(["weserv", "url", "x.jpg", "--param", "novalue"]).is_err());
}

#[test]
fn cli_api_url_override_is_validated() {
    for bad in ["ftp://x.test", "https://x.test/?a=1", "x.test"] {
        let args = parse_url(&["x.jpg", "--api-url", bad]);
        let err = builder_from_args(&WeservConfig::default(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("--api-url"), "{bad}");
    }
}

#[test]
fn cli_bare_trim_and_gamma_use_defaults() {
    let url = build(&["x.jpg", "--trim", "--gamma"]);
    assert_eq!(url, "https://images.weserv.nl?url=x.jpg&trim=10&gam=2.2");

    let args = parse_url(&["x.jpg", "--trim", "40", "--gamma", "1.8"]);
    assert_eq!(args.trim, Some(Some(40)));
    assert_eq!(args.gamma, Some(Some(1.8)));
}

#[test]
fn cli_recrop_flags_do_not_leak_precrop() {
    let args = parse_url(&["x.jpg", "--crop", "1,2,3,4"]);
    let url = builder_from_args(&WeservConfig::default(), &args)
        .unwrap()
        .crop(1, 2, 3, 4, true)
        .crop(5, 6, 7, 8, false)
        .build_url();
    assert_eq!(url, "https://images.weserv.nl?url=x.jpg&cx=5&cy=6&cw=7&ch=8");
}
