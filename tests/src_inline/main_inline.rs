use clap::Parser;

use super::*;

#[test]
fn test_args_default_locales_and_output() {
    let args = Args::parse_from(["abgram", "--data", "data", "--target", "de-nw-2023"]);
    assert_eq!(args.locales, vec![Locale::De, Locale::En]);
    assert_eq!(args.out, PathBuf::from("out"));
    assert_eq!(args.base_name, "antibiogram");
    assert!(!args.summary_json);
}

#[test]
fn test_args_repeatable_locale() {
    let args = Args::parse_from([
        "abgram", "--data", "data", "--target", "de", "--locale", "en", "--locale", "de",
    ]);
    assert_eq!(args.locales, vec![Locale::En, Locale::De]);
}

#[test]
fn test_args_require_target() {
    assert!(Args::try_parse_from(["abgram", "--data", "data"]).is_err());
}

#[test]
fn test_args_reject_unknown_locale() {
    let err = Args::try_parse_from([
        "abgram", "--data", "data", "--target", "de", "--locale", "fr",
    ]);
    assert!(err.is_err());
}
