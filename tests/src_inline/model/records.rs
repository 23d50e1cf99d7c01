use super::*;

#[test]
fn test_locale_codes() {
    assert_eq!(Locale::De.code(), "de");
    assert_eq!(Locale::En.code(), "en");
    assert_eq!(Locale::En.to_string(), "en");
}

#[test]
fn test_localized_name_lookup() {
    let name = LocalizedName::new("Antibiogramm", "Antibiogram");
    assert_eq!(name.get(Locale::De), "Antibiogramm");
    assert_eq!(name.get(Locale::En), "Antibiogram");
}

#[test]
fn test_localized_name_falls_back_to_id() {
    let name = LocalizedName::new("", "Enterobacterales");
    assert_eq!(name.or_id(Locale::De, "ENT"), "ENT");
    assert_eq!(name.or_id(Locale::En, "ENT"), "Enterobacterales");
}
