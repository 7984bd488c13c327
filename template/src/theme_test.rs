use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn names_round_trip_through_from_name() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
    }
}

#[test]
fn unknown_name_is_rejected() {
    assert_eq!(Theme::from_name("solarized"), None);
    assert_eq!(Theme::from_name(""), None);
    assert_eq!(Theme::from_name("Dark"), None);
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Theme::Ocean).expect("serialize");
    assert_eq!(json, "\"ocean\"");
    let restored: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(restored, Theme::Light);
}

#[test]
fn every_palette_sets_the_same_custom_properties() {
    let dark: Vec<&str> = Theme::Dark.variables().iter().map(|(name, _)| *name).collect();
    for theme in Theme::ALL {
        let names: Vec<&str> = theme.variables().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, dark);
        assert!(names.iter().all(|name| name.starts_with("--editor-")));
    }
}
