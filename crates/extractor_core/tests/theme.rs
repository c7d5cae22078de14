use extractor_core::{Appearance, ThemeContext, ThemeMode};

#[test]
fn system_mode_follows_system_preference() {
    let mut theme = ThemeContext::new(ThemeMode::System, Appearance::Dark);
    assert_eq!(theme.effective(), Appearance::Dark);

    assert!(theme.set_system_preference(Appearance::Light));
    assert_eq!(theme.effective(), Appearance::Light);
    assert!(!theme.set_system_preference(Appearance::Light));
}

#[test]
fn system_change_is_invisible_under_explicit_mode() {
    let mut theme = ThemeContext::new(ThemeMode::Dark, Appearance::Light);
    assert!(!theme.set_system_preference(Appearance::Dark));
    assert!(!theme.set_system_preference(Appearance::Light));
    assert_eq!(theme.effective(), Appearance::Dark);

    assert!(theme.set_mode(ThemeMode::System));
    assert_eq!(theme.effective(), Appearance::Light);
}

#[test]
fn explicit_mode_ignores_system_preference() {
    let theme = ThemeContext::new(ThemeMode::Light, Appearance::Dark);
    assert_eq!(theme.effective(), Appearance::Light);

    let theme = ThemeContext::new(ThemeMode::Dark, Appearance::Light);
    assert_eq!(theme.effective(), Appearance::Dark);
}

#[test]
fn set_mode_reports_change() {
    let mut theme = ThemeContext::default();
    assert_eq!(theme.mode(), ThemeMode::System);
    assert!(theme.set_mode(ThemeMode::Dark));
    assert!(!theme.set_mode(ThemeMode::Dark));
}

#[test]
fn mode_parses_stored_strings() {
    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
    }
    assert!("sepia".parse::<ThemeMode>().is_err());
}

#[test]
fn appearance_parses_light_and_dark() {
    assert_eq!("light".parse::<Appearance>().unwrap(), Appearance::Light);
    assert_eq!("dark".parse::<Appearance>().unwrap(), Appearance::Dark);
    assert!("system".parse::<Appearance>().is_err());
}
