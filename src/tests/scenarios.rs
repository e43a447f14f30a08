use super::common;
use super::common::mocks::MemoryClassList;
use crate::components::ThemeIcon;
use crate::utils::{ attach_root_sync, sync_class_list, MenuControl, SideMenu, ThemeMode, ThemeStore };

/// Drives the navbar's state the way its event handlers do, with an
/// in-memory root element in place of `<html>`.
struct MountedNavbar {
    store: ThemeStore,
    side_menu: SideMenu,
    root: MemoryClassList,
}

impl MountedNavbar {
    fn mount() -> Self {
        let mut store = ThemeStore::new();
        let root = MemoryClassList::default();
        let target = root.clone();
        attach_root_sync(&mut store, move |mode| {
            sync_class_list(Ok(target.clone()), mode);
        });
        Self { store, side_menu: SideMenu::default(), root }
    }

    fn icon(&self) -> ThemeIcon {
        ThemeIcon::for_mode(self.store.mode())
    }

    fn click_theme_icon(&mut self) {
        self.store.toggle();
    }

    fn click(&mut self, control: MenuControl) {
        self.side_menu.press(control);
    }

    fn assert_dark(&self) {
        assert_eq!(self.store.mode(), ThemeMode::Dark);
        assert!(self.root.contains("dark"));
        assert!(!self.root.contains("light"));
        assert_eq!(self.icon(), ThemeIcon::Sun);
    }

    fn assert_light(&self) {
        assert_eq!(self.store.mode(), ThemeMode::Light);
        assert!(self.root.contains("light"));
        assert!(!self.root.contains("dark"));
        assert_eq!(self.icon(), ThemeIcon::Moon);
    }
}

#[test]
fn test_icon_names_the_other_mode() {
    assert_eq!(ThemeIcon::for_mode(ThemeMode::Dark), ThemeIcon::Sun);
    assert_eq!(ThemeIcon::for_mode(ThemeMode::Light), ThemeIcon::Moon);
    assert_eq!(ThemeIcon::Sun.label(), "Switch to light mode");
}

#[test]
fn test_theme_round_trip_through_clicks() {
    common::setup();
    let mut navbar = MountedNavbar::mount();
    navbar.assert_dark();

    navbar.click_theme_icon();
    navbar.assert_light();

    navbar.click_theme_icon();
    navbar.assert_dark();
    assert_eq!(navbar.root.tokens(), vec!["dark".to_string()]);
}

#[test]
fn test_side_menu_clicks() {
    let mut navbar = MountedNavbar::mount();
    assert!(!navbar.side_menu.is_open());

    navbar.click(MenuControl::Bars);
    assert!(navbar.side_menu.is_open());

    navbar.click(MenuControl::Close);
    assert!(!navbar.side_menu.is_open());

    navbar.click(MenuControl::Close);
    assert!(navbar.side_menu.is_open());
}

#[test]
fn test_side_menu_does_not_touch_theme() {
    let mut navbar = MountedNavbar::mount();
    navbar.click(MenuControl::Bars);
    navbar.click(MenuControl::Close);
    navbar.click(MenuControl::Bars);
    navbar.assert_dark();
}
