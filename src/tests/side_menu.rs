use crate::utils::{ MenuControl, SideMenu };

#[test]
fn test_side_menu_starts_closed() {
    assert!(!SideMenu::default().is_open());
}

#[test]
fn test_bars_control_flips_rather_than_opens() {
    let mut menu = SideMenu::default();
    menu.press(MenuControl::Bars);
    assert!(menu.is_open());
    menu.press(MenuControl::Bars);
    assert!(!menu.is_open());
}

#[test]
fn test_close_control_flips_rather_than_closes() {
    let mut menu = SideMenu::default();
    menu.press(MenuControl::Close);
    assert!(menu.is_open(), "close on a closed menu reopens it");
    menu.press(MenuControl::Close);
    assert!(!menu.is_open());
}

#[test]
fn test_controls_are_interchangeable() {
    let controls = [MenuControl::Bars, MenuControl::Close, MenuControl::Close, MenuControl::Bars, MenuControl::Close];
    let mut menu = SideMenu::default();
    for (presses, control) in controls.iter().enumerate() {
        menu.press(*control);
        assert_eq!(menu.is_open(), presses % 2 == 0);
    }
}
