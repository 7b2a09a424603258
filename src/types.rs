//! Type definitions and enums for the application screens and menus.

/// Enumeration of available application screens.
///
/// This enumeration holds the current screen of the game. It is used to determine which screen to
/// render and what the keys pressed by the user do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen, with its highlighted item.
    MainMenu(MainMenuItem),
    /// Options menu screen, with its highlighted item.
    OptionsMenu(OptionsMenuItem),
    /// In-game screen where the maze is walked.
    InGame,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" option, entering the maze.
    StartGame,
    /// "Options" option, opening the options menu.
    Options,
    /// "Quit" option, leaving the application.
    Quit,
}

impl MainMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::Options,
            Self::Options | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame | Self::Options => Self::StartGame,
            Self::Quit => Self::Options,
        }
    }
}

/// Options menu navigation choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// "Sound" option, toggling the audio cues.
    Sound,
    /// "Return" option, going back to the main menu.
    Back,
}

impl OptionsMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Sound | Self::Back => Self::Back,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Sound | Self::Back => Self::Sound,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics of each menu sharing the same boxed, centered layout,
/// carrying the number of items in the menu.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Options menu configuration.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the title shown in the menu's border.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the number of items in the menu, used to size its container.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_item_navigation() {
        assert_eq!(MainMenuItem::StartGame.next(), MainMenuItem::Options);
        assert_eq!(MainMenuItem::Options.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);

        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::Options);
        assert_eq!(MainMenuItem::Options.previous(), MainMenuItem::StartGame);
        assert_eq!(MainMenuItem::StartGame.previous(), MainMenuItem::StartGame);
    }

    #[test]
    fn test_options_menu_item_navigation() {
        assert_eq!(OptionsMenuItem::Sound.next(), OptionsMenuItem::Back);
        assert_eq!(OptionsMenuItem::Back.next(), OptionsMenuItem::Back);
        assert_eq!(OptionsMenuItem::Back.previous(), OptionsMenuItem::Sound);
        assert_eq!(OptionsMenuItem::Sound.previous(), OptionsMenuItem::Sound);
    }

    #[test]
    fn test_menu_type_repr() {
        let main_menu = MenuType::MainMenu(3);
        let options_menu = MenuType::OptionsMenu(2);

        assert_eq!(main_menu.repr(), "Main Menu");
        assert_eq!(options_menu.repr(), "Options Menu");
    }

    #[test]
    fn test_menu_type_value() {
        let main_menu = MenuType::MainMenu(3);
        let options_menu = MenuType::OptionsMenu(2);

        assert_eq!(main_menu.value(), 3);
        assert_eq!(options_menu.value(), 2);
    }

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let options_menu = Screen::OptionsMenu(OptionsMenuItem::Back);

        assert_ne!(main_menu, Screen::InGame);
        assert_ne!(options_menu, Screen::OptionsMenu(OptionsMenuItem::Sound));
        assert_eq!(format!("{:?}", Screen::InGame), "InGame");
    }
}
