/// Main menu options, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Load,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Start, MenuOption::Load, MenuOption::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start Game",
            MenuOption::Load => "Load Game",
            MenuOption::Quit => "Quit",
        }
    }
}

#[derive(Debug, Default)]
pub struct MainMenu {
    selected_index: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            MenuOption::ALL.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MenuOption::ALL.len();
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected_index]
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut menu = MainMenu::new();
        assert_eq!(menu.selected(), MenuOption::Start);
        menu.select_previous();
        assert_eq!(menu.selected(), MenuOption::Quit);
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected(), MenuOption::Load);
    }
}
