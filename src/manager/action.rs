//! Menu actions.

use crate::config::Component;
use crate::docker::ComposeAction;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Pick and pin a version for a component.
    Select(Component),
    /// Render the compose file from the pinned versions.
    Generate,
    /// Build the image for the pinned versions.
    Build,
    /// Run a compose operation.
    Compose(ComposeAction),
    /// Leave the menu.
    Exit,
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::Select(Component::Gns3Server),
        MenuAction::Select(Component::Qemu),
        MenuAction::Generate,
        MenuAction::Build,
        MenuAction::Compose(ComposeAction::Up),
        MenuAction::Compose(ComposeAction::Down),
        MenuAction::Compose(ComposeAction::Logs),
        MenuAction::Exit,
    ];

    /// Parse a menu choice (`"1"` to `"8"`).
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Menu label.
    pub fn label(&self) -> String {
        match self {
            Self::Select(component) => format!("Select {} version", component.label()),
            Self::Generate => "Use defaults and generate docker-compose.yml".to_string(),
            Self::Build => "Build Docker image".to_string(),
            Self::Compose(ComposeAction::Up) => "Start services (docker-compose up)".to_string(),
            Self::Compose(ComposeAction::Down) => {
                "Stop services (docker-compose down)".to_string()
            }
            Self::Compose(ComposeAction::Logs) => "View logs".to_string(),
            Self::Exit => "Exit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_number() {
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            assert_eq!(MenuAction::from_choice(&(i + 1).to_string()), Some(*action));
        }
    }

    #[test]
    fn menu_order_matches_numbers() {
        assert_eq!(
            MenuAction::from_choice("1"),
            Some(MenuAction::Select(Component::Gns3Server))
        );
        assert_eq!(
            MenuAction::from_choice("2"),
            Some(MenuAction::Select(Component::Qemu))
        );
        assert_eq!(
            MenuAction::from_choice("7"),
            Some(MenuAction::Compose(ComposeAction::Logs))
        );
        assert_eq!(MenuAction::from_choice("8"), Some(MenuAction::Exit));
    }

    #[test]
    fn rejects_other_input() {
        for bad in ["0", "9", "", "q", "one", "-1", "1.0"] {
            assert_eq!(MenuAction::from_choice(bad), None, "input {:?}", bad);
        }
    }

    #[test]
    fn labels_name_components() {
        assert_eq!(
            MenuAction::Select(Component::Qemu).label(),
            "Select QEMU version"
        );
        assert_eq!(
            MenuAction::Select(Component::Gns3Server).label(),
            "Select GNS3 Server version"
        );
    }
}
