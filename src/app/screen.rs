// SPDX-License-Identifier: MPL-2.0
//! Application screens.

/// Top-level screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Course overview with module cards.
    #[default]
    Overview,
    /// A single module page, by module number.
    Module(u32),
    /// Application settings.
    Settings,
}

impl Screen {
    /// The open module number, if a module page is showing.
    #[must_use]
    pub fn module_number(self) -> Option<u32> {
        match self {
            Screen::Module(number) => Some(number),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_number_is_only_set_on_module_screens() {
        assert_eq!(Screen::Overview.module_number(), None);
        assert_eq!(Screen::Settings.module_number(), None);
        assert_eq!(Screen::Module(4).module_number(), Some(4));
    }
}
