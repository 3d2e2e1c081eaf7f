use std::fmt;

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Blog,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Blog,
        Section::Resume,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Activating a link always leaves the menu closed.
    pub fn navigate(&mut self, section: Section) -> String {
        self.close();
        section.href()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        let href = menu.navigate(Section::About);
        assert_eq!(href, "#about");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_while_closed_stays_closed() {
        let mut menu = MenuState::default();
        menu.navigate(Section::Contact);
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchors_unique() {
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.anchor()));
            assert_eq!(section.to_string(), section.anchor());
        }
        let mut anchors = Section::ALL.map(|s| s.anchor()).to_vec();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }
}
