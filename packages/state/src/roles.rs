//! Which admin sections each role may see.
//!
//! One table, consulted by the sidebar and by each section view.

use store::Role;

/// A navigable section of the admin panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Admins,
    Blogs,
    Projects,
    Messages,
    Comments,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Admins,
        Section::Blogs,
        Section::Projects,
        Section::Messages,
        Section::Comments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Admins => "Admins",
            Section::Blogs => "Blogs",
            Section::Projects => "Projects",
            Section::Messages => "Messages",
            Section::Comments => "Comments",
        }
    }
}

const EVERYONE: &[Role] = &[Role::SuperAdmin, Role::ContentManager, Role::MessageManager];
const CONTENT: &[Role] = &[Role::SuperAdmin, Role::ContentManager];
const INBOX: &[Role] = &[Role::SuperAdmin, Role::MessageManager];

const STANDARD: &[(Section, &[Role])] = &[
    (Section::Dashboard, EVERYONE),
    (Section::Admins, &[Role::SuperAdmin]),
    (Section::Blogs, CONTENT),
    (Section::Projects, CONTENT),
    (Section::Messages, INBOX),
    (Section::Comments, CONTENT),
];

/// Section → permitted roles.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityTable {
    entries: Vec<(Section, Vec<Role>)>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CapabilityTable {
    /// The table the panel ships with.
    pub fn standard() -> Self {
        Self::new(STANDARD.iter().map(|(s, roles)| (*s, roles.to_vec())))
    }

    pub fn new(entries: impl IntoIterator<Item = (Section, Vec<Role>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Sections absent from the table are permitted to nobody.
    pub fn permits(&self, role: Option<Role>, section: Section) -> bool {
        let Some(role) = role else {
            return false;
        };
        self.entries
            .iter()
            .any(|(s, roles)| *s == section && roles.contains(&role))
    }

    /// Visible sections in [`Section::ALL`] order.
    pub fn visible_sections(&self, role: Option<Role>) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.permits(role, *section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CapabilityTable::standard();
        assert_eq!(table.visible_sections(Some(Role::SuperAdmin)), Section::ALL.to_vec());
        assert_eq!(
            table.visible_sections(Some(Role::ContentManager)),
            vec![Section::Dashboard, Section::Blogs, Section::Projects, Section::Comments]
        );
        assert_eq!(
            table.visible_sections(Some(Role::MessageManager)),
            vec![Section::Dashboard, Section::Messages]
        );
    }

    #[test]
    fn test_missing_role_sees_nothing() {
        assert!(CapabilityTable::standard().visible_sections(None).is_empty());
    }

    #[test]
    fn test_role_absent_from_table_sees_nothing() {
        let table = CapabilityTable::new([
            (Section::Dashboard, vec![Role::SuperAdmin]),
            (Section::Messages, vec![Role::SuperAdmin, Role::MessageManager]),
        ]);
        assert!(table.visible_sections(Some(Role::ContentManager)).is_empty());
        assert!(!table.permits(Some(Role::ContentManager), Section::Blogs));
    }

    #[test]
    fn test_empty_table_fails_closed() {
        let table = CapabilityTable::new([]);
        for role in Role::ALL {
            assert!(table.visible_sections(Some(role)).is_empty());
        }
    }
}
