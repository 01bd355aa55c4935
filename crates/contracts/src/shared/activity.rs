//! Static feed of the right-hand panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Bug,
    User,
    Broadcast,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Bug => "bug",
            NotificationKind::User => "user",
            NotificationKind::Broadcast => "broadcast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub avatar: &'static str,
    pub text: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub avatar: &'static str,
}

pub const NOTIFICATIONS: &[Notification] = &[
    Notification { kind: NotificationKind::Bug, text: "You have a bug that needs...", time: "Just now" },
    Notification { kind: NotificationKind::User, text: "New user registered", time: "59 minutes ago" },
    Notification { kind: NotificationKind::Bug, text: "You have a bug that needs...", time: "12 hours ago" },
    Notification { kind: NotificationKind::Broadcast, text: "Andi Lane subscribed to you", time: "Today, 11:59 AM" },
];

pub const ACTIVITIES: &[Activity] = &[
    Activity { avatar: "/users/user1.png", text: "You have a bug that needs...", time: "Just now" },
    Activity { avatar: "/users/user2.png", text: "Released a new version", time: "59 minutes ago" },
    Activity { avatar: "/users/user3.png", text: "Submitted a bug", time: "12 hours ago" },
    Activity { avatar: "/users/user4.png", text: "Modified A data in Page X", time: "Today, 11:59 AM" },
    Activity { avatar: "/users/user5.png", text: "Deleted a page in Project X", time: "Feb 2, 2023" },
];

pub const CONTACTS: &[Contact] = &[
    Contact { name: "Natali Craig", avatar: "/users/user6.png" },
    Contact { name: "Drew Cano", avatar: "/users/user7.png" },
    Contact { name: "Orlando Diggs", avatar: "/users/user8.png" },
    Contact { name: "Andi Lane", avatar: "/users/user9.png" },
    Contact { name: "Kate Morrison", avatar: "/users/user1.png" },
    Contact { name: "Koray Okumus", avatar: "/users/user2.png" },
];

/// Two-letter initials used when an avatar image is missing.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Natali Craig"), "NC");
        assert_eq!(initials("koray okumus"), "KO");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("  "), "");
        assert_eq!(initials("Mary Ann Smith"), "MA");
    }

    #[test]
    fn test_feeds_are_populated() {
        assert_eq!(NOTIFICATIONS.len(), 4);
        assert_eq!(ACTIVITIES.len(), 5);
        assert_eq!(CONTACTS.len(), 6);
        assert_eq!(NOTIFICATIONS[3].kind.icon(), "broadcast");
    }
}
