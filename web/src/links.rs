use types::Role;
use ui::Icon;

use crate::Route;

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationLink {
    pub label: &'static str,
    pub to: Route,
    pub icon: Icon,
    /// Shown on the role's home page cards.
    pub description: &'static str,
}

impl NavigationLink {
    pub fn path(&self) -> String {
        self.to.to_string()
    }

    pub fn is_active(&self, current: &Route) -> bool {
        &self.to == current
    }
}

static ADMIN_LINKS: [NavigationLink; 3] = [
    NavigationLink {
        label: "Overview",
        to: Route::AdminHome {},
        icon: Icon::Home,
        description: "Start page of the administration area.",
    },
    NavigationLink {
        label: "Dashboard",
        to: Route::AdDashboard {},
        icon: Icon::Chart,
        description: "Training totals, attendance and completion metrics.",
    },
    NavigationLink {
        label: "Programs",
        to: Route::AdminPrograms {},
        icon: Icon::Book,
        description: "Every program by status, with enrolment.",
    },
];

static TRAINER_LINKS: [NavigationLink; 3] = [
    NavigationLink {
        label: "Overview",
        to: Route::TrainerHome {},
        icon: Icon::Home,
        description: "Start page of the trainer area.",
    },
    NavigationLink {
        label: "My Programs",
        to: Route::TrainerPrograms {},
        icon: Icon::Book,
        description: "Programs you run and how full they are.",
    },
    NavigationLink {
        label: "Schedule",
        to: Route::Schedule {},
        icon: Icon::Calendar,
        description: "Upcoming training days. Reactivate suspended ones.",
    },
];

pub fn links_for(role: Role) -> &'static [NavigationLink] {
    match role {
        Role::Admin => &ADMIN_LINKS,
        Role::Trainer => &TRAINER_LINKS,
    }
}

pub fn active_link(role: Role, current: &Route) -> Option<&'static NavigationLink> {
    links_for(role).iter().find(|link| link.is_active(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_per_role() {
        for role in Role::ALL {
            let links = links_for(role);
            let paths: HashSet<String> = links.iter().map(NavigationLink::path).collect();
            assert_eq!(paths.len(), links.len(), "duplicate path for {role}");
        }
    }

    #[test]
    fn links_stay_inside_their_shell() {
        for role in Role::ALL {
            for link in links_for(role) {
                assert_eq!(link.to.shell(), Some(role), "{} leaves {role}", link.label);
            }
        }
    }

    #[test]
    fn first_link_is_the_role_home() {
        for role in Role::ALL {
            assert_eq!(links_for(role)[0].to, Route::home(role));
        }
    }

    #[test]
    fn exactly_one_link_is_active_on_each_linked_page() {
        for role in Role::ALL {
            for link in links_for(role) {
                let active = links_for(role)
                    .iter()
                    .filter(|l| l.is_active(&link.to))
                    .count();
                assert_eq!(active, 1);
                assert_eq!(active_link(role, &link.to), Some(link));
            }
        }
    }

    #[test]
    fn nothing_is_active_outside_the_shell() {
        let login = Route::Login {};
        assert!(Role::ALL.iter().all(|&r| active_link(r, &login).is_none()));
    }
}
