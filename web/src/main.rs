use dioxus::prelude::*;

#[cfg(feature = "server")]
mod config;
mod fixtures;
mod layout;
mod links;
mod views;

use layout::{AdminLayout, StaffLayout};
use types::Role;
use views::{
    AdDashboard, AdminHome, AdminPrograms, Login, NotFound, Schedule, TrainerHome,
    TrainerPrograms,
};

/// Every page of the console. Declaration order decides ties, so the
/// catch-all stays last.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminHome {},
            #[route("/dashboard")]
            AdDashboard {},
            #[route("/programs")]
            AdminPrograms {},
        #[end_layout]
    #[end_nest]
    #[nest("/trainer")]
        #[layout(StaffLayout)]
            #[route("/")]
            TrainerHome {},
            #[route("/programs")]
            TrainerPrograms {},
            #[route("/schedule")]
            Schedule {},
        #[end_layout]
    #[end_nest]
    #[redirect("/", || Route::Login {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn home(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminHome {},
            Role::Trainer => Route::TrainerHome {},
        }
    }

    /// The role shell this page is mounted in, if any.
    pub fn shell(&self) -> Option<Role> {
        match self {
            Route::Login {} | Route::NotFound { .. } => None,
            Route::AdminHome {} | Route::AdDashboard {} | Route::AdminPrograms {} => {
                Some(Role::Admin)
            }
            Route::TrainerHome {} | Route::TrainerPrograms {} | Route::Schedule {} => {
                Some(Role::Trainer)
            }
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        let config = match config::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
        config::init_tracing(&config);
        tracing::info!(?config, "starting TrainDesk");

        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "TrainDesk" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Shell;
    use dioxus::history::{History, MemoryHistory};
    use std::rc::Rc;

    fn route(path: &str) -> Route {
        path.parse()
            .unwrap_or_else(|_| panic!("{path} did not match any route"))
    }

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        path: String,
    }

    /// Mounts the real router at `path`.
    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        use_hook(|| {
            let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(&props.path));
            provide_context(history);
        });

        rsx! { Router::<Route> {} }
    }

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { path: path.into() });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    /// Number of mounted page components.
    fn pages(html: &str) -> usize {
        html.matches("class=\"page page-").count()
    }

    #[test]
    fn parses_declared_paths() {
        assert_eq!(route("/login"), Route::Login {});
        assert_eq!(route("/admin"), Route::AdminHome {});
        assert_eq!(route("/admin/dashboard"), Route::AdDashboard {});
        assert_eq!(route("/admin/programs"), Route::AdminPrograms {});
        assert_eq!(route("/trainer"), Route::TrainerHome {});
        assert_eq!(route("/trainer/programs"), Route::TrainerPrograms {});
        assert_eq!(route("/trainer/schedule"), Route::Schedule {});
    }

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(route("/"), Route::Login {});
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            route("/unknown/path"),
            Route::NotFound {
                segments: vec!["unknown".into(), "path".into()]
            }
        );
        assert!(matches!(route("/admin/unknown"), Route::NotFound { .. }));
        assert_eq!(route("/admin/unknown").shell(), None);
    }

    #[test]
    fn shells_are_selected_by_route() {
        assert_eq!(route("/login").shell(), None);
        assert_eq!(route("/admin/dashboard").shell(), Some(Role::Admin));
        assert_eq!(route("/trainer/schedule").shell(), Some(Role::Trainer));
        for role in Role::ALL {
            assert_eq!(Route::home(role).shell(), Some(role));
        }
    }

    #[test]
    fn login_has_no_chrome() {
        let html = render_at("/login");
        assert!(html.contains("page-login"));
        assert!(!html.contains("app-shell"));
        assert_eq!(pages(&html), 1);
    }

    #[test]
    fn admin_dashboard_mounts_inside_admin_shell() {
        let html = render_at("/admin/dashboard");
        assert_eq!(html.matches("app-shell").count(), 1);
        assert!(html.contains("shell-admin"));
        assert!(html.contains("page-ad-dashboard"));
        assert!(html.contains("Total Trainings"));
        assert_eq!(pages(&html), 1);
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn admin_root_mounts_the_index_child() {
        let html = render_at("/admin");
        assert!(html.contains("shell-admin"));
        assert!(html.contains("page-admin-home"));
        assert!(!html.contains("page-not-found"));
        assert_eq!(pages(&html), 1);
    }

    #[test]
    fn trainer_schedule_mounts_inside_staff_shell() {
        let html = render_at("/trainer/schedule");
        assert!(html.contains("shell-trainer"));
        assert!(html.contains("page-schedule"));
        assert!(!html.contains("modal-overlay"));
        assert_eq!(pages(&html), 1);
    }

    #[test]
    fn unknown_path_renders_not_found_without_chrome() {
        for path in ["/unknown/path", "/admin/unknown"] {
            let html = render_at(path);
            assert!(html.contains("page-not-found"), "{path}");
            assert!(!html.contains("app-shell"), "{path}");
            assert_eq!(pages(&html), 1);
        }
    }

    #[derive(Debug, Clone, Routable, PartialEq)]
    enum BareRoute {
        #[route("/")]
        BareShell {},
    }

    #[component]
    fn BareShell() -> Element {
        rsx! {
            Shell { role: Role::Trainer, current: Route::TrainerHome {} }
        }
    }

    #[test]
    fn shell_without_children_renders_chrome_only() {
        fn app() -> Element {
            rsx! { Router::<BareRoute> {} }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert!(html.contains("shell-trainer"));
        assert!(html.contains("main-content"));
        assert_eq!(pages(&html), 0);
        assert!(!html.contains("error-banner"));
    }
}
