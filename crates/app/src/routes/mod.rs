pub mod agent;
pub mod customer;
pub mod login;
pub mod manager;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::Destination;

use crate::session::Session;
use agent::AgentView;
use customer::CustomerView;
use login::Login;
use manager::ManagerView;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/agent")]
    AgentView {},
    #[route("/manager")]
    ManagerView {},
    #[route("/customer")]
    CustomerView {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::AgentView => Route::AgentView {},
            Destination::ManagerView => Route::ManagerView {},
            Destination::CustomerView => Route::CustomerView {},
        }
    }
}

/// Clear the session and return to the login page.
pub fn logout(mut session: Session) {
    session.sign_out();
    navigator().replace(Route::Login {});
}
