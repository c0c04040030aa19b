use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, router::Route, store::user::UserState};

/// Renders the nested route only for logged in users, redirecting everyone
/// else to the login page.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_logged_in = user_store.read().user.is_some();
    let fetch_completed = user_store.read().fetched;

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Fetched without a session, render nothing while redirecting
    }
}
