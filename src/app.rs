/// Main application entry point for Book Reviews.
/// Owns the controller and lays out the auth section, the main section and
/// the overlays (dialog, toast).
use std::future::Future;
use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::HttpApi;
use crate::components::{
    auth_forms::AuthSection, message_toast::MessageToast, nav_bar::NavBar,
    review_dialog::ReviewDialog, review_filters::ReviewFilters, review_form::ReviewForm,
    reviews_list::ReviewsList,
};
use crate::config::ClientConfig;
use crate::controller::Controller;
use crate::state::ClientState;
use crate::storage::BrowserStorage;

pub type AppController = Controller<HttpApi, BrowserStorage>;

pub fn use_controller() -> Rc<AppController> {
    expect_context::<Rc<AppController>>()
}

pub fn use_client_state() -> RwSignal<ClientState> {
    expect_context::<RwSignal<ClientState>>()
}

/// Runs a controller action on the browser's task queue.
pub fn dispatch<F, Fut>(controller: &Rc<AppController>, action: F)
where
    F: FnOnce(Rc<AppController>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(action(Rc::clone(controller)));
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bookreviews.css"/>
        <Title text="Book Reviews"/>
        <Router>
            <Routes>
                <Route path="" view=ReviewsPage/>
            </Routes>
        </Router>
    }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let controller = Rc::new(Controller::new(HttpApi::new(config.api_url.clone()), BrowserStorage));

    // Every controller change lands in this signal; the components read from it.
    let state = create_rw_signal(controller.snapshot());
    controller.subscribe(move |snapshot| state.set(snapshot.clone()));

    provide_context(Rc::clone(&controller));
    provide_context(state);
    provide_context(config);

    // Tracks nothing, so it runs once after mounting (and never on the server).
    create_effect(move |_| {
        dispatch(&controller, |c| async move {
            c.restore_session().await;
        });
    });

    let authenticated = move || state.with(|s| s.is_authenticated());

    view! {
        <NavBar/>
        <div class="container">
            <AuthSection/>
            <section
                id="mainSection"
                class="main-section"
                style:display=move || if authenticated() { "block" } else { "none" }
            >
                <ReviewForm/>
                <ReviewFilters/>
                <ReviewsList/>
            </section>
        </div>
        <ReviewDialog/>
        <MessageToast/>
    }
}
