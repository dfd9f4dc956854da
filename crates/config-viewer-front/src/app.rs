use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::components::Layout;
use crate::pages::ConfigViewer;
use crate::routes::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServerAppProps {
    pub url: AttrValue,
}

/// Same shell as [`App`] over an in-memory history, for rendering without a browser.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(&*props.url);

    html! {
        <Router history={history}>
            <AppShell />
        </Router>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    html! {
        <Layout>
            <Switch<Route> render={switch} />
        </Layout>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ConfigViewer /> },
        Route::NotFound => html! { <div class="container"><h2>{"404 - Page Not Found"}</h2></div> },
    }
}
