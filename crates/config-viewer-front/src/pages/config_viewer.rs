use yew::prelude::*;

use crate::api::{load_config, ConfigSource, HttpConfigSource};
use crate::components::{ErrorMessage, Panel};
use crate::models::DisplayState;
use crate::utils::Liveness;

pub const F5_LOGO: &str = "/assets/f5_logo.svg";
pub const ENGINE_LOGO: &str = "/assets/engine_logo.svg";
pub const LOGO_ALT: &str = "F5 logo";

/// Shows the F5 configuration from `/api/f5Config` next to the (not yet
/// wired) operation results.
#[function_component(ConfigViewer)]
pub fn config_viewer() -> Html {
    html! { <ConfigViewerWith<HttpConfigSource> source={HttpConfigSource} /> }
}

#[derive(Properties, PartialEq)]
pub struct ConfigViewerWithProps<S: PartialEq> {
    pub source: S,
}

/// Fetches from `source` exactly once per mount. Unmounting aborts the
/// request and any late result is dropped.
#[function_component(ConfigViewerWith)]
pub fn config_viewer_with<S>(props: &ConfigViewerWithProps<S>) -> Html
where
    S: ConfigSource + Clone + PartialEq + 'static,
{
    let display_state = use_state(DisplayState::default);

    {
        let display_state = display_state.clone();
        let source = props.source.clone();
        use_effect_with((), move |_| {
            let liveness = Liveness::new();
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());

            {
                let liveness = liveness.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(next) = load_config(&source, signal.as_ref(), &liveness).await {
                        display_state.set(next);
                    }
                });
            }

            move || {
                liveness.end();
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    html! {
        <>
            { if let Some(reason) = display_state.error() {
                html! { <ErrorMessage message={reason.to_string()} /> }
            } else {
                html! {}
            }}

            <div class="container bg-dark contents">
                <Panel logo={F5_LOGO} alt={LOGO_ALT}>
                    <textarea
                        class="form-control"
                        readonly={true}
                        value={display_state.config_text().to_string()}
                    />
                </Panel>

                <Panel logo={ENGINE_LOGO} alt={LOGO_ALT}>
                    <textarea
                        class="form-control"
                        readonly={true}
                        value={display_state.results_text()}
                    />
                </Panel>
            </div>
        </>
    }
}
