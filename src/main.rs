mod backend;
mod components;

use backend::config::Config;
use backend::{AppCmd, AppEvent, Backend};
use components::hooks::use_form_factor_detection;
use components::pages::{AddLiquidity, CreatePool, FindPool, NotFound, Pool, RemoveLiquidity, Swap};
use components::shell::Shell;
use components::AppState;

use dioxus::prelude::*;
use tokio::sync::mpsc;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Swap {})]
        #[route("/swap")]
        Swap {},
        #[route("/pool")]
        Pool {},
        #[route("/add/:..segments")]
        AddLiquidity { segments: Vec<String> },
        #[route("/remove/:..segments")]
        RemoveLiquidity { segments: Vec<String> },
        #[route("/create/:..segments")]
        CreatePool { segments: Vec<String> },
        #[route("/find")]
        FindPool {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt::try_init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

        let mut backend = Backend::new(Config::from_env(), cmd_rx, event_tx);
        spawn(async move {
            backend.run().await;
        });

        let mut app_state = app_state;
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                app_state.apply(event);
            }
        });

        cmd_tx
    });
    use_context_provider(|| cmd_tx.clone());

    use_form_factor_detection();

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
