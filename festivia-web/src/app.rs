use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::YewduxRoot;

use crate::config::FrontendConfig;
use crate::pages::MaintenancePage;
use crate::routes::{MainRoute, switch_main};

#[function_component(App)]
pub fn app() -> Html {
    let config = FrontendConfig::default();

    // The maintenance switch short-circuits the whole application
    // before any routing occurs.
    if config.maintenance_mode {
        return html! { <MaintenancePage /> };
    }

    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Switch<MainRoute> render={switch_main} />
            </BrowserRouter>
        </YewduxRoot>
    }
}
