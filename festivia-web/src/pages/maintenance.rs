use yew::prelude::*;

/// Static notice shown instead of the routed application while the
/// maintenance flag is set.
#[function_component(MaintenancePage)]
pub fn maintenance_page() -> Html {
    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card max-w-md bg-base-100 shadow-lg">
                <div class="card-body text-center">
                    <h1 class="card-title justify-center text-2xl">{"Back soon"}</h1>
                    <p>{"Festivia is down for scheduled maintenance. Please check back shortly."}</p>
                </div>
            </div>
        </div>
    }
}
