use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// Catch-all page for unknown paths.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card max-w-md bg-base-100 shadow-lg">
                <div class="card-body text-center">
                    <h1 class="card-title justify-center text-3xl">{"404"}</h1>
                    <p>{"That page does not exist."}</p>
                    <div class="card-actions justify-center mt-2">
                        <Link<MainRoute> to={MainRoute::Landing} classes="btn btn-primary">
                            {"Back to Festivia"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
