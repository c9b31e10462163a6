use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// Ungated landing page with entry points into the three portals.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="min-h-screen bg-base-200 flex flex-col items-center justify-center gap-8 p-4">
            <div class="text-center">
                <h1 class="text-5xl font-bold">{"Festivia"}</h1>
                <p class="py-4 opacity-70">{"Book events. Create events. Run the show."}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 w-full max-w-3xl">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center">
                        <h2 class="card-title">{"Visitors"}</h2>
                        <p>{"Browse events and manage your bookings."}</p>
                        <Link<MainRoute> to={MainRoute::UserRoot} classes="btn btn-primary">
                            {"User portal"}
                        </Link<MainRoute>>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center">
                        <h2 class="card-title">{"Creators"}</h2>
                        <p>{"Publish events and track your sales."}</p>
                        <Link<MainRoute> to={MainRoute::CreatorRoot} classes="btn btn-secondary">
                            {"Creator portal"}
                        </Link<MainRoute>>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center">
                        <h2 class="card-title">{"Administrators"}</h2>
                        <p>{"Approvals, accounts, and platform health."}</p>
                        <Link<MainRoute> to={MainRoute::AdminRoot} classes="btn btn-outline">
                            {"Admin portal"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
