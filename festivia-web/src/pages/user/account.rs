use festivia_shared::models::{BookingStatus, BookingSummary, PageQuery, Paged, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::page_nav::PageNav;
use crate::session::{SessionState, UserScope};

/// Account page: the signed-in profile plus paginated booking history.
#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let session = use_store_value::<SessionState<UserScope>>();
    let bookings = use_state(|| None::<Paged<BookingSummary>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);

    {
        let bookings = bookings.clone();
        let error = error.clone();
        let page_value = *page;
        use_effect_with(page_value, move |&page| {
            spawn_local(async move {
                let query = PageQuery {
                    page,
                    ..PageQuery::default()
                };
                match FestiviaClient::shared(Role::User).bookings(query).await {
                    Ok(payload) => bookings.set(Some(payload)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let profile_block = match session.profile() {
        Some(profile) => html! {
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{profile.name.clone()}</h2>
                    <p>{profile.email.clone()}</p>
                </div>
            </div>
        },
        // Token persisted but profile unreadable; the session is still
        // authenticated.
        None => html! {
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <p>{"Profile details are unavailable."}</p>
                </div>
            </div>
        },
    };

    let history = if let Some(message) = &*error {
        html! { <div class="alert alert-error"><span>{message.clone()}</span></div> }
    } else if let Some(paged) = &*bookings {
        let rows = paged.items.iter().map(booking_row).collect::<Html>();
        html! {
            <>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Event"}</th>
                            <th>{"Booked"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <PageNav page={paged.page} total_pages={paged.total_pages()} on_change={on_page_change} />
            </>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Account"}</h1>
            {profile_block}
            <h2 class="text-xl font-semibold">{"Booking history"}</h2>
            {history}
        </div>
    }
}

fn booking_row(booking: &BookingSummary) -> Html {
    let status = match booking.status {
        BookingStatus::Confirmed => html! { <span class="badge badge-success">{"confirmed"}</span> },
        BookingStatus::Cancelled => html! { <span class="badge badge-ghost">{"cancelled"}</span> },
    };
    html! {
        <tr>
            <td>{booking.event_title.clone()}</td>
            <td>{booking.booked_at.format("%Y-%m-%d").to_string()}</td>
            <td>{format!("{:.2}", booking.amount)}</td>
            <td>{status}</td>
        </tr>
    }
}
