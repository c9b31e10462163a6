use festivia_shared::models::{PageQuery, Paged, Role, UserSummary, toggle_blocked};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::confirm;
use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::page_nav::PageNav;

/// User management: paginated accounts with a confirm-guarded block
/// toggle. On success only the matching row flips locally.
#[function_component(UsersManagementPage)]
pub fn users_management_page() -> Html {
    let users = use_state(|| None::<Paged<UserSummary>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);

    {
        let users = users.clone();
        let error = error.clone();
        let page_value = *page;
        use_effect_with(page_value, move |&page| {
            spawn_local(async move {
                let query = PageQuery {
                    page,
                    ..PageQuery::default()
                };
                match FestiviaClient::shared(Role::Admin).users(query).await {
                    Ok(payload) => users.set(Some(payload)),
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

    let on_toggle = {
        let users = users.clone();
        let error = error.clone();
        Callback::from(move |user_id: String| {
            if !confirm("Change this account's blocked status?") {
                return;
            }
            let users = users.clone();
            let error = error.clone();
            spawn_local(async move {
                match FestiviaClient::shared(Role::Admin)
                    .toggle_user_block(&user_id)
                    .await
                {
                    Ok(_) => {
                        if let Some(current) = &*users {
                            let mut next = current.clone();
                            toggle_blocked(&mut next.items, &user_id);
                            users.set(Some(next));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    if let Some(message) = &*error {
        return html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        };
    }
    let Some(paged) = &*users else {
        return html! { <Loading /> };
    };

    let rows = paged
        .items
        .iter()
        .map(|user| {
            let onclick = {
                let on_toggle = on_toggle.clone();
                let user_id = user.id.clone();
                Callback::from(move |_: MouseEvent| on_toggle.emit(user_id.clone()))
            };
            html! {
                <tr>
                    <td>{user.name.clone()}</td>
                    <td>{user.email.clone()}</td>
                    <td>
                        if user.is_blocked {
                            <span class="badge badge-error">{"blocked"}</span>
                        } else {
                            <span class="badge badge-success">{"active"}</span>
                        }
                    </td>
                    <td>
                        <button class="btn btn-outline btn-xs" {onclick}>
                            {if user.is_blocked { "Unblock" } else { "Block" }}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"User management"}</h1>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <PageNav page={paged.page} total_pages={paged.total_pages()} on_change={on_page_change} />
        </div>
    }
}
