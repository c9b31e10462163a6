use festivia_shared::models::{CreatorSummary, PageQuery, Paged, Role, toggle_blocked};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::confirm;
use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::page_nav::PageNav;

/// Creator management: paginated creator accounts with approval status
/// and the same confirm-guarded block toggle as user management.
#[function_component(CreatorManagementPage)]
pub fn creator_management_page() -> Html {
    let creators = use_state(|| None::<Paged<CreatorSummary>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);

    {
        let creators = creators.clone();
        let error = error.clone();
        let page_value = *page;
        use_effect_with(page_value, move |&page| {
            spawn_local(async move {
                let query = PageQuery {
                    page,
                    ..PageQuery::default()
                };
                match FestiviaClient::shared(Role::Admin).creators(query).await {
                    Ok(payload) => creators.set(Some(payload)),
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
        let creators = creators.clone();
        let error = error.clone();
        Callback::from(move |creator_id: String| {
            if !confirm("Change this account's blocked status?") {
                return;
            }
            let creators = creators.clone();
            let error = error.clone();
            spawn_local(async move {
                match FestiviaClient::shared(Role::Admin)
                    .toggle_creator_block(&creator_id)
                    .await
                {
                    Ok(_) => {
                        if let Some(current) = &*creators {
                            let mut next = current.clone();
                            toggle_blocked(&mut next.items, &creator_id);
                            creators.set(Some(next));
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
    let Some(paged) = &*creators else {
        return html! { <Loading /> };
    };

    let rows = paged
        .items
        .iter()
        .map(|creator| {
            let onclick = {
                let on_toggle = on_toggle.clone();
                let creator_id = creator.id.clone();
                Callback::from(move |_: MouseEvent| on_toggle.emit(creator_id.clone()))
            };
            html! {
                <tr>
                    <td>{creator.name.clone()}</td>
                    <td>{creator.email.clone()}</td>
                    <td>{creator.status.to_string()}</td>
                    <td>
                        if creator.is_blocked {
                            <span class="badge badge-error">{"blocked"}</span>
                        } else {
                            <span class="badge badge-success">{"active"}</span>
                        }
                    </td>
                    <td>
                        <button class="btn btn-outline btn-xs" {onclick}>
                            {if creator.is_blocked { "Unblock" } else { "Block" }}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Creator management"}</h1>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Approval"}</th>
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
