use festivia_shared::models::{CreatorSummary, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::confirm;
use crate::api::FestiviaClient;
use crate::components::loading::Loading;

enum Verdict {
    Approve,
    Reject,
}

/// Creator accounts awaiting approval. Approving or rejecting removes
/// the entry from the local list once the server confirms.
#[function_component(ApprovalsPage)]
pub fn approvals_page() -> Html {
    let pending = use_state(|| None::<Vec<CreatorSummary>>);
    let error = use_state(|| None::<String>);

    {
        let pending = pending.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match FestiviaClient::shared(Role::Admin).pending_creators().await {
                    Ok(payload) => pending.set(Some(payload)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let decide = {
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |(creator_id, verdict): (String, Verdict)| {
            let prompt = match verdict {
                Verdict::Approve => "Approve this creator?",
                Verdict::Reject => "Reject this creator?",
            };
            if !confirm(prompt) {
                return;
            }
            let pending = pending.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = FestiviaClient::shared(Role::Admin);
                let result = match verdict {
                    Verdict::Approve => client.approve_creator(&creator_id).await,
                    Verdict::Reject => client.reject_creator(&creator_id).await,
                };
                match result {
                    Ok(()) => {
                        if let Some(current) = &*pending {
                            let next: Vec<CreatorSummary> = current
                                .iter()
                                .filter(|creator| creator.id != creator_id)
                                .cloned()
                                .collect();
                            pending.set(Some(next));
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
    let Some(pending_list) = &*pending else {
        return html! { <Loading /> };
    };

    let rows = pending_list
        .iter()
        .map(|creator| {
            let on_approve = {
                let decide = decide.clone();
                let id = creator.id.clone();
                Callback::from(move |_: MouseEvent| decide.emit((id.clone(), Verdict::Approve)))
            };
            let on_reject = {
                let decide = decide.clone();
                let id = creator.id.clone();
                Callback::from(move |_: MouseEvent| decide.emit((id.clone(), Verdict::Reject)))
            };
            html! {
                <tr>
                    <td>{creator.name.clone()}</td>
                    <td>{creator.email.clone()}</td>
                    <td class="flex gap-2">
                        <button class="btn btn-success btn-xs" onclick={on_approve}>
                            {"Approve"}
                        </button>
                        <button class="btn btn-error btn-xs" onclick={on_reject}>
                            {"Reject"}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Creator approvals"}</h1>
            if pending_list.is_empty() {
                <p class="opacity-70">{"Nothing awaiting review."}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Decision"}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
        </div>
    }
}
