//! Rendering for the campaigns page.
//!
//! Each card is built from a `CampaignView`, so every blob field has
//! already been normalized by the time anything is rendered here.

use chrono::Utc;
use common::model::content::ContentItem;
use common::normalize::{ContentFilter, LogReporter};
use common::view::{CampaignView, ContentOrder};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::sheet::Sheet;
use crate::components::tone_grid::ToneGrid;

use super::messages::Msg;
use super::state::CampaignsPage;

pub fn view(page: &CampaignsPage, ctx: &Context<CampaignsPage>) -> Html {
    let link = ctx.link();
    let now = Utc::now();

    html! {
        <section class="page campaigns-page">
            <header class="page-header">
                <h1>{"Campaigns"}</h1>
                <button class="icon-btn" title="Refresh" disabled={page.loading} onclick={link.callback(|_| Msg::Load)}>
                    <i class="material-icons">{"refresh"}</i>
                </button>
            </header>
            { build_body(page, link, now) }
            { build_delete_sheet(page, link) }
        </section>
    }
}

fn build_body(page: &CampaignsPage, link: &Scope<CampaignsPage>, now: chrono::DateTime<Utc>) -> Html {
    if page.loading && page.campaigns.is_empty() {
        return html! { <p class="muted">{"Loading campaigns…"}</p> };
    }
    if let Some(err) = &page.load_error {
        return html! { <p class="error">{ format!("Could not load campaigns: {}", err) }</p> };
    }
    if page.campaigns.is_empty() {
        return html! {
            <p class="muted">{"No campaigns yet. Generate one from the content factory to see it here."}</p>
        };
    }

    html! {
        <ul class="campaign-list">
            { for page.campaigns.iter().map(|record| {
                let campaign = CampaignView::build(record, now, &LogReporter);
                let expanded = page.expanded.as_ref() == Some(&campaign.id);
                build_campaign_card(page, link, &campaign, expanded)
            }) }
        </ul>
    }
}

fn build_campaign_card(
    page: &CampaignsPage,
    link: &Scope<CampaignsPage>,
    campaign: &CampaignView,
    expanded: bool,
) -> Html {
    let toggle_id = campaign.id.clone();
    let delete_id = campaign.id.clone();
    let item_count = campaign.items.len();

    html! {
        <li class={classes!("campaign-card", expanded.then_some("expanded"))} key={campaign.id.to_string()}>
            <div class="campaign-card-header" onclick={link.callback(move |_| Msg::Toggle(toggle_id.clone()))}>
                <div>
                    <h2>{ campaign.name.clone() }</h2>
                    <span class="muted">
                        { format!("{} · {} · created {}", campaign.duration, plural_items(item_count), campaign.created) }
                    </span>
                </div>
                <div class="campaign-card-actions">
                    <button
                        class="icon-btn danger"
                        title="Delete campaign"
                        onclick={link.callback(move |e: MouseEvent| {
                            e.stop_propagation();
                            Msg::RequestDelete(delete_id.clone())
                        })}
                    >
                        <i class="material-icons">{"delete"}</i>
                    </button>
                    <i class="material-icons">{ if expanded { "expand_less" } else { "expand_more" } }</i>
                </div>
            </div>
            {
                if expanded {
                    build_campaign_details(page, link, campaign)
                } else {
                    html! {}
                }
            }
        </li>
    }
}

fn build_campaign_details(page: &CampaignsPage, link: &Scope<CampaignsPage>, campaign: &CampaignView) -> Html {
    html! {
        <div class="campaign-details">
            {
                if campaign.objective.trim().is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="detail-block">
                            <h3>{"Objective"}</h3>
                            <p>{ campaign.objective.clone() }</p>
                        </div>
                    }
                }
            }
            <div class="detail-block detail-columns">
                { build_chip_list("Target audience", &campaign.target_audience) }
                { build_chip_list("Channels", &campaign.channels) }
            </div>
            { build_metadata(campaign) }
            <div class="detail-block">
                <h3>{"Tone profile"}</h3>
                <ToneGrid profile={campaign.tone.clone()} />
            </div>
            <div class="detail-block">
                <h3>{ format!("Content ({} scheduled of {})", campaign.scheduled_count(), campaign.items.len()) }</h3>
                { build_content_toolbar(page, link) }
                { build_content_list(page, campaign) }
            </div>
        </div>
    }
}

fn build_chip_list(title: &'static str, values: &[String]) -> Html {
    html! {
        <div>
            <h3>{ title }</h3>
            {
                if values.is_empty() {
                    html! { <span class="muted">{"None specified"}</span> }
                } else {
                    html! {
                        <div class="chips">
                            { for values.iter().map(|v| html! { <span class="chip">{ v.clone() }</span> }) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_metadata(campaign: &CampaignView) -> Html {
    let Some(metadata) = &campaign.metadata else {
        return html! {};
    };

    html! {
        <div class="detail-block campaign-metadata">
            {
                match &metadata.title {
                    Some(title) => html! { <h3>{ title.clone() }</h3> },
                    None => html! { <h3>{"Campaign brief"}</h3> },
                }
            }
            {
                match &metadata.boilerplate {
                    Some(text) => html! { <p class="boilerplate">{ text.clone() }</p> },
                    None => html! {},
                }
            }
            {
                if metadata.objectives.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="objectives">
                            { for metadata.objectives.iter().map(|o| html! { <li>{ o.clone() }</li> }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_content_toolbar(page: &CampaignsPage, link: &Scope<CampaignsPage>) -> Html {
    let orders = [
        (ContentOrder::Stored, "List"),
        (ContentOrder::Chronological, "By date"),
        (ContentOrder::Timeline, "Timeline"),
    ];

    html! {
        <div class="content-toolbar">
            <div class="segmented" role="group" aria-label="Filter by type">
                { for ContentFilter::options().into_iter().map(|filter| {
                    let active = page.filter == filter;
                    let label = filter.label();
                    html! {
                        <button
                            class={classes!("tab-btn", active.then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetFilter(filter.clone()))}
                        >
                            { label }
                        </button>
                    }
                }) }
            </div>
            <div class="segmented" role="group" aria-label="Order">
                { for orders.into_iter().map(|(order, label)| html! {
                    <button
                        class={classes!("tab-btn", (page.order == order).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetOrder(order))}
                    >
                        { label }
                    </button>
                }) }
            </div>
        </div>
    }
}

fn build_content_list(page: &CampaignsPage, campaign: &CampaignView) -> Html {
    let items = campaign.visible_items(&page.filter, page.order);
    if items.is_empty() {
        let message = match &page.filter {
            ContentFilter::All => "This campaign has no content yet.".to_string(),
            filter => format!("No {} content in this campaign.", filter.label().to_lowercase()),
        };
        return html! { <p class="muted">{ message }</p> };
    }

    html! {
        <ol class={classes!("content-list", (page.order == ContentOrder::Timeline).then_some("timeline"))}>
            { for items.iter().enumerate().map(|(index, item)| build_content_item(index, item)) }
        </ol>
    }
}

fn build_content_item(index: usize, item: &ContentItem) -> Html {
    html! {
        <li class="content-item" key={item.list_key(index)}>
            <div class="content-item-header">
                <i class="material-icons" title={item.kind.label()}>{ item.kind.icon() }</i>
                <strong>{ item.display_title() }</strong>
                <span class={classes!("badge", (!item.is_scheduled()).then_some("badge-muted"))}>
                    { item.delivery_label() }
                </span>
            </div>
            <div class="content-item-meta muted">
                { format!("For {}", item.persona_label()) }
                {
                    match &item.channel {
                        Some(channel) => html! { <span>{ format!(" · {}", channel) }</span> },
                        None => html! {},
                    }
                }
            </div>
            {
                if item.body().is_empty() {
                    html! {}
                } else {
                    html! { <p class="content-item-body">{ item.body().to_string() }</p> }
                }
            }
        </li>
    }
}

fn build_delete_sheet(page: &CampaignsPage, link: &Scope<CampaignsPage>) -> Html {
    let name = page
        .pending_delete
        .as_ref()
        .and_then(|id| page.find(id))
        .map(|c| c.name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "this campaign".to_string());

    html! {
        <Sheet
            open={page.pending_delete.is_some()}
            title="Delete campaign?"
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <p>{ format!("\"{}\" and all of its generated content will be permanently deleted.", name) }</p>
            <div class="sheet-actions">
                <button class="btn" disabled={page.deleting} onclick={link.callback(|_| Msg::CancelDelete)}>
                    {"Cancel"}
                </button>
                <button class="btn danger" disabled={page.deleting} onclick={link.callback(|_| Msg::ConfirmDelete)}>
                    { if page.deleting { "Deleting…" } else { "Delete" } }
                </button>
            </div>
        </Sheet>
    }
}

fn plural_items(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
