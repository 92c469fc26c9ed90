//! Message handling for the campaigns page.

use common::metrics::dates::sort_newest_first;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::{show_error, show_toast};

use super::messages::Msg;
use super::state::CampaignsPage;

/// Applies `msg` to `page`. Returns whether the view must re-render.
pub fn update(page: &mut CampaignsPage, ctx: &Context<CampaignsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            page.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_campaigns().await.map_err(|e| e.to_string());
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(Ok(mut campaigns)) => {
            sort_newest_first(&mut campaigns);
            if let Some(expanded) = &page.expanded {
                if !campaigns.iter().any(|c| &c.id == expanded) {
                    page.expanded = None;
                }
            }
            page.campaigns = campaigns;
            page.loading = false;
            page.load_error = None;
            true
        }
        Msg::Loaded(Err(err)) => {
            page.loading = false;
            if page.campaigns.is_empty() {
                page.load_error = Some(err.clone());
            }
            show_error(&format!("Could not load campaigns: {}", err));
            true
        }
        Msg::Toggle(id) => {
            if page.expanded.as_ref() == Some(&id) {
                page.expanded = None;
            } else {
                page.expanded = Some(id);
                page.filter = Default::default();
                page.order = Default::default();
            }
            true
        }
        Msg::SetFilter(filter) => {
            if page.filter == filter {
                return false;
            }
            page.filter = filter;
            true
        }
        Msg::SetOrder(order) => {
            if page.order == order {
                return false;
            }
            page.order = order;
            true
        }
        Msg::RequestDelete(id) => {
            page.pending_delete = Some(id);
            true
        }
        Msg::CancelDelete => {
            if page.deleting {
                return false;
            }
            page.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = page.pending_delete.clone() else {
                return false;
            };
            if page.deleting {
                return false;
            }
            page.deleting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_campaign(&id)
                    .await
                    .map(|_| id)
                    .map_err(|e| e.to_string());
                link.send_message(Msg::Deleted(result));
            });
            true
        }
        Msg::Deleted(Ok(id)) => {
            page.deleting = false;
            page.pending_delete = None;
            if page.expanded.as_ref() == Some(&id) {
                page.expanded = None;
            }
            show_toast("Campaign deleted.");
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Deleted(Err(err)) => {
            page.deleting = false;
            page.pending_delete = None;
            show_error(&format!("Could not delete campaign: {}", err));
            true
        }
    }
}
