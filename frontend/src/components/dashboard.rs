//! Landing page: record counts across the studio and the latest campaigns.
//!
//! The four lists are fetched independently; each tile fills in as its
//! own response arrives and a failing endpoint only blanks its own tile.

use common::metrics::dates::sort_newest_first;
use common::metrics::time_ago::time_ago_now;
use common::model::campaign::CampaignRecord;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::DASHBOARD_RECENT_LIMIT;
use crate::toast::show_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Count {
    Loading,
    Ready(usize),
    Failed,
}

impl Count {
    fn from_result(result: &Result<usize, String>) -> Self {
        match result {
            Ok(n) => Count::Ready(*n),
            Err(_) => Count::Failed,
        }
    }

    fn display(self) -> String {
        match self {
            Count::Loading => "…".to_string(),
            Count::Ready(n) => n.to_formatted_string(&Locale::en),
            Count::Failed => "n/a".to_string(),
        }
    }
}

pub enum Msg {
    Personas(Result<usize, String>),
    Content(Result<usize, String>),
    LegacyCampaigns(Result<usize, String>),
    Campaigns(Result<Vec<CampaignRecord>, String>),
}

pub struct Dashboard {
    personas: Count,
    content: Count,
    legacy_campaigns: Count,
    campaigns: Count,
    recent: Vec<CampaignRecord>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::fetch_personas().await.map(|v| v.len()).map_err(|e| e.to_string());
            link.send_message(Msg::Personas(result));
        });
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::fetch_generated_content()
                .await
                .map(|v| v.len())
                .map_err(|e| e.to_string());
            link.send_message(Msg::Content(result));
        });
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::fetch_legacy_campaigns()
                .await
                .map(|v| v.len())
                .map_err(|e| e.to_string());
            link.send_message(Msg::LegacyCampaigns(result));
        });
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::fetch_campaigns().await.map_err(|e| e.to_string());
            link.send_message(Msg::Campaigns(result));
        });

        Self {
            personas: Count::Loading,
            content: Count::Loading,
            legacy_campaigns: Count::Loading,
            campaigns: Count::Loading,
            recent: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let (slot, label, result) = match msg {
            Msg::Personas(result) => (&mut self.personas, "personas", result),
            Msg::Content(result) => (&mut self.content, "content", result),
            Msg::LegacyCampaigns(result) => (&mut self.legacy_campaigns, "campaigns", result),
            Msg::Campaigns(Ok(mut campaigns)) => {
                self.campaigns = Count::Ready(campaigns.len());
                sort_newest_first(&mut campaigns);
                campaigns.truncate(DASHBOARD_RECENT_LIMIT);
                self.recent = campaigns;
                return true;
            }
            Msg::Campaigns(Err(err)) => (&mut self.campaigns, "factory campaigns", Err(err)),
        };
        *slot = Count::from_result(&result);
        if let Err(err) = result {
            show_error(&format!("Could not load {}: {}", label, err));
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page dashboard-page">
                <header class="page-header">
                    <h1>{"Dashboard"}</h1>
                </header>
                <div class="stat-grid">
                    { stat_tile("groups", "Personas", self.personas) }
                    { stat_tile("description", "Generated content", self.content) }
                    { stat_tile("campaign", "Campaigns", self.legacy_campaigns) }
                    { stat_tile("auto_awesome", "Factory campaigns", self.campaigns) }
                </div>
                <div class="card">
                    <h2>{"Recent campaigns"}</h2>
                    { self.build_recent() }
                </div>
            </section>
        }
    }
}

impl Dashboard {
    fn build_recent(&self) -> Html {
        match self.campaigns {
            Count::Loading => return html! { <p class="muted">{"Loading…"}</p> },
            Count::Failed => return html! { <p class="muted">{"Campaigns are unavailable right now."}</p> },
            Count::Ready(0) => return html! { <p class="muted">{"No campaigns yet."}</p> },
            Count::Ready(_) => {}
        }

        html! {
            <ul class="recent-list">
                { for self.recent.iter().map(|campaign| {
                    let name = if campaign.name.trim().is_empty() {
                        "Untitled campaign".to_string()
                    } else {
                        campaign.name.clone()
                    };
                    html! {
                        <li key={campaign.id.to_string()}>
                            <span>{ name }</span>
                            <span class="muted">
                                { campaign.created_at.as_deref().map(time_ago_now).unwrap_or_default() }
                            </span>
                        </li>
                    }
                }) }
            </ul>
        }
    }
}

fn stat_tile(icon: &'static str, label: &'static str, count: Count) -> Html {
    html! {
        <div class={classes!("stat-tile", (count == Count::Failed).then_some("failed"))}>
            <i class="material-icons">{ icon }</i>
            <div class="stat-value">{ count.display() }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}
