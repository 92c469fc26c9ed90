use yew::{classes, html, Component, Context, Html};

use crate::components::campaigns::CampaignsPage;
use crate::components::content_library::ContentLibrary;
use crate::components::dashboard::Dashboard;
use crate::components::tone_analyses::ToneAnalysesPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Campaigns,
    ToneAnalyses,
    Content,
}

impl Page {
    const ALL: [Page; 4] = [Page::Dashboard, Page::Campaigns, Page::ToneAnalyses, Page::Content];

    fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Campaigns => "Campaigns",
            Page::ToneAnalyses => "Tone analysis",
            Page::Content => "Content",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Campaigns => "campaign",
            Page::ToneAnalyses => "graphic_eq",
            Page::Content => "library_books",
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

/// Shell with the navigation bar. Pages are mounted fresh on every
/// navigation, so each one refetches its data when shown.
pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Dashboard }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) if page != self.page => {
                self.page = page;
                true
            }
            Msg::Navigate(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <nav class="nav-bar">
                    <span class="brand">{"Brand Studio"}</span>
                    { for Page::ALL.into_iter().map(|page| html! {
                        <button
                            class={classes!("nav-btn", (page == self.page).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Navigate(page))}
                        >
                            <i class="material-icons">{ page.icon() }</i>
                            <span>{ page.label() }</span>
                        </button>
                    }) }
                </nav>
                <main>
                    {
                        match self.page {
                            Page::Dashboard => html! { <Dashboard /> },
                            Page::Campaigns => html! { <CampaignsPage /> },
                            Page::ToneAnalyses => html! { <ToneAnalysesPage /> },
                            Page::Content => html! { <ContentLibrary /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
