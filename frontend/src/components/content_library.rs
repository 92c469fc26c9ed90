//! Generated content library: every piece of copy the generators
//! produced, searchable, with a rendered markdown preview.

use common::metrics::dates::sort_newest_first;
use common::metrics::time_ago::time_ago_now;
use common::model::generated::{search_generated, GeneratedContent};
use common::model::record_id::RecordId;
use pulldown_cmark::{html, Event, Parser};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::show_error;

pub enum Msg {
    Load,
    Loaded(Result<Vec<GeneratedContent>, String>),
    Search(String),
    Select(RecordId),
}

pub struct ContentLibrary {
    items: Vec<GeneratedContent>,
    loading: bool,
    load_error: Option<String>,
    query: String,
    selected: Option<RecordId>,
}

impl Component for ContentLibrary {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            items: Vec::new(),
            loading: false,
            load_error: None,
            query: String::new(),
            selected: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::fetch_generated_content().await.map_err(|e| e.to_string());
                    link.send_message(Msg::Loaded(result));
                });
                true
            }
            Msg::Loaded(Ok(mut items)) => {
                sort_newest_first(&mut items);
                if let Some(selected) = &self.selected {
                    if !items.iter().any(|item| &item.id == selected) {
                        self.selected = None;
                    }
                }
                self.items = items;
                self.loading = false;
                self.load_error = None;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                self.load_error = Some(err.clone());
                show_error(&format!("Could not load content: {}", err));
                true
            }
            Msg::Search(query) => {
                self.query = query;
                true
            }
            Msg::Select(id) => {
                if self.selected.as_ref() == Some(&id) {
                    self.selected = None;
                } else {
                    self.selected = Some(id);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let results = search_generated(&self.items, &self.query);
        let selected = self
            .selected
            .as_ref()
            .and_then(|id| self.items.iter().find(|item| &item.id == id));

        html! {
            <section class="page content-library-page">
                <header class="page-header">
                    <h1>{"Content library"}</h1>
                    <input
                        type="search"
                        class="search"
                        placeholder="Search content"
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </header>
                <div class="two-columns">
                    <div class="column">{ self.build_list(link, &results) }</div>
                    <div class="column">{ build_preview(selected) }</div>
                </div>
            </section>
        }
    }
}

impl ContentLibrary {
    fn build_list(&self, link: &Scope<Self>, results: &[&GeneratedContent]) -> Html {
        if self.loading && self.items.is_empty() {
            return html! { <p class="muted">{"Loading content…"}</p> };
        }
        if let Some(err) = &self.load_error {
            return html! { <p class="error">{ format!("Could not load content: {}", err) }</p> };
        }
        if results.is_empty() {
            let message = if self.items.is_empty() {
                "Nothing has been generated yet.".to_string()
            } else {
                format!("No content matches \"{}\".", self.query.trim())
            };
            return html! { <p class="muted">{ message }</p> };
        }

        html! {
            <ul class="content-list">
                { for results.iter().map(|item| {
                    let id = item.id.clone();
                    let kind = item.kind();
                    let active = self.selected.as_ref() == Some(&item.id);
                    html! {
                        <li
                            key={item.id.to_string()}
                            class={classes!("content-item", "clickable", active.then_some("active"))}
                            onclick={link.callback(move |_| Msg::Select(id.clone()))}
                        >
                            <i class="material-icons" title={kind.label()}>{ kind.icon() }</i>
                            <strong>{ item.heading() }</strong>
                            <span class="muted">
                                { item.created_at.as_deref().map(time_ago_now).unwrap_or_default() }
                            </span>
                        </li>
                    }
                }) }
            </ul>
        }
    }
}

fn build_preview(selected: Option<&GeneratedContent>) -> Html {
    let Some(item) = selected else {
        return html! { <div class="card"><p class="muted">{"Select an item to preview it."}</p></div> };
    };

    html! {
        <div class="card">
            <h2>{ item.heading() }</h2>
            <span class="badge">{ item.kind().label() }</span>
            <div class="markdown-preview">
                { Html::from_html_unchecked(AttrValue::from(markdown_to_html(&item.content))) }
            </div>
        </div>
    }
}

/// Renders markdown to HTML. Raw HTML in the source is emitted as text,
/// never as markup.
fn markdown_to_html(input: &str) -> String {
    let parser = Parser::new(input).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
