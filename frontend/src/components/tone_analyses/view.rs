//! Rendering for the tone analyses page.

use chrono::Utc;
use common::metrics::time_ago::time_ago_opt;
use common::model::tone_analysis::ToneAnalysisRecord;
use common::normalize::LogReporter;
use common::view::ToneAnalysisView;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::sheet::Sheet;

use super::messages::Msg;
use super::state::ToneAnalysesPage;

pub fn view(page: &ToneAnalysesPage, ctx: &Context<ToneAnalysesPage>) -> Html {
    let link = ctx.link();

    html! {
        <section class="page tone-analyses-page">
            <header class="page-header">
                <h1>{"Tone analysis"}</h1>
            </header>
            <div class="two-columns">
                <div class="column">
                    { build_form(page, link) }
                    { build_history(page, link) }
                </div>
                <div class="column">
                    { build_detail(page, link) }
                </div>
            </div>
            { build_rename_sheet(page, link) }
        </section>
    }
}

fn build_form(page: &ToneAnalysesPage, link: &Scope<ToneAnalysesPage>) -> Html {
    let form = &page.form;
    let has_url = !form.website_url.trim().is_empty();
    let has_sample = !form.sample_text.trim().is_empty();

    html! {
        <form
            class="card analysis-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <h2>{"New analysis"}</h2>
            <label for="analysis-url">{"Website URL"}</label>
            <input
                id="analysis-url"
                type="url"
                placeholder="https://example.com"
                value={form.website_url.clone()}
                disabled={page.submitting || has_sample}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <div class="muted separator">{"or"}</div>
            <label for="analysis-sample">{"Text sample"}</label>
            <textarea
                id="analysis-sample"
                rows="6"
                placeholder="Paste a few paragraphs of your brand's writing"
                value={form.sample_text.clone()}
                disabled={page.submitting || has_url}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSample(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            <label for="analysis-name">{"Name (optional)"}</label>
            <input
                id="analysis-name"
                type="text"
                value={form.name.clone()}
                disabled={page.submitting}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button type="submit" class="btn primary" disabled={page.submitting}>
                { if page.submitting { "Analyzing…" } else { "Analyze tone" } }
            </button>
        </form>
    }
}

fn build_history(page: &ToneAnalysesPage, link: &Scope<ToneAnalysesPage>) -> Html {
    let body = if page.loading && page.analyses.is_empty() {
        html! { <p class="muted">{"Loading history…"}</p> }
    } else if let Some(err) = &page.load_error {
        html! { <p class="error">{ format!("Could not load history: {}", err) }</p> }
    } else if page.analyses.is_empty() {
        html! { <p class="muted">{"No analyses yet."}</p> }
    } else {
        let now = Utc::now();
        html! {
            <ul class="history-list">
                { for page.analyses.iter().map(|record| build_history_row(page, link, record, now)) }
            </ul>
        }
    };

    html! {
        <div class="card">
            <h2>{"History"}</h2>
            { body }
        </div>
    }
}

fn build_history_row(
    page: &ToneAnalysesPage,
    link: &Scope<ToneAnalysesPage>,
    record: &ToneAnalysisRecord,
    now: chrono::DateTime<Utc>,
) -> Html {
    let id = record.id.clone();
    let active = page.selected_id() == Some(&record.id);
    let pending = page.selection.is_pending(&record.id);

    html! {
        <li
            key={record.id.to_string()}
            class={classes!("history-row", active.then_some("active"), pending.then_some("pending"))}
            onclick={link.callback(move |_| Msg::Select(id.clone()))}
        >
            <i class="material-icons">{ if record.is_website() { "language" } else { "notes" } }</i>
            <span class="history-title">{ record.source_label() }</span>
            <span class="muted">{ time_ago_opt(record.created_at.as_deref(), now) }</span>
        </li>
    }
}

fn build_detail(page: &ToneAnalysesPage, link: &Scope<ToneAnalysesPage>) -> Html {
    let Some(record) = &page.selected else {
        let hint = if page.selection.pending().is_some() {
            "Loading analysis…"
        } else {
            "Select an analysis to see its results."
        };
        return html! { <div class="card"><p class="muted">{ hint }</p></div> };
    };

    let analysis = ToneAnalysisView::build(record, Utc::now(), &LogReporter);
    let results = &analysis.results;

    html! {
        <div class="card analysis-detail">
            <div class="detail-header">
                <div>
                    <h2>{ analysis.title.clone() }</h2>
                    <span class="muted">
                        { format!("{} · {}", if analysis.is_website { "Website" } else { "Text sample" }, analysis.created) }
                    </span>
                </div>
                <div>
                    <button class="icon-btn" title="Rename" onclick={link.callback(|_| Msg::OpenRename)}>
                        <i class="material-icons">{"edit"}</i>
                    </button>
                    <button class="icon-btn" title="Close" onclick={link.callback(|_| Msg::CloseDetail)}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
            </div>

            {
                match &results.summary {
                    Some(summary) => html! { <p class="summary">{ summary.clone() }</p> },
                    None => html! {},
                }
            }

            <h3>{"Characteristics"}</h3>
            {
                if results.characteristics.is_empty() {
                    html! { <p class="muted">{"No characteristics were detected."}</p> }
                } else {
                    html! {
                        <ul class="characteristics">
                            { for analysis.characteristics().into_iter().map(|c| html! {
                                <li key={c.name.clone()}>
                                    <span class="characteristic-name">{ c.name.clone() }</span>
                                    <div class="tone-bar">
                                        <div class="tone-bar-fill" style={format!("width: {}%;", c.intensity)} />
                                    </div>
                                    <span class="muted">{ format!("{}%", c.intensity) }</span>
                                    <span class={classes!("badge", c.level.css_class())}>{ c.level.label() }</span>
                                </li>
                            }) }
                        </ul>
                    }
                }
            }

            {
                if results.language_patterns.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Language patterns"}</h3>
                            { build_phrases("Common phrases", &results.language_patterns.common_phrases) }
                            { for results.language_patterns.other.iter().map(|(name, values)| {
                                build_phrases(&common::text::capitalize(&name.replace('_', " ")), values)
                            }) }
                        </>
                    }
                }
            }

            {
                if results.recommended_content_types.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Recommended content"}</h3>
                            <div class="chips">
                                { for results.recommended_content_types.iter().map(|t| html! {
                                    <span class="chip">{ t.clone() }</span>
                                }) }
                            </div>
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_phrases(title: &str, phrases: &[String]) -> Html {
    if phrases.is_empty() {
        return html! {};
    }
    html! {
        <div class="phrases">
            <h4>{ title.to_string() }</h4>
            <ul>
                { for phrases.iter().map(|p| html! { <li>{ format!("\u{201c}{}\u{201d}", p) }</li> }) }
            </ul>
        </div>
    }
}

fn build_rename_sheet(page: &ToneAnalysesPage, link: &Scope<ToneAnalysesPage>) -> Html {
    let value = page
        .rename
        .as_ref()
        .map(|draft| draft.current().clone())
        .unwrap_or_default();
    let dirty = page.rename.as_ref().is_some_and(|draft| draft.is_dirty());

    html! {
        <Sheet
            open={page.rename.is_some()}
            title="Rename analysis"
            on_close={link.callback(|_| Msg::CancelRename)}
        >
            <input
                type="text"
                class="full-width"
                value={value}
                disabled={page.renaming}
                oninput={link.callback(|e: InputEvent| {
                    Msg::EditRename(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    match e.key().as_str() {
                        "Enter" => Some(Msg::SaveRename),
                        "Escape" => Some(Msg::CancelRename),
                        _ => None,
                    }
                })}
            />
            <div class="sheet-actions">
                <button class="btn" disabled={page.renaming} onclick={link.callback(|_| Msg::CancelRename)}>
                    {"Cancel"}
                </button>
                <button class="btn primary" disabled={page.renaming || !dirty} onclick={link.callback(|_| Msg::SaveRename)}>
                    { if page.renaming { "Saving…" } else { "Save" } }
                </button>
            </div>
        </Sheet>
    }
}
