//! Message handling for the tone analyses page.

use common::metrics::dates::sort_newest_first;
use common::model::draft::Draft;
use common::model::tone_analysis::ToneAnalysisRecord;
use common::requests::{CreateToneAnalysisRequest, RenameRequest};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::{show_error, show_toast};

use super::messages::Msg;
use super::state::ToneAnalysesPage;

pub fn update(page: &mut ToneAnalysesPage, ctx: &Context<ToneAnalysesPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            page.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_tone_analyses().await.map_err(|e| e.to_string());
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(Ok(mut analyses)) => {
            sort_newest_first(&mut analyses);
            page.loading = false;
            page.load_error = None;

            if let Some(selected) = page.selected.take() {
                match analyses.iter().find(|a| a.id == selected.id) {
                    Some(fresh) => {
                        let fresh = merge_listing(selected, fresh.clone());
                        if let Some(draft) = page.rename.as_mut() {
                            draft.rebase(fresh.name.clone().unwrap_or_default());
                        }
                        page.selected = Some(fresh);
                    }
                    None => page.rename = None,
                }
            }
            page.analyses = analyses;
            true
        }
        Msg::Loaded(Err(err)) => {
            page.loading = false;
            if page.analyses.is_empty() {
                page.load_error = Some(err.clone());
            }
            show_error(&format!("Could not load tone analyses: {}", err));
            true
        }

        Msg::SetUrl(value) => {
            page.form.website_url = value;
            true
        }
        Msg::SetSample(value) => {
            page.form.sample_text = value;
            true
        }
        Msg::SetName(value) => {
            page.form.name = value;
            true
        }
        Msg::Submit => {
            if page.submitting {
                return false;
            }
            let form = &page.form;
            let request = match CreateToneAnalysisRequest::new(&form.website_url, &form.sample_text, &form.name) {
                Ok(request) => request,
                Err(err) => {
                    show_error(&err.to_string());
                    return false;
                }
            };
            page.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::create_tone_analysis(&request)
                    .await
                    .map_err(|e| e.to_string());
                link.send_message(Msg::Created(result));
            });
            true
        }
        Msg::Created(Ok(record)) => {
            page.submitting = false;
            page.form.clear();
            page.rename = None;
            page.selection.cancel();
            page.selected = Some(record);
            show_toast("Tone analysis complete.");
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Created(Err(err)) => {
            page.submitting = false;
            show_error(&format!("Analysis failed: {}", err));
            true
        }

        Msg::Select(id) => {
            let shown = page.selected.as_ref().map(|record| &record.id);
            if page.selection.request(id.clone(), shown) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::fetch_tone_analysis(&id).await.map_err(|e| e.to_string());
                    link.send_message(Msg::Selected(id, result));
                });
            }
            true
        }
        Msg::Selected(id, result) => {
            if !page.selection.resolve(&id) {
                return false;
            }
            match result {
                Ok(record) => {
                    page.rename = None;
                    page.selected = Some(record);
                }
                Err(err) => show_error(&format!("Could not load the analysis: {}", err)),
            }
            true
        }
        Msg::CloseDetail => {
            page.selection.cancel();
            page.selected = None;
            page.rename = None;
            true
        }

        Msg::OpenRename => {
            let Some(selected) = &page.selected else {
                return false;
            };
            page.rename = Some(Draft::new(selected.name.clone().unwrap_or_default()));
            true
        }
        Msg::EditRename(value) => {
            match page.rename.as_mut() {
                Some(draft) => draft.edit(value),
                None => return false,
            }
            true
        }
        Msg::CancelRename => {
            if page.renaming {
                return false;
            }
            page.rename = None;
            true
        }
        Msg::SaveRename => {
            if page.renaming {
                return false;
            }
            let (Some(draft), Some(id)) = (page.rename.as_ref(), page.selected_id().cloned()) else {
                return false;
            };
            if !draft.is_dirty() {
                page.rename = None;
                return true;
            }
            let request = match RenameRequest::new(draft.current()) {
                Ok(request) => request,
                Err(err) => {
                    show_error(&err.to_string());
                    return false;
                }
            };
            page.renaming = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::rename_tone_analysis(&id, &request)
                    .await
                    .map(|_| request.name)
                    .map_err(|e| e.to_string());
                link.send_message(Msg::Renamed(result));
            });
            true
        }
        Msg::Renamed(Ok(name)) => {
            page.renaming = false;
            let name = match page.rename.take() {
                Some(mut draft) => {
                    draft.edit(name);
                    draft.commit()
                }
                None => name,
            };
            if let Some(selected) = page.selected.as_mut() {
                selected.name = Some(name.clone());
                if let Some(listed) = page.analyses.iter_mut().find(|a| a.id == selected.id) {
                    listed.name = Some(name);
                }
            }
            show_toast("Analysis renamed.");
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Renamed(Err(err)) => {
            page.renaming = false;
            show_error(&format!("Could not rename the analysis: {}", err));
            true
        }
    }
}

/// The list endpoint may omit the results blob; keep the one already
/// fetched for the detail panel in that case.
fn merge_listing(selected: ToneAnalysisRecord, mut fresh: ToneAnalysisRecord) -> ToneAnalysisRecord {
    if fresh.tone_results.is_absent() {
        fresh.tone_results = selected.tone_results;
    }
    fresh
}
