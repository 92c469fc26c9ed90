//! Top sheet: a panel that slides down over the page for dialogs and
//! confirmations.
//!
//! The sheet is mounted only while `open` is true. After mounting, the
//! `show` class is added on a short delay so the CSS transition runs
//! from the collapsed state.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::SHEET_ANIMATION_DELAY_MS;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub struct Sheet {
    title_id: String,
    node_ref: NodeRef,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-title-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <div
                class="top-sheet"
                role="dialog"
                aria-modal="true"
                aria-labelledby={self.title_id.clone()}
                ref={self.node_ref.clone()}
            >
                <div class="top-sheet-header">
                    <h2 id={self.title_id.clone()}>{ props.title.clone() }</h2>
                    <button class="icon-btn" title="Close" onclick={on_close}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().open {
            return;
        }
        if let Some(sheet) = self.node_ref.cast::<HtmlElement>() {
            if sheet.class_list().contains("show") {
                return;
            }
            Timeout::new(SHEET_ANIMATION_DELAY_MS, move || {
                sheet.class_list().add_1("show").ok();
            })
            .forget();
        }
    }
}
