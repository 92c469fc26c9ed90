use common::model::tone::ToneProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToneGridProps {
    pub profile: ToneProfile,
    /// Marks the grid as placeholder data when the profile is the default.
    #[prop_or(true)]
    pub flag_default: bool,
}

/// Tone cards laid out in a grid of 2 to 5 columns, one card per tone with
/// its percentage bar and intensity badge.
pub struct ToneGrid;

impl Component for ToneGrid {
    type Message = ();
    type Properties = ToneGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ToneGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: 12px;",
            props.profile.grid_columns()
        );

        html! {
            <div class="tone-grid-wrapper">
                {
                    if props.flag_default && props.profile.is_default() {
                        html! { <p class="muted">{"Default tone profile (no tone data saved for this campaign)"}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="tone-grid" style={style}>
                    { for props.profile.iter().map(|entry| {
                        let level = entry.level();
                        html! {
                            <div class="tone-card" key={entry.name.clone()}>
                                <div class="tone-card-name">{ entry.display_name() }</div>
                                <div class="tone-card-value">{ format!("{}%", entry.intensity) }</div>
                                <div class="tone-bar">
                                    <div class="tone-bar-fill" style={format!("width: {}%;", entry.intensity)} />
                                </div>
                                <span class={classes!("badge", level.css_class())}>{ level.label() }</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
