use super::adoption_chart::AdoptionChart;
use crate::components::Strings;
use loklok_shared::AdoptionDatum;
use yew::prelude::*;

/// Headline figures as (value, caption)
fn headline_figures(strings: &Strings) -> [(&'static str, &str); 2] {
    [("1,240+", strings.hero.stat_1.as_str()), ("45", strings.hero.stat_2.as_str())]
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub strings: Strings,
    pub data: Vec<AdoptionDatum>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let stats = &props.strings.stats;

    html! {
        <section class="stats">
            <div class="stats-copy">
                <h2 class="section-title">{ &stats.title }</h2>
                <p class="section-lead">{ &stats.blurb }</p>
                <div class="stats-figures">
                    { for headline_figures(&props.strings).into_iter().map(|(value, caption)| html! {
                        <div class="stats-figure">
                            <span class="stats-figure-value">{ value }</span>
                            <span class="stats-figure-caption">{ caption }</span>
                        </div>
                    }) }
                </div>
            </div>
            <AdoptionChart data={props.data.clone()} caption={stats.chart_label.clone()} />
        </section>
    }
}
