use crate::services::logging::Logger;
use anyhow::{anyhow, Result};
use loklok_shared::AdoptionDatum;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

pub const ORANGE: RGBColor = RGBColor(0xFF, 0x9F, 0x1C);
pub const TEAL: RGBColor = RGBColor(0x2E, 0xC4, 0xB6);
const MUTED: RGBColor = RGBColor(138, 114, 102);
const GRID: RGBColor = RGBColor(242, 232, 229);

/// Bars alternate orange and teal
pub fn bar_color(index: usize) -> RGBColor {
    if index % 2 == 0 {
        ORANGE
    } else {
        TEAL
    }
}

/// Top of the value axis: a little headroom over the tallest bar
pub fn value_axis_max(data: &[AdoptionDatum]) -> u32 {
    let tallest = data.iter().map(|datum| datum.value).max().unwrap_or(0);
    (tallest + tallest / 5).max(10)
}

#[derive(Properties, PartialEq)]
pub struct AdoptionChartProps {
    pub data: Vec<AdoptionDatum>,
    pub caption: String,
}

pub enum Msg {}

pub struct AdoptionChart {
    canvas_ref: NodeRef,
}

impl Component for AdoptionChart {
    type Message = Msg;
    type Properties = AdoptionChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {}
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Err(e) = self.draw_chart(&ctx.props().data) {
            Logger::error_with_component("adoption-chart", &format!("failed to draw chart: {}", e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <figure class="adoption-chart">
                <figcaption class="adoption-chart-caption">{ &ctx.props().caption }</figcaption>
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="adoption-chart-canvas"
                    width="560"
                    height="300"
                ></canvas>
            </figure>
        }
    }
}

impl AdoptionChart {
    fn draw_chart(&self, data: &[AdoptionDatum]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas is not mounted"))?;
        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let labels: Vec<&str> = data.iter().map(|datum| datum.name.as_str()).collect();

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d((0..data.len()).into_segmented(), 0u32..value_axis_max(data))
            .map_err(|e| anyhow!("{:?}", e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len())
            .y_labels(5)
            .x_label_formatter(&|segment: &SegmentValue<usize>| match segment {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i).map(|label| label.to_string()).unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .label_style(("sans-serif", 12, &MUTED))
            .axis_style(&GRID)
            .bold_line_style(&GRID)
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        chart
            .draw_series(data.iter().enumerate().map(|(i, datum)| {
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), datum.value)],
                    bar_color(i).filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            }))
            .map_err(|e| anyhow!("{:?}", e))?;

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(name: &str, value: u32) -> AdoptionDatum {
        AdoptionDatum {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_bar_colors_alternate() {
        assert_eq!(bar_color(0), ORANGE);
        assert_eq!(bar_color(1), TEAL);
        assert_eq!(bar_color(4), ORANGE);
        assert_eq!(bar_color(5), TEAL);
    }

    #[test]
    fn test_value_axis_has_headroom() {
        assert_eq!(value_axis_max(&[datum("Jan", 45), datum("Jun", 72)]), 86);
        assert_eq!(value_axis_max(&[]), 10);
        assert_eq!(value_axis_max(&[datum("Jan", 3)]), 10);
    }
}
