use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Legend, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text, VLine};

use crate::color::{self, ColorMap};
use crate::projection::chart::{ChartSpec, LineDash, TextPosition};

// ---------------------------------------------------------------------------
// Beta vs. market cap scatter (central panel)
// ---------------------------------------------------------------------------

/// Draw a [`ChartSpec`].
pub fn beta_scatter(ui: &mut Ui, chart: &ChartSpec) {
    let colors = ColorMap::new(chart.points.iter().map(|p| p.group.as_str()));
    let line = &chart.reference_line;
    let line_color = color::named(&line.color);

    Plot::new("beta_scatter")
        .legend(Legend::default())
        .height(chart.height)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .label_formatter(|group, value| {
            match chart.nearest_in_group(group, value.x, value.y) {
                Some(p) => format!(
                    "{}\nCountry: {}\nISIN: {}\n{}: {:.2}\n{}: {:.2}",
                    p.hover_name, p.country, p.isin, chart.x_label, p.x, chart.y_label, p.y
                ),
                None => String::new(),
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (group, points) in chart.groups() {
                let color = colors.color_for(group);

                let series: PlotPoints = points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(Points::new(series).name(group).color(color).radius(5.0));

                for p in points {
                    let label = Text::new(PlotPoint::new(p.x, p.y), RichText::new(&p.text).small())
                        .anchor(anchor(chart.text_position))
                        .color(color);
                    plot_ui.text(label);
                }
            }

            let style = match line.dash {
                LineDash::Dash => LineStyle::Dashed { length: 8.0 },
                LineDash::Solid => LineStyle::Solid,
            };
            plot_ui.vline(
                VLine::new(line.x)
                    .name(&line.annotation)
                    .color(line_color)
                    .style(style),
            );

            let top = plot_ui.plot_bounds().max()[1];
            plot_ui.text(
                Text::new(PlotPoint::new(line.x, top), RichText::new(&line.annotation))
                    .anchor(anchor(line.annotation_position))
                    .color(line_color),
            );
        });
}

/// Where the text sits relative to its point.
fn anchor(position: TextPosition) -> Align2 {
    match position {
        TextPosition::TopCenter => Align2::CENTER_BOTTOM,
        TextPosition::TopRight => Align2::LEFT_TOP,
    }
}
