use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::histogram::Histogram;
use crate::state::AppState;

/// Translucent blue bar fill.
const BAR_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 178, 178);

// ---------------------------------------------------------------------------
// Histogram window
// ---------------------------------------------------------------------------

/// Show the histogram in its own window while `state.histogram` is set.
/// Closing the window clears it.
pub fn histogram_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(histogram) = &state.histogram else {
        return;
    };

    let mut open = true;
    egui::Window::new(histogram.title.as_str())
        .id(egui::Id::new("histogram_window"))
        .open(&mut open)
        .default_size([640.0, 480.0])
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            ui.label(format!("{} valeurs", histogram.total()));
            histogram_plot(ui, histogram);
        });

    if !open {
        state.histogram = None;
    }
}

/// Render the histogram bars.
pub fn histogram_plot(ui: &mut Ui, histogram: &Histogram) {
    let bars: Vec<Bar> = histogram
        .bins()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .fill(BAR_FILL)
                .stroke(Stroke::new(1.0, Color32::BLACK))
        })
        .collect();

    let chart = BarChart::new(bars).name(&histogram.x_label);

    Plot::new("histogram_plot")
        .x_axis_label(histogram.x_label.clone())
        .y_axis_label(histogram.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
