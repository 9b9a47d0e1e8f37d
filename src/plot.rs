//! Plot rendering with egui_plot and translation of egui pointer input into
//! [`PointerEvent`]s.
//!
//! egui_plot's own navigation is disabled; the plot bounds are driven every
//! frame by the [`ViewState`]'s viewport.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, PlotTransform, PlotUi};

use crate::config::RenderConfig;
use crate::data::analysis::Analysis;
use crate::data::viewport::Viewport;
use crate::input::{InputOutcome, PointerEvent, ScrollAccumulator};
use crate::view::ViewState;

/// Draw the classified trace and the legend bars into `plot_ui`.
pub fn draw_analysis(plot_ui: &mut PlotUi, analysis: &Analysis, render: &RenderConfig) {
    for seg in &analysis.segments {
        let look = render.looks.for_kind(seg.kind);
        let pts: Vec<[f64; 2]> = seg
            .decimated(render.decimation_step)
            .filter_map(|i| analysis.signal.sample(i))
            .map(|s| [s.time, s.value])
            .collect();
        if pts.is_empty() {
            continue;
        }
        plot_ui.line(Line::new("", pts).color(look.color).width(look.width));
    }

    if let Some(markers) = analysis.legend() {
        for m in markers {
            let look = render.looks.for_apnea(m.kind);
            plot_ui.line(
                Line::new("", m.points().to_vec())
                    .color(look.color)
                    .width(render.looks.legend_width),
            );
        }
    }
}

/// Pixel-precise scroll distance counted as one wheel notch.
const POINTS_PER_NOTCH: f32 = 50.0;

/// Wheel notches scrolled this frame, positive is scroll-up.
fn wheel_notches(events: &[egui::Event]) -> f64 {
    events
        .iter()
        .filter_map(|e| match e {
            egui::Event::MouseWheel { unit, delta, .. } => Some(match unit {
                egui::MouseWheelUnit::Point => delta.y / POINTS_PER_NOTCH,
                egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => delta.y,
            }),
            _ => None,
        })
        .map(f64::from)
        .sum()
}

fn to_data(transform: &PlotTransform, pos: egui::Pos2) -> [f64; 2] {
    let PlotPoint { x, y } = transform.value_from_position(pos);
    [x, y]
}

/// The central plot widget.
#[derive(Default)]
pub struct PlotView {
    /// Screen-to-data mapping captured when the current drag started.
    /// Drag positions are expressed in this fixed frame so that successive
    /// move deltas compose.
    drag_frame: Option<PlotTransform>,
    /// Re-anchor the drag on the next frame (the mapping changed mid-drag).
    reanchor: bool,
    scroll: ScrollAccumulator,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the plot and route this frame's pointer input. Returns `true` if
    /// the viewport changed.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut ViewState,
        render: &RenderConfig,
    ) -> bool {
        let Some(viewport) = state.viewport() else {
            ui.centered_and_justified(|ui| ui.label("No signal loaded"));
            return false;
        };

        let plot = Plot::new("breath_plot")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_grid(render.grid)
            .x_axis_label("Time")
            .y_axis_label("Breath Value");

        let plot_resp = plot.show(ui, |plot_ui| {
            apply_bounds(plot_ui, &viewport);
            if let Some(analysis) = state.analysis() {
                draw_analysis(plot_ui, analysis, render);
            }
        });

        let transform = plot_resp.transform;
        let rect = plot_resp.response.rect;
        let (pressed, released, down, moved, latest, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.latest_pos(),
                wheel_notches(&i.events),
            )
        });
        let inside = latest.filter(|p| rect.contains(*p));

        let mut changed = false;

        if self.reanchor && state.input().is_dragging() {
            self.reanchor = false;
            self.drag_frame = Some(transform);
            let pos = inside.map(|p| to_data(&transform, p));
            state.handle_pointer(PointerEvent::Press { pos });
        }

        if pressed {
            if let Some(p) = inside {
                self.drag_frame = Some(transform);
                state.handle_pointer(PointerEvent::Press {
                    pos: Some(to_data(&transform, p)),
                });
            }
        } else if state.input().is_dragging() {
            let frame = self.drag_frame.unwrap_or(transform);
            let event = if released || !down {
                Some(PointerEvent::Release)
            } else if inside.is_none() {
                Some(PointerEvent::Leave)
            } else if moved {
                Some(PointerEvent::Move {
                    pos: inside.map(|p| to_data(&frame, p)),
                    button_held: down,
                })
            } else {
                None
            };
            if let Some(event) = event {
                let outcome = state.handle_pointer(event);
                if outcome == InputOutcome::DragEnded {
                    self.drag_frame = None;
                }
                changed |= outcome.needs_redraw();
            }
        }

        match inside {
            Some(p) => {
                let steps = self.scroll.feed(scroll);
                let pos = Some(to_data(&transform, p));
                for _ in 0..steps.unsigned_abs() {
                    let outcome = state.handle_pointer(PointerEvent::Scroll {
                        pos,
                        delta: f64::from(steps.signum()),
                    });
                    if outcome.needs_redraw() {
                        changed = true;
                        self.reanchor = state.input().is_dragging();
                    }
                }
            }
            None => self.scroll.reset(),
        }

        changed
    }
}

fn apply_bounds(plot_ui: &mut PlotUi, vp: &Viewport) {
    plot_ui.set_plot_bounds_x(vp.x_min..=vp.x_max);
    plot_ui.set_plot_bounds_y(vp.y_min..=vp.y_max);
}
