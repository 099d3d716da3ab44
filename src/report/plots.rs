use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::boundary::linear::Segment;
use crate::boundary::logistic::sigmoid_curve;
use crate::scene::{BoundaryRepr, Scene};

/// Render a scene as a plotly scatter diagram: one marker trace per class
/// plus the boundary line or segments. The decision-region fill (dense grid
/// evaluation) is left to the interactive renderer.
pub fn plot_scene(scene: &Scene, title: &str) -> Result<Plot, String> {
    if scene.points.is_empty() {
        return Err("scene has no points to plot".to_string());
    }

    let mut plot = Plot::new();

    let num_classes = scene
        .points
        .iter()
        .map(|p| p.class)
        .max()
        .unwrap_or(0)
        + 1;
    for class in 0..num_classes {
        let xs: Vec<f64> = scene
            .points
            .iter()
            .filter(|p| p.class == class)
            .map(|p| p.x)
            .collect();
        let ys: Vec<f64> = scene
            .points
            .iter()
            .filter(|p| p.class == class)
            .map(|p| p.y)
            .collect();
        let trace = Scatter::new(xs, ys)
            .mode(Mode::Markers)
            .name(&format!("Class {}", class));
        plot.add_trace(trace);
    }

    match &scene.repr {
        BoundaryRepr::Line(boundary) => {
            if let Some(seg) = boundary.segment(&scene.config.domain) {
                plot.add_trace(segment_trace(&seg, "Decision boundary"));
            }
        }
        BoundaryRepr::Segments(segments) => {
            for seg in segments {
                let name = format!("Boundary {}|{}", seg.classes.0, seg.classes.1);
                plot.add_trace(segment_trace(seg, &name));
            }
        }
        BoundaryRepr::Discriminant => {
            // Curved boundary; regions come from Scene::classify_grid.
        }
    }

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title(scene.config.x_label.as_str()))
        .y_axis(Axis::new().title(scene.config.y_label.as_str()));
    plot.set_layout(layout);

    Ok(plot)
}

fn segment_trace(seg: &Segment, name: &str) -> Box<Scatter<f64, f64>> {
    Scatter::new(vec![seg.x1, seg.x2], vec![seg.y1, seg.y2])
        .mode(Mode::Lines)
        .name(name)
        .line(
            plotly::common::Line::new()
                .color("red")
                .dash(plotly::common::DashType::Dash),
        )
}

/// The sigmoid side chart shown next to the logistic scatter diagram.
pub fn plot_sigmoid(title: &str) -> Plot {
    let (ts, sigmas): (Vec<f64>, Vec<f64>) = sigmoid_curve().into_iter().unzip();

    let trace = Scatter::new(ts, sigmas)
        .mode(Mode::Lines)
        .name("sigma(t)");

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("t"))
            .y_axis(Axis::new().title("sigma(t)")),
    );
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene;

    #[test]
    fn scene_plots_include_class_and_boundary_traces() {
        let s = scene::multinomial().unwrap();
        let plot = plot_scene(&s, "Multinomial").unwrap();
        let json = plot.to_json();
        assert!(json.contains("Class 2"));
        assert!(json.contains("Boundary 0|1"));
    }

    #[test]
    fn discriminant_scene_plots_markers_only() {
        let s = scene::qda().unwrap();
        let plot = plot_scene(&s, "QDA").unwrap();
        let json = plot.to_json();
        assert!(json.contains("Class 1"));
        assert!(!json.contains("Boundary"));
    }

    #[test]
    fn sigmoid_chart_builds() {
        let plot = plot_sigmoid("Sigmoid");
        assert!(plot.to_json().contains("sigma(t)"));
    }
}
