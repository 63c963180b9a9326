//! Interactive graph editor.
//!
//! - Left click on empty canvas: add a node
//! - Left drag a node: move it
//! - Right click a node: delete it with all its edges
//! - Right click an edge: delete the edge
//! - Right drag from one node to another: connect them

use slint::{ComponentHandle, ModelRc, VecModel};
use slint_graph_editor::{GraphEditorController, RenderStyle};
use std::rc::Rc;
use tracing::info;

slint::include_modules!();

fn main() -> Result<(), slint::PlatformError> {
    tracing_subscriber::fmt::init();

    let window = MainWindow::new()?;
    let ctrl = GraphEditorController::new();
    let w = window.as_weak();

    // The window owns the palette
    ctrl.set_style(RenderStyle::default().with_colors(
        window.get_canvas_background(),
        window.get_stroke_color(),
        window.get_hover_stroke_color(),
    ));
    window.set_stroke_width(ctrl.style().stroke_width);

    let node_groups = Rc::new(VecModel::<PathData>::default());
    let edge_groups = Rc::new(VecModel::<PathData>::default());
    let labels = Rc::new(VecModel::<LabelData>::default());
    window.set_node_groups(ModelRc::from(node_groups.clone()));
    window.set_edge_groups(ModelRc::from(edge_groups.clone()));
    window.set_labels(ModelRc::from(labels.clone()));

    // Pointer input - controller handles the logic
    window.on_primary_down(ctrl.primary_down_callback());
    window.on_primary_up(ctrl.primary_up_callback());
    window.on_secondary_down(ctrl.secondary_down_callback());
    window.on_secondary_up(ctrl.secondary_up_callback());
    window.on_pointer_moved(ctrl.pointer_moved_callback());
    window.on_capture_lost(ctrl.capture_lost_callback());

    // Rebuild the scene and push it into the models
    window.on_refresh({
        let ctrl = ctrl.clone();
        let w = w.clone();
        move || {
            let Some(w) = w.upgrade() else {
                return;
            };
            let scene = ctrl.scene();
            let style = *scene.style();
            let to_path = |group: &slint_graph_editor::PathGroup| PathData {
                commands: group.commands.clone(),
                stroke: group.stroke(&style),
                fill: group.fill(&style),
            };

            w.set_canvas_background(scene.background());
            scene.sync_node_groups(&node_groups, to_path);
            scene.sync_edge_groups(&edge_groups, to_path);
            scene.sync_labels(&labels, |label| LabelData {
                x: label.x,
                y: label.y,
                text: label.text.clone(),
                color: style.stroke_for(label.highlighted),
            });
        }
    });

    ctrl.set_redraw_handler(move || {
        if let Some(w) = w.upgrade() {
            w.invoke_refresh();
        }
    });

    info!("graph editor ready");
    window.invoke_refresh();
    window.run()
}
