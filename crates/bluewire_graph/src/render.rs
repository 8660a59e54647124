// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node and connection rendering.
//!
//! Pure presentation: draws panels, titles, pins and wires from the graph
//! model and each node's style record. Hit-testing and editing live in the
//! stage layer, not here.

use crate::graph::Graph;
use crate::node::Node;
use crate::pin::{Pin, PinId, PinKind};
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Node panel row height (one pin per row)
pub const ROW_HEIGHT: f32 = 22.0;
/// Title bar height
pub const TITLE_HEIGHT: f32 = 24.0;
/// Pin glyph radius
pub const PIN_RADIUS: f32 = 6.0;
/// Gap between a pin glyph and its label
pub const PIN_TEXT_OFFSET: f32 = 12.0;
/// Wire curvature
const BEZIER_CURVATURE: f32 = 50.0;
/// Wire thickness
const WIRE_THICKNESS: f32 = 2.5;

/// View transform from graph space to screen space
#[derive(Debug, Clone, Copy)]
pub struct View {
    /// Pan offset in graph units
    pub pan: Vec2,
    /// Zoom factor
    pub zoom: f32,
}

impl View {
    /// Convert a graph-space position to screen space
    pub fn graph_to_screen(&self, graph_pos: Pos2, rect: Rect) -> Pos2 {
        let center = rect.center();
        Pos2::new(
            (graph_pos.x + self.pan.x) * self.zoom + center.x,
            (graph_pos.y + self.pan.y) * self.zoom + center.y,
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Panel rect of a node in graph space.
///
/// Width comes from the style record; height reserves the title bar plus a
/// row per pin slot (or the style's explicit line count, whichever is
/// larger).
pub fn node_rect(node: &Node) -> Rect {
    let style = node.style();
    let rows = node
        .inputs
        .len()
        .max(node.outputs.len())
        .max(style.line_count as usize);
    let height = TITLE_HEIGHT + rows as f32 * ROW_HEIGHT;
    Rect::from_min_size(
        Pos2::new(node.position[0], node.position[1]),
        Vec2::new(style.width, height),
    )
}

/// Draw a single node: panel, title, then pins down each side
pub fn draw_node(painter: &egui::Painter, view: &View, rect: Rect, graph: &Graph, node: &Node) {
    let graph_rect = node_rect(node);
    let screen_rect = Rect::from_min_size(
        view.graph_to_screen(graph_rect.min, rect),
        graph_rect.size() * view.zoom,
    );
    if !screen_rect.intersects(rect) {
        return;
    }

    // panel background carries the highlight state
    let [r, g, b] = node.style().panel_bg;
    painter.rect_filled(screen_rect, 4.0 * view.zoom, Color32::from_rgb(r, g, b));

    let title_rect = Rect::from_min_size(
        screen_rect.min,
        Vec2::new(screen_rect.width(), TITLE_HEIGHT * view.zoom),
    );
    painter.text(
        title_rect.center(),
        egui::Align2::CENTER_CENTER,
        &node.title,
        egui::FontId::proportional(12.0 * view.zoom),
        Color32::from_rgb(224, 224, 224),
    );

    for (i, pin) in node.inputs.iter().enumerate() {
        let pos = Pos2::new(
            screen_rect.left() + PIN_RADIUS * 2.0 * view.zoom,
            row_center(screen_rect, i, view.zoom),
        );
        draw_pin(painter, view, pin, pos, graph.pin_connected(pin.id));
        painter.text(
            Pos2::new(pos.x + PIN_TEXT_OFFSET * view.zoom, pos.y),
            egui::Align2::LEFT_CENTER,
            &pin.name,
            egui::FontId::proportional(10.0 * view.zoom),
            Color32::from_gray(200),
        );
    }

    for (i, pin) in node.outputs.iter().enumerate() {
        let pos = Pos2::new(
            screen_rect.right() - PIN_RADIUS * 2.0 * view.zoom,
            row_center(screen_rect, i, view.zoom),
        );
        draw_pin(painter, view, pin, pos, graph.pin_connected(pin.id));
        painter.text(
            Pos2::new(pos.x - PIN_TEXT_OFFSET * view.zoom, pos.y),
            egui::Align2::RIGHT_CENTER,
            &pin.name,
            egui::FontId::proportional(10.0 * view.zoom),
            Color32::from_gray(200),
        );
    }
}

fn row_center(screen_rect: Rect, row: usize, zoom: f32) -> f32 {
    screen_rect.top() + (TITLE_HEIGHT + row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0) * zoom
}

/// Draw one pin glyph.
///
/// Port pins render as a triangle, data pins as a circle; connected pins
/// are filled, disconnected ones outlined.
pub fn draw_pin(painter: &egui::Painter, view: &View, pin: &Pin, pos: Pos2, connected: bool) {
    let radius = PIN_RADIUS * view.zoom;
    let [r, g, b] = pin.kind.color();
    let color = Color32::from_rgb(r, g, b);

    if pin.kind == PinKind::Port {
        let points = vec![
            Pos2::new(pos.x - radius, pos.y - radius),
            Pos2::new(pos.x - radius, pos.y + radius),
            Pos2::new(pos.x + radius, pos.y),
        ];
        if connected {
            painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
        } else {
            painter.add(egui::Shape::closed_line(points, Stroke::new(2.0, color)));
        }
    } else if connected {
        painter.circle_filled(pos, radius, color);
    } else {
        painter.circle_stroke(pos, radius, Stroke::new(2.0, color));
    }
}

/// Draw every connection as a bezier wire colored by its source pin kind
pub fn draw_connections(painter: &egui::Painter, view: &View, rect: Rect, graph: &Graph) {
    for connection in graph.connections() {
        let (Some(from), Some(to)) = (graph.node(connection.from_node), graph.node(connection.to_node))
        else {
            continue;
        };

        let Some(from_pos) = pin_screen_pos(view, rect, from, connection.from_pin) else {
            continue;
        };
        let Some(to_pos) = pin_screen_pos(view, rect, to, connection.to_pin) else {
            continue;
        };

        let color = match from.pin(connection.from_pin) {
            Some(pin) => {
                let [r, g, b] = pin.kind.color();
                Color32::from_rgb(r, g, b)
            }
            None => Color32::GRAY,
        };

        draw_bezier_wire(painter, view, from_pos, to_pos, color);
    }
}

/// Screen position of a pin glyph on a node, if the node has that pin
pub fn pin_screen_pos(view: &View, rect: Rect, node: &Node, pin_id: PinId) -> Option<Pos2> {
    let graph_rect = node_rect(node);
    let screen_rect = Rect::from_min_size(
        view.graph_to_screen(graph_rect.min, rect),
        graph_rect.size() * view.zoom,
    );

    for (i, pin) in node.inputs.iter().enumerate() {
        if pin.id == pin_id {
            return Some(Pos2::new(
                screen_rect.left(),
                row_center(screen_rect, i, view.zoom),
            ));
        }
    }
    for (i, pin) in node.outputs.iter().enumerate() {
        if pin.id == pin_id {
            return Some(Pos2::new(
                screen_rect.right(),
                row_center(screen_rect, i, view.zoom),
            ));
        }
    }
    None
}

fn draw_bezier_wire(painter: &egui::Painter, view: &View, from: Pos2, to: Pos2, color: Color32) {
    let distance = (to.x - from.x).abs();
    let curvature = (BEZIER_CURVATURE * view.zoom).min(distance * 0.5);

    let ctrl1 = Pos2::new(from.x + curvature, from.y);
    let ctrl2 = Pos2::new(to.x - curvature, to.y);

    let points = bezier_points(from, ctrl1, ctrl2, to, 32);
    for i in 0..points.len() - 1 {
        painter.line_segment(
            [points[i], points[i + 1]],
            Stroke::new(WIRE_THICKNESS * view.zoom, color),
        );
    }
}

/// Generate points along a cubic bezier curve
fn bezier_points(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, segments: usize) -> Vec<Pos2> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x;
        let y = mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y;

        points.push(Pos2::new(x, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, NodeStyle};

    #[test]
    fn test_node_rect_grows_with_pins() {
        let node = Node::new(NodeKind::Plain, "N")
            .with_input(Pin::new("a", PinKind::Float))
            .with_input(Pin::new("b", PinKind::Float))
            .with_input(Pin::new("c", PinKind::Float))
            .with_output(Pin::new("out", PinKind::Float));
        let rect = node_rect(&node);
        assert_eq!(rect.width(), node.style().width);
        assert_eq!(rect.height(), TITLE_HEIGHT + 3.0 * ROW_HEIGHT);
    }

    #[test]
    fn test_node_rect_respects_line_count() {
        let mut node = Node::new(NodeKind::Plain, "N");
        node.set_style(NodeStyle {
            line_count: 5,
            ..NodeStyle::default()
        });
        let rect = node_rect(&node);
        assert_eq!(rect.height(), TITLE_HEIGHT + 5.0 * ROW_HEIGHT);
    }

    #[test]
    fn test_bezier_endpoints() {
        let points = bezier_points(
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(20.0, 30.0),
            Pos2::new(30.0, 30.0),
            16,
        );
        assert_eq!(points.len(), 17);
        assert_eq!(points[0], Pos2::new(0.0, 0.0));
        assert_eq!(points[16], Pos2::new(30.0, 30.0));
    }
}
