use crate::config::RenderStyle;
use crate::geometry::{circle_segment_trim, Point};

/// Generate SVG path command for a straight line
///
/// # Returns
/// SVG path command string (e.g., "M 10 20 L 140 80")
pub fn generate_line_path(from: Point, to: Point) -> String {
    format!("M {} {} L {} {}", from.x, from.y, to.x, to.y)
}

/// Generate SVG path command for a closed circle
///
/// The circle is built from two half-circle arcs so it can be filled and
/// stroked like any other path.
pub fn generate_circle_path(center: Point, radius: i32) -> String {
    let left = center.x - radius;
    let right = center.x + radius;
    format!(
        "M {left} {y} A {radius} {radius} 0 1 0 {right} {y} A {radius} {radius} 0 1 0 {left} {y} Z",
        y = center.y,
    )
}

/// Generate SVG path commands for an edge between two node centers
///
/// The line starts on the source node's circle. Unless `exact` is set it also
/// stops `edge_gap` short of the target node's circle; with `exact` it ends on
/// `to` itself, which is what the drag preview needs. A small dot marks the
/// target end.
///
/// # Arguments
/// * `from` - Source node center
/// * `to` - Target node center, or the pointer position for a preview
/// * `exact` - Skip trimming at the target end
/// * `style` - Node radius, edge gap and dot radius
pub fn generate_edge_path(from: Point, to: Point, exact: bool, style: &RenderStyle) -> String {
    let start = circle_segment_trim(to, from, style.node_radius);
    let end = if exact {
        to
    } else {
        circle_segment_trim(from, to, style.node_radius + style.edge_gap)
    };

    format!(
        "{} {}",
        generate_line_path(start, end),
        generate_circle_path(end, style.dot_radius)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_path() {
        let path = generate_line_path(Point::new(10, 20), Point::new(140, 80));
        assert_eq!(path, "M 10 20 L 140 80");
    }

    #[test]
    fn test_circle_path() {
        let path = generate_circle_path(Point::new(50, 40), 10);
        assert_eq!(path, "M 40 40 A 10 10 0 1 0 60 40 A 10 10 0 1 0 40 40 Z");
    }

    #[test]
    fn test_edge_path_trims_both_ends() {
        let path = generate_edge_path(
            Point::new(100, 100),
            Point::new(200, 100),
            false,
            &RenderStyle::default(),
        );
        // Source trimmed by the node radius, target by radius + gap
        assert!(path.starts_with("M 110 100 L 187 100"));
        // Dot centered on the trimmed end
        assert!(path.contains("M 184 100 A 3 3 0 1 0 190 100"));
    }

    #[test]
    fn test_edge_path_exact_keeps_target() {
        let path = generate_edge_path(
            Point::new(100, 100),
            Point::new(200, 100),
            true,
            &RenderStyle::default(),
        );
        assert!(path.starts_with("M 110 100 L 200 100"));
    }

    #[test]
    fn test_edge_path_vertical() {
        let path = generate_edge_path(
            Point::new(50, 0),
            Point::new(50, 100),
            false,
            &RenderStyle::default(),
        );
        assert!(path.starts_with("M 50 10 L 50 87"));
    }

    #[test]
    fn test_edge_path_respects_style() {
        let style = RenderStyle::default().with_node_radius(20).with_edge_gap(0);
        let path = generate_edge_path(Point::new(0, 0), Point::new(100, 0), false, &style);
        assert!(path.starts_with("M 20 0 L 80 0"));
    }
}
