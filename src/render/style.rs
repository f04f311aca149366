//! Degree-based node styling

/// Degree at which node styling saturates
pub const SATURATION_CUTOFF: usize = 10;

/// Visual attributes for one node, derived from its degree count.
///
/// Each attribute scales linearly with the degree from a baseline and
/// clamps at [`SATURATION_CUTOFF`]: the hue walks from green toward red,
/// label and outline grow with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// HSV color triple in Graphviz string form, e.g. "0.333 1 1"
    pub color: String,
    /// Label font size in points
    pub font_size: f64,
    /// Node outline width
    pub pen_width: f64,
}

impl NodeStyle {
    pub fn for_degree(degree: usize) -> Self {
        if degree >= SATURATION_CUTOFF {
            return NodeStyle {
                color: "0 1 1".to_string(),
                font_size: 28.0,
                pen_width: 4.5,
            };
        }
        let n = degree as f64;
        NodeStyle {
            color: format!("{} 1 1", 0.333 - 0.0333 * n),
            font_size: 14.0 + 1.4 * n,
            pen_width: 3.0 + 0.15 * n,
        }
    }

    /// Attribute list in DOT emission order
    pub(crate) fn attributes(&self) -> [(&'static str, String); 3] {
        [
            ("penwidth", format!("{}", self.pen_width)),
            ("color", self.color.clone()),
            ("fontsize", format!("{}", self.font_size)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_degree_is_baseline() {
        let style = NodeStyle::for_degree(0);
        assert_eq!(style.color, "0.333 1 1");
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.pen_width, 3.0);
    }

    #[test]
    fn test_cutoff_and_beyond_saturate_identically() {
        let at_cutoff = NodeStyle::for_degree(10);
        let beyond = NodeStyle::for_degree(15);
        assert_eq!(at_cutoff, beyond);
        assert_eq!(at_cutoff.color, "0 1 1");
        assert_eq!(at_cutoff.font_size, 28.0);
        assert_eq!(at_cutoff.pen_width, 4.5);
    }

    #[test]
    fn test_scaling_is_monotonic_below_cutoff() {
        for degree in 0..SATURATION_CUTOFF {
            let lower = NodeStyle::for_degree(degree);
            let higher = NodeStyle::for_degree(degree + 1);
            assert!(higher.font_size > lower.font_size);
            assert!(higher.pen_width > lower.pen_width);
        }
    }
}
