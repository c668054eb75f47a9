//! Scene layers as plain parallel vectors, independent of the charting crate.
//!
//! The chart draws three layers from one diagram: one marker per category,
//! one disconnected line segment per functor, and one floating label per
//! functor at the segment midpoint. Keeping the layers as plain data makes
//! the coordinate bookkeeping checkable without a chart in the loop.

use crate::domain::{Diagram, DiagramError, Functor};

/// One marker per category: coordinates, name, and color, in map order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
    pub names: Vec<String>,
    pub colors: Vec<String>,
}

impl MarkerLayer {
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let mut layer = MarkerLayer::default();
        for (name, category) in &diagram.categories {
            let [x, y, z] = category.pos;
            layer.xs.push(x);
            layer.ys.push(y);
            layer.zs.push(z);
            layer.names.push(name.clone());
            layer.colors.push(category.color.clone());
        }
        layer
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Disconnected line segments, one per functor.
///
/// After each endpoint pair a `None` break is appended per axis, so the
/// chart starts a new segment instead of continuing the polyline. Each axis
/// therefore holds exactly 3 x (functor count) entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentLayer {
    pub xs: Vec<Option<f64>>,
    pub ys: Vec<Option<f64>>,
    pub zs: Vec<Option<f64>>,
}

impl SegmentLayer {
    /// Builds the segment layer, looking up both endpoints of every functor.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownSource`] or
    /// [`DiagramError::UnknownTarget`] for a functor naming a category that
    /// is not in the diagram.
    pub fn from_diagram(diagram: &Diagram) -> Result<Self, DiagramError> {
        let mut layer = SegmentLayer::default();
        for functor in &diagram.functors {
            let (start, end) = endpoints(diagram, functor)?;
            layer.xs.extend([Some(start[0]), Some(end[0]), None]);
            layer.ys.extend([Some(start[1]), Some(end[1]), None]);
            layer.zs.extend([Some(start[2]), Some(end[2]), None]);
        }
        Ok(layer)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Floating text labels, one per functor, at the arithmetic midpoint of
/// the functor's endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelLayer {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
    pub texts: Vec<String>,
}

impl LabelLayer {
    /// Builds the label layer.
    ///
    /// # Errors
    ///
    /// Same endpoint lookup failures as [`SegmentLayer::from_diagram`].
    pub fn from_diagram(diagram: &Diagram) -> Result<Self, DiagramError> {
        let mut layer = LabelLayer::default();
        for functor in &diagram.functors {
            let (start, end) = endpoints(diagram, functor)?;
            let mid = midpoint(start, end);
            layer.xs.push(mid[0]);
            layer.ys.push(mid[1]);
            layer.zs.push(mid[2]);
            layer.texts.push(functor.label.clone());
        }
        Ok(layer)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

fn endpoints(diagram: &Diagram, functor: &Functor) -> Result<([f64; 3], [f64; 3]), DiagramError> {
    let start = diagram
        .position_of(&functor.source)
        .ok_or_else(|| DiagramError::UnknownSource {
            label: functor.label.clone(),
            name: functor.source.clone(),
        })?;
    let end = diagram
        .position_of(&functor.target)
        .ok_or_else(|| DiagramError::UnknownTarget {
            label: functor.label.clone(),
            name: functor.target.clone(),
        })?;
    Ok((start, end))
}

/// Per-axis arithmetic mean of two points.
fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_midpoint() {
        assert_eq!(
            midpoint([0.0, 0.0, 0.0], [2.0, -2.0, 1.0]),
            [1.0, -1.0, 0.5]
        );
    }

    #[test]
    fn test_segment_layer_break_sentinels() {
        let mut d = Diagram::new();
        d.add_category("A", Category::new([0.0, 0.0, 0.0], "red", "circle"))
            .add_category("B", Category::new([2.0, 0.0, 0.0], "blue", "square"))
            .add_functor("A", "B", "f");

        let layer = SegmentLayer::from_diagram(&d).unwrap();
        assert_eq!(layer.xs, vec![Some(0.0), Some(2.0), None]);
        assert_eq!(layer.ys, vec![Some(0.0), Some(0.0), None]);
        assert_eq!(layer.zs, vec![Some(0.0), Some(0.0), None]);
    }
}
