use kurbo::{BezPath, PathEl};

/// Rounded output: one subpath per input contour, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundedShape {
    pub contours: Vec<BezPath>,
}

impl RoundedShape {
    pub fn new(contours: Vec<BezPath>) -> Self {
        Self { contours }
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// All contours concatenated into one compound path.
    pub fn to_path(&self) -> BezPath {
        assemble(self.contours.iter().cloned())
    }

    pub fn into_path(self) -> BezPath {
        assemble(self.contours)
    }
}

/// Concatenate subpaths in order. Empty subpaths contribute nothing.
pub fn assemble<I>(contours: I) -> BezPath
where
    I: IntoIterator<Item = BezPath>,
{
    let mut out = BezPath::new();
    for contour in contours {
        out.extend(contour.elements().iter().copied());
    }
    out
}

/// Split a path at each `MoveTo`, keeping every element as-is.
pub fn split_subpaths(path: &BezPath) -> Vec<BezPath> {
    let mut subpaths = Vec::new();
    let mut current = BezPath::new();
    for &el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !current.elements().is_empty() {
            subpaths.push(std::mem::take(&mut current));
        }
        current.push(el);
    }
    if !current.elements().is_empty() {
        subpaths.push(current);
    }
    subpaths
}
