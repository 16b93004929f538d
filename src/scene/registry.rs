use crate::foundation::core::SurfaceSize;
use crate::foundation::math::Rng64;
use crate::scene::shape::Circle;

/// Ordered owner of every drawable circle in a scene.
///
/// Draw order is insertion order. The registry owns the shapes; renderers and
/// the dirty-rect computation only read through it.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Circle>,
}

impl ShapeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with `count` circles scattered uniformly inside the
    /// surface, keeping `margin` clear of the edges. Radii are sampled in
    /// `[10, 20]` and colors are random opaque RGB.
    pub fn scatter(size: SurfaceSize, count: usize, margin: f64, rng: &mut Rng64) -> Self {
        let mut shapes = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.number_in_range(margin, size.width - margin);
            let y = rng.number_in_range(margin, size.height - margin);
            let radius = rng.number_in_range(10.0, 20.0);
            shapes.push(Circle::new(x, y, radius, rng.color()));
        }
        Self { shapes }
    }

    /// Append a shape; it draws above everything already registered.
    pub fn push(&mut self, shape: Circle) {
        self.shapes.push(shape);
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Circle> {
        self.shapes.get(index)
    }

    /// Mutable shape at `index`, if present.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Circle> {
        self.shapes.get_mut(index)
    }

    /// Shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.shapes.iter()
    }

    /// Index of a uniformly chosen shape, or `None` when empty.
    pub fn pick_index(&self, rng: &mut Rng64) -> Option<usize> {
        rng.index_in(self.shapes.len())
    }
}
