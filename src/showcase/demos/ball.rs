use crate::foundation::core::{SurfaceSpec, Vec2};
use crate::foundation::error::FrescoResult;
use crate::foundation::math::Rng64;
use crate::geometry::bounds::DirtyRect;
use crate::render::surface::Surface;
use crate::scene::shape::Circle;
use crate::showcase::demos::Demo;

const BALL_RADIUS: f64 = 30.0;

/// A circle bouncing off the surface edges, repainted in full each frame.
#[derive(Clone, Debug)]
pub struct BallDemo {
    ball: Circle,
    velocity: Vec2,
}

impl BallDemo {
    /// Ball starting at the surface center with a slight random kick.
    pub fn new(spec: SurfaceSpec, seed: u64) -> FrescoResult<Self> {
        let mut rng = Rng64::new(seed);
        let velocity = Vec2::new(
            rng.number_in_range(2.0, 5.0),
            rng.number_in_range(2.0, 5.0),
        );
        Ok(Self {
            ball: Circle::new(
                spec.width / 2.0,
                spec.height / 2.0,
                BALL_RADIUS,
                rng.color(),
            ),
            velocity,
        })
    }
}

impl Demo for BallDemo {
    fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<()> {
        let size = surface.size();
        let r = self.ball.radius();

        let mut next = self.ball.center() + self.velocity;
        if next.x - r < 0.0 || next.x + r > size.width {
            self.velocity.x = -self.velocity.x;
            next.x = next.x.clamp(r, size.width - r);
        }
        if next.y - r < 0.0 || next.y + r > size.height {
            self.velocity.y = -self.velocity.y;
            next.y = next.y.clamp(r, size.height - r);
        }
        self.ball.update(next.x, next.y);

        surface.clear_rect(DirtyRect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        })?;
        surface.fill_circle(self.ball.center(), r, self.ball.color())
    }
}
