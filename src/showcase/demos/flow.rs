use crate::foundation::core::{Point, Rgba8Premul, SurfaceSpec};
use crate::foundation::error::FrescoResult;
use crate::foundation::math::Rng64;
use crate::geometry::bounds::DirtyRect;
use crate::render::surface::Surface;
use crate::showcase::demos::Demo;

const PARTICLE_TOTAL: usize = 300;
const SPEED_RATE: f64 = 0.4;
const STROKE_RADIUS: f64 = 1.5;

#[derive(Clone, Copy, Debug)]
struct Particle {
    x: f64,
    y: f64,
    next_x: f64,
    next_y: f64,
    speed_x: f64,
    speed_y: f64,
    life: i64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut Rng64) -> Self {
        let x = rng.number_in_range(10.0, width);
        let y = rng.number_in_range(10.0, height);
        Self {
            x,
            y,
            next_x: x,
            next_y: y,
            speed_x: 0.0,
            speed_y: 0.0,
            life: rng.number_in_range(20.0, 600.0) as i64,
        }
    }

    fn update(&mut self, rng: &mut Rng64) {
        self.x = self.next_x;
        self.y = self.next_y;
        self.speed_x += rng.number_in_range(-1.0, 1.0) * SPEED_RATE;
        self.speed_y += rng.number_in_range(-1.0, 1.0) * SPEED_RATE;
        self.next_x += self.speed_x;
        self.next_y += self.speed_y;
        self.life -= 1;
    }
}

/// Drifting particles with random-walk velocities and finite lives; a
/// translucent wash each frame fades old strokes into motion trails.
#[derive(Clone, Debug)]
pub struct FlowDemo {
    particles: Vec<Particle>,
    rng: Rng64,
    stroke: Rgba8Premul,
    wash: Rgba8Premul,
}

impl FlowDemo {
    /// A field of 300 particles scattered over the surface.
    pub fn new(spec: SurfaceSpec, seed: u64) -> FrescoResult<Self> {
        let mut rng = Rng64::new(seed);
        let particles = (0..PARTICLE_TOTAL)
            .map(|_| Particle::spawn(spec.width, spec.height, &mut rng))
            .collect();
        Ok(Self {
            particles,
            rng,
            stroke: Rgba8Premul::opaque(167, 88, 185),
            wash: Rgba8Premul::from_straight_rgba(0, 0, 0, 102),
        })
    }

    fn stroke_segment(
        surface: &mut dyn Surface,
        from: Point,
        to: Point,
        color: Rgba8Premul,
    ) -> FrescoResult<()> {
        // Stamped round dabs stand in for a 3px round-capped stroke.
        let delta = to - from;
        let steps = delta.hypot().ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            surface.fill_circle(from.lerp(to, t), STROKE_RADIUS, color)?;
        }
        Ok(())
    }
}

impl Demo for FlowDemo {
    fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<()> {
        let size = surface.size();
        surface.fill_rect(
            DirtyRect {
                x: 0.0,
                y: 0.0,
                width: size.width,
                height: size.height,
            },
            self.wash,
        )?;

        for p in &mut self.particles {
            p.update(&mut self.rng);
            if p.life <= 0 {
                *p = Particle::spawn(size.width, size.height, &mut self.rng);
            }
        }
        for p in &self.particles {
            Self::stroke_segment(
                surface,
                Point::new(p.x, p.y),
                Point::new(p.next_x, p.next_y),
                self.stroke,
            )?;
        }
        Ok(())
    }
}
