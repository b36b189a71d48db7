use glslate_math::{MathError, Vector};

use crate::{
    error::Error,
    gl::{GlResources, ShaderKind, GL},
    rng::SimpleRng,
    scene::Scene,
};

const NUM_POINTS: usize = 500_000;

/// Chaos-game fill of a triangle, drawn once as raw points.
pub struct Sierpinski {
    rng: SimpleRng,
    point_count: i32,
}

impl Sierpinski {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/sierpinski.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/sierpinski.frag");

    pub fn new() -> Self {
        Self { rng: SimpleRng::default(), point_count: 0 }
    }
}

impl Default for Sierpinski {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Sierpinski {
    fn init(&mut self, _gl: &GL, resources: &mut GlResources) -> Result<(), Error> {
        let vertex = resources.compile_shader(Self::VERTEX_GLSL, ShaderKind::Vertex)?;
        let fragment = resources.compile_shader(Self::FRAGMENT_GLSL, ShaderKind::Fragment)?;
        let program = resources.link_program(vertex, fragment)?;

        // linked; the shader objects have served their purpose
        resources.release_shader(vertex);
        resources.release_shader(fragment);

        let corners = [
            Vector::new([-1.0, -1.0]),
            Vector::new([0.0, 1.0]),
            Vector::new([1.0, -1.0]),
        ];
        let points = midpoint_fill(&mut self.rng, &corners, NUM_POINTS)?;
        self.point_count = points.len() as i32;

        resources.setup_attribute(program, "a_position", &points, 2, GL::FLOAT, GL::STATIC_DRAW)?;

        Ok(())
    }

    fn draw(&mut self, gl: &GL) {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.draw_arrays(GL::POINTS, 0, self.point_count);
    }
}

/// Classic chaos game: each point is the midpoint of the previous point
/// and a randomly chosen corner. Converges onto the Sierpinski gasket for
/// any seed point inside the triangle.
pub(crate) fn midpoint_fill(
    rng: &mut SimpleRng,
    corners: &[Vector],
    count: usize,
) -> Result<Vec<Vector>, MathError> {
    let u = corners[0].add(&corners[1])?;
    let v = corners[0].add(&corners[2])?;

    let mut points = Vec::with_capacity(count);
    points.push(u.add(&v)?.scale(0.5));

    for i in 1..count {
        let corner = &corners[rng.gen_index(corners.len())];
        let midpoint = points[i - 1].add(corner)?.scale(0.5);
        points.push(midpoint);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> [Vector; 3] {
        [
            Vector::new([-1.0, -1.0]),
            Vector::new([0.0, 1.0]),
            Vector::new([1.0, -1.0]),
        ]
    }

    #[test]
    fn test_point_count() {
        let mut rng = SimpleRng::new(1);
        let points = midpoint_fill(&mut rng, &unit_triangle(), 1000).unwrap();
        assert_eq!(points.len(), 1000);
    }

    #[test]
    fn test_points_stay_inside_corner_bounds() {
        let mut rng = SimpleRng::new(99);
        let points = midpoint_fill(&mut rng, &unit_triangle(), 5000).unwrap();

        // midpoints toward corners can never escape the bounding box
        for p in &points {
            assert!((-1.0..=1.0).contains(&p.get(0)), "{p}");
            assert!((-1.0..=1.0).contains(&p.get(1)), "{p}");
        }
    }

    #[test]
    fn test_mismatched_corner_dimensions_fail() {
        let corners = [
            Vector::new([-1.0, -1.0]),
            Vector::new([0.0, 1.0, 0.5]),
            Vector::new([1.0, -1.0]),
        ];

        let mut rng = SimpleRng::new(5);
        assert!(midpoint_fill(&mut rng, &corners, 10).is_err());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = midpoint_fill(&mut SimpleRng::new(7), &unit_triangle(), 200).unwrap();
        let b = midpoint_fill(&mut SimpleRng::new(7), &unit_triangle(), 200).unwrap();
        assert_eq!(a, b);
    }
}
