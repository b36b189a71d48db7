use glslate_math::{MathError, Vector};

use crate::{
    error::Error,
    gl::{GlResources, GL},
    rng::SimpleRng,
    scene::{sierpinski_three::tetrahedron_corners, Scene},
};

const NUM_POINTS: usize = 5_000;

/// Chaos game over a tetrahedron with a parallel per-vertex color buffer:
/// each point is tinted by the position it was generated from.
pub struct SierpinskiColors {
    rng: SimpleRng,
    point_count: i32,
}

impl SierpinskiColors {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/sierpinski_colors.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/sierpinski_colors.frag");

    pub fn new() -> Self {
        Self { rng: SimpleRng::default(), point_count: 0 }
    }
}

impl Default for SierpinskiColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SierpinskiColors {
    fn init(&mut self, _gl: &GL, resources: &mut GlResources) -> Result<(), Error> {
        let program = resources.create_program(Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let corners = tetrahedron_corners();
        let (points, colors) = tinted_lerp_fill(&mut self.rng, &corners, NUM_POINTS)?;
        self.point_count = points.len() as i32;

        resources.setup_attribute(program, "a_position", &points, 3, GL::FLOAT, GL::STATIC_DRAW)?;
        resources.setup_attribute(program, "a_color", &colors, 4, GL::FLOAT, GL::STATIC_DRAW)?;

        Ok(())
    }

    fn draw(&mut self, gl: &GL) {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.draw_arrays(GL::POINTS, 0, self.point_count);
    }

    fn frame_rate(&self) -> f32 {
        60.0
    }
}

/// Chaos game that also emits an RGBA color per point, mapping the
/// previous point's `[-1, 1]` coordinates into `[0, 1]` channels.
pub(crate) fn tinted_lerp_fill(
    rng: &mut SimpleRng,
    corners: &[Vector],
    count: usize,
) -> Result<(Vec<Vector>, Vec<Vector>), MathError> {
    let mut points = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    points.push(Vector::new([0.0, 0.0, 0.0]));
    colors.push(Vector::new([0.0, 0.0, 0.0, 1.0]));

    for i in 1..count {
        let corner = &corners[rng.gen_index(corners.len())];
        let next = points[i - 1].lerp(corner, 0.5)?;
        points.push(next);

        let source = &points[i - 1];
        colors.push(Vector::new([
            (1.0 + source.get(0)) / 2.0,
            (1.0 + source.get(1)) / 2.0,
            (1.0 + source.get(2)) / 2.0,
            1.0,
        ]));
    }

    Ok((points, colors))
}
