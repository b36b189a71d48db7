use glslate_math::{MathError, Vector};

use crate::{
    error::Error,
    gl::{GlResources, GL},
    rng::SimpleRng,
    scene::Scene,
};

const NUM_POINTS: usize = 5_000;

/// Chaos game over a tetrahedron; the vertex shader derives each point's
/// color from its position.
pub struct SierpinskiThree {
    rng: SimpleRng,
    point_count: i32,
}

impl SierpinskiThree {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/sierpinski_three.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/sierpinski_three.frag");

    pub fn new() -> Self {
        Self { rng: SimpleRng::default(), point_count: 0 }
    }
}

impl Default for SierpinskiThree {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SierpinskiThree {
    fn init(&mut self, gl: &GL, resources: &mut GlResources) -> Result<(), Error> {
        let program = resources.create_program(Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let corners = tetrahedron_corners();
        let points = lerp_fill(&mut self.rng, &corners, NUM_POINTS)?;
        self.point_count = points.len() as i32;

        // long-hand attribute wiring: upload, resolve, point
        resources.create_buffer(&points, GL::ARRAY_BUFFER, GL::STATIC_DRAW)?;
        let location = resources.attribute_location(program, "a_position")?;
        gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(location);

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

pub(crate) fn tetrahedron_corners() -> [Vector; 4] {
    [
        Vector::new([-0.5, -0.5, -0.5]),
        Vector::new([0.5, -0.5, -0.5]),
        Vector::new([0.0, 0.5, 0.0]),
        Vector::new([0.0, -0.5, 0.5]),
    ]
}

/// Chaos game via interpolation: each point sits halfway between the
/// previous point and a randomly chosen corner.
pub(crate) fn lerp_fill(
    rng: &mut SimpleRng,
    corners: &[Vector],
    count: usize,
) -> Result<Vec<Vector>, MathError> {
    let mut points = Vec::with_capacity(count);
    points.push(Vector::new([0.0, 0.0, 0.0]));

    for i in 1..count {
        let corner = &corners[rng.gen_index(corners.len())];
        let next = points[i - 1].lerp(corner, 0.5)?;
        points.push(next);
    }

    Ok(points)
}
