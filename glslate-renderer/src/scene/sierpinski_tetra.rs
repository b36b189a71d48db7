use glslate_math::{MathError, Vector};

use crate::{
    error::Error,
    gl::{GlResources, GL},
    scene::{sierpinski_three::tetrahedron_corners, Scene},
};

const SUBDIVISIONS: u32 = 5;

/// Solid Sierpinski tetrahedron built by recursive subdivision, rendered
/// as depth-tested triangles with one flat color per face.
pub struct SierpinskiTetra {
    vertex_count: i32,
}

impl SierpinskiTetra {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/sierpinski_tetra.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/sierpinski_tetra.frag");

    pub fn new() -> Self {
        Self { vertex_count: 0 }
    }
}

impl Default for SierpinskiTetra {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SierpinskiTetra {
    fn init(&mut self, gl: &GL, resources: &mut GlResources) -> Result<(), Error> {
        let program = resources.create_program(Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let corners = tetrahedron_corners();
        let mesh = subdivide_tetra(&corners, &face_palette(), SUBDIVISIONS)?;
        self.vertex_count = mesh.positions.len() as i32;

        resources.setup_attribute(
            program,
            "a_position",
            &mesh.positions,
            3,
            GL::FLOAT,
            GL::STATIC_DRAW,
        )?;
        resources.setup_attribute(program, "a_color", &mesh.colors, 3, GL::FLOAT, GL::STATIC_DRAW)?;

        gl.enable(GL::DEPTH_TEST);

        Ok(())
    }

    fn draw(&mut self, gl: &GL) {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
    }

    fn frame_rate(&self) -> f32 {
        60.0
    }
}

pub(crate) struct TetraMesh {
    pub positions: Vec<Vector>,
    pub colors: Vec<Vector>,
}

fn face_palette() -> [Vector; 4] {
    [
        Vector::new([1.0, 0.0, 0.0]),
        Vector::new([0.0, 1.0, 0.0]),
        Vector::new([0.0, 0.0, 1.0]),
        Vector::new([0.0, 0.0, 0.0]),
    ]
}

/// Recursively splits a tetrahedron into four corner tetrahedra (the
/// center octahedron is discarded, which is what leaves the gasket) and
/// emits the faces of the leaves as flat-colored triangles.
pub(crate) fn subdivide_tetra(
    corners: &[Vector; 4],
    palette: &[Vector; 4],
    depth: u32,
) -> Result<TetraMesh, MathError> {
    let mut mesh = TetraMesh { positions: Vec::new(), colors: Vec::new() };

    let [a, b, c, d] = corners;
    divide(&mut mesh, a, b, c, d, palette, depth)?;

    Ok(mesh)
}

fn divide(
    mesh: &mut TetraMesh,
    a: &Vector,
    b: &Vector,
    c: &Vector,
    d: &Vector,
    palette: &[Vector; 4],
    depth: u32,
) -> Result<(), MathError> {
    if depth == 0 {
        emit_tetra(mesh, a, b, c, d, palette);
        return Ok(());
    }

    let ab = a.lerp(b, 0.5)?;
    let ac = a.lerp(c, 0.5)?;
    let ad = a.lerp(d, 0.5)?;
    let bc = b.lerp(c, 0.5)?;
    let bd = b.lerp(d, 0.5)?;
    let cd = c.lerp(d, 0.5)?;

    let depth = depth - 1;
    divide(mesh, a, &ab, &ac, &ad, palette, depth)?;
    divide(mesh, &ab, b, &bc, &bd, palette, depth)?;
    divide(mesh, &ac, c, &bc, &cd, palette, depth)?;
    divide(mesh, &ad, d, &cd, &bd, palette, depth)?;

    Ok(())
}

fn emit_tetra(
    mesh: &mut TetraMesh,
    a: &Vector,
    b: &Vector,
    c: &Vector,
    d: &Vector,
    palette: &[Vector; 4],
) {
    emit_triangle(mesh, a, c, b, &palette[0]);
    emit_triangle(mesh, a, c, d, &palette[1]);
    emit_triangle(mesh, a, b, d, &palette[2]);
    emit_triangle(mesh, b, c, d, &palette[3]);
}

fn emit_triangle(mesh: &mut TetraMesh, a: &Vector, b: &Vector, c: &Vector, color: &Vector) {
    for vertex in [a, b, c] {
        mesh.positions.push(vertex.clone());
        mesh.colors.push(color.clone());
    }
}
