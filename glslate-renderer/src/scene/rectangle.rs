use glslate_math::Vector;
use web_sys::WebGlUniformLocation;

use crate::{
    error::Error,
    gl::{GlResources, GL},
    scene::Scene,
};

const ROTATION_STEP: f32 = 0.1;

/// A quad spun around the origin: the CPU only advances the angle each
/// frame, the vertex shader applies the rotation.
pub struct Rectangle {
    theta: f32,
    theta_location: Option<WebGlUniformLocation>,
}

impl Rectangle {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/rectangle.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/rectangle.frag");

    pub fn new() -> Self {
        Self { theta: 0.0, theta_location: None }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Rectangle {
    fn init(&mut self, gl: &GL, resources: &mut GlResources) -> Result<(), Error> {
        let program = resources.create_program(Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let vertices = vec![
            Vector::new([0.0, 1.0]),
            Vector::new([-1.0, 0.0]),
            Vector::new([1.0, 0.0]),
            Vector::new([0.0, -1.0]),
        ];
        resources.setup_attribute(program, "a_position", &vertices, 2, GL::FLOAT, GL::STATIC_DRAW)?;

        let location = resources.uniform_location(program, "u_theta")?;
        gl.uniform1f(Some(&location), self.theta);
        self.theta_location = Some(location);

        Ok(())
    }

    fn draw(&mut self, gl: &GL) {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        self.theta += ROTATION_STEP;
        gl.uniform1f(self.theta_location.as_ref(), self.theta);
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }

    fn frame_rate(&self) -> f32 {
        120.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unrotated_and_animated() {
        let scene = Rectangle::new();

        assert_eq!(scene.theta, 0.0);
        assert!(scene.theta_location.is_none());
        assert!(scene.frame_rate() > 0.0);
    }
}
