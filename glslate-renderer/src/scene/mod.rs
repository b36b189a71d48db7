mod menu;
mod rectangle;
mod sierpinski;
mod sierpinski_colors;
mod sierpinski_tetra;
mod sierpinski_three;

use std::{cell::RefCell, rc::Rc};

pub use menu::{find_scene, flatten_menu, route_tree, MenuEntry, RouteNode, SceneKind};
pub use rectangle::Rectangle;
pub use sierpinski::Sierpinski;
pub use sierpinski_colors::SierpinskiColors;
pub use sierpinski_tetra::SierpinskiTetra;
pub use sierpinski_three::SierpinskiThree;

use crate::{
    error::Error,
    gl::{GlResources, GL},
    scheduler::FrameScheduler,
};

/// One demo: builds its geometry and programs at mount time, then issues
/// the draw calls for each frame.
pub trait Scene {
    /// Compiles programs and uploads geometry through `resources`.
    fn init(&mut self, gl: &GL, resources: &mut GlResources) -> Result<(), Error>;

    /// Issues the draw calls for one frame.
    fn draw(&mut self, gl: &GL);

    /// Requested frame rate; a rate <= 0 renders a single static frame.
    fn frame_rate(&self) -> f32 {
        0.0
    }
}

/// An active demo: the scene, its GPU resources, and the frame loop.
///
/// Mounting runs `Scene::init` against a fresh [`GlResources`] and
/// activates a [`FrameScheduler`] at the scene's requested rate. Dropping
/// the view cancels the scheduler before the resources are released
/// (field order), so no stale frame can fire against deleted objects.
/// The context handle belongs to one mounted view at a time; switching
/// scenes means dropping the old view first.
pub struct View {
    scheduler: FrameScheduler,
    resources: Rc<RefCell<GlResources>>,
}

impl View {
    pub fn mount(gl: &GL, mut scene: Box<dyn Scene>) -> Result<Self, Error> {
        let mut resources = GlResources::new(gl);
        scene.init(gl, &mut resources)?;

        let frame_rate = scene.frame_rate();
        let scene = Rc::new(RefCell::new(scene));

        let draw_gl = gl.clone();
        let draw_scene = scene.clone();
        let scheduler = FrameScheduler::new(
            move || draw_scene.borrow_mut().draw(&draw_gl),
            frame_rate,
            true,
        );
        scheduler.activate();

        Ok(View {
            scheduler,
            resources: Rc::new(RefCell::new(resources)),
        })
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn resources(&self) -> Rc<RefCell<GlResources>> {
        self.resources.clone()
    }
}
