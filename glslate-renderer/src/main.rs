use glslate_renderer::{
    scene::{SceneKind, View},
    Error, Renderer,
};

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    run().unwrap()
}

fn run() -> Result<(), Error> {
    let renderer = Renderer::create("canvas")?;

    let view = View::mount(renderer.gl(), SceneKind::Sierpinski.create())?;

    // keep the view and its GL objects alive for the lifetime of the page
    std::mem::forget(view);
    std::mem::forget(renderer);

    Ok(())
}
