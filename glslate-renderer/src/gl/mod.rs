mod arena;
mod buffer;
mod renderer;
mod resources;

pub use arena::Handle;
pub use buffer::VertexData;
pub(crate) use buffer::{buffer_update_f32, buffer_upload_f32};
pub use renderer::Renderer;
pub use resources::{GlResources, ShaderKind};

pub type GL = web_sys::WebGl2RenderingContext;

/// Generation-checked reference to a compiled shader object.
pub type ShaderHandle = Handle<web_sys::WebGlShader>;
/// Generation-checked reference to a linked program object.
pub type ProgramHandle = Handle<web_sys::WebGlProgram>;
/// Generation-checked reference to an uploaded data buffer.
pub type BufferHandle = Handle<web_sys::WebGlBuffer>;
