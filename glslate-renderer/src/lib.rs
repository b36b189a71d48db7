mod error;
mod gl;
mod rng;
mod scheduler;

pub(crate) mod js;

pub mod scene;
#[cfg(feature = "js-api")]
pub mod wasm;

pub use glslate_math::{Axis, MathError, Matrix, Vector};

pub use crate::{
    error::Error,
    gl::{
        BufferHandle, GlResources, Handle, ProgramHandle, Renderer, ShaderHandle, ShaderKind,
        VertexData, GL,
    },
    rng::SimpleRng,
    scheduler::FrameScheduler,
};
