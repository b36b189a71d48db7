use std::borrow::Cow;

use glslate_math::{MathError, Matrix, Vector};

use crate::gl::GL;

/// Geometry accepted by the buffer upload paths: either an already
/// flattened float buffer or an ordered sequence of same-dimension vectors.
#[derive(Debug, Clone)]
pub enum VertexData<'a> {
    Raw(&'a [f32]),
    Vectors(&'a [Vector]),
}

impl<'a> VertexData<'a> {
    /// Row-major float buffer, flattening vectors when needed.
    pub(crate) fn flatten(self) -> Result<Cow<'a, [f32]>, MathError> {
        match self {
            VertexData::Raw(data) => Ok(Cow::Borrowed(data)),
            VertexData::Vectors(vectors) => Matrix::flatten_vectors(vectors).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a [f32]> for VertexData<'a> {
    fn from(data: &'a [f32]) -> Self {
        VertexData::Raw(data)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for VertexData<'a> {
    fn from(data: &'a [f32; N]) -> Self {
        VertexData::Raw(data)
    }
}

impl<'a> From<&'a Vec<f32>> for VertexData<'a> {
    fn from(data: &'a Vec<f32>) -> Self {
        VertexData::Raw(data)
    }
}

impl<'a> From<&'a [Vector]> for VertexData<'a> {
    fn from(vectors: &'a [Vector]) -> Self {
        VertexData::Vectors(vectors)
    }
}

impl<'a> From<&'a Vec<Vector>> for VertexData<'a> {
    fn from(vectors: &'a Vec<Vector>) -> Self {
        VertexData::Vectors(vectors)
    }
}

/// Uploads a float slice into the buffer bound at `target`.
///
/// # Safety
/// The `Float32Array` view aliases wasm linear memory directly; nothing may
/// allocate between creating the view and handing it to WebGL.
pub(crate) fn buffer_upload_f32(gl: &GL, target: u32, data: &[f32], usage: u32) {
    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_data_with_array_buffer_view(target, &view, usage);
    }
}

/// Re-uploads a float slice into the buffer bound at `target`, at offset
/// zero. The data must fit the buffer's original allocation.
///
/// # Safety
/// Same aliasing rule as [`buffer_upload_f32`].
pub(crate) fn buffer_update_f32(gl: &GL, target: u32, data: &[f32]) {
    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_sub_data_with_i32_and_array_buffer_view(target, 0, &view);
    }
}
