use glslate_math::MathError;

/// Error categories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to initialize the WebGL context or retrieve DOM elements.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Shader compilation, linking, or program creation errors. Carries the
    /// driver's info log where one is available.
    #[error("Shader error: {0}")]
    Shader(String),

    /// WebGL resource creation or lookup errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Vector/matrix shape errors surfaced while preparing geometry.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl Error {
    // Helper constructors for common error scenarios

    // Initialization errors
    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn canvas_not_found(canvas_id: &str) -> Self {
        Self::Initialization(format!("Unable to retrieve canvas: {canvas_id}"))
    }

    pub fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL2 rendering context".to_string())
    }

    // Shader errors
    pub fn shader_creation_failed() -> Self {
        Self::Shader("Shader object creation failed".to_string())
    }

    pub fn shader_compile_failed(kind: &str, log: String) -> Self {
        Self::Shader(format!("{kind} shader compile failed: {log}"))
    }

    pub fn program_creation_failed() -> Self {
        Self::Shader("Program object creation failed".to_string())
    }

    pub fn program_link_failed(log: String) -> Self {
        Self::Shader(format!("Program link failed: {log}"))
    }

    // Resource errors
    pub fn buffer_creation_failed() -> Self {
        Self::Resource("Failed to create buffer".to_string())
    }

    pub fn stale_handle(kind: &str) -> Self {
        Self::Resource(format!("Stale {kind} handle: object was already released"))
    }

    pub fn attribute_not_found(name: &str) -> Self {
        Self::Resource(format!("Attribute not found in linked program: {name}"))
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    pub fn unknown_scene(path: &str) -> Self {
        Self::Resource(format!("No scene registered under path: {path}"))
    }
}
