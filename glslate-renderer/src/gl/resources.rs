use web_sys::{console, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::{
    error::Error,
    gl::{
        arena::Arena, buffer_update_f32, buffer_upload_f32, BufferHandle, ProgramHandle,
        ShaderHandle, VertexData, GL,
    },
};

/// Shader stage of a compiled unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn label(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }
}

impl From<ShaderKind> for u32 {
    fn from(kind: ShaderKind) -> u32 {
        match kind {
            ShaderKind::Vertex => GL::VERTEX_SHADER,
            ShaderKind::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

/// Arena-backed owner of the shader, program, and buffer objects created
/// against one rendering context.
///
/// The context handle is passed in explicitly at construction and held for
/// the lifetime of the instance; one `GlResources` belongs to exactly one
/// mounted view at a time. Handles returned from the create operations are
/// generation-checked: using a handle after its object was released yields
/// a `Resource` error rather than touching a recycled slot.
///
/// Compile and link failures are reported back to the caller as `Err` with
/// the driver's info log attached, after the rejected object has been
/// deleted; nothing in here panics on graphics-subsystem failures.
#[derive(Debug)]
pub struct GlResources {
    gl: GL,
    shaders: Arena<WebGlShader>,
    programs: Arena<WebGlProgram>,
    buffers: Arena<WebGlBuffer>,
}

impl GlResources {
    pub fn new(gl: &GL) -> Self {
        Self {
            gl: gl.clone(),
            shaders: Arena::new(),
            programs: Arena::new(),
            buffers: Arena::new(),
        }
    }

    /// Compiles shader source for the given stage.
    ///
    /// On rejection the shader object is deleted immediately; the error
    /// carries the compile log, which is also echoed to the console.
    pub fn compile_shader(&mut self, source: &str, kind: ShaderKind) -> Result<ShaderHandle, Error> {
        let shader = self
            .gl
            .create_shader(kind.into())
            .ok_or(Error::shader_creation_failed())?;

        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let status = self.gl.get_shader_parameter(&shader, GL::COMPILE_STATUS);
        if !status.as_bool().unwrap_or(false) {
            let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
            console::error_2(&"Shader compile failed:".into(), &log.clone().into());
            self.gl.delete_shader(Some(&shader));
            return Err(Error::shader_compile_failed(kind.label(), log));
        }

        Ok(self.shaders.insert(shader))
    }

    /// Attaches both shaders to a fresh program object and links it.
    ///
    /// Only on success is the program activated as current. On link failure
    /// the program object is deleted and the link log returned.
    pub fn link_program(
        &mut self,
        vertex: ShaderHandle,
        fragment: ShaderHandle,
    ) -> Result<ProgramHandle, Error> {
        let vertex = self.shaders.get(vertex).ok_or(Error::stale_handle("shader"))?;
        let fragment = self.shaders.get(fragment).ok_or(Error::stale_handle("shader"))?;

        let program = self.gl.create_program().ok_or(Error::program_creation_failed())?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);

        let status = self.gl.get_program_parameter(&program, GL::LINK_STATUS);
        if !status.as_bool().unwrap_or(false) {
            let log = self.gl.get_program_info_log(&program).unwrap_or_default();
            console::error_2(&"Program link failed:".into(), &log.clone().into());
            self.gl.delete_program(Some(&program));
            return Err(Error::program_link_failed(log));
        }

        self.gl.use_program(Some(&program));
        Ok(self.programs.insert(program))
    }

    /// Compiles both sources and links them in one step.
    ///
    /// The intermediate shader objects are released after linking has been
    /// attempted, whatever the outcome.
    pub fn create_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<ProgramHandle, Error> {
        let vertex = self.compile_shader(vertex_src, ShaderKind::Vertex)?;
        let fragment = match self.compile_shader(fragment_src, ShaderKind::Fragment) {
            Ok(handle) => handle,
            Err(err) => {
                self.release_shader(vertex);
                return Err(err);
            },
        };

        let linked = self.link_program(vertex, fragment);

        self.release_shader(vertex);
        self.release_shader(fragment);

        linked
    }

    /// Creates a buffer at `target`, uploads `data`, and leaves the buffer
    /// bound. Vector sequences are flattened row-major before upload.
    pub fn create_buffer<'a>(
        &mut self,
        data: impl Into<VertexData<'a>>,
        target: u32,
        usage: u32,
    ) -> Result<BufferHandle, Error> {
        let flat = data.into().flatten()?;

        let buffer = self.gl.create_buffer().ok_or(Error::buffer_creation_failed())?;
        self.gl.bind_buffer(target, Some(&buffer));
        buffer_upload_f32(&self.gl, target, &flat, usage);

        Ok(self.buffers.insert(buffer))
    }

    /// Uploads `data` into a fresh buffer and wires it to the named vertex
    /// attribute of `program`.
    ///
    /// When the attribute is absent from the linked program the buffer is
    /// left in the arena (reclaimed at teardown) and an error is returned
    /// after logging the lookup failure.
    pub fn setup_attribute<'a>(
        &mut self,
        program: ProgramHandle,
        name: &str,
        data: impl Into<VertexData<'a>>,
        components: i32,
        component_type: u32,
        usage: u32,
    ) -> Result<BufferHandle, Error> {
        let buffer = self.create_buffer(data, GL::ARRAY_BUFFER, usage)?;

        let location = match self.attribute_location(program, name) {
            Ok(location) => location,
            Err(err) => {
                console::warn_1(&err.to_string().into());
                return Err(err);
            },
        };

        self.gl
            .vertex_attrib_pointer_with_i32(location, components, component_type, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);

        Ok(buffer)
    }

    /// Re-uploads `data` into an existing buffer at offset zero.
    ///
    /// The new data must not exceed the buffer's original allocation; what
    /// happens beyond it is defined by the graphics subsystem.
    pub fn update_buffer<'a>(
        &self,
        buffer: BufferHandle,
        data: impl Into<VertexData<'a>>,
        target: u32,
    ) -> Result<(), Error> {
        let flat = data.into().flatten()?;
        let buffer = self.buffers.get(buffer).ok_or(Error::stale_handle("buffer"))?;

        self.gl.bind_buffer(target, Some(buffer));
        buffer_update_f32(&self.gl, target, &flat);

        Ok(())
    }

    /// Activates `program` as current.
    pub fn use_program(&self, program: ProgramHandle) -> Result<(), Error> {
        let program = self.programs.get(program).ok_or(Error::stale_handle("program"))?;
        self.gl.use_program(Some(program));
        Ok(())
    }

    /// Resolves the location of a named vertex attribute.
    pub fn attribute_location(&self, program: ProgramHandle, name: &str) -> Result<u32, Error> {
        let program = self.programs.get(program).ok_or(Error::stale_handle("program"))?;

        let location = self.gl.get_attrib_location(program, name);
        if location < 0 {
            return Err(Error::attribute_not_found(name));
        }
        Ok(location as u32)
    }

    /// Resolves the location of a named uniform.
    pub fn uniform_location(
        &self,
        program: ProgramHandle,
        name: &str,
    ) -> Result<WebGlUniformLocation, Error> {
        let program = self.programs.get(program).ok_or(Error::stale_handle("program"))?;

        self.gl
            .get_uniform_location(program, name)
            .ok_or(Error::uniform_location_failed(name))
    }

    /// The underlying program object, if the handle is still live.
    pub fn program(&self, handle: ProgramHandle) -> Option<&WebGlProgram> {
        self.programs.get(handle)
    }

    /// The underlying buffer object, if the handle is still live.
    pub fn buffer(&self, handle: BufferHandle) -> Option<&WebGlBuffer> {
        self.buffers.get(handle)
    }

    pub fn release_shader(&mut self, handle: ShaderHandle) {
        if let Some(shader) = self.shaders.remove(handle) {
            self.gl.delete_shader(Some(&shader));
        }
    }

    pub fn release_program(&mut self, handle: ProgramHandle) {
        if let Some(program) = self.programs.remove(handle) {
            self.gl.delete_program(Some(&program));
        }
    }

    pub fn release_buffer(&mut self, handle: BufferHandle) {
        if let Some(buffer) = self.buffers.remove(handle) {
            self.gl.delete_buffer(Some(&buffer));
        }
    }

    /// Deletes every tracked object; all outstanding handles go stale.
    pub fn release_all(&mut self) {
        for shader in self.shaders.drain() {
            self.gl.delete_shader(Some(&shader));
        }
        for program in self.programs.drain() {
            self.gl.delete_program(Some(&program));
        }
        for buffer in self.buffers.drain() {
            self.gl.delete_buffer(Some(&buffer));
        }
    }
}

impl Drop for GlResources {
    fn drop(&mut self) {
        self.release_all();
    }
}
