//! Test doubles: a call-recording GL backend and a scripted platform.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::backend::GlBackend;
use crate::error::SurfaceError;
use crate::platform::{Platform, Surface};
use crate::types::SurfaceSize;

/// One recorded GL call. Handles are plain integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearColor([f32; 4]),
    Clear(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, data: Vec<u8>, usage: u32 },
    CreateShader { shader: u32, shader_type: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    GetAttribLocation(String),
    UseProgram(Option<u32>),
    Viewport(i32, i32, i32, i32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    DrawArrays { mode: u32, first: i32, count: i32 },
}

/// Failures the recording backend injects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    pub vertex_compile: bool,
    pub fragment_compile: bool,
    pub link: bool,
    pub missing_attribute: bool,
    pub create_buffer: bool,
}

/// Location returned for a successfully resolved attribute.
pub const ATTRIBUTE_LOCATION: u32 = 5;

#[derive(Debug, Default)]
pub struct RecordingGl {
    faults: Faults,
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<u32>,
    shader_types: RefCell<HashMap<u32, u32>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: Faults) -> Self {
        Self {
            faults,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
    }

    fn shader_fails(&self, shader: u32) -> bool {
        match self.shader_types.borrow().get(&shader) {
            Some(&glow::VERTEX_SHADER) => self.faults.vertex_compile,
            Some(&glow::FRAGMENT_SHADER) => self.faults.fragment_compile,
            _ => false,
        }
    }
}

impl GlBackend for RecordingGl {
    type Buffer = u32;
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;

    unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    unsafe fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    unsafe fn create_buffer(&self) -> Result<u32, String> {
        if self.faults.create_buffer {
            return Err("out of memory".into());
        }
        let buffer = self.handle();
        self.record(Call::CreateBuffer(buffer));
        Ok(buffer)
    }

    unsafe fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            data: data.to_vec(),
            usage,
        });
    }

    unsafe fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let shader = self.handle();
        self.shader_types.borrow_mut().insert(shader, shader_type);
        self.record(Call::CreateShader {
            shader,
            shader_type,
        });
        Ok(shader)
    }

    unsafe fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    unsafe fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    unsafe fn get_shader_compile_status(&self, shader: u32) -> bool {
        !self.shader_fails(shader)
    }

    unsafe fn get_shader_info_log(&self, shader: u32) -> String {
        if self.shader_fails(shader) {
            format!("ERROR: 0:{shader}: syntax error")
        } else {
            String::new()
        }
    }

    unsafe fn create_program(&self) -> Result<u32, String> {
        let program = self.handle();
        self.record(Call::CreateProgram(program));
        Ok(program)
    }

    unsafe fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    unsafe fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    unsafe fn get_program_link_status(&self, _program: u32) -> bool {
        !self.faults.link
    }

    unsafe fn get_program_info_log(&self, _program: u32) -> String {
        if self.faults.link {
            "error: vertex output not consumed".into()
        } else {
            String::new()
        }
    }

    unsafe fn get_attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.record(Call::GetAttribLocation(name.to_owned()));
        (!self.faults.missing_attribute).then_some(ATTRIBUTE_LOCATION)
    }

    unsafe fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    unsafe fn create_vertex_array(&self) -> Result<u32, String> {
        let vertex_array = self.handle();
        self.record(Call::CreateVertexArray(vertex_array));
        Ok(vertex_array)
    }

    unsafe fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    unsafe fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays { mode, first, count });
    }
}

/// A platform that either hands out a [`RecordingGl`] or fails acquisition.
#[derive(Debug, Default)]
pub struct MockPlatform {
    pub failure: Option<SurfaceError>,
    pub faults: Faults,
    pub size: SurfaceSize,
    pub alerts: RefCell<Vec<String>>,
    pub requested: RefCell<Vec<String>>,
}

impl MockPlatform {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn failing(failure: SurfaceError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }
}

// SAFETY: the recording backend has no real context to make current.
unsafe impl Platform for MockPlatform {
    type Gl = RecordingGl;

    fn acquire_surface(&self, canvas_id: &str) -> Result<Surface<RecordingGl>, SurfaceError> {
        self.requested.borrow_mut().push(canvas_id.to_owned());
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(Surface {
            gl: RecordingGl::with_faults(self.faults),
            size: self.size,
        })
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}
