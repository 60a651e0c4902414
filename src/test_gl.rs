// Colored Squares – A pyramid of colored squares
// Copyright (C) 2023  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.


//! A [`Gl`] implementation that doesn’t need a GPU. It hands out
//! increasing non-zero names for every object and records each call so
//! that the tests can inspect the exact command stream.

use std::cell::{Cell, RefCell};
use crate::gl::Gl;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader { id: u32, shader_type: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    GetUniformLocation(String),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, data: Vec<u8>, usage: u32 },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    UniformMatrix4 {
        location: Option<u32>,
        transpose: bool,
        value: Vec<f32>,
    },
    Uniform4 { location: Option<u32>, value: [f32; 4] },
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear(u32),
    Disable(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
}

pub const MVP_LOCATION: u32 = 1;
pub const COLOR_LOCATION: u32 = 2;

pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    fail_compile: bool,
}

impl RecordingGl {
    pub fn new() -> RecordingGl {
        RecordingGl {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_compile: false,
        }
    }

    pub fn with_broken_shaders() -> RecordingGl {
        RecordingGl {
            fail_compile: true,
            ..RecordingGl::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn n_deletions(&self) -> usize {
        self.calls.borrow().iter().filter(|call| matches!(
            call,
            Call::DeleteBuffer(_)
                | Call::DeleteVertexArray(_)
                | Call::DeleteProgram(_)
                | Call::DeleteShader(_)
        )).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn gen_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Gl for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = u32;

    fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let id = self.gen_id();
        self.record(Call::CreateShader { id, shader_type });
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, _shader: u32) -> bool {
        !self.fail_compile
    }

    fn get_shader_info_log(&self, _shader: u32) -> String {
        "0:1(1): error: syntax error".to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.gen_id();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        true
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        String::new()
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.record(Call::GetUniformLocation(name.to_string()));

        match name {
            "mvp" => Some(MVP_LOCATION),
            "color" => Some(COLOR_LOCATION),
            _ => None,
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.gen_id();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer { target, buffer });
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData { target, data: data.to_vec(), usage });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.gen_id();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn vertex_attrib_pointer_f32(
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

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn uniform_matrix_4_f32_slice(
        &self,
        location: Option<&u32>,
        transpose: bool,
        value: &[f32],
    ) {
        self.record(Call::UniformMatrix4 {
            location: location.copied(),
            transpose,
            value: value.to_vec(),
        });
    }

    fn uniform_4_f32(
        &self,
        location: Option<&u32>,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) {
        self.record(Call::Uniform4 {
            location: location.copied(),
            value: [x, y, z, w],
        });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn disable(&self, parameter: u32) {
        self.record(Call::Disable(parameter));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays { mode, first, count });
    }
}
