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


use std::rc::Rc;
use crate::buffer::Buffer;
use crate::gl::Gl;

pub struct ArrayObject<G: Gl> {
    gl: Rc<G>,
    vertex_array: G::VertexArray,
}

impl<G: Gl> ArrayObject<G> {
    pub fn new(gl: Rc<G>) -> Result<ArrayObject<G>, String> {
        let vertex_array = gl.create_vertex_array()?;

        Ok(ArrayObject { gl, vertex_array })
    }

    pub fn id(&self) -> G::VertexArray {
        self.vertex_array
    }

    /// Points attribute `index` at `buffer`. This leaves both the vertex
    /// array and the buffer bound.
    pub fn set_attribute(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        buffer: &Buffer<G>,
        offset: i32,
    ) {
        let gl = &self.gl;

        gl.bind_vertex_array(Some(self.vertex_array));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer.id()));
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer_f32(
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        );
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.vertex_array));
    }
}

impl<G: Gl> Drop for ArrayObject<G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.vertex_array);
    }
}
