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
use crate::gl::Gl;

pub struct Buffer<G: Gl> {
    gl: Rc<G>,
    id: G::Buffer,
}

impl<G: Gl> Drop for Buffer<G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.id);
    }
}

impl<G: Gl> Buffer<G> {
    pub fn new(gl: Rc<G>) -> Result<Buffer<G>, String> {
        let id = gl.create_buffer()?;

        Ok(Buffer { id, gl })
    }

    /// Creates a buffer and fills it with `data` once. The buffer is left
    /// unbound afterwards.
    pub fn new_static(
        gl: Rc<G>,
        target: u32,
        data: &[u8],
    ) -> Result<Buffer<G>, String> {
        let buffer = Buffer::new(gl)?;

        buffer.gl.bind_buffer(target, Some(buffer.id));
        buffer.gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);

        Ok(buffer)
    }

    pub fn id(&self) -> G::Buffer {
        self.id
    }
}
