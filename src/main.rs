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


mod config;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use std::process::ExitCode;
use std::rc::Rc;
use glow::HasContext;
use colored_squares::ScenePainter;
use colored_squares::logging::{init_logging, LoggingConfig};
use config::WindowConfig;

struct Context {
    gl: Rc<glow::Context>,
    _gl_context: sdl2::video::GLContext,
    window: sdl2::video::Window,
    _video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
    _sdl: sdl2::Sdl,
}

impl Context {
    fn new(config: &WindowConfig) -> Result<Context, String> {
        let sdl = sdl2::init()?;

        let event_pump = sdl.event_pump()?;

        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();

        gl_attr.set_red_size(8);
        gl_attr.set_green_size(8);
        gl_attr.set_blue_size(8);
        gl_attr.set_double_buffer(true);
        gl_attr.set_context_major_version(config.gl_major_version);
        gl_attr.set_context_minor_version(config.gl_minor_version);
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);

        let mut window = match video_subsystem.window(
            config.title,
            config.width,
            config.height,
        )
            .opengl()
            .resizable()
            .allow_highdpi()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(e.to_string()),
        };

        window.set_minimum_size(config.min_width, config.min_height)
            .map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;

        window.gl_make_current(&gl_context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|proc| {
                video_subsystem.gl_get_proc_address(proc) as *const _
            })
        };

        unsafe {
            log::info!(
                "GL_VERSION: {}",
                gl.get_parameter_string(glow::VERSION),
            );
            log::info!(
                "GL_RENDERER: {}",
                gl.get_parameter_string(glow::RENDERER),
            );
        }

        Ok(Context {
            gl: Rc::new(gl),
            _gl_context: gl_context,
            window,
            _video_subsystem: video_subsystem,
            event_pump,
            _sdl: sdl,
        })
    }
}

struct ViewerData<'a> {
    context: &'a mut Context,
    painter: ScenePainter<glow::Context>,
    redraw_queued: bool,
    should_quit: bool,
}

impl<'a> ViewerData<'a> {
    fn new(context: &'a mut Context) -> ViewerData<'a> {
        let mut painter = ScenePainter::new(Rc::clone(&context.gl));

        let (width, height) = context.window.drawable_size();
        painter.update_fb_size(width, height);

        ViewerData {
            context,
            painter,
            redraw_queued: true,
            should_quit: false,
        }
    }
}

fn handle_event(viewer_data: &mut ViewerData, event: Event) {
    match event {
        Event::Quit {..} |
        Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
            viewer_data.should_quit = true;
        },
        Event::Window { win_event, .. } => {
            match win_event {
                WindowEvent::SizeChanged(..) => {
                    let (width, height) =
                        viewer_data.context.window.drawable_size();
                    viewer_data.painter.update_fb_size(width, height);
                    viewer_data.redraw_queued = true;
                },
                WindowEvent::Exposed => {
                    viewer_data.redraw_queued = true;
                },
                _ => (),
            }
        },
        _ => {}
    }
}

fn redraw(viewer_data: &mut ViewerData) {
    viewer_data.redraw_queued = false;

    viewer_data.painter.paint();

    viewer_data.context.window.gl_swap_window();
}

fn main_loop(viewer_data: &mut ViewerData) {
    while !viewer_data.should_quit {
        if viewer_data.redraw_queued {
            while let Some(event) =
                viewer_data.context.event_pump.poll_event()
            {
                handle_event(viewer_data, event);
            }

            redraw(viewer_data);
        } else {
            let event = viewer_data.context.event_pump.wait_event();
            handle_event(viewer_data, event);
        }
    }
}

pub fn main() -> ExitCode {
    if let Err(e) = init_logging(&LoggingConfig::default()) {
        eprintln!("{}", e);
    }

    let config = WindowConfig::default();

    let mut context = match Context::new(&config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to initialise SDL: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut viewer_data = ViewerData::new(&mut context);

    main_loop(&mut viewer_data);

    // The GL context is still current here. It is destroyed when
    // `context` is dropped.
    viewer_data.painter.teardown();

    ExitCode::SUCCESS
}
