use crate::error::Result;
use crate::image::{FilmArc, Image};
use crate::renderer::{RenderConfig, RenderMode, Renderer};
use crate::*;

use log::*;
use std::sync::Arc;

/// Interactive render state: the light X position, the bounce limit and the
/// mode can change at any time, and any change throws the cached frame away.
pub struct Session {
    width: u32,
    height: u32,
    nthread: usize,
    light_x: f32,
    bounce_limit: usize,
    mode: RenderMode,
    cached: Option<Image>,
}

impl Session {
    pub fn new(width: u32, height: u32) -> Self {
        let config = RenderConfig::default();
        Session {
            width,
            height,
            nthread: config.nthread,
            light_x: 0.0,
            bounce_limit: config.bounce_limit,
            mode: config.mode,
            cached: None,
        }
    }

    pub fn with_threads(mut self, nthread: usize) -> Self {
        self.nthread = nthread;
        self
    }

    pub fn light_x(&self) -> f32 {
        self.light_x
    }

    pub fn bounce_limit(&self) -> usize {
        self.bounce_limit
    }

    /// Reflection bounces after the primary hit.
    pub fn reflections(&self) -> usize {
        self.bounce_limit.saturating_sub(1)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_light_x(&mut self, light_x: f32) {
        if self.light_x != light_x {
            self.light_x = light_x;
            self.invalidate();
        }
    }

    pub fn set_bounce_limit(&mut self, bounce_limit: usize) {
        if self.bounce_limit != bounce_limit {
            self.bounce_limit = bounce_limit;
            self.invalidate();
        }
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            self.mode = mode;
            self.invalidate();
        }
    }

    pub fn is_stale(&self) -> bool {
        self.cached.is_none()
    }

    fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            debug!("frame invalidated");
        }
    }

    /// The current frame, rendered from scratch if a parameter changed.
    pub fn frame(&mut self) -> Result<&Image> {
        let image = match self.cached.take() {
            Some(image) => image,
            None => self.render_frame()?,
        };
        Ok(&*self.cached.get_or_insert(image))
    }

    fn render_frame(&self) -> Result<Image> {
        let (camera, scene) = example_scenes::reference(self.light_x)?;
        let renderer = Renderer::new(RenderConfig {
            mode: self.mode,
            bounce_limit: self.bounce_limit,
            nthread: self.nthread,
        });
        let film = FilmArc::new(Image::new(self.width, self.height));
        renderer.render(Arc::new(scene), &camera, &film)?;
        Ok(film.into_image())
    }
}
