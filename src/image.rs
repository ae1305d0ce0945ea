use crate::error::Result;
use crate::*;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGBA>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGBA::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGBA {
        &self.buf[(y * self.w + x) as usize]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGBA {
        &mut self.buf[(y * self.w + x) as usize]
    }

    pub fn set_row(&mut self, y: u32, row: &[RGBA]) {
        let start = (y * self.w) as usize;
        self.buf[start..start + row.len()].copy_from_slice(row);
    }

    pub fn pixels(&self) -> &[RGBA] {
        &self.buf
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        self.buf.iter().flat_map(|c| c.to_rgba8().to_vec()).collect()
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        ::image::save_buffer(
            path,
            &self.to_rgba8(),
            self.w,
            self.h,
            ::image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Film shared between render threads.
#[derive(Clone)]
pub struct FilmArc(Arc<Mutex<Image>>);

impl FilmArc {
    pub fn new(image: Image) -> Self {
        FilmArc(Arc::new(Mutex::new(image)))
    }

    pub fn with_lock<T, F: FnOnce(&mut Image) -> T>(&self, f: F) -> T {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// The finished image; clones only if other handles are still alive.
    pub fn into_image(self) -> Image {
        match Arc::try_unwrap(self.0) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(arc) => arc.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        }
    }
}
