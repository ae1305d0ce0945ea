use crate::camera::{pixel_to_ndc, Camera, PinHole};
use crate::error::{Error, Result};
use crate::image::*;
use crate::manager::*;
use crate::material::MaterialCoeffs;
use crate::scene::{Light, Scene};
use crate::*;

use log::*;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

pub mod phong;

/// Which parts of the trace loop run: the shadow test on the first hit and
/// the reflection bounces after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    PhongOnly,
    PhongShadow,
    PhongReflection,
    PhongShadowReflection,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::PhongOnly,
        RenderMode::PhongShadow,
        RenderMode::PhongReflection,
        RenderMode::PhongShadowReflection,
    ];

    pub fn shadows(self) -> bool {
        match self {
            RenderMode::PhongShadow | RenderMode::PhongShadowReflection => true,
            RenderMode::PhongOnly | RenderMode::PhongReflection => false,
        }
    }

    pub fn reflections(self) -> bool {
        match self {
            RenderMode::PhongReflection | RenderMode::PhongShadowReflection => true,
            RenderMode::PhongOnly | RenderMode::PhongShadow => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::PhongOnly => "phong",
            RenderMode::PhongShadow => "phong-shadow",
            RenderMode::PhongReflection => "phong-reflection",
            RenderMode::PhongShadowReflection => "phong-shadow-reflection",
        }
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::PhongShadowReflection
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "phong" | "phongonly" => Ok(RenderMode::PhongOnly),
            "phongshadow" => Ok(RenderMode::PhongShadow),
            "phongreflection" => Ok(RenderMode::PhongReflection),
            "phongshadowreflection" => Ok(RenderMode::PhongShadowReflection),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub bounce_limit: usize,
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            mode: RenderMode::default(),
            bounce_limit: 2,
            nthread: num_cpus::get(),
        }
    }
}

/// Color of pixel `(x, y)` in a `w` x `h` image.
pub fn render_pixel<C: Camera + ?Sized>(
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    camera: &C,
    scene: &Scene,
    config: &RenderConfig,
) -> RGBA {
    let (u, v) = pixel_to_ndc(x, y, w, h);
    let ray = camera.ray_to(u, v);
    let color = phong::radiance(scene, &ray, config.mode, config.bounce_limit);
    if !color.is_finite() {
        warn!("pixel ({}, {}) is not finite {:?}", x, y, color);
    }
    color
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Renderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders every pixel of `film`, blocking until the frame is complete.
    pub fn render<C>(&self, scene: Arc<Scene>, camera: &C, film: &FilmArc) -> Result<()>
    where
        C: Camera + Clone + Send + 'static,
    {
        self.render_abortable(scene, camera, film, Arc::new(AtomicBool::new(false)))
    }

    /// Like `render`, but stops handing out rows once `abort` is set and then
    /// returns `Error::Aborted`. Rows already started are finished.
    pub fn render_abortable<C>(
        &self,
        scene: Arc<Scene>,
        camera: &C,
        film: &FilmArc,
        abort: Arc<AtomicBool>,
    ) -> Result<()>
    where
        C: Camera + Clone + Send + 'static,
    {
        use std::thread;
        let started = Instant::now();
        let nthread = self.config.nthread.max(1);
        let (w, h) = film.with_lock(|image| (image.w(), image.h()));
        info!(
            "rendering {}x{} mode={} bounces={} threads={}",
            w, h, self.config.mode, self.config.bounce_limit, nthread
        );

        let manager = Manager::new(h as usize, nthread, abort);
        let manager = Arc::new(Mutex::new(manager));
        let mut threads = vec![];
        for i in 0..nthread {
            let film = film.clone();
            let camera = camera.clone();
            let scene = scene.clone();
            let manager = manager.clone();
            let config = self.config;
            let thread = thread::spawn(move || {
                Self::render_thread(&scene, camera, film, config, i, manager)
            });
            threads.push(thread);
        }

        let mut panicked = false;
        for thread in threads {
            if thread.join().is_err() {
                panicked = true;
            }
        }
        if panicked {
            error!("a render thread panicked");
            return Err(Error::WorkerPanicked);
        }

        let manager = manager.lock().unwrap_or_else(PoisonError::into_inner);
        if manager.is_halted() {
            info!("render aborted after {:?}", started.elapsed());
            return Err(Error::Aborted);
        }
        debug!("rows per thread {:?}", manager.issued());
        info!("rendered in {:?}", started.elapsed());
        Ok(())
    }

    fn render_thread<C: Camera>(
        scene: &Scene,
        camera: C,
        film: FilmArc,
        config: RenderConfig,
        thread_id: usize,
        manager: Arc<Mutex<Manager>>,
    ) {
        debug!("render thread {} started", thread_id);
        let (w, h) = film.with_lock(|image| (image.w(), image.h()));
        let mut row = Vec::with_capacity(w as usize);
        loop {
            let task = manager
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .next(thread_id);
            let task = match task {
                Some(task) => task,
                None => break,
            };

            let yi = task.chunk as u32;
            row.clear();
            for xi in 0..w {
                row.push(render_pixel(xi, yi, w, h, &camera, scene, &config));
            }
            film.with_lock(|image| image.set_row(yi, &row));
        }
        debug!("render thread {} finished", thread_id);
    }
}

/// Renders `spheres` as seen from the reference camera into a new image.
pub fn render(
    width: u32,
    height: u32,
    spheres: &[Sphere],
    light: &Light,
    coeffs: &MaterialCoeffs,
    bounce_limit: usize,
    mode: RenderMode,
) -> Result<Image> {
    let scene = Arc::new(Scene::new(spheres.to_vec(), light.clone(), coeffs.clone()));
    let renderer = Renderer::new(RenderConfig {
        mode,
        bounce_limit,
        ..RenderConfig::default()
    });
    let film = FilmArc::new(Image::new(width, height));
    renderer.render(scene, &PinHole::reference(), &film)?;
    Ok(film.into_image())
}
