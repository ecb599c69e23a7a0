use rand::Rng;
use stardust_config::schema::StardustConfig;
use tracing::{debug, info, warn};

use crate::backend::SurfaceRenderer;
use crate::galaxy::{self, GalaxyAnimation, GalaxyParameters};
use crate::gpu::RendererError;
use crate::scene::{FogExp2, ObjectId, PerspectiveCamera, Points, PointsMaterial, Scene};

use super::clock::Clock;
use super::host::{FrameHost, FrameRequest, ResizeSubscription, Viewport};

/// Frame loop state. `stop` is the only way out of `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// The graphics resources of one mounted effect and the loop driving them.
pub struct RenderSession<R: SurfaceRenderer, H: FrameHost> {
    renderer: Option<R>,
    host: H,
    clock: Box<dyn Clock>,
    scene: Option<Scene>,
    camera: Option<PerspectiveCamera>,
    galaxy: Option<ObjectId>,
    animation: GalaxyAnimation,
    state: LoopState,
    pending_frame: Option<FrameRequest>,
    resize_subscription: Option<ResizeSubscription>,
    max_pixel_ratio: f64,
    frames_rendered: u64,
}

impl<R: SurfaceRenderer, H: FrameHost> RenderSession<R, H> {
    /// Build the scene, upload the generated cloud, and run the first frame.
    ///
    /// On failure every resource acquired so far is released before the
    /// error is returned.
    pub fn start(
        renderer: R,
        host: H,
        clock: Box<dyn Clock>,
        params: &GalaxyParameters,
        rng: &mut impl Rng,
        config: &StardustConfig,
    ) -> Result<Self, RendererError> {
        let mut session = Self {
            renderer: Some(renderer),
            host,
            clock,
            scene: None,
            camera: None,
            galaxy: None,
            animation: GalaxyAnimation::from_config(&config.animation),
            state: LoopState::Idle,
            pending_frame: None,
            resize_subscription: None,
            max_pixel_ratio: config.renderer.max_pixel_ratio,
            frames_rendered: 0,
        };

        if let Err(e) = session.populate(params, rng, config) {
            session.stop();
            return Err(e);
        }

        session.state = LoopState::Running;
        session.resize_subscription = Some(session.host.subscribe_resize());
        info!(
            "Render session started ({} points, {} branches)",
            params.count, params.branches
        );

        let first = session.host.request_frame();
        session.pending_frame = Some(first);
        session.on_frame(first);
        Ok(session)
    }

    fn populate(
        &mut self,
        params: &GalaxyParameters,
        rng: &mut impl Rng,
        config: &StardustConfig,
    ) -> Result<(), RendererError> {
        let viewport = self.host.viewport();
        let camera = PerspectiveCamera::from_config(&config.camera, viewport.aspect());
        let size = viewport.surface_size(self.max_pixel_ratio);

        let renderer = self.renderer.as_mut().ok_or(RendererError::Disposed)?;
        renderer.set_size(size);
        self.camera = Some(camera);

        let cloud = galaxy::generate(params, rng);
        let scene = self
            .scene
            .insert(Scene::new(FogExp2::from_config(&config.fog)));
        let id = scene.add(Points::new(cloud.len()));
        self.galaxy = Some(id);

        // Attach each handle as soon as it exists so a later failure still
        // leaves it reachable for release.
        let geometry = renderer.upload_points(&cloud)?;
        if let Some(points) = scene.get_mut(id) {
            points.geometry = Some(geometry);
        }
        let material = renderer.create_material(&PointsMaterial::galaxy(params.size))?;
        if let Some(points) = scene.get_mut(id) {
            points.material = Some(material);
        }

        debug!(
            "Scene populated: {} points, surface {}x{}",
            cloud.len(),
            size.width,
            size.height
        );
        Ok(())
    }

    /// Run one frame for `request`. Stale, cancelled or post-stop requests
    /// are ignored and return `false`.
    pub fn on_frame(&mut self, request: FrameRequest) -> bool {
        if self.state != LoopState::Running || self.pending_frame != Some(request) {
            return false;
        }
        self.pending_frame = None;

        let elapsed = self.clock.elapsed_secs();
        let transform = self.animation.transform_at(elapsed);

        if let (Some(renderer), Some(scene), Some(camera)) =
            (self.renderer.as_mut(), self.scene.as_mut(), self.camera.as_ref())
        {
            if let Some(points) = self.galaxy.and_then(|id| scene.get_mut(id)) {
                points.rotation_y = transform.rotation_y;
                points.position[1] = transform.offset_y;
            }
            if let Err(e) = renderer.render(scene, camera) {
                warn!("Frame render failed: {e}");
            }
        }
        self.frames_rendered += 1;

        self.pending_frame = Some(self.host.request_frame());
        true
    }

    /// Apply a viewport change: new camera aspect and surface size. The
    /// point cloud is left untouched.
    pub fn on_resize(&mut self, viewport: Viewport) -> bool {
        if self.resize_subscription.is_none() {
            return false;
        }
        if let Some(camera) = self.camera.as_mut() {
            camera.set_aspect(viewport.aspect());
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_size(viewport.surface_size(self.max_pixel_ratio));
        }
        debug!(
            "Session resized to {}x{} (scale {})",
            viewport.width, viewport.height, viewport.scale_factor
        );
        true
    }

    /// Tear the session down. Safe to call any number of times and after a
    /// partially failed start.
    ///
    /// Order: resize listener, pending frame, renderer surface, then every
    /// scene object's geometry and material.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.resize_subscription.take() {
            self.host.unsubscribe_resize(subscription);
        }
        if let Some(request) = self.pending_frame.take() {
            self.host.cancel_frame(request);
        }

        if let Some(mut renderer) = self.renderer.take() {
            renderer.dispose();
            if let Some(mut scene) = self.scene.take() {
                scene.traverse_mut(|object| {
                    if let Some(geometry) = object.geometry.take() {
                        renderer.release_geometry(geometry);
                    }
                    if let Some(material) = object.material.take() {
                        renderer.release_material(material);
                    }
                });
            }
            info!(
                "Render session stopped after {} frames",
                self.frames_rendered
            );
        }

        self.scene = None;
        self.camera = None;
        self.galaxy = None;
        self.state = LoopState::Idle;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The frame request the session is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.camera.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<R: SurfaceRenderer, H: FrameHost> Drop for RenderSession<R, H> {
    fn drop(&mut self) {
        self.stop();
    }
}
