//! Celebrate session state.
//!
//! One session owns the gallery and the step the recipient flow is in:
//! camera → generating → animation → download. All mutation goes through
//! the owning session, so no locking is needed; introducing concurrent
//! sessions would require per-session isolation, which this type already
//! provides.

use tracing::{info, warn};
use uuid::Uuid;

use wish_models::{AppRoute, Gallery};

use crate::camera::CameraLease;
use crate::error::FlowResult;
use crate::orchestrator::Orchestrator;

const IDLE_LOADING_TEXT: &str = "Creating magic...";
const GENERATING_LOADING_TEXT: &str =
    "Generating your birthday surprises... This might take a moment.";

/// Where the recipient flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrateStep {
    /// Waiting for a capture.
    Camera,
    /// Fan-out batch in flight.
    Generating,
    /// Slideshow playing.
    Animation,
    /// Gallery shown for download and editing.
    Download,
}

/// State for one celebration session.
pub struct CelebrateSession {
    name: Option<String>,
    step: CelebrateStep,
    gallery: Gallery,
    loading_text: String,
    selected_for_edit: Option<Uuid>,
}

impl CelebrateSession {
    /// Start a session for the named celebrant.
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            step: CelebrateStep::Camera,
            gallery: Gallery::new(),
            loading_text: IDLE_LOADING_TEXT.to_string(),
            selected_for_edit: None,
        }
    }

    /// Start a session from a resolved route. Only Celebrate routes carry a
    /// session.
    pub fn from_route(route: &AppRoute) -> Option<Self> {
        match route {
            AppRoute::Celebrate { name } => Some(Self::new(name.clone())),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn step(&self) -> CelebrateStep {
        self.step
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_text
    }

    pub fn selected_for_edit(&self) -> Option<Uuid> {
        self.selected_for_edit
    }

    /// Consume the capture and drive the fan-out batch.
    ///
    /// On success the gallery is populated and the flow moves to the
    /// animation step. A batch with nothing generated, or a transport
    /// failure, reverts to the camera step with the gallery untouched and
    /// the error handed back for the view to show.
    pub async fn handle_capture(
        &mut self,
        orchestrator: &Orchestrator,
        lease: CameraLease,
    ) -> FlowResult<()> {
        // A capture failure leaves the step at Camera; the lease has
        // already released the device either way.
        let frame = lease.capture().await?;

        self.step = CelebrateStep::Generating;
        self.loading_text = GENERATING_LOADING_TEXT.to_string();

        match orchestrator.generate_celebration_images(&frame).await {
            Ok(images) => {
                self.gallery.populate(images);
                self.step = CelebrateStep::Animation;
                info!(count = self.gallery.len(), "Celebration gallery ready");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Capture produced no gallery, returning to camera");
                self.step = CelebrateStep::Camera;
                self.loading_text = IDLE_LOADING_TEXT.to_string();
                Err(e)
            }
        }
    }

    /// Slideshow finished; show the gallery.
    pub fn finish_animation(&mut self) {
        if self.step == CelebrateStep::Animation {
            self.step = CelebrateStep::Download;
        }
    }

    /// Mark a gallery element for editing.
    pub fn select_for_edit(&mut self, id: Uuid) {
        self.selected_for_edit = Some(id);
    }

    /// Drop the current edit selection.
    pub fn clear_selection(&mut self) {
        self.selected_for_edit = None;
    }

    /// Run the selected edit and merge the result into the gallery.
    ///
    /// Returns `true` when an element was replaced. A missing selection, a
    /// stale selection (element no longer present), or an empty edit result
    /// are all silent no-ops. A transport failure propagates with the
    /// gallery and selection untouched, so the user can retry.
    pub async fn apply_edit(
        &mut self,
        orchestrator: &Orchestrator,
        instruction: &str,
    ) -> FlowResult<bool> {
        let Some(id) = self.selected_for_edit else {
            return Ok(false);
        };
        let Some(image) = self.gallery.get(id) else {
            // Stale reference: the element was replaced or cleared under us.
            self.selected_for_edit = None;
            return Ok(false);
        };
        let source_url = image.url.clone();

        match orchestrator.edit_image(&source_url, instruction).await? {
            Some(new_url) => {
                let replaced = self.gallery.replace(id, new_url);
                self.selected_for_edit = None;
                Ok(replaced)
            }
            None => {
                info!("Edit returned no payload, gallery unchanged");
                Ok(false)
            }
        }
    }
}

/// Slideshow timing state for the animation step.
///
/// The view drives this once per countdown tick; the rotation index moves
/// every `rotation_every` ticks and the show completes when the countdown
/// reaches zero.
#[derive(Debug, Clone)]
pub struct Slideshow {
    image_count: usize,
    current_index: usize,
    ticks_remaining: u32,
    rotation_every: u32,
    ticks_elapsed: u32,
}

impl Slideshow {
    /// Start a slideshow over `image_count` images lasting `total_ticks`
    /// countdown ticks, rotating every `rotation_every` ticks.
    pub fn new(image_count: usize, total_ticks: u32, rotation_every: u32) -> Self {
        Self {
            image_count,
            current_index: 0,
            ticks_remaining: total_ticks,
            rotation_every: rotation_every.max(1),
            ticks_elapsed: 0,
        }
    }

    /// Advance one countdown tick. Returns `true` while the show is still
    /// running.
    pub fn tick(&mut self) -> bool {
        if self.ticks_remaining == 0 || self.image_count == 0 {
            return false;
        }
        self.ticks_remaining -= 1;
        self.ticks_elapsed += 1;
        if self.ticks_elapsed % self.rotation_every == 0 {
            self.current_index = (self.current_index + 1) % self.image_count;
        }
        self.ticks_remaining > 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    pub fn is_finished(&self) -> bool {
        self.ticks_remaining == 0 || self.image_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_route() {
        let session = CelebrateSession::from_route(&AppRoute::Celebrate {
            name: Some("Sam".into()),
        })
        .unwrap();
        assert_eq!(session.name(), Some("Sam"));
        assert_eq!(session.step(), CelebrateStep::Camera);
        assert!(session.gallery().is_empty());

        assert!(CelebrateSession::from_route(&AppRoute::Home).is_none());
        assert!(CelebrateSession::from_route(&AppRoute::Tools).is_none());
    }

    #[test]
    fn test_finish_animation_only_from_animation() {
        let mut session = CelebrateSession::new(None);
        session.finish_animation();
        assert_eq!(session.step(), CelebrateStep::Camera);

        session.step = CelebrateStep::Animation;
        session.finish_animation();
        assert_eq!(session.step(), CelebrateStep::Download);
    }

    #[test]
    fn test_slideshow_rotation_and_countdown() {
        // 4 images, 30 ticks, rotate every 3
        let mut show = Slideshow::new(4, 30, 3);
        assert_eq!(show.current_index(), 0);

        show.tick();
        show.tick();
        assert_eq!(show.current_index(), 0);
        show.tick();
        assert_eq!(show.current_index(), 1);

        // Run it out
        while show.tick() {}
        assert!(show.is_finished());
        assert_eq!(show.ticks_remaining(), 0);
    }

    #[test]
    fn test_slideshow_wraps_around() {
        let mut show = Slideshow::new(2, 12, 1);
        show.tick();
        assert_eq!(show.current_index(), 1);
        show.tick();
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn test_empty_slideshow_never_runs() {
        let mut show = Slideshow::new(0, 30, 3);
        assert!(show.is_finished());
        assert!(!show.tick());
    }
}
