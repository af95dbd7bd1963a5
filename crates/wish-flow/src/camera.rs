//! Scoped camera acquisition.
//!
//! The camera device handle must be released exactly once on every exit
//! path: at capture time, or on abandonment before capture. [`CameraLease`]
//! enforces that as a scoped guard: capturing consumes the lease and
//! releases the device, and dropping an unconsumed lease releases it too.

use async_trait::async_trait;
use tracing::debug;

use wish_models::ImageData;

use crate::error::{FlowError, FlowResult};

/// External media capture collaborator.
///
/// Acquires a single still frame from a camera device and yields it as an
/// encoded image payload.
#[async_trait]
pub trait CameraDevice: Send {
    /// Grab one encoded frame from the device.
    async fn grab_frame(&mut self) -> Result<ImageData, String>;

    /// Release the device handle. Called exactly once per lease.
    fn release(&mut self);
}

/// Scoped acquisition of a camera device with guaranteed release.
pub struct CameraLease {
    device: Option<Box<dyn CameraDevice>>,
}

impl CameraLease {
    /// Take ownership of an acquired device.
    pub fn acquire(device: Box<dyn CameraDevice>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Capture one frame, releasing the device no later than the moment the
    /// frame is produced. The lease is consumed either way.
    pub async fn capture(mut self) -> FlowResult<ImageData> {
        let Some(mut device) = self.device.take() else {
            return Err(FlowError::camera("camera already released"));
        };

        let frame = device.grab_frame().await;
        device.release();
        debug!("Camera released after capture");
        frame.map_err(FlowError::camera)
    }
}

impl Drop for CameraLease {
    fn drop(&mut self) {
        // Abandonment path: the flow was left before capture.
        if let Some(mut device) = self.device.take() {
            device.release();
            debug!("Camera released on abandonment");
        }
    }
}
