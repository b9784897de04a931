//! Video capture: a one-shot stream request bound to the video surface.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TryRecvError};
use std::time::Duration;

use image::{Rgba, RgbaImage};

use crate::error::MediaAccessError;

/// One RGBA video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    /// `[width, height]` in pixels.
    pub size: [usize; 2],
    /// Unmultiplied RGBA, row-major, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl From<RgbaImage> for VideoFrame {
    fn from(img: RgbaImage) -> Self {
        let size = [img.width() as usize, img.height() as usize];
        Self {
            size,
            rgba: img.into_raw(),
        }
    }
}

/// A granted capture stream. Frames arrive from the device's own thread.
pub struct VideoStream {
    label: String,
    frames: Receiver<VideoFrame>,
}

impl VideoStream {
    pub fn new<S: Into<String>>(label: S, frames: Receiver<VideoFrame>) -> Self {
        Self {
            label: label.into(),
            frames,
        }
    }

    /// Device label, for display.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Most recent frame delivered since the last call, dropping older ones.
    pub fn latest(&self) -> Option<VideoFrame> {
        self.frames.try_iter().last()
    }
}

/// A video capture capability. Opening may block (permission prompt, device warm-up),
/// so it is always invoked off the UI thread.
pub trait CaptureBackend: Send + 'static {
    fn open(self: Box<Self>) -> Result<VideoStream, MediaAccessError>;
}

/// Backend for hosts without any capture device.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl CaptureBackend for NoCamera {
    fn open(self: Box<Self>) -> Result<VideoStream, MediaAccessError> {
        Err(MediaAccessError::NoDevice)
    }
}

/// Backend whose permission request is always refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedCamera;

impl CaptureBackend for DeniedCamera {
    fn open(self: Box<Self>) -> Result<VideoStream, MediaAccessError> {
        Err(MediaAccessError::PermissionDenied)
    }
}

/// Synthetic camera producing scrolling color bars.
#[derive(Debug, Clone, Copy)]
pub struct TestPatternCamera {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for TestPatternCamera {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            fps: 30,
        }
    }
}

const BARS: [[u8; 3]; 7] = [
    [192, 192, 192],
    [192, 192, 0],
    [0, 192, 192],
    [0, 192, 0],
    [192, 0, 192],
    [192, 0, 0],
    [0, 0, 192],
];

impl TestPatternCamera {
    /// Render frame number `n`.
    pub fn render(&self, n: u64) -> RgbaImage {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let shift = (n % w as u64) as u32;
        let scan = (n % h as u64) as u32;
        RgbaImage::from_fn(w, h, |x, y| {
            if y == scan {
                return Rgba([255, 255, 255, 255]);
            }
            let bar = (((x + shift) % w) * BARS.len() as u32 / w) as usize;
            let [r, g, b] = BARS[bar];
            Rgba([r, g, b, 255])
        })
    }

    fn produce(self, tx: SyncSender<VideoFrame>) {
        let period = Duration::from_secs_f64(1.0 / self.fps.max(1) as f64);
        let mut n: u64 = 0;
        // Ends once the stream is dropped.
        while tx.send(self.render(n).into()).is_ok() {
            n = n.wrapping_add(1);
            std::thread::sleep(period);
        }
        log::debug!("test pattern camera stopped after {} frames", n);
    }
}

impl CaptureBackend for TestPatternCamera {
    fn open(self: Box<Self>) -> Result<VideoStream, MediaAccessError> {
        let (tx, rx) = mpsc::sync_channel(1);
        let cam = *self;
        std::thread::Builder::new()
            .name("test-pattern-camera".into())
            .spawn(move || cam.produce(tx))
            .map_err(|e| MediaAccessError::Other(e.to_string()))?;
        Ok(VideoStream::new(
            format!("Test pattern {}x{}", cam.width, cam.height),
            rx,
        ))
    }
}

/// Where the video surface stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Idle,
    Requesting,
    Streaming,
    /// Capture failed; the surface stays empty for the rest of the session.
    Unavailable(MediaAccessError),
}

/// Device feed adapter: requests capture once and binds the stream.
pub struct DeviceFeed {
    state: FeedState,
    pending: Option<Receiver<Result<VideoStream, MediaAccessError>>>,
    stream: Option<VideoStream>,
    latest: Option<VideoFrame>,
    frames: u64,
}

impl Default for DeviceFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Idle,
            pending: None,
            stream: None,
            latest: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Issue the capture request. Only the first call has any effect.
    pub fn request(&mut self, backend: Box<dyn CaptureBackend>) {
        if self.state != FeedState::Idle {
            log::debug!("camera already requested; ignoring");
            return;
        }
        let (tx, rx) = mpsc::channel();
        let spawned = std::thread::Builder::new()
            .name("camera-request".into())
            .spawn(move || {
                let _ = tx.send(backend.open());
            });
        match spawned {
            Ok(_) => {
                self.pending = Some(rx);
                self.state = FeedState::Requesting;
            }
            Err(e) => self.fail(MediaAccessError::Other(e.to_string())),
        }
    }

    /// Pick up the request outcome and the newest frame. Returns `true` when
    /// something visible changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.settle(outcome);
                    changed = true;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.settle(Err(MediaAccessError::Other("capture request aborted".into())));
                    changed = true;
                }
            }
        }
        if let Some(frame) = self.stream.as_ref().and_then(VideoStream::latest) {
            self.latest = Some(frame);
            self.frames += 1;
            changed = true;
        }
        changed
    }

    /// Block up to `timeout` for the request outcome. Returns `false` if still pending.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(rx) = &self.pending else {
            return self.state != FeedState::Requesting;
        };
        match rx.recv_timeout(timeout) {
            Ok(outcome) => self.settle(outcome),
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => {
                self.settle(Err(MediaAccessError::Other("capture request aborted".into())))
            }
        }
        true
    }

    fn settle(&mut self, outcome: Result<VideoStream, MediaAccessError>) {
        self.pending = None;
        match outcome {
            Ok(stream) => {
                log::info!("camera stream bound: {}", stream.label());
                self.stream = Some(stream);
                self.state = FeedState::Streaming;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: MediaAccessError) {
        log::error!("Error accessing camera: {}", err);
        self.state = FeedState::Unavailable(err);
    }

    /// Label of the bound stream, if any.
    pub fn stream_label(&self) -> Option<&str> {
        self.stream.as_ref().map(VideoStream::label)
    }

    pub fn latest_frame(&self) -> Option<&VideoFrame> {
        self.latest.as_ref()
    }

    /// Frames received since the stream was bound.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
