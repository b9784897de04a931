use std::time::{Duration, Instant};

use slopewatch::data::media::{DeniedCamera, DeviceFeed, FeedState, NoCamera, TestPatternCamera};
use slopewatch::error::MediaAccessError;

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn missing_device_leaves_feed_unavailable() {
    let mut feed = DeviceFeed::new();
    feed.request(Box::new(NoCamera));
    assert!(feed.wait(WAIT));
    assert_eq!(feed.state(), &FeedState::Unavailable(MediaAccessError::NoDevice));
    assert!(feed.latest_frame().is_none());
    assert!(!feed.poll());
}

#[test]
fn denied_permission_leaves_feed_unavailable() {
    let mut feed = DeviceFeed::new();
    feed.request(Box::new(DeniedCamera));
    assert!(feed.wait(WAIT));
    assert_eq!(
        feed.state(),
        &FeedState::Unavailable(MediaAccessError::PermissionDenied)
    );
}

#[test]
fn test_pattern_stream_delivers_frames() {
    let cam = TestPatternCamera { width: 16, height: 8, fps: 200 };
    let mut feed = DeviceFeed::new();
    feed.request(Box::new(cam));
    assert!(feed.wait(WAIT));
    assert_eq!(feed.state(), &FeedState::Streaming);
    assert_eq!(feed.stream_label(), Some("Test pattern 16x8"));

    let deadline = Instant::now() + WAIT;
    while feed.latest_frame().is_none() && Instant::now() < deadline {
        feed.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
    let frame = feed.latest_frame().expect("no frame within deadline");
    assert_eq!(frame.size, [16, 8]);
    assert_eq!(frame.rgba.len(), 16 * 8 * 4);
    assert!(feed.frame_count() >= 1);
}

#[test]
fn second_request_is_ignored() {
    let mut feed = DeviceFeed::new();
    feed.request(Box::new(NoCamera));
    assert!(feed.wait(WAIT));
    feed.request(Box::new(TestPatternCamera::default()));
    assert_eq!(feed.state(), &FeedState::Unavailable(MediaAccessError::NoDevice));
}

#[test]
fn pattern_scrolls_between_frames() {
    let cam = TestPatternCamera { width: 32, height: 4, fps: 30 };
    let a = cam.render(0);
    let b = cam.render(5);
    assert_eq!(a.dimensions(), (32, 4));
    assert_ne!(a.into_raw(), b.into_raw());
}
