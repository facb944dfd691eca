//! Integration test: drive the widget through complete user sessions
//! with an in-memory transport and a virtual clock.

#![allow(clippy::unwrap_used)]

use std::future::{Future, ready};
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use filedrop_core::{
    BANNER_VISIBLE, BannerToken, DragKind, Effect, Event, Messages, SelectedFile, SelectionSource,
    StatusKind, Transport, TriggerState, UploadBatch, UploadError, UploadFuture, Widget,
    WidgetError, ZoneState,
};

/// Transport that resolves immediately with a fixed outcome and records
/// every batch it receives.
struct FixedTransport {
    outcome: Result<(), UploadError>,
    sent: std::cell::RefCell<Vec<UploadBatch>>,
}

impl FixedTransport {
    fn new(outcome: Result<(), UploadError>) -> Self {
        Self {
            outcome,
            sent: std::cell::RefCell::default(),
        }
    }
}

impl Transport for FixedTransport {
    fn upload(&self, batch: UploadBatch) -> UploadFuture {
        self.sent.borrow_mut().push(batch);
        Box::pin(ready(self.outcome.clone()))
    }
}

/// Runs effects the way the browser layer does, with time simulated.
struct Harness<T> {
    widget: Widget,
    transport: T,
    now: Duration,
    timers: Vec<(Duration, BannerToken)>,
    uploads: Vec<(Duration, UploadFuture)>,
    picker_resets: usize,
}

impl<T: Transport> Harness<T> {
    fn new(transport: T) -> Self {
        Self {
            widget: Widget::new(Messages::english()),
            transport,
            now: Duration::ZERO,
            timers: Vec::new(),
            uploads: Vec::new(),
            picker_resets: 0,
        }
    }

    fn dispatch(&mut self, event: Event) -> Result<(), WidgetError> {
        for effect in self.widget.handle(event)? {
            match effect {
                Effect::ScheduleBannerHide { token, after } => {
                    self.timers.push((self.now + after, token));
                }
                Effect::StartUpload(batch) => {
                    let ready_at = self.now + filedrop_core::SIMULATED_UPLOAD_DELAY;
                    self.uploads.push((ready_at, self.transport.upload(batch)));
                }
                Effect::ResetPicker => self.picker_resets += 1,
            }
        }
        Ok(())
    }

    /// Advance the clock, firing due timers and finished uploads in order.
    fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let next_timer = self.timers.iter().map(|(at, _)| *at).min();
            let next_upload = self.uploads.iter().map(|(at, _)| *at).min();
            let Some(next) = next_timer.into_iter().chain(next_upload).min() else {
                break;
            };
            if next > target {
                break;
            }
            self.now = next;

            if let Some(i) = self.uploads.iter().position(|(at, _)| *at == next) {
                let (_, mut future) = self.uploads.remove(i);
                let mut cx = Context::from_waker(Waker::noop());
                let Poll::Ready(outcome) = future.as_mut().poll(&mut cx) else {
                    continue;
                };
                self.dispatch(Event::UploadFinished(outcome)).unwrap();
            } else if let Some(i) = self.timers.iter().position(|(at, _)| *at == next) {
                let (_, token) = self.timers.remove(i);
                self.dispatch(Event::BannerExpired(token)).unwrap();
            }
        }
        self.now = target;
    }

    fn select(&mut self, source: SelectionSource, names: &[&str]) {
        let files = names
            .iter()
            .map(|n| SelectedFile::new(*n, 2048, "application/pdf"))
            .collect();
        self.dispatch(Event::FilesSelected { source, files }).unwrap();
    }
}

#[test]
fn drop_then_picker_replaces_selection() {
    let mut h = Harness::new(FixedTransport::new(Ok(())));

    h.dispatch(Event::Drag(DragKind::Enter)).unwrap();
    assert_eq!(h.widget.zone(), ZoneState::Highlighted);
    h.dispatch(Event::Drag(DragKind::Drop)).unwrap();
    h.select(SelectionSource::Drop, &["a.pdf", "b.pdf", "c.pdf"]);
    assert_eq!(h.widget.zone(), ZoneState::Normal);

    h.select(SelectionSource::Picker, &["d.pdf"]);
    let names: Vec<_> = h
        .widget
        .selection()
        .files()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["d.pdf"]);
}

#[test]
fn successful_upload_session() {
    let mut h = Harness::new(FixedTransport::new(Ok(())));
    h.select(SelectionSource::Picker, &["report.pdf", "budget.pdf"]);

    h.dispatch(Event::TriggerActivated).unwrap();
    assert_eq!(h.widget.trigger(), TriggerState::Busy);

    // Still busy just before the delay elapses.
    h.advance(Duration::from_millis(1999));
    assert!(h.widget.is_busy());
    assert_eq!(h.dispatch(Event::TriggerActivated), Err(WidgetError::Busy));

    h.advance(Duration::from_millis(1));
    assert_eq!(h.widget.trigger(), TriggerState::Idle);
    assert!(h.widget.selection().is_empty());
    assert_eq!(h.picker_resets, 1);
    assert_eq!(h.widget.banner().unwrap().kind, StatusKind::Success);
    assert_eq!(h.transport.sent.borrow()[0].files.len(), 2);

    // Banner hides exactly BANNER_VISIBLE after the success message.
    h.advance(BANNER_VISIBLE - Duration::from_millis(1));
    assert!(h.widget.banner().is_some());
    h.advance(Duration::from_millis(1));
    assert!(h.widget.banner().is_none());
}

#[test]
fn failed_upload_allows_retry() {
    let mut h = Harness::new(FixedTransport::new(Err(UploadError::Rejected {
        status: 500,
    })));
    h.select(SelectionSource::Drop, &["x.pdf"]);

    h.dispatch(Event::TriggerActivated).unwrap();
    h.advance(filedrop_core::SIMULATED_UPLOAD_DELAY);

    assert_eq!(h.widget.trigger(), TriggerState::Idle);
    assert_eq!(h.widget.selection().len(), 1);
    assert_eq!(h.picker_resets, 0);
    let banner = h.widget.banner().unwrap();
    assert_eq!(banner.kind, StatusKind::Error);
    assert_eq!(banner.message, Messages::english().upload_failed);

    h.dispatch(Event::TriggerActivated).unwrap();
    assert!(h.widget.is_busy());
    assert_eq!(h.transport.sent.borrow().len(), 2);
}

#[test]
fn banner_hides_three_seconds_after_latest_show() {
    let mut h = Harness::new(FixedTransport::new(Ok(())));

    h.dispatch(Event::TriggerActivated).unwrap();
    h.advance(Duration::from_millis(2000));
    h.dispatch(Event::TriggerActivated).unwrap();

    // The first show's timer fires at 3000 ms and must not hide the
    // second banner.
    h.advance(Duration::from_millis(1000));
    assert!(h.widget.banner().is_some());

    // The second show was at 2000 ms, so it hides at 5000 ms.
    h.advance(Duration::from_millis(1999));
    assert!(h.widget.banner().is_some());
    h.advance(Duration::from_millis(1));
    assert!(h.widget.banner().is_none());
}

#[test]
fn empty_trigger_reports_error_and_stays_idle() {
    let mut h = Harness::new(FixedTransport::new(Ok(())));

    h.dispatch(Event::TriggerActivated).unwrap();

    assert_eq!(h.widget.trigger(), TriggerState::Idle);
    let banner = h.widget.banner().unwrap();
    assert_eq!(banner.kind, StatusKind::Error);
    assert_eq!(banner.message, "Choose a file first!");
    assert!(h.transport.sent.borrow().is_empty());
}
