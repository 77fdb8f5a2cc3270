//! Pointer handling for the signature pad

use tracing::{debug, trace};

use crate::bounds::Bounds;
use crate::smoothing::smooth;
use crate::types::{DotSegment, Point, PointerEvent, PointerId};

use super::{CaptureState, SignaturePad};

impl SignaturePad {
    /// Begin a stroke at `point` with the primary pointer
    ///
    /// A down while already capturing starts a fresh session; the samples
    /// buffered for the previous one are dropped.
    pub fn pointer_down(&mut self, point: Point) {
        self.begin_session(PointerId::PRIMARY, point);
    }

    /// Continue the stroke of the primary pointer
    pub fn pointer_move(&mut self, point: Point) {
        self.handle_pointer(PointerEvent::Move {
            id: PointerId::PRIMARY,
            position: point,
        });
    }

    /// Release the primary pointer
    pub fn pointer_up(&mut self) {
        self.handle_pointer(PointerEvent::Up {
            id: PointerId::PRIMARY,
        });
    }

    /// Dispatch an event carrying a pointer id.
    ///
    /// Only one pointer draws at a time: events from any pointer other than
    /// the one that opened the active session are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let id = event.id();
        let owner = match self.state {
            CaptureState::Capturing { pointer } => Some(pointer),
            CaptureState::Idle => None,
        };

        match event {
            PointerEvent::Down { position, .. } => {
                if owner.is_some_and(|owner| owner != id) {
                    debug!("pointer_down: secondary pointer {:?} ignored", id);
                    return;
                }
                self.begin_session(id, position);
            }
            PointerEvent::Move { position, .. } => {
                if owner != Some(id) {
                    debug!("pointer_move: no active stroke for {:?}, ignoring", id);
                    return;
                }
                self.continue_session(position);
            }
            PointerEvent::Up { .. } => {
                if owner != Some(id) {
                    debug!("pointer_up: no active stroke for {:?}, ignoring", id);
                    return;
                }
                self.end_session();
            }
        }
    }

    fn begin_session(&mut self, pointer: PointerId, point: Point) {
        self.buffer.reset(point);
        self.state = CaptureState::Capturing { pointer };
        debug!("begin_session: {:?} at ({:.1}, {:.1})", pointer, point.x, point.y);

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.started_drawing();
        }
    }

    fn continue_session(&mut self, point: Point) {
        if let Err(err) = self.buffer.push(point) {
            debug!("pointer_move: {}, ignoring", err);
            return;
        }

        // Every move asks for a repaint: the new curve's area if one was
        // emitted, otherwise the area around the new sample.
        let region = match smooth(&mut self.buffer) {
            Some(curve) => {
                let bounds = self.path.append(curve);
                trace!("continue_session: appended curve #{}", self.path.len());
                bounds
            }
            None => Bounds::from_point(point),
        };
        self.request_redraw(self.ink_region(region));
    }

    fn end_session(&mut self) {
        if self.buffer.cursor() == 0 {
            let dot = DotSegment::new(self.buffer.slots()[0]);
            let bounds = self.path.append(dot);
            self.request_redraw(self.ink_region(bounds));
            debug!("end_session: tap, stamped dot at ({:.1}, {:.1})", dot.center.x, dot.center.y);
        } else {
            // Samples collected since the last curve never form a segment
            trace!("end_session: discarding {} trailing samples", self.buffer.cursor());
        }

        self.buffer.finish();
        self.state = CaptureState::Idle;

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.finished_drawing();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::events::{DirtyRegion, SignatureDelegate};
    use crate::types::Segment;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl SignatureDelegate for Recorder {
        fn started_drawing(&mut self) {
            self.0.borrow_mut().push("started");
        }

        fn finished_drawing(&mut self) {
            self.0.borrow_mut().push("finished");
        }
    }

    struct OnlyFinished(Rc<RefCell<u32>>);

    impl SignatureDelegate for OnlyFinished {
        fn finished_drawing(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn draw(pad: &mut SignaturePad, start: Vec2, moves: &[Vec2]) {
        pad.pointer_down(start);
        for &p in moves {
            pad.pointer_move(p);
        }
        pad.pointer_up();
    }

    fn moves(n: usize) -> Vec<Vec2> {
        (1..=n).map(|i| Vec2::new(i as f32 * 10.0, (i % 3) as f32)).collect()
    }

    #[test]
    fn test_segment_count_per_moves() {
        for (n, expected) in [(0, 0), (1, 0), (2, 0), (3, 0), (4, 1), (7, 2), (10, 3)] {
            let mut pad = SignaturePad::new();
            draw(&mut pad, Vec2::ZERO, &moves(n));
            assert_eq!(pad.path().curve_count(), expected, "n_moves = {n}");
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut pad = SignaturePad::new();
        draw(
            &mut pad,
            Vec2::new(0.0, 0.0),
            &[
                Vec2::new(10.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(30.0, 0.0),
                Vec2::new(40.0, 0.0),
            ],
        );

        assert!(pad.contains_signature());
        assert_eq!(pad.path().len(), 1);
        let Segment::Curve(curve) = pad.path().segments()[0] else {
            panic!("expected a curve");
        };
        assert_eq!(curve.start, Vec2::new(0.0, 0.0));
        assert_eq!(curve.ctrl1, Vec2::new(10.0, 0.0));
        assert_eq!(curve.ctrl2, Vec2::new(20.0, 0.0));
        assert_eq!(curve.end, Vec2::new(30.0, 0.0));

        let bounds = pad.bounding_box().unwrap();
        assert_eq!(bounds.min, Vec2::new(0.0, 0.0));
        assert_eq!(bounds.max, Vec2::new(30.0, 0.0));
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_tap_stamps_dot() {
        let mut pad = SignaturePad::new();
        draw(&mut pad, Vec2::new(5.0, 6.0), &[]);

        assert!(pad.contains_signature());
        assert_eq!(pad.path().len(), 1);
        assert_eq!(pad.path().dot_count(), 1);
        assert_eq!(pad.path().segments()[0], Segment::Dot(DotSegment::new(Vec2::new(5.0, 6.0))));
        let bounds = pad.bounding_box().unwrap();
        assert_eq!(bounds.min, Vec2::new(4.0, 6.0));
        assert_eq!(bounds.max, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_trailing_samples_discarded() {
        let mut pad = SignaturePad::new();
        draw(&mut pad, Vec2::ZERO, &moves(6));
        // One curve from the first four moves; two trailing samples dropped, no dot
        assert_eq!(pad.path().len(), 1);
        assert_eq!(pad.path().dot_count(), 0);
        assert!(!pad.is_capturing());
    }

    #[test]
    fn test_sessions_do_not_share_window() {
        let mut pad = SignaturePad::new();
        draw(&mut pad, Vec2::ZERO, &moves(3));
        assert!(!pad.contains_signature());
        // Second session starts from a fresh window
        draw(&mut pad, Vec2::new(100.0, 100.0), &moves(3));
        assert!(!pad.contains_signature());
        draw(&mut pad, Vec2::new(100.0, 100.0), &moves(4));
        assert_eq!(pad.path().curve_count(), 1);
        let Segment::Curve(curve) = pad.path().segments()[0] else {
            panic!("expected a curve");
        };
        assert_eq!(curve.start, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_path_persists_across_sessions() {
        let mut pad = SignaturePad::new();
        draw(&mut pad, Vec2::ZERO, &moves(4));
        draw(&mut pad, Vec2::new(50.0, 50.0), &[]);
        assert_eq!(pad.path().curve_count(), 1);
        assert_eq!(pad.path().dot_count(), 1);
    }

    #[test]
    fn test_down_while_capturing_restarts() {
        let mut pad = SignaturePad::new();
        pad.pointer_down(Vec2::ZERO);
        pad.pointer_move(Vec2::new(1.0, 0.0));
        pad.pointer_move(Vec2::new(2.0, 0.0));
        pad.pointer_down(Vec2::new(50.0, 50.0));
        pad.pointer_up();
        // Restarted session had no moves, so it is a tap at the new point
        assert_eq!(pad.path().segments(), &[Segment::Dot(DotSegment::new(Vec2::new(50.0, 50.0)))]);
    }

    #[test]
    fn test_move_and_up_without_down_are_ignored() {
        let mut pad = SignaturePad::new();
        pad.pointer_move(Vec2::new(1.0, 1.0));
        pad.pointer_up();
        assert!(!pad.contains_signature());
        assert!(!pad.has_pending_redraw());
    }

    #[test]
    fn test_secondary_pointer_ignored() {
        let mut pad = SignaturePad::new();
        let pen = PointerId(7);
        let finger = PointerId(8);
        pad.handle_pointer(PointerEvent::Down { id: pen, position: Vec2::ZERO });
        pad.handle_pointer(PointerEvent::Down { id: finger, position: Vec2::new(90.0, 90.0) });
        for p in moves(4) {
            pad.handle_pointer(PointerEvent::Move { id: finger, position: p * 2.0 });
            pad.handle_pointer(PointerEvent::Move { id: pen, position: p });
        }
        pad.handle_pointer(PointerEvent::Up { id: finger });
        assert!(pad.is_capturing());
        pad.handle_pointer(PointerEvent::Up { id: pen });
        assert!(!pad.is_capturing());

        assert_eq!(pad.path().len(), 1);
        let Segment::Curve(curve) = pad.path().segments()[0] else {
            panic!("expected a curve");
        };
        assert_eq!(curve.start, Vec2::ZERO);
        assert_eq!(curve.ctrl1, moves(4)[0]);
    }

    #[test]
    fn test_delegate_notifications() {
        let mut pad = SignaturePad::new();
        let recorder = Recorder::default();
        pad.set_delegate(recorder.clone());

        draw(&mut pad, Vec2::ZERO, &moves(5));
        draw(&mut pad, Vec2::ZERO, &[]);
        assert_eq!(*recorder.0.borrow(), vec!["started", "finished", "started", "finished"]);

        pad.clear_delegate();
        draw(&mut pad, Vec2::ZERO, &[]);
        assert_eq!(recorder.0.borrow().len(), 4);
    }

    #[test]
    fn test_delegate_may_implement_one_method() {
        let mut pad = SignaturePad::new();
        let count = Rc::new(RefCell::new(0));
        pad.set_delegate(OnlyFinished(count.clone()));
        draw(&mut pad, Vec2::ZERO, &moves(2));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_redraw_requested_on_every_move() {
        let mut pad = SignaturePad::new();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        pad.set_invalidator(move |region: DirtyRegion| sink.borrow_mut().push(region));

        pad.pointer_down(Vec2::ZERO);
        assert!(requests.borrow().is_empty());
        for p in moves(7) {
            pad.pointer_move(p);
        }
        assert_eq!(requests.borrow().len(), 7);
        pad.pointer_up();
        // Drag release stamps nothing, so no extra request
        assert_eq!(requests.borrow().len(), 7);

        pad.pointer_down(Vec2::new(3.0, 3.0));
        pad.pointer_up();
        assert_eq!(requests.borrow().len(), 8);
    }

    #[test]
    fn test_curve_redraw_region_covers_ink() {
        let mut pad = SignaturePad::new();
        pad.set_stroke_width(4.0).unwrap();
        pad.take_dirty_region();

        draw(
            &mut pad,
            Vec2::new(10.0, 10.0),
            &[
                Vec2::new(20.0, 10.0),
                Vec2::new(30.0, 10.0),
                Vec2::new(40.0, 10.0),
                Vec2::new(50.0, 10.0),
            ],
        );
        let Some(DirtyRegion::Rect(region)) = pad.take_dirty_region() else {
            panic!("expected a rect region");
        };
        // Curve spans x in [10, 40]; the per-sample requests before it reach
        // the same extent. Half width (2) plus anti-aliasing margin (1).
        assert_eq!(region.min, Vec2::new(7.0, 7.0));
        assert_eq!(region.max, Vec2::new(43.0, 13.0));
    }
}
