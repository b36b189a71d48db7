use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::console;

use crate::js;

/// Decides, per refresh tick, whether enough time has passed to draw.
///
/// `interval_ms` of `None` means static mode: the pacer never accepts a
/// tick because there is no schedule to pace against.
#[derive(Debug)]
struct FramePacer {
    interval_ms: Option<f64>,
    last_frame: Option<f64>,
}

impl FramePacer {
    fn new(fps: f32) -> Self {
        let interval_ms = (fps > 0.0).then(|| 1000.0 / f64::from(fps));
        Self { interval_ms, last_frame: None }
    }

    fn is_animated(&self) -> bool {
        self.interval_ms.is_some()
    }

    /// Accepts or skips the tick at timestamp `now`.
    ///
    /// The first tick only records its timestamp; afterwards a tick is
    /// accepted exactly when the elapsed time since the last accepted frame
    /// reaches the target interval, and `now` becomes the new reference.
    fn tick(&mut self, now: f64) -> bool {
        let Some(interval) = self.interval_ms else {
            return false;
        };

        let last = *self.last_frame.get_or_insert(now);
        if now - last >= interval {
            self.last_frame = Some(now);
            return true;
        }

        false
    }

    fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[derive(Debug)]
struct LoopState {
    pacer: FramePacer,
    playing: bool,
    running: bool,
    pending: Option<i32>,
}

type AnimateClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drives a draw callback either once (static mode) or repeatedly at a
/// target rate (animated mode).
///
/// A requested rate <= 0 selects static mode: [`FrameScheduler::activate`]
/// invokes the callback exactly once and no scheduling state is kept.
/// Otherwise the scheduler registers with `requestAnimationFrame` and
/// checks every display refresh, drawing only when the elapsed time since
/// the last accepted frame reaches `1000/fps` ms. Throttling this way,
/// without fixed-delay timers, means skipped refreshes neither drift nor
/// pile up.
///
/// At most one pending registration exists at any time, and the running
/// flag gates execution, so a stale callback can never fire after
/// [`FrameScheduler::stop`] or drop. Changing the rate or the callback
/// means dropping the scheduler and building a new one. No operation here
/// returns an error; host scheduling failures degrade to a console warning.
pub struct FrameScheduler {
    render: Rc<RefCell<dyn FnMut()>>,
    state: Rc<RefCell<LoopState>>,
    animate: AnimateClosure,
}

impl FrameScheduler {
    /// Wraps `render` in a scheduler at the requested rate.
    ///
    /// `playing` only matters in animated mode; a paused scheduler stops
    /// re-registering until [`FrameScheduler::set_playing`] resumes it.
    pub fn new(render: impl FnMut() + 'static, fps: f32, playing: bool) -> Self {
        Self {
            render: Rc::new(RefCell::new(render)),
            state: Rc::new(RefCell::new(LoopState {
                pacer: FramePacer::new(fps),
                playing,
                running: false,
                pending: None,
            })),
            animate: Rc::new(RefCell::new(None)),
        }
    }

    /// Kicks the scheduler off.
    ///
    /// Static mode draws exactly once, right here, every time it is
    /// activated. Animated mode marks the loop running and registers for
    /// the next display refresh.
    pub fn activate(&self) {
        if !self.state.borrow().pacer.is_animated() {
            (self.render.borrow_mut())();
            return;
        }

        self.arm();
    }

    /// Re-arms an animated scheduler; idempotent while already running.
    ///
    /// In static mode there is nothing to start and this is a no-op beyond
    /// a console warning.
    pub fn start(&self) {
        if !self.state.borrow().pacer.is_animated() {
            console::warn_1(&"Cannot start animation in static mode.".into());
            return;
        }

        self.arm();
    }

    /// Cancels any pending registration and marks the loop not-running.
    ///
    /// A refresh callback already queued by the host is ignored when it
    /// fires, because the running flag gates execution.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        if let Some(id) = state.pending.take() {
            cancel_frame(id);
        }
    }

    /// Pauses or resumes drawing in animated mode.
    pub fn set_playing(&self, playing: bool) {
        let mut state = self.state.borrow_mut();
        state.playing = playing;
        if playing && state.running && state.pending.is_none() {
            state.pending = request_frame(&self.animate);
        }
    }

    /// Whether the animated loop is currently armed.
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    fn arm(&self) {
        self.ensure_tick_closure();

        let mut state = self.state.borrow_mut();
        state.running = true;
        if state.pending.is_none() {
            state.pending = request_frame(&self.animate);
        }
    }

    /// Builds the refresh-tick closure on first use. Static schedulers
    /// never get here, so they hold no host scheduling state at all.
    fn ensure_tick_closure(&self) {
        if self.animate.borrow().is_some() {
            return;
        }

        let render = self.render.clone();
        let state = self.state.clone();
        let animate = self.animate.clone();

        *self.animate.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            let draw = {
                let mut state = state.borrow_mut();
                state.pending = None;
                if !state.running || !state.playing {
                    return;
                }
                state.pacer.tick(time)
            };

            if draw {
                (render.borrow_mut())();
            }

            let mut state = state.borrow_mut();
            if state.running && state.pending.is_none() {
                state.pending = request_frame(&animate);
            }
        }) as Box<dyn FnMut(f64)>));
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
        self.state.borrow_mut().pacer.reset();
        // the tick closure captures a handle to its own cell; clearing the
        // cell breaks the cycle so the closure can free
        *self.animate.borrow_mut() = None;
    }
}

fn request_frame(animate: &AnimateClosure) -> Option<i32> {
    let window = match js::window() {
        Ok(window) => window,
        Err(_) => return None,
    };

    let closure = animate.borrow();
    let closure = closure.as_ref()?;

    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(_) => {
            console::warn_1(&"Failed to register animation frame callback".into());
            None
        },
    }
}

fn cancel_frame(id: i32) {
    if let Ok(window) = js::window() {
        let _ = window.cancel_animation_frame(id);
    }
}
