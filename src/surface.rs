//! Surface lifecycle: binds the engine to a live canvas element.
//!
//! [`Surface::mount`] acquires the drawing context, seeds the surface
//! geometry, wires pointer/wheel listeners and a `ResizeObserver`, and starts
//! the render loop. Dropping the surface detaches every listener, disconnects
//! the observer, and cancels the pending animation frame, so an unmounted
//! surface holds no browser resources.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, PointerEvent, ResizeObserver, WheelEvent};

use crate::engine::Engine;
use crate::error::SurfaceError;
use crate::input::WheelDelta;
use crate::shape::Shape;
use crate::viewport::Point;

/// A mounted editor surface.
///
/// Owns the engine, the event listener closures, the resize observer, and the
/// render loop handle. All teardown happens in `Drop`.
pub struct Surface {
    engine: Rc<RefCell<Engine>>,
    canvas: HtmlCanvasElement,
    pointer_listeners: Vec<(&'static str, Closure<dyn FnMut(PointerEvent)>)>,
    wheel_listener: Closure<dyn FnMut(WheelEvent)>,
    resize_observer: ResizeObserver,
    _resize_callback: Closure<dyn FnMut(js_sys::Array)>,
    render_loop: RenderLoop,
}

impl Surface {
    /// Bind to a canvas element and start rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the `2d` context is unavailable, a listener or
    /// observer cannot be attached, or the first animation frame cannot be
    /// scheduled.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let engine = Rc::new(RefCell::new(Engine::new(canvas.clone())?));
        sync_geometry(&canvas, &engine);

        let mut pointer_listeners = Vec::with_capacity(5);

        let down = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |event: PointerEvent| {
                engine.borrow_mut().on_pointer_down(event_point(&event), Date::now());
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        attach(&canvas, "pointerdown", down.as_ref().unchecked_ref())?;
        pointer_listeners.push(("pointerdown", down));

        let moved = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |event: PointerEvent| {
                engine.borrow_mut().on_pointer_move(event_point(&event));
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        attach(&canvas, "pointermove", moved.as_ref().unchecked_ref())?;
        pointer_listeners.push(("pointermove", moved));

        let up = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |event: PointerEvent| {
                engine.borrow_mut().on_pointer_up(event_point(&event));
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        attach(&canvas, "pointerup", up.as_ref().unchecked_ref())?;
        pointer_listeners.push(("pointerup", up));

        let enter = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |_event: PointerEvent| {
                engine.borrow_mut().on_pointer_enter();
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        attach(&canvas, "pointerenter", enter.as_ref().unchecked_ref())?;
        pointer_listeners.push(("pointerenter", enter));

        let leave = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |event: PointerEvent| {
                engine.borrow_mut().on_pointer_leave(event_point(&event));
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        attach(&canvas, "pointerleave", leave.as_ref().unchecked_ref())?;
        pointer_listeners.push(("pointerleave", leave));

        let wheel_listener = {
            let engine = Rc::clone(&engine);
            Closure::wrap(Box::new(move |event: WheelEvent| {
                let delta = WheelDelta { dx: event.delta_x(), dy: event.delta_y() };
                engine.borrow_mut().on_wheel(delta);
            }) as Box<dyn FnMut(WheelEvent)>)
        };
        attach(&canvas, "wheel", wheel_listener.as_ref().unchecked_ref())?;

        let resize_callback = {
            let engine = Rc::clone(&engine);
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |_entries: js_sys::Array| {
                sync_geometry(&canvas, &engine);
            }) as Box<dyn FnMut(js_sys::Array)>)
        };
        let resize_observer = ResizeObserver::new(resize_callback.as_ref().unchecked_ref())
            .map_err(SurfaceError::from)?;
        resize_observer.observe(&canvas);

        let render_loop = RenderLoop::start(Rc::clone(&engine))?;
        log::debug!("surface mounted");

        Ok(Self {
            engine,
            canvas,
            pointer_listeners,
            wheel_listener,
            resize_observer,
            _resize_callback: resize_callback,
            render_loop,
        })
    }

    /// Shared handle to the engine, for hosts that drive it directly.
    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<Engine>> {
        Rc::clone(&self.engine)
    }

    // --- Delegated host operations ---

    pub fn load_snapshot(&self, shapes: Vec<Shape>) {
        self.engine.borrow_mut().load_snapshot(shapes);
    }

    pub fn recenter_viewport(&self) {
        self.engine.borrow_mut().recenter_viewport();
    }

    pub fn set_scale(&self, value: f64) {
        self.engine.borrow_mut().set_scale(value);
    }

    pub fn step_scale(&self, delta: f64) {
        self.engine.borrow_mut().step_scale(delta);
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        self.render_loop.cancel();
        self.resize_observer.disconnect();
        for (name, listener) in &self.pointer_listeners {
            detach(&self.canvas, name, listener.as_ref().unchecked_ref());
        }
        detach(&self.canvas, "wheel", self.wheel_listener.as_ref().unchecked_ref());
        log::debug!("surface unmounted");
    }
}

/// Cancellable handle around a self-rescheduling `requestAnimationFrame`
/// loop. The loop runs until [`RenderLoop::cancel`] or drop.
pub struct RenderLoop {
    window: web_sys::Window,
    active: Rc<Cell<bool>>,
    frame_id: Rc<Cell<i32>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RenderLoop {
    /// Render once per display frame, rescheduling after each pass.
    ///
    /// # Errors
    ///
    /// Returns an error if `window` is missing or the first frame cannot be
    /// scheduled.
    pub fn start(engine: Rc<RefCell<Engine>>) -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::WindowUnavailable)?;
        let active = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(0));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let callback = {
            let window = window.clone();
            let active = Rc::clone(&active);
            let frame_id = Rc::clone(&frame_id);
            let tick = Rc::clone(&tick);
            Closure::wrap(Box::new(move || {
                if !active.get() {
                    return;
                }
                if let Err(err) = engine.borrow_mut().render() {
                    log::warn!("render pass failed: {err:?}");
                }
                if let Some(next) = tick.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => frame_id.set(id),
                        Err(err) => log::warn!("failed to schedule next frame: {err:?}"),
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        // Scheduling before stashing is safe: the callback cannot fire until
        // this call stack unwinds.
        let first = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(SurfaceError::from)?;
        frame_id.set(first);
        *tick.borrow_mut() = Some(callback);

        Ok(Self { window, active, frame_id, _tick: tick })
    }

    /// Stop the loop and cancel the pending frame. Idempotent.
    pub fn cancel(&self) {
        if !self.active.get() {
            return;
        }
        self.active.set(false);
        if let Err(err) = self.window.cancel_animation_frame(self.frame_id.get()) {
            log::warn!("failed to cancel render loop: {err:?}");
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Recompute the surface geometry from the element's client bounds and size
/// the backing pixel buffer to match. Zero-size bounds are accepted; draws
/// against an empty buffer are no-ops.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sync_geometry(canvas: &HtmlCanvasElement, engine: &Rc<RefCell<Engine>>) {
    let rect = canvas.get_bounding_client_rect();
    let width = rect.width().max(0.0);
    let height = rect.height().max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    engine.borrow_mut().on_resize(rect.x(), rect.y(), width, height);
}

fn event_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn attach(
    canvas: &HtmlCanvasElement,
    name: &str,
    callback: &js_sys::Function,
) -> Result<(), SurfaceError> {
    canvas
        .add_event_listener_with_callback(name, callback)
        .map_err(SurfaceError::from)
}

fn detach(canvas: &HtmlCanvasElement, name: &str, callback: &js_sys::Function) {
    if let Err(err) = canvas.remove_event_listener_with_callback(name, callback) {
        log::warn!("failed to detach {name} listener: {err:?}");
    }
}
