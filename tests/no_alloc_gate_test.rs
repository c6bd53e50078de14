use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::{draw_scene, physics, Scene};
use tui_pong::input::paddle_directions;
use tui_pong::term::{Cell, FrameBuffer, Projection};
use tui_pong::types::{Color, InitError, Key, KeyState, Platform, PlatformEvent, Rect};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Draws into a preallocated framebuffer, like the terminal shim minus I/O.
struct FramePlatform {
    fb: FrameBuffer,
    projection: Projection,
}

impl Platform for FramePlatform {
    fn create_surface(&mut self, _: &str, _: i32, _: i32, _: u32, _: u32) -> Result<(), InitError> {
        Ok(())
    }
    fn create_renderer(&mut self) -> Result<(), InitError> {
        Ok(())
    }
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        None
    }
    fn key_state(&mut self) -> KeyState {
        KeyState::from_held(&[Key::S, Key::I])
    }
    fn clear(&mut self, color: Color) {
        self.fb.clear(Cell::solid(color));
    }
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = self.projection.cell_rect(rect) {
            self.fb.fill_rect(r.x, r.y, r.w, r.h, Cell::solid(color));
        }
    }
    fn present(&mut self) {}
    fn destroy_renderer(&mut self) {}
    fn destroy_surface(&mut self) {}
    fn shutdown(&mut self) {}
}

#[test]
fn tick_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut scene = Scene::default();
    let mut platform = FramePlatform {
        fb: FrameBuffer::new(80, 24),
        projection: Projection::new(80, 24, 1024.0, 768.0),
    };

    // Warm-up.
    physics::update(&mut scene, 0.016);
    draw_scene(&mut platform, &scene);

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            let keys = platform.key_state();
            scene.set_paddle_directions(paddle_directions(&keys));
            physics::update(&mut scene, 0.016);
            draw_scene(&mut platform, &scene);
        }
    });

    assert_eq!(allocs, 0);
}
