//! Scripted in-memory platform shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tui_pong::types::{Color, InitError, Key, KeyState, Platform, PlatformEvent, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateSurface { title: String, width: u32, height: u32 },
    CreateRenderer,
    PollEvent,
    KeyState,
    Clear(Color),
    FillRect(Rect),
    Present,
    DestroyRenderer,
    DestroySurface,
    Shutdown,
}

#[derive(Debug, Default)]
pub struct Script {
    pub calls: Vec<Call>,
    pub events: VecDeque<PlatformEvent>,
    pub keys: KeyState,
    pub fail_surface: Option<String>,
    pub fail_renderer: Option<String>,
}

/// Handle kept by the test to script input and inspect calls while the game
/// owns the platform.
#[derive(Debug, Clone, Default)]
pub struct ScriptHandle(Rc<RefCell<Script>>);

impl ScriptHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self) -> ScriptedPlatform {
        ScriptedPlatform {
            script: self.0.clone(),
        }
    }

    pub fn hold(&self, keys: &[Key]) {
        self.0.borrow_mut().keys = KeyState::from_held(keys);
    }

    pub fn push_event(&self, event: PlatformEvent) {
        self.0.borrow_mut().events.push_back(event);
    }

    pub fn fail_surface(&self, msg: &str) {
        self.0.borrow_mut().fail_surface = Some(msg.to_string());
    }

    pub fn fail_renderer(&self, msg: &str) {
        self.0.borrow_mut().fail_renderer = Some(msg.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut self.0.borrow_mut().calls)
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub fn pending_events(&self) -> usize {
        self.0.borrow().events.len()
    }
}

pub struct ScriptedPlatform {
    script: Rc<RefCell<Script>>,
}

impl ScriptedPlatform {
    fn log(&self, call: Call) {
        self.script.borrow_mut().calls.push(call);
    }
}

impl Platform for ScriptedPlatform {
    fn create_surface(
        &mut self,
        title: &str,
        _x: i32,
        _y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), InitError> {
        self.log(Call::CreateSurface {
            title: title.to_string(),
            width,
            height,
        });
        match self.script.borrow().fail_surface.clone() {
            Some(msg) => Err(InitError::Surface(msg)),
            None => Ok(()),
        }
    }

    fn create_renderer(&mut self) -> Result<(), InitError> {
        self.log(Call::CreateRenderer);
        match self.script.borrow().fail_renderer.clone() {
            Some(msg) => Err(InitError::Renderer(msg)),
            None => Ok(()),
        }
    }

    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.log(Call::PollEvent);
        self.script.borrow_mut().events.pop_front()
    }

    fn key_state(&mut self) -> KeyState {
        self.log(Call::KeyState);
        self.script.borrow().keys
    }

    fn clear(&mut self, color: Color) {
        self.log(Call::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.log(Call::FillRect(rect));
    }

    fn present(&mut self) {
        self.log(Call::Present);
    }

    fn destroy_renderer(&mut self) {
        self.log(Call::DestroyRenderer);
    }

    fn destroy_surface(&mut self) {
        self.log(Call::DestroySurface);
    }

    fn shutdown(&mut self) {
        self.log(Call::Shutdown);
    }
}
