//! In-memory fakes for the docking collaborators.

use std::cell::Cell;
use std::sync::mpsc::Receiver;

use crate::dock::{DockClient, Registration, RepositionNotifier, ShellService};
use crate::error::{HoleError, HoleResult};
use crate::event::RepositionRequested;
use crate::window::{StripWindow, WindowResult};
use crate::{Edge, Rect};

pub(crate) const FAKE_HWND: usize = 0xBEEF;
pub(crate) const FAKE_MESSAGE: u32 = 0xC123;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShellCall {
    MessageName(String),
    Register(u32),
    Query(Edge, Rect),
    Commit(Edge, Rect),
    Unregister,
}

/// Records every shell call. Queries answer with `query_result` when set,
/// otherwise they echo the proposal; commits always echo.
#[derive(Default)]
pub(crate) struct FakeShell {
    pub calls: Vec<ShellCall>,
    pub deny_registration: bool,
    pub fail_query: bool,
    pub query_result: Option<Rect>,
    pub notifier: Option<RepositionNotifier>,
}

impl FakeShell {
    pub fn count(&self, pred: impl Fn(&ShellCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl ShellService for FakeShell {
    fn window(&self) -> usize {
        FAKE_HWND
    }

    fn register_message_name(&mut self, name: &str) -> HoleResult<u32> {
        self.calls.push(ShellCall::MessageName(name.to_string()));
        Ok(FAKE_MESSAGE)
    }

    fn register(&mut self, callback_message: u32, notifier: RepositionNotifier) -> HoleResult<()> {
        self.calls.push(ShellCall::Register(callback_message));
        if self.deny_registration {
            return Err(HoleError::RegistrationDenied("denied by fake shell".into()));
        }
        self.notifier = Some(notifier);
        Ok(())
    }

    fn query_position(&mut self, edge: Edge, proposed: Rect) -> HoleResult<Rect> {
        self.calls.push(ShellCall::Query(edge, proposed));
        if self.fail_query {
            return Err(HoleError::NegotiationFailed("query ignored".into()));
        }
        Ok(self.query_result.unwrap_or(proposed))
    }

    fn commit_position(&mut self, edge: Edge, rect: Rect) -> HoleResult<Rect> {
        self.calls.push(ShellCall::Commit(edge, rect));
        Ok(rect)
    }

    fn unregister(&mut self) -> HoleResult<()> {
        self.calls.push(ShellCall::Unregister);
        self.notifier = None;
        Ok(())
    }
}

/// A [`DockClient`] that echoes proposed rectangles back as committed.
pub(crate) struct FakeDockClient {
    pub registration: Option<Registration>,
    pub register_calls: usize,
    pub unregister_calls: usize,
    pub negotiations: Vec<(Rect, Edge, i32)>,
    pub deny_registration: bool,
    pub fail_negotiation: bool,
    pub notifier: RepositionNotifier,
    events: Option<Receiver<RepositionRequested>>,
}

impl FakeDockClient {
    pub fn new() -> Self {
        let (notifier, events) = RepositionNotifier::channel();
        Self {
            registration: None,
            register_calls: 0,
            unregister_calls: 0,
            negotiations: Vec::new(),
            deny_registration: false,
            fail_negotiation: false,
            notifier,
            events: Some(events),
        }
    }
}

impl DockClient for FakeDockClient {
    fn register(&mut self) -> HoleResult<Registration> {
        if let Some(registration) = self.registration {
            return Ok(registration);
        }
        self.register_calls += 1;
        if self.deny_registration {
            return Err(HoleError::RegistrationDenied("denied".into()));
        }
        let registration = Registration {
            window: FAKE_HWND,
            callback_message: FAKE_MESSAGE,
        };
        self.registration = Some(registration);
        Ok(registration)
    }

    fn negotiate(&mut self, desired: Rect, edge: Edge, thickness: i32) -> HoleResult<Rect> {
        if self.registration.is_none() {
            return Err(HoleError::NotRegistered);
        }
        self.negotiations.push((desired, edge, thickness));
        if self.fail_negotiation {
            return Err(HoleError::NegotiationFailed("commit ignored".into()));
        }
        Ok(desired)
    }

    fn unregister(&mut self) -> HoleResult<()> {
        if self.registration.take().is_some() {
            self.unregister_calls += 1;
        }
        Ok(())
    }

    fn registration(&self) -> Option<Registration> {
        self.registration
    }

    fn take_reposition_events(&mut self) -> Option<Receiver<RepositionRequested>> {
        self.events.take()
    }
}

/// A strip window that remembers its bounds.
///
/// When `echo` is set, every `set_rect` also raises a reposition
/// request, the way the OS reacts to a docked bar changing size. When
/// `fail_set` is set, `set_rect` fails without moving.
#[derive(Default)]
pub(crate) struct FakeWindow {
    pub bounds: Rect,
    pub set_calls: Vec<Rect>,
    pub visible: Cell<bool>,
    pub fail_set: bool,
    pub echo: Option<RepositionNotifier>,
}

impl StripWindow for FakeWindow {
    fn rect(&self) -> WindowResult<Rect> {
        Ok(self.bounds)
    }

    fn set_rect(&mut self, rect: &Rect) -> WindowResult<()> {
        if self.fail_set {
            return Err("window is gone".into());
        }
        self.bounds = *rect;
        self.set_calls.push(*rect);
        if let Some(echo) = &self.echo {
            echo.notify();
        }
        Ok(())
    }

    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }
}
