use std::collections::HashMap;
use std::hash::Hash;

/// Hooks attached to one state of a [`StateMachine`]. All three are optional
/// plain closures over the host's context type.
pub struct StateHooks<C> {
    on_enter: Option<Box<dyn FnMut(&mut C)>>,
    on_tick: Option<Box<dyn FnMut(&mut C, f32)>>,
    on_exit: Option<Box<dyn FnMut(&mut C)>>,
}

impl<C> StateHooks<C> {
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_tick: None,
            on_exit: None,
        }
    }

    pub fn on_enter(mut self, hook: impl FnMut(&mut C) + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn on_tick(mut self, hook: impl FnMut(&mut C, f32) + 'static) -> Self {
        self.on_tick = Some(Box::new(hook));
        self
    }

    pub fn on_exit(mut self, hook: impl FnMut(&mut C) + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }
}

impl<C> Default for StateHooks<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit finite-state machine driven by an ordinary host loop.
///
/// Each state exposes enter/tick/exit hooks as plain functions; the host calls
/// [`tick`](Self::tick) once per frame and [`transition`](Self::transition) to
/// change state. Transitioning to the current state re-enters it (exit, then
/// enter), matching the re-entry semantics of animation-driven state machines.
pub struct StateMachine<S, C> {
    current: S,
    hooks: HashMap<S, StateHooks<C>>,
}

impl<S, C> StateMachine<S, C>
where
    S: Copy + Eq + Hash,
{
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            hooks: HashMap::new(),
        }
    }

    pub fn insert(&mut self, state: S, hooks: StateHooks<C>) {
        self.hooks.insert(state, hooks);
    }

    pub fn current(&self) -> S {
        self.current
    }

    /// Runs the initial state's enter hook. Call once before the first tick.
    pub fn start(&mut self, ctx: &mut C) {
        if let Some(hooks) = self.hooks.get_mut(&self.current) {
            if let Some(on_enter) = hooks.on_enter.as_mut() {
                on_enter(ctx);
            }
        }
    }

    pub fn tick(&mut self, ctx: &mut C, dt: f32) {
        if let Some(hooks) = self.hooks.get_mut(&self.current) {
            if let Some(on_tick) = hooks.on_tick.as_mut() {
                on_tick(ctx, dt);
            }
        }
    }

    pub fn transition(&mut self, next: S, ctx: &mut C) {
        if let Some(hooks) = self.hooks.get_mut(&self.current) {
            if let Some(on_exit) = hooks.on_exit.as_mut() {
                on_exit(ctx);
            }
        }
        self.current = next;
        if let Some(hooks) = self.hooks.get_mut(&self.current) {
            if let Some(on_enter) = hooks.on_enter.as_mut() {
                on_enter(ctx);
            }
        }
    }
}
