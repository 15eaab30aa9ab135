//! Actions and the chains that link them
//!
//! A [`Chain`] is a singly-linked list of boxed [`Action`]s. Executing a node
//! hands its action a [`Next`] pointing at the successor; the action decides
//! where the rest of the chain runs relative to its own work (before it, after
//! it, or inside a scope it opened). An action that never runs `next` cuts the
//! chain short.

use std::fmt;

use crate::error::{ChainError, Result};
use crate::state::RenderState;

/// One drawing or state-changing step
///
/// The default `execute` does nothing but forward to the successor.
pub trait Action: fmt::Debug {
    /// Short stable name used in logs and errors
    fn name(&self) -> &'static str;

    /// Do this action's work and run the rest of the chain via `next`
    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        next.run(state)
    }
}

/// The remainder of a chain after the executing node
#[must_use = "actions must run their successor for the rest of the chain to draw"]
#[derive(Clone, Copy, Debug)]
pub struct Next<'c> {
    node: Option<&'c Chain>,
}

impl<'c> Next<'c> {
    /// A continuation with nothing after it
    pub fn end() -> Self {
        Self { node: None }
    }

    /// Run the rest of the chain; a no-op at the end of the chain
    pub fn run(self, state: &mut RenderState<'_>) -> Result<()> {
        match self.node {
            Some(node) => node.execute(state),
            None => Ok(()),
        }
    }

    /// True when this is the end of the chain
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

/// A linked sequence of actions
#[derive(Debug)]
pub struct Chain {
    action: Box<dyn Action>,
    next: Option<Box<Chain>>,
}

impl Chain {
    /// A single-node chain
    pub fn new(action: impl Action + 'static) -> Self {
        Self::boxed(Box::new(action))
    }

    pub fn boxed(action: Box<dyn Action>) -> Self {
        Self { action, next: None }
    }

    /// Build a chain running `actions` in order
    pub fn from_actions<I>(actions: I) -> std::result::Result<Self, ChainError>
    where
        I: IntoIterator<Item = Box<dyn Action>>,
    {
        let mut actions: Vec<_> = actions.into_iter().collect();
        let mut chain = Self::boxed(actions.pop().ok_or(ChainError::Empty)?);
        while let Some(action) = actions.pop() {
            chain = Self {
                action,
                next: Some(Box::new(chain)),
            };
        }
        Ok(chain)
    }

    /// Append `action` at the tail, builder style
    pub fn then(mut self, action: impl Action + 'static) -> Self {
        self.append(Chain::new(action));
        self
    }

    /// Attach `chain` after the current tail
    ///
    /// Appending to a single node sets its successor; appending to a longer
    /// chain walks to the end first.
    pub fn append(&mut self, chain: impl Into<Chain>) -> &mut Self {
        let mut tail = &mut self.next;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(chain.into()));
        self
    }

    pub fn action(&self) -> &dyn Action {
        self.action.as_ref()
    }

    pub fn successor(&self) -> Option<&Chain> {
        self.next.as_deref()
    }

    /// Number of nodes, this one included
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Actions in execution order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Action> + '_ {
        std::iter::successors(Some(self), |node| node.next.as_deref()).map(Chain::action)
    }

    /// Names of the actions in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Action::name).collect()
    }

    /// Execute this node; the successor runs wherever the action puts it
    pub fn execute(&self, state: &mut RenderState<'_>) -> Result<()> {
        state.enter_action(self.action.name());
        self.action.execute(
            state,
            Next {
                node: self.next.as_deref(),
            },
        )
    }
}

impl<A: Action + 'static> From<A> for Chain {
    fn from(action: A) -> Self {
        Chain::new(action)
    }
}

/// Does nothing but run its successor
#[derive(Clone, Copy, Debug, Default)]
pub struct Forward;

impl Action for Forward {
    fn name(&self) -> &'static str {
        "forward"
    }
}
