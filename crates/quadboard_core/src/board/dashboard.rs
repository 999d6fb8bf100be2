//! Board composition: four quadrant stores and the view toggle.
//!
//! # Responsibility
//! - Own one independent `QuadrantStore` per priority quadrant.
//! - Hold the single board-level display-mode toggle.
//!
//! # Invariants
//! - Quadrant stores never share list state; only the gateway handle is
//!   shared between them.

use crate::board::quadrant::QuadrantStore;
use crate::gateway::TodoGateway;
use crate::model::task::{Priority, UserId};
use std::sync::Arc;

/// Which surface the board is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardView {
    /// The four-quadrant task matrix.
    #[default]
    Tasks,
    /// The focus-timer surface.
    Timer,
}

/// The whole board: four quadrants plus the display-mode toggle.
pub struct Board<G: TodoGateway> {
    quadrants: [QuadrantStore<G>; 4],
    view: BoardView,
}

impl<G: TodoGateway> Board<G> {
    /// Builds an empty board for `user`, wiring the shared gateway handle
    /// into each quadrant.
    pub fn new(user: UserId, gateway: Arc<G>) -> Self {
        let quadrants = Priority::ALL.map(|priority| {
            QuadrantStore::new(priority, user.clone(), Arc::clone(&gateway))
        });
        Self {
            quadrants,
            view: BoardView::default(),
        }
    }

    pub fn quadrant(&self, priority: Priority) -> &QuadrantStore<G> {
        &self.quadrants[quadrant_index(priority)]
    }

    pub fn quadrant_mut(&mut self, priority: Priority) -> &mut QuadrantStore<G> {
        &mut self.quadrants[quadrant_index(priority)]
    }

    /// Quadrants in board reading order.
    pub fn quadrants(&self) -> &[QuadrantStore<G>; 4] {
        &self.quadrants
    }

    pub fn view(&self) -> BoardView {
        self.view
    }

    /// Flips between the task matrix and the timer surface.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            BoardView::Tasks => BoardView::Timer,
            BoardView::Timer => BoardView::Tasks,
        };
    }
}

fn quadrant_index(priority: Priority) -> usize {
    usize::from(priority.code()) - 1
}
